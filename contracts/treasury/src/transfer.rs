use soroban_sdk::{log, token::TokenClient, Address, Env};

use crate::errors::TreasuryError;

/// Moves `amount` of `token` from the treasury to `destination`.
///
/// Uses the fallible client so that a reverting or trapping token surfaces
/// as `TransferFailed` instead of an opaque host error. The caller returns
/// that error, which rolls back the settlement effects committed before
/// this call.
pub fn send(
    env: &Env,
    token: &Address,
    destination: &Address,
    amount: i128,
) -> Result<(), TreasuryError> {
    if amount == 0 {
        return Ok(());
    }

    let contract = env.current_contract_address();
    match TokenClient::new(env, token).try_transfer(&contract, destination, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "treasury transfer failed", destination.clone(), amount);
            Err(TreasuryError::TransferFailed)
        }
    }
}
