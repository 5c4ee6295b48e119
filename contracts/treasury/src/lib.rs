#![no_std]

mod errors;
mod events;
mod ledger;
mod reentrancy;
mod registry;
mod requests;
mod storage;
mod transfer;
mod withdrawal;

#[cfg(test)]
extern crate std; // soroban-sdk testutils require std; treasury is no_std so we must opt-in explicitly.

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, token::TokenClient, Address, Env, Vec};

pub use errors::TreasuryError;
pub use storage::ApprovalRequest;

use events::TreasuryEvents;

/// Shared custodial pool. Deposits are pooled without tracking depositors;
/// withdrawals are released once `threshold` distinct approvers have
/// endorsed the same request.
#[contract]
pub struct Treasury;

#[contractimpl]
impl Treasury {
    /// Fixes the pooled token, the ordered approver list and the approval
    /// threshold. Can only be called once.
    pub fn initialize(
        env: Env,
        token: Address,
        approvers: Vec<Address>,
        threshold: u32,
    ) -> Result<(), TreasuryError> {
        if storage::has_config(&env) {
            return Err(TreasuryError::AlreadyInitialized);
        }

        let config = registry::new(token, approvers, threshold)?;
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);

        TreasuryEvents::initialized(&env, &config.token, &config.approvers, config.threshold);
        Ok(())
    }

    /// Pulls `amount` of the pooled token from `from` and credits the pool.
    /// Returns the new pool balance.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<i128, TreasuryError> {
        let config = registry::load(&env)?;
        from.require_auth();

        if amount <= 0 {
            return Err(TreasuryError::InvalidAmount);
        }

        TokenClient::new(&env, &config.token).transfer(
            &from,
            &env.current_contract_address(),
            &amount,
        );
        let new_balance = ledger::credit(&env, amount)?;
        storage::extend_instance_ttl(&env);

        TreasuryEvents::deposit(&env, &from, amount);
        Ok(new_balance)
    }

    /// Approves withdrawal `request_id` of `amount` to `destination` on
    /// behalf of `caller`, paying it out once the threshold is reached.
    /// Returns the pool balance after the call.
    pub fn request_and_approve(
        env: Env,
        caller: Address,
        destination: Address,
        amount: i128,
        request_id: u64,
    ) -> Result<i128, TreasuryError> {
        let balance =
            withdrawal::request_and_approve(&env, &caller, &destination, amount, request_id)?;
        storage::extend_instance_ttl(&env);
        Ok(balance)
    }

    pub fn balance(env: Env) -> i128 {
        ledger::balance(&env)
    }

    pub fn token(env: Env) -> Result<Address, TreasuryError> {
        Ok(registry::load(&env)?.token)
    }

    pub fn approvers(env: Env) -> Result<Vec<Address>, TreasuryError> {
        Ok(registry::approvers_in_order(&registry::load(&env)?))
    }

    pub fn threshold(env: Env) -> Result<u32, TreasuryError> {
        Ok(registry::load(&env)?.threshold)
    }

    pub fn is_approver(env: Env, id: Address) -> bool {
        registry::load(&env)
            .map(|config| registry::is_approver(&config, &id))
            .unwrap_or(false)
    }

    pub fn get_request(env: Env, request_id: u64) -> Option<ApprovalRequest> {
        requests::get(&env, request_id)
    }

    /// Distinct registry members that have approved `request_id`.
    pub fn approval_count(env: Env, request_id: u64) -> Result<u32, TreasuryError> {
        let config = registry::load(&env)?;
        Ok(requests::get(&env, request_id)
            .map(|request| withdrawal::approval_count(&config, &request))
            .unwrap_or(0))
    }

    pub fn has_approved(env: Env, request_id: u64, approver: Address) -> bool {
        requests::get(&env, request_id)
            .map(|request| requests::has_approved(&request, &approver))
            .unwrap_or(false)
    }

    /// Suggested request id for a withdrawal intent. Callers that pick ids
    /// this way avoid sharing an id between unrelated withdrawals.
    pub fn derive_request_id(env: Env, destination: Address, amount: i128, nonce: u64) -> u64 {
        requests::derive_request_id(&env, &destination, amount, nonce)
    }
}
