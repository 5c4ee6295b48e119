use soroban_sdk::{Address, Env, Vec};

use crate::{
    errors::TreasuryError,
    storage::{get_config, TreasuryConfig},
};

/// Upper bound on the approver list; the recount walks it on every call.
pub const MAX_APPROVERS: u32 = 20;

/// Validates and builds the approver registry.
///
/// Fails with `TooManyApprovers` above `MAX_APPROVERS`, `InvalidThreshold`
/// when `threshold > approvers.len()` and `DuplicateApprover` when an
/// identity is listed twice (it would be counted twice by the recount).
pub fn new(
    token: Address,
    approvers: Vec<Address>,
    threshold: u32,
) -> Result<TreasuryConfig, TreasuryError> {
    if approvers.len() > MAX_APPROVERS {
        return Err(TreasuryError::TooManyApprovers);
    }
    if threshold > approvers.len() {
        return Err(TreasuryError::InvalidThreshold);
    }
    for (index, approver) in approvers.iter().enumerate() {
        if approvers.first_index_of(&approver) != Some(index as u32) {
            return Err(TreasuryError::DuplicateApprover);
        }
    }

    Ok(TreasuryConfig { token, approvers, threshold })
}

pub fn load(env: &Env) -> Result<TreasuryConfig, TreasuryError> {
    get_config(env).ok_or(TreasuryError::NotInitialized)
}

pub fn is_approver(config: &TreasuryConfig, id: &Address) -> bool {
    config.approvers.contains(id)
}

/// Approvers in construction order. The recount iterates this order, so it
/// decides which approver is reported as the one crossing the threshold.
pub fn approvers_in_order(config: &TreasuryConfig) -> Vec<Address> {
    config.approvers.clone()
}
