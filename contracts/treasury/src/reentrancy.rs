use soroban_sdk::Env;

use crate::{
    errors::TreasuryError,
    storage::{is_locked, set_locked},
};

/// Acquires the exclusive lock for `request_id`. Reverts with `Locked` if
/// already held.
///
/// Taken after validation and held across settlement and the outbound
/// transfer, so a token that calls back into the treasury for the same
/// request cannot reach the effects a second time. Soroban rolls back all
/// state on a failed invocation, so every error path releases the lock.
pub fn acquire(env: &Env, request_id: u64) -> Result<(), TreasuryError> {
    if is_locked(env, request_id) {
        return Err(TreasuryError::Locked);
    }
    set_locked(env, request_id, true);
    Ok(())
}

/// Releases the lock for `request_id` on the happy path.
pub fn release(env: &Env, request_id: u64) {
    set_locked(env, request_id, false);
}
