//! Aggregate pool balance shared by the deposit and withdrawal paths.

use soroban_sdk::Env;

use crate::{
    errors::TreasuryError,
    storage::{get_balance, set_balance},
};

pub fn balance(env: &Env) -> i128 {
    get_balance(env)
}

/// Credits a deposit and returns the new balance.
pub fn credit(env: &Env, amount: i128) -> Result<i128, TreasuryError> {
    if amount < 0 {
        return Err(TreasuryError::InvalidAmount);
    }
    let new_balance = get_balance(env)
        .checked_add(amount)
        .ok_or(TreasuryError::Overflow)?;
    set_balance(env, new_balance);
    Ok(new_balance)
}

/// Debits a settled withdrawal and returns the new balance. Never goes
/// below zero.
pub fn debit(env: &Env, amount: i128) -> Result<i128, TreasuryError> {
    if amount < 0 {
        return Err(TreasuryError::InvalidAmount);
    }
    let current = get_balance(env);
    if amount > current {
        return Err(TreasuryError::InsufficientFunds);
    }
    let new_balance = current - amount;
    set_balance(env, new_balance);
    Ok(new_balance)
}
