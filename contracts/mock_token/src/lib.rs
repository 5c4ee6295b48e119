#![no_std]

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod test;

use soroban_sdk::{
    contract, contractclient, contracterror, contractimpl, contracttype, Address, Env,
};
use soroban_token_sdk::TokenUtils;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockTokenError {
    AlreadyInitialized = 500,
    NotInitialized = 501,
    InsufficientBalance = 502,
    InvalidAmount = 503,
    Frozen = 504,
    Overflow = 505,
}

/// The slice of the treasury interface the re-entrant mode calls back into.
#[contractclient(name = "TreasuryClient")]
pub trait TreasuryInterface {
    fn request_and_approve(
        env: Env,
        caller: Address,
        destination: Address,
        amount: i128,
        request_id: u64,
    ) -> i128;
}

/// Call replayed into `treasury` the next time it pays out through this
/// token.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReentryCall {
    pub treasury: Address,
    pub caller: Address,
    pub destination: Address,
    pub amount: i128,
    pub request_id: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum MockTokenKey {
    Admin,
    Frozen,
    Balance(Address),
    Reentry,
    ReentryOutcome,
}

/// SEP-41 subset token with two hostile modes, used to drive payout
/// failures in tests:
///
/// - `set_frozen(true)` makes every transfer revert the way an
///   unresponsive or rejecting destination would.
/// - `set_reentry(call)` makes the next transfer out of `call.treasury`
///   call `request_and_approve` back on the treasury before moving funds.
///   Whether that call went through is readable via `reentry_outcome`.
#[contract]
pub struct MockToken;

fn admin(env: &Env) -> Result<Address, MockTokenError> {
    env.storage()
        .instance()
        .get(&MockTokenKey::Admin)
        .ok_or(MockTokenError::NotInitialized)
}

fn read_balance(env: &Env, id: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&MockTokenKey::Balance(id.clone()))
        .unwrap_or(0)
}

fn write_balance(env: &Env, id: &Address, amount: i128) {
    env.storage().persistent().set(&MockTokenKey::Balance(id.clone()), &amount);
}

fn credit(env: &Env, id: &Address, amount: i128) -> Result<(), MockTokenError> {
    let balance = read_balance(env, id)
        .checked_add(amount)
        .ok_or(MockTokenError::Overflow)?;
    write_balance(env, id, balance);
    Ok(())
}

/// Fires the armed re-entrant call once, if `from` is the armed treasury.
fn reenter(env: &Env, from: &Address) {
    let call: Option<ReentryCall> = env.storage().instance().get(&MockTokenKey::Reentry);
    let Some(call) = call else {
        return;
    };
    if &call.treasury != from {
        return;
    }
    env.storage().instance().remove(&MockTokenKey::Reentry);

    let result = TreasuryClient::new(env, &call.treasury).try_request_and_approve(
        &call.caller,
        &call.destination,
        &call.amount,
        &call.request_id,
    );
    let succeeded = matches!(result, Ok(Ok(_)));
    env.storage().instance().set(&MockTokenKey::ReentryOutcome, &succeeded);
}

#[contractimpl]
impl MockToken {
    pub fn initialize(env: Env, admin: Address) -> Result<(), MockTokenError> {
        if env.storage().instance().has(&MockTokenKey::Admin) {
            return Err(MockTokenError::AlreadyInitialized);
        }
        env.storage().instance().set(&MockTokenKey::Admin, &admin);
        Ok(())
    }

    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), MockTokenError> {
        let admin = admin(&env)?;
        admin.require_auth();
        if amount < 0 {
            return Err(MockTokenError::InvalidAmount);
        }
        credit(&env, &to, amount)?;
        TokenUtils::new(&env).events().mint(admin, to, amount);
        Ok(())
    }

    pub fn set_frozen(env: Env, frozen: bool) -> Result<(), MockTokenError> {
        admin(&env)?.require_auth();
        env.storage().instance().set(&MockTokenKey::Frozen, &frozen);
        Ok(())
    }

    pub fn set_reentry(env: Env, call: ReentryCall) -> Result<(), MockTokenError> {
        admin(&env)?.require_auth();
        env.storage().instance().set(&MockTokenKey::Reentry, &call);
        env.storage().instance().remove(&MockTokenKey::ReentryOutcome);
        Ok(())
    }

    /// `None` until an armed re-entrant call has fired; then whether it
    /// succeeded.
    pub fn reentry_outcome(env: Env) -> Option<bool> {
        env.storage().instance().get(&MockTokenKey::ReentryOutcome)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), MockTokenError> {
        from.require_auth();

        let frozen: bool = env.storage().instance().get(&MockTokenKey::Frozen).unwrap_or(false);
        if frozen {
            return Err(MockTokenError::Frozen);
        }
        if amount < 0 {
            return Err(MockTokenError::InvalidAmount);
        }

        reenter(&env, &from);

        let from_balance = read_balance(&env, &from);
        if from_balance < amount {
            return Err(MockTokenError::InsufficientBalance);
        }
        write_balance(&env, &from, from_balance - amount);
        credit(&env, &to, amount)?;

        TokenUtils::new(&env).events().transfer(from, to, amount);
        Ok(())
    }
}
