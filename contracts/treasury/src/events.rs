use soroban_sdk::{symbol_short, Address, Env, Vec};

pub struct TreasuryEvents;

impl TreasuryEvents {
    /// Emits an `init` event once the approver registry is fixed.
    ///
    /// Topics: `("init",)`
    /// Data:   `(token, approvers, threshold)`
    pub fn initialized(env: &Env, token: &Address, approvers: &Vec<Address>, threshold: u32) {
        env.events()
            .publish((symbol_short!("init"),), (token.clone(), approvers.clone(), threshold));
    }

    /// Topics: `("deposit", from)`
    /// Data:   `amount`
    pub fn deposit(env: &Env, from: &Address, amount: i128) {
        env.events().publish((symbol_short!("deposit"), from), amount);
    }

    /// Emitted when `caller`'s approval is recorded on a request, including
    /// repeated approvals that leave the set unchanged.
    ///
    /// Topics: `("approved", request_id)`
    /// Data:   `(caller, first_approval)`; `first_approval` is `false` for a
    /// repeat by the same approver.
    pub fn approved(env: &Env, request_id: u64, caller: &Address, first_approval: bool) {
        env.events()
            .publish((symbol_short!("approved"), request_id), (caller.clone(), first_approval));
    }

    /// One record per approver visited by the recount.
    ///
    /// Topics: `("tally", request_id)`
    /// Data:   `(index, running_count, caller, approver, approved)`
    pub fn tally(
        env: &Env,
        request_id: u64,
        index: u32,
        running_count: u32,
        caller: &Address,
        approver: &Address,
        approved: bool,
    ) {
        env.events().publish(
            (symbol_short!("tally"), request_id),
            (index, running_count, caller.clone(), approver.clone(), approved),
        );
    }

    /// Topics: `("found", request_id)`
    /// Data:   `(index, approver, running_count)`
    pub fn approval_found(
        env: &Env,
        request_id: u64,
        index: u32,
        approver: &Address,
        running_count: u32,
    ) {
        env.events().publish(
            (symbol_short!("found"), request_id),
            (index, approver.clone(), running_count),
        );
    }

    /// Emitted the moment the threshold is crossed, before the transfer.
    ///
    /// Topics: `("settled", request_id)`
    /// Data:   `(count, destination, amount)`
    pub fn settled(env: &Env, request_id: u64, count: u32, destination: &Address, amount: i128) {
        env.events().publish(
            (symbol_short!("settled"), request_id),
            (count, destination.clone(), amount),
        );
    }
}
