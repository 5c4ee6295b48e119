use soroban_sdk::{Address, Env};

use crate::{
    errors::TreasuryError,
    events::TreasuryEvents,
    ledger, reentrancy, registry, requests,
    storage::{ApprovalRequest, TreasuryConfig},
    transfer,
};

/// Outcome of a recount over the approver registry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tally {
    pub count: u32,
    pub reached: bool,
}

/// Records `caller`'s approval of withdrawal `request_id` and settles the
/// request if this approval brings it to the threshold.
///
/// # Flow
/// 1. **Checks** (no state mutation): caller is an approver, the request
///    is not settled, the request amount is covered by the pool, and an
///    initialized request matches the supplied destination and amount.
/// 2. **Lock**: per-request lock, first state write.
/// 3. **Effects**: initialize the record (first writer wins) and record
///    the approval.
/// 4. **Recount** in registry order, stopping at the threshold.
/// 5. **Settle**: debit the ledger and mark the request sent, persisted
///    together before the outbound call.
/// 6. **Interact**: transfer `amount` to `destination`.
/// 7. **Release lock**.
///
/// Returns the pool balance after the call, unchanged unless this call
/// settled the request.
///
/// # Errors
/// | Error                 | Condition                                         |
/// |-----------------------|---------------------------------------------------|
/// | `NotInitialized`      | Treasury has no registry yet                      |
/// | `InvalidAmount`       | `amount` is negative                              |
/// | `Unauthorized`        | `caller` is not a configured approver             |
/// | `AlreadySettled`      | Request already paid out                          |
/// | `InsufficientFunds`   | Request amount exceeds the pool balance           |
/// | `DestinationMismatch` | `destination` differs from the stored one         |
/// | `AmountMismatch`      | `amount` differs from the stored one              |
/// | `Locked`              | Request is mid-settlement (reentrant call)        |
/// | `TransferFailed`      | Token transfer failed; all effects roll back      |
pub fn request_and_approve(
    env: &Env,
    caller: &Address,
    destination: &Address,
    amount: i128,
    request_id: u64,
) -> Result<i128, TreasuryError> {
    // -----------------------------------------------------------------------
    // 1. Checks
    // -----------------------------------------------------------------------

    let config = registry::load(env)?;
    caller.require_auth();

    if amount < 0 {
        return Err(TreasuryError::InvalidAmount);
    }

    if !registry::is_approver(&config, caller) {
        return Err(TreasuryError::Unauthorized);
    }

    let mut request = requests::get_or_create(env, request_id);

    // Replays are reported as such even once the pool has drained below
    // the settled amount.
    if request.sent {
        return Err(TreasuryError::AlreadySettled);
    }

    // An unseen request is checked against the amount it is about to be
    // created with; afterwards stored and supplied amounts are equal.
    let pending_amount = if request.initialized { request.amount } else { amount };
    if pending_amount > ledger::balance(env) {
        return Err(TreasuryError::InsufficientFunds);
    }

    if request.initialized {
        if request.destination.as_ref() != Some(destination) {
            return Err(TreasuryError::DestinationMismatch);
        }
        if request.amount != amount {
            return Err(TreasuryError::AmountMismatch);
        }
    }

    // -----------------------------------------------------------------------
    // 2. Lock
    // -----------------------------------------------------------------------

    reentrancy::acquire(env, request_id)?;

    // -----------------------------------------------------------------------
    // 3. Record approval
    // -----------------------------------------------------------------------

    requests::initialize(&mut request, destination, amount);
    let first_approval = requests::record_approval(&mut request, caller);
    TreasuryEvents::approved(env, request_id, caller, first_approval);

    // -----------------------------------------------------------------------
    // 4. Recount
    // -----------------------------------------------------------------------

    let tally = tally(env, &config, &request, request_id, caller);

    if !tally.reached {
        requests::save(env, request_id, &request)?;
        reentrancy::release(env, request_id);
        return Ok(ledger::balance(env));
    }

    // -----------------------------------------------------------------------
    // 5. Settle: debit and mark sent before the outbound call
    // -----------------------------------------------------------------------

    let new_balance = ledger::debit(env, request.amount)?;
    request.sent = true;
    requests::save(env, request_id, &request)?;
    TreasuryEvents::settled(env, request_id, tally.count, destination, request.amount);

    // -----------------------------------------------------------------------
    // 6. Transfer
    // -----------------------------------------------------------------------

    transfer::send(env, &config.token, destination, request.amount)?;

    // -----------------------------------------------------------------------
    // 7. Release lock
    // -----------------------------------------------------------------------

    reentrancy::release(env, request_id);

    Ok(new_balance)
}

/// Counts approvals by walking the registry in order, emitting an audit
/// record per approver visited. Stops as soon as the running count reaches
/// the threshold; with a zero threshold nothing is visited.
pub fn tally(
    env: &Env,
    config: &TreasuryConfig,
    request: &ApprovalRequest,
    request_id: u64,
    caller: &Address,
) -> Tally {
    let mut count = 0u32;
    if count >= config.threshold {
        return Tally { count, reached: true };
    }

    for (index, approver) in registry::approvers_in_order(config).iter().enumerate() {
        let index = index as u32;
        let approved = requests::has_approved(request, &approver);
        TreasuryEvents::tally(env, request_id, index, count, caller, &approver, approved);

        if approved {
            count += 1;
            TreasuryEvents::approval_found(env, request_id, index, &approver, count);
            if count >= config.threshold {
                return Tally { count, reached: true };
            }
        }
    }

    Tally { count, reached: false }
}

/// Number of registry members that have approved `request`, without early
/// exit or audit events.
pub fn approval_count(config: &TreasuryConfig, request: &ApprovalRequest) -> u32 {
    registry::approvers_in_order(config)
        .iter()
        .filter(|approver| requests::has_approved(request, approver))
        .count() as u32
}
