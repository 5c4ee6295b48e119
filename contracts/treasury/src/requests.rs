use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env, Vec};

use crate::{
    errors::TreasuryError,
    storage::{self, ApprovalRequest},
};

/// Returns the stored record for `request_id`, or a zero-valued,
/// uninitialized record if the id has never been referenced. The fresh
/// record is not persisted until `save`.
pub fn get_or_create(env: &Env, request_id: u64) -> ApprovalRequest {
    storage::get_request(env, request_id).unwrap_or_else(|| ApprovalRequest {
        destination: None,
        amount: 0,
        approvals: Vec::new(env),
        initialized: false,
        sent: false,
    })
}

pub fn get(env: &Env, request_id: u64) -> Option<ApprovalRequest> {
    storage::get_request(env, request_id)
}

/// Fixes destination and amount on first use. First writer wins: an
/// already initialized record is left untouched.
pub fn initialize(request: &mut ApprovalRequest, destination: &Address, amount: i128) {
    if request.initialized {
        return;
    }
    request.destination = Some(destination.clone());
    request.amount = amount;
    request.initialized = true;
}

/// Adds `approver` to the approval set. Returns `false` when the approver
/// had already approved and the set is unchanged.
pub fn record_approval(request: &mut ApprovalRequest, approver: &Address) -> bool {
    if request.approvals.contains(approver) {
        return false;
    }
    request.approvals.push_back(approver.clone());
    true
}

pub fn has_approved(request: &ApprovalRequest, approver: &Address) -> bool {
    request.approvals.contains(approver)
}

/// Persists `request`. A record whose stored copy is already settled is
/// terminal and cannot be overwritten.
pub fn save(env: &Env, request_id: u64, request: &ApprovalRequest) -> Result<(), TreasuryError> {
    if let Some(stored) = storage::get_request(env, request_id) {
        if stored.sent {
            return Err(TreasuryError::AlreadySettled);
        }
    }
    storage::set_request(env, request_id, request);
    Ok(())
}

/// Derives a request id from the withdrawal intent so unrelated
/// withdrawals do not share an id by accident.
///
/// `id = u64_be(sha256(xdr(destination) ++ xdr(amount) ++ xdr(nonce))[0..8])`
pub fn derive_request_id(env: &Env, destination: &Address, amount: i128, nonce: u64) -> u64 {
    let mut preimage = Bytes::new(env);
    preimage.append(&destination.clone().to_xdr(env));
    preimage.append(&amount.to_xdr(env));
    preimage.append(&nonce.to_xdr(env));

    let digest: BytesN<32> = env.crypto().sha256(&preimage).into();
    let digest = digest.to_array();

    let mut id = [0u8; 8];
    id.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(id)
}
