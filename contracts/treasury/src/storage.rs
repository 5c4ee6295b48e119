use soroban_sdk::{contracttype, Address, Env, Vec};

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers

// Settled requests must outlive pending ones long enough to keep rejecting replays.
const REQUEST_LIFETIME_THRESHOLD: u32 = 518400; // ~30 days
const REQUEST_BUMP_AMOUNT: u32 = 3110400; // ~180 days

/// Immutable deployment-time configuration: the pooled token, the ordered
/// approver list and the number of distinct approvals a withdrawal needs.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreasuryConfig {
    pub token: Address,
    pub approvers: Vec<Address>,
    pub threshold: u32,
}

/// A withdrawal request, keyed by the caller-supplied request id.
///
/// `destination` and `amount` are frozen once `initialized` is set and the
/// record is terminal once `sent` is set.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApprovalRequest {
    pub destination: Option<Address>,
    pub amount: i128,
    pub approvals: Vec<Address>,
    pub initialized: bool,
    pub sent: bool,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Config,
    Balance,
    Request(u64),
    Lock(u64),
}

pub fn get_config(env: &Env) -> Option<TreasuryConfig> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &TreasuryConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_balance(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::Balance).unwrap_or(0)
}

pub fn set_balance(env: &Env, balance: i128) {
    env.storage().instance().set(&DataKey::Balance, &balance);
}

pub fn get_request(env: &Env, request_id: u64) -> Option<ApprovalRequest> {
    env.storage().persistent().get(&DataKey::Request(request_id))
}

pub fn set_request(env: &Env, request_id: u64, request: &ApprovalRequest) {
    let key = DataKey::Request(request_id);
    env.storage().persistent().set(&key, request);
    env.storage()
        .persistent()
        .extend_ttl(&key, REQUEST_LIFETIME_THRESHOLD, REQUEST_BUMP_AMOUNT);
}

pub fn is_locked(env: &Env, request_id: u64) -> bool {
    env.storage().temporary().get(&DataKey::Lock(request_id)).unwrap_or(false)
}

pub fn set_locked(env: &Env, request_id: u64, locked: bool) {
    let key = DataKey::Lock(request_id);
    if locked {
        env.storage().temporary().set(&key, &true);
    } else {
        env.storage().temporary().remove(&key);
    }
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
