#![cfg(test)]

// ---------------------------------------------------------------------------
// Treasury test suite
//
// Structure
// ─────────
// 1. registry    — construction validation, membership and order
// 2. ledger      — credit / debit against instance storage
// 3. requests    — record lifecycle, first-writer-wins, derived ids
// 4. reentrancy  — per-request lock
// 5. events      — recount audit trail
// 6. withdrawal  — end-to-end approval and settlement through the client
// ---------------------------------------------------------------------------

mod reentrancy;

use soroban_sdk::{contract, contractimpl, testutils::Address as _, Address, Env, Vec};

use crate::storage::{set_config, TreasuryConfig};

// Minimal stub so module-level tests can run inside `env.as_contract`.
#[contract]
pub struct TreasuryStub;

#[contractimpl]
impl TreasuryStub {}

/// Registers a stub contract and writes a config with three generated
/// approvers and the given threshold into its instance storage.
pub(crate) fn stub_with_config(env: &Env, threshold: u32) -> (Address, TreasuryConfig) {
    let contract_id = env.register_contract(None, TreasuryStub);
    let approvers = Vec::from_array(
        env,
        [Address::generate(env), Address::generate(env), Address::generate(env)],
    );
    let config = TreasuryConfig { token: Address::generate(env), approvers, threshold };

    env.as_contract(&contract_id, || set_config(env, &config));
    (contract_id, config)
}
