use soroban_sdk::Env;

use crate::{errors::TreasuryError, reentrancy};

// ---------------------------------------------------------------------------
// Basic Lock/Unlock Cycle
// ---------------------------------------------------------------------------

#[test]
fn test_acquire_succeeds_on_first_call() {
    let env = Env::default();
    let contract_id = env.register_contract(None, super::TreasuryStub);

    env.as_contract(&contract_id, || {
        assert!(reentrancy::acquire(&env, 1).is_ok(), "acquire should succeed on first call");
    });
}

#[test]
fn test_acquire_returns_locked_if_already_held() {
    let env = Env::default();
    let contract_id = env.register_contract(None, super::TreasuryStub);

    env.as_contract(&contract_id, || {
        reentrancy::acquire(&env, 1).unwrap();
        assert_eq!(reentrancy::acquire(&env, 1), Err(TreasuryError::Locked));
    });
}

#[test]
fn test_release_clears_lock() {
    let env = Env::default();
    let contract_id = env.register_contract(None, super::TreasuryStub);

    env.as_contract(&contract_id, || {
        reentrancy::acquire(&env, 1).unwrap();
        reentrancy::release(&env, 1);
        assert!(reentrancy::acquire(&env, 1).is_ok(), "acquire should succeed after release");
    });
}

// ---------------------------------------------------------------------------
// Guard: locks are scoped to a single request id
// ---------------------------------------------------------------------------

#[test]
fn test_locks_are_independent_per_request() {
    let env = Env::default();
    let contract_id = env.register_contract(None, super::TreasuryStub);

    env.as_contract(&contract_id, || {
        reentrancy::acquire(&env, 1).unwrap();
        assert!(reentrancy::acquire(&env, 2).is_ok(), "other request ids stay unlocked");

        reentrancy::release(&env, 2);
        assert_eq!(reentrancy::acquire(&env, 1), Err(TreasuryError::Locked));
    });
}

#[test]
fn test_release_is_idempotent() {
    let env = Env::default();
    let contract_id = env.register_contract(None, super::TreasuryStub);

    env.as_contract(&contract_id, || {
        reentrancy::acquire(&env, 7).unwrap();
        reentrancy::release(&env, 7);
        reentrancy::release(&env, 7);
        assert!(reentrancy::acquire(&env, 7).is_ok());
    });
}

// ---------------------------------------------------------------------------
// End-to-end: a token that calls back into the treasury during payout
// ---------------------------------------------------------------------------

mod hostile_token {
    use coralswap_mock_token::{MockToken, MockTokenClient, ReentryCall};
    use soroban_sdk::{testutils::Address as _, Address, Env, Vec};

    use crate::{Treasury, TreasuryClient};

    #[test]
    fn reentrant_approval_during_payout_pays_once() {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let token = MockTokenClient::new(&env, &env.register_contract(None, MockToken));
        token.initialize(&admin);
        let depositor = Address::generate(&env);
        token.mint(&depositor, &100_i128);

        let approvers = [Address::generate(&env), Address::generate(&env), Address::generate(&env)];
        let [a, b, c] = approvers.clone();
        let treasury = TreasuryClient::new(&env, &env.register_contract(None, Treasury));
        treasury.initialize(&token.address, &Vec::from_array(&env, approvers), &2_u32);
        treasury.deposit(&depositor, &100_i128);

        let x = Address::generate(&env);
        treasury.request_and_approve(&a, &x, &40_i128, &1_u64);

        // While paying out request 1, the token asks for it to be approved
        // (and paid) again on behalf of C.
        token.set_reentry(&ReentryCall {
            treasury: treasury.address.clone(),
            caller: c.clone(),
            destination: x.clone(),
            amount: 40,
            request_id: 1,
        });

        assert_eq!(treasury.request_and_approve(&b, &x, &40_i128, &1_u64), 60);

        assert_eq!(token.reentry_outcome(), Some(false), "re-entrant call must fail");
        assert_eq!(token.balance(&x), 40, "destination paid exactly once");
        assert_eq!(token.balance(&treasury.address), 60);
        assert_eq!(treasury.balance(), 60);

        let request = treasury.get_request(&1_u64).unwrap();
        assert!(request.sent);
        assert!(!treasury.has_approved(&1_u64, &c));
    }

    #[test]
    fn reentry_is_not_armed_for_other_senders() {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let token = MockTokenClient::new(&env, &env.register_contract(None, MockToken));
        token.initialize(&admin);
        let holder = Address::generate(&env);
        let treasury = Address::generate(&env);
        token.mint(&holder, &10_i128);

        token.set_reentry(&ReentryCall {
            treasury: treasury.clone(),
            caller: holder.clone(),
            destination: holder.clone(),
            amount: 1,
            request_id: 1,
        });
        token.transfer(&holder, &treasury, &10_i128);

        assert_eq!(token.reentry_outcome(), None);
        assert_eq!(token.balance(&treasury), 10);
    }
}
