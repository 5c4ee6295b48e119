#![cfg(test)]

use soroban_sdk::{
    testutils::{Address as _, Events as _},
    Address, Env,
};

use crate::{MockToken, MockTokenClient, MockTokenError};

fn setup<'a>() -> (Env, MockTokenClient<'a>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let client = MockTokenClient::new(&env, &env.register_contract(None, MockToken));
    client.initialize(&admin);

    (env, client, admin)
}

#[test]
fn mint_and_transfer_move_balances() {
    let (env, client, _) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    client.mint(&alice, &1_000_i128);
    client.transfer(&alice, &bob, &400_i128);

    assert_eq!(client.balance(&alice), 600);
    assert_eq!(client.balance(&bob), 400);
}

#[test]
fn transfer_emits_standard_token_event() {
    let (env, client, _) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    client.mint(&alice, &100_i128);
    client.transfer(&alice, &bob, &10_i128);

    assert!(!env.events().all().is_empty(), "transfer should publish a token event");
}

#[test]
fn frozen_token_rejects_transfers() {
    let (env, client, _) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    client.mint(&alice, &100_i128);
    client.set_frozen(&true);

    let result = client.try_transfer(&alice, &bob, &10_i128);
    assert_eq!(result, Err(Ok(MockTokenError::Frozen)));
    assert_eq!(client.balance(&alice), 100);

    client.set_frozen(&false);
    client.transfer(&alice, &bob, &10_i128);
    assert_eq!(client.balance(&bob), 10);
}

#[test]
fn transfer_above_balance_reverts() {
    let (env, client, _) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    client.mint(&alice, &5_i128);
    let result = client.try_transfer(&alice, &bob, &6_i128);
    assert_eq!(result, Err(Ok(MockTokenError::InsufficientBalance)));
}

#[test]
fn double_initialize_fails() {
    let (env, client, _) = setup();
    let result = client.try_initialize(&Address::generate(&env));
    assert_eq!(result, Err(Ok(MockTokenError::AlreadyInitialized)));
}

#[test]
fn mint_past_i128_max_overflows() {
    let (env, client, _) = setup();
    let alice = Address::generate(&env);

    client.mint(&alice, &i128::MAX);
    let result = client.try_mint(&alice, &1_i128);
    assert_eq!(result, Err(Ok(MockTokenError::Overflow)));
    assert_eq!(client.balance(&alice), i128::MAX);
}

#[test]
fn transfer_into_full_balance_overflows() {
    let (env, client, _) = setup();
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    client.mint(&alice, &1_i128);
    client.mint(&bob, &i128::MAX);

    let result = client.try_transfer(&alice, &bob, &1_i128);
    assert_eq!(result, Err(Ok(MockTokenError::Overflow)));
    assert_eq!(client.balance(&alice), 1);
}
