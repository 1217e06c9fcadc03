#![cfg(test)]

use crate::{ApwineToken, ApwineTokenClient};
use soroban_sdk::{testutils::Address as _, token::TokenClient, Address, Env, String};

struct ApwineTokenTest<'a> {
    env: Env,
    admin: Address,
    user1: Address,
    user2: Address,
    token: ApwineTokenClient<'a>,
    sep41: TokenClient<'a>,
}

impl<'a> ApwineTokenTest<'a> {
    fn setup(transferable: bool) -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let user1 = Address::generate(&env);
        let user2 = Address::generate(&env);

        let token_id = env.register(ApwineToken, ());
        let token = ApwineTokenClient::new(&env, &token_id);
        token.initialize(
            &admin,
            &String::from_str(&env, "7D-AAVE-ADAI-1"),
            &String::from_str(&env, "7D-AAVE-ADAI-1"),
            &7u32,
            &transferable,
        );
        let sep41 = TokenClient::new(&env, &token_id);

        ApwineTokenTest {
            env,
            admin,
            user1,
            user2,
            token,
            sep41,
        }
    }
}

#[test]
fn test_initialization() {
    let test = ApwineTokenTest::setup(true);

    assert_eq!(test.sep41.name(), String::from_str(&test.env, "7D-AAVE-ADAI-1"));
    assert_eq!(test.sep41.symbol(), String::from_str(&test.env, "7D-AAVE-ADAI-1"));
    assert_eq!(test.sep41.decimals(), 7u32);
    assert_eq!(test.token.admin(), test.admin);
    assert!(test.token.is_transferable());
    assert_eq!(test.token.total_supply(), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #121)")]
fn test_cannot_initialize_twice() {
    let test = ApwineTokenTest::setup(true);

    test.token.initialize(
        &test.user1,
        &String::from_str(&test.env, "X"),
        &String::from_str(&test.env, "X"),
        &7u32,
        &true,
    );
}

#[test]
fn test_mint_and_admin_burn() {
    let test = ApwineTokenTest::setup(true);

    test.token.mint(&test.user1, &1_000);
    assert_eq!(test.sep41.balance(&test.user1), 1_000);
    assert_eq!(test.token.total_supply(), 1_000);

    test.token.admin_burn(&test.user1, &400);
    assert_eq!(test.sep41.balance(&test.user1), 600);
    assert_eq!(test.token.total_supply(), 600);
}

#[test]
fn test_transfer_and_allowance() {
    let test = ApwineTokenTest::setup(true);
    test.token.mint(&test.user1, &1_000);

    test.sep41.transfer(&test.user1, &test.user2, &300);
    assert_eq!(test.sep41.balance(&test.user1), 700);
    assert_eq!(test.sep41.balance(&test.user2), 300);

    test.sep41.approve(&test.user1, &test.user2, &200, &1_000);
    assert_eq!(test.sep41.allowance(&test.user1, &test.user2), 200);
    test.sep41
        .transfer_from(&test.user2, &test.user1, &test.user2, &150);
    assert_eq!(test.sep41.balance(&test.user2), 450);
    assert_eq!(test.sep41.allowance(&test.user1, &test.user2), 50);
}

#[test]
fn test_holder_burn_reduces_supply() {
    let test = ApwineTokenTest::setup(true);
    test.token.mint(&test.user1, &1_000);

    test.sep41.burn(&test.user1, &250);
    assert_eq!(test.sep41.balance(&test.user1), 750);
    assert_eq!(test.token.total_supply(), 750);
}

#[test]
#[should_panic(expected = "Error(Contract, #124)")]
fn test_transfer_more_than_balance() {
    let test = ApwineTokenTest::setup(true);
    test.token.mint(&test.user1, &100);

    test.sep41.transfer(&test.user1, &test.user2, &101);
}

#[test]
#[should_panic(expected = "Error(Contract, #125)")]
fn test_transfer_from_without_allowance() {
    let test = ApwineTokenTest::setup(true);
    test.token.mint(&test.user1, &100);

    test.sep41
        .transfer_from(&test.user2, &test.user1, &test.user2, &10);
}

#[test]
fn test_non_transferable_rejects_transfers() {
    let test = ApwineTokenTest::setup(false);
    test.token.mint(&test.user1, &1_000);
    assert!(!test.token.is_transferable());

    let result = test.sep41.try_transfer(&test.user1, &test.user2, &1);
    assert!(result.is_err());
    let result = test.sep41.try_approve(&test.user1, &test.user2, &1, &100);
    assert!(result.is_err());
    let result = test.sep41.try_burn(&test.user1, &1);
    assert!(result.is_err());

    // The owning contract still controls supply
    test.token.admin_burn(&test.user1, &1_000);
    assert_eq!(test.sep41.balance(&test.user1), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #126)")]
fn test_non_transferable_transfer_error_code() {
    let test = ApwineTokenTest::setup(false);
    test.token.mint(&test.user1, &10);

    test.sep41.transfer(&test.user1, &test.user2, &10);
}

#[test]
#[should_panic(expected = "Error(Contract, #123)")]
fn test_negative_mint() {
    let test = ApwineTokenTest::setup(true);

    test.token.mint(&test.user1, &-1);
}

