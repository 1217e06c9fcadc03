#![cfg(test)]

use crate::{Future, FutureClient, FutureConfig, FutureError};
use apwine_naming::NamingPolicy;
use apwine_token::{ApwineToken, ApwineTokenClient};
use mock_ibt::MockIbt;
use soroban_sdk::{testutils::Address as _, token::TokenClient, Address, Env, String};

const WEEK: u64 = 7 * 86_400;

struct FutureTest<'a> {
    env: Env,
    config: FutureConfig,
    future: FutureClient<'a>,
}

impl<'a> FutureTest<'a> {
    fn setup(policy: NamingPolicy) -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let ibt = env.register(MockIbt, (&admin, String::from_str(&env, "ADAI"), 0i128));
        let apwine_ibt = env.register(ApwineToken, ());

        let config = FutureConfig {
            controller: Address::generate(&env),
            registry: Address::generate(&env),
            ibt,
            platform_name: String::from_str(&env, "AAVE"),
            period_duration: WEEK,
            vault: Address::generate(&env),
            wallet: Address::generate(&env),
            apwine_ibt,
            liquidity_gauge: Address::generate(&env),
            naming_policy: policy,
        };

        let future_id = env.register(Future, ());
        let future = FutureClient::new(&env, &future_id);
        future.initialize(&config);

        FutureTest {
            env,
            config,
            future,
        }
    }
}

#[test]
fn test_initialize() {
    let test = FutureTest::setup(NamingPolicy::DurationPrefixed);

    assert_eq!(test.future.get_next_period_index(), 1);
    assert_eq!(test.future.get_next_period_timestamp(), 0);
    assert_eq!(test.future.get_locked_supply(), 0);
    assert_eq!(test.future.get_period_duration(), WEEK);
    assert_eq!(
        test.future.get_platform_name(),
        String::from_str(&test.env, "AAVE")
    );
    assert_eq!(test.future.get_vault_address(), test.config.vault);
    assert_eq!(test.future.get_wallet_address(), test.config.wallet);
    assert_eq!(
        test.future.get_liquidity_gauge_address(),
        test.config.liquidity_gauge
    );
}

#[test]
fn test_apwine_ibt_is_named_and_owned() {
    let test = FutureTest::setup(NamingPolicy::DurationPrefixed);
    let apwibt = TokenClient::new(&test.env, &test.config.apwine_ibt);
    let apwibt_admin = ApwineTokenClient::new(&test.env, &test.config.apwine_ibt);

    assert_eq!(apwibt.symbol(), String::from_str(&test.env, "APW7D-AAVE-ADAI"));
    assert_eq!(apwibt.name(), String::from_str(&test.env, "APW7D-AAVE-ADAI"));
    assert_eq!(apwibt.decimals(), 7);
    assert_eq!(apwibt_admin.admin(), test.future.address);
    assert!(!apwibt_admin.is_transferable());
}

#[test]
fn test_compact_naming() {
    let test = FutureTest::setup(NamingPolicy::Compact);
    let apwibt = TokenClient::new(&test.env, &test.config.apwine_ibt);

    assert_eq!(apwibt.symbol(), String::from_str(&test.env, "APW-7D-ADAI-AAVE"));
}

#[test]
fn test_initialize_once() {
    let test = FutureTest::setup(NamingPolicy::DurationPrefixed);

    assert_eq!(
        test.future.try_initialize(&test.config),
        Err(Ok(FutureError::AlreadyInitialized))
    );
}

#[test]
fn test_zero_duration_rejected() {
    let env = Env::default();
    env.mock_all_auths();
    let future = FutureClient::new(&env, &env.register(Future, ()));
    let admin = Address::generate(&env);

    let config = FutureConfig {
        controller: Address::generate(&env),
        registry: Address::generate(&env),
        ibt: env.register(MockIbt, (&admin, String::from_str(&env, "ADAI"), 0i128)),
        platform_name: String::from_str(&env, "AAVE"),
        period_duration: 0,
        vault: Address::generate(&env),
        wallet: Address::generate(&env),
        apwine_ibt: env.register(ApwineToken, ()),
        liquidity_gauge: Address::generate(&env),
        naming_policy: NamingPolicy::DurationPrefixed,
    };
    assert_eq!(
        future.try_initialize(&config),
        Err(Ok(FutureError::InvalidDuration))
    );
}

#[test]
fn test_views_before_first_period() {
    let test = FutureTest::setup(NamingPolicy::DurationPrefixed);
    let user = Address::generate(&test.env);

    assert_eq!(test.future.get_claimable_apwibt(&user), 0);
    assert_eq!(test.future.get_claimable_fyt_for_period(&user, &1), 0);
    assert_eq!(test.future.get_fyt_entitlement(&user, &1), 0);
    assert_eq!(test.future.get_pending_liquidity(&user), (0, 0));
    assert_eq!(
        test.future.try_get_fyt_of_period(&1),
        Err(Ok(FutureError::InvalidPeriod))
    );
}
