#![cfg(test)]

use crate::storage::{self, GaugeState};
use crate::{GaugeController, GaugeControllerClient, GaugeControllerError, PRECISION};
use apwine_token::{ApwineToken, ApwineTokenClient};
use permissions::Permissions;
use registry::Registry;
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env, String,
};

const EPOCH: u64 = 100;
const SUPPLY: i128 = 1_000_000;

struct GaugeControllerTest<'a> {
    env: Env,
    admin: Address,
    user: Address,
    gc: GaugeControllerClient<'a>,
    apw: ApwineTokenClient<'a>,
}

impl<'a> GaugeControllerTest<'a> {
    fn setup() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let user = Address::generate(&env);
        let permissions = env.register(Permissions, (&admin,));
        let registry = env.register(Registry, (&permissions,));

        // 10% of the supply per epoch, so 1_000 per second in epoch 0
        let gc_id = env.register(
            GaugeController,
            (&permissions, &registry, EPOCH, PRECISION / 10, SUPPLY),
        );
        let gc = GaugeControllerClient::new(&env, &gc_id);

        let apw_id = env.register(ApwineToken, ());
        let apw = ApwineTokenClient::new(&env, &apw_id);
        apw.initialize(
            &gc_id,
            &String::from_str(&env, "APWine Token"),
            &String::from_str(&env, "APW"),
            &7u32,
            &true,
        );
        gc.set_apw_token(&admin, &apw_id);

        GaugeControllerTest {
            env,
            admin,
            user,
            gc,
            apw,
        }
    }

    /// Lists a gauge without going through a factory deployment.
    fn add_gauge(&self) -> Address {
        let gauge = Address::generate(&self.env);
        self.env.as_contract(&self.gc.address, || {
            let index = storage::get_emission(&self.env).reward_index;
            storage::set_gauge(
                &self.env,
                &gauge,
                &GaugeState {
                    index_checkpoint: index,
                    ..Default::default()
                },
            );
        });
        gauge
    }

    fn jump(&self, seconds: u64) {
        self.env.ledger().with_mut(|li| li.timestamp += seconds);
    }
}

#[test]
fn test_constructor_params() {
    let test = GaugeControllerTest::setup();

    assert_eq!(test.gc.get_epoch_length(), EPOCH);
    assert_eq!(test.gc.get_last_epoch_inflation_rate(), PRECISION / 10);
    assert_eq!(test.gc.get_initial_supply(), SUPPLY);
    assert_eq!(test.gc.get_current_epoch(), 0);
    assert_eq!(test.gc.get_apw_token(), test.apw.address);
    assert!(!test.gc.get_withdrawable_state());
    assert_eq!(test.gc.get_total_weight(), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #92)")]
fn test_constructor_rejects_zero_epoch() {
    let env = Env::default();
    let admin = Address::generate(&env);
    let permissions = env.register(Permissions, (&admin,));
    let registry = Address::generate(&env);
    env.register(
        GaugeController,
        (&permissions, &registry, 0u64, PRECISION / 10, SUPPLY),
    );
}

#[test]
fn test_epoch_advances_with_time() {
    let test = GaugeControllerTest::setup();

    test.jump(EPOCH - 1);
    assert_eq!(test.gc.get_current_epoch(), 0);
    test.jump(1);
    assert_eq!(test.gc.get_current_epoch(), 1);
    test.jump(3 * EPOCH);
    assert_eq!(test.gc.get_current_epoch(), 4);
}

#[test]
fn test_setters_are_admin_only() {
    let test = GaugeControllerTest::setup();

    assert_eq!(
        test.gc.try_set_epoch_length(&test.user, &200),
        Err(Ok(GaugeControllerError::Unauthorized))
    );
    assert_eq!(
        test.gc.try_resume_apw_withdraw(&test.user),
        Err(Ok(GaugeControllerError::Unauthorized))
    );

    test.gc.set_epoch_length(&test.admin, &200);
    test.gc.set_epoch_inflation_rate(&test.admin, &(PRECISION / 20));
    assert_eq!(test.gc.get_epoch_length(), 200);
    assert_eq!(test.gc.get_last_epoch_inflation_rate(), PRECISION / 20);

    assert_eq!(
        test.gc.try_set_epoch_inflation_rate(&test.admin, &0),
        Err(Ok(GaugeControllerError::InvalidInflationRate))
    );
    assert_eq!(
        test.gc.try_set_initial_supply(&test.admin, &-1),
        Err(Ok(GaugeControllerError::InvalidInitialSupply))
    );
}

#[test]
fn test_withdraw_switch() {
    let test = GaugeControllerTest::setup();

    test.gc.resume_apw_withdraw(&test.admin);
    assert!(test.gc.get_withdrawable_state());
    test.gc.pause_apw_withdraw(&test.admin);
    assert!(!test.gc.get_withdrawable_state());
}

#[test]
fn test_weight_of_unknown_gauge() {
    let test = GaugeControllerTest::setup();
    let stranger = Address::generate(&test.env);

    assert_eq!(
        test.gc.try_set_gauge_weight(&test.admin, &stranger, &PRECISION),
        Err(Ok(GaugeControllerError::GaugeNotRegistered))
    );
    assert_eq!(test.gc.get_gauge_weight(&stranger), 0);
    assert_eq!(test.gc.get_gauge_pending_rewards(&stranger), 0);
}

#[test]
fn test_rewards_split_by_weight() {
    let test = GaugeControllerTest::setup();
    let small = test.add_gauge();
    let large = test.add_gauge();

    test.gc.set_gauge_weight(&test.admin, &small, &PRECISION);
    test.gc.set_gauge_weight(&test.admin, &large, &(3 * PRECISION));
    assert_eq!(test.gc.get_total_weight(), 4 * PRECISION);
    assert_eq!(
        test.gc.try_set_gauge_weight(&test.admin, &small, &-1),
        Err(Ok(GaugeControllerError::InvalidWeight))
    );

    test.jump(40);
    assert_eq!(test.gc.get_gauge_pending_rewards(&small), 10_000);
    assert_eq!(test.gc.get_gauge_pending_rewards(&large), 30_000);

    assert_eq!(test.gc.checkpoint_gauge(&small), 10_000);
    assert_eq!(test.gc.get_gauge_pending_rewards(&small), 0);
    assert_eq!(test.gc.get_gauge_pending_rewards(&large), 30_000);
}

#[test]
fn test_weight_change_settles_previous_weight() {
    let test = GaugeControllerTest::setup();
    let gauge = test.add_gauge();
    let other = test.add_gauge();

    test.gc.set_gauge_weight(&test.admin, &gauge, &PRECISION);
    test.jump(10);
    // Sole gauge so far: all 10_000
    test.gc.set_gauge_weight(&test.admin, &other, &PRECISION);
    test.jump(10);

    assert_eq!(test.gc.get_gauge_pending_rewards(&gauge), 15_000);
    assert_eq!(test.gc.get_gauge_pending_rewards(&other), 5_000);
}

#[test]
fn test_nothing_accrues_without_weight() {
    let test = GaugeControllerTest::setup();
    let gauge = test.add_gauge();

    test.jump(50);
    test.gc.set_gauge_weight(&test.admin, &gauge, &PRECISION);
    assert_eq!(test.gc.get_gauge_pending_rewards(&gauge), 0);

    test.jump(10);
    assert_eq!(test.gc.get_gauge_pending_rewards(&gauge), 10_000);
}

#[test]
fn test_mint_rewards_gated_and_capped() {
    let test = GaugeControllerTest::setup();
    let gauge = test.add_gauge();
    test.gc.set_gauge_weight(&test.admin, &gauge, &PRECISION);
    test.jump(10);
    assert_eq!(test.gc.checkpoint_gauge(&gauge), 10_000);

    assert_eq!(
        test.gc.try_mint_rewards(&gauge, &test.user, &1_000),
        Err(Ok(GaugeControllerError::WithdrawalsPaused))
    );

    test.gc.resume_apw_withdraw(&test.admin);
    test.gc.mint_rewards(&gauge, &test.user, &4_000);
    assert_eq!(test.apw.balance(&test.user), 4_000);

    assert_eq!(
        test.gc.try_mint_rewards(&gauge, &test.user, &6_001),
        Err(Ok(GaugeControllerError::InsufficientRewards))
    );
    test.gc.mint_rewards(&gauge, &test.user, &6_000);
    assert_eq!(test.apw.balance(&test.user), 10_000);
}

#[test]
fn test_register_gauge_requires_known_factory() {
    let test = GaugeControllerTest::setup();
    let factory = Address::generate(&test.env);
    let future = Address::generate(&test.env);

    assert_eq!(
        test.gc.try_register_new_gauge(&factory, &future),
        Err(Ok(GaugeControllerError::FactoryNotRegistered))
    );
    assert_eq!(
        test.gc.try_get_liquidity_gauge_of_future(&future),
        Err(Ok(GaugeControllerError::GaugeNotRegistered))
    );
}
