#![no_std]

use soroban_sdk::{contractclient, contracterror, Address, Env};

/// Fixed-point scale of inflation rates, weights and reward indexes.
pub const PRECISION: i128 = 1_000_000_000_000_000_000;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum GaugeControllerError {
    NotInitialized = 90,
    Unauthorized = 91,
    InvalidEpochLength = 92,
    InvalidInflationRate = 93,
    InvalidInitialSupply = 94,
    InvalidWeight = 95,
    FactoryNotRegistered = 96,
    GaugeAlreadyRegistered = 97,
    GaugeNotRegistered = 98,
    WithdrawalsPaused = 99,
    NotConfigured = 100,
    InsufficientRewards = 101,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum GaugeError {
    NotInitialized = 110,
    AlreadyInitialized = 111,
    Unauthorized = 112,
    InvalidAmount = 113,
    WithdrawalsPaused = 114,
    InsufficientLiquidity = 115,
}

/// Emits the APW inflation and splits it across liquidity gauges by weight.
#[contractclient(name = "GaugeControllerClient")]
pub trait GaugeControllerTrait {
    fn __constructor(
        env: Env,
        permissions: Address,
        registry: Address,
        epoch_length: u64,
        epoch_inflation_rate: i128,
        initial_supply: i128,
    );

    // Epoch parameters
    fn set_epoch_length(env: Env, caller: Address, epoch_length: u64)
        -> Result<(), GaugeControllerError>;
    fn get_epoch_length(env: Env) -> u64;
    fn set_epoch_inflation_rate(env: Env, caller: Address, rate: i128)
        -> Result<(), GaugeControllerError>;
    fn get_last_epoch_inflation_rate(env: Env) -> i128;
    fn set_initial_supply(env: Env, caller: Address, supply: i128)
        -> Result<(), GaugeControllerError>;
    fn get_initial_supply(env: Env) -> i128;
    fn get_current_epoch(env: Env) -> u32;
    fn set_apw_token(env: Env, caller: Address, token: Address)
        -> Result<(), GaugeControllerError>;
    fn get_apw_token(env: Env) -> Result<Address, GaugeControllerError>;

    // Withdrawal switch
    fn resume_apw_withdraw(env: Env, caller: Address) -> Result<(), GaugeControllerError>;
    fn pause_apw_withdraw(env: Env, caller: Address) -> Result<(), GaugeControllerError>;
    fn get_withdrawable_state(env: Env) -> bool;

    // Gauges
    fn register_new_gauge(env: Env, factory: Address, future: Address)
        -> Result<Address, GaugeControllerError>;
    fn get_liquidity_gauge_of_future(env: Env, future: Address)
        -> Result<Address, GaugeControllerError>;
    fn set_gauge_weight(env: Env, caller: Address, gauge: Address, weight: i128)
        -> Result<(), GaugeControllerError>;
    fn get_gauge_weight(env: Env, gauge: Address) -> i128;
    fn get_total_weight(env: Env) -> i128;

    // Gauge hooks
    fn checkpoint_gauge(env: Env, gauge: Address) -> Result<i128, GaugeControllerError>;
    fn get_gauge_pending_rewards(env: Env, gauge: Address) -> i128;
    fn mint_rewards(env: Env, gauge: Address, to: Address, amount: i128)
        -> Result<(), GaugeControllerError>;
}

/// Accrues a future's share of APW emissions to its locked liquidity providers.
#[contractclient(name = "LiquidityGaugeClient")]
pub trait LiquidityGaugeTrait {
    fn initialize(env: Env, gauge_controller: Address, future: Address) -> Result<(), GaugeError>;
    fn get_future_address(env: Env) -> Address;
    fn get_gauge_controller_address(env: Env) -> Address;

    // Future hooks
    fn add_period_liquidity(env: Env, period: u32, amount: i128) -> Result<(), GaugeError>;
    fn register_user_liquidity(env: Env, user: Address, amount: i128, since_period: u32)
        -> Result<(), GaugeError>;
    fn remove_user_liquidity(env: Env, user: Address, amount: i128) -> Result<(), GaugeError>;

    fn get_user_redeemable(env: Env, user: Address) -> i128;
    fn redeem_apw(env: Env, user: Address) -> Result<i128, GaugeError>;

    fn get_user_liquidity(env: Env, user: Address) -> i128;
    fn get_total_liquidity(env: Env) -> i128;
}
