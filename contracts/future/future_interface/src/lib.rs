#![no_std]

use apwine_naming::NamingPolicy;
use soroban_sdk::{contractclient, contracterror, contracttype, Address, Env, String};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FutureError {
    NotInitialized = 50,
    AlreadyInitialized = 51,
    Unauthorized = 52,
    InvalidAmount = 53,
    AmountExceedsRegistration = 54,
    NoActivePeriod = 55,
    InsufficientBalance = 56,
    InvalidPeriod = 57,
    InvalidDuration = 58,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    NotInitialized = 70,
    AlreadyInitialized = 71,
    Unauthorized = 72,
    InvalidAmount = 73,
    InsufficientPending = 74,
    InsufficientLocked = 75,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    NotInitialized = 80,
    AlreadyInitialized = 81,
    Unauthorized = 82,
    PeriodNotExpired = 83,
    PeriodAlreadyExpired = 84,
    YieldAlreadyRedeemed = 85,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FutureFactoryError {
    NotInitialized = 140,
    Unauthorized = 141,
    PlatformNotRegistered = 142,
    PlatformNotOwned = 143,
    InvalidDuration = 144,
}

/// Everything a freshly deployed future needs to know about its surroundings.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FutureConfig {
    pub controller: Address,
    pub registry: Address,
    pub ibt: Address,
    pub platform_name: String,
    /// Period length in seconds.
    pub period_duration: u64,
    pub vault: Address,
    pub wallet: Address,
    pub apwine_ibt: Address,
    pub liquidity_gauge: Address,
    pub naming_policy: NamingPolicy,
}

/// Result of moving the pending pool into the locked pool.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockReceipt {
    /// IBT moved from pending to locked.
    pub amount: i128,
    /// Locked IBT right before the move, after the yield sweep.
    pub locked_before: i128,
}

/// Yield finalised for one expired period.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct YieldRecord {
    /// IBT still held for FYT holders of the period.
    pub yield_balance: i128,
    /// FYT of the period not yet redeemed.
    pub fyt_outstanding: i128,
}

#[contractclient(name = "FutureClient")]
pub trait FutureTrait {
    fn initialize(env: Env, config: FutureConfig) -> Result<(), FutureError>;

    // Controller entry points
    fn register(env: Env, user: Address, amount: i128) -> Result<(), FutureError>;
    fn unregister(env: Env, user: Address, amount: i128) -> Result<i128, FutureError>;
    fn start_new_period(env: Env) -> Result<u32, FutureError>;
    fn claim_fyt(env: Env, user: Address) -> Result<(), FutureError>;
    fn withdraw_lock_funds(env: Env, user: Address, amount: i128) -> Result<i128, FutureError>;

    // Collaborator hooks
    fn get_fyt_entitlement(env: Env, user: Address, period: u32) -> i128;
    fn burn_fyt_for_yield(env: Env, user: Address, period: u32) -> Result<i128, FutureError>;
    fn get_pending_liquidity(env: Env, user: Address) -> (i128, u32);

    // Views
    fn get_claimable_apwibt(env: Env, user: Address) -> i128;
    fn get_claimable_fyt_for_period(env: Env, user: Address, period: u32) -> i128;
    fn get_registered_amount(env: Env, user: Address) -> i128;
    fn get_fyt_of_period(env: Env, period: u32) -> Result<Address, FutureError>;
    fn get_next_period_index(env: Env) -> u32;
    fn get_next_period_timestamp(env: Env) -> u64;
    fn get_locked_supply(env: Env) -> i128;
    fn get_period_duration(env: Env) -> u64;
    fn get_platform_name(env: Env) -> String;
    fn get_controller_address(env: Env) -> Address;
    fn get_ibt_address(env: Env) -> Address;
    fn get_vault_address(env: Env) -> Address;
    fn get_wallet_address(env: Env) -> Address;
    fn get_apwine_ibt_address(env: Env) -> Address;
    fn get_liquidity_gauge_address(env: Env) -> Address;
}

/// Custody of one future's IBT.
#[contractclient(name = "FutureVaultClient")]
pub trait FutureVaultTrait {
    fn initialize(env: Env, future: Address, ibt: Address) -> Result<(), VaultError>;
    fn get_future_address(env: Env) -> Address;
    fn get_ibt_address(env: Env) -> Address;

    fn add_pending(env: Env, amount: i128) -> Result<(), VaultError>;
    fn release_pending(env: Env, to: Address, amount: i128) -> Result<(), VaultError>;
    fn lock_pending(env: Env) -> Result<LockReceipt, VaultError>;
    fn sweep_yield(env: Env, to: Address) -> Result<i128, VaultError>;
    fn release_locked(env: Env, to: Address, amount: i128, supply: i128)
        -> Result<i128, VaultError>;

    fn get_pending_balance(env: Env) -> i128;
    fn get_locked_balance(env: Env) -> i128;
    fn get_locked_value(env: Env) -> i128;
}

/// Per-period yield of one future, redeemable by the period's FYT holders.
#[contractclient(name = "FutureWalletClient")]
pub trait FutureWalletTrait {
    fn initialize(env: Env, future: Address, ibt: Address) -> Result<(), WalletError>;
    fn get_future_address(env: Env) -> Address;
    fn get_ibt_address(env: Env) -> Address;

    fn register_expired_period(env: Env, period: u32, yield_amount: i128, fyt_supply: i128)
        -> Result<(), WalletError>;
    fn get_expired_period(env: Env, period: u32) -> Option<YieldRecord>;
    fn get_redeemable_yield(env: Env, period: u32, user: Address) -> i128;
    fn redeem_yield(env: Env, user: Address, period: u32) -> Result<i128, WalletError>;
}

/// Deploys and wires the contracts of new futures for one platform.
#[contractclient(name = "FutureFactoryClient")]
pub trait FutureFactoryTrait {
    fn __constructor(env: Env, permissions: Address, registry: Address);
    fn get_registry_address(env: Env) -> Address;

    /// Deploys a future of `period_duration_days` over `ibt` on `platform_name`
    /// and registers it with the registry, the controller and the gauge controller.
    fn deploy_future_with_ibt(
        env: Env,
        caller: Address,
        platform_name: String,
        ibt: Address,
        period_duration_days: u64,
    ) -> Result<Address, FutureFactoryError>;
}
