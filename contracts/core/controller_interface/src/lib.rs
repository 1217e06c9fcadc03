#![no_std]

use soroban_sdk::{contractclient, contracterror, Address, Env, Vec};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ControllerError {
    NotInitialized = 30,
    Unauthorized = 31,
    FactoryNotRegistered = 32,
    FutureNotRegistered = 33,
    FutureAlreadyRegistered = 34,
    InvalidAmount = 35,
    PeriodNotReady = 36,
    DurationNotRegistered = 37,
    InvalidDuration = 38,
}

/// User-facing entry point of the protocol and period dispatcher.
#[contractclient(name = "ControllerClient")]
pub trait ControllerTrait {
    fn __constructor(env: Env, permissions: Address, registry: Address);

    fn get_registry_address(env: Env) -> Address;

    // Scheduling
    fn set_period_starting_delay(env: Env, caller: Address, delay: u64)
        -> Result<(), ControllerError>;
    fn get_period_starting_delay(env: Env) -> u64;
    fn set_next_period_switch_timestamp(
        env: Env,
        caller: Address,
        duration: u64,
        timestamp: u64,
    ) -> Result<(), ControllerError>;
    fn get_next_period_start(env: Env, duration: u64) -> u64;

    // Duration index
    fn register_new_future(env: Env, factory: Address, future: Address)
        -> Result<(), ControllerError>;
    fn get_durations(env: Env) -> Vec<u64>;
    fn get_futures_with_duration(env: Env, duration: u64) -> Vec<Address>;

    // User operations
    fn register(env: Env, user: Address, future: Address, amount: i128)
        -> Result<(), ControllerError>;
    fn unregister(env: Env, user: Address, future: Address, amount: i128)
        -> Result<i128, ControllerError>;
    fn claim_fyt(env: Env, user: Address, future: Address) -> Result<(), ControllerError>;
    fn withdraw_lock_funds(env: Env, user: Address, future: Address, amount: i128)
        -> Result<i128, ControllerError>;

    /// Starts the next period of every future registered with `duration`.
    /// Returns how many futures were rolled.
    fn start_futures_by_period_duration(env: Env, caller: Address, duration: u64)
        -> Result<u32, ControllerError>;
}
