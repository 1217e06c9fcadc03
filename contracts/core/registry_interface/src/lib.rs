#![no_std]

use apwine_naming::NamingPolicy;
use soroban_sdk::{contractclient, contracterror, contracttype, Address, BytesN, Env, String, Vec};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    NotInitialized = 10,
    Unauthorized = 11,
    NotConfigured = 12,
    FactoryNotRegistered = 13,
    FactoryAlreadyRegistered = 14,
    PlatformAlreadyRegistered = 15,
    PlatformNotRegistered = 16,
    PlatformNotOwned = 17,
    FutureAlreadyRegistered = 18,
    FutureNotRegistered = 19,
    IndexOutOfBounds = 20,
}

/// Logic contracts a platform's futures are instantiated from.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FuturePlatform {
    pub future_logic: BytesN<32>,
    pub wallet_logic: BytesN<32>,
    pub vault_logic: BytesN<32>,
}

#[contractclient(name = "RegistryClient")]
pub trait RegistryTrait {
    fn __constructor(env: Env, permissions: Address);

    // Protocol contracts
    fn set_controller(env: Env, caller: Address, controller: Address) -> Result<(), RegistryError>;
    fn get_controller(env: Env) -> Result<Address, RegistryError>;
    fn set_gauge_controller(env: Env, caller: Address, gauge_controller: Address)
        -> Result<(), RegistryError>;
    fn get_gauge_controller(env: Env) -> Result<Address, RegistryError>;
    fn set_proxy_factory(env: Env, caller: Address, proxy_factory: Address)
        -> Result<(), RegistryError>;
    fn get_proxy_factory(env: Env) -> Result<Address, RegistryError>;

    // Logic contracts shared by every future
    fn set_apwine_ibt_logic(env: Env, caller: Address, logic: BytesN<32>)
        -> Result<(), RegistryError>;
    fn get_apwine_ibt_logic(env: Env) -> Result<BytesN<32>, RegistryError>;
    fn set_fyt_logic(env: Env, caller: Address, logic: BytesN<32>) -> Result<(), RegistryError>;
    fn get_fyt_logic(env: Env) -> Result<BytesN<32>, RegistryError>;
    fn set_liquidity_gauge_logic(env: Env, caller: Address, logic: BytesN<32>)
        -> Result<(), RegistryError>;
    fn get_liquidity_gauge_logic(env: Env) -> Result<BytesN<32>, RegistryError>;

    fn set_naming_policy(env: Env, caller: Address, policy: NamingPolicy)
        -> Result<(), RegistryError>;
    fn get_naming_policy(env: Env) -> NamingPolicy;

    // Future factories
    fn add_future_factory(env: Env, caller: Address, factory: Address, platform_name: String)
        -> Result<(), RegistryError>;
    fn is_registered_future_factory(env: Env, factory: Address) -> bool;
    fn get_future_factory_platform(env: Env, factory: Address) -> Result<String, RegistryError>;

    // Future platforms
    fn add_future_platform(
        env: Env,
        caller: Address,
        factory: Address,
        name: String,
        future_logic: BytesN<32>,
        wallet_logic: BytesN<32>,
        vault_logic: BytesN<32>,
    ) -> Result<(), RegistryError>;
    fn remove_future_platform(env: Env, caller: Address, name: String) -> Result<(), RegistryError>;
    fn get_future_platform(env: Env, name: String) -> Result<FuturePlatform, RegistryError>;
    fn is_registered_future_platform(env: Env, name: String) -> bool;
    fn future_platforms_count(env: Env) -> u32;
    fn get_future_platform_names(env: Env) -> Vec<String>;
    fn get_platform_factory(env: Env, name: String) -> Result<Address, RegistryError>;

    // Futures
    fn add_future(env: Env, factory: Address, future: Address) -> Result<(), RegistryError>;
    fn remove_future(env: Env, caller: Address, future: Address) -> Result<(), RegistryError>;
    fn is_registered_future(env: Env, future: Address) -> bool;
    fn get_future_at(env: Env, index: u32) -> Result<Address, RegistryError>;
    fn future_count(env: Env) -> u32;
}
