use apwine_naming::NamingPolicy;
use registry_interface::{FuturePlatform, RegistryError};
use soroban_sdk::{contracttype, panic_with_error, Address, BytesN, Env, String, Vec};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const ENTRY_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const ENTRY_LIFETIME_THRESHOLD: u32 = ENTRY_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Instance keys
const PERMISSIONS_KEY: &str = "permissions";
const CONTROLLER_KEY: &str = "controller";
const GAUGE_CONTROLLER_KEY: &str = "gauge_controller";
const PROXY_FACTORY_KEY: &str = "proxy_factory";
const APWINE_IBT_LOGIC_KEY: &str = "apwibt_logic";
const FYT_LOGIC_KEY: &str = "fyt_logic";
const LIQUIDITY_GAUGE_LOGIC_KEY: &str = "gauge_logic";
const NAMING_POLICY_KEY: &str = "naming_policy";
const PLATFORM_NAMES_KEY: &str = "platform_names";
const FUTURES_KEY: &str = "futures";

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    FactoryPlatform(Address),
    Platform(String),
    PlatformFactory(String),
    Future(Address),
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn read_persistent<V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>>(
    env: &Env,
    key: &DataKey,
) -> Option<V> {
    let value = env.storage().persistent().get(key);
    if value.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(key, ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);
    }
    value
}

fn write_persistent<V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>>(
    env: &Env,
    key: &DataKey,
    value: &V,
) {
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);
}

// Permissions provider (immutable after construction)
pub fn set_permissions(env: &Env, permissions: &Address) {
    env.storage().instance().set(&PERMISSIONS_KEY, permissions);
}

pub fn get_permissions(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&PERMISSIONS_KEY)
        .unwrap_or_else(|| panic_with_error!(env, RegistryError::NotInitialized))
}

// Protocol contracts
pub fn set_controller(env: &Env, controller: &Address) {
    env.storage().instance().set(&CONTROLLER_KEY, controller);
}

pub fn get_controller(env: &Env) -> Option<Address> {
    env.storage().instance().get(&CONTROLLER_KEY)
}

pub fn set_gauge_controller(env: &Env, gauge_controller: &Address) {
    env.storage()
        .instance()
        .set(&GAUGE_CONTROLLER_KEY, gauge_controller);
}

pub fn get_gauge_controller(env: &Env) -> Option<Address> {
    env.storage().instance().get(&GAUGE_CONTROLLER_KEY)
}

pub fn set_proxy_factory(env: &Env, proxy_factory: &Address) {
    env.storage().instance().set(&PROXY_FACTORY_KEY, proxy_factory);
}

pub fn get_proxy_factory(env: &Env) -> Option<Address> {
    env.storage().instance().get(&PROXY_FACTORY_KEY)
}

// Shared logic contracts
pub fn set_apwine_ibt_logic(env: &Env, logic: &BytesN<32>) {
    env.storage().instance().set(&APWINE_IBT_LOGIC_KEY, logic);
}

pub fn get_apwine_ibt_logic(env: &Env) -> Option<BytesN<32>> {
    env.storage().instance().get(&APWINE_IBT_LOGIC_KEY)
}

pub fn set_fyt_logic(env: &Env, logic: &BytesN<32>) {
    env.storage().instance().set(&FYT_LOGIC_KEY, logic);
}

pub fn get_fyt_logic(env: &Env) -> Option<BytesN<32>> {
    env.storage().instance().get(&FYT_LOGIC_KEY)
}

pub fn set_liquidity_gauge_logic(env: &Env, logic: &BytesN<32>) {
    env.storage()
        .instance()
        .set(&LIQUIDITY_GAUGE_LOGIC_KEY, logic);
}

pub fn get_liquidity_gauge_logic(env: &Env) -> Option<BytesN<32>> {
    env.storage().instance().get(&LIQUIDITY_GAUGE_LOGIC_KEY)
}

pub fn set_naming_policy(env: &Env, policy: NamingPolicy) {
    env.storage().instance().set(&NAMING_POLICY_KEY, &policy);
}

pub fn get_naming_policy(env: &Env) -> NamingPolicy {
    env.storage()
        .instance()
        .get(&NAMING_POLICY_KEY)
        .unwrap_or_default()
}

// Future factories
pub fn set_factory_platform(env: &Env, factory: &Address, platform_name: &String) {
    write_persistent(env, &DataKey::FactoryPlatform(factory.clone()), platform_name);
}

pub fn get_factory_platform(env: &Env, factory: &Address) -> Option<String> {
    read_persistent(env, &DataKey::FactoryPlatform(factory.clone()))
}

// Future platforms
pub fn set_platform(env: &Env, name: &String, platform: &FuturePlatform, factory: &Address) {
    write_persistent(env, &DataKey::Platform(name.clone()), platform);
    write_persistent(env, &DataKey::PlatformFactory(name.clone()), factory);
}

pub fn get_platform(env: &Env, name: &String) -> Option<FuturePlatform> {
    read_persistent(env, &DataKey::Platform(name.clone()))
}

pub fn get_platform_factory(env: &Env, name: &String) -> Option<Address> {
    read_persistent(env, &DataKey::PlatformFactory(name.clone()))
}

pub fn remove_platform(env: &Env, name: &String) {
    env.storage()
        .persistent()
        .remove(&DataKey::Platform(name.clone()));
    env.storage()
        .persistent()
        .remove(&DataKey::PlatformFactory(name.clone()));
}

pub fn get_platform_names(env: &Env) -> Vec<String> {
    env.storage()
        .instance()
        .get(&PLATFORM_NAMES_KEY)
        .unwrap_or(Vec::new(env))
}

pub fn set_platform_names(env: &Env, names: &Vec<String>) {
    env.storage().instance().set(&PLATFORM_NAMES_KEY, names);
}

// Futures
pub fn is_future(env: &Env, future: &Address) -> bool {
    read_persistent::<bool>(env, &DataKey::Future(future.clone())).unwrap_or(false)
}

pub fn set_future(env: &Env, future: &Address) {
    write_persistent(env, &DataKey::Future(future.clone()), &true);
}

pub fn remove_future(env: &Env, future: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Future(future.clone()));
}

pub fn get_futures(env: &Env) -> Vec<Address> {
    env.storage()
        .instance()
        .get(&FUTURES_KEY)
        .unwrap_or(Vec::new(env))
}

pub fn set_futures(env: &Env, futures: &Vec<Address>) {
    env.storage().instance().set(&FUTURES_KEY, futures);
}
