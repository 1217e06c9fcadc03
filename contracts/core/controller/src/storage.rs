use controller_interface::ControllerError;
use soroban_sdk::{contracttype, panic_with_error, Address, Env, Vec};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const DURATION_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const DURATION_LIFETIME_THRESHOLD: u32 = DURATION_BUMP_AMOUNT - DAY_IN_LEDGERS;

const PERMISSIONS_KEY: &str = "permissions";
const REGISTRY_KEY: &str = "registry";
const STARTING_DELAY_KEY: &str = "starting_delay";
const DURATIONS_KEY: &str = "durations";

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    FuturesWithDuration(u64),
    NextPeriodSwitch(u64),
    FutureDuration(Address),
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, DURATION_LIFETIME_THRESHOLD, DURATION_BUMP_AMOUNT);
}

pub fn set_permissions(env: &Env, permissions: &Address) {
    env.storage().instance().set(&PERMISSIONS_KEY, permissions);
}

pub fn get_permissions(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&PERMISSIONS_KEY)
        .unwrap_or_else(|| panic_with_error!(env, ControllerError::NotInitialized))
}

pub fn set_registry(env: &Env, registry: &Address) {
    env.storage().instance().set(&REGISTRY_KEY, registry);
}

pub fn get_registry(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&REGISTRY_KEY)
        .unwrap_or_else(|| panic_with_error!(env, ControllerError::NotInitialized))
}

pub fn set_starting_delay(env: &Env, delay: u64) {
    env.storage().instance().set(&STARTING_DELAY_KEY, &delay);
}

pub fn get_starting_delay(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&STARTING_DELAY_KEY)
        .unwrap_or(0)
}

pub fn get_durations(env: &Env) -> Vec<u64> {
    env.storage()
        .instance()
        .get(&DURATIONS_KEY)
        .unwrap_or(Vec::new(env))
}

pub fn set_durations(env: &Env, durations: &Vec<u64>) {
    env.storage().instance().set(&DURATIONS_KEY, durations);
}

pub fn get_futures_with_duration(env: &Env, duration: u64) -> Vec<Address> {
    let key = DataKey::FuturesWithDuration(duration);
    match env.storage().persistent().get(&key) {
        Some(futures) => {
            extend_persistent(env, &key);
            futures
        }
        None => Vec::new(env),
    }
}

pub fn set_futures_with_duration(env: &Env, duration: u64, futures: &Vec<Address>) {
    let key = DataKey::FuturesWithDuration(duration);
    env.storage().persistent().set(&key, futures);
    extend_persistent(env, &key);
}

pub fn get_next_period_switch(env: &Env, duration: u64) -> Option<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::NextPeriodSwitch(duration))
}

pub fn set_next_period_switch(env: &Env, duration: u64, timestamp: u64) {
    let key = DataKey::NextPeriodSwitch(duration);
    env.storage().persistent().set(&key, &timestamp);
    extend_persistent(env, &key);
}

pub fn get_future_duration(env: &Env, future: &Address) -> Option<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::FutureDuration(future.clone()))
}

pub fn set_future_duration(env: &Env, future: &Address, duration: u64) {
    let key = DataKey::FutureDuration(future.clone());
    env.storage().persistent().set(&key, &duration);
    extend_persistent(env, &key);
}
