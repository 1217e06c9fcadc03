use future_interface::{FutureConfig, FutureError};
use soroban_sdk::{contracttype, panic_with_error, Address, Env};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const USER_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const USER_LIFETIME_THRESHOLD: u32 = USER_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Instance keys
const CONFIG_KEY: &str = "config";
const NEXT_PERIOD_INDEX_KEY: &str = "next_period_index";
const NEXT_PERIOD_TIMESTAMP_KEY: &str = "next_period_ts";
const LOCKED_SUPPLY_KEY: &str = "locked_supply";

/// Scaled share of one period's registration pool.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Registration {
    pub period: u32,
    pub scaled: i128,
}

/// Registration pool of one period.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Cohort {
    /// Scaled units handed out to the period's registrants.
    pub scaled_total: i128,
    /// APWine-IBT minted for the pool when the period started.
    pub apwibt_minted: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Fyt(u32),
    Cohort(u32),
    Registration(Address),
    LastClaimed(Address),
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// Configuration (immutable after initialization)
pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&CONFIG_KEY)
}

pub fn set_config(env: &Env, config: &FutureConfig) {
    env.storage().instance().set(&CONFIG_KEY, config);
}

pub fn get_config(env: &Env) -> FutureConfig {
    env.storage()
        .instance()
        .get(&CONFIG_KEY)
        .unwrap_or_else(|| panic_with_error!(env, FutureError::NotInitialized))
}

// Period counters
pub fn get_next_period_index(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&NEXT_PERIOD_INDEX_KEY)
        .unwrap_or(1)
}

pub fn set_next_period_index(env: &Env, index: u32) {
    env.storage().instance().set(&NEXT_PERIOD_INDEX_KEY, &index);
}

pub fn get_next_period_timestamp(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&NEXT_PERIOD_TIMESTAMP_KEY)
        .unwrap_or(0)
}

pub fn set_next_period_timestamp(env: &Env, timestamp: u64) {
    env.storage()
        .instance()
        .set(&NEXT_PERIOD_TIMESTAMP_KEY, &timestamp);
}

// APWine-IBT backed by the locked pool, claimed or not
pub fn get_locked_supply(env: &Env) -> i128 {
    env.storage().instance().get(&LOCKED_SUPPLY_KEY).unwrap_or(0)
}

pub fn set_locked_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&LOCKED_SUPPLY_KEY, &supply);
}

// Per-period state
pub fn get_fyt(env: &Env, period: u32) -> Option<Address> {
    let key = DataKey::Fyt(period);
    let fyt = env.storage().persistent().get(&key);
    if fyt.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, USER_LIFETIME_THRESHOLD, USER_BUMP_AMOUNT);
    }
    fyt
}

pub fn set_fyt(env: &Env, period: u32, fyt: &Address) {
    let key = DataKey::Fyt(period);
    env.storage().persistent().set(&key, fyt);
    env.storage()
        .persistent()
        .extend_ttl(&key, USER_LIFETIME_THRESHOLD, USER_BUMP_AMOUNT);
}

pub fn get_cohort(env: &Env, period: u32) -> Cohort {
    env.storage()
        .persistent()
        .get(&DataKey::Cohort(period))
        .unwrap_or_default()
}

pub fn set_cohort(env: &Env, period: u32, cohort: &Cohort) {
    let key = DataKey::Cohort(period);
    env.storage().persistent().set(&key, cohort);
    env.storage()
        .persistent()
        .extend_ttl(&key, USER_LIFETIME_THRESHOLD, USER_BUMP_AMOUNT);
}

// Per-user state
pub fn get_registration(env: &Env, user: &Address) -> Option<Registration> {
    let key = DataKey::Registration(user.clone());
    let registration = env.storage().persistent().get(&key);
    if registration.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, USER_LIFETIME_THRESHOLD, USER_BUMP_AMOUNT);
    }
    registration
}

pub fn set_registration(env: &Env, user: &Address, registration: &Registration) {
    let key = DataKey::Registration(user.clone());
    env.storage().persistent().set(&key, registration);
    env.storage()
        .persistent()
        .extend_ttl(&key, USER_LIFETIME_THRESHOLD, USER_BUMP_AMOUNT);
}

pub fn remove_registration(env: &Env, user: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Registration(user.clone()));
}

pub fn get_last_claimed(env: &Env, user: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::LastClaimed(user.clone()))
        .unwrap_or(0)
}

pub fn set_last_claimed(env: &Env, user: &Address, period: u32) {
    let key = DataKey::LastClaimed(user.clone());
    env.storage().persistent().set(&key, &period);
    env.storage()
        .persistent()
        .extend_ttl(&key, USER_LIFETIME_THRESHOLD, USER_BUMP_AMOUNT);
}
