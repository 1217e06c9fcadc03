use future_interface::VaultError;
use soroban_sdk::{panic_with_error, Address, Env};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Storage keys
const FUTURE_KEY: &str = "future";
const IBT_KEY: &str = "ibt";
const PENDING_KEY: &str = "pending";
const LOCKED_BALANCE_KEY: &str = "locked_balance";
const LOCKED_VALUE_KEY: &str = "locked_value";

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&FUTURE_KEY)
}

// Owning future (immutable after initialization)
pub fn set_future(env: &Env, future: &Address) {
    env.storage().instance().set(&FUTURE_KEY, future);
}

pub fn get_future(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&FUTURE_KEY)
        .unwrap_or_else(|| panic_with_error!(env, VaultError::NotInitialized))
}

pub fn set_ibt(env: &Env, ibt: &Address) {
    env.storage().instance().set(&IBT_KEY, ibt);
}

pub fn get_ibt(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&IBT_KEY)
        .unwrap_or_else(|| panic_with_error!(env, VaultError::NotInitialized))
}

// IBT registered for the next period
pub fn get_pending(env: &Env) -> i128 {
    env.storage().instance().get(&PENDING_KEY).unwrap_or(0)
}

pub fn set_pending(env: &Env, amount: i128) {
    env.storage().instance().set(&PENDING_KEY, &amount);
}

// IBT backing the APWine-IBT supply
pub fn get_locked_balance(env: &Env) -> i128 {
    env.storage().instance().get(&LOCKED_BALANCE_KEY).unwrap_or(0)
}

pub fn set_locked_balance(env: &Env, amount: i128) {
    env.storage().instance().set(&LOCKED_BALANCE_KEY, &amount);
}

// Underlying value of the locked principal
pub fn get_locked_value(env: &Env) -> i128 {
    env.storage().instance().get(&LOCKED_VALUE_KEY).unwrap_or(0)
}

pub fn set_locked_value(env: &Env, value: i128) {
    env.storage().instance().set(&LOCKED_VALUE_KEY, &value);
}
