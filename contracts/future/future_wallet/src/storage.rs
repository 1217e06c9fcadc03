use future_interface::{WalletError, YieldRecord};
use soroban_sdk::{contracttype, panic_with_error, Address, Env};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const RECORD_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

const FUTURE_KEY: &str = "future";
const IBT_KEY: &str = "ibt";

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Record(u32),
    Redeemed(u32, Address),
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&FUTURE_KEY)
}

pub fn set_future(env: &Env, future: &Address) {
    env.storage().instance().set(&FUTURE_KEY, future);
}

pub fn get_future(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&FUTURE_KEY)
        .unwrap_or_else(|| panic_with_error!(env, WalletError::NotInitialized))
}

pub fn set_ibt(env: &Env, ibt: &Address) {
    env.storage().instance().set(&IBT_KEY, ibt);
}

pub fn get_ibt(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&IBT_KEY)
        .unwrap_or_else(|| panic_with_error!(env, WalletError::NotInitialized))
}

// Per-period yield records
pub fn get_record(env: &Env, period: u32) -> Option<YieldRecord> {
    let key = DataKey::Record(period);
    let record = env.storage().persistent().get(&key);
    if record.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
    }
    record
}

pub fn set_record(env: &Env, period: u32, record: &YieldRecord) {
    let key = DataKey::Record(period);
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

// One-shot redemption markers
pub fn has_redeemed(env: &Env, period: u32, user: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Redeemed(period, user.clone()))
}

pub fn set_redeemed(env: &Env, period: u32, user: &Address) {
    let key = DataKey::Redeemed(period, user.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}
