use gauge_interface::GaugeError;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const USER_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const USER_LIFETIME_THRESHOLD: u32 = USER_BUMP_AMOUNT - DAY_IN_LEDGERS;

const GAUGE_CONTROLLER_KEY: &str = "gauge_controller";
const FUTURE_KEY: &str = "future";
const TOTAL_LIQUIDITY_KEY: &str = "total_liquidity";
const REWARD_INDEX_KEY: &str = "reward_index";

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UserState {
    pub liquidity: i128,
    pub index_checkpoint: i128,
    pub accrued: i128,
    /// Cohort whose not-yet-claimed liquidity was already credited up to `booked_index`.
    pub booked_period: u32,
    pub booked_index: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Reward index when a period's liquidity entered the gauge.
    CohortIndex(u32),
    User(Address),
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&FUTURE_KEY)
}

pub fn set_gauge_controller(env: &Env, gauge_controller: &Address) {
    env.storage()
        .instance()
        .set(&GAUGE_CONTROLLER_KEY, gauge_controller);
}

pub fn get_gauge_controller(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&GAUGE_CONTROLLER_KEY)
        .unwrap_or_else(|| panic_with_error!(env, GaugeError::NotInitialized))
}

pub fn set_future(env: &Env, future: &Address) {
    env.storage().instance().set(&FUTURE_KEY, future);
}

pub fn get_future(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&FUTURE_KEY)
        .unwrap_or_else(|| panic_with_error!(env, GaugeError::NotInitialized))
}

pub fn get_total_liquidity(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&TOTAL_LIQUIDITY_KEY)
        .unwrap_or(0)
}

pub fn set_total_liquidity(env: &Env, amount: i128) {
    env.storage().instance().set(&TOTAL_LIQUIDITY_KEY, &amount);
}

pub fn get_reward_index(env: &Env) -> i128 {
    env.storage().instance().get(&REWARD_INDEX_KEY).unwrap_or(0)
}

pub fn set_reward_index(env: &Env, index: i128) {
    env.storage().instance().set(&REWARD_INDEX_KEY, &index);
}

pub fn get_cohort_index(env: &Env, period: u32) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::CohortIndex(period))
        .unwrap_or(0)
}

pub fn set_cohort_index(env: &Env, period: u32, index: i128) {
    let key = DataKey::CohortIndex(period);
    env.storage().persistent().set(&key, &index);
    env.storage()
        .persistent()
        .extend_ttl(&key, USER_LIFETIME_THRESHOLD, USER_BUMP_AMOUNT);
}

pub fn get_user(env: &Env, user: &Address) -> UserState {
    let key = DataKey::User(user.clone());
    match env.storage().persistent().get(&key) {
        Some(state) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, USER_LIFETIME_THRESHOLD, USER_BUMP_AMOUNT);
            state
        }
        None => UserState::default(),
    }
}

pub fn set_user(env: &Env, user: &Address, state: &UserState) {
    let key = DataKey::User(user.clone());
    env.storage().persistent().set(&key, state);
    env.storage()
        .persistent()
        .extend_ttl(&key, USER_LIFETIME_THRESHOLD, USER_BUMP_AMOUNT);
}
