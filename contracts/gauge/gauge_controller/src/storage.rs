use gauge_interface::GaugeControllerError;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const GAUGE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const GAUGE_LIFETIME_THRESHOLD: u32 = GAUGE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Instance keys
const PERMISSIONS_KEY: &str = "permissions";
const REGISTRY_KEY: &str = "registry";
const PARAMS_KEY: &str = "params";
const EMISSION_KEY: &str = "emission";
const APW_TOKEN_KEY: &str = "apw_token";
const WITHDRAWABLE_KEY: &str = "withdrawable";
const TOTAL_WEIGHT_KEY: &str = "total_weight";

/// Admin-tunable emission parameters.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EpochParams {
    pub epoch_length: u64,
    /// Share of the epoch supply emitted per epoch, scaled by `PRECISION`.
    pub inflation_rate: i128,
    pub initial_supply: i128,
}

/// Running state of the emission schedule.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmissionState {
    pub epoch: u32,
    pub epoch_start: u64,
    /// Supply the current epoch's inflation applies to.
    pub epoch_supply: i128,
    pub last_update: u64,
    /// Rewards emitted per unit of weight, scaled by `PRECISION`.
    pub reward_index: i128,
}

#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GaugeState {
    pub weight: i128,
    pub index_checkpoint: i128,
    /// Accrued but not yet handed to the gauge.
    pub unclaimed: i128,
    /// Handed to the gauge through checkpoints.
    pub distributed: i128,
    pub minted: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Gauge(Address),
    GaugeOfFuture(Address),
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// Collaborators (immutable after construction)
pub fn set_permissions(env: &Env, permissions: &Address) {
    env.storage().instance().set(&PERMISSIONS_KEY, permissions);
}

pub fn get_permissions(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&PERMISSIONS_KEY)
        .unwrap_or_else(|| panic_with_error!(env, GaugeControllerError::NotInitialized))
}

pub fn set_registry(env: &Env, registry: &Address) {
    env.storage().instance().set(&REGISTRY_KEY, registry);
}

pub fn get_registry(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&REGISTRY_KEY)
        .unwrap_or_else(|| panic_with_error!(env, GaugeControllerError::NotInitialized))
}

// Emission
pub fn set_params(env: &Env, params: &EpochParams) {
    env.storage().instance().set(&PARAMS_KEY, params);
}

pub fn get_params(env: &Env) -> EpochParams {
    env.storage()
        .instance()
        .get(&PARAMS_KEY)
        .unwrap_or_else(|| panic_with_error!(env, GaugeControllerError::NotInitialized))
}

pub fn set_emission(env: &Env, emission: &EmissionState) {
    env.storage().instance().set(&EMISSION_KEY, emission);
}

pub fn get_emission(env: &Env) -> EmissionState {
    env.storage()
        .instance()
        .get(&EMISSION_KEY)
        .unwrap_or_else(|| panic_with_error!(env, GaugeControllerError::NotInitialized))
}

pub fn get_total_weight(env: &Env) -> i128 {
    env.storage().instance().get(&TOTAL_WEIGHT_KEY).unwrap_or(0)
}

pub fn set_total_weight(env: &Env, weight: i128) {
    env.storage().instance().set(&TOTAL_WEIGHT_KEY, &weight);
}

// Reward token and withdrawal switch
pub fn set_apw_token(env: &Env, token: &Address) {
    env.storage().instance().set(&APW_TOKEN_KEY, token);
}

pub fn get_apw_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&APW_TOKEN_KEY)
}

pub fn set_withdrawable(env: &Env, withdrawable: bool) {
    env.storage().instance().set(&WITHDRAWABLE_KEY, &withdrawable);
}

pub fn get_withdrawable(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&WITHDRAWABLE_KEY)
        .unwrap_or(false)
}

// Gauges
pub fn get_gauge(env: &Env, gauge: &Address) -> Option<GaugeState> {
    let key = DataKey::Gauge(gauge.clone());
    let state = env.storage().persistent().get(&key);
    if state.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, GAUGE_LIFETIME_THRESHOLD, GAUGE_BUMP_AMOUNT);
    }
    state
}

pub fn set_gauge(env: &Env, gauge: &Address, state: &GaugeState) {
    let key = DataKey::Gauge(gauge.clone());
    env.storage().persistent().set(&key, state);
    env.storage()
        .persistent()
        .extend_ttl(&key, GAUGE_LIFETIME_THRESHOLD, GAUGE_BUMP_AMOUNT);
}

pub fn get_gauge_of_future(env: &Env, future: &Address) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::GaugeOfFuture(future.clone()))
}

pub fn set_gauge_of_future(env: &Env, future: &Address, gauge: &Address) {
    let key = DataKey::GaugeOfFuture(future.clone());
    env.storage().persistent().set(&key, gauge);
    env.storage()
        .persistent()
        .extend_ttl(&key, GAUGE_LIFETIME_THRESHOLD, GAUGE_BUMP_AMOUNT);
}
