use future_interface::FutureFactoryError;
use soroban_sdk::{panic_with_error, Address, Env};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

const PERMISSIONS_KEY: &str = "permissions";
const REGISTRY_KEY: &str = "registry";

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn set_permissions(env: &Env, permissions: &Address) {
    env.storage().instance().set(&PERMISSIONS_KEY, permissions);
}

pub fn get_permissions(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&PERMISSIONS_KEY)
        .unwrap_or_else(|| panic_with_error!(env, FutureFactoryError::NotInitialized))
}

pub fn set_registry(env: &Env, registry: &Address) {
    env.storage().instance().set(&REGISTRY_KEY, registry);
}

pub fn get_registry(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&REGISTRY_KEY)
        .unwrap_or_else(|| panic_with_error!(env, FutureFactoryError::NotInitialized))
}
