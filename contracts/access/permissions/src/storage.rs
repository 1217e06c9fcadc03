use permissions_interface::Role;
use soroban_sdk::{contracttype, Address, Env};

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const ROLE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const ROLE_LIFETIME_THRESHOLD: u32 = ROLE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Initialized,
    Member(Role, Address),
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&DataKey::Initialized, &true);
}

pub fn has_role(env: &Env, role: Role, account: &Address) -> bool {
    let key = DataKey::Member(role, account.clone());
    if env.storage().persistent().has(&key) {
        env.storage()
            .persistent()
            .extend_ttl(&key, ROLE_LIFETIME_THRESHOLD, ROLE_BUMP_AMOUNT);
        true
    } else {
        false
    }
}

pub fn set_role(env: &Env, role: Role, account: &Address) {
    let key = DataKey::Member(role, account.clone());
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, ROLE_LIFETIME_THRESHOLD, ROLE_BUMP_AMOUNT);
}

pub fn remove_role(env: &Env, role: Role, account: &Address) {
    let key = DataKey::Member(role, account.clone());
    env.storage().persistent().remove(&key);
}
