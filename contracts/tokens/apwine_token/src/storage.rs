use apwine_token_interface::TokenError;
use soroban_sdk::{contracttype, panic_with_error, Address, Env, String};

// Storage TTL constants
pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub transferable: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Allowance(Address, Address),
    Balance(Address),
    Admin,
    Metadata,
    TotalSupply,
}

pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// Admin functions
pub fn has_administrator(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Admin)
}

pub fn read_administrator(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| panic_with_error!(e, TokenError::NotInitialized))
}

pub fn write_administrator(e: &Env, id: &Address) {
    e.storage().instance().set(&DataKey::Admin, id);
}

// Metadata functions
pub fn read_metadata(e: &Env) -> TokenMetadata {
    e.storage()
        .instance()
        .get(&DataKey::Metadata)
        .unwrap_or_else(|| panic_with_error!(e, TokenError::NotInitialized))
}

pub fn write_metadata(e: &Env, metadata: TokenMetadata) {
    e.storage().instance().set(&DataKey::Metadata, &metadata);
}

pub fn check_transferable(e: &Env) {
    if !read_metadata(e).transferable {
        panic_with_error!(e, TokenError::NonTransferable);
    }
}

pub fn check_nonnegative_amount(e: &Env, amount: i128) {
    if amount < 0 {
        panic_with_error!(e, TokenError::NegativeAmount);
    }
}

// Balance functions
pub fn read_balance(e: &Env, addr: &Address) -> i128 {
    let key = DataKey::Balance(addr.clone());
    if let Some(balance) = e.storage().persistent().get::<DataKey, i128>(&key) {
        e.storage()
            .persistent()
            .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
        balance
    } else {
        0
    }
}

fn write_balance(e: &Env, addr: &Address, amount: i128) {
    let key = DataKey::Balance(addr.clone());
    e.storage().persistent().set(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn receive_balance(e: &Env, addr: &Address, amount: i128) {
    let balance = read_balance(e, addr);
    write_balance(e, addr, balance + amount);
}

pub fn spend_balance(e: &Env, addr: &Address, amount: i128) {
    let balance = read_balance(e, addr);
    if balance < amount {
        panic_with_error!(e, TokenError::InsufficientBalance);
    }
    write_balance(e, addr, balance - amount);
}

// Allowance functions
pub fn read_allowance(e: &Env, from: &Address, spender: &Address) -> i128 {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    e.storage().temporary().get(&key).unwrap_or(0)
}

pub fn write_allowance(
    e: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) {
    let key = DataKey::Allowance(from.clone(), spender.clone());
    e.storage().temporary().set(&key, &amount);

    if expiration_ledger > 0 {
        let ledger = e.ledger().sequence();
        let live_for = expiration_ledger.saturating_sub(ledger);
        e.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}

pub fn spend_allowance(e: &Env, from: &Address, spender: &Address, amount: i128) {
    let allowance = read_allowance(e, from, spender);
    if allowance < amount {
        panic_with_error!(e, TokenError::InsufficientAllowance);
    }
    write_allowance(e, from, spender, allowance - amount, 0);
}

// Total supply functions
pub fn read_total_supply(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0)
}

fn write_total_supply(e: &Env, amount: i128) {
    e.storage().instance().set(&DataKey::TotalSupply, &amount);
}

pub fn increase_total_supply(e: &Env, amount: i128) {
    let total_supply = read_total_supply(e);
    write_total_supply(e, total_supply + amount);
}

pub fn decrease_total_supply(e: &Env, amount: i128) {
    let total_supply = read_total_supply(e);
    write_total_supply(e, total_supply - amount);
}
