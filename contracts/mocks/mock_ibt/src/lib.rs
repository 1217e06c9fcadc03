#![no_std]
use ibt_interface::{IbtTrait, IBT_RATE_SCALE};
use soroban_sdk::{
    contract, contractimpl, token::TokenInterface, Address, Env, MuxedAddress, String,
};

/// Mock interest-bearing token
///
/// Simplified aToken/yvToken stand-in: a plain fungible token whose exchange rate
/// against the underlying grows linearly with ledger time at a configurable rate.
#[contract]
pub struct MockIbt;

/// Storage keys
const ADMIN: &str = "admin";
const SYMBOL: &str = "symbol";
const BASE_RATE: &str = "base_rate";
const LAST_UPDATE_TIME: &str = "last_update_time";
const YIELD_RATE: &str = "yield_rate"; // Basis points of the initial rate per second

const BASIS_POINTS_SCALE: i128 = 10_000;

#[contractimpl]
impl MockIbt {
    /// yield_rate_bps: growth of the exchange rate in basis points per second
    pub fn __constructor(e: Env, admin: Address, symbol: String, yield_rate_bps: i128) {
        e.storage().instance().set(&ADMIN, &admin);
        e.storage().instance().set(&SYMBOL, &symbol);
        e.storage().instance().set(&YIELD_RATE, &yield_rate_bps);
        e.storage().instance().set(&BASE_RATE, &IBT_RATE_SCALE);
        e.storage()
            .instance()
            .set(&LAST_UPDATE_TIME, &e.ledger().timestamp());
    }

    /// Mint IBT to an account (faucet for tests)
    pub fn mint(e: Env, to: Address, amount: i128) {
        Self::get_admin(&e).require_auth();

        if amount < 0 {
            panic!("negative amount");
        }

        let balance = Self::get_balance(&e, &to);
        Self::set_balance(&e, &to, balance + amount);
    }

    /// Change the yield rate, keeping the rate accrued so far
    pub fn set_yield_rate(e: Env, yield_rate_bps: i128) {
        Self::get_admin(&e).require_auth();

        let current = Self::current_rate(&e);
        e.storage().instance().set(&BASE_RATE, &current);
        e.storage()
            .instance()
            .set(&LAST_UPDATE_TIME, &e.ledger().timestamp());
        e.storage().instance().set(&YIELD_RATE, &yield_rate_bps);
    }

    pub fn get_yield_rate(e: Env) -> i128 {
        e.storage().instance().get(&YIELD_RATE).unwrap_or(0)
    }

    // ========== Internal Helper Functions ==========

    fn current_rate(e: &Env) -> i128 {
        let base_rate: i128 = e
            .storage()
            .instance()
            .get(&BASE_RATE)
            .unwrap_or(IBT_RATE_SCALE);
        let last_update: u64 = e
            .storage()
            .instance()
            .get(&LAST_UPDATE_TIME)
            .unwrap_or(0);
        let elapsed = e.ledger().timestamp().saturating_sub(last_update) as i128;
        let yield_rate = Self::get_yield_rate(e.clone());

        // rate = base + SCALE * yield_rate * elapsed / BASIS_POINTS_SCALE
        let accrued = IBT_RATE_SCALE
            .checked_mul(yield_rate)
            .and_then(|v| v.checked_mul(elapsed))
            .and_then(|v| v.checked_div(BASIS_POINTS_SCALE))
            .unwrap_or(0);
        base_rate + accrued
    }

    fn get_admin(e: &Env) -> Address {
        e.storage()
            .instance()
            .get(&ADMIN)
            .expect("admin not initialized")
    }

    fn get_balance(e: &Env, account: &Address) -> i128 {
        let key = ("balance", account);
        e.storage().instance().get(&key).unwrap_or(0)
    }

    fn set_balance(e: &Env, account: &Address, amount: i128) {
        let key = ("balance", account);
        e.storage().instance().set(&key, &amount);
    }

    fn get_allowance(e: &Env, from: &Address, spender: &Address) -> i128 {
        let key = ("allowance", from, spender);
        e.storage().instance().get(&key).unwrap_or(0)
    }

    fn set_allowance(e: &Env, from: &Address, spender: &Address, amount: i128) {
        let key = ("allowance", from, spender);
        e.storage().instance().set(&key, &amount);
    }

    fn move_balance(e: &Env, from: &Address, to: &Address, amount: i128) {
        if amount < 0 {
            panic!("negative amount");
        }

        let from_balance = Self::get_balance(e, from);
        if from_balance < amount {
            panic!("insufficient balance");
        }

        Self::set_balance(e, from, from_balance - amount);
        let to_balance = Self::get_balance(e, to);
        Self::set_balance(e, to, to_balance + amount);
    }
}

#[contractimpl]
impl IbtTrait for MockIbt {
    fn exchange_rate(e: Env) -> i128 {
        Self::current_rate(&e)
    }
}

#[contractimpl]
impl TokenInterface for MockIbt {
    fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        Self::get_allowance(&e, &from, &spender)
    }

    fn approve(e: Env, from: Address, spender: Address, amount: i128, _expiration_ledger: u32) {
        from.require_auth();

        if amount < 0 {
            panic!("negative amount");
        }

        Self::set_allowance(&e, &from, &spender, amount);
    }

    fn balance(e: Env, id: Address) -> i128 {
        Self::get_balance(&e, &id)
    }

    fn transfer(e: Env, from: Address, to: MuxedAddress, amount: i128) {
        from.require_auth();
        Self::move_balance(&e, &from, &to.address(), amount);
    }

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();

        let allowance = Self::get_allowance(&e, &from, &spender);
        if allowance < amount {
            panic!("insufficient allowance");
        }
        Self::set_allowance(&e, &from, &spender, allowance - amount);

        Self::move_balance(&e, &from, &to, amount);
    }

    fn burn(e: Env, from: Address, amount: i128) {
        from.require_auth();

        let balance = Self::get_balance(&e, &from);
        if balance < amount {
            panic!("insufficient balance");
        }
        Self::set_balance(&e, &from, balance - amount);
    }

    fn burn_from(e: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();

        let allowance = Self::get_allowance(&e, &from, &spender);
        if allowance < amount {
            panic!("insufficient allowance");
        }
        Self::set_allowance(&e, &from, &spender, allowance - amount);

        let balance = Self::get_balance(&e, &from);
        if balance < amount {
            panic!("insufficient balance");
        }
        Self::set_balance(&e, &from, balance - amount);
    }

    fn decimals(_e: Env) -> u32 {
        7
    }

    fn name(e: Env) -> String {
        Self::symbol(e)
    }

    fn symbol(e: Env) -> String {
        e.storage()
            .instance()
            .get(&SYMBOL)
            .unwrap_or_else(|| String::from_str(&e, "IBT"))
    }
}
