#![no_std]
use soroban_sdk::token::TokenInterface;
use soroban_sdk::{contractclient, contracterror, Address, Env, String};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    NotInitialized = 120,
    AlreadyInitialized = 121,
    InvalidDecimals = 122,
    NegativeAmount = 123,
    InsufficientBalance = 124,
    InsufficientAllowance = 125,
    NonTransferable = 126,
}

/// Protocol token used for FYTs, APWine-IBTs and the APW reward token.
#[contractclient(name = "ApwineTokenClient")]
pub trait ApwineTokenTrait: TokenInterface {
    fn initialize(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
        decimals: u32,
        transferable: bool,
    );

    // Admin-only supply control
    fn mint(env: Env, to: Address, amount: i128);
    fn admin_burn(env: Env, from: Address, amount: i128);

    fn total_supply(env: Env) -> i128;
    fn is_transferable(env: Env) -> bool;
    fn admin(env: Env) -> Address;
}
