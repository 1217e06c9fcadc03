#![no_std]

use soroban_sdk::{contractclient, Env};

/// Fixed-point scale of `exchange_rate`: one IBT unit is worth
/// `exchange_rate / IBT_RATE_SCALE` units of the underlying asset.
pub const IBT_RATE_SCALE: i128 = 10_000_000;

/// Yield-bearing token adapter (aToken, yvToken...).
///
/// Alongside the SEP-41 token surface, exposes the value of one IBT unit in the
/// underlying asset. The rate never decreases.
#[contractclient(name = "IbtClient")]
pub trait IbtTrait {
    fn exchange_rate(env: Env) -> i128;
}
