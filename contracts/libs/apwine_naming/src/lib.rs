#![no_std]

//! Symbol generation for the tokens minted by a future.
//!
//! `DurationPrefixed` (default):
//! - FYT: `<days>D-<PLATFORM>-<ASSET>-<period>`, e.g. `7D-AAVE-ADAI-1`
//! - APWine-IBT: `APW<days>D-<PLATFORM>-<ASSET>`, e.g. `APW7D-AAVE-ADAI`
//!
//! `Compact`:
//! - FYT: `FYT<period>-<days>D-<ASSET>-<PLATFORM>`, e.g. `FYT1-7D-ADAI-AAVE`
//! - APWine-IBT: `APW-<days>D-<ASSET>-<PLATFORM>`, e.g. `APW-7D-ADAI-AAVE`
//!
//! Asset and platform codes must be non-empty and free of `-`, so every
//! field of a symbol can be read back unambiguously. Token names are the
//! same strings as the symbols.

use soroban_sdk::{contracterror, contracttype, panic_with_error, Env, String};

pub const MAX_SYMBOL_LEN: usize = 64;
pub const SECONDS_PER_DAY: u64 = 86_400;

const DELIMITER: u8 = b'-';
const FYT_PREFIX: &[u8] = b"FYT";
const IBT_PREFIX: &[u8] = b"APW";

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum NamingError {
    SymbolTooLong = 150,
    InvalidCode = 151,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NamingPolicy {
    DurationPrefixed = 0,
    Compact = 1,
}

impl Default for NamingPolicy {
    fn default() -> Self {
        NamingPolicy::DurationPrefixed
    }
}

struct SymbolBuilder<'a> {
    env: &'a Env,
    buf: [u8; MAX_SYMBOL_LEN],
    len: usize,
}

impl<'a> SymbolBuilder<'a> {
    fn new(env: &'a Env) -> Self {
        SymbolBuilder {
            env,
            buf: [0u8; MAX_SYMBOL_LEN],
            len: 0,
        }
    }

    fn reserve(&self, n: usize) -> usize {
        let end = self.len + n;
        if end > MAX_SYMBOL_LEN {
            panic_with_error!(self.env, NamingError::SymbolTooLong);
        }
        end
    }

    fn push_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        let end = self.reserve(bytes.len());
        self.buf[self.len..end].copy_from_slice(bytes);
        self.len = end;
        self
    }

    fn push_delimiter(&mut self) -> &mut Self {
        self.push_bytes(&[DELIMITER])
    }

    /// Appends an asset or platform code.
    fn push_code(&mut self, code: &String) -> &mut Self {
        let n = code.len() as usize;
        if n == 0 {
            panic_with_error!(self.env, NamingError::InvalidCode);
        }
        let end = self.reserve(n);
        let start = self.len;
        code.copy_into_slice(&mut self.buf[start..end]);
        if self.buf[start..end].contains(&DELIMITER) {
            panic_with_error!(self.env, NamingError::InvalidCode);
        }
        self.len = end;
        self
    }

    fn push_u64(&mut self, mut value: u64) -> &mut Self {
        let mut digits = [0u8; 20];
        let mut i = digits.len();
        loop {
            i -= 1;
            digits[i] = b'0' + (value % 10) as u8;
            value /= 10;
            if value == 0 {
                break;
            }
        }
        self.push_bytes(&digits[i..])
    }

    fn push_days(&mut self, period_duration: u64) -> &mut Self {
        self.push_u64(period_duration / SECONDS_PER_DAY).push_bytes(b"D")
    }

    fn build(&self) -> String {
        String::from_bytes(self.env, &self.buf[..self.len])
    }
}

/// Symbol of the FYT minted for `period` of a future.
pub fn gen_fyt_symbol(
    env: &Env,
    policy: NamingPolicy,
    period: u32,
    asset: &String,
    platform: &String,
    period_duration: u64,
) -> String {
    let mut b = SymbolBuilder::new(env);
    match policy {
        NamingPolicy::DurationPrefixed => {
            b.push_days(period_duration)
                .push_delimiter()
                .push_code(platform)
                .push_delimiter()
                .push_code(asset)
                .push_delimiter()
                .push_u64(period as u64);
        }
        NamingPolicy::Compact => {
            b.push_bytes(FYT_PREFIX)
                .push_u64(period as u64)
                .push_delimiter()
                .push_days(period_duration)
                .push_delimiter()
                .push_code(asset)
                .push_delimiter()
                .push_code(platform);
        }
    }
    b.build()
}

/// Symbol of the APWine-IBT of a future.
pub fn gen_ibt_symbol(
    env: &Env,
    policy: NamingPolicy,
    asset: &String,
    platform: &String,
    period_duration: u64,
) -> String {
    let mut b = SymbolBuilder::new(env);
    match policy {
        NamingPolicy::DurationPrefixed => {
            b.push_bytes(IBT_PREFIX)
                .push_days(period_duration)
                .push_delimiter()
                .push_code(platform)
                .push_delimiter()
                .push_code(asset);
        }
        NamingPolicy::Compact => {
            b.push_bytes(IBT_PREFIX)
                .push_delimiter()
                .push_days(period_duration)
                .push_delimiter()
                .push_code(asset)
                .push_delimiter()
                .push_code(platform);
        }
    }
    b.build()
}

#[cfg(test)]
mod test {
    use super::*;

    const DAY: u64 = SECONDS_PER_DAY;

    fn s(env: &Env, v: &str) -> String {
        String::from_str(env, v)
    }

    #[test]
    fn test_fyt_symbol_duration_prefixed() {
        let env = Env::default();
        let symbol = gen_fyt_symbol(
            &env,
            NamingPolicy::DurationPrefixed,
            2,
            &s(&env, "ADAI"),
            &s(&env, "AAVE"),
            30 * DAY,
        );
        assert_eq!(symbol, s(&env, "30D-AAVE-ADAI-2"));
    }

    #[test]
    fn test_weekly_fyt_symbol() {
        let env = Env::default();
        let symbol = gen_fyt_symbol(
            &env,
            NamingPolicy::default(),
            1,
            &s(&env, "YUSD"),
            &s(&env, "YEARN"),
            7 * DAY,
        );
        assert_eq!(symbol, s(&env, "7D-YEARN-YUSD-1"));
    }

    #[test]
    fn test_ibt_symbol_duration_prefixed() {
        let env = Env::default();
        let symbol = gen_ibt_symbol(
            &env,
            NamingPolicy::DurationPrefixed,
            &s(&env, "ADAI"),
            &s(&env, "AAVE"),
            7 * DAY,
        );
        assert_eq!(symbol, s(&env, "APW7D-AAVE-ADAI"));
    }

    #[test]
    fn test_compact_policy() {
        let env = Env::default();
        let fyt = gen_fyt_symbol(
            &env,
            NamingPolicy::Compact,
            12,
            &s(&env, "ADAI"),
            &s(&env, "AAVE"),
            7 * DAY,
        );
        assert_eq!(fyt, s(&env, "FYT12-7D-ADAI-AAVE"));

        let ibt = gen_ibt_symbol(
            &env,
            NamingPolicy::Compact,
            &s(&env, "ADAI"),
            &s(&env, "AAVE"),
            7 * DAY,
        );
        assert_eq!(ibt, s(&env, "APW-7D-ADAI-AAVE"));
    }

    #[test]
    fn test_distinct_tuples_give_distinct_symbols() {
        let env = Env::default();
        let asset = s(&env, "ADAI");
        let platform = s(&env, "AAVE");
        let p = NamingPolicy::DurationPrefixed;

        let a = gen_fyt_symbol(&env, p, 1, &asset, &platform, 7 * DAY);
        let b = gen_fyt_symbol(&env, p, 2, &asset, &platform, 7 * DAY);
        let c = gen_fyt_symbol(&env, p, 1, &asset, &platform, 30 * DAY);
        let d = gen_fyt_symbol(&env, p, 1, &s(&env, "AUSDC"), &platform, 7 * DAY);

        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_eq!(a, gen_fyt_symbol(&env, p, 1, &asset, &platform, 7 * DAY));
    }

    #[test]
    fn test_period_zero_and_large_index() {
        let env = Env::default();
        let asset = s(&env, "ADAI");
        let platform = s(&env, "AAVE");
        let zero = gen_fyt_symbol(&env, NamingPolicy::DurationPrefixed, 0, &asset, &platform, DAY);
        assert_eq!(zero, s(&env, "1D-AAVE-ADAI-0"));

        let large = gen_fyt_symbol(
            &env,
            NamingPolicy::DurationPrefixed,
            u32::MAX,
            &asset,
            &platform,
            DAY,
        );
        assert_eq!(large, s(&env, "1D-AAVE-ADAI-4294967295"));
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #150)")]
    fn test_symbol_too_long() {
        let env = Env::default();
        let asset = s(&env, "ANEXCEPTIONALLYLONGASSETSYMBOLTHATDOESNOTFITINTOANYTOKENSYMBOL");
        gen_fyt_symbol(
            &env,
            NamingPolicy::DurationPrefixed,
            1,
            &asset,
            &s(&env, "AAVE"),
            7 * DAY,
        );
    }

    #[test]
    fn test_compact_fields_do_not_merge() {
        let env = Env::default();
        let p = NamingPolicy::Compact;
        let platform = s(&env, "AAVE");

        let a = gen_fyt_symbol(&env, p, 11, &s(&env, "ADAI"), &platform, 7 * DAY);
        let b = gen_fyt_symbol(&env, p, 1, &s(&env, "1ADAI"), &platform, 7 * DAY);
        let c = gen_fyt_symbol(&env, p, 1, &s(&env, "ADAI"), &platform, 30 * DAY);
        let d = gen_fyt_symbol(&env, p, 1, &s(&env, "ADAI"), &platform, 7 * DAY);
        assert_ne!(a, b);
        assert_ne!(c, d);

        let e = gen_ibt_symbol(&env, p, &s(&env, "ADAIA"), &s(&env, "AVE"), 7 * DAY);
        let f = gen_ibt_symbol(&env, p, &s(&env, "ADAI"), &platform, 7 * DAY);
        assert_ne!(e, f);
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #151)")]
    fn test_code_with_delimiter_rejected() {
        let env = Env::default();
        // Would read the same as platform "AAVE-A" over asset "DAI"
        gen_fyt_symbol(
            &env,
            NamingPolicy::DurationPrefixed,
            1,
            &s(&env, "A-DAI"),
            &s(&env, "AAVE"),
            7 * DAY,
        );
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #151)")]
    fn test_empty_code_rejected() {
        let env = Env::default();
        gen_ibt_symbol(
            &env,
            NamingPolicy::Compact,
            &s(&env, "ADAI"),
            &s(&env, ""),
            7 * DAY,
        );
    }
}
