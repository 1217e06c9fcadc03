#![cfg(test)]

use crate::{FutureWallet, FutureWalletClient, WalletError, YieldRecord};
use mock_ibt::{MockIbt, MockIbtClient};
use soroban_sdk::{contract, contractimpl, testutils::Address as _, Address, Env, String};

/// Future stand-in tracking FYT entitlements per (user, period).
#[contract]
pub struct StubFuture;

#[contractimpl]
impl StubFuture {
    pub fn set_fyt(env: Env, user: Address, period: u32, amount: i128) {
        env.storage().instance().set(&(user, period), &amount);
    }

    pub fn get_fyt_entitlement(env: Env, user: Address, period: u32) -> i128 {
        env.storage().instance().get(&(user, period)).unwrap_or(0)
    }

    pub fn burn_fyt_for_yield(env: Env, user: Address, period: u32) -> i128 {
        let key = (user, period);
        let amount: i128 = env.storage().instance().get(&key).unwrap_or(0);
        env.storage().instance().set(&key, &0i128);
        amount
    }
}

struct FutureWalletTest<'a> {
    env: Env,
    user1: Address,
    user2: Address,
    ibt: MockIbtClient<'a>,
    future: StubFutureClient<'a>,
    wallet: FutureWalletClient<'a>,
}

impl<'a> FutureWalletTest<'a> {
    fn setup() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let user1 = Address::generate(&env);
        let user2 = Address::generate(&env);

        let ibt_id = env.register(MockIbt, (&admin, String::from_str(&env, "ADAI"), 0i128));
        let ibt = MockIbtClient::new(&env, &ibt_id);
        let future_id = env.register(StubFuture, ());
        let future = StubFutureClient::new(&env, &future_id);

        let wallet_id = env.register(FutureWallet, ());
        let wallet = FutureWalletClient::new(&env, &wallet_id);
        wallet.initialize(&future_id, &ibt_id);

        FutureWalletTest {
            env,
            user1,
            user2,
            ibt,
            future,
            wallet,
        }
    }

    /// Period 1 expired with 300 IBT of yield over 100 + 200 FYT.
    fn expire_period_one(&self) {
        self.future.set_fyt(&self.user1, &1, &100);
        self.future.set_fyt(&self.user2, &1, &200);
        self.ibt.mint(&self.wallet.address, &300);
        self.wallet.register_expired_period(&1, &300, &300);
    }
}

#[test]
fn test_unexpired_period() {
    let test = FutureWalletTest::setup();

    assert_eq!(test.wallet.get_redeemable_yield(&1, &test.user1), 0);
    assert_eq!(
        test.wallet.try_redeem_yield(&test.user1, &1),
        Err(Ok(WalletError::PeriodNotExpired))
    );
}

#[test]
fn test_period_expires_once() {
    let test = FutureWalletTest::setup();
    test.expire_period_one();

    assert_eq!(
        test.wallet.get_expired_period(&1),
        Some(YieldRecord {
            yield_balance: 300,
            fyt_outstanding: 300,
        })
    );
    assert_eq!(
        test.wallet.try_register_expired_period(&1, &10, &10),
        Err(Ok(WalletError::PeriodAlreadyExpired))
    );
}

#[test]
fn test_redeem_pro_rata() {
    let test = FutureWalletTest::setup();
    test.expire_period_one();

    assert_eq!(test.wallet.get_redeemable_yield(&1, &test.user1), 100);
    assert_eq!(test.wallet.get_redeemable_yield(&1, &test.user2), 200);

    assert_eq!(test.wallet.redeem_yield(&test.user1, &1), 100);
    assert_eq!(test.ibt.balance(&test.user1), 100);
    assert_eq!(test.wallet.get_redeemable_yield(&1, &test.user1), 0);

    // The other holder's share is unaffected
    assert_eq!(test.wallet.get_redeemable_yield(&1, &test.user2), 200);
    assert_eq!(test.wallet.redeem_yield(&test.user2, &1), 200);
    assert_eq!(
        test.wallet.get_expired_period(&1),
        Some(YieldRecord {
            yield_balance: 0,
            fyt_outstanding: 0,
        })
    );
}

#[test]
fn test_no_double_redemption() {
    let test = FutureWalletTest::setup();
    test.expire_period_one();

    test.wallet.redeem_yield(&test.user1, &1);
    // Receiving more FYT of the period does not reopen the redemption
    test.future.set_fyt(&test.user1, &1, &50);

    assert_eq!(
        test.wallet.try_redeem_yield(&test.user1, &1),
        Err(Ok(WalletError::YieldAlreadyRedeemed))
    );
    assert_eq!(test.ibt.balance(&test.user1), 100);
}

#[test]
fn test_zero_entitlement_is_noop() {
    let test = FutureWalletTest::setup();
    test.expire_period_one();
    let outsider = Address::generate(&test.env);

    assert_eq!(test.wallet.get_redeemable_yield(&1, &outsider), 0);
    assert_eq!(test.wallet.redeem_yield(&outsider, &1), 0);
    assert_eq!(test.ibt.balance(&outsider), 0);
}
