use crate::storage;
use apwine_maths::get_actual_output;
use future_interface::{FutureClient, FutureWalletTrait, WalletError, YieldRecord};
use soroban_sdk::{contract, contractevent, contractimpl, token, Address, Env};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PeriodExpired {
    #[topic]
    pub period: u32,
    pub yield_amount: i128,
    pub fyt_supply: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct YieldRedeemed {
    #[topic]
    pub user: Address,
    #[topic]
    pub period: u32,
    pub fyt_burned: i128,
    pub amount: i128,
}

/// Holds the yield of every expired period of one future.
///
/// Each period's yield is shared pro rata between the FYTs of that period,
/// whoever holds them at redemption time.
///
/// Redemption is one-shot per holder and period. FYTs of a period that reach
/// a holder after it redeemed are no longer redeemable by that holder; they
/// have to move to one that has not.
#[contract]
pub struct FutureWallet;

#[contractimpl]
impl FutureWalletTrait for FutureWallet {
    fn initialize(env: Env, future: Address, ibt: Address) -> Result<(), WalletError> {
        if storage::is_initialized(&env) {
            return Err(WalletError::AlreadyInitialized);
        }
        storage::set_future(&env, &future);
        storage::set_ibt(&env, &ibt);
        storage::extend_instance(&env);
        Ok(())
    }

    fn get_future_address(env: Env) -> Address {
        storage::get_future(&env)
    }

    fn get_ibt_address(env: Env) -> Address {
        storage::get_ibt(&env)
    }

    fn register_expired_period(
        env: Env,
        period: u32,
        yield_amount: i128,
        fyt_supply: i128,
    ) -> Result<(), WalletError> {
        storage::get_future(&env).require_auth();
        storage::extend_instance(&env);

        if storage::get_record(&env, period).is_some() {
            return Err(WalletError::PeriodAlreadyExpired);
        }

        storage::set_record(
            &env,
            period,
            &YieldRecord {
                yield_balance: yield_amount.max(0),
                fyt_outstanding: fyt_supply.max(0),
            },
        );

        PeriodExpired {
            period,
            yield_amount,
            fyt_supply,
        }
        .publish(&env);
        Ok(())
    }

    fn get_expired_period(env: Env, period: u32) -> Option<YieldRecord> {
        storage::get_record(&env, period)
    }

    fn get_redeemable_yield(env: Env, period: u32, user: Address) -> i128 {
        let record = match storage::get_record(&env, period) {
            Some(record) => record,
            None => return 0,
        };
        if storage::has_redeemed(&env, period, &user) {
            return 0;
        }

        let future = FutureClient::new(&env, &storage::get_future(&env));
        let fyt = future
            .get_fyt_entitlement(&user, &period)
            .min(record.fyt_outstanding);
        get_actual_output(fyt, record.fyt_outstanding, record.yield_balance)
    }

    fn redeem_yield(env: Env, user: Address, period: u32) -> Result<i128, WalletError> {
        user.require_auth();
        storage::extend_instance(&env);

        let mut record = storage::get_record(&env, period).ok_or(WalletError::PeriodNotExpired)?;
        if storage::has_redeemed(&env, period, &user) {
            return Err(WalletError::YieldAlreadyRedeemed);
        }

        let future = FutureClient::new(&env, &storage::get_future(&env));
        let burned = future.burn_fyt_for_yield(&user, &period);
        if burned == 0 {
            return Ok(0);
        }

        let fyt = burned.min(record.fyt_outstanding);
        let amount = get_actual_output(fyt, record.fyt_outstanding, record.yield_balance);
        record.fyt_outstanding -= fyt;
        record.yield_balance -= amount;
        storage::set_record(&env, period, &record);
        storage::set_redeemed(&env, period, &user);

        if amount > 0 {
            token::Client::new(&env, &storage::get_ibt(&env)).transfer(
                &env.current_contract_address(),
                &user,
                &amount,
            );
        }

        YieldRedeemed {
            user,
            period,
            fyt_burned: burned,
            amount,
        }
        .publish(&env);
        Ok(amount)
    }
}
