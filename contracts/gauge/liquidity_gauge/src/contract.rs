use crate::events;
use crate::storage::{self, UserState};
use apwine_maths::mul_div;
use future_interface::FutureClient;
use gauge_interface::{GaugeControllerClient, GaugeError, LiquidityGaugeTrait, PRECISION};
use soroban_sdk::{contract, contractimpl, Address, Env};

/// Per-future gauge. Liquidity is the APWine-IBT held by lockers; rewards are
/// tracked with a global index and one index snapshot per period cohort so
/// positions earn from the moment their period starts, before they are claimed.
#[contract]
pub struct LiquidityGauge;

impl LiquidityGauge {
    fn require_future(env: &Env) {
        storage::get_future(env).require_auth();
        storage::extend_instance(env);
    }

    /// Pulls the gauge's share of emissions and spreads it over current liquidity.
    fn update_index(env: &Env) -> i128 {
        let gauge_controller = GaugeControllerClient::new(env, &storage::get_gauge_controller(env));
        let rewards = gauge_controller.checkpoint_gauge(&env.current_contract_address());
        let index = Self::index_after(env, rewards);
        storage::set_reward_index(env, index);
        index
    }

    fn simulated_index(env: &Env) -> i128 {
        let gauge_controller = GaugeControllerClient::new(env, &storage::get_gauge_controller(env));
        let rewards = gauge_controller.get_gauge_pending_rewards(&env.current_contract_address());
        Self::index_after(env, rewards)
    }

    fn index_after(env: &Env, rewards: i128) -> i128 {
        let index = storage::get_reward_index(env);
        let total = storage::get_total_liquidity(env);
        if total <= 0 || rewards <= 0 {
            return index;
        }
        index + mul_div(rewards, PRECISION, total)
    }

    fn accrue(mut state: UserState, index: i128) -> UserState {
        state.accrued += mul_div(state.liquidity, index - state.index_checkpoint, PRECISION);
        state.index_checkpoint = index;
        state
    }

    /// Rewards earned by `amount` of a cohort's liquidity that is not yet on the user.
    fn cohort_rewards(env: &Env, state: &UserState, amount: i128, period: u32, index: i128) -> i128 {
        let start = if state.booked_period == period {
            state.booked_index
        } else {
            storage::get_cohort_index(env, period)
        };
        mul_div(amount, index - start, PRECISION)
    }
}

#[contractimpl]
impl LiquidityGaugeTrait for LiquidityGauge {
    fn initialize(env: Env, gauge_controller: Address, future: Address) -> Result<(), GaugeError> {
        if storage::is_initialized(&env) {
            return Err(GaugeError::AlreadyInitialized);
        }
        storage::set_gauge_controller(&env, &gauge_controller);
        storage::set_future(&env, &future);
        storage::extend_instance(&env);
        Ok(())
    }

    fn get_future_address(env: Env) -> Address {
        storage::get_future(&env)
    }

    fn get_gauge_controller_address(env: Env) -> Address {
        storage::get_gauge_controller(&env)
    }

    fn add_period_liquidity(env: Env, period: u32, amount: i128) -> Result<(), GaugeError> {
        Self::require_future(&env);
        if amount < 0 {
            return Err(GaugeError::InvalidAmount);
        }

        let index = Self::update_index(&env);
        storage::set_cohort_index(&env, period, index);
        storage::set_total_liquidity(&env, storage::get_total_liquidity(&env) + amount);

        events::PeriodLiquidityAdded {
            period,
            amount,
            reward_index: index,
        }
        .publish(&env);
        Ok(())
    }

    fn register_user_liquidity(
        env: Env,
        user: Address,
        amount: i128,
        since_period: u32,
    ) -> Result<(), GaugeError> {
        Self::require_future(&env);
        if amount <= 0 {
            return Err(GaugeError::InvalidAmount);
        }

        let index = Self::update_index(&env);
        let mut state = Self::accrue(storage::get_user(&env, &user), index);
        state.accrued += Self::cohort_rewards(&env, &state, amount, since_period, index);
        state.liquidity += amount;
        state.booked_period = 0;
        state.booked_index = 0;
        storage::set_user(&env, &user, &state);

        events::UserLiquidityRegistered {
            user,
            amount,
            since_period,
        }
        .publish(&env);
        Ok(())
    }

    fn remove_user_liquidity(env: Env, user: Address, amount: i128) -> Result<(), GaugeError> {
        Self::require_future(&env);
        if amount <= 0 {
            return Err(GaugeError::InvalidAmount);
        }

        let index = Self::update_index(&env);
        let mut state = Self::accrue(storage::get_user(&env, &user), index);
        if state.liquidity < amount {
            return Err(GaugeError::InsufficientLiquidity);
        }
        state.liquidity -= amount;
        storage::set_user(&env, &user, &state);
        storage::set_total_liquidity(&env, storage::get_total_liquidity(&env) - amount);

        events::UserLiquidityRemoved { user, amount }.publish(&env);
        Ok(())
    }

    fn get_user_redeemable(env: Env, user: Address) -> i128 {
        let index = Self::simulated_index(&env);
        let state = Self::accrue(storage::get_user(&env, &user), index);

        let (pending, period) =
            FutureClient::new(&env, &storage::get_future(&env)).get_pending_liquidity(&user);
        let mut redeemable = state.accrued;
        if pending > 0 {
            redeemable += Self::cohort_rewards(&env, &state, pending, period, index);
        }
        redeemable
    }

    fn redeem_apw(env: Env, user: Address) -> Result<i128, GaugeError> {
        user.require_auth();
        storage::extend_instance(&env);

        let gauge_controller = GaugeControllerClient::new(&env, &storage::get_gauge_controller(&env));
        if !gauge_controller.get_withdrawable_state() {
            return Err(GaugeError::WithdrawalsPaused);
        }

        let index = Self::update_index(&env);
        let mut state = Self::accrue(storage::get_user(&env, &user), index);

        // Credit an unclaimed cohort position up to now and remember where it stopped
        let (pending, period) =
            FutureClient::new(&env, &storage::get_future(&env)).get_pending_liquidity(&user);
        if pending > 0 {
            state.accrued += Self::cohort_rewards(&env, &state, pending, period, index);
            state.booked_period = period;
            state.booked_index = index;
        }

        let amount = state.accrued;
        state.accrued = 0;
        storage::set_user(&env, &user, &state);

        if amount > 0 {
            gauge_controller.mint_rewards(&env.current_contract_address(), &user, &amount);
        }

        events::ApwRedeemed { user, amount }.publish(&env);
        Ok(amount)
    }

    fn get_user_liquidity(env: Env, user: Address) -> i128 {
        storage::get_user(&env, &user).liquidity
    }

    fn get_total_liquidity(env: Env) -> i128 {
        storage::get_total_liquidity(&env)
    }
}
