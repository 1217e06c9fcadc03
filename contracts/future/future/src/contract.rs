use crate::storage::{self, Cohort, Registration};
use crate::events;
use apwine_maths::{get_actual_output, get_scaled_input};
use apwine_naming::{gen_fyt_symbol, gen_ibt_symbol};
use apwine_token_interface::ApwineTokenClient;
use deployer_interface::DeployerClient;
use future_interface::{
    FutureConfig, FutureError, FutureTrait, FutureVaultClient, FutureWalletClient,
};
use gauge_interface::LiquidityGaugeClient;
use registry_interface::RegistryClient;
use soroban_sdk::{contract, contractimpl, token, Address, BytesN, Env, String};

/// One IBT future: admits deposits for the next period, locks them into the
/// perpetual APWine-IBT pool when the period starts and hands out one FYT per
/// period to every locked position.
#[contract]
pub struct Future;

impl Future {
    fn require_controller(env: &Env) -> FutureConfig {
        let config = storage::get_config(env);
        config.controller.require_auth();
        storage::extend_instance(env);
        config
    }

    fn current_period(env: &Env) -> u32 {
        storage::get_next_period_index(env) - 1
    }

    fn apwibt_balance(env: &Env, config: &FutureConfig, user: &Address) -> i128 {
        token::Client::new(env, &config.apwine_ibt).balance(user)
    }

    /// APWine-IBT owed to a registration whose period already started.
    fn locked_registration(env: &Env, user: &Address, current: u32) -> Option<(Registration, i128)> {
        let registration = storage::get_registration(env, user)?;
        if registration.period == 0 || registration.period > current {
            return None;
        }
        let cohort = storage::get_cohort(env, registration.period);
        let owed = get_actual_output(
            registration.scaled,
            cohort.scaled_total,
            cohort.apwibt_minted,
        );
        Some((registration, owed))
    }

    /// Registration still waiting for the next period, with its IBT amount.
    fn pending_registration(
        env: &Env,
        config: &FutureConfig,
        user: &Address,
    ) -> Option<(Registration, i128)> {
        let registration = storage::get_registration(env, user)?;
        if registration.period != storage::get_next_period_index(env) {
            return None;
        }
        let cohort = storage::get_cohort(env, registration.period);
        let pending = FutureVaultClient::new(env, &config.vault).get_pending_balance();
        let amount = get_actual_output(registration.scaled, cohort.scaled_total, pending);
        Some((registration, amount))
    }

    fn claimable_fyt(env: &Env, config: &FutureConfig, user: &Address, period: u32) -> i128 {
        let current = Self::current_period(env);
        if period == 0 || period > current {
            return 0;
        }

        let mut owed = 0;
        if period > storage::get_last_claimed(env, user) {
            owed += Self::apwibt_balance(env, config, user);
        }
        if let Some((registration, amount)) = Self::locked_registration(env, user, current) {
            if registration.period <= period {
                owed += amount;
            }
        }
        owed
    }

    /// Mints everything owed to `user` up to the current period.
    fn claim(env: &Env, config: &FutureConfig, user: &Address) {
        let current = Self::current_period(env);
        if current == 0 {
            return;
        }

        let last_claimed = storage::get_last_claimed(env, user);
        let locked = Self::locked_registration(env, user, current);
        if last_claimed >= current && locked.is_none() {
            return;
        }

        let balance = Self::apwibt_balance(env, config, user);
        for period in (last_claimed + 1)..=current {
            let mut amount = balance;
            if let Some((registration, owed)) = &locked {
                if registration.period <= period {
                    amount += owed;
                }
            }
            if amount > 0 {
                if let Some(fyt) = storage::get_fyt(env, period) {
                    ApwineTokenClient::new(env, &fyt).mint(user, &amount);
                }
            }
        }

        let mut apwibt_minted = 0;
        if let Some((registration, owed)) = locked {
            storage::remove_registration(env, user);
            if owed > 0 {
                ApwineTokenClient::new(env, &config.apwine_ibt).mint(user, &owed);
                LiquidityGaugeClient::new(env, &config.liquidity_gauge).register_user_liquidity(
                    user,
                    &owed,
                    &registration.period,
                );
            }
            apwibt_minted = owed;
        }
        storage::set_last_claimed(env, user, current);

        events::FytClaimed {
            user: user.clone(),
            up_to_period: current,
            apwibt_minted,
        }
        .publish(env);
    }

    /// Deploys and names the FYT of `period`.
    fn deploy_fyt(env: &Env, config: &FutureConfig, period: u32) -> Address {
        let registry = RegistryClient::new(env, &config.registry);
        let deployer = registry.get_proxy_factory();
        let logic = registry.get_fyt_logic();

        let mut salt = [0u8; 32];
        salt[28..].copy_from_slice(&period.to_be_bytes());
        let fyt = DeployerClient::new(env, &deployer).deploy(
            &env.current_contract_address(),
            &logic,
            &BytesN::from_array(env, &salt),
        );

        let asset = token::Client::new(env, &config.ibt).symbol();
        let symbol = gen_fyt_symbol(
            env,
            config.naming_policy,
            period,
            &asset,
            &config.platform_name,
            config.period_duration,
        );
        let decimals = token::Client::new(env, &config.apwine_ibt).decimals();
        ApwineTokenClient::new(env, &fyt).initialize(
            &env.current_contract_address(),
            &symbol,
            &symbol,
            &decimals,
            &true,
        );

        storage::set_fyt(env, period, &fyt);
        fyt
    }
}

#[contractimpl]
impl FutureTrait for Future {
    fn initialize(env: Env, config: FutureConfig) -> Result<(), FutureError> {
        if storage::is_initialized(&env) {
            return Err(FutureError::AlreadyInitialized);
        }
        if config.period_duration == 0 {
            return Err(FutureError::InvalidDuration);
        }

        let ibt = token::Client::new(&env, &config.ibt);
        let symbol: String = gen_ibt_symbol(
            &env,
            config.naming_policy,
            &ibt.symbol(),
            &config.platform_name,
            config.period_duration,
        );
        ApwineTokenClient::new(&env, &config.apwine_ibt).initialize(
            &env.current_contract_address(),
            &symbol,
            &symbol,
            &ibt.decimals(),
            &false,
        );

        storage::set_config(&env, &config);
        storage::set_next_period_index(&env, 1);
        storage::set_locked_supply(&env, 0);
        storage::extend_instance(&env);
        Ok(())
    }

    fn register(env: Env, user: Address, amount: i128) -> Result<(), FutureError> {
        let config = Self::require_controller(&env);
        if amount <= 0 {
            return Err(FutureError::InvalidAmount);
        }

        // A registration from an earlier period is converted before joining the new pool
        Self::claim(&env, &config, &user);

        let next = storage::get_next_period_index(&env);
        let mut registration = match storage::get_registration(&env, &user) {
            Some(registration) if registration.period == next => registration,
            _ => Registration {
                period: next,
                scaled: 0,
            },
        };

        let vault = FutureVaultClient::new(&env, &config.vault);
        let mut cohort = storage::get_cohort(&env, next);
        let pending = vault.get_pending_balance();
        let scaled = if cohort.scaled_total == 0 || pending == 0 {
            amount
        } else {
            get_scaled_input(amount, cohort.scaled_total, pending)
        };

        registration.scaled += scaled;
        cohort.scaled_total += scaled;
        storage::set_registration(&env, &user, &registration);
        storage::set_cohort(&env, next, &cohort);
        vault.add_pending(&amount);

        events::Registered {
            user,
            period: next,
            amount,
        }
        .publish(&env);
        Ok(())
    }

    fn unregister(env: Env, user: Address, amount: i128) -> Result<i128, FutureError> {
        let config = Self::require_controller(&env);
        if amount < 0 {
            return Err(FutureError::InvalidAmount);
        }

        let (mut registration, registered) =
            match Self::pending_registration(&env, &config, &user) {
                Some(found) => found,
                None if amount == 0 => return Ok(0),
                None => return Err(FutureError::AmountExceedsRegistration),
            };
        if amount > registered {
            return Err(FutureError::AmountExceedsRegistration);
        }

        // 0 withdraws the whole registration
        let withdrawn = if amount == 0 { registered } else { amount };
        let period = registration.period;
        let vault = FutureVaultClient::new(&env, &config.vault);
        let mut cohort = storage::get_cohort(&env, period);
        let scaled = if withdrawn == registered {
            registration.scaled
        } else {
            get_scaled_input(withdrawn, cohort.scaled_total, vault.get_pending_balance())
                .min(registration.scaled)
        };

        registration.scaled -= scaled;
        cohort.scaled_total -= scaled;
        if registration.scaled == 0 {
            storage::remove_registration(&env, &user);
        } else {
            storage::set_registration(&env, &user, &registration);
        }
        storage::set_cohort(&env, period, &cohort);

        if withdrawn > 0 {
            vault.release_pending(&user, &withdrawn);
        }

        events::Unregistered {
            user,
            period,
            amount: withdrawn,
        }
        .publish(&env);
        Ok(withdrawn)
    }

    fn start_new_period(env: Env) -> Result<u32, FutureError> {
        let config = Self::require_controller(&env);
        let vault = FutureVaultClient::new(&env, &config.vault);
        let next = storage::get_next_period_index(&env);
        let current = next - 1;
        let mut locked_supply = storage::get_locked_supply(&env);

        // Expire the running period
        if current > 0 {
            let yield_amount = vault.sweep_yield(&config.wallet);
            FutureWalletClient::new(&env, &config.wallet).register_expired_period(
                &current,
                &yield_amount,
                &locked_supply,
            );
            events::PeriodExpired {
                period: current,
                yield_amount,
                fyt_supply: locked_supply,
            }
            .publish(&env);
        }

        let fyt = Self::deploy_fyt(&env, &config, next);

        // Lock the registrations of the new period
        let receipt = vault.lock_pending();
        let minted = if locked_supply == 0 || receipt.locked_before == 0 {
            receipt.amount
        } else {
            get_scaled_input(receipt.amount, locked_supply, receipt.locked_before)
        };
        let mut cohort: Cohort = storage::get_cohort(&env, next);
        cohort.apwibt_minted = minted;
        storage::set_cohort(&env, next, &cohort);
        locked_supply += minted;
        storage::set_locked_supply(&env, locked_supply);

        LiquidityGaugeClient::new(&env, &config.liquidity_gauge)
            .add_period_liquidity(&next, &minted);

        let next_period_timestamp = env.ledger().timestamp() + config.period_duration;
        storage::set_next_period_index(&env, next + 1);
        storage::set_next_period_timestamp(&env, next_period_timestamp);

        events::PeriodStarted {
            period: next,
            fyt,
            locked: receipt.amount,
            apwibt_minted: minted,
            next_period_timestamp,
        }
        .publish(&env);
        Ok(next)
    }

    fn claim_fyt(env: Env, user: Address) -> Result<(), FutureError> {
        let config = Self::require_controller(&env);
        Self::claim(&env, &config, &user);
        Ok(())
    }

    fn withdraw_lock_funds(env: Env, user: Address, amount: i128) -> Result<i128, FutureError> {
        let config = Self::require_controller(&env);
        if amount <= 0 {
            return Err(FutureError::InvalidAmount);
        }
        let current = Self::current_period(&env);
        if current == 0 {
            return Err(FutureError::NoActivePeriod);
        }

        Self::claim(&env, &config, &user);

        let fyt = storage::get_fyt(&env, current).ok_or(FutureError::NoActivePeriod)?;
        if Self::apwibt_balance(&env, &config, &user) < amount
            || token::Client::new(&env, &fyt).balance(&user) < amount
        {
            return Err(FutureError::InsufficientBalance);
        }

        ApwineTokenClient::new(&env, &config.apwine_ibt).admin_burn(&user, &amount);
        ApwineTokenClient::new(&env, &fyt).admin_burn(&user, &amount);

        let locked_supply = storage::get_locked_supply(&env);
        let released = FutureVaultClient::new(&env, &config.vault).release_locked(
            &user,
            &amount,
            &locked_supply,
        );
        storage::set_locked_supply(&env, locked_supply - amount);

        LiquidityGaugeClient::new(&env, &config.liquidity_gauge)
            .remove_user_liquidity(&user, &amount);

        events::FundsWithdrawn {
            user,
            amount,
            released,
        }
        .publish(&env);
        Ok(released)
    }

    fn get_fyt_entitlement(env: Env, user: Address, period: u32) -> i128 {
        let config = storage::get_config(&env);
        let held = match storage::get_fyt(&env, period) {
            Some(fyt) => token::Client::new(&env, &fyt).balance(&user),
            None => return 0,
        };
        held + Self::claimable_fyt(&env, &config, &user, period)
    }

    fn burn_fyt_for_yield(env: Env, user: Address, period: u32) -> Result<i128, FutureError> {
        let config = storage::get_config(&env);
        config.wallet.require_auth();
        storage::extend_instance(&env);

        if period == 0 || period >= Self::current_period(&env) {
            return Err(FutureError::InvalidPeriod);
        }

        Self::claim(&env, &config, &user);

        let fyt = storage::get_fyt(&env, period).ok_or(FutureError::InvalidPeriod)?;
        let balance = token::Client::new(&env, &fyt).balance(&user);
        if balance > 0 {
            ApwineTokenClient::new(&env, &fyt).admin_burn(&user, &balance);
        }
        Ok(balance)
    }

    fn get_pending_liquidity(env: Env, user: Address) -> (i128, u32) {
        match Self::locked_registration(&env, &user, Self::current_period(&env)) {
            Some((registration, owed)) => (owed, registration.period),
            None => (0, 0),
        }
    }

    fn get_claimable_apwibt(env: Env, user: Address) -> i128 {
        Self::locked_registration(&env, &user, Self::current_period(&env))
            .map(|(_, owed)| owed)
            .unwrap_or(0)
    }

    fn get_claimable_fyt_for_period(env: Env, user: Address, period: u32) -> i128 {
        let config = storage::get_config(&env);
        Self::claimable_fyt(&env, &config, &user, period)
    }

    fn get_registered_amount(env: Env, user: Address) -> i128 {
        let config = storage::get_config(&env);
        Self::pending_registration(&env, &config, &user)
            .map(|(_, amount)| amount)
            .unwrap_or(0)
    }

    fn get_fyt_of_period(env: Env, period: u32) -> Result<Address, FutureError> {
        storage::get_fyt(&env, period).ok_or(FutureError::InvalidPeriod)
    }

    fn get_next_period_index(env: Env) -> u32 {
        storage::get_next_period_index(&env)
    }

    fn get_next_period_timestamp(env: Env) -> u64 {
        storage::get_next_period_timestamp(&env)
    }

    fn get_locked_supply(env: Env) -> i128 {
        storage::get_locked_supply(&env)
    }

    fn get_period_duration(env: Env) -> u64 {
        storage::get_config(&env).period_duration
    }

    fn get_platform_name(env: Env) -> String {
        storage::get_config(&env).platform_name
    }

    fn get_controller_address(env: Env) -> Address {
        storage::get_config(&env).controller
    }

    fn get_ibt_address(env: Env) -> Address {
        storage::get_config(&env).ibt
    }

    fn get_vault_address(env: Env) -> Address {
        storage::get_config(&env).vault
    }

    fn get_wallet_address(env: Env) -> Address {
        storage::get_config(&env).wallet
    }

    fn get_apwine_ibt_address(env: Env) -> Address {
        storage::get_config(&env).apwine_ibt
    }

    fn get_liquidity_gauge_address(env: Env) -> Address {
        storage::get_config(&env).liquidity_gauge
    }
}
