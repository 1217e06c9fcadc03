use crate::{events, storage};
use controller_interface::{ControllerError, ControllerTrait};
use future_interface::FutureClient;
use permissions_interface::{caller_has_role, Role};
use registry_interface::RegistryClient;
use soroban_sdk::{contract, contractimpl, token, Address, Env, Vec};

/// Entry point for users and the period scheduler. Futures are bucketed by
/// period duration; every bucket rolls over together.
#[contract]
pub struct Controller;

impl Controller {
    fn require_admin(env: &Env, caller: &Address) -> Result<(), ControllerError> {
        let permissions = storage::get_permissions(env);
        if !caller_has_role(env, &permissions, caller, Role::Admin) {
            return Err(ControllerError::Unauthorized);
        }
        storage::extend_instance(env);
        Ok(())
    }

    fn registry(env: &Env) -> RegistryClient<'_> {
        RegistryClient::new(env, &storage::get_registry(env))
    }

    /// Resolves a future that is still listed in the registry.
    fn listed_future<'a>(env: &'a Env, future: &Address) -> Result<FutureClient<'a>, ControllerError> {
        if !Self::registry(env).is_registered_future(future) {
            return Err(ControllerError::FutureNotRegistered);
        }
        storage::extend_instance(env);
        Ok(FutureClient::new(env, future))
    }

    /// First switch on the bucket's schedule whose start window opens after `now`.
    fn following_switch(current: u64, duration: u64, delay: u64, now: u64) -> u64 {
        let next = current + duration;
        if next.saturating_sub(delay) > now {
            return next;
        }
        let behind = now + delay - next;
        next + (behind / duration + 1) * duration
    }
}

#[contractimpl]
impl ControllerTrait for Controller {
    fn __constructor(env: Env, permissions: Address, registry: Address) {
        storage::set_permissions(&env, &permissions);
        storage::set_registry(&env, &registry);
        storage::extend_instance(&env);
    }

    fn get_registry_address(env: Env) -> Address {
        storage::get_registry(&env)
    }

    fn set_period_starting_delay(env: Env, caller: Address, delay: u64) -> Result<(), ControllerError> {
        Self::require_admin(&env, &caller)?;
        storage::set_starting_delay(&env, delay);
        events::StartingDelaySet { delay }.publish(&env);
        Ok(())
    }

    fn get_period_starting_delay(env: Env) -> u64 {
        storage::get_starting_delay(&env)
    }

    fn set_next_period_switch_timestamp(
        env: Env,
        caller: Address,
        duration: u64,
        timestamp: u64,
    ) -> Result<(), ControllerError> {
        Self::require_admin(&env, &caller)?;
        if duration == 0 {
            return Err(ControllerError::InvalidDuration);
        }
        if storage::get_next_period_switch(&env, duration).is_none() {
            return Err(ControllerError::DurationNotRegistered);
        }

        storage::set_next_period_switch(&env, duration, timestamp);
        events::NextPeriodSwitchSet {
            duration,
            timestamp,
        }
        .publish(&env);
        Ok(())
    }

    fn get_next_period_start(env: Env, duration: u64) -> u64 {
        storage::get_next_period_switch(&env, duration).unwrap_or(0)
    }

    fn register_new_future(env: Env, factory: Address, future: Address) -> Result<(), ControllerError> {
        factory.require_auth();
        storage::extend_instance(&env);
        if !Self::registry(&env).is_registered_future_factory(&factory) {
            return Err(ControllerError::FactoryNotRegistered);
        }
        if storage::get_future_duration(&env, &future).is_some() {
            return Err(ControllerError::FutureAlreadyRegistered);
        }

        let duration = FutureClient::new(&env, &future).get_period_duration();
        if duration == 0 {
            return Err(ControllerError::InvalidDuration);
        }

        let mut futures = storage::get_futures_with_duration(&env, duration);
        futures.push_back(future.clone());
        storage::set_futures_with_duration(&env, duration, &futures);
        storage::set_future_duration(&env, &future, duration);

        if storage::get_next_period_switch(&env, duration).is_none() {
            let mut durations = storage::get_durations(&env);
            durations.push_back(duration);
            storage::set_durations(&env, &durations);
            storage::set_next_period_switch(&env, duration, env.ledger().timestamp() + duration);
        }

        events::FutureRegistered { duration, future }.publish(&env);
        Ok(())
    }

    fn get_durations(env: Env) -> Vec<u64> {
        storage::get_durations(&env)
    }

    fn get_futures_with_duration(env: Env, duration: u64) -> Vec<Address> {
        storage::get_futures_with_duration(&env, duration)
    }

    fn register(env: Env, user: Address, future: Address, amount: i128) -> Result<(), ControllerError> {
        user.require_auth();
        if amount <= 0 {
            return Err(ControllerError::InvalidAmount);
        }
        let future_client = Self::listed_future(&env, &future)?;

        // Pulled with the allowance the user granted the controller
        token::Client::new(&env, &future_client.get_ibt_address()).transfer_from(
            &env.current_contract_address(),
            &user,
            &future_client.get_vault_address(),
            &amount,
        );
        future_client.register(&user, &amount);
        Ok(())
    }

    fn unregister(env: Env, user: Address, future: Address, amount: i128) -> Result<i128, ControllerError> {
        user.require_auth();
        if amount < 0 {
            return Err(ControllerError::InvalidAmount);
        }
        Ok(Self::listed_future(&env, &future)?.unregister(&user, &amount))
    }

    fn claim_fyt(env: Env, user: Address, future: Address) -> Result<(), ControllerError> {
        user.require_auth();
        Self::listed_future(&env, &future)?.claim_fyt(&user);
        Ok(())
    }

    fn withdraw_lock_funds(
        env: Env,
        user: Address,
        future: Address,
        amount: i128,
    ) -> Result<i128, ControllerError> {
        user.require_auth();
        if amount <= 0 {
            return Err(ControllerError::InvalidAmount);
        }
        Ok(Self::listed_future(&env, &future)?.withdraw_lock_funds(&user, &amount))
    }

    fn start_futures_by_period_duration(
        env: Env,
        caller: Address,
        duration: u64,
    ) -> Result<u32, ControllerError> {
        Self::require_admin(&env, &caller)?;
        let next_switch = storage::get_next_period_switch(&env, duration)
            .ok_or(ControllerError::DurationNotRegistered)?;
        let delay = storage::get_starting_delay(&env);
        if env.ledger().timestamp() < next_switch.saturating_sub(delay) {
            return Err(ControllerError::PeriodNotReady);
        }

        let registry = Self::registry(&env);
        let mut started = 0u32;
        for future in storage::get_futures_with_duration(&env, duration).iter() {
            if !registry.is_registered_future(&future) {
                continue;
            }
            // A future that fails to roll is reported and skipped
            match FutureClient::new(&env, &future).try_start_new_period() {
                Ok(Ok(_)) => started += 1,
                _ => events::FutureStartFailed {
                    duration,
                    future: future.clone(),
                }
                .publish(&env),
            }
        }

        let next_switch =
            Self::following_switch(next_switch, duration, delay, env.ledger().timestamp());
        storage::set_next_period_switch(&env, duration, next_switch);
        events::FuturesStarted {
            duration,
            started,
            next_switch,
        }
        .publish(&env);
        Ok(started)
    }
}
