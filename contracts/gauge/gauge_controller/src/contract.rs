use crate::emission::{accrue, advance};
use crate::events;
use crate::storage::{self, EmissionState, EpochParams, GaugeState};
use apwine_token_interface::ApwineTokenClient;
use deployer_interface::DeployerClient;
use gauge_interface::{GaugeControllerError, GaugeControllerTrait, LiquidityGaugeClient};
use permissions_interface::{caller_has_role, Role};
use registry_interface::RegistryClient;
use soroban_sdk::{
    contract, contractimpl, panic_with_error, xdr::ToXdr, Address, Env, Symbol,
};

#[contract]
pub struct GaugeController;

impl GaugeController {
    fn require_admin(env: &Env, caller: &Address) -> Result<(), GaugeControllerError> {
        let permissions = storage::get_permissions(env);
        if !caller_has_role(env, &permissions, caller, Role::Admin) {
            return Err(GaugeControllerError::Unauthorized);
        }
        storage::extend_instance(env);
        Ok(())
    }

    /// Brings the emission schedule up to the current ledger time.
    fn update_emission(env: &Env) -> EmissionState {
        let state = advance(
            storage::get_emission(env),
            &storage::get_params(env),
            storage::get_total_weight(env),
            env.ledger().timestamp(),
        );
        storage::set_emission(env, &state);
        state
    }

    fn registered_gauge(env: &Env, gauge: &Address) -> Result<GaugeState, GaugeControllerError> {
        storage::get_gauge(env, gauge).ok_or(GaugeControllerError::GaugeNotRegistered)
    }

    fn param_set(env: &Env, name: &str, value: i128) {
        events::EpochParamSet {
            name: Symbol::new(env, name),
            value,
        }
        .publish(env);
    }
}

#[contractimpl]
impl GaugeControllerTrait for GaugeController {
    fn __constructor(
        env: Env,
        permissions: Address,
        registry: Address,
        epoch_length: u64,
        epoch_inflation_rate: i128,
        initial_supply: i128,
    ) {
        if epoch_length == 0 {
            panic_with_error!(&env, GaugeControllerError::InvalidEpochLength);
        }
        if epoch_inflation_rate <= 0 {
            panic_with_error!(&env, GaugeControllerError::InvalidInflationRate);
        }
        if initial_supply <= 0 {
            panic_with_error!(&env, GaugeControllerError::InvalidInitialSupply);
        }

        let now = env.ledger().timestamp();
        storage::set_permissions(&env, &permissions);
        storage::set_registry(&env, &registry);
        storage::set_params(
            &env,
            &EpochParams {
                epoch_length,
                inflation_rate: epoch_inflation_rate,
                initial_supply,
            },
        );
        storage::set_emission(
            &env,
            &EmissionState {
                epoch: 0,
                epoch_start: now,
                epoch_supply: initial_supply,
                last_update: now,
                reward_index: 0,
            },
        );
        storage::set_withdrawable(&env, false);
        storage::extend_instance(&env);
    }

    fn set_epoch_length(
        env: Env,
        caller: Address,
        epoch_length: u64,
    ) -> Result<(), GaugeControllerError> {
        Self::require_admin(&env, &caller)?;
        if epoch_length == 0 {
            return Err(GaugeControllerError::InvalidEpochLength);
        }

        Self::update_emission(&env);
        let mut params = storage::get_params(&env);
        params.epoch_length = epoch_length;
        storage::set_params(&env, &params);
        Self::param_set(&env, "epoch_length", epoch_length as i128);
        Ok(())
    }

    fn get_epoch_length(env: Env) -> u64 {
        storage::get_params(&env).epoch_length
    }

    fn set_epoch_inflation_rate(
        env: Env,
        caller: Address,
        rate: i128,
    ) -> Result<(), GaugeControllerError> {
        Self::require_admin(&env, &caller)?;
        if rate <= 0 {
            return Err(GaugeControllerError::InvalidInflationRate);
        }

        Self::update_emission(&env);
        let mut params = storage::get_params(&env);
        params.inflation_rate = rate;
        storage::set_params(&env, &params);
        Self::param_set(&env, "inflation_rate", rate);
        Ok(())
    }

    fn get_last_epoch_inflation_rate(env: Env) -> i128 {
        storage::get_params(&env).inflation_rate
    }

    fn set_initial_supply(
        env: Env,
        caller: Address,
        supply: i128,
    ) -> Result<(), GaugeControllerError> {
        Self::require_admin(&env, &caller)?;
        if supply <= 0 {
            return Err(GaugeControllerError::InvalidInitialSupply);
        }

        let mut state = Self::update_emission(&env);
        let mut params = storage::get_params(&env);
        params.initial_supply = supply;
        storage::set_params(&env, &params);

        // Only the first epoch still emits from the initial supply
        if state.epoch == 0 {
            state.epoch_supply = supply;
            storage::set_emission(&env, &state);
        }
        Self::param_set(&env, "initial_supply", supply);
        Ok(())
    }

    fn get_initial_supply(env: Env) -> i128 {
        storage::get_params(&env).initial_supply
    }

    fn get_current_epoch(env: Env) -> u32 {
        advance(
            storage::get_emission(&env),
            &storage::get_params(&env),
            storage::get_total_weight(&env),
            env.ledger().timestamp(),
        )
        .epoch
    }

    fn set_apw_token(env: Env, caller: Address, token: Address) -> Result<(), GaugeControllerError> {
        Self::require_admin(&env, &caller)?;
        storage::set_apw_token(&env, &token);
        Ok(())
    }

    fn get_apw_token(env: Env) -> Result<Address, GaugeControllerError> {
        storage::get_apw_token(&env).ok_or(GaugeControllerError::NotConfigured)
    }

    fn resume_apw_withdraw(env: Env, caller: Address) -> Result<(), GaugeControllerError> {
        Self::require_admin(&env, &caller)?;
        storage::set_withdrawable(&env, true);
        events::WithdrawableStateChanged { withdrawable: true }.publish(&env);
        Ok(())
    }

    fn pause_apw_withdraw(env: Env, caller: Address) -> Result<(), GaugeControllerError> {
        Self::require_admin(&env, &caller)?;
        storage::set_withdrawable(&env, false);
        events::WithdrawableStateChanged {
            withdrawable: false,
        }
        .publish(&env);
        Ok(())
    }

    fn get_withdrawable_state(env: Env) -> bool {
        storage::get_withdrawable(&env)
    }

    fn register_new_gauge(
        env: Env,
        factory: Address,
        future: Address,
    ) -> Result<Address, GaugeControllerError> {
        factory.require_auth();
        storage::extend_instance(&env);

        let registry = RegistryClient::new(&env, &storage::get_registry(&env));
        if !registry.is_registered_future_factory(&factory) {
            return Err(GaugeControllerError::FactoryNotRegistered);
        }
        if storage::get_gauge_of_future(&env, &future).is_some() {
            return Err(GaugeControllerError::GaugeAlreadyRegistered);
        }

        let salt = env.crypto().sha256(&future.clone().to_xdr(&env)).to_bytes();
        let gauge = DeployerClient::new(&env, &registry.get_proxy_factory()).deploy(
            &env.current_contract_address(),
            &registry.get_liquidity_gauge_logic(),
            &salt,
        );
        LiquidityGaugeClient::new(&env, &gauge).initialize(&env.current_contract_address(), &future);

        let state = Self::update_emission(&env);
        storage::set_gauge(
            &env,
            &gauge,
            &GaugeState {
                index_checkpoint: state.reward_index,
                ..Default::default()
            },
        );
        storage::set_gauge_of_future(&env, &future, &gauge);

        events::GaugeRegistered {
            future,
            gauge: gauge.clone(),
        }
        .publish(&env);
        Ok(gauge)
    }

    fn get_liquidity_gauge_of_future(
        env: Env,
        future: Address,
    ) -> Result<Address, GaugeControllerError> {
        storage::get_gauge_of_future(&env, &future).ok_or(GaugeControllerError::GaugeNotRegistered)
    }

    fn set_gauge_weight(
        env: Env,
        caller: Address,
        gauge: Address,
        weight: i128,
    ) -> Result<(), GaugeControllerError> {
        Self::require_admin(&env, &caller)?;
        if weight < 0 {
            return Err(GaugeControllerError::InvalidWeight);
        }
        let gauge_state = Self::registered_gauge(&env, &gauge)?;

        // Settle at the old weights before changing them
        let state = Self::update_emission(&env);
        let mut gauge_state = accrue(gauge_state, state.reward_index);
        let total_weight = storage::get_total_weight(&env) - gauge_state.weight + weight;
        gauge_state.weight = weight;
        storage::set_gauge(&env, &gauge, &gauge_state);
        storage::set_total_weight(&env, total_weight);

        events::GaugeWeightSet {
            gauge,
            weight,
            total_weight,
        }
        .publish(&env);
        Ok(())
    }

    fn get_gauge_weight(env: Env, gauge: Address) -> i128 {
        storage::get_gauge(&env, &gauge)
            .map(|state| state.weight)
            .unwrap_or(0)
    }

    fn get_total_weight(env: Env) -> i128 {
        storage::get_total_weight(&env)
    }

    fn checkpoint_gauge(env: Env, gauge: Address) -> Result<i128, GaugeControllerError> {
        gauge.require_auth();
        storage::extend_instance(&env);
        let gauge_state = Self::registered_gauge(&env, &gauge)?;

        let state = Self::update_emission(&env);
        let mut gauge_state = accrue(gauge_state, state.reward_index);
        let rewards = gauge_state.unclaimed;
        gauge_state.unclaimed = 0;
        gauge_state.distributed += rewards;
        storage::set_gauge(&env, &gauge, &gauge_state);
        Ok(rewards)
    }

    fn get_gauge_pending_rewards(env: Env, gauge: Address) -> i128 {
        let gauge_state = match storage::get_gauge(&env, &gauge) {
            Some(gauge_state) => gauge_state,
            None => return 0,
        };
        let state = advance(
            storage::get_emission(&env),
            &storage::get_params(&env),
            storage::get_total_weight(&env),
            env.ledger().timestamp(),
        );
        accrue(gauge_state, state.reward_index).unclaimed
    }

    fn mint_rewards(
        env: Env,
        gauge: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), GaugeControllerError> {
        gauge.require_auth();
        storage::extend_instance(&env);
        if !storage::get_withdrawable(&env) {
            return Err(GaugeControllerError::WithdrawalsPaused);
        }

        let mut gauge_state = Self::registered_gauge(&env, &gauge)?;
        if amount <= 0 {
            return Ok(());
        }
        if gauge_state.minted + amount > gauge_state.distributed {
            return Err(GaugeControllerError::InsufficientRewards);
        }
        let apw_token = storage::get_apw_token(&env).ok_or(GaugeControllerError::NotConfigured)?;

        gauge_state.minted += amount;
        storage::set_gauge(&env, &gauge, &gauge_state);
        ApwineTokenClient::new(&env, &apw_token).mint(&to, &amount);

        events::RewardsMinted { gauge, to, amount }.publish(&env);
        Ok(())
    }
}
