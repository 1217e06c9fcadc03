use crate::{events, storage};
use apwine_naming::NamingPolicy;
use permissions_interface::{caller_has_role, Role};
use registry_interface::{FuturePlatform, RegistryError, RegistryTrait};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Symbol, Vec};

#[contract]
pub struct Registry;

impl Registry {
    fn require_admin(env: &Env, caller: &Address) -> Result<(), RegistryError> {
        let permissions = storage::get_permissions(env);
        if !caller_has_role(env, &permissions, caller, Role::Admin) {
            return Err(RegistryError::Unauthorized);
        }
        storage::extend_instance(env);
        Ok(())
    }

    fn contract_set(env: &Env, name: &str, address: &Address) {
        events::ContractSet {
            name: Symbol::new(env, name),
            address: address.clone(),
        }
        .publish(env);
    }

    fn logic_set(env: &Env, name: &str, logic: &BytesN<32>) {
        events::LogicSet {
            name: Symbol::new(env, name),
            logic: logic.clone(),
        }
        .publish(env);
    }
}

#[contractimpl]
impl RegistryTrait for Registry {
    fn __constructor(env: Env, permissions: Address) {
        storage::set_permissions(&env, &permissions);
        storage::extend_instance(&env);
    }

    fn set_controller(env: Env, caller: Address, controller: Address) -> Result<(), RegistryError> {
        Self::require_admin(&env, &caller)?;
        storage::set_controller(&env, &controller);
        Self::contract_set(&env, "controller", &controller);
        Ok(())
    }

    fn get_controller(env: Env) -> Result<Address, RegistryError> {
        storage::get_controller(&env).ok_or(RegistryError::NotConfigured)
    }

    fn set_gauge_controller(
        env: Env,
        caller: Address,
        gauge_controller: Address,
    ) -> Result<(), RegistryError> {
        Self::require_admin(&env, &caller)?;
        storage::set_gauge_controller(&env, &gauge_controller);
        Self::contract_set(&env, "gauge_controller", &gauge_controller);
        Ok(())
    }

    fn get_gauge_controller(env: Env) -> Result<Address, RegistryError> {
        storage::get_gauge_controller(&env).ok_or(RegistryError::NotConfigured)
    }

    fn set_proxy_factory(
        env: Env,
        caller: Address,
        proxy_factory: Address,
    ) -> Result<(), RegistryError> {
        Self::require_admin(&env, &caller)?;
        storage::set_proxy_factory(&env, &proxy_factory);
        Self::contract_set(&env, "proxy_factory", &proxy_factory);
        Ok(())
    }

    fn get_proxy_factory(env: Env) -> Result<Address, RegistryError> {
        storage::get_proxy_factory(&env).ok_or(RegistryError::NotConfigured)
    }

    fn set_apwine_ibt_logic(
        env: Env,
        caller: Address,
        logic: BytesN<32>,
    ) -> Result<(), RegistryError> {
        Self::require_admin(&env, &caller)?;
        storage::set_apwine_ibt_logic(&env, &logic);
        Self::logic_set(&env, "apwine_ibt", &logic);
        Ok(())
    }

    fn get_apwine_ibt_logic(env: Env) -> Result<BytesN<32>, RegistryError> {
        storage::get_apwine_ibt_logic(&env).ok_or(RegistryError::NotConfigured)
    }

    fn set_fyt_logic(env: Env, caller: Address, logic: BytesN<32>) -> Result<(), RegistryError> {
        Self::require_admin(&env, &caller)?;
        storage::set_fyt_logic(&env, &logic);
        Self::logic_set(&env, "fyt", &logic);
        Ok(())
    }

    fn get_fyt_logic(env: Env) -> Result<BytesN<32>, RegistryError> {
        storage::get_fyt_logic(&env).ok_or(RegistryError::NotConfigured)
    }

    fn set_liquidity_gauge_logic(
        env: Env,
        caller: Address,
        logic: BytesN<32>,
    ) -> Result<(), RegistryError> {
        Self::require_admin(&env, &caller)?;
        storage::set_liquidity_gauge_logic(&env, &logic);
        Self::logic_set(&env, "liquidity_gauge", &logic);
        Ok(())
    }

    fn get_liquidity_gauge_logic(env: Env) -> Result<BytesN<32>, RegistryError> {
        storage::get_liquidity_gauge_logic(&env).ok_or(RegistryError::NotConfigured)
    }

    fn set_naming_policy(
        env: Env,
        caller: Address,
        policy: NamingPolicy,
    ) -> Result<(), RegistryError> {
        Self::require_admin(&env, &caller)?;
        storage::set_naming_policy(&env, policy);
        Ok(())
    }

    fn get_naming_policy(env: Env) -> NamingPolicy {
        storage::get_naming_policy(&env)
    }

    fn add_future_factory(
        env: Env,
        caller: Address,
        factory: Address,
        platform_name: String,
    ) -> Result<(), RegistryError> {
        Self::require_admin(&env, &caller)?;

        match storage::get_factory_platform(&env, &factory) {
            Some(existing) if existing == platform_name => return Ok(()),
            Some(_) => return Err(RegistryError::FactoryAlreadyRegistered),
            None => {}
        }

        storage::set_factory_platform(&env, &factory, &platform_name);
        events::FutureFactoryAdded {
            factory,
            platform_name,
        }
        .publish(&env);
        Ok(())
    }

    fn is_registered_future_factory(env: Env, factory: Address) -> bool {
        storage::get_factory_platform(&env, &factory).is_some()
    }

    fn get_future_factory_platform(env: Env, factory: Address) -> Result<String, RegistryError> {
        storage::get_factory_platform(&env, &factory).ok_or(RegistryError::FactoryNotRegistered)
    }

    fn add_future_platform(
        env: Env,
        caller: Address,
        factory: Address,
        name: String,
        future_logic: BytesN<32>,
        wallet_logic: BytesN<32>,
        vault_logic: BytesN<32>,
    ) -> Result<(), RegistryError> {
        Self::require_admin(&env, &caller)?;

        let factory_platform = storage::get_factory_platform(&env, &factory)
            .ok_or(RegistryError::FactoryNotRegistered)?;
        if factory_platform != name {
            return Err(RegistryError::PlatformNotOwned);
        }

        let platform = FuturePlatform {
            future_logic,
            wallet_logic,
            vault_logic,
        };

        if let Some(existing) = storage::get_platform(&env, &name) {
            let same_factory = storage::get_platform_factory(&env, &name) == Some(factory.clone());
            if existing == platform && same_factory {
                return Ok(());
            }
            return Err(RegistryError::PlatformAlreadyRegistered);
        }

        storage::set_platform(&env, &name, &platform, &factory);
        let mut names = storage::get_platform_names(&env);
        names.push_back(name.clone());
        storage::set_platform_names(&env, &names);

        events::FuturePlatformAdded {
            factory,
            name,
            future_logic: platform.future_logic,
            wallet_logic: platform.wallet_logic,
            vault_logic: platform.vault_logic,
        }
        .publish(&env);
        Ok(())
    }

    fn remove_future_platform(env: Env, caller: Address, name: String) -> Result<(), RegistryError> {
        Self::require_admin(&env, &caller)?;

        if storage::get_platform(&env, &name).is_none() {
            return Err(RegistryError::PlatformNotRegistered);
        }
        storage::remove_platform(&env, &name);

        let mut names = storage::get_platform_names(&env);
        if let Some(index) = names.first_index_of(&name) {
            names.remove(index);
        }
        storage::set_platform_names(&env, &names);

        events::FuturePlatformRemoved { name }.publish(&env);
        Ok(())
    }

    fn get_future_platform(env: Env, name: String) -> Result<FuturePlatform, RegistryError> {
        storage::get_platform(&env, &name).ok_or(RegistryError::PlatformNotRegistered)
    }

    fn is_registered_future_platform(env: Env, name: String) -> bool {
        storage::get_platform(&env, &name).is_some()
    }

    fn future_platforms_count(env: Env) -> u32 {
        storage::get_platform_names(&env).len()
    }

    fn get_future_platform_names(env: Env) -> Vec<String> {
        storage::get_platform_names(&env)
    }

    fn get_platform_factory(env: Env, name: String) -> Result<Address, RegistryError> {
        storage::get_platform_factory(&env, &name).ok_or(RegistryError::PlatformNotRegistered)
    }

    fn add_future(env: Env, factory: Address, future: Address) -> Result<(), RegistryError> {
        factory.require_auth();
        if storage::get_factory_platform(&env, &factory).is_none() {
            return Err(RegistryError::FactoryNotRegistered);
        }
        if storage::is_future(&env, &future) {
            return Err(RegistryError::FutureAlreadyRegistered);
        }

        storage::set_future(&env, &future);
        let mut futures = storage::get_futures(&env);
        futures.push_back(future.clone());
        storage::set_futures(&env, &futures);
        storage::extend_instance(&env);

        events::FutureAdded { future, factory }.publish(&env);
        Ok(())
    }

    fn remove_future(env: Env, caller: Address, future: Address) -> Result<(), RegistryError> {
        Self::require_admin(&env, &caller)?;

        if !storage::is_future(&env, &future) {
            return Err(RegistryError::FutureNotRegistered);
        }
        storage::remove_future(&env, &future);

        let mut futures = storage::get_futures(&env);
        if let Some(index) = futures.first_index_of(&future) {
            futures.remove(index);
        }
        storage::set_futures(&env, &futures);

        events::FutureRemoved { future }.publish(&env);
        Ok(())
    }

    fn is_registered_future(env: Env, future: Address) -> bool {
        storage::is_future(&env, &future)
    }

    fn get_future_at(env: Env, index: u32) -> Result<Address, RegistryError> {
        storage::get_futures(&env)
            .get(index)
            .ok_or(RegistryError::IndexOutOfBounds)
    }

    fn future_count(env: Env) -> u32 {
        storage::get_futures(&env).len()
    }
}
