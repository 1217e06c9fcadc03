use crate::storage;
use controller_interface::ControllerClient;
use deployer_interface::DeployerClient;
use future_interface::{
    FutureClient, FutureConfig, FutureFactoryError, FutureFactoryTrait, FutureVaultClient,
    FutureWalletClient,
};
use gauge_interface::GaugeControllerClient;
use permissions_interface::{caller_has_role, Role};
use registry_interface::RegistryClient;
use soroban_sdk::{
    contract, contractevent, contractimpl, xdr::ToXdr, Address, BytesN, Env, String,
};

const DAY: u64 = 86_400;

// Salt tags of the instances deployed for one future
const FUTURE_SALT: u8 = 0;
const WALLET_SALT: u8 = 1;
const VAULT_SALT: u8 = 2;
const APWINE_IBT_SALT: u8 = 3;

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FutureDeployed {
    #[topic]
    pub platform_name: String,
    #[topic]
    pub ibt: Address,
    pub future: Address,
    pub period_duration: u64,
}

/// Future factory for interest-bearing tokens: one instance per platform.
#[contract]
pub struct FutureFactory;

impl FutureFactory {
    fn salt(env: &Env, ibt: &Address, period_duration: u64, tag: u8) -> BytesN<32> {
        let mut bytes = ibt.clone().to_xdr(env);
        bytes.extend_from_array(&period_duration.to_be_bytes());
        bytes.push_back(tag);
        env.crypto().sha256(&bytes).to_bytes()
    }
}

#[contractimpl]
impl FutureFactoryTrait for FutureFactory {
    fn __constructor(env: Env, permissions: Address, registry: Address) {
        storage::set_permissions(&env, &permissions);
        storage::set_registry(&env, &registry);
        storage::extend_instance(&env);
    }

    fn get_registry_address(env: Env) -> Address {
        storage::get_registry(&env)
    }

    fn deploy_future_with_ibt(
        env: Env,
        caller: Address,
        platform_name: String,
        ibt: Address,
        period_duration_days: u64,
    ) -> Result<Address, FutureFactoryError> {
        let permissions = storage::get_permissions(&env);
        if !caller_has_role(&env, &permissions, &caller, Role::FutureDeployer) {
            return Err(FutureFactoryError::Unauthorized);
        }
        storage::extend_instance(&env);

        let period_duration = period_duration_days
            .checked_mul(DAY)
            .filter(|duration| *duration > 0)
            .ok_or(FutureFactoryError::InvalidDuration)?;

        let registry = RegistryClient::new(&env, &storage::get_registry(&env));
        if !registry.is_registered_future_platform(&platform_name) {
            return Err(FutureFactoryError::PlatformNotRegistered);
        }
        let this = env.current_contract_address();
        if registry.get_platform_factory(&platform_name) != this {
            return Err(FutureFactoryError::PlatformNotOwned);
        }
        let platform = registry.get_future_platform(&platform_name);

        let deployer = DeployerClient::new(&env, &registry.get_proxy_factory());
        let deploy = |logic: &BytesN<32>, tag: u8| {
            deployer.deploy(&this, logic, &Self::salt(&env, &ibt, period_duration, tag))
        };
        let future = deploy(&platform.future_logic, FUTURE_SALT);
        let wallet = deploy(&platform.wallet_logic, WALLET_SALT);
        let vault = deploy(&platform.vault_logic, VAULT_SALT);
        let apwine_ibt = deploy(&registry.get_apwine_ibt_logic(), APWINE_IBT_SALT);

        let liquidity_gauge = GaugeControllerClient::new(&env, &registry.get_gauge_controller())
            .register_new_gauge(&this, &future);

        FutureVaultClient::new(&env, &vault).initialize(&future, &ibt);
        FutureWalletClient::new(&env, &wallet).initialize(&future, &ibt);

        let controller = registry.get_controller();
        FutureClient::new(&env, &future).initialize(&FutureConfig {
            controller: controller.clone(),
            registry: registry.address.clone(),
            ibt: ibt.clone(),
            platform_name: platform_name.clone(),
            period_duration,
            vault,
            wallet,
            apwine_ibt,
            liquidity_gauge,
            naming_policy: registry.get_naming_policy(),
        });

        registry.add_future(&this, &future);
        ControllerClient::new(&env, &controller).register_new_future(&this, &future);

        FutureDeployed {
            platform_name,
            ibt,
            future: future.clone(),
            period_duration,
        }
        .publish(&env);
        Ok(future)
    }
}
