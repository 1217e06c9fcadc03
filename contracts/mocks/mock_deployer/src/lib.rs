#![no_std]
use deployer_interface::{DeployerError, DeployerTrait};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Vec};

/// Mock Deployer Contract
///
/// Test double for the proxy factory. Natively registered contract instances are
/// queued per logic hash with `provision` and handed out in order by `deploy`,
/// so factories can be exercised without compiled WASM.
#[contract]
pub struct MockDeployer;

#[contractimpl]
impl MockDeployer {
    /// Queue an uninitialised instance to be returned for `logic`
    pub fn provision(e: Env, logic: BytesN<32>, instance: Address) {
        let key = ("queue", logic);
        let mut queue: Vec<Address> = e.storage().instance().get(&key).unwrap_or(Vec::new(&e));
        queue.push_back(instance);
        e.storage().instance().set(&key, &queue);
    }

    /// Number of queued instances for `logic`
    pub fn available(e: Env, logic: BytesN<32>) -> u32 {
        let key = ("queue", logic);
        e.storage()
            .instance()
            .get::<_, Vec<Address>>(&key)
            .map(|queue| queue.len())
            .unwrap_or(0)
    }
}

#[contractimpl]
impl DeployerTrait for MockDeployer {
    fn deploy(
        e: Env,
        deployer: Address,
        logic: BytesN<32>,
        _salt: BytesN<32>,
    ) -> Result<Address, DeployerError> {
        deployer.require_auth();

        let key = ("queue", logic);
        let mut queue: Vec<Address> = e.storage().instance().get(&key).unwrap_or(Vec::new(&e));
        let instance = queue
            .pop_front()
            .ok_or(DeployerError::NoInstanceAvailable)?;
        e.storage().instance().set(&key, &queue);

        Ok(instance)
    }
}

#[cfg(test)]
mod test {
    use super::{MockDeployer, MockDeployerClient};
    use deployer_interface::DeployerError;
    use soroban_sdk::{testutils::Address as _, Address, BytesN, Env};

    #[test]
    fn test_hands_out_instances_in_order() {
        let env = Env::default();
        env.mock_all_auths();

        let deployer = MockDeployerClient::new(&env, &env.register(MockDeployer, ()));
        let caller = Address::generate(&env);
        let logic = BytesN::from_array(&env, &[1u8; 32]);
        let salt = BytesN::from_array(&env, &[0u8; 32]);
        let first = Address::generate(&env);
        let second = Address::generate(&env);

        deployer.provision(&logic, &first);
        deployer.provision(&logic, &second);
        assert_eq!(deployer.available(&logic), 2);

        assert_eq!(deployer.deploy(&caller, &logic, &salt), first);
        assert_eq!(deployer.deploy(&caller, &logic, &salt), second);
        assert_eq!(
            deployer.try_deploy(&caller, &logic, &salt),
            Err(Ok(DeployerError::NoInstanceAvailable))
        );
    }
}
