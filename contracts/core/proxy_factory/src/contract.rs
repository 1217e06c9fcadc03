use deployer_interface::{DeployerError, DeployerTrait};
use soroban_sdk::{contract, contractevent, contractimpl, xdr::ToXdr, Address, Bytes, BytesN, Env};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InstanceDeployed {
    #[topic]
    pub deployer: Address,
    pub logic: BytesN<32>,
    pub instance: Address,
}

/// Deploys protocol instances from uploaded WASM.
///
/// Stateless: every instance is created from this contract's address with a
/// salt bound to the requesting contract, so two requesters can never claim
/// the same address.
#[contract]
pub struct ProxyFactory;

impl ProxyFactory {
    pub(crate) fn instance_salt(env: &Env, deployer: &Address, salt: &BytesN<32>) -> BytesN<32> {
        let mut preimage: Bytes = deployer.clone().to_xdr(env);
        preimage.append(&Bytes::from(salt.clone()));
        env.crypto().sha256(&preimage).to_bytes()
    }
}

#[contractimpl]
impl DeployerTrait for ProxyFactory {
    fn deploy(
        env: Env,
        deployer: Address,
        logic: BytesN<32>,
        salt: BytesN<32>,
    ) -> Result<Address, DeployerError> {
        deployer.require_auth();

        let instance_salt = Self::instance_salt(&env, &deployer, &salt);
        let instance = env
            .deployer()
            .with_current_contract(instance_salt)
            .deploy_v2(logic.clone(), ());

        InstanceDeployed {
            deployer,
            logic,
            instance: instance.clone(),
        }
        .publish(&env);

        Ok(instance)
    }
}
