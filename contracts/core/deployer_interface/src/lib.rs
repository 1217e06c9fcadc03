#![no_std]

use soroban_sdk::{contractclient, contracterror, Address, BytesN, Env};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum DeployerError {
    NotInitialized = 130,
    NoInstanceAvailable = 131,
}

/// Creates fresh instances of registered logic contracts.
///
/// The returned instance has not been initialised: the requesting contract is
/// expected to call its `initialize` right away.
#[contractclient(name = "DeployerClient")]
pub trait DeployerTrait {
    fn deploy(
        env: Env,
        deployer: Address,
        logic: BytesN<32>,
        salt: BytesN<32>,
    ) -> Result<Address, DeployerError>;
}
