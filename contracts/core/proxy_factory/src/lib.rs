#![no_std]

#[cfg(feature = "contract")]
mod contract;


#[cfg(feature = "contract")]
pub use contract::{ProxyFactory, ProxyFactoryClient};
pub use deployer_interface::{DeployerError, DeployerTrait};
