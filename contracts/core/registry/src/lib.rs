#![no_std]

#[cfg(feature = "contract")]
mod contract;
#[cfg(feature = "contract")]
mod events;
#[cfg(feature = "contract")]
mod storage;

#[cfg(all(test, feature = "contract"))]
mod test;

#[cfg(feature = "contract")]
pub use contract::{Registry, RegistryClient};

pub use registry_interface::{FuturePlatform, RegistryError, RegistryTrait};
