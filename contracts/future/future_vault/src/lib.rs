#![no_std]

#[cfg(feature = "contract")]
mod contract;
#[cfg(feature = "contract")]
mod storage;


#[cfg(feature = "contract")]
pub use contract::{FutureVault, FutureVaultClient};

pub use future_interface::{FutureVaultTrait, LockReceipt, VaultError};
