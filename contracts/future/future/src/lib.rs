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
pub use contract::{Future, FutureClient};

pub use future_interface::{FutureConfig, FutureError, FutureTrait};
