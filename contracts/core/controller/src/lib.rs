#![no_std]

#[cfg(feature = "contract")]
mod contract;
#[cfg(feature = "contract")]
mod events;
#[cfg(feature = "contract")]
mod storage;

#[cfg(all(test, feature = "contract"))]
mod tests;

#[cfg(feature = "contract")]
pub use contract::{Controller, ControllerClient};

pub use controller_interface::{ControllerError, ControllerTrait};
