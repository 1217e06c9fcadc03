#![no_std]

#[cfg(feature = "contract")]
mod contract;
#[cfg(feature = "contract")]
mod events;
#[cfg(feature = "contract")]
mod storage;


#[cfg(feature = "contract")]
pub use contract::{LiquidityGauge, LiquidityGaugeClient};

pub use gauge_interface::{GaugeError, LiquidityGaugeTrait};
