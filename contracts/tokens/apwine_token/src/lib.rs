#![no_std]

#[cfg(feature = "contract")]
mod contract;
#[cfg(feature = "contract")]
mod storage;

#[cfg(all(test, feature = "contract"))]
mod test;

#[cfg(feature = "contract")]
pub use contract::{ApwineToken, ApwineTokenClient};

pub use apwine_token_interface::{ApwineTokenTrait, TokenError};
