#![no_std]

mod contract;
mod events;
mod storage;


pub use contract::{Permissions, PermissionsClient};
pub use permissions_interface::{PermissionsError, PermissionsTrait, Role};
