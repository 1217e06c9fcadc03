use permissions_interface::Role;
use soroban_sdk::{contractevent, Address};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleGranted {
    #[topic]
    pub role: Role,
    #[topic]
    pub account: Address,
    pub sender: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleRevoked {
    #[topic]
    pub role: Role,
    #[topic]
    pub account: Address,
    pub sender: Address,
}
