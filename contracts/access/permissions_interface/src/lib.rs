#![no_std]

use soroban_sdk::{contractclient, contracterror, contracttype, Address, Env};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    /// Grants and revokes every role.
    DefaultAdmin = 0,
    /// Protocol configuration and period dispatch.
    Admin = 1,
    /// Deploys futures through a future factory.
    FutureDeployer = 2,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PermissionsError {
    NotInitialized = 1,
    Unauthorized = 2,
}

/// Role provider consulted by every admin-gated operation of the protocol.
#[contractclient(name = "PermissionsClient")]
pub trait PermissionsTrait {
    fn __constructor(env: Env, admin: Address);

    fn grant_role(env: Env, caller: Address, role: Role, account: Address)
        -> Result<(), PermissionsError>;
    fn revoke_role(env: Env, caller: Address, role: Role, account: Address)
        -> Result<(), PermissionsError>;
    fn renounce_role(env: Env, account: Address, role: Role);
    fn has_role(env: Env, role: Role, account: Address) -> bool;
}

/// Authenticates `caller` and checks it holds `role` on `permissions`.
///
/// Returns `false` when the role is missing so each contract can map it to its
/// own `Unauthorized` error.
pub fn caller_has_role(env: &Env, permissions: &Address, caller: &Address, role: Role) -> bool {
    caller.require_auth();
    PermissionsClient::new(env, permissions).has_role(&role, caller)
}
