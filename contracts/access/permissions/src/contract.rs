use crate::{events, storage};
use permissions_interface::{PermissionsError, PermissionsTrait, Role};
use soroban_sdk::{contract, contractimpl, Address, Env};

#[contract]
pub struct Permissions;

impl Permissions {
    fn grant(env: &Env, role: Role, account: &Address, sender: &Address) {
        if storage::has_role(env, role, account) {
            return;
        }
        storage::set_role(env, role, account);
        events::RoleGranted {
            role,
            account: account.clone(),
            sender: sender.clone(),
        }
        .publish(env);
    }

    fn revoke(env: &Env, role: Role, account: &Address, sender: &Address) {
        if !storage::has_role(env, role, account) {
            return;
        }
        storage::remove_role(env, role, account);
        events::RoleRevoked {
            role,
            account: account.clone(),
            sender: sender.clone(),
        }
        .publish(env);
    }

    fn require_default_admin(env: &Env, caller: &Address) -> Result<(), PermissionsError> {
        caller.require_auth();
        if !storage::has_role(env, Role::DefaultAdmin, caller) {
            return Err(PermissionsError::Unauthorized);
        }
        Ok(())
    }
}

#[contractimpl]
impl PermissionsTrait for Permissions {
    fn __constructor(env: Env, admin: Address) {
        Self::grant(&env, Role::DefaultAdmin, &admin, &admin);
        Self::grant(&env, Role::Admin, &admin, &admin);
        storage::set_initialized(&env);
    }

    fn grant_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), PermissionsError> {
        if !storage::is_initialized(&env) {
            return Err(PermissionsError::NotInitialized);
        }
        Self::require_default_admin(&env, &caller)?;
        Self::grant(&env, role, &account, &caller);
        Ok(())
    }

    fn revoke_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), PermissionsError> {
        if !storage::is_initialized(&env) {
            return Err(PermissionsError::NotInitialized);
        }
        Self::require_default_admin(&env, &caller)?;
        Self::revoke(&env, role, &account, &caller);
        Ok(())
    }

    fn renounce_role(env: Env, account: Address, role: Role) {
        account.require_auth();
        Self::revoke(&env, role, &account, &account);
    }

    fn has_role(env: Env, role: Role, account: Address) -> bool {
        storage::has_role(&env, role, &account)
    }
}
