use crate::storage;
use apwine_maths::{get_actual_output, mul_div};
use future_interface::{FutureVaultTrait, LockReceipt, VaultError};
use ibt_interface::{IbtClient, IBT_RATE_SCALE};
use soroban_sdk::{contract, contractevent, contractimpl, token, Address, Env};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingLocked {
    pub amount: i128,
    pub locked_balance: i128,
    pub locked_value: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct YieldSwept {
    #[topic]
    pub to: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LockedReleased {
    #[topic]
    pub to: Address,
    pub amount: i128,
}

#[contract]
pub struct FutureVault;

impl FutureVault {
    fn require_future(env: &Env) {
        storage::get_future(env).require_auth();
        storage::extend_instance(env);
    }

    fn exchange_rate(env: &Env) -> i128 {
        IbtClient::new(env, &storage::get_ibt(env)).exchange_rate()
    }

    fn send_ibt(env: &Env, to: &Address, amount: i128) {
        if amount > 0 {
            token::Client::new(env, &storage::get_ibt(env)).transfer(
                &env.current_contract_address(),
                to,
                &amount,
            );
        }
    }
}

#[contractimpl]
impl FutureVaultTrait for FutureVault {
    fn initialize(env: Env, future: Address, ibt: Address) -> Result<(), VaultError> {
        if storage::is_initialized(&env) {
            return Err(VaultError::AlreadyInitialized);
        }
        storage::set_future(&env, &future);
        storage::set_ibt(&env, &ibt);
        storage::extend_instance(&env);
        Ok(())
    }

    fn get_future_address(env: Env) -> Address {
        storage::get_future(&env)
    }

    fn get_ibt_address(env: Env) -> Address {
        storage::get_ibt(&env)
    }

    fn add_pending(env: Env, amount: i128) -> Result<(), VaultError> {
        Self::require_future(&env);
        if amount <= 0 {
            return Err(VaultError::InvalidAmount);
        }
        storage::set_pending(&env, storage::get_pending(&env) + amount);
        Ok(())
    }

    fn release_pending(env: Env, to: Address, amount: i128) -> Result<(), VaultError> {
        Self::require_future(&env);
        if amount <= 0 {
            return Err(VaultError::InvalidAmount);
        }
        let pending = storage::get_pending(&env);
        if amount > pending {
            return Err(VaultError::InsufficientPending);
        }

        storage::set_pending(&env, pending - amount);
        Self::send_ibt(&env, &to, amount);
        Ok(())
    }

    fn lock_pending(env: Env) -> Result<LockReceipt, VaultError> {
        Self::require_future(&env);

        let amount = storage::get_pending(&env);
        let locked_before = storage::get_locked_balance(&env);
        if amount == 0 {
            return Ok(LockReceipt {
                amount,
                locked_before,
            });
        }

        let added_value = mul_div(amount, Self::exchange_rate(&env), IBT_RATE_SCALE);
        let locked_balance = locked_before + amount;
        let locked_value = storage::get_locked_value(&env) + added_value;

        storage::set_pending(&env, 0);
        storage::set_locked_balance(&env, locked_balance);
        storage::set_locked_value(&env, locked_value);

        PendingLocked {
            amount,
            locked_balance,
            locked_value,
        }
        .publish(&env);

        Ok(LockReceipt {
            amount,
            locked_before,
        })
    }

    fn sweep_yield(env: Env, to: Address) -> Result<i128, VaultError> {
        Self::require_future(&env);

        let locked_balance = storage::get_locked_balance(&env);
        let rate = Self::exchange_rate(&env);
        if locked_balance == 0 || rate <= 0 {
            return Ok(0);
        }

        // IBT still needed to cover the locked principal at today's rate
        let principal = mul_div(storage::get_locked_value(&env), IBT_RATE_SCALE, rate);
        let swept = (locked_balance - principal).max(0);
        if swept == 0 {
            return Ok(0);
        }

        storage::set_locked_balance(&env, locked_balance - swept);
        Self::send_ibt(&env, &to, swept);

        YieldSwept { to, amount: swept }.publish(&env);
        Ok(swept)
    }

    fn release_locked(
        env: Env,
        to: Address,
        amount: i128,
        supply: i128,
    ) -> Result<i128, VaultError> {
        Self::require_future(&env);
        if amount <= 0 || supply <= 0 {
            return Err(VaultError::InvalidAmount);
        }
        if amount > supply {
            return Err(VaultError::InsufficientLocked);
        }

        let locked_balance = storage::get_locked_balance(&env);
        let locked_value = storage::get_locked_value(&env);
        let released = get_actual_output(amount, supply, locked_balance);
        let released_value = get_actual_output(amount, supply, locked_value);

        storage::set_locked_balance(&env, locked_balance - released);
        storage::set_locked_value(&env, locked_value - released_value);
        Self::send_ibt(&env, &to, released);

        LockedReleased {
            to,
            amount: released,
        }
        .publish(&env);
        Ok(released)
    }

    fn get_pending_balance(env: Env) -> i128 {
        storage::get_pending(&env)
    }

    fn get_locked_balance(env: Env) -> i128 {
        storage::get_locked_balance(&env)
    }

    fn get_locked_value(env: Env) -> i128 {
        storage::get_locked_value(&env)
    }
}
