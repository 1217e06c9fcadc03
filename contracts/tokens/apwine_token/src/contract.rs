use crate::storage::{
    check_nonnegative_amount, check_transferable, decrease_total_supply, extend_instance,
    has_administrator, increase_total_supply, read_administrator, read_allowance, read_balance,
    read_metadata, read_total_supply, receive_balance, spend_allowance, spend_balance,
    write_administrator, write_allowance, write_metadata, TokenMetadata,
};
use apwine_token_interface::{ApwineTokenTrait, TokenError};
use soroban_sdk::{
    contract, contractimpl, panic_with_error, token::TokenInterface, Address, Env, MuxedAddress,
    String,
};
use soroban_token_sdk::events::{Approve, Burn, Mint, Transfer};

/// Mintable SEP-41 token owned by a protocol contract.
///
/// FYTs are transferable. APWine-IBTs are not: their balances mirror the
/// future's locked accounting and only the owning future moves them.
#[contract]
pub struct ApwineToken;

#[contractimpl]
impl TokenInterface for ApwineToken {
    fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        extend_instance(&env);
        read_allowance(&env, &from, &spender)
    }

    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        check_transferable(&env);
        check_nonnegative_amount(&env, amount);
        extend_instance(&env);

        write_allowance(&env, &from, &spender, amount, expiration_ledger);

        Approve {
            from,
            spender,
            amount,
            expiration_ledger,
        }
        .publish(&env);
    }

    fn balance(env: Env, id: Address) -> i128 {
        extend_instance(&env);
        read_balance(&env, &id)
    }

    fn transfer(env: Env, from: Address, to: MuxedAddress, amount: i128) {
        from.require_auth();
        check_transferable(&env);
        check_nonnegative_amount(&env, amount);
        extend_instance(&env);

        let to_addr = to.address();
        spend_balance(&env, &from, amount);
        receive_balance(&env, &to_addr, amount);

        Transfer {
            from,
            to: to_addr,
            to_muxed_id: to.id(),
            amount,
        }
        .publish(&env);
    }

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        check_transferable(&env);
        check_nonnegative_amount(&env, amount);
        extend_instance(&env);

        spend_allowance(&env, &from, &spender, amount);
        spend_balance(&env, &from, amount);
        receive_balance(&env, &to, amount);

        Transfer {
            from,
            to,
            to_muxed_id: None,
            amount,
        }
        .publish(&env);
    }

    fn burn(env: Env, from: Address, amount: i128) {
        from.require_auth();
        check_transferable(&env);
        check_nonnegative_amount(&env, amount);
        extend_instance(&env);

        spend_balance(&env, &from, amount);
        decrease_total_supply(&env, amount);

        Burn { from, amount }.publish(&env);
    }

    fn burn_from(env: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();
        check_transferable(&env);
        check_nonnegative_amount(&env, amount);
        extend_instance(&env);

        spend_allowance(&env, &from, &spender, amount);
        spend_balance(&env, &from, amount);
        decrease_total_supply(&env, amount);

        Burn { from, amount }.publish(&env);
    }

    fn decimals(env: Env) -> u32 {
        read_metadata(&env).decimals
    }

    fn name(env: Env) -> String {
        read_metadata(&env).name
    }

    fn symbol(env: Env) -> String {
        read_metadata(&env).symbol
    }
}

#[contractimpl]
impl ApwineTokenTrait for ApwineToken {
    fn initialize(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
        decimals: u32,
        transferable: bool,
    ) {
        if has_administrator(&env) {
            panic_with_error!(&env, TokenError::AlreadyInitialized);
        }
        if decimals > 18 {
            panic_with_error!(&env, TokenError::InvalidDecimals);
        }

        write_administrator(&env, &admin);
        write_metadata(
            &env,
            TokenMetadata {
                name,
                symbol,
                decimals,
                transferable,
            },
        );
        extend_instance(&env);
    }

    fn mint(env: Env, to: Address, amount: i128) {
        let admin = read_administrator(&env);
        admin.require_auth();
        check_nonnegative_amount(&env, amount);
        extend_instance(&env);

        receive_balance(&env, &to, amount);
        increase_total_supply(&env, amount);

        Mint {
            to,
            to_muxed_id: None,
            amount,
        }
        .publish(&env);
    }

    fn admin_burn(env: Env, from: Address, amount: i128) {
        let admin = read_administrator(&env);
        admin.require_auth();
        check_nonnegative_amount(&env, amount);
        extend_instance(&env);

        spend_balance(&env, &from, amount);
        decrease_total_supply(&env, amount);

        Burn { from, amount }.publish(&env);
    }

    fn total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }

    fn is_transferable(env: Env) -> bool {
        read_metadata(&env).transferable
    }

    fn admin(env: Env) -> Address {
        read_administrator(&env)
    }
}
