#![no_std]

mod assets;
mod errors;
mod events;
#[cfg(test)]
mod invariants;
mod liquidity;
mod permit;
mod shares;
mod storage;
mod swap;
#[cfg(test)]
mod test;

pub use errors::PoolError;

use pair_types::{PoolConfig, PoolState};
use soroban_sdk::{contract, contractimpl, log, Address, Bytes, BytesN, Env, String};
use storage::{
    extend_instance_ttl, get_allowance, get_balance, get_config, get_nonce, get_registry,
    get_state, get_total_shares, has_config, set_config, set_domain_separator, set_registry,
    set_signature_recovery, set_state,
};

/// Two-asset constant-product pool whose shares form a fungible ledger
#[contract]
pub struct PairPool;

#[contractimpl]
impl PairPool {
    /// Bind the pool to the registry deploying it
    pub fn __constructor(env: Env, registry: Address, signature_recovery: Address) {
        set_registry(&env, &registry);
        set_signature_recovery(&env, &signature_recovery);
        set_domain_separator(&env, &permit::compute_domain_separator(&env));
        extend_instance_ttl(&env);
    }

    /// Set the asset pair. Only the registry may call this, once.
    pub fn initialize(
        env: Env,
        caller: Address,
        token0: Address,
        token1: Address,
    ) -> Result<(), PoolError> {
        caller.require_auth();

        let registry = get_registry(&env)?;
        if caller != registry {
            return Err(PoolError::NotRegistry);
        }
        if has_config(&env) {
            return Err(PoolError::AlreadyInitialized);
        }
        if token0 >= token1 {
            return Err(PoolError::InvalidTokenOrder);
        }

        set_config(
            &env,
            &PoolConfig {
                token0: token0.clone(),
                token1: token1.clone(),
            },
        );
        set_state(&env, &PoolState::new());

        log!(&env, "pool initialized", token0, token1);
        Ok(())
    }

    /// Add liquidity
    ///
    /// # Arguments
    /// * `sender` - Pays the assets; must have approved the pool on both
    /// * `recipient` - Receives the shares
    /// * `amount0_in`, `amount1_in` - Most the sender is willing to deposit
    ///
    /// # Returns
    /// Shares issued
    ///
    /// # Errors
    /// * `ZeroAmountIn` - Either offered amount is zero
    /// * `InsufficientSharesMinted` - The deposit is too small to issue a share
    /// * `TransferFailed` - An asset ledger refused to move the deposit
    /// * `NotInitialized`, `ArithmeticOverflow`
    pub fn mint(
        env: Env,
        sender: Address,
        recipient: Address,
        amount0_in: u128,
        amount1_in: u128,
    ) -> Result<u128, PoolError> {
        sender.require_auth();
        liquidity::mint(&env, &sender, &recipient, amount0_in, amount1_in)
    }

    /// Redeem all of the sender's shares
    ///
    /// # Returns
    /// (amount0, amount1) - Assets paid to `recipient`
    pub fn burn(env: Env, sender: Address, recipient: Address) -> Result<(u128, u128), PoolError> {
        sender.require_auth();
        liquidity::burn(&env, &sender, &recipient)
    }

    /// Buy exactly one of the assets
    ///
    /// # Returns
    /// (amount0_in, amount1_in) - Input charged to `sender`
    pub fn swap(
        env: Env,
        sender: Address,
        recipient: Address,
        amount0_out: u128,
        amount1_out: u128,
    ) -> Result<(u128, u128), PoolError> {
        sender.require_auth();
        swap::execute_swap(&env, &sender, &recipient, amount0_out, amount1_out)
    }

    // === Share Ledger ===

    pub fn transfer(env: Env, from: Address, to: Address, amount: u128) -> Result<bool, PoolError> {
        from.require_auth();
        shares::move_shares(&env, &from, &to, amount)?;
        Ok(true)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: u128,
    ) -> Result<bool, PoolError> {
        spender.require_auth();
        shares::spend_allowance(&env, &from, &spender, amount)?;
        shares::move_shares(&env, &from, &to, amount)?;
        Ok(true)
    }

    /// Set `spender`'s allowance over the owner's shares to `amount`
    pub fn approve(env: Env, owner: Address, spender: Address, amount: u128) {
        owner.require_auth();
        shares::approve(&env, &owner, &spender, amount);
    }

    /// Set an allowance from a signature over `permit_digest`
    pub fn permit(
        env: Env,
        owner: Address,
        spender: Address,
        value: u128,
        deadline: u64,
        signature: Bytes,
    ) -> Result<(), PoolError> {
        permit::permit(&env, &owner, &spender, value, deadline, signature)
    }

    pub fn balance(env: Env, id: Address) -> u128 {
        get_balance(&env, &id)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> u128 {
        get_allowance(&env, &owner, &spender)
    }

    pub fn total_supply(env: Env) -> u128 {
        get_total_shares(&env)
    }

    pub fn name(env: Env) -> String {
        String::from_str(&env, permit::SHARE_NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, permit::SHARE_SYMBOL)
    }

    pub fn decimals(_env: Env) -> u32 {
        permit::SHARE_DECIMALS
    }

    /// Nonce the owner's next permit must carry
    pub fn nonces(env: Env, owner: Address) -> u64 {
        get_nonce(&env, &owner)
    }

    pub fn domain_separator(env: Env) -> Result<BytesN<32>, PoolError> {
        storage::get_domain_separator(&env)
    }

    /// Digest an owner signs off-line to authorize `permit`
    pub fn permit_digest(
        env: Env,
        owner: Address,
        spender: Address,
        value: u128,
        nonce: u64,
        deadline: u64,
    ) -> Result<BytesN<32>, PoolError> {
        permit::permit_digest(&env, &owner, &spender, value, nonce, deadline)
    }

    // === View Functions ===

    /// Get current reserves
    pub fn get_reserves(env: Env) -> (u128, u128) {
        let state = get_state(&env);
        (state.reserve0, state.reserve1)
    }

    /// Get pool configuration
    pub fn get_config(env: Env) -> Result<PoolConfig, PoolError> {
        get_config(&env)
    }

    /// Get token0 address
    pub fn token0(env: Env) -> Result<Address, PoolError> {
        Ok(get_config(&env)?.token0)
    }

    /// Get token1 address
    pub fn token1(env: Env) -> Result<Address, PoolError> {
        Ok(get_config(&env)?.token1)
    }

    /// Get the deploying registry
    pub fn registry(env: Env) -> Result<Address, PoolError> {
        get_registry(&env)
    }
}
