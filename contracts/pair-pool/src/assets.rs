use crate::errors::PoolError;
use pair_types::AssetLedgerClient;
use soroban_sdk::{Address, Env};

/// Pull `amount` of `token` from `from` into the pool.
///
/// The pool acts as spender, so `from` must have approved at least
/// `amount`; anything above that stays approved.
pub fn collect(env: &Env, token: &Address, from: &Address, amount: u128) -> Result<(), PoolError> {
    if amount == 0 {
        return Ok(());
    }
    let pool = env.current_contract_address();
    let client = AssetLedgerClient::new(env, token);
    if !client.transfer_from(&pool, from, &pool, &amount) {
        return Err(PoolError::TransferFailed);
    }
    Ok(())
}

/// Send `amount` of `token` from the pool to `to`
pub fn pay(env: &Env, token: &Address, to: &Address, amount: u128) -> Result<(), PoolError> {
    if amount == 0 {
        return Ok(());
    }
    let pool = env.current_contract_address();
    let client = AssetLedgerClient::new(env, token);
    if !client.transfer(&pool, to, &amount) {
        return Err(PoolError::TransferFailed);
    }
    Ok(())
}
