use crate::assets::{collect, pay};
use crate::errors::PoolError;
use crate::events::{Burn, Mint, ReserveSync};
use crate::shares::{burn_shares, mint_shares};
use crate::storage::{get_balance, get_config, get_state, get_total_shares, set_state};
use pair_math::{quote_deposit, quote_withdraw, state_after_deposit, state_after_withdraw};
use pair_types::PoolState;
use soroban_sdk::{log, Address, Env};

// Order for both operations: assets in, ledger update, assets out, reserves.
// Reserves are stale while assets move; the host refuses any call back into
// this pool until the operation returns.

/// Deposit up to (amount0_in, amount1_in) and issue shares to `recipient`
///
/// Only the ratio-preserving part of the offer is collected.
pub fn mint(
    env: &Env,
    sender: &Address,
    recipient: &Address,
    amount0_in: u128,
    amount1_in: u128,
) -> Result<u128, PoolError> {
    if amount0_in == 0 || amount1_in == 0 {
        return Err(PoolError::ZeroAmountIn);
    }

    let config = get_config(env)?;
    let state = get_state(env);
    let total_shares = get_total_shares(env);

    let deposit = quote_deposit(env, &state, total_shares, amount0_in, amount1_in)
        .ok_or(PoolError::ArithmeticOverflow)?;
    if deposit.shares == 0 {
        return Err(PoolError::InsufficientSharesMinted);
    }
    let new_state = state_after_deposit(&state, &deposit).ok_or(PoolError::ArithmeticOverflow)?;

    collect(env, &config.token0, sender, deposit.amount0)?;
    collect(env, &config.token1, sender, deposit.amount1)?;

    mint_shares(env, recipient, deposit.shares)?;
    write_reserves(env, &new_state);

    Mint {
        sender: sender.clone(),
        amount0: deposit.amount0,
        amount1: deposit.amount1,
    }
    .publish(env);

    log!(env, "mint", sender, deposit.amount0, deposit.amount1, deposit.shares);
    Ok(deposit.shares)
}

/// Redeem the sender's whole share balance, paying both assets to `recipient`
pub fn burn(env: &Env, sender: &Address, recipient: &Address) -> Result<(u128, u128), PoolError> {
    let config = get_config(env)?;
    let total_shares = get_total_shares(env);
    if total_shares == 0 {
        return Err(PoolError::EmptyPool);
    }

    let shares = get_balance(env, sender);
    if shares == 0 {
        return Err(PoolError::NothingToBurn);
    }

    let state = get_state(env);
    let withdraw =
        quote_withdraw(env, &state, total_shares, shares).ok_or(PoolError::ArithmeticOverflow)?;
    let new_state =
        state_after_withdraw(&state, &withdraw).ok_or(PoolError::ArithmeticOverflow)?;

    burn_shares(env, sender, shares)?;

    pay(env, &config.token0, recipient, withdraw.amount0)?;
    pay(env, &config.token1, recipient, withdraw.amount1)?;

    write_reserves(env, &new_state);

    Burn {
        sender: sender.clone(),
        amount0: withdraw.amount0,
        amount1: withdraw.amount1,
        recipient: recipient.clone(),
    }
    .publish(env);

    log!(env, "burn", sender, shares, withdraw.amount0, withdraw.amount1);
    Ok((withdraw.amount0, withdraw.amount1))
}

/// Store both reserves and announce them
pub fn write_reserves(env: &Env, state: &PoolState) {
    set_state(env, state);
    ReserveSync {
        reserve0: state.reserve0,
        reserve1: state.reserve1,
    }
    .publish(env);
}
