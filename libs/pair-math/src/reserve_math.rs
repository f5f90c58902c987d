use crate::full_math::{mul_div, sqrt_product};
use pair_types::{DepositComputation, PoolState, WithdrawComputation};
use soroban_sdk::Env;

/// Price a deposit of (amount0_in, amount1_in) against the current reserves
///
/// An empty pool takes both amounts as offered and issues
/// floor(sqrt(amount0_in * amount1_in)) shares. Otherwise only the amounts
/// that preserve the reserve ratio are taken, preferring to use amount1_in
/// in full, and shares are issued in proportion to the token0 side.
pub fn quote_deposit(
    env: &Env,
    state: &PoolState,
    total_shares: u128,
    amount0_in: u128,
    amount1_in: u128,
) -> Option<DepositComputation> {
    if state.is_empty() {
        return Some(DepositComputation {
            amount0: amount0_in,
            amount1: amount1_in,
            shares: sqrt_product(env, amount0_in, amount1_in)?,
        });
    }

    let optimal0 = mul_div(env, state.reserve0, amount1_in, state.reserve1)?;
    let (amount0, amount1) = if optimal0 <= amount0_in {
        (optimal0, amount1_in)
    } else {
        // optimal0 > amount0_in implies optimal1 <= amount1_in
        let optimal1 = mul_div(env, state.reserve1, amount0_in, state.reserve0)?;
        (amount0_in, optimal1)
    };

    let shares = mul_div(env, amount0, total_shares, state.reserve0)?;

    Some(DepositComputation {
        amount0,
        amount1,
        shares,
    })
}

/// Price the redemption of `shares` out of `total_shares`
pub fn quote_withdraw(
    env: &Env,
    state: &PoolState,
    total_shares: u128,
    shares: u128,
) -> Option<WithdrawComputation> {
    Some(WithdrawComputation {
        amount0: mul_div(env, shares, state.reserve0, total_shares)?,
        amount1: mul_div(env, shares, state.reserve1, total_shares)?,
    })
}

/// Reserves after a deposit settles
pub fn state_after_deposit(state: &PoolState, deposit: &DepositComputation) -> Option<PoolState> {
    Some(PoolState {
        reserve0: state.reserve0.checked_add(deposit.amount0)?,
        reserve1: state.reserve1.checked_add(deposit.amount1)?,
    })
}

/// Reserves after a withdrawal settles
pub fn state_after_withdraw(
    state: &PoolState,
    withdraw: &WithdrawComputation,
) -> Option<PoolState> {
    Some(PoolState {
        reserve0: state.reserve0.checked_sub(withdraw.amount0)?,
        reserve1: state.reserve1.checked_sub(withdraw.amount1)?,
    })
}
