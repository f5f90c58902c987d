use crate::full_math::mul_div;
use pair_types::{PoolState, SwapComputation};
use soroban_sdk::Env;

/// Input required to take `amount_out` out of `reserve_out` with no fee
///
/// amount_in = reserve_in * amount_out / (reserve_out - amount_out)
///
/// Returns None when the output would drain the reserve.
pub fn get_amount_in(
    env: &Env,
    reserve_in: u128,
    reserve_out: u128,
    amount_out: u128,
) -> Option<u128> {
    if amount_out >= reserve_out {
        return None;
    }
    mul_div(env, reserve_in, amount_out, reserve_out - amount_out)
}

/// Price a swap that pays out exactly one of (amount0_out, amount1_out)
///
/// Both inputs are computed; the one matching the zero output is zero.
/// Callers validate the output selection and non-empty reserves first.
pub fn compute_swap(
    env: &Env,
    state: &PoolState,
    amount0_out: u128,
    amount1_out: u128,
) -> Option<SwapComputation> {
    let amount0_in = get_amount_in(env, state.reserve0, state.reserve1, amount1_out)?;
    let amount1_in = get_amount_in(env, state.reserve1, state.reserve0, amount0_out)?;

    let reserve0 = state
        .reserve0
        .checked_add(amount0_in)?
        .checked_sub(amount0_out)?;
    let reserve1 = state
        .reserve1
        .checked_add(amount1_in)?
        .checked_sub(amount1_out)?;

    Some(SwapComputation {
        amount0_in,
        amount1_in,
        state: PoolState { reserve0, reserve1 },
    })
}
