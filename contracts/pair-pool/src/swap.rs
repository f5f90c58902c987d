use crate::assets::{collect, pay};
use crate::errors::PoolError;
use crate::events::Swap;
use crate::liquidity::write_reserves;
use crate::storage::{get_config, get_state};
use pair_math::compute_swap;
use soroban_sdk::{log, Address, Env};

/// Pay exactly one of (amount0_out, amount1_out) to `recipient`, charging
/// `sender` the constant-product input for it
///
/// # Returns
/// (amount0_in, amount1_in) - the inert side is zero
pub fn execute_swap(
    env: &Env,
    sender: &Address,
    recipient: &Address,
    amount0_out: u128,
    amount1_out: u128,
) -> Result<(u128, u128), PoolError> {
    if (amount0_out == 0) == (amount1_out == 0) {
        return Err(PoolError::BadOutputSelection);
    }

    let config = get_config(env)?;
    let state = get_state(env);
    if state.is_empty() {
        return Err(PoolError::EmptyPool);
    }
    if amount0_out >= state.reserve0 || amount1_out >= state.reserve1 {
        return Err(PoolError::InsufficientLiquidity);
    }

    let swap = compute_swap(env, &state, amount0_out, amount1_out)
        .ok_or(PoolError::ArithmeticOverflow)?;

    if amount1_out > 0 {
        collect(env, &config.token0, sender, swap.amount0_in)?;
        pay(env, &config.token1, recipient, amount1_out)?;
    } else {
        collect(env, &config.token1, sender, swap.amount1_in)?;
        pay(env, &config.token0, recipient, amount0_out)?;
    }

    write_reserves(env, &swap.state);

    Swap {
        sender: sender.clone(),
        amount0_in: swap.amount0_in,
        amount1_in: swap.amount1_in,
        amount0_out,
        amount1_out,
        recipient: recipient.clone(),
    }
    .publish(env);

    log!(env, "swap", sender, swap.amount0_in, swap.amount1_in, amount0_out, amount1_out);
    Ok((swap.amount0_in, swap.amount1_in))
}
