use crate::errors::PoolError;
use crate::events::{Approval, Transfer};
use crate::storage::{
    get_allowance, get_balance, get_total_shares, set_allowance, set_balance, set_total_shares,
};
use pair_types::null_address;
use soroban_sdk::{Address, Env};

// Share ledger bookkeeping. Every path keeps sum(balances) == total shares;
// issuance and redemption are reported as transfers from and to the null
// identity.

/// Issue `amount` new shares to `to`
pub fn mint_shares(env: &Env, to: &Address, amount: u128) -> Result<(), PoolError> {
    let total = get_total_shares(env)
        .checked_add(amount)
        .ok_or(PoolError::ArithmeticOverflow)?;
    let balance = get_balance(env, to)
        .checked_add(amount)
        .ok_or(PoolError::ArithmeticOverflow)?;

    set_total_shares(env, total);
    set_balance(env, to, balance);

    Transfer {
        from: null_address(env),
        to: to.clone(),
        amount,
    }
    .publish(env);
    Ok(())
}

/// Destroy `amount` shares held by `from`
pub fn burn_shares(env: &Env, from: &Address, amount: u128) -> Result<(), PoolError> {
    let balance = get_balance(env, from)
        .checked_sub(amount)
        .ok_or(PoolError::InsufficientBalance)?;
    let total = get_total_shares(env)
        .checked_sub(amount)
        .ok_or(PoolError::ArithmeticOverflow)?;

    set_balance(env, from, balance);
    set_total_shares(env, total);

    Transfer {
        from: from.clone(),
        to: null_address(env),
        amount,
    }
    .publish(env);
    Ok(())
}

/// Move `amount` shares between holders
pub fn move_shares(env: &Env, from: &Address, to: &Address, amount: u128) -> Result<(), PoolError> {
    let from_balance = get_balance(env, from)
        .checked_sub(amount)
        .ok_or(PoolError::InsufficientBalance)?;
    set_balance(env, from, from_balance);

    // Read after the debit so a self-transfer nets to zero
    let to_balance = get_balance(env, to)
        .checked_add(amount)
        .ok_or(PoolError::ArithmeticOverflow)?;
    set_balance(env, to, to_balance);

    Transfer {
        from: from.clone(),
        to: to.clone(),
        amount,
    }
    .publish(env);
    Ok(())
}

/// Draw `amount` from the allowance `owner` granted to `spender`
pub fn spend_allowance(
    env: &Env,
    owner: &Address,
    spender: &Address,
    amount: u128,
) -> Result<(), PoolError> {
    let remaining = get_allowance(env, owner, spender)
        .checked_sub(amount)
        .ok_or(PoolError::InsufficientAllowance)?;
    set_allowance(env, owner, spender, remaining);
    Ok(())
}

/// Set the allowance outright (no increment semantics)
pub fn approve(env: &Env, owner: &Address, spender: &Address, amount: u128) {
    set_allowance(env, owner, spender, amount);

    Approval {
        owner: owner.clone(),
        spender: spender.clone(),
        amount,
    }
    .publish(env);
}
