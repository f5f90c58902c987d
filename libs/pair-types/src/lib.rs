#![no_std]

mod interfaces;
mod pool;

pub use interfaces::*;
pub use pool::*;

use soroban_sdk::{Address, Env};

/// Strkey of the all-zero ed25519 account, the "null" identity.
///
/// Account addresses order before contract addresses and this key is the
/// smallest account, so nothing orders below it.
pub const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

// TTL constants
pub const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
pub const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
pub const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
pub const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Null identity as an `Address`
pub fn null_address(env: &Env) -> Address {
    Address::from_str(env, NULL_ACCOUNT)
}

/// True if `address` is the null identity
pub fn is_null_address(env: &Env, address: &Address) -> bool {
    *address == null_address(env)
}

/// Order two assets canonically: the smaller address becomes token0
pub fn sort_tokens(token_a: Address, token_b: Address) -> (Address, Address) {
    if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    }
}
