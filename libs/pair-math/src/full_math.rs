use soroban_sdk::{Env, U256};

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns (a * b) / denominator, or None on a zero denominator or a
/// quotient that does not fit in u128
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Option<u128> {
    if denominator == 0 {
        return None;
    }

    // Stay off the host when the product fits natively
    if let Some(product) = a.checked_mul(b) {
        return Some(product / denominator);
    }

    let a_256 = U256::from_u128(env, a);
    let b_256 = U256::from_u128(env, b);
    let denom_256 = U256::from_u128(env, denominator);

    a_256.mul(&b_256).div(&denom_256).to_u128()
}

/// floor(sqrt(a * b)) without overflowing the product
pub fn sqrt_product(env: &Env, a: u128, b: u128) -> Option<u128> {
    match a.checked_mul(b) {
        Some(product) => Some(sqrt(product)),
        None => {
            let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
            sqrt_u256(env, &product).to_u128()
        }
    }
}

/// Integer square root (rounds down)
pub fn sqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }

    // Start from a power of two at or above the root; Newton then
    // decreases monotonically onto floor(sqrt(n))
    let bits = 128 - n.leading_zeros();
    let mut x = 1u128 << ((bits + 1) / 2);
    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// Integer square root of a 256-bit value (rounds down)
fn sqrt_u256(env: &Env, n: &U256) -> U256 {
    let zero = U256::from_u32(env, 0);
    if *n == zero {
        return zero;
    }

    // sqrt of anything below 2^256 is below 2^128
    let mut x = U256::from_u32(env, 1).shl(128);
    loop {
        let y = x.add(&n.div(&x)).shr(1);
        if y >= x {
            return x;
        }
        x = y;
    }
}
