// ============================================================================
// INVARIANTS MODULE
// ============================================================================
//
// Predicates over pool state that every operation must preserve. The
// contract tests check them after each mint, burn, swap and share movement.
//
// INVARIANT CATEGORIES:
//
// 1. CONFIGURATION INVARIANTS
//    - token0 orders strictly below token1
//
// 2. SHARE INVARIANTS
//    - Balances sum to the total share supply
//    - Shares exist exactly when both reserves are funded
//
// 3. PRICING INVARIANTS
//    - Outputs stay below their reserve
//    - A swap loses at most rounding dust from the reserve product
//
// ============================================================================

use pair_types::{PoolConfig, PoolState};
use soroban_sdk::{Env, U256};

// ============================================================================
// CONFIGURATION INVARIANTS
// ============================================================================

/// Invariant: assets are stored in canonical order
pub fn tokens_ordered(config: &PoolConfig) -> bool {
    config.token0 < config.token1
}

// ============================================================================
// SHARE INVARIANTS
// ============================================================================

/// Invariant: sum(balances) == total shares
pub fn balances_sum_to_total(balances: &[u128], total_shares: u128) -> bool {
    let mut sum: u128 = 0;
    for balance in balances {
        match sum.checked_add(*balance) {
            Some(next) => sum = next,
            None => return false,
        }
    }
    sum == total_shares
}

/// Invariant: outstanding shares are always backed by both assets
///
/// Property:
///   total_shares == 0  <=>  reserve0 == 0 && reserve1 == 0
///   total_shares > 0   =>   reserve0 > 0 && reserve1 > 0
pub fn shares_backed_by_reserves(state: &PoolState, total_shares: u128) -> bool {
    if total_shares == 0 {
        state.reserve0 == 0 && state.reserve1 == 0
    } else {
        state.reserve0 > 0 && state.reserve1 > 0
    }
}

// ============================================================================
// PRICING INVARIANTS
// ============================================================================

/// Invariant: a swap never pays out a whole reserve
pub fn output_within_reserve(state: &PoolState, amount0_out: u128, amount1_out: u128) -> bool {
    amount0_out < state.reserve0 && amount1_out < state.reserve1
}

/// Invariant: a swap preserves the reserve product up to rounding
///
/// The floored input leaves the product short by less than the larger
/// post-swap reserve:
///   r0' * r1' + max(r0', r1') >= r0 * r1
pub fn product_preserved(env: &Env, before: &PoolState, after: &PoolState) -> bool {
    let product = |state: &PoolState| {
        U256::from_u128(env, state.reserve0).mul(&U256::from_u128(env, state.reserve1))
    };
    let k_before = product(before);
    let k_after = product(after);
    let slack = U256::from_u128(env, after.reserve0.max(after.reserve1));
    k_after.add(&slack) >= k_before
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::Address;

    fn state(reserve0: u128, reserve1: u128) -> PoolState {
        PoolState { reserve0, reserve1 }
    }

    #[test]
    fn test_tokens_ordered() {
        let env = Env::default();
        let (a, b) = pair_types::sort_tokens(Address::generate(&env), Address::generate(&env));

        let ordered = PoolConfig {
            token0: a.clone(),
            token1: b.clone(),
        };
        assert!(tokens_ordered(&ordered));

        let reversed = PoolConfig {
            token0: b,
            token1: a,
        };
        assert!(!tokens_ordered(&reversed));
    }

    #[test]
    fn test_balances_sum_to_total() {
        assert!(balances_sum_to_total(&[], 0));
        assert!(balances_sum_to_total(&[141, 35], 176));
        assert!(!balances_sum_to_total(&[141, 35], 175));
        assert!(!balances_sum_to_total(&[u128::MAX, 1], 0));
    }

    #[test]
    fn test_shares_backed_by_reserves() {
        assert!(shares_backed_by_reserves(&state(0, 0), 0));
        assert!(shares_backed_by_reserves(&state(100, 200), 141));
        assert!(!shares_backed_by_reserves(&state(100, 0), 141));
        assert!(!shares_backed_by_reserves(&state(100, 200), 0));
    }

    #[test]
    fn test_output_within_reserve() {
        assert!(output_within_reserve(&state(300, 600), 0, 599));
        assert!(!output_within_reserve(&state(300, 600), 300, 0));
    }

    #[test]
    fn test_product_preserved() {
        let env = Env::default();
        assert!(product_preserved(&env, &state(300, 600), &state(450, 400)));
        // 1000 * 7919 = 7_919_000; 999 * 7927 = 7_919_073
        assert!(product_preserved(&env, &state(1_000, 7_919), &state(999, 7_927)));
        assert!(!product_preserved(&env, &state(300, 600), &state(200, 800)));
    }
}
