use super::TestPool;
use crate::invariants::balances_sum_to_total;
use crate::PoolError;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;

#[test]
fn test_transfer_moves_shares() {
    let t = TestPool::new();
    let (alice, _) = t.provider(100, 200);
    let bob = Address::generate(&t.env);

    assert!(t.client().transfer(&alice, &bob, &41));

    assert_eq!(t.client().balance(&alice), 100);
    assert_eq!(t.client().balance(&bob), 41);
    assert!(balances_sum_to_total(
        &[t.client().balance(&alice), t.client().balance(&bob)],
        t.client().total_supply()
    ));
}

#[test]
fn test_transfer_to_self_keeps_balance() {
    let t = TestPool::new();
    let (alice, _) = t.provider(100, 200);

    assert!(t.client().transfer(&alice, &alice, &141));
    assert_eq!(t.client().balance(&alice), 141);
}

#[test]
fn test_transfer_over_balance_fails() {
    let t = TestPool::new();
    let (alice, _) = t.provider(100, 200);
    let bob = Address::generate(&t.env);

    let result = t.client().try_transfer(&alice, &bob, &142);
    assert_eq!(result, Err(Ok(PoolError::InsufficientBalance)));
    assert_eq!(t.client().balance(&alice), 141);
}

#[test]
fn test_transfer_from_spends_allowance() {
    let t = TestPool::new();
    let (alice, _) = t.provider(100, 200);
    let spender = Address::generate(&t.env);
    let bob = Address::generate(&t.env);

    t.client().approve(&alice, &spender, &100);
    assert!(t.client().transfer_from(&spender, &alice, &bob, &60));

    assert_eq!(t.client().allowance(&alice, &spender), 40);
    assert_eq!(t.client().balance(&alice), 81);
    assert_eq!(t.client().balance(&bob), 60);
}

#[test]
fn test_transfer_from_over_allowance_fails() {
    let t = TestPool::new();
    let (alice, _) = t.provider(100, 200);
    let spender = Address::generate(&t.env);

    t.client().approve(&alice, &spender, &10);
    let result = t.client().try_transfer_from(&spender, &alice, &spender, &11);
    assert_eq!(result, Err(Ok(PoolError::InsufficientAllowance)));
    assert_eq!(t.client().allowance(&alice, &spender), 10);
}

#[test]
fn test_transfer_from_over_balance_fails() {
    let t = TestPool::new();
    let (alice, _) = t.provider(100, 200);
    let spender = Address::generate(&t.env);

    t.client().approve(&alice, &spender, &1_000);
    let result = t.client().try_transfer_from(&spender, &alice, &spender, &142);
    assert_eq!(result, Err(Ok(PoolError::InsufficientBalance)));
    assert_eq!(t.client().allowance(&alice, &spender), 1_000);
}

#[test]
fn test_transferred_shares_can_be_burned() {
    let t = TestPool::new();
    let (alice, _) = t.provider(100, 200);
    let bob = Address::generate(&t.env);

    t.client().transfer(&alice, &bob, &141);
    let (out0, out1) = t.client().burn(&bob, &bob);

    assert_eq!((out0, out1), (100, 200));
    assert_eq!(t.client().total_supply(), 0);
    assert_eq!(t.client().try_burn(&alice, &alice), Err(Ok(PoolError::EmptyPool)));
}

#[test]
fn test_approve_overwrites() {
    let t = TestPool::new();
    let owner = Address::generate(&t.env);
    let spender = Address::generate(&t.env);

    t.client().approve(&owner, &spender, &5);
    t.client().approve(&owner, &spender, &3);
    assert_eq!(t.client().allowance(&owner, &spender), 3);
}
