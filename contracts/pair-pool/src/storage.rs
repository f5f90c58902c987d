use crate::errors::PoolError;
use pair_types::{
    PoolConfig, PoolState, INSTANCE_TTL_EXTEND, INSTANCE_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND,
    PERSISTENT_TTL_THRESHOLD,
};
use soroban_sdk::{contracttype, Address, BytesN, Env};

// ============================================================================
// STORAGE LAYOUT
// ============================================================================
// Instance storage (read on almost every call):
// - Registry, SignatureRecovery, DomainSeparator: fixed by the constructor
// - Config: fixed by initialize
// - State, TotalShares: rewritten by mint/burn/swap
//
// Persistent storage (one entry per holder or holder pair):
// - Balance, Allowance, Nonce
// - Zero balances and allowances are removed instead of stored
// ============================================================================

/// Storage keys for the pool contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Registry that deployed this pool (Instance storage)
    Registry,
    /// Signature recovery collaborator used by permit (Instance storage)
    SignatureRecovery,
    /// Domain separator binding permits to this pool (Instance storage)
    DomainSeparator,
    /// Pool configuration (Instance storage)
    Config,
    /// Current reserves (Instance storage)
    State,
    /// Shares outstanding (Instance storage)
    TotalShares,
    /// holder -> share balance (Persistent storage)
    Balance(Address),
    /// (owner, spender) -> share allowance (Persistent storage)
    Allowance(Address, Address),
    /// owner -> next permit nonce (Persistent storage)
    Nonce(Address),
}

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Constructor values ===

pub fn get_registry(env: &Env) -> Result<Address, PoolError> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Registry)
        .ok_or(PoolError::NotInitialized)
}

pub fn set_registry(env: &Env, registry: &Address) {
    env.storage().instance().set(&DataKey::Registry, registry);
}

pub fn get_signature_recovery(env: &Env) -> Result<Address, PoolError> {
    env.storage()
        .instance()
        .get(&DataKey::SignatureRecovery)
        .ok_or(PoolError::NotInitialized)
}

pub fn set_signature_recovery(env: &Env, recovery: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::SignatureRecovery, recovery);
}

pub fn get_domain_separator(env: &Env) -> Result<BytesN<32>, PoolError> {
    env.storage()
        .instance()
        .get(&DataKey::DomainSeparator)
        .ok_or(PoolError::NotInitialized)
}

pub fn set_domain_separator(env: &Env, separator: &BytesN<32>) {
    env.storage()
        .instance()
        .set(&DataKey::DomainSeparator, separator);
}

// === Config ===

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<PoolConfig, PoolError> {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(PoolError::NotInitialized)
}

pub fn set_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === State ===

pub fn get_state(env: &Env) -> PoolState {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .unwrap_or_default()
}

pub fn set_state(env: &Env, state: &PoolState) {
    env.storage().instance().set(&DataKey::State, state);
    extend_instance_ttl(env);
}

// === Share ledger ===

pub fn get_total_shares(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalShares)
        .unwrap_or(0)
}

pub fn set_total_shares(env: &Env, total: u128) {
    env.storage().instance().set(&DataKey::TotalShares, &total);
}

pub fn get_balance(env: &Env, holder: &Address) -> u128 {
    let key = DataKey::Balance(holder.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_balance(env: &Env, holder: &Address, amount: u128) {
    let key = DataKey::Balance(holder.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        extend_persistent_ttl(env, &key);
    }
}

pub fn get_allowance(env: &Env, owner: &Address, spender: &Address) -> u128 {
    let key = DataKey::Allowance(owner.clone(), spender.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_allowance(env: &Env, owner: &Address, spender: &Address, amount: u128) {
    let key = DataKey::Allowance(owner.clone(), spender.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        extend_persistent_ttl(env, &key);
    }
}

pub fn get_nonce(env: &Env, owner: &Address) -> u64 {
    let key = DataKey::Nonce(owner.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_nonce(env: &Env, owner: &Address, nonce: u64) {
    let key = DataKey::Nonce(owner.clone());
    env.storage().persistent().set(&key, &nonce);
    extend_persistent_ttl(env, &key);
}
