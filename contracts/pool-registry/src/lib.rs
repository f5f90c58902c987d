//! Registry deploying one pair pool per unordered asset pair at an address
//! derived from the pair and the pool Wasm hash.
//!
//! The deployment tests need the built pool Wasm and are behind the
//! `pool-wasm` feature:
//!
//! ```text
//! cargo build -p pair-pool --target wasm32v1-none --release
//! cargo test -p pool-registry --features pool-wasm
//! ```

#![no_std]

use pair_types::{
    is_null_address, sort_tokens, INSTANCE_TTL_EXTEND, INSTANCE_TTL_THRESHOLD,
    PERSISTENT_TTL_EXTEND, PERSISTENT_TTL_THRESHOLD,
};
use soroban_sdk::{
    contract, contracterror, contractevent, contractimpl, contracttype, log, xdr::ToXdr, Address,
    Bytes, BytesN, Env, IntoVal, Symbol, Vec,
};

#[contract]
pub struct PoolRegistry;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Both sides of the pair are the same asset
    EqualAssets = 3,
    /// One side of the pair is the null identity
    ZeroAsset = 4,
    PairExists = 5,
}

/// Storage keys for Registry contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Admin address
    Admin,
    /// Pool WASM hash for deployment
    PoolWasmHash,
    /// Signature recovery contract handed to every pool
    SignatureRecovery,
    /// (token_a, token_b) -> pool address, stored for both orderings
    Pair(Address, Address),
    /// Total number of pairs created (counter for indexed storage)
    PairCount,
    /// Pool address at index (indexed storage to avoid unbounded Vec)
    PairAt(u32),
}

/// A pool was deployed for (token0, token1)
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PairCreated {
    #[topic]
    pub token0: Address,
    #[topic]
    pub token1: Address,
    pub pool: Address,
}

/// Largest page `get_pairs_paginated` returns
pub const MAX_PAGE: u32 = 50;

// ============================================================================
// SOROBAN RESOURCE LIMITS
// ============================================================================
// - Read entries per tx: 100 entries / 200 KB
// - Write entries per tx: 50 entries / 132 KB
//
// - The pair list uses indexed storage (PairCount + PairAt) instead of Vec
//   to avoid a single unbounded ledger entry
// - Pagination is capped at MAX_PAGE reads
// ============================================================================

#[contractimpl]
impl PoolRegistry {
    /// Initialize registry with admin, pool WASM hash and the signature
    /// recovery contract every pool will use
    pub fn initialize(
        env: Env,
        admin: Address,
        pool_wasm_hash: BytesN<32>,
        signature_recovery: Address,
    ) -> Result<(), RegistryError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(RegistryError::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&DataKey::PoolWasmHash, &pool_wasm_hash);
        env.storage()
            .instance()
            .set(&DataKey::SignatureRecovery, &signature_recovery);
        env.storage().instance().set(&DataKey::PairCount, &0u32);

        extend_instance_ttl(&env);
        log!(&env, "registry initialized", admin);
        Ok(())
    }

    /// Deploy the pool for a pair of assets
    /// Returns the pool contract address
    pub fn create_pair(
        env: Env,
        token_a: Address,
        token_b: Address,
    ) -> Result<Address, RegistryError> {
        let (token0, token1) = validated_pair(&env, token_a, token_b)?;

        let pair_key = DataKey::Pair(token0.clone(), token1.clone());
        if env.storage().persistent().has(&pair_key) {
            return Err(RegistryError::PairExists);
        }

        let pool_wasm_hash = get_pool_wasm_hash(&env)?;
        let signature_recovery = get_signature_recovery(&env)?;
        let registry = env.current_contract_address();

        let pool_address = env
            .deployer()
            .with_current_contract(pair_salt(&env, &token0, &token1, &pool_wasm_hash))
            .deploy_v2(pool_wasm_hash, (registry.clone(), signature_recovery));

        init_pool(&env, &pool_address, &registry, &token0, &token1);

        // Record both orderings so lookups need no sorting
        env.storage().persistent().set(&pair_key, &pool_address);
        extend_persistent_ttl(&env, &pair_key);
        let reverse_key = DataKey::Pair(token1.clone(), token0.clone());
        env.storage().persistent().set(&reverse_key, &pool_address);
        extend_persistent_ttl(&env, &reverse_key);

        let pair_count = Self::all_pairs_length(env.clone());
        let pair_at_key = DataKey::PairAt(pair_count);
        env.storage()
            .persistent()
            .set(&pair_at_key, &pool_address);
        extend_persistent_ttl(&env, &pair_at_key);
        env.storage()
            .instance()
            .set(&DataKey::PairCount, &(pair_count + 1));

        PairCreated {
            token0: token0.clone(),
            token1: token1.clone(),
            pool: pool_address.clone(),
        }
        .publish(&env);

        extend_instance_ttl(&env);
        log!(&env, "pair created", token0, token1, pool_address);
        Ok(pool_address)
    }

    /// Address `create_pair` deploys (or deployed) the pool at, without
    /// deploying anything
    pub fn calculate_pool_address(
        env: Env,
        token_a: Address,
        token_b: Address,
    ) -> Result<Address, RegistryError> {
        let (token0, token1) = validated_pair(&env, token_a, token_b)?;
        let pool_wasm_hash = get_pool_wasm_hash(&env)?;

        Ok(env
            .deployer()
            .with_current_contract(pair_salt(&env, &token0, &token1, &pool_wasm_hash))
            .deployed_address())
    }

    /// Get pool address for a pair, in either order
    pub fn get_pair(env: Env, token_a: Address, token_b: Address) -> Option<Address> {
        env.storage()
            .persistent()
            .get(&DataKey::Pair(token_a, token_b))
    }

    /// Get total number of pairs created
    pub fn all_pairs_length(env: Env) -> u32 {
        extend_instance_ttl(&env);
        env.storage()
            .instance()
            .get(&DataKey::PairCount)
            .unwrap_or(0)
    }

    /// Get pool address at specific index
    pub fn get_pair_at(env: Env, index: u32) -> Option<Address> {
        env.storage().persistent().get(&DataKey::PairAt(index))
    }

    /// Get pools with pagination
    /// Returns up to `limit` pools starting from `start_index`, capped at MAX_PAGE
    pub fn get_pairs_paginated(env: Env, start_index: u32, limit: u32) -> Vec<Address> {
        let pair_count = Self::all_pairs_length(env.clone());
        let end_index = start_index
            .saturating_add(limit.min(MAX_PAGE))
            .min(pair_count);

        let mut pools: Vec<Address> = Vec::new(&env);
        for i in start_index..end_index {
            if let Some(pool) = env.storage().persistent().get(&DataKey::PairAt(i)) {
                pools.push_back(pool);
            }
        }
        pools
    }

    /// Get admin address
    pub fn get_admin(env: Env) -> Result<Address, RegistryError> {
        extend_instance_ttl(&env);
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(RegistryError::NotInitialized)
    }

    /// Get pool WASM hash
    pub fn get_pool_wasm_hash(env: Env) -> Result<BytesN<32>, RegistryError> {
        extend_instance_ttl(&env);
        get_pool_wasm_hash(&env)
    }

    /// Get the signature recovery contract pools are deployed with
    pub fn get_signature_recovery(env: Env) -> Result<Address, RegistryError> {
        extend_instance_ttl(&env);
        get_signature_recovery(&env)
    }
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

fn get_pool_wasm_hash(env: &Env) -> Result<BytesN<32>, RegistryError> {
    env.storage()
        .instance()
        .get(&DataKey::PoolWasmHash)
        .ok_or(RegistryError::NotInitialized)
}

fn get_signature_recovery(env: &Env) -> Result<Address, RegistryError> {
    env.storage()
        .instance()
        .get(&DataKey::SignatureRecovery)
        .ok_or(RegistryError::NotInitialized)
}

/// Sort a pair and reject identical or null assets
fn validated_pair(
    env: &Env,
    token_a: Address,
    token_b: Address,
) -> Result<(Address, Address), RegistryError> {
    let (token0, token1) = sort_tokens(token_a, token_b);
    if token0 == token1 {
        return Err(RegistryError::EqualAssets);
    }
    // The null identity sorts first, so token0 is the only side to check
    if is_null_address(env, &token0) {
        return Err(RegistryError::ZeroAsset);
    }
    Ok((token0, token1))
}

/// Deployment salt: sha256(xdr(token0) ‖ xdr(token1) ‖ pool_wasm_hash)
fn pair_salt(
    env: &Env,
    token0: &Address,
    token1: &Address,
    pool_wasm_hash: &BytesN<32>,
) -> BytesN<32> {
    let mut data = Bytes::new(env);
    data.append(&token0.clone().to_xdr(env));
    data.append(&token1.clone().to_xdr(env));
    data.append(&pool_wasm_hash.clone().into());
    env.crypto().sha256(&data).to_bytes()
}

// Pool initialization via invoke
fn init_pool(
    env: &Env,
    pool_address: &Address,
    registry: &Address,
    token0: &Address,
    token1: &Address,
) {
    env.invoke_contract::<()>(
        pool_address,
        &Symbol::new(env, "initialize"),
        (registry, token0, token1).into_val(env),
    );
}
