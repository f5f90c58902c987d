mod ledger;

use crate::{PairPool, PairPoolClient};
use asset::{TestAsset, TestAssetClient};
use pair_types::sort_tokens;
use signer::TestSigner;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

/// Initialized pool over two test assets
pub struct TestPool {
    pub env: Env,
    pub pool: Address,
    pub token0: Address,
    pub token1: Address,
    pub registry: Address,
    pub signer: Address,
}

impl TestPool {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let (token0, token1) = sort_tokens(
            env.register(TestAsset, ()),
            env.register(TestAsset, ()),
        );
        let signer = env.register(TestSigner, ());
        let registry = Address::generate(&env);

        let pool = env.register(PairPool, (&registry, &signer));
        PairPoolClient::new(&env, &pool).initialize(&registry, &token0, &token1);

        TestPool {
            env,
            pool,
            token0,
            token1,
            registry,
            signer,
        }
    }

    pub fn client(&self) -> PairPoolClient<'_> {
        PairPoolClient::new(&self.env, &self.pool)
    }

    pub fn asset0(&self) -> TestAssetClient<'_> {
        TestAssetClient::new(&self.env, &self.token0)
    }

    pub fn asset1(&self) -> TestAssetClient<'_> {
        TestAssetClient::new(&self.env, &self.token1)
    }

    /// Give `who` the assets and approve the pool to pull them
    pub fn fund(&self, who: &Address, amount0: u128, amount1: u128) {
        self.asset0().mint(who, &amount0);
        self.asset1().mint(who, &amount1);
        self.asset0().approve(who, &self.pool, &amount0);
        self.asset1().approve(who, &self.pool, &amount1);
    }

    /// New holder depositing (amount0, amount1); returns the holder and shares
    pub fn provider(&self, amount0: u128, amount1: u128) -> (Address, u128) {
        let who = Address::generate(&self.env);
        self.fund(&who, amount0, amount1);
        let shares = self.client().mint(&who, &who, &amount0, &amount1);
        (who, shares)
    }
}
