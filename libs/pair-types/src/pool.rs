use soroban_sdk::{contracttype, Address};

/// Current pool reserves - stored in Instance storage for frequent access
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolState {
    /// Recorded holding of token0
    pub reserve0: u128,
    /// Recorded holding of token1
    pub reserve1: u128,
}

impl PoolState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while either side holds nothing
    pub fn is_empty(&self) -> bool {
        self.reserve0 == 0 || self.reserve1 == 0
    }
}

/// Pool asset pair - written once by the registry, which is stored
/// separately by the constructor
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// Token0 address (lower address)
    pub token0: Address,
    /// Token1 address (higher address)
    pub token1: Address,
}

// ============================================================================
// COMPUTATION TYPES
// These separate pure reserve arithmetic from transfers and storage
// ============================================================================

/// Result of pricing a deposit against the current reserves
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositComputation {
    /// Token0 actually taken from the depositor
    pub amount0: u128,
    /// Token1 actually taken from the depositor
    pub amount1: u128,
    /// Shares issued for the deposit
    pub shares: u128,
}

/// Result of pricing a full withdrawal of a share balance
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawComputation {
    pub amount0: u128,
    pub amount1: u128,
}

/// Result of pricing a single-direction swap
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapComputation {
    /// Token0 the trader must pay in
    pub amount0_in: u128,
    /// Token1 the trader must pay in
    pub amount1_in: u128,
    /// Reserves after the swap settles
    pub state: PoolState,
}
