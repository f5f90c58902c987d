use soroban_sdk::{contractevent, Address};

/// Liquidity added: the amounts actually taken from `sender`
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Mint {
    #[topic]
    pub sender: Address,
    pub amount0: u128,
    pub amount1: u128,
}

/// Liquidity removed
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Burn {
    #[topic]
    pub sender: Address,
    pub amount0: u128,
    pub amount1: u128,
    #[topic]
    pub recipient: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Swap {
    #[topic]
    pub sender: Address,
    pub amount0_in: u128,
    pub amount1_in: u128,
    pub amount0_out: u128,
    pub amount1_out: u128,
    #[topic]
    pub recipient: Address,
}

/// Reserves after every mint, burn and swap
#[contractevent(topics = ["sync"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReserveSync {
    pub reserve0: u128,
    pub reserve1: u128,
}

/// Shares moved between holders
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transfer {
    #[topic]
    pub from: Address,
    #[topic]
    pub to: Address,
    pub amount: u128,
}

/// Share allowance assigned, directly or through a permit
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Approval {
    #[topic]
    pub owner: Address,
    #[topic]
    pub spender: Address,
    pub amount: u128,
}
