use soroban_sdk::{contractclient, Address, Bytes, BytesN, Env};

/// Ledger of one fungible asset traded by a pool.
///
/// Some ledgers report a failed transfer by returning `false` instead of
/// trapping, so callers must check the flag.
#[contractclient(name = "AssetLedgerClient")]
pub trait AssetLedger {
    /// Move `amount` from `from` to `to`. `from` authorizes.
    fn transfer(env: Env, from: Address, to: Address, amount: u128) -> bool;

    /// Move `amount` from `from` to `to` out of the allowance `from` granted
    /// to `spender`. `spender` authorizes.
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: u128)
        -> bool;
}

/// Recovers the identity that produced `signature` over `digest`.
#[contractclient(name = "SignatureRecoveryClient")]
pub trait SignatureRecovery {
    fn recover(env: Env, digest: BytesN<32>, signature: Bytes) -> Address;
}
