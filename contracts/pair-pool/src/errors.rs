use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    // Authorization
    NotRegistry = 1,
    InvalidSigner = 2,
    SignatureExpired = 3,

    // Lifecycle
    AlreadyInitialized = 10,
    NotInitialized = 11,
    InvalidTokenOrder = 12,

    // Input validation
    ZeroAmountIn = 20,
    BadOutputSelection = 21,

    // Pool state
    EmptyPool = 30,
    NothingToBurn = 31,
    InsufficientLiquidity = 32,
    InsufficientSharesMinted = 33,

    // Share ledger
    InsufficientBalance = 40,
    InsufficientAllowance = 41,

    // Arithmetic
    ArithmeticOverflow = 50,

    // Collaborators
    TransferFailed = 60,
}
