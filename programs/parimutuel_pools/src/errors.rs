use anchor_lang::prelude::*;

#[error_code]
pub enum PoolError {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Protocol paused")]
    Paused,

    #[msg("Invalid stake amount")]
    InvalidStakeAmount,
    #[msg("Invalid fee bps (must be 0..=10_000)")]
    InvalidFeeBps,

    #[msg("Description too long")]
    DescriptionTooLong,
    #[msg("Pool needs at least two distinct options")]
    NotEnoughOptions,
    #[msg("Option string is empty")]
    EmptyOption,
    #[msg("Option string too long")]
    OptionTooLong,
    #[msg("Too many options")]
    TooManyOptions,

    #[msg("Option is not offered by this pool")]
    InvalidOption,
    #[msg("Winner list is empty")]
    NoWinners,
    #[msg("Pool already resolved")]
    AlreadyResolved,
    #[msg("Pool not resolved")]
    NotResolved,
    #[msg("Pool is full")]
    PoolFull,

    #[msg("Pool PDA mismatch")]
    PoolPdaMismatch,
    #[msg("Bet PDA mismatch")]
    BetPdaMismatch,
    #[msg("Bet not owned by program")]
    BetNotOwnedByProgram,
    #[msg("Duplicate bet entry in settlement set")]
    DuplicateBetEntry,
    #[msg("Settlement set does not cover every live bet")]
    IncompleteBetSet,
    #[msg("Too many entries")]
    TooManyEntries,

    #[msg("Invalid player token account")]
    InvalidPlayerTokenAccount,
    #[msg("Staking mint does not match config")]
    MintMismatch,

    #[msg("Insufficient vault funds")]
    InsufficientVaultFunds,
    #[msg("Vault not empty")]
    VaultNotEmpty,
    #[msg("Bet not settled yet")]
    BetNotSettled,

    #[msg("Failed to borrow account data")]
    AccountBorrowFailed,

    #[msg("Math overflow")]
    MathOverflow,
}
