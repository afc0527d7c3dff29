use anchor_lang::prelude::*;

#[error_code]
pub enum JackpotError {
    // Configuration
    #[msg("Entrance bounds must satisfy 0 < min <= max")]
    InvalidEntranceBounds,

    #[msg("Fee rate must not exceed 10000 basis points")]
    InvalidFeeRate,

    #[msg("Game interval must be greater than zero")]
    InvalidGameInterval,

    // Entry
    #[msg("Deposit is zero or leaves the player below the minimum entrance")]
    EntryTooSmall,

    #[msg("Cumulative deposit would exceed the maximum entrance")]
    EntryTooLarge,

    #[msg("Round is settling and closed to entries")]
    RoundNotOpen,

    #[msg("Round has reached the maximum number of players")]
    RoundFull,

    // Upkeep
    #[msg("Round is not eligible to close yet")]
    UpkeepNotNeeded,

    // Randomness
    #[msg("Randomness account has already been revealed")]
    RandomnessAlreadyRevealed,

    #[msg("Randomness account data could not be parsed")]
    InvalidRandomnessAccount,

    #[msg("Randomness account does not match the pending request")]
    UnknownRandomnessRequest,

    #[msg("Randomness value has not been resolved yet")]
    RandomnessNotResolved,

    // Settlement
    #[msg("Winner account does not match the drawn winner")]
    WinnerAccountMismatch,

    #[msg("Fee recipient does not match the game authority")]
    IncorrectFeeRecipient,

    #[msg("Cannot draw a winner from an empty pool")]
    PoolEmpty,

    #[msg("Sum of player deposits does not equal the total pool")]
    PoolAccountingMismatch,

    #[msg("Arithmetic overflow")]
    NumericalOverflow,

    #[msg("Lamport transfer could not complete")]
    TransferFailed,
}
