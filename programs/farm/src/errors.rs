// farm/errors.rs

use anchor_lang::prelude::*;

#[error_code]
pub enum FarmError {
    #[msg("Farm has not been funded yet.")]
    NotInitialized,
    #[msg("Farm has already been funded.")]
    AlreadyInitialized,
    #[msg("Only the DAO multisig can fund the farm.")]
    Unauthorized,
    #[msg("Funding amount does not match the total incentive.")]
    WrongAmount,
    #[msg("Start time needs to be encoded in exactly three bytes.")]
    MalformedStartTime,
    #[msg("Start time must be in the future.")]
    StartTimeNotInFuture,
    #[msg("No period has been finalized yet.")]
    TooEarlyToClaim,
    #[msg("Nothing to claim.")]
    NothingToClaim,
    #[msg("Withdrawal exceeds staked balance.")]
    InsufficientStake,
    #[msg("Permit signature does not match the owner.")]
    InvalidAuthorization,
    #[msg("Permit deadline has passed.")]
    AuthorizationExpired,
    #[msg("Permit nonce does not match.")]
    NonceMismatch,
    #[msg("Amount must be greater than zero.")]
    ZeroAmount,
    #[msg("Farming has ended.")]
    FarmEnded,
    #[msg("Invalid parameter.")]
    InvalidParam,
    #[msg("Account does not match the expected key.")]
    InvalidAccount,
    #[msg("Arithmetic overflow.")]
    MathOverflow,
}
