//! Error types for the Lock Staking program.
//!
//! Every failure aborts the whole instruction, token transfers included, so a
//! client only ever observes the error kind and never a partial update.
//!
//! ## Error Code Ranges
//! - 6000-6003: Input validation errors
//! - 6004-6006: State/balance errors
//! - 6007-6008: Time/lock errors
//! - 6009: Math errors
//! - 6010-6011: Authorization and account validation errors

use anchor_lang::prelude::*;

/// Custom error codes for the Lock Staking program.
///
/// Error codes start at 6000 (Anchor's custom error offset).
#[error_code]
pub enum StakingError {
    // ========== Input Validation Errors ==========

    /// [6000] An instruction argument is out of its accepted range.
    #[msg("Check input values")]
    InvalidInputValues,

    /// [6001] Cannot stake or fund with zero amount.
    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    /// [6002] Pool id is not the next sequential id, or names no existing pool.
    #[msg("Invalid pool id")]
    InvalidPoolId,

    /// [6003] The pool has been deactivated by the owner and takes no new stake.
    #[msg("Inactive pool")]
    InactivePool,

    // ========== State/Balance Errors ==========

    /// [6004] The status account has already been initialized.
    #[msg("Already initialized")]
    AlreadyInitialized,

    /// [6005] The position holds no principal.
    #[msg("Nothing staked in this pool")]
    NothingStaked,

    /// [6006] The vault does not hold enough tokens beyond principal to pay the reward.
    #[msg("Insufficient reward reserve in vault")]
    InsufficientRewardReserve,

    // ========== Time/Lock Errors ==========

    /// [6007] Withdraw attempted before the lock window elapsed.
    #[msg("Lock period has not ended - cannot withdraw yet")]
    StillLocked,

    /// [6008] Claim attempted before the lock window elapsed.
    #[msg("Lock period has not ended - nothing to claim yet")]
    NotYetClaimable,

    // ========== Math Errors ==========

    /// [6009] Arithmetic overflow or underflow in an accounting update.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,

    // ========== Authorization / Account Validation Errors ==========

    /// [6010] Signer is not the status owner, or not the position owner.
    #[msg("Unauthorized")]
    Unauthorized,

    /// [6011] Mint or token account does not match the staking token.
    #[msg("Invalid token account")]
    InvalidTokenAccount,
}
