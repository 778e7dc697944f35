//! Unified error type for the token swap engine.
//!
//! Every fallible operation in the crate returns [`SwapError`].  A returned
//! error always means the pool was left exactly as it was before the call.

use thiserror::Error;

use crate::domain::Amount;

/// Errors produced by pool initialization, swaps, liquidity operations and
/// registry bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwapError {
    /// Fee (or admin fee share) above 10 000 basis points.
    #[error("invalid fee configuration: {0}")]
    InvalidFeeConfiguration(&'static str),

    /// One of the initial reserves is zero.
    #[error("initial reserves must both be non-zero")]
    InvalidInitialReserves,

    /// The caller is not allowed to perform the operation.
    #[error("caller is not authorized for this pool")]
    Unauthorized,

    /// The computed output is below the caller's minimum.
    #[error("slippage exceeded: wanted at least {min_output}, got {actual_output}")]
    SlippageExceeded {
        /// Minimum output the caller accepts.
        min_output: Amount,
        /// Output the pool would have paid.
        actual_output: Amount,
    },

    /// The pool cannot pay the requested amount without draining a reserve.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// An intermediate or final value does not fit its integer width.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// Deposit amounts are not in the pool's reserve ratio.
    #[error("deposit amounts do not match the pool reserve ratio")]
    RatioMismatch,

    /// Withdrawal of zero shares or more shares than the position holds.
    #[error("insufficient shares")]
    InsufficientShares,

    /// The two mints of a pair are identical, or a mint is not in the pool pair.
    #[error("invalid token pair: {0}")]
    InvalidTokenPair(&'static str),

    /// A zero or too-small amount was supplied.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// The position is still inside its withdrawal lock window.
    #[error("withdrawal too soon: unlocks at {unlocks_at}")]
    WithdrawalTooSoon {
        /// Unix timestamp (seconds) at which withdrawals open.
        unlocks_at: i64,
    },

    /// A pool for the same pair and fee already exists.
    #[error("pool already exists")]
    PoolAlreadyExists,

    /// No pool is registered under the given id.
    #[error("pool not found")]
    PoolNotFound,

    /// The post-swap reserve product check failed.
    #[error("constant-product invariant violated")]
    InvariantViolation,

    /// Settings could not be read or parsed.
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, SwapError>;
