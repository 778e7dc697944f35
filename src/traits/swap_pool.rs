//! Core swap trait for executing and pricing swaps.
//!
//! [`SwapPool`] covers the full lifecycle of a swap against a two-token
//! pool:
//!
//! 1. **Execute** — [`SwapPool::swap`] performs the exchange and commits.
//! 2. **Quote** — [`SwapPool::quote`] runs the same computation without
//!    committing anything.
//! 3. **Price** — [`SwapPool::spot_price`] returns the marginal exchange
//!    rate as an exact ratio.
//! 4. **Inspect** — [`SwapPool::token_pair`] and [`SwapPool::fee`].
//!
//! # Fee Deduction Invariant
//!
//! Implementations deduct the fee from the input **before** pricing, and
//! the whole input (fee included) is added to the input reserve:
//!
//! ```text
//! net_input  = amount_in × (10 000 − fee_bps) / 10 000   (truncating)
//! fee_amount = amount_in − net_input
//! amount_out = price_curve(net_input)
//! ```
//!
//! # Atomicity
//!
//! A swap either commits every state change or returns an error and
//! leaves the pool untouched; there are no partial fills.

use crate::domain::{Amount, BasisPoints, SwapOutcome, TokenPair, TokenSide};
use crate::error::Result;

/// A pool that can exchange one side of its pair for the other.
///
/// # Errors
///
/// Methods that can fail return [`Result`]. Common variants:
///
/// - [`SwapError::InsufficientLiquidity`](crate::error::SwapError::InsufficientLiquidity)
///   — a reserve is empty or the swap would drain the output reserve
/// - [`SwapError::SlippageExceeded`](crate::error::SwapError::SlippageExceeded)
///   — output below the caller's minimum
/// - [`SwapError::ArithmeticOverflow`](crate::error::SwapError::ArithmeticOverflow)
///   — a reserve or counter would leave `u64`
pub trait SwapPool {
    /// Swaps `amount_in` of `side_in` for the other side.
    ///
    /// Fails with `SlippageExceeded` if the computed output is below
    /// `min_amount_out`. A zero input yields a zero output.
    ///
    /// # Errors
    ///
    /// See the trait-level documentation.
    fn swap(
        &mut self,
        side_in: TokenSide,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> Result<SwapOutcome>;

    /// Computes what [`swap`](Self::swap) would return without committing.
    ///
    /// The returned outcome carries the current sequence number.
    ///
    /// # Errors
    ///
    /// The same failures as `swap`, except slippage which a quote does not
    /// check.
    fn quote(&self, side_in: TokenSide, amount_in: Amount) -> Result<SwapOutcome>;

    /// Marginal price of `side_in` in units of the other side, as
    /// `(reserve_out, reserve_in)`.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientLiquidity` if either reserve is zero.
    fn spot_price(&self, side_in: TokenSide) -> Result<(Amount, Amount)>;

    /// The canonically ordered pair traded by this pool.
    #[must_use]
    fn token_pair(&self) -> &TokenPair;

    /// The fee currently charged on every swap.
    #[must_use]
    fn fee(&self) -> BasisPoints;
}
