//! Liquidity management trait extending [`SwapPool`].
//!
//! [`LiquidityPool`] adds share-based deposits and withdrawals on top of
//! swapping.
//!
//! # Share Accounting Invariant
//!
//! The share supply changes **only** through
//! [`LiquidityPool::deposit`] and [`LiquidityPool::withdraw`] (and the
//! initial mint when the pool is created). For a pool with positions
//! `p₀ … pₙ` and supply `S`:
//!
//! ```text
//! S = Σ position[i].shares
//! ```
//!
//! # Rounding
//!
//! Shares issued and amounts withdrawn round down; amounts consumed from a
//! depositor round up. Rounding never favours the caller.

use super::SwapPool;
use crate::domain::{Amount, DepositReceipt, Identity, LiquidityPosition, Shares, WithdrawReceipt};
use crate::error::Result;

/// A pool whose liquidity is owned through fungible shares.
pub trait LiquidityPool: SwapPool {
    /// Adds liquidity in proportion to the current reserves.
    ///
    /// At most `amount_a` and `amount_b` are taken; the receipt reports
    /// what was actually consumed. `now` (unix seconds) restarts the
    /// depositor's withdrawal lock.
    ///
    /// # Errors
    ///
    /// - `InsufficientLiquidity` if the share supply is zero.
    /// - `InvalidAmount` for a zero amount or a deposit too small to mint.
    /// - `RatioMismatch` if the amounts deviate from the reserve ratio by
    ///   more than the pool's tolerance.
    /// - `ArithmeticOverflow` if a reserve or the supply leaves `u64`.
    fn deposit(
        &mut self,
        depositor: Identity,
        amount_a: Amount,
        amount_b: Amount,
        now: i64,
    ) -> Result<DepositReceipt>;

    /// Burns `shares` from `owner`'s position and pays out the
    /// proportional part of both reserves.
    ///
    /// # Errors
    ///
    /// - `InsufficientShares` if `shares` is zero or exceeds the position.
    /// - `WithdrawalTooSoon` while the position's lock is running.
    fn withdraw(&mut self, owner: Identity, shares: Shares, now: i64) -> Result<WithdrawReceipt>;

    /// Total outstanding shares.
    #[must_use]
    fn share_supply(&self) -> Shares;

    /// The position held by `owner`, if any.
    #[must_use]
    fn position(&self, owner: &Identity) -> Option<&LiquidityPosition>;
}
