//! Share-based deposits and withdrawals.
//!
//! Shares are priced against the LP-owned balance of each reserve,
//! `L_x = R_x − pending_admin_fee_x`. For supply `S`:
//!
//! ```text
//! shares_issued = min(⌊Δa·S/L_a⌋, ⌊Δb·S/L_b⌋)
//! consumed_x    = ⌈shares_issued·L_x/S⌉        (never above Δx)
//! withdrawn_x   = ⌊shares·L_x/S⌋
//! ```
//!
//! Pending admin fees are never paid to a liquidity provider; a full
//! withdrawal leaves exactly them in the reserves.

use crate::domain::{
    Amount, DepositReceipt, Identity, LiquidityPosition, Rounding, Shares, WithdrawReceipt,
    BPS_DENOMINATOR,
};
use crate::error::{Result, SwapError};
use crate::math::{mul_div, CheckedArithmetic};
use crate::traits::LiquidityPool;

use super::PoolState;

impl PoolState {
    /// Rejects deposits whose per-side share counts differ by more than
    /// the ratio tolerance, measured against the larger one.
    fn check_ratio(&self, shares_a: u64, shares_b: u64) -> Result<()> {
        let (lo, hi) = if shares_a <= shares_b {
            (shares_a, shares_b)
        } else {
            (shares_b, shares_a)
        };
        let spread = u128::from(hi - lo) * u128::from(BPS_DENOMINATOR);
        let allowed = u128::from(hi) * u128::from(self.ratio_tolerance.get());
        if spread > allowed {
            return Err(SwapError::RatioMismatch);
        }
        Ok(())
    }
}

impl LiquidityPool for PoolState {
    /// Deposits both tokens at the current reserve ratio.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InsufficientLiquidity`] if the pool is drained or
    ///   holds nothing but pending admin fees on a side.
    /// - [`SwapError::InvalidAmount`] if either amount is zero or the
    ///   deposit is too small to mint a share.
    /// - [`SwapError::RatioMismatch`] if the amounts are off-ratio beyond
    ///   the pool's tolerance.
    /// - [`SwapError::ArithmeticOverflow`] if a reserve or the supply would
    ///   leave `u64`.
    fn deposit(
        &mut self,
        depositor: Identity,
        amount_a: Amount,
        amount_b: Amount,
        now: i64,
    ) -> Result<DepositReceipt> {
        let (lp_a, lp_b) = self.lp_reserves()?;
        if self.share_supply.is_zero() || lp_a.is_zero() || lp_b.is_zero() {
            return Err(SwapError::InsufficientLiquidity);
        }
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(SwapError::InvalidAmount("deposit amounts must be non-zero"));
        }

        let supply = self.share_supply.get();
        let shares_a = mul_div(amount_a.get(), supply, lp_a.get(), Rounding::Down)?;
        let shares_b = mul_div(amount_b.get(), supply, lp_b.get(), Rounding::Down)?;
        self.check_ratio(shares_a, shares_b)?;

        let issued = Shares::new(shares_a.min(shares_b));
        if issued.is_zero() {
            return Err(SwapError::InvalidAmount("deposit too small to mint shares"));
        }

        let consumed_a = Amount::new(mul_div(issued.get(), lp_a.get(), supply, Rounding::Up)?);
        let consumed_b = Amount::new(mul_div(issued.get(), lp_b.get(), supply, Rounding::Up)?);

        let reserve_a = self.reserve_a.safe_add(&consumed_a, "reserve_a overflow on deposit")?;
        let reserve_b = self.reserve_b.safe_add(&consumed_b, "reserve_b overflow on deposit")?;
        let share_supply = self.share_supply.safe_add(&issued, "share supply overflow")?;
        let position = match self.positions.get(&depositor) {
            Some(p) => {
                let held = p.shares().safe_add(&issued, "position overflow")?;
                p.with_deposit(held, now)
            }
            None => LiquidityPosition::new(depositor, issued, now),
        };
        let sequence = self.next_sequence()?;

        self.reserve_a = reserve_a;
        self.reserve_b = reserve_b;
        self.share_supply = share_supply;
        self.positions.insert(depositor, position);
        self.sequence = sequence;

        Ok(DepositReceipt {
            shares_issued: issued,
            consumed_a,
            consumed_b,
            sequence,
        })
    }

    /// Burns shares and releases their fraction of the LP-owned reserves.
    ///
    /// Pending admin fees stay in the pool for
    /// [`collect_admin_fees`](PoolState::collect_admin_fees).
    ///
    /// # Errors
    ///
    /// - [`SwapError::InsufficientShares`] if `shares` is zero, `owner` has
    ///   no position, or the position holds fewer shares.
    /// - [`SwapError::WithdrawalTooSoon`] before the position unlocks.
    fn withdraw(&mut self, owner: Identity, shares: Shares, now: i64) -> Result<WithdrawReceipt> {
        if shares.is_zero() {
            return Err(SwapError::InsufficientShares);
        }
        let position = self
            .positions
            .get(&owner)
            .copied()
            .ok_or(SwapError::InsufficientShares)?;
        if shares > position.shares() {
            return Err(SwapError::InsufficientShares);
        }
        let unlocks_at = position.unlocks_at(self.withdrawal_lock_secs);
        if now < unlocks_at {
            return Err(SwapError::WithdrawalTooSoon { unlocks_at });
        }

        let (lp_a, lp_b) = self.lp_reserves()?;
        let supply = self.share_supply.get();
        let burned = shares.get();
        let amount_a = Amount::new(mul_div(burned, lp_a.get(), supply, Rounding::Down)?);
        let amount_b = Amount::new(mul_div(burned, lp_b.get(), supply, Rounding::Down)?);

        let reserve_a = self.reserve_a.safe_sub(&amount_a, "reserve_a underflow on withdraw")?;
        let reserve_b = self.reserve_b.safe_sub(&amount_b, "reserve_b underflow on withdraw")?;
        let share_supply = self.share_supply.safe_sub(&shares, "share supply underflow")?;
        let remaining = position.shares().safe_sub(&shares, "position underflow")?;
        let sequence = self.next_sequence()?;

        self.reserve_a = reserve_a;
        self.reserve_b = reserve_b;
        self.share_supply = share_supply;
        if remaining.is_zero() {
            self.positions.remove(&owner);
        } else {
            self.positions.insert(owner, position.with_shares(remaining));
        }
        self.sequence = sequence;

        Ok(WithdrawReceipt {
            shares_burned: shares,
            amount_a,
            amount_b,
            sequence,
        })
    }

    fn share_supply(&self) -> Shares {
        self.share_supply
    }

    fn position(&self, owner: &Identity) -> Option<&LiquidityPosition> {
        self.positions.get(owner)
    }
}
