//! Constant-product swap pricing.
//!
//! # Swap Algorithm (side `in` → side `out`)
//!
//! 1. `net_input = amount_in × (10 000 − fee_bps) / 10 000` (truncating)
//! 2. `fee = amount_in − net_input`
//! 3. `amount_out = reserve_out − ⌊reserve_in × reserve_out / (reserve_in + net_input)⌋`
//! 4. `reserve_in += amount_in` (the fee stays in the pool)
//! 5. `reserve_out −= amount_out`
//!
//! # Invariant
//!
//! Step 3 floors the new output reserve, so the product may dip below
//! `k` by less than one unit of output. The check after every swap is
//! `reserve_in' × (reserve_out' + 1) ≥ k`; with a non-zero fee that covers
//! the rounding, `k` strictly grows.

use crate::domain::{
    Amount, BasisPoints, Rounding, SwapOutcome, TokenPair, TokenSide, BPS_DENOMINATOR,
};
use crate::error::{Result, SwapError};
use crate::math::{mul_div, CheckedArithmetic};
use crate::traits::SwapPool;

use super::PoolState;

/// Fully computed swap, ready to commit.
#[derive(Debug, Clone, Copy)]
struct SwapPlan {
    side_in: TokenSide,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
    admin_fee: Amount,
    new_reserve_in: Amount,
    new_reserve_out: Amount,
}

impl SwapPlan {
    const fn outcome(&self, sequence: u64) -> SwapOutcome {
        SwapOutcome::new(
            self.side_in,
            self.amount_in,
            self.amount_out,
            self.fee,
            self.admin_fee,
            sequence,
        )
    }

    const fn is_noop(&self) -> bool {
        self.amount_in.is_zero()
    }
}

impl PoolState {
    /// Prices a swap without touching state.
    fn plan_swap(&self, side_in: TokenSide, amount_in: Amount) -> Result<SwapPlan> {
        let (reserve_in, reserve_out) = self.directed_reserves(side_in);

        if amount_in.is_zero() {
            return Ok(SwapPlan {
                side_in,
                amount_in,
                amount_out: Amount::ZERO,
                fee: Amount::ZERO,
                admin_fee: Amount::ZERO,
                new_reserve_in: reserve_in,
                new_reserve_out: reserve_out,
            });
        }

        if self.share_supply.is_zero() || reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(SwapError::InsufficientLiquidity);
        }

        let net_input = Amount::new(mul_div(
            amount_in.get(),
            u64::from(self.fee.complement().get()),
            BPS_DENOMINATOR,
            Rounding::Down,
        )?);
        let fee = amount_in.safe_sub(&net_input, "fee underflow")?;

        let k = reserve_in.widening_mul(&reserve_out);
        // reserve_in + net_input ≤ 2^65, no overflow in u128
        let denominator = u128::from(reserve_in.get()) + u128::from(net_input.get());
        let floored_out_reserve = Amount::from_u128(k / denominator)
            .ok_or(SwapError::ArithmeticOverflow("output reserve"))?;

        let amount_out = reserve_out.safe_sub(&floored_out_reserve, "output underflow")?;
        if amount_out >= reserve_out {
            return Err(SwapError::InsufficientLiquidity);
        }

        let new_reserve_in = reserve_in.safe_add(&amount_in, "reserve_in overflow after swap")?;
        let new_reserve_out =
            reserve_out.safe_sub(&amount_out, "reserve_out underflow after swap")?;

        // the LP-owned part of reserve_out stays non-zero
        if new_reserve_out <= self.pending_admin_fee(side_in.opposite()) {
            return Err(SwapError::InsufficientLiquidity);
        }

        let grown =
            u128::from(new_reserve_in.get()).checked_mul(u128::from(new_reserve_out.get()) + 1);
        match grown {
            Some(g) if g >= k => {}
            _ => return Err(SwapError::InvariantViolation),
        }

        let admin_fee = self.admin_fee_share.apply(fee, Rounding::Down)?;

        Ok(SwapPlan {
            side_in,
            amount_in,
            amount_out,
            fee,
            admin_fee,
            new_reserve_in,
            new_reserve_out,
        })
    }
}

impl SwapPool for PoolState {
    /// Executes an exact-input swap.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InsufficientLiquidity`] if the pool is drained, a
    ///   reserve is empty, or `reserve_out` would fall to its pending
    ///   admin fees or below.
    /// - [`SwapError::SlippageExceeded`] if the output is below
    ///   `min_amount_out` (including a zero input with a non-zero minimum).
    /// - [`SwapError::ArithmeticOverflow`] if `reserve_in + amount_in` or a
    ///   fee counter leaves `u64`.
    fn swap(
        &mut self,
        side_in: TokenSide,
        amount_in: Amount,
        min_amount_out: Amount,
    ) -> Result<SwapOutcome> {
        let plan = self.plan_swap(side_in, amount_in)?;

        if plan.amount_out < min_amount_out {
            return Err(SwapError::SlippageExceeded {
                min_output: min_amount_out,
                actual_output: plan.amount_out,
            });
        }

        if plan.is_noop() {
            return Ok(plan.outcome(self.sequence));
        }

        let accumulated = self
            .accumulated_fees(side_in)
            .safe_add(&plan.fee, "accumulated fee overflow")?;
        let pending = self
            .pending_admin_fee(side_in)
            .safe_add(&plan.admin_fee, "pending admin fee overflow")?;
        let sequence = self.next_sequence()?;

        match side_in {
            TokenSide::A => {
                self.reserve_a = plan.new_reserve_in;
                self.reserve_b = plan.new_reserve_out;
                self.accumulated_fees_a = accumulated;
                self.pending_admin_fee_a = pending;
            }
            TokenSide::B => {
                self.reserve_b = plan.new_reserve_in;
                self.reserve_a = plan.new_reserve_out;
                self.accumulated_fees_b = accumulated;
                self.pending_admin_fee_b = pending;
            }
        }
        self.sequence = sequence;

        Ok(plan.outcome(sequence))
    }

    fn quote(&self, side_in: TokenSide, amount_in: Amount) -> Result<SwapOutcome> {
        self.plan_swap(side_in, amount_in)
            .map(|plan| plan.outcome(self.sequence))
    }

    /// Returns `(reserve_out, reserve_in)`: units of the other side per
    /// unit of `side_in`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InsufficientLiquidity`] if either reserve is
    /// zero.
    fn spot_price(&self, side_in: TokenSide) -> Result<(Amount, Amount)> {
        let (reserve_in, reserve_out) = self.directed_reserves(side_in);
        if self.share_supply.is_zero() || reserve_in.is_zero() || reserve_out.is_zero() {
            return Err(SwapError::InsufficientLiquidity);
        }
        Ok((reserve_out, reserve_in))
    }

    fn token_pair(&self) -> &TokenPair {
        &self.token_pair
    }

    fn fee(&self) -> BasisPoints {
        self.fee
    }
}
