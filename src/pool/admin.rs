//! Fee administration.

use crate::domain::{Amount, BasisPoints, Identity};
use crate::error::{Result, SwapError};
use crate::math::CheckedArithmetic;

use super::PoolState;

impl PoolState {
    /// Replaces the swap fee. Only the admin may call this.
    ///
    /// The pool's [`PoolId`](crate::domain::PoolId) keeps the fee the pool
    /// was created with.
    ///
    /// # Errors
    ///
    /// - [`SwapError::Unauthorized`] if `caller` is not the admin.
    /// - [`SwapError::InvalidFeeConfiguration`] above 10 000 bp.
    pub fn update_fee(&mut self, caller: Identity, new_fee_bps: u16) -> Result<BasisPoints> {
        if caller != self.admin {
            return Err(SwapError::Unauthorized);
        }
        let fee = BasisPoints::new(new_fee_bps)?;
        let sequence = self.next_sequence()?;

        self.fee = fee;
        self.sequence = sequence;
        Ok(fee)
    }

    /// Pays out the pending admin fees, returning `(fee_a, fee_b)`.
    ///
    /// Callable by the admin or the admin fee account. Nothing is
    /// committed when both counters are zero.
    ///
    /// # Errors
    ///
    /// - [`SwapError::Unauthorized`] for any other caller.
    /// - [`SwapError::InsufficientLiquidity`] if paying out would empty a
    ///   reserve while shares are outstanding.
    pub fn collect_admin_fees(&mut self, caller: Identity) -> Result<(Amount, Amount)> {
        if caller != self.admin && caller != self.admin_fee_account {
            return Err(SwapError::Unauthorized);
        }
        let fee_a = self.pending_admin_fee_a;
        let fee_b = self.pending_admin_fee_b;
        if fee_a.is_zero() && fee_b.is_zero() {
            return Ok((Amount::ZERO, Amount::ZERO));
        }

        let reserve_a = self.reserve_a.safe_sub(&fee_a, "admin fee exceeds reserve_a")?;
        let reserve_b = self.reserve_b.safe_sub(&fee_b, "admin fee exceeds reserve_b")?;
        if !self.share_supply.is_zero() && (reserve_a.is_zero() || reserve_b.is_zero()) {
            return Err(SwapError::InsufficientLiquidity);
        }
        let sequence = self.next_sequence()?;

        self.reserve_a = reserve_a;
        self.reserve_b = reserve_b;
        self.pending_admin_fee_a = Amount::ZERO;
        self.pending_admin_fee_b = Amount::ZERO;
        self.sequence = sequence;
        Ok((fee_a, fee_b))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::PoolConfig;
    use crate::domain::TokenSide;
    use crate::traits::{FromConfig, SwapPool};

    fn id(b: u8) -> Identity {
        Identity::from_bytes([b; 32])
    }

    fn make_pool(admin_share_bps: u16) -> PoolState {
        let cfg = PoolConfig::new(id(1), id(2), 100, id(9), id(8), 1_000_000, 1_000_000)
            .with_admin_fee_share_bps(admin_share_bps);
        let Ok(pool) = PoolState::from_config(&cfg, 0) else {
            panic!("expected valid pool");
        };
        pool
    }

    #[test]
    fn admin_updates_fee() {
        let mut pool = make_pool(0);
        assert_eq!(pool.update_fee(id(9), 250), Ok(BasisPoints::new_unchecked(250)));
        assert_eq!(pool.fee(), BasisPoints::new_unchecked(250));
        assert_eq!(pool.sequence(), 1);
        // id is fixed at creation
        assert_eq!(pool.id().fee(), BasisPoints::new_unchecked(100));
    }

    #[test]
    fn fee_update_checks() {
        let mut pool = make_pool(0);
        assert_eq!(pool.update_fee(id(8), 10), Err(SwapError::Unauthorized));
        assert!(matches!(
            pool.update_fee(id(9), 10_001),
            Err(SwapError::InvalidFeeConfiguration(_))
        ));
        assert_eq!(pool.fee(), BasisPoints::new_unchecked(100));
        assert_eq!(pool.sequence(), 0);
    }

    #[test]
    fn collect_moves_pending_out_of_reserves() {
        let mut pool = make_pool(5_000);
        let Ok(_) = pool.swap(TokenSide::A, Amount::new(10_000), Amount::ZERO) else {
            panic!("expected Ok");
        };
        let Ok(_) = pool.swap(TokenSide::B, Amount::new(20_000), Amount::ZERO) else {
            panic!("expected Ok");
        };
        let (ra, rb) = (pool.reserve_a(), pool.reserve_b());

        let Ok((fa, fb)) = pool.collect_admin_fees(id(8)) else {
            panic!("fee account may collect");
        };
        // 1% of 10_000 = 100, half to the admin; 1% of 20_000 = 200, half
        assert_eq!((fa, fb), (Amount::new(50), Amount::new(100)));
        assert_eq!(pool.reserve_a().get(), ra.get() - 50);
        assert_eq!(pool.reserve_b().get(), rb.get() - 100);
        assert_eq!(pool.pending_admin_fee(TokenSide::A), Amount::ZERO);

        assert_eq!(
            pool.collect_admin_fees(id(9)),
            Ok((Amount::ZERO, Amount::ZERO))
        );
    }

    #[test]
    fn swaps_cannot_pin_reserve_at_pending_fees() {
        let cfg = PoolConfig::new(id(1), id(2), 100, id(9), id(8), 1_000, 2_000);
        let Ok(mut pool) = PoolState::from_config(&cfg, 0) else {
            panic!("expected valid pool");
        };
        pool.pending_admin_fee_b = Amount::new(1_000);
        let before = pool.clone();

        // net 1_000 in prices reserve_b down to exactly 1_000
        assert_eq!(
            pool.swap(TokenSide::A, Amount::new(1_011), Amount::ZERO),
            Err(SwapError::InsufficientLiquidity)
        );
        assert_eq!(pool, before);

        let Ok(out) = pool.swap(TokenSide::A, Amount::new(500), Amount::ZERO) else {
            panic!("expected Ok");
        };
        assert_eq!(out.amount_out(), Amount::new(663));
        assert_eq!(pool.reserve_b(), Amount::new(1_337));

        let Ok(collected) = pool.collect_admin_fees(id(9)) else {
            panic!("admin may collect");
        };
        assert_eq!(collected, (Amount::ZERO, Amount::new(1_000)));
        assert_eq!(pool.reserve_b(), Amount::new(337));
    }

    #[test]
    fn stranger_cannot_collect() {
        let mut pool = make_pool(5_000);
        assert_eq!(pool.collect_admin_fees(id(3)), Err(SwapError::Unauthorized));
    }
}
