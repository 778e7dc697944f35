//! Property-based tests using `proptest` for pool invariants.
//!
//! 1. **Product check** — every committed swap keeps
//!    `reserve_in' × (reserve_out' + 1) ≥ k`, and accounting stays consistent.
//! 2. **Product growth** — when the retained fee covers rounding, `k` grows.
//! 3. **Zero input** — a zero-input swap never changes state.
//! 4. **Swap reversibility** — A→B→A returns no more than was sold.
//! 5. **Fee monotonicity** — a larger input never pays a smaller fee.
//! 6. **Liquidity conservation** — deposit then withdraw returns the
//!    consumed amounts within one unit.
//! 7. **Quote fidelity** — a quote predicts the swap exactly.

use proptest::prelude::*;

use super::PoolState;
use crate::config::PoolConfig;
use crate::domain::{Amount, Identity, TokenSide};
use crate::traits::{FromConfig, LiquidityPool, SwapPool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn id(b: u8) -> Identity {
    Identity::from_bytes([b; 32])
}

fn make_pool(ra: u64, rb: u64, fee_bps: u16) -> PoolState {
    let cfg = PoolConfig::new(id(1), id(2), fee_bps, id(9), id(8), ra, rb)
        .with_admin_fee_share_bps(2_000)
        .with_withdrawal_lock_secs(0);
    let Ok(pool) = PoolState::from_config(&cfg, 0) else {
        panic!("valid pool");
    };
    pool
}

fn product(pool: &PoolState) -> u128 {
    pool.reserve_a().widening_mul(&pool.reserve_b())
}

fn accounting_is_consistent(pool: &PoolState) -> bool {
    let held: u64 = pool.positions().map(|p| p.shares().get()).sum();
    held == pool.share_supply().get()
        && pool.pending_admin_fee(TokenSide::A) <= pool.reserve_a()
        && pool.pending_admin_fee(TokenSide::B) <= pool.reserve_b()
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in [10_000, 10_000_000].
fn reserve_strategy() -> impl Strategy<Value = u64> {
    10_000u64..=10_000_000u64
}

fn side_strategy() -> impl Strategy<Value = TokenSide> {
    prop_oneof![Just(TokenSide::A), Just(TokenSide::B)]
}

fn fee_strategy() -> impl Strategy<Value = u16> {
    0u16..=1_000u16
}

// ---------------------------------------------------------------------------
// Properties 1–3: invariant preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_product_check_holds(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fee in fee_strategy(),
        swaps in prop::collection::vec((side_strategy(), 0u64..2_000_000u64), 1..20),
    ) {
        let mut pool = make_pool(ra, rb, fee);
        for (side, amount) in swaps {
            let k_before = product(&pool);
            let before = pool.clone();
            match pool.swap(side, Amount::new(amount), Amount::ZERO) {
                Ok(_) => {
                    let (new_in, new_out) = match side {
                        TokenSide::A => (pool.reserve_a(), pool.reserve_b()),
                        TokenSide::B => (pool.reserve_b(), pool.reserve_a()),
                    };
                    let lhs = u128::from(new_in.get()) * (u128::from(new_out.get()) + 1);
                    prop_assert!(lhs >= k_before, "lhs={} < k={}", lhs, k_before);
                    prop_assert!(!pool.reserve_a().is_zero() && !pool.reserve_b().is_zero());
                }
                Err(_) => {
                    prop_assert_eq!(&pool, &before);
                }
            }
            prop_assert!(accounting_is_consistent(&pool));
        }
    }

    #[test]
    fn prop_product_grows_when_fee_covers_rounding(
        reserve in reserve_strategy(),
        per_mille in 1u64..=100u64,
        side in side_strategy(),
    ) {
        // dx ∈ [1_000, R/10] at 30 bp retains at least 3 units of fee
        let dx = (reserve * per_mille / 1_000).max(1_000);
        let mut pool = make_pool(reserve, reserve, 30);
        let k_before = product(&pool);
        let Ok(_) = pool.swap(side, Amount::new(dx), Amount::ZERO) else {
            return Err(TestCaseError::fail("swap within R/10 must succeed"));
        };
        let k_after = product(&pool);
        prop_assert!(k_after > k_before, "k_after={} <= k_before={}", k_after, k_before);
    }

    #[test]
    fn prop_zero_input_is_noop(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        side in side_strategy(),
        min_out in 0u64..10u64,
    ) {
        let mut pool = make_pool(ra, rb, 30);
        let before = pool.clone();
        let result = pool.swap(side, Amount::ZERO, Amount::new(min_out));
        prop_assert_eq!(result.is_ok(), min_out == 0);
        prop_assert_eq!(&pool, &before);
    }
}

// ---------------------------------------------------------------------------
// Properties 4–5: pricing
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_reversibility(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fee in fee_strategy(),
    ) {
        let swap_in = (ra / 1_000).max(1);
        let mut pool = make_pool(ra, rb, fee);

        let Ok(ab) = pool.swap(TokenSide::A, Amount::new(swap_in), Amount::ZERO) else {
            return Ok(());
        };
        let received_b = ab.amount_out();
        if received_b.is_zero() { return Ok(()); }

        let Ok(ba) = pool.swap(TokenSide::B, received_b, Amount::ZERO) else {
            return Ok(());
        };
        prop_assert!(
            ba.amount_out().get() <= swap_in,
            "round-trip should lose value: final={} > original={}",
            ba.amount_out().get(), swap_in
        );
    }

    #[test]
    fn prop_fee_monotonic(
        reserve in reserve_strategy(),
        fee in fee_strategy(),
        small in 1u64..100_000u64,
        extra in 0u64..100_000u64,
    ) {
        let pool = make_pool(reserve, reserve, fee);
        let (Ok(lo), Ok(hi)) = (
            pool.quote(TokenSide::A, Amount::new(small)),
            pool.quote(TokenSide::A, Amount::new(small + extra)),
        ) else {
            return Ok(());
        };
        prop_assert!(hi.fee() >= lo.fee());
        prop_assert!(hi.amount_out() >= lo.amount_out());
    }
}

// ---------------------------------------------------------------------------
// Properties 6–7: liquidity and quotes
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_liquidity_conservation(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        per_mille in 1u64..=500u64,
    ) {
        let mut pool = make_pool(ra, rb, 30);
        let da = (ra * per_mille / 1_000).max(1);
        let db = (rb * per_mille / 1_000).max(1);

        let Ok(d) = pool.deposit(id(5), Amount::new(da), Amount::new(db), 0) else {
            return Ok(());
        };
        prop_assert!(d.consumed_a.get() <= da && d.consumed_b.get() <= db);
        prop_assert!(accounting_is_consistent(&pool));

        let Ok(w) = pool.withdraw(id(5), d.shares_issued, 0) else {
            return Err(TestCaseError::fail("unlocked position must withdraw"));
        };
        prop_assert!(w.amount_a <= d.consumed_a && d.consumed_a.get() - w.amount_a.get() <= 1);
        prop_assert!(w.amount_b <= d.consumed_b && d.consumed_b.get() - w.amount_b.get() <= 1);
        prop_assert!(pool.position(&id(5)).is_none());
        prop_assert!(accounting_is_consistent(&pool));
    }

    #[test]
    fn prop_quote_predicts_swap(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fee in fee_strategy(),
        side in side_strategy(),
        amount in 1u64..5_000_000u64,
    ) {
        let mut pool = make_pool(ra, rb, fee);
        let quoted = pool.quote(side, Amount::new(amount));
        let swapped = pool.swap(side, Amount::new(amount), Amount::ZERO);
        match (quoted, swapped) {
            (Ok(q), Ok(s)) => {
                prop_assert_eq!(q.amount_out(), s.amount_out());
                prop_assert_eq!(q.fee(), s.fee());
                prop_assert_eq!(q.admin_fee(), s.admin_fee());
            }
            (Err(qe), Err(se)) => {
                prop_assert_eq!(qe, se);
            }
            (q, s) => return Err(TestCaseError::fail(format!("quote {q:?} vs swap {s:?}"))),
        }
    }
}
