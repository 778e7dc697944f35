//! Pool state and construction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::PoolConfig;
use crate::domain::{
    Amount, BasisPoints, Identity, LiquidityPosition, PoolId, Shares, TokenPair, TokenSide,
};
use crate::error::{Result, SwapError};
use crate::math::{isqrt, CheckedArithmetic};
use crate::traits::FromConfig;

/// A constant-product pool (`x · y = k`) over one token pair.
///
/// Created from a [`PoolConfig`] via [`FromConfig`]; the initial shares
/// `isqrt(reserve_a × reserve_b)` are minted to the admin. Swaps live in
/// [`SwapPool`](crate::traits::SwapPool), deposits and withdrawals in
/// [`LiquidityPool`](crate::traits::LiquidityPool), and the fee knobs in
/// the admin methods.
///
/// # State
///
/// - `reserve_a` / `reserve_b` — custodied balances, fees and pending
///   admin fees included
/// - `share_supply` — outstanding shares, always the sum of `positions`
/// - `pending_admin_fee_a` / `_b` — admin fees still held in the reserves
/// - `accumulated_fees_a` / `_b` — lifetime fee counters
/// - `sequence` — number of committed mutations
///
/// Every operation computes on locals and commits all fields together, so
/// a returned error always means the state is untouched.
///
/// # Example
///
/// ```rust
/// use token_swap::config::PoolConfig;
/// use token_swap::domain::{Amount, Identity, TokenSide};
/// use token_swap::pool::PoolState;
/// use token_swap::traits::{FromConfig, SwapPool};
///
/// let admin = Identity::from_bytes([9u8; 32]);
/// let cfg = PoolConfig::new(
///     Identity::from_bytes([1u8; 32]),
///     Identity::from_bytes([2u8; 32]),
///     100,
///     admin,
///     admin,
///     1_000,
///     1_000,
/// );
/// let mut pool = PoolState::from_config(&cfg, 0).expect("valid config");
///
/// let out = pool.swap(TokenSide::A, Amount::new(100), Amount::ZERO).expect("swap ok");
/// assert_eq!(out.amount_out(), Amount::new(91));
/// assert_eq!(pool.reserve_a(), Amount::new(1_100));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolState {
    pub(super) id: PoolId,
    pub(super) token_pair: TokenPair,
    pub(super) reserve_a: Amount,
    pub(super) reserve_b: Amount,
    pub(super) share_supply: Shares,
    pub(super) fee: BasisPoints,
    pub(super) admin: Identity,
    pub(super) admin_fee_account: Identity,
    pub(super) admin_fee_share: BasisPoints,
    pub(super) pending_admin_fee_a: Amount,
    pub(super) pending_admin_fee_b: Amount,
    pub(super) accumulated_fees_a: Amount,
    pub(super) accumulated_fees_b: Amount,
    pub(super) positions: BTreeMap<Identity, LiquidityPosition>,
    pub(super) ratio_tolerance: BasisPoints,
    pub(super) withdrawal_lock_secs: u64,
    pub(super) sequence: u64,
}

impl PoolState {
    /// Registry key of this pool.
    #[must_use]
    pub const fn id(&self) -> PoolId {
        self.id
    }

    /// Current reserve of token A.
    #[must_use]
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Current reserve of token B.
    #[must_use]
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Reserve backing `side`.
    #[must_use]
    pub const fn reserve(&self, side: TokenSide) -> Amount {
        match side {
            TokenSide::A => self.reserve_a,
            TokenSide::B => self.reserve_b,
        }
    }

    /// Pool admin.
    #[must_use]
    pub const fn admin(&self) -> Identity {
        self.admin
    }

    /// Account entitled to the admin share of fees.
    #[must_use]
    pub const fn admin_fee_account(&self) -> Identity {
        self.admin_fee_account
    }

    /// Fraction of each swap fee owed to the admin fee account.
    #[must_use]
    pub const fn admin_fee_share(&self) -> BasisPoints {
        self.admin_fee_share
    }

    /// Admin fees on `side` awaiting collection.
    #[must_use]
    pub const fn pending_admin_fee(&self, side: TokenSide) -> Amount {
        match side {
            TokenSide::A => self.pending_admin_fee_a,
            TokenSide::B => self.pending_admin_fee_b,
        }
    }

    /// Lifetime swap fees charged on `side`.
    #[must_use]
    pub const fn accumulated_fees(&self, side: TokenSide) -> Amount {
        match side {
            TokenSide::A => self.accumulated_fees_a,
            TokenSide::B => self.accumulated_fees_b,
        }
    }

    /// All open positions, ordered by owner.
    pub fn positions(&self) -> impl Iterator<Item = &LiquidityPosition> {
        self.positions.values()
    }

    /// Allowed deposit deviation from the reserve ratio.
    #[must_use]
    pub const fn ratio_tolerance(&self) -> BasisPoints {
        self.ratio_tolerance
    }

    /// Seconds a position stays locked after each deposit.
    #[must_use]
    pub const fn withdrawal_lock_secs(&self) -> u64 {
        self.withdrawal_lock_secs
    }

    /// Number of committed mutations.
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        self.sequence
    }

    /// `true` once every share has been withdrawn.
    #[must_use]
    pub const fn is_drained(&self) -> bool {
        self.share_supply.is_zero()
    }

    pub(super) fn next_sequence(&self) -> Result<u64> {
        self.sequence
            .checked_add(1)
            .ok_or(SwapError::ArithmeticOverflow("sequence counter"))
    }

    /// Reserves net of pending admin fees: the balances shares are
    /// priced against.
    pub(super) fn lp_reserves(&self) -> Result<(Amount, Amount)> {
        let a = self
            .reserve_a
            .safe_sub(&self.pending_admin_fee_a, "pending admin fee exceeds reserve_a")?;
        let b = self
            .reserve_b
            .safe_sub(&self.pending_admin_fee_b, "pending admin fee exceeds reserve_b")?;
        Ok((a, b))
    }

    /// Splits `(reserve_in, reserve_out)` for a swap selling `side_in`.
    pub(super) const fn directed_reserves(&self, side_in: TokenSide) -> (Amount, Amount) {
        match side_in {
            TokenSide::A => (self.reserve_a, self.reserve_b),
            TokenSide::B => (self.reserve_b, self.reserve_a),
        }
    }
}

impl FromConfig<PoolConfig> for PoolState {
    /// Creates a pool and mints the initial shares to the admin.
    ///
    /// Initial shares are `√(reserve_a × reserve_b)`, never zero for
    /// non-zero reserves.
    ///
    /// # Errors
    ///
    /// - Propagates any error from [`PoolConfig::validate`].
    /// - Returns [`SwapError::ArithmeticOverflow`] if the initial share
    ///   count does not fit `u64` (unreachable for `u64` reserves).
    fn from_config(config: &PoolConfig, created_at: i64) -> Result<Self> {
        config.validate()?;

        let token_pair = config.token_pair()?;
        let fee = config.fee()?;
        let (ra, rb) = config.ordered_reserves();

        let supply = u64::try_from(isqrt(ra.widening_mul(&rb)))
            .map_err(|_| SwapError::ArithmeticOverflow("initial share supply"))?;
        let supply = Shares::new(supply);

        let admin = config.admin();
        let mut positions = BTreeMap::new();
        positions.insert(admin, LiquidityPosition::new(admin, supply, created_at));

        Ok(Self {
            id: PoolId::new(token_pair, fee),
            token_pair,
            reserve_a: ra,
            reserve_b: rb,
            share_supply: supply,
            fee,
            admin,
            admin_fee_account: config.admin_fee_account(),
            admin_fee_share: config.admin_fee_share()?,
            pending_admin_fee_a: Amount::ZERO,
            pending_admin_fee_b: Amount::ZERO,
            accumulated_fees_a: Amount::ZERO,
            accumulated_fees_b: Amount::ZERO,
            positions,
            ratio_tolerance: config.ratio_tolerance()?,
            withdrawal_lock_secs: config.withdrawal_lock_secs(),
            sequence: 0,
        })
    }
}
