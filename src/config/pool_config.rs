//! Configuration for a constant-product pool.

use serde::{Deserialize, Serialize};

use super::EngineSettings;
use crate::domain::{Amount, BasisPoints, Identity, TokenPair};
use crate::error::{Result, SwapError};

/// Blueprint for one pool, consumed by
/// [`PoolRegistry::initialize_pool`](crate::registry::PoolRegistry::initialize_pool).
///
/// Fields are stored raw so that an out-of-range fee can be expressed and
/// rejected by [`validate`](Self::validate); construction never fails.
///
/// # Derived Values
///
/// - Initial share supply: `isqrt(initial_reserve_a × initial_reserve_b)`
/// - Initial price of A in B: `initial_reserve_b / initial_reserve_a`
///
/// # Examples
///
/// ```
/// use token_swap::config::PoolConfig;
/// use token_swap::domain::Identity;
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
/// )
/// .with_withdrawal_lock_secs(0);
/// assert!(cfg.validate().is_ok());
/// assert!(cfg.clone().with_fee_bps(10_001).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    mint_a: Identity,
    mint_b: Identity,
    fee_bps: u16,
    admin: Identity,
    admin_fee_account: Identity,
    initial_reserve_a: u64,
    initial_reserve_b: u64,
    admin_fee_share_bps: u16,
    ratio_tolerance_bps: u16,
    withdrawal_lock_secs: u64,
}

impl PoolConfig {
    /// Creates a config with the default engine knobs
    /// (see [`EngineSettings::default`]).
    ///
    /// `initial_reserve_a` pairs with `mint_a` as given here. The pool
    /// orders its mints by byte value: [`TokenSide::A`](crate::domain::TokenSide::A)
    /// is whichever mint sorts lower, and its reserve becomes `reserve_a`.
    /// Passing the mints high-first therefore puts `mint_b` and
    /// `initial_reserve_b` on side A.
    ///
    /// ```
    /// use token_swap::config::PoolConfig;
    /// use token_swap::domain::{Amount, Identity};
    ///
    /// let (low, high) = (Identity::from_bytes([1u8; 32]), Identity::from_bytes([2u8; 32]));
    /// let admin = Identity::from_bytes([9u8; 32]);
    /// let cfg = PoolConfig::new(high, low, 30, admin, admin, 700, 300);
    ///
    /// let pair = cfg.token_pair().expect("distinct mints");
    /// assert_eq!(pair.first(), low);
    /// assert_eq!(cfg.ordered_reserves(), (Amount::new(300), Amount::new(700)));
    /// ```
    #[must_use]
    pub fn new(
        mint_a: Identity,
        mint_b: Identity,
        fee_bps: u16,
        admin: Identity,
        admin_fee_account: Identity,
        initial_reserve_a: u64,
        initial_reserve_b: u64,
    ) -> Self {
        EngineSettings::default().pool_config(
            mint_a,
            mint_b,
            fee_bps,
            admin,
            admin_fee_account,
            initial_reserve_a,
            initial_reserve_b,
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) const fn from_parts(
        mint_a: Identity,
        mint_b: Identity,
        fee_bps: u16,
        admin: Identity,
        admin_fee_account: Identity,
        initial_reserve_a: u64,
        initial_reserve_b: u64,
        settings: &EngineSettings,
    ) -> Self {
        Self {
            mint_a,
            mint_b,
            fee_bps,
            admin,
            admin_fee_account,
            initial_reserve_a,
            initial_reserve_b,
            admin_fee_share_bps: settings.admin_fee_share_bps,
            ratio_tolerance_bps: settings.ratio_tolerance_bps,
            withdrawal_lock_secs: settings.withdrawal_lock_secs,
        }
    }

    /// Overrides the swap fee.
    #[must_use]
    pub const fn with_fee_bps(mut self, fee_bps: u16) -> Self {
        self.fee_bps = fee_bps;
        self
    }

    /// Overrides the share of each swap fee owed to the admin fee account.
    #[must_use]
    pub const fn with_admin_fee_share_bps(mut self, bps: u16) -> Self {
        self.admin_fee_share_bps = bps;
        self
    }

    /// Overrides the deposit ratio tolerance.
    #[must_use]
    pub const fn with_ratio_tolerance_bps(mut self, bps: u16) -> Self {
        self.ratio_tolerance_bps = bps;
        self
    }

    /// Overrides the per-position withdrawal lock.
    #[must_use]
    pub const fn with_withdrawal_lock_secs(mut self, secs: u64) -> Self {
        self.withdrawal_lock_secs = secs;
        self
    }

    /// Validates everything that does not depend on the caller or on
    /// other pools.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InvalidFeeConfiguration`] if the fee, admin fee share
    ///   or ratio tolerance exceeds 10 000 bp.
    /// - [`SwapError::InvalidInitialReserves`] if either reserve is zero.
    /// - [`SwapError::InvalidTokenPair`] if both mints are the same.
    pub fn validate(&self) -> Result<()> {
        self.validate_parameters()?;
        self.token_pair()?;
        Ok(())
    }

    /// Fee knobs and reserves only; the registry checks the caller
    /// between this and the pair.
    pub(crate) fn validate_parameters(&self) -> Result<()> {
        self.fee()?;
        self.admin_fee_share()?;
        self.ratio_tolerance()?;
        if self.initial_reserve_a == 0 || self.initial_reserve_b == 0 {
            return Err(SwapError::InvalidInitialReserves);
        }
        Ok(())
    }

    /// The canonically ordered pair.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidTokenPair`] if both mints are the same.
    pub fn token_pair(&self) -> Result<TokenPair> {
        TokenPair::new(self.mint_a, self.mint_b)
    }

    /// Initial reserves ordered to match [`token_pair`](Self::token_pair).
    #[must_use]
    pub fn ordered_reserves(&self) -> (Amount, Amount) {
        let a = Amount::new(self.initial_reserve_a);
        let b = Amount::new(self.initial_reserve_b);
        if self.mint_a <= self.mint_b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// The validated swap fee.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidFeeConfiguration`] above 10 000 bp.
    pub fn fee(&self) -> Result<BasisPoints> {
        BasisPoints::new(self.fee_bps)
            .map_err(|_| SwapError::InvalidFeeConfiguration("fee must not exceed 10000 bp"))
    }

    /// The validated admin fee share.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidFeeConfiguration`] above 10 000 bp.
    pub fn admin_fee_share(&self) -> Result<BasisPoints> {
        BasisPoints::new(self.admin_fee_share_bps).map_err(|_| {
            SwapError::InvalidFeeConfiguration("admin fee share must not exceed 10000 bp")
        })
    }

    /// The validated deposit ratio tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidFeeConfiguration`] above 10 000 bp.
    pub fn ratio_tolerance(&self) -> Result<BasisPoints> {
        BasisPoints::new(self.ratio_tolerance_bps).map_err(|_| {
            SwapError::InvalidFeeConfiguration("ratio tolerance must not exceed 10000 bp")
        })
    }

    /// Raw fee in basis points.
    #[must_use]
    pub const fn fee_bps(&self) -> u16 {
        self.fee_bps
    }

    /// Pool admin.
    #[must_use]
    pub const fn admin(&self) -> Identity {
        self.admin
    }

    /// Account that receives the admin share of fees.
    #[must_use]
    pub const fn admin_fee_account(&self) -> Identity {
        self.admin_fee_account
    }

    /// Seconds between a deposit and the next allowed withdrawal.
    #[must_use]
    pub const fn withdrawal_lock_secs(&self) -> u64 {
        self.withdrawal_lock_secs
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn id(b: u8) -> Identity {
        Identity::from_bytes([b; 32])
    }

    fn base() -> PoolConfig {
        PoolConfig::new(id(1), id(2), 30, id(9), id(8), 1_000, 2_000)
    }

    #[test]
    fn valid_config() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn fee_out_of_range() {
        assert!(matches!(
            base().with_fee_bps(10_001).validate(),
            Err(SwapError::InvalidFeeConfiguration(_))
        ));
        assert!(base().with_fee_bps(10_000).validate().is_ok());
    }

    #[test]
    fn admin_fee_share_out_of_range() {
        assert!(matches!(
            base().with_admin_fee_share_bps(10_001).validate(),
            Err(SwapError::InvalidFeeConfiguration(_))
        ));
    }

    #[test]
    fn zero_reserves_rejected() {
        let cfg = PoolConfig::new(id(1), id(2), 30, id(9), id(9), 0, 5);
        assert_eq!(cfg.validate(), Err(SwapError::InvalidInitialReserves));
        let cfg = PoolConfig::new(id(1), id(2), 30, id(9), id(9), 5, 0);
        assert_eq!(cfg.validate(), Err(SwapError::InvalidInitialReserves));
    }

    #[test]
    fn same_mint_rejected() {
        let cfg = PoolConfig::new(id(1), id(1), 30, id(9), id(9), 5, 5);
        assert!(matches!(cfg.validate(), Err(SwapError::InvalidTokenPair(_))));
    }

    #[test]
    fn reserves_follow_mint_order() {
        let cfg = PoolConfig::new(id(2), id(1), 30, id(9), id(9), 700, 300);
        let Ok(pair) = cfg.token_pair() else {
            panic!("valid pair");
        };
        assert_eq!(pair.first(), id(1));
        assert_eq!(cfg.ordered_reserves(), (Amount::new(300), Amount::new(700)));
    }

    #[test]
    fn defaults_come_from_engine_settings() {
        let d = EngineSettings::default();
        let cfg = base();
        assert_eq!(cfg.withdrawal_lock_secs(), d.withdrawal_lock_secs);
        let Ok(tol) = cfg.ratio_tolerance() else {
            panic!("valid tolerance");
        };
        assert_eq!(tol.get(), d.ratio_tolerance_bps);
    }
}
