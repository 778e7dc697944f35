//! Basis-point representation for fees and tolerances.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};
use crate::error::{Result, SwapError};
use crate::math::div_round;

/// Denominator for basis-point math (10 000 bp = 100%).
pub const BPS_DENOMINATOR: u64 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// Construction through [`BasisPoints::new`] rejects values above 10 000.
/// Use [`BasisPoints::new_unchecked`] only for compile-time constants.
///
/// # Examples
///
/// ```
/// use token_swap::domain::{Amount, BasisPoints, Rounding};
///
/// let fee = BasisPoints::new(100).expect("1%");
/// assert_eq!(fee.complement().get(), 9_900);
/// assert_eq!(fee.apply(Amount::new(100), Rounding::Down).expect("fits"), Amount::new(1));
/// assert!(BasisPoints::new(10_001).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u16", into = "u16")]
pub struct BasisPoints(u16);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX: Self = Self(BPS_DENOMINATOR as u16);

    /// Creates a validated `BasisPoints`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidFeeConfiguration`] if `value > 10_000`.
    pub const fn new(value: u16) -> Result<Self> {
        if value as u64 > BPS_DENOMINATOR {
            return Err(SwapError::InvalidFeeConfiguration(
                "basis points must not exceed 10000",
            ));
        }
        Ok(Self(value))
    }

    /// Creates a `BasisPoints` without range validation.
    ///
    /// Values above 10 000 make [`complement`](Self::complement) saturate
    /// at zero; prefer [`new`](Self::new).
    pub const fn new_unchecked(value: u16) -> Self {
        Self(value)
    }

    /// Returns the underlying `u16` value.
    #[must_use]
    pub const fn get(&self) -> u16 {
        self.0
    }

    /// Returns `10_000 − self`.
    #[must_use]
    pub const fn complement(&self) -> Self {
        Self((BPS_DENOMINATOR as u16).saturating_sub(self.0))
    }

    /// Converts to a floating-point percentage; 30 bp → 0.30.
    #[must_use]
    pub fn as_percent(&self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Computes `amount × self / 10_000` with explicit rounding.
    ///
    /// The product is formed in `u128`, so this cannot overflow for valid
    /// basis points.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::ArithmeticOverflow`] if the result does not fit
    /// an [`Amount`] (only possible for unchecked values above 100%).
    pub const fn apply(&self, amount: Amount, rounding: Rounding) -> Result<Amount> {
        let product = amount.get() as u128 * self.0 as u128;
        let Some(q) = div_round(product, BPS_DENOMINATOR as u128, rounding) else {
            return Err(SwapError::ArithmeticOverflow("basis points denominator"));
        };
        match Amount::from_u128(q) {
            Some(a) => Ok(a),
            None => Err(SwapError::ArithmeticOverflow("basis points apply overflow")),
        }
    }
}

impl TryFrom<u16> for BasisPoints {
    type Error = SwapError;

    fn try_from(value: u16) -> Result<Self> {
        Self::new(value)
    }
}

impl From<BasisPoints> for u16 {
    fn from(value: BasisPoints) -> Self {
        value.0
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn bp(v: u16) -> BasisPoints {
        let Ok(b) = BasisPoints::new(v) else {
            panic!("valid basis points");
        };
        b
    }

    #[test]
    fn range_validation() {
        assert!(BasisPoints::new(0).is_ok());
        assert!(BasisPoints::new(10_000).is_ok());
        assert!(matches!(
            BasisPoints::new(10_001),
            Err(SwapError::InvalidFeeConfiguration(_))
        ));
    }

    #[test]
    fn complement() {
        assert_eq!(bp(100).complement(), bp(9_900));
        assert_eq!(BasisPoints::MAX.complement(), BasisPoints::ZERO);
        assert_eq!(BasisPoints::new_unchecked(u16::MAX).complement(), BasisPoints::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", bp(30)), "30bp");
    }

    #[test]
    fn as_percent() {
        assert!((bp(30).as_percent() - 0.30).abs() < f64::EPSILON);
    }

    #[test]
    fn apply_round_down() {
        let Ok(r) = bp(30).apply(Amount::new(1_000_000), Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(r, Amount::new(3_000));
    }

    #[test]
    fn apply_truncates_fraction() {
        // 99.00 of 100 at 9900bp; 9900bp of 101 = 99.99 → 99
        let Ok(r) = bp(9_900).apply(Amount::new(101), Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(r, Amount::new(99));
    }

    #[test]
    fn apply_round_up_remainder() {
        let Ok(r) = bp(30).apply(Amount::new(1), Rounding::Up) else {
            panic!("expected Ok");
        };
        assert_eq!(r, Amount::new(1));
    }

    #[test]
    fn apply_full_amount_at_max() {
        let Ok(r) = BasisPoints::MAX.apply(Amount::MAX, Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(r, Amount::MAX);
    }

    #[test]
    fn apply_unchecked_overflow() {
        let r = BasisPoints::new_unchecked(20_000).apply(Amount::MAX, Rounding::Down);
        assert!(matches!(r, Err(SwapError::ArithmeticOverflow(_))));
    }

    #[test]
    fn serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<BasisPoints>("10001").is_err());
        let Ok(b) = serde_json::from_str::<BasisPoints>("25") else {
            panic!("deserialize");
        };
        assert_eq!(b, bp(25));
    }
}
