//! Raw token amount with checked arithmetic.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A raw token amount in the smallest unit of its mint.
///
/// Reserves and transfer amounts are `u64`, matching SPL token balances.
/// Products of two amounts are formed in `u128` (see
/// [`widening_mul`](Self::widening_mul)) so that `reserve_in × reserve_out`
/// can never overflow.
///
/// Sums and differences return `None` when they leave `u64`; the
/// pool lifts them into errors through
/// [`CheckedArithmetic`](crate::math::CheckedArithmetic).
///
/// # Examples
///
/// ```
/// use token_swap::domain::Amount;
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(b.checked_sub(&a), Some(Amount::new(100)));
/// assert_eq!(Amount::MAX.widening_mul(&Amount::MAX), u128::from(u64::MAX) * u128::from(u64::MAX));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[must_use]
pub struct Amount(u64);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u64::MAX);

    /// Creates a new `Amount` from a raw `u64` value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying `u64` value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Narrows a `u128` back into an `Amount`.
    ///
    /// Returns `None` if the value exceeds `u64::MAX`.
    #[must_use]
    pub const fn from_u128(value: u128) -> Option<Self> {
        if value > u64::MAX as u128 {
            None
        } else {
            Some(Self(value as u64))
        }
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Full-width product in `u128`. Never overflows.
    #[must_use]
    pub const fn widening_mul(&self, other: &Self) -> u128 {
        self.0 as u128 * other.0 as u128
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_and_get() {
        assert_eq!(Amount::new(42).get(), 42);
    }

    #[test]
    fn constants() {
        assert_eq!(Amount::ZERO.get(), 0);
        assert_eq!(Amount::MAX.get(), u64::MAX);
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn is_zero() {
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::new(1).is_zero());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Amount::new(1_000_000)), "1000000");
    }

    // -- from_u128 ----------------------------------------------------------

    #[test]
    fn from_u128_in_range() {
        assert_eq!(Amount::from_u128(7), Some(Amount::new(7)));
        assert_eq!(Amount::from_u128(u128::from(u64::MAX)), Some(Amount::MAX));
    }

    #[test]
    fn from_u128_out_of_range() {
        assert_eq!(Amount::from_u128(u128::from(u64::MAX) + 1), None);
    }

    // -- checked ops --------------------------------------------------------

    #[test]
    fn add_overflow() {
        assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
        assert_eq!(
            Amount::new(1).checked_add(&Amount::new(2)),
            Some(Amount::new(3))
        );
    }

    #[test]
    fn sub_underflow() {
        assert_eq!(Amount::new(1).checked_sub(&Amount::new(2)), None);
        assert_eq!(Amount::new(5).checked_sub(&Amount::new(5)), Some(Amount::ZERO));
    }

    #[test]
    fn widening_mul_max() {
        let product = Amount::MAX.widening_mul(&Amount::MAX);
        assert_eq!(product, u128::from(u64::MAX) * u128::from(u64::MAX));
    }

    #[test]
    fn serde_is_transparent() {
        let Ok(json) = serde_json::to_string(&Amount::new(91)) else {
            panic!("serialize");
        };
        assert_eq!(json, "91");
    }
}
