//! Checked arithmetic trait for domain wrapper types.
//!
//! [`CheckedArithmetic`] turns the `Option`-returning checked operations of
//! [`Amount`] and [`Shares`] into `Result`s carrying
//! [`SwapError::ArithmeticOverflow`] with a caller-supplied context, so pool
//! code can use `?` throughout.
//!
//! # Examples
//!
//! ```
//! use token_swap::domain::Amount;
//! use token_swap::math::CheckedArithmetic;
//!
//! let sum = Amount::new(100).safe_add(&Amount::new(200), "reserve");
//! assert_eq!(sum, Ok(Amount::new(300)));
//! assert!(Amount::MAX.safe_add(&Amount::new(1), "reserve").is_err());
//! ```

use crate::domain::{Amount, Shares};
use crate::error::{Result, SwapError};

/// Fallible arithmetic for domain wrapper types.
///
/// # Contract
///
/// - **No panics** — all error conditions produce `Err`.
/// - **No saturation or wrapping** — financial state must never be
///   silently corrupted; errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::ArithmeticOverflow`] tagged with `context`.
    fn safe_add(&self, other: &Self, context: &'static str) -> Result<Self>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::ArithmeticOverflow`] tagged with `context`.
    fn safe_sub(&self, other: &Self, context: &'static str) -> Result<Self>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self, context: &'static str) -> Result<Self> {
        self.checked_add(other)
            .ok_or(SwapError::ArithmeticOverflow(context))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, context: &'static str) -> Result<Self> {
        self.checked_sub(other)
            .ok_or(SwapError::ArithmeticOverflow(context))
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self, context: &'static str) -> Result<Self> {
        self.checked_add(other)
            .ok_or(SwapError::ArithmeticOverflow(context))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, context: &'static str) -> Result<Self> {
        self.checked_sub(other)
            .ok_or(SwapError::ArithmeticOverflow(context))
    }
}
