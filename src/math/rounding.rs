//! Widened multiply-divide with explicit rounding.
//!
//! [`div_round`] is the low-level `u128` division used by every domain type;
//! [`mul_div`] forms `a × b` in `u128` and divides back down to `u64`, which
//! is the shape of every pricing and share formula in the engine.
//!
//! # Convention
//!
//! **Always round against the user** (pool-favourable):
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Swap output, withdrawn amounts, minted shares | [`Rounding::Down`] |
//! | Amounts consumed from a depositor | [`Rounding::Up`] |
//!
//! # Examples
//!
//! ```
//! use token_swap::domain::Rounding;
//! use token_swap::math::{div_round, mul_div};
//!
//! assert_eq!(div_round(10, 3, Rounding::Up), Some(4));
//! assert_eq!(mul_div(u64::MAX, 2, 4, Rounding::Down).expect("fits"), u64::MAX / 2);
//! assert!(mul_div(u64::MAX, 2, 1, Rounding::Down).is_err());
//! ```

use crate::domain::Rounding;
use crate::error::{Result, SwapError};

/// Integer division of `u128` values with explicit rounding direction.
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let q = numerator / denominator;
    match rounding {
        Rounding::Down => Some(q),
        // q + 1 cannot overflow: a non-zero remainder implies q < u128::MAX
        Rounding::Up if numerator % denominator != 0 => Some(q + 1),
        Rounding::Up => Some(q),
    }
}

/// Computes `a × b / denominator` with a `u128` intermediate.
///
/// # Errors
///
/// - [`SwapError::ArithmeticOverflow`] if `denominator` is zero or the
///   quotient does not fit in `u64`.
pub const fn mul_div(a: u64, b: u64, denominator: u64, rounding: Rounding) -> Result<u64> {
    let product = a as u128 * b as u128;
    let Some(q) = div_round(product, denominator as u128, rounding) else {
        return Err(SwapError::ArithmeticOverflow("mul_div by zero"));
    };
    if q > u64::MAX as u128 {
        return Err(SwapError::ArithmeticOverflow("mul_div result exceeds u64"));
    }
    Ok(q as u64)
}
