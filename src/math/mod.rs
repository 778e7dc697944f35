//! Integer arithmetic for reserve and share calculations.
//!
//! Amounts are `u64`; every product is formed in `u128` and narrowed back
//! with an explicit check. Nothing in this module wraps or saturates.

mod checked;
mod rounding;
mod sqrt;

pub use checked::CheckedArithmetic;
pub use rounding::{div_round, mul_div};
pub use sqrt::isqrt;
