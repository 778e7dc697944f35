//! Explicit rounding direction for integer division.

use serde::{Deserialize, Serialize};

/// Rounding direction for every division in the engine.
///
/// The pool always rounds in its own favour: amounts paid out round
/// [`Down`](Self::Down), amounts taken in round [`Up`](Self::Up).
///
/// ```
/// use token_swap::domain::Rounding;
/// use token_swap::math::mul_div;
///
/// // 7 shares of a 3-share supply over 10 units of reserve
/// assert_eq!(mul_div(7, 10, 3, Rounding::Down).ok(), Some(23));
/// assert_eq!(mul_div(7, 10, 3, Rounding::Up).ok(), Some(24));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rounding {
    /// Ceiling; used for amounts the pool takes in.
    Up,
    /// Floor; used for amounts the pool pays out.
    Down,
}
