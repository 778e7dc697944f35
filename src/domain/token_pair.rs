//! Ordered pair of distinct mints and the side selector.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Identity;
use crate::error::{Result, SwapError};

/// One side of a pool: the reserve of the first or second mint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenSide {
    /// The lower-ordered mint, backing `reserve_a`.
    A,
    /// The higher-ordered mint, backing `reserve_b`.
    B,
}

impl TokenSide {
    /// Returns the opposite side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl fmt::Display for TokenSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::B => f.write_str("B"),
        }
    }
}

/// An ordered pair of distinct mints, canonically sorted by identity.
///
/// Sorting guarantees `(X, Y)` and `(Y, X)` describe the same pool, which
/// is what lets the registry enforce one pool per pair and fee.
///
/// # Examples
///
/// ```
/// use token_swap::domain::{Identity, TokenPair, TokenSide};
///
/// let usdc = Identity::from_bytes([1u8; 32]);
/// let wsol = Identity::from_bytes([2u8; 32]);
///
/// let pair = TokenPair::new(wsol, usdc).expect("distinct mints");
/// assert_eq!(pair.first(), usdc);
/// assert_eq!(pair.side_of(&wsol).expect("member"), TokenSide::B);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenPair {
    mint_a: Identity,
    mint_b: Identity,
}

impl TokenPair {
    /// Creates a canonically-ordered pair.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidTokenPair`] if both mints are the same.
    pub fn new(mint1: Identity, mint2: Identity) -> Result<Self> {
        if mint1 == mint2 {
            return Err(SwapError::InvalidTokenPair(
                "token pair requires two distinct mints",
            ));
        }
        let (mint_a, mint_b) = if mint1 < mint2 {
            (mint1, mint2)
        } else {
            (mint2, mint1)
        };
        Ok(Self { mint_a, mint_b })
    }

    /// Returns the first mint (lower identity).
    #[must_use]
    pub const fn first(&self) -> Identity {
        self.mint_a
    }

    /// Returns the second mint (higher identity).
    #[must_use]
    pub const fn second(&self) -> Identity {
        self.mint_b
    }

    /// Returns the mint on `side`.
    #[must_use]
    pub const fn mint(&self, side: TokenSide) -> Identity {
        match side {
            TokenSide::A => self.mint_a,
            TokenSide::B => self.mint_b,
        }
    }

    /// Returns `true` if `mint` belongs to this pair.
    #[must_use]
    pub fn contains(&self, mint: &Identity) -> bool {
        self.mint_a == *mint || self.mint_b == *mint
    }

    /// Resolves which side `mint` sits on.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidTokenPair`] if `mint` is not in the pair.
    pub fn side_of(&self, mint: &Identity) -> Result<TokenSide> {
        if *mint == self.mint_a {
            Ok(TokenSide::A)
        } else if *mint == self.mint_b {
            Ok(TokenSide::B)
        } else {
            Err(SwapError::InvalidTokenPair("mint is not part of this pair"))
        }
    }
}

impl fmt::Display for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.mint_a.short(), self.mint_b.short())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn mint(b: u8) -> Identity {
        Identity::from_bytes([b; 32])
    }

    #[test]
    fn canonical_order() {
        let Ok(p1) = TokenPair::new(mint(2), mint(1)) else {
            panic!("valid pair");
        };
        let Ok(p2) = TokenPair::new(mint(1), mint(2)) else {
            panic!("valid pair");
        };
        assert_eq!(p1, p2);
        assert_eq!(p1.first(), mint(1));
        assert_eq!(p1.second(), mint(2));
    }

    #[test]
    fn same_mint_rejected() {
        assert!(matches!(
            TokenPair::new(mint(3), mint(3)),
            Err(SwapError::InvalidTokenPair(_))
        ));
    }

    #[test]
    fn side_lookup() {
        let Ok(pair) = TokenPair::new(mint(1), mint(2)) else {
            panic!("valid pair");
        };
        assert_eq!(pair.side_of(&mint(1)), Ok(TokenSide::A));
        assert_eq!(pair.side_of(&mint(2)), Ok(TokenSide::B));
        assert!(pair.side_of(&mint(9)).is_err());
        assert_eq!(pair.mint(TokenSide::B), mint(2));
        assert!(pair.contains(&mint(1)));
        assert!(!pair.contains(&mint(9)));
    }

    #[test]
    fn opposite_side() {
        assert_eq!(TokenSide::A.opposite(), TokenSide::B);
        assert_eq!(TokenSide::B.opposite(), TokenSide::A);
    }
}
