//! Registry key for a pool.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{BasisPoints, TokenPair};

/// Identifies a pool by its pair and the fee it was created with.
///
/// At most one pool exists per `PoolId`. The fee component is fixed at
/// creation; a later fee update does not change the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolId {
    pair: TokenPair,
    fee: BasisPoints,
}

impl PoolId {
    /// Creates an id from its parts.
    #[must_use]
    pub const fn new(pair: TokenPair, fee: BasisPoints) -> Self {
        Self { pair, fee }
    }

    /// The pool's pair.
    #[must_use]
    pub const fn pair(&self) -> TokenPair {
        self.pair
    }

    /// The fee the pool was created with.
    #[must_use]
    pub const fn fee(&self) -> BasisPoints {
        self.fee
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.pair, self.fee)
    }
}
