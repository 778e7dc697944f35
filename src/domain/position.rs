//! A depositor's liquidity position.

use serde::{Deserialize, Serialize};

use super::{Identity, Shares};

/// Shares held by one owner in one pool.
///
/// A position exists only while `shares > 0`; the pool removes it when
/// the last share is withdrawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LiquidityPosition {
    owner: Identity,
    shares: Shares,
    last_deposit_at: i64,
}

impl LiquidityPosition {
    /// Opens a position with its first shares.
    pub const fn new(owner: Identity, shares: Shares, deposited_at: i64) -> Self {
        Self {
            owner,
            shares,
            last_deposit_at: deposited_at,
        }
    }

    /// The depositor.
    #[must_use]
    pub const fn owner(&self) -> Identity {
        self.owner
    }

    /// Shares currently held.
    #[must_use]
    pub const fn shares(&self) -> Shares {
        self.shares
    }

    /// Unix timestamp (seconds) of the most recent deposit.
    #[must_use]
    pub const fn last_deposit_at(&self) -> i64 {
        self.last_deposit_at
    }

    /// Earliest unix timestamp at which a withdrawal is allowed.
    #[must_use]
    pub const fn unlocks_at(&self, lock_secs: u64) -> i64 {
        let lock = if lock_secs > i64::MAX as u64 {
            i64::MAX
        } else {
            lock_secs as i64
        };
        self.last_deposit_at.saturating_add(lock)
    }

    pub(crate) fn with_shares(self, shares: Shares) -> Self {
        Self { shares, ..self }
    }

    pub(crate) fn with_deposit(self, shares: Shares, at: i64) -> Self {
        Self {
            shares,
            last_deposit_at: at,
            ..self
        }
    }
}
