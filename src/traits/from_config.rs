//! Construction of a pool from its configuration.
//!
//! # Validation Contract
//!
//! Implementations **must** validate every configuration invariant during
//! construction. A successfully constructed pool is in a valid initial
//! state:
//!
//! - the pair has two distinct mints
//! - every basis-point knob is within 0–10 000
//! - both initial reserves are non-zero
//!
//! Authorization and registry uniqueness are not the config's concern;
//! [`PoolRegistry`](crate::registry::PoolRegistry) checks those.

use crate::error::Result;

/// Builds a pool from a configuration.
///
/// `created_at` (unix seconds) stamps the initial position minted to the
/// admin, so it is subject to the same withdrawal lock as any deposit.
///
/// # Errors
///
/// Returns the specific [`SwapError`](crate::error::SwapError) variant for
/// the first invalid parameter found.
pub trait FromConfig<C> {
    /// Creates a validated pool instance.
    ///
    /// # Errors
    ///
    /// See the trait-level documentation.
    fn from_config(config: &C, created_at: i64) -> Result<Self>
    where
        Self: Sized;
}
