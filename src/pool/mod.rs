//! The constant-product pool.
//!
//! [`PoolState`] holds one pool's reserves, shares and fee settings and
//! implements [`SwapPool`](crate::traits::SwapPool) and
//! [`LiquidityPool`](crate::traits::LiquidityPool). It is plain data with
//! no locking; [`PoolRegistry`](crate::registry::PoolRegistry) provides
//! the per-pool mutual exclusion.

mod admin;
mod liquidity;
mod state;
mod swap;

#[cfg(test)]
mod proptest_properties;

pub use state::PoolState;
