//! Core trait abstractions.
//!
//! [`SwapPool`] and [`LiquidityPool`] describe what a pool can do;
//! [`FromConfig`] builds one from its configuration. [`Clock`] and
//! [`PoolStore`] are the collaborators the registry is generic over.

mod clock;
mod from_config;
mod liquidity_pool;
mod pool_store;
mod swap_pool;

pub use clock::{Clock, ManualClock, SystemClock};
pub use from_config::FromConfig;
pub use liquidity_pool::LiquidityPool;
pub use pool_store::{InMemoryPoolStore, PoolStore};
pub use swap_pool::SwapPool;
