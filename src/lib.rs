//! # Token Swap
//!
//! Constant-product liquidity pools: initialize a pool over two mints,
//! swap one side for the other, and deposit or withdraw liquidity against
//! fungible shares.
//!
//! All amounts are `u64` token units; every product or quotient is formed
//! in `u128` and every overflow is an error, never a wrap. Rounding always
//! favours the pool.
//!
//! ## Initialize a pool and swap
//!
//! ```rust
//! use token_swap::prelude::*;
//!
//! let registry = PoolRegistry::in_memory(EngineSettings::default());
//!
//! // 1. Two mints and an admin
//! let usdc = Identity::from_bytes([1u8; 32]);
//! let wsol = Identity::from_bytes([2u8; 32]);
//! let admin = Identity::from_bytes([9u8; 32]);
//!
//! // 2. A 1% pool seeded with 1 000 of each
//! let cfg = registry.settings().pool_config(usdc, wsol, 100, admin, admin, 1_000, 1_000);
//! let id = registry.initialize_pool(admin, &cfg).expect("pool created");
//!
//! // 3. Sell 100 of the first mint, accepting no less than 90 back
//! let out = registry
//!     .swap(&id, TokenSide::A, Amount::new(100), Amount::new(90))
//!     .expect("swap succeeded");
//! assert_eq!(out.amount_out(), Amount::new(91));
//!
//! // 4. Reserves moved by the full input and the output
//! let pool = registry.snapshot(&id).expect("pool exists");
//! assert_eq!(pool.reserve_a(), Amount::new(1_100));
//! assert_eq!(pool.reserve_b(), Amount::new(909));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer   │  PoolConfig + identities
//! └──────┬───────┘
//!        │ initialize_pool / swap / deposit / withdraw
//!        ▼
//! ┌──────────────┐
//! │   Registry   │  per-pool Mutex, Clock, PoolStore, tracing
//! └──────┬───────┘
//!        │ SwapPool + LiquidityPool traits
//!        ▼
//! ┌──────────────┐
//! │  PoolState   │  x · y = k pricing, share accounting
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │    Domain    │  Amount, Shares, BasisPoints, Identity, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`Identity`](domain::Identity), etc. |
//! | [`traits`] | [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`FromConfig`](traits::FromConfig), and the [`Clock`](traits::Clock) / [`PoolStore`](traits::PoolStore) collaborators |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) blueprints and TOML-backed [`EngineSettings`](config::EngineSettings) |
//! | [`pool`] | [`PoolState`](pool::PoolState), the constant-product pool |
//! | [`registry`] | [`PoolRegistry`](registry::PoolRegistry), the thread-safe boundary API |
//! | [`math`] | Checked arithmetic, rounding division, integer square root |
//! | [`error`] | [`SwapError`](error::SwapError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber.

pub mod config;
pub mod domain;
pub mod error;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod registry;
pub mod traits;
