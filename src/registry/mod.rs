//! The boundary API: a registry that owns every pool.
//!
//! [`PoolRegistry`] creates pools from [`PoolConfig`](crate::config::PoolConfig)
//! values, keys them by [`PoolId`](crate::domain::PoolId), and runs every
//! operation under the target pool's lock with the current time from its
//! [`Clock`](crate::traits::Clock). Committed states are handed to its
//! [`PoolStore`](crate::traits::PoolStore) before they become visible.
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use token_swap::config::EngineSettings;
//! use token_swap::domain::{Amount, Identity, Shares};
//! use token_swap::registry::PoolRegistry;
//! use token_swap::traits::{InMemoryPoolStore, ManualClock};
//!
//! let clock = Arc::new(ManualClock::new(0));
//! let registry = PoolRegistry::new(
//!     EngineSettings::default(),
//!     clock.clone(),
//!     Arc::new(InMemoryPoolStore::new()),
//! );
//! let admin = Identity::from_bytes([9u8; 32]);
//! let lp = Identity::from_bytes([5u8; 32]);
//! let cfg = registry.settings().pool_config(
//!     Identity::from_bytes([1u8; 32]),
//!     Identity::from_bytes([2u8; 32]),
//!     30,
//!     admin,
//!     admin,
//!     1_000_000,
//!     1_000_000,
//! );
//! let id = registry.initialize_pool(admin, &cfg).expect("created");
//!
//! let receipt = registry
//!     .deposit(&id, lp, Amount::new(10_000), Amount::new(10_000))
//!     .expect("deposited");
//! assert_eq!(receipt.shares_issued, Shares::new(10_000));
//!
//! // positions stay locked for five minutes after a deposit
//! assert!(registry.withdraw(&id, lp, receipt.shares_issued).is_err());
//! clock.advance(300);
//! assert!(registry.withdraw(&id, lp, receipt.shares_issued).is_ok());
//! ```

mod pool_registry;

pub use pool_registry::PoolRegistry;
