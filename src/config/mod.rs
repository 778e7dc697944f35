//! Pool blueprints and engine-wide defaults.
//!
//! [`PoolConfig`] describes one pool to be created; [`EngineSettings`]
//! holds the defaults for the optional pool knobs and can be loaded from
//! a TOML file.

mod pool_config;
mod settings;

pub use pool_config::PoolConfig;
pub use settings::{EngineSettings, DEFAULT_RATIO_TOLERANCE_BPS, DEFAULT_WITHDRAWAL_LOCK_SECS};
