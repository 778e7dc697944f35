//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use token_swap::prelude::*;
//! ```

pub use crate::domain::{
    Amount, BasisPoints, DepositReceipt, Identity, LiquidityPosition, PoolId, Rounding, Shares,
    SwapOutcome, TokenPair, TokenSide, WithdrawReceipt,
};

pub use crate::traits::{
    Clock, FromConfig, InMemoryPoolStore, LiquidityPool, ManualClock, PoolStore, SwapPool,
    SystemClock,
};

pub use crate::math::CheckedArithmetic;

pub use crate::config::{EngineSettings, PoolConfig};

pub use crate::error::{Result, SwapError};

pub use crate::pool::PoolState;

pub use crate::registry::PoolRegistry;
