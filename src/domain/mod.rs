//! Fundamental domain value types used throughout the swap engine.
//!
//! Amounts, shares, fees and identities are distinct newtypes so that a
//! share count can never be passed where a token balance is expected.

mod amount;
mod basis_points;
mod identity;
mod pool_id;
mod position;
mod receipts;
mod rounding;
mod shares;
mod swap_outcome;
mod token_pair;

pub use amount::Amount;
pub use basis_points::{BasisPoints, BPS_DENOMINATOR};
pub use identity::Identity;
pub use pool_id::PoolId;
pub use position::LiquidityPosition;
pub use receipts::{DepositReceipt, WithdrawReceipt};
pub use rounding::Rounding;
pub use shares::Shares;
pub use swap_outcome::SwapOutcome;
pub use token_pair::{TokenPair, TokenSide};
