//! Results of liquidity deposits and withdrawals.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Shares};

/// Result of a deposit: the amounts actually taken and the shares minted.
///
/// `consumed_a ≤ offered_a` and `consumed_b ≤ offered_b`; only the
/// ratio-matching portion of the offer enters the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DepositReceipt {
    /// Shares minted to the depositor.
    pub shares_issued: Shares,
    /// Token A moved into the reserves.
    pub consumed_a: Amount,
    /// Token B moved into the reserves.
    pub consumed_b: Amount,
    /// Pool mutation counter after the deposit.
    pub sequence: u64,
}

impl fmt::Display for DepositReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Deposit(shares={}, a={}, b={})",
            self.shares_issued, self.consumed_a, self.consumed_b
        )
    }
}

/// Result of a withdrawal: the shares burned and the amounts released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WithdrawReceipt {
    /// Shares burned from the owner's position.
    pub shares_burned: Shares,
    /// Token A released from the reserves.
    pub amount_a: Amount,
    /// Token B released from the reserves.
    pub amount_b: Amount,
    /// Pool mutation counter after the withdrawal.
    pub sequence: u64,
}

impl fmt::Display for WithdrawReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Withdraw(shares={}, a={}, b={})",
            self.shares_burned, self.amount_a, self.amount_b
        )
    }
}
