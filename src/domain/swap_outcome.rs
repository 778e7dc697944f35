//! Outcome of a swap.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, TokenSide};

/// What a committed (or quoted) swap moved through the pool.
///
/// `fee` is the part of `amount_in` that did not take part in pricing;
/// `admin_fee` is the share of `fee` owed to the pool's admin fee account.
/// `sequence` is the pool's mutation counter after the swap committed
/// (unchanged for quotes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapOutcome {
    side_in: TokenSide,
    amount_in: Amount,
    amount_out: Amount,
    fee: Amount,
    admin_fee: Amount,
    sequence: u64,
}

impl SwapOutcome {
    pub(crate) const fn new(
        side_in: TokenSide,
        amount_in: Amount,
        amount_out: Amount,
        fee: Amount,
        admin_fee: Amount,
        sequence: u64,
    ) -> Self {
        Self {
            side_in,
            amount_in,
            amount_out,
            fee,
            admin_fee,
            sequence,
        }
    }

    /// The side that received the input.
    #[must_use]
    pub const fn side_in(&self) -> TokenSide {
        self.side_in
    }

    /// The side that paid the output.
    #[must_use]
    pub const fn side_out(&self) -> TokenSide {
        self.side_in.opposite()
    }

    /// Gross input, fee included.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Output paid to the trader.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Total fee retained by the pool.
    pub const fn fee(&self) -> Amount {
        self.fee
    }

    /// Portion of the fee owed to the admin fee account.
    pub const fn admin_fee(&self) -> Amount {
        self.admin_fee
    }

    /// Pool mutation counter after this swap.
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        self.sequence
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Swap({}->{}: in={}, out={}, fee={})",
            self.side_in,
            self.side_out(),
            self.amount_in,
            self.amount_out,
            self.fee
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let o = SwapOutcome::new(
            TokenSide::A,
            Amount::new(100),
            Amount::new(91),
            Amount::new(1),
            Amount::ZERO,
            1,
        );
        assert_eq!(o.to_string(), "Swap(A->B: in=100, out=91, fee=1)");
        assert_eq!(o.side_out(), TokenSide::B);
    }
}
