//! Results of redeem and swap computations.

use core::fmt;

use super::{Amount, Liquidity, SqrtPrice};

/// Outcome of a redemption: liquidity released and the price the
/// remaining position implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RedeemOutcome {
    liquidity_out: Liquidity,
    next_sqrt_price: SqrtPrice,
}

impl RedeemOutcome {
    /// Creates a new `RedeemOutcome`.
    pub const fn new(liquidity_out: Liquidity, next_sqrt_price: SqrtPrice) -> Self {
        Self {
            liquidity_out,
            next_sqrt_price,
        }
    }

    /// Liquidity removed from the curve, to be paid out as collateral.
    #[must_use]
    pub const fn liquidity_out(&self) -> Liquidity {
        self.liquidity_out
    }

    /// Sqrt-price implied by the position left behind.
    #[must_use]
    pub const fn next_sqrt_price(&self) -> SqrtPrice {
        self.next_sqrt_price
    }
}

impl fmt::Display for RedeemOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RedeemOutcome(liquidity_out={}, next_sqrt_price={})",
            self.liquidity_out, self.next_sqrt_price
        )
    }
}

/// Outcome of a swap computation.
///
/// `amount_calculated` is the output for an exact-in swap and the
/// required input for an exact-out swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapOutcome {
    amount_calculated: Amount,
    next_sqrt_price: SqrtPrice,
}

impl SwapOutcome {
    /// Creates a new `SwapOutcome`.
    pub const fn new(amount_calculated: Amount, next_sqrt_price: SqrtPrice) -> Self {
        Self {
            amount_calculated,
            next_sqrt_price,
        }
    }

    /// The solved side of the swap.
    pub const fn amount_calculated(&self) -> Amount {
        self.amount_calculated
    }

    /// Sqrt-price after the swap.
    #[must_use]
    pub const fn next_sqrt_price(&self) -> SqrtPrice {
        self.next_sqrt_price
    }
}

impl fmt::Display for SwapOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapOutcome(amount={}, next_sqrt_price={})",
            self.amount_calculated, self.next_sqrt_price
        )
    }
}
