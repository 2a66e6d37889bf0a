//! The two synthetic claims a market splits its collateral into.

use core::fmt;

/// One side of the collateral split.
///
/// On the curve, [`Leg::Debt`] is the price-denominator leg (leg 0) and
/// [`Leg::Leverage`] the price-numerator leg (leg 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Leg {
    /// Senior claim on collateral, growing as the price rises.
    Debt = 0,
    /// Residual claim above outstanding debt, vanishing at `edge_high`.
    Leverage = 1,
}

impl Leg {
    /// Returns the complementary leg.
    #[must_use]
    pub const fn other(&self) -> Self {
        match self {
            Self::Debt => Self::Leverage,
            Self::Leverage => Self::Debt,
        }
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debt => write!(f, "Debt"),
            Self::Leverage => write!(f, "Leverage"),
        }
    }
}
