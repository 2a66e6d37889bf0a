//! Derived debt/leverage position.

use core::fmt;

use super::{Amount, Leg};

/// Debt and leverage amounts represented by some liquidity at some price.
///
/// A `Position` is never stored by the engine: it is always recomputed
/// from `(liquidity, sqrt_price, band)`.
///
/// # Examples
///
/// ```
/// use split_curve::domain::{Amount, Leg, Position};
///
/// let pos = Position::new(Amount::new(90), Amount::new(10));
/// assert_eq!(pos.amount(Leg::Debt), Amount::new(90));
/// assert!(!pos.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    debt: Amount,
    leverage: Amount,
}

impl Position {
    /// Both legs zero.
    pub const EMPTY: Self = Self {
        debt: Amount::ZERO,
        leverage: Amount::ZERO,
    };

    /// Creates a position from its two legs.
    pub const fn new(debt: Amount, leverage: Amount) -> Self {
        Self { debt, leverage }
    }

    /// Returns the debt-leg amount.
    pub const fn debt(&self) -> Amount {
        self.debt
    }

    /// Returns the leverage-leg amount.
    pub const fn leverage(&self) -> Amount {
        self.leverage
    }

    /// Returns the amount of the requested leg.
    pub const fn amount(&self, leg: Leg) -> Amount {
        match leg {
            Leg::Debt => self.debt,
            Leg::Leverage => self.leverage,
        }
    }

    /// Returns `true` if both legs are zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.debt.is_zero() && self.leverage.is_zero()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(debt={}, leverage={})", self.debt, self.leverage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let p = Position::new(Amount::new(3), Amount::new(4));
        assert_eq!(p.debt(), Amount::new(3));
        assert_eq!(p.leverage(), Amount::new(4));
        assert_eq!(p.amount(Leg::Leverage), Amount::new(4));
    }

    #[test]
    fn empty() {
        assert!(Position::EMPTY.is_empty());
        assert_eq!(Position::default(), Position::EMPTY);
        assert!(!Position::new(Amount::ZERO, Amount::new(1)).is_empty());
    }

    #[test]
    fn display() {
        let p = Position::new(Amount::new(3), Amount::new(4));
        assert_eq!(p.to_string(), "Position(debt=3, leverage=4)");
    }
}
