//! Raw token amount of either synthetic leg or of base collateral.

use core::fmt;

use ethnum::U256;

use crate::error::{CurveError, Result};

/// A raw token amount in the smallest unit.
///
/// Curve primitives compute amounts in 256 bits; market-level results are
/// narrowed to `u128` through [`Amount::from_u256`], which rejects
/// anything wider.
///
/// # Examples
///
/// ```
/// use ethnum::U256;
/// use split_curve::domain::Amount;
///
/// let a = Amount::from_u256(U256::new(300)).expect("fits u128");
/// assert_eq!(a.checked_sub(&Amount::new(100)), Some(Amount::new(200)));
/// assert!(Amount::from_u256(U256::MAX).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Narrows a 256-bit curve result into an `Amount`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Overflow`] if `value` exceeds `u128::MAX`.
    pub fn from_u256(value: U256) -> Result<Self> {
        let (hi, lo) = value.into_words();
        if hi != 0 {
            return Err(CurveError::Overflow("amount exceeds 128 bits"));
        }
        Ok(Self(lo))
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Widens to a [`U256`] for curve arithmetic.
    #[must_use]
    pub const fn to_u256(&self) -> U256 {
        U256::new(self.0)
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(Amount::ZERO.get(), 0);
        assert_eq!(Amount::MAX.get(), u128::MAX);
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn from_u256_narrows() {
        assert_eq!(Amount::from_u256(U256::new(42)), Ok(Amount::new(42)));
        assert_eq!(
            Amount::from_u256(U256::new(u128::MAX)),
            Ok(Amount::MAX)
        );
    }

    #[test]
    fn from_u256_rejects_wide_values() {
        let wide = U256::from_words(1, 0);
        assert!(matches!(
            Amount::from_u256(wide),
            Err(CurveError::Overflow(_))
        ));
    }

    #[test]
    fn widening_round_trips() {
        let a = Amount::new(123_456_789);
        assert_eq!(Amount::from_u256(a.to_u256()), Ok(a));
    }

    #[test]
    fn checked_arithmetic() {
        let a = Amount::new(300);
        let b = Amount::new(100);
        assert_eq!(a.checked_add(&b), Some(Amount::new(400)));
        assert_eq!(a.checked_sub(&b), Some(Amount::new(200)));
        assert_eq!(b.checked_sub(&a), None);
        assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
    }

    #[test]
    fn display() {
        assert_eq!(Amount::new(1_000).to_string(), "1000");
    }
}
