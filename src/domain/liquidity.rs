//! Curve depth between a market's two edges.

use core::fmt;

use ethnum::U256;

use crate::error::{CurveError, Result};

/// Liquidity of the curve between `edge_low` and `edge_high`.
///
/// Distinct from [`Amount`](super::Amount): it measures depth of the
/// virtual-reserve curve, not a quantity of either leg. Liquidity grows on
/// mint, shrinks on redeem, and is never created by rounding.
///
/// # Examples
///
/// ```
/// use split_curve::domain::Liquidity;
///
/// let a = Liquidity::new(1_000);
/// let b = Liquidity::new(2_000);
/// assert_eq!(a.checked_add(&b), Some(Liquidity::new(3_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Liquidity(u128);

impl Liquidity {
    /// No liquidity.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Liquidity` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Narrows a 256-bit intermediate into a `Liquidity`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Overflow`] if `value` exceeds `u128::MAX`.
    pub fn from_u256(value: U256) -> Result<Self> {
        let (hi, lo) = value.into_words();
        if hi != 0 {
            return Err(CurveError::Overflow("liquidity exceeds 128 bits"));
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

    /// Returns `true` if the liquidity is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns `self` if non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidLiquidity`] when zero.
    pub const fn non_zero(self) -> Result<Self> {
        if self.0 == 0 {
            return Err(CurveError::InvalidLiquidity("liquidity must be non-zero"));
        }
        Ok(self)
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

impl fmt::Display for Liquidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
