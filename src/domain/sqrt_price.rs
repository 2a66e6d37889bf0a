//! Q96 square-root price.

use core::fmt;

use ethnum::U256;

use super::Rounding;
use crate::error::{CurveError, Result};
use crate::math::{mul_div, MAX_SQRT_PRICE, Q96};

/// `√price · 2^96` stored in a [`U256`].
///
/// # Invariants
///
/// `0 < value ≤ MAX_SQRT_PRICE` (`2^160 - 1`). Every constructor
/// enforces this, so functions taking a `SqrtPrice` never see a zero
/// price.
///
/// # Examples
///
/// ```
/// use split_curve::domain::SqrtPrice;
///
/// let par = SqrtPrice::PAR;
/// let up_ten_percent = SqrtPrice::from_q96_ratio(11, 10).expect("valid ratio");
/// assert!(up_ten_percent > par);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SqrtPrice(U256);

impl SqrtPrice {
    /// Sqrt-price of exactly `1.0` (price par).
    pub const PAR: Self = Self(Q96);

    /// Smallest representable sqrt-price.
    pub const MIN: Self = Self(U256::ONE);

    /// Largest representable sqrt-price.
    pub const MAX: Self = Self(MAX_SQRT_PRICE);

    /// Creates a `SqrtPrice` from a raw Q96 value.
    ///
    /// # Errors
    ///
    /// - [`CurveError::InvalidPrice`] if `value` is zero.
    /// - [`CurveError::Overflow`] if `value` exceeds the 160-bit price width.
    pub fn new(value: U256) -> Result<Self> {
        if value == U256::ZERO {
            return Err(CurveError::InvalidPrice("sqrt price must be non-zero"));
        }
        if value > MAX_SQRT_PRICE {
            return Err(CurveError::Overflow("sqrt price exceeds 160 bits"));
        }
        Ok(Self(value))
    }

    /// Creates the sqrt-price `numerator / denominator` (already in sqrt
    /// space), i.e. `floor(2^96 · numerator / denominator)`.
    ///
    /// # Errors
    ///
    /// - [`CurveError::DivisionByZero`] if `denominator` is zero.
    /// - [`CurveError::InvalidPrice`] if the result rounds to zero.
    /// - [`CurveError::Overflow`] if the result exceeds the price width.
    pub fn from_q96_ratio(numerator: u128, denominator: u128) -> Result<Self> {
        let raw = mul_div(
            Q96,
            U256::new(numerator),
            U256::new(denominator),
            Rounding::Down,
        )?;
        Self::new(raw)
    }

    /// Returns the underlying Q96 value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns `true` if this is exactly [`SqrtPrice::PAR`].
    #[must_use]
    pub fn is_par(&self) -> bool {
        self.0 == Q96
    }
}

impl TryFrom<U256> for SqrtPrice {
    type Error = CurveError;

    fn try_from(value: U256) -> Result<Self> {
        Self::new(value)
    }
}

impl fmt::Display for SqrtPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
