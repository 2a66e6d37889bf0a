//! Basis-point scalar used for loan-to-value ratios.

use core::fmt;

use crate::error::{CurveError, Result};
use crate::math::BPS_DENOMINATOR;

/// A ratio expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// LTV values produced by the engine are always within `0..=10_000`;
/// caller-supplied targets are checked with [`BasisPoints::ltv`].
///
/// # Examples
///
/// ```
/// use split_curve::domain::BasisPoints;
///
/// let ltv = BasisPoints::ltv(8_000).expect("within 100%");
/// assert_eq!(ltv.get(), 8_000);
/// assert!(BasisPoints::ltv(10_001).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(BPS_DENOMINATOR);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Creates an LTV target, rejecting values above 100%.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidBand`] if `value > 10_000`.
    pub const fn ltv(value: u32) -> Result<Self> {
        if value > BPS_DENOMINATOR {
            return Err(CurveError::InvalidBand("ltv must not exceed 10000 bps"));
        }
        Ok(Self(value))
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is in the valid percentage range (`0..=10_000`).
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= BPS_DENOMINATOR
    }

    /// Returns `true` if this is exactly 100%.
    #[must_use]
    pub const fn is_saturated(&self) -> bool {
        self.0 == BPS_DENOMINATOR
    }

    /// Absolute difference between two values, in basis points.
    #[must_use]
    pub const fn abs_diff(&self, other: &Self) -> u32 {
        self.0.abs_diff(other.0)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
