//! Swap operation specification.

use core::fmt;

use super::Amount;
use crate::error::{CurveError, Result};

/// Specifies what constraint drives a swap: either an exact input amount
/// or an exact output amount.
///
/// # Invariants
///
/// The contained amount is always non-zero.
///
/// # Examples
///
/// ```
/// use split_curve::domain::{Amount, SwapSpec};
///
/// let spec = SwapSpec::exact_in(Amount::new(1000));
/// assert!(spec.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapSpec {
    /// The caller provides an exact input amount; the output is solved
    /// forward and rounded down.
    ExactIn {
        /// The fixed input amount (always non-zero).
        amount_in: Amount,
    },
    /// The caller requests an exact output amount; the required input is
    /// solved backward and rounded up.
    ExactOut {
        /// The desired output amount (always non-zero).
        amount_out: Amount,
    },
}

impl SwapSpec {
    /// Creates an exact-input swap specification.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InsufficientAmount`] if `amount` is zero.
    pub const fn exact_in(amount: Amount) -> Result<Self> {
        if amount.is_zero() {
            return Err(CurveError::InsufficientAmount("swap amount must be non-zero"));
        }
        Ok(Self::ExactIn { amount_in: amount })
    }

    /// Creates an exact-output swap specification.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InsufficientAmount`] if `amount` is zero.
    pub const fn exact_out(amount: Amount) -> Result<Self> {
        if amount.is_zero() {
            return Err(CurveError::InsufficientAmount("swap amount must be non-zero"));
        }
        Ok(Self::ExactOut { amount_out: amount })
    }

    /// Returns `true` if this is an exact-input specification.
    #[must_use]
    pub const fn is_exact_in(&self) -> bool {
        matches!(self, Self::ExactIn { .. })
    }

    /// Returns `true` if this is an exact-output specification.
    #[must_use]
    pub const fn is_exact_out(&self) -> bool {
        matches!(self, Self::ExactOut { .. })
    }

    /// Extracts the amount regardless of variant.
    pub const fn amount(&self) -> Amount {
        match self {
            Self::ExactIn { amount_in } => *amount_in,
            Self::ExactOut { amount_out } => *amount_out,
        }
    }
}

impl fmt::Display for SwapSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactIn { amount_in } => write!(f, "ExactIn({amount_in})"),
            Self::ExactOut { amount_out } => write!(f, "ExactOut({amount_out})"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn exact_in_valid() {
        let Ok(spec) = SwapSpec::exact_in(Amount::new(100)) else {
            panic!("expected Ok");
        };
        assert!(spec.is_exact_in());
        assert!(!spec.is_exact_out());
        assert_eq!(spec.amount(), Amount::new(100));
    }

    #[test]
    fn exact_out_valid() {
        let Ok(spec) = SwapSpec::exact_out(Amount::new(200)) else {
            panic!("expected Ok");
        };
        assert!(spec.is_exact_out());
        assert_eq!(spec.amount(), Amount::new(200));
    }

    #[test]
    fn zero_amounts_rejected() {
        assert!(matches!(
            SwapSpec::exact_in(Amount::ZERO),
            Err(CurveError::InsufficientAmount(_))
        ));
        assert!(matches!(
            SwapSpec::exact_out(Amount::ZERO),
            Err(CurveError::InsufficientAmount(_))
        ));
    }

    #[test]
    fn display() {
        let Ok(spec) = SwapSpec::exact_out(Amount::new(7)) else {
            panic!("expected Ok");
        };
        assert_eq!(spec.to_string(), "ExactOut(7)");
    }
}
