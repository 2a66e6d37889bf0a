//! Fixed sqrt-price interval of a market.

use core::fmt;

use ethnum::U256;

use super::SqrtPrice;
use crate::error::{CurveError, Result};

/// The closed sqrt-price interval `[edge_low, edge_high]` over which a
/// market's curve is defined.
///
/// Set once when the market is constructed and never mutated.
///
/// # Invariants
///
/// `edge_low < edge_high`.
///
/// # Examples
///
/// ```
/// use split_curve::domain::{EdgeBand, SqrtPrice};
///
/// let low = SqrtPrice::from_q96_ratio(91, 100).expect("valid");
/// let high = SqrtPrice::from_q96_ratio(120, 100).expect("valid");
/// let band = EdgeBand::new(low, high).expect("low < high");
/// assert!(band.contains(SqrtPrice::PAR));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeBand {
    edge_low: SqrtPrice,
    edge_high: SqrtPrice,
}

impl EdgeBand {
    /// Creates a band from its two edges.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidBand`] unless `edge_low < edge_high`.
    pub fn new(edge_low: SqrtPrice, edge_high: SqrtPrice) -> Result<Self> {
        if edge_low >= edge_high {
            return Err(CurveError::InvalidBand(
                "edge_low must be strictly below edge_high",
            ));
        }
        Ok(Self {
            edge_low,
            edge_high,
        })
    }

    /// Returns the lower edge.
    #[must_use]
    pub const fn edge_low(&self) -> SqrtPrice {
        self.edge_low
    }

    /// Returns the upper edge.
    #[must_use]
    pub const fn edge_high(&self) -> SqrtPrice {
        self.edge_high
    }

    /// Returns `edge_high - edge_low` (always non-zero).
    #[must_use]
    pub fn width(&self) -> U256 {
        self.edge_high.get() - self.edge_low.get()
    }

    /// Returns `true` if `price` lies inside the closed band.
    #[must_use]
    pub fn contains(&self, price: SqrtPrice) -> bool {
        self.edge_low <= price && price <= self.edge_high
    }

    /// Returns `price` unchanged if it lies inside the band.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::PriceOutOfBand`] otherwise.
    pub fn check(&self, price: SqrtPrice) -> Result<SqrtPrice> {
        if price < self.edge_low {
            return Err(CurveError::PriceOutOfBand("sqrt price below edge_low"));
        }
        if price > self.edge_high {
            return Err(CurveError::PriceOutOfBand("sqrt price above edge_high"));
        }
        Ok(price)
    }

    /// Clamps `price` into the band.
    #[must_use]
    pub fn clamp(&self, price: SqrtPrice) -> SqrtPrice {
        price.clamp(self.edge_low, self.edge_high)
    }
}

impl fmt::Display for EdgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.edge_low, self.edge_high)
    }
}
