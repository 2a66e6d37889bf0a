//! Configuration for a band described by its LTV at par and its width.

use ethnum::U256;

use crate::band::edge_prices_from_ltv_and_width;
use crate::domain::{BasisPoints, EdgeBand};
use crate::error::{CurveError, Result};
use crate::math::Q96;
use crate::traits::FromConfig;

/// Band parameters expressed the way a market operator thinks of them.
///
/// The band is placed so that the market reads `target_ltv` at par, with
/// `edge_high / edge_low = width_ratio`.
///
/// # Validation
///
/// - `target_ltv` must not exceed 10 000 basis points.
/// - `width_ratio` (Q96) must be strictly above `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BandConfig {
    target_ltv: BasisPoints,
    width_ratio: U256,
}

impl BandConfig {
    /// Creates a new `BandConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidBand`] if either parameter is out of
    /// range.
    pub fn new(target_ltv: BasisPoints, width_ratio: U256) -> Result<Self> {
        let config = Self {
            target_ltv,
            width_ratio,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidBand`] if either parameter is out of
    /// range.
    pub fn validate(&self) -> Result<()> {
        if !self.target_ltv.is_valid_percent() {
            return Err(CurveError::InvalidBand(
                "target LTV must not exceed 10000 basis points",
            ));
        }
        if self.width_ratio <= Q96 {
            return Err(CurveError::InvalidBand("width ratio must exceed 1.0"));
        }
        Ok(())
    }

    /// Derives the edge band.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidBand`] if the width is too narrow to
    /// separate the edges.
    pub fn build(&self) -> Result<EdgeBand> {
        self.validate()?;
        edge_prices_from_ltv_and_width(self.target_ltv, self.width_ratio)
    }

    /// Returns the LTV the band reads at par.
    #[must_use]
    pub const fn target_ltv(&self) -> BasisPoints {
        self.target_ltv
    }

    /// Returns the Q96 ratio `edge_high / edge_low`.
    #[must_use]
    pub const fn width_ratio(&self) -> U256 {
        self.width_ratio
    }
}

impl FromConfig<BandConfig> for EdgeBand {
    fn from_config(config: &BandConfig) -> Result<Self> {
        config.build()
    }
}
