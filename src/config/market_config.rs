//! Top-level market configuration.
//!
//! [`MarketConfig`] is the declarative blueprint for a
//! [`SplitMarket`](crate::market::SplitMarket): where its band sits and
//! how much liquidity it starts with.

use super::BandConfig;
use crate::domain::{EdgeBand, Liquidity};
use crate::error::Result;
use crate::traits::FromConfig;

/// How a market's band is specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarketConfig {
    /// Explicit edges.
    Edges {
        /// The band, already validated at construction.
        band: EdgeBand,
        /// Initial liquidity.
        liquidity: Liquidity,
    },
    /// Edges derived from an LTV target and a width.
    TargetLtv {
        /// Band parameters.
        band: BandConfig,
        /// Initial liquidity.
        liquidity: Liquidity,
    },
}

impl MarketConfig {
    /// Validates the band parameters.
    ///
    /// # Errors
    ///
    /// Returns the error [`BandConfig::validate`] would return.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Edges { .. } => Ok(()),
            Self::TargetLtv { band, .. } => band.validate(),
        }
    }

    /// Resolves the edge band.
    ///
    /// # Errors
    ///
    /// Returns the error [`BandConfig::build`] would return.
    pub fn band(&self) -> Result<EdgeBand> {
        match self {
            Self::Edges { band, .. } => Ok(*band),
            Self::TargetLtv { band, .. } => EdgeBand::from_config(band),
        }
    }

    /// Returns the initial liquidity.
    #[must_use]
    pub const fn liquidity(&self) -> Liquidity {
        match self {
            Self::Edges { liquidity, .. } | Self::TargetLtv { liquidity, .. } => *liquidity,
        }
    }

    /// Returns `true` if this is an [`Edges`](Self::Edges) variant.
    #[must_use]
    pub const fn is_edges(&self) -> bool {
        matches!(self, Self::Edges { .. })
    }

    /// Returns `true` if this is a [`TargetLtv`](Self::TargetLtv) variant.
    #[must_use]
    pub const fn is_target_ltv(&self) -> bool {
        matches!(self, Self::TargetLtv { .. })
    }
}

impl core::fmt::Display for MarketConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Edges { .. } => write!(f, "Edges"),
            Self::TargetLtv { .. } => write!(f, "TargetLtv"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{BasisPoints, SqrtPrice};
    use crate::error::CurveError;
    use crate::math::Q96;
    use ethnum::U256;

    fn edges() -> EdgeBand {
        let (Ok(low), Ok(high)) = (
            SqrtPrice::from_q96_ratio(91, 100),
            SqrtPrice::from_q96_ratio(120, 100),
        ) else {
            panic!("valid prices");
        };
        let Ok(b) = EdgeBand::new(low, high) else {
            panic!("valid band");
        };
        b
    }

    #[test]
    fn edges_variant_passes_band_through() {
        let cfg = MarketConfig::Edges {
            band: edges(),
            liquidity: Liquidity::new(7),
        };
        assert!(cfg.is_edges());
        assert!(!cfg.is_target_ltv());
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.band(), Ok(edges()));
        assert_eq!(cfg.liquidity(), Liquidity::new(7));
        assert_eq!(cfg.to_string(), "Edges");
    }

    #[test]
    fn target_variant_derives_band() {
        let Ok(band) = BandConfig::new(BasisPoints::new(2500), Q96 * U256::new(2)) else {
            panic!("expected Ok");
        };
        let cfg = MarketConfig::TargetLtv {
            band,
            liquidity: Liquidity::ZERO,
        };
        assert!(cfg.is_target_ltv());
        assert_eq!(cfg.validate(), Ok(()));
        let Ok(derived) = cfg.band() else {
            panic!("expected Ok");
        };
        assert_eq!(derived.edge_high().get(), derived.edge_low().get() * U256::new(2));
        assert_eq!(cfg.to_string(), "TargetLtv");
    }

    #[test]
    fn target_variant_surfaces_build_errors() {
        let Ok(band) = BandConfig::new(BasisPoints::new(5000), Q96 + U256::ONE) else {
            panic!("expected Ok");
        };
        let cfg = MarketConfig::TargetLtv {
            band,
            liquidity: Liquidity::ZERO,
        };
        assert!(matches!(cfg.band(), Err(CurveError::InvalidBand(_))));
    }
}
