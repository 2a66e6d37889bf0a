//! Generic construction trait for building values from configuration.
//!
//! [`FromConfig`] gives bands and markets a uniform construction path
//! from their configuration structs. Each implementor validates the
//! configuration it receives, so a successfully constructed value is
//! always usable.
//!
//! There is no blanket implementation: every value/config pairing is
//! written out explicitly.

use crate::error::Result;

/// Builds `Self` from a configuration of type `C`.
///
/// # Implementors
///
/// - `impl FromConfig<BandConfig> for EdgeBand`
/// - `impl FromConfig<MarketConfig> for SplitMarket`
pub trait FromConfig<C> {
    /// Creates a new value from `config`.
    ///
    /// The configuration is borrowed so it can be reused, e.g. to build
    /// several markets over the same band.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidBand`](crate::error::CurveError::InvalidBand)
    /// (or a more specific variant) if the configuration is invalid.
    fn from_config(config: &C) -> Result<Self>
    where
        Self: Sized;
}
