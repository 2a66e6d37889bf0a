//! Market configuration structs.
//!
//! [`MarketConfig`] is the top-level blueprint for a market; [`BandConfig`]
//! describes a band by its LTV at par and its width. Both validate on
//! construction.

mod band;
mod market_config;

pub use band::BandConfig;
pub use market_config::MarketConfig;
