//! Trait abstractions shared across the crate.
//!
//! [`FromConfig`] is the configuration-driven construction seam used by
//! [`EdgeBand`](crate::domain::EdgeBand) and
//! [`SplitMarket`](crate::market::SplitMarket).

mod from_config;

pub use from_config::FromConfig;
