//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use split_curve::prelude::*;
//! ```

pub use crate::domain::{
    Amount, BasisPoints, EdgeBand, Leg, Liquidity, Position, RedeemOutcome, Rounding, SqrtPrice,
    SwapOutcome, SwapSpec,
};

pub use crate::config::{BandConfig, MarketConfig};

pub use crate::market::{
    compute_ltv, compute_max_debt, compute_mint, compute_redeem, compute_swap,
    state_from_liquidity_and_debt, SplitMarket,
};

pub use crate::traits::FromConfig;

pub use crate::error::{CurveError, Result};
