//! # Split Curve
//!
//! Fixed-point pricing and collateral engine for collateral-split markets:
//! a single base collateral is split into a senior **debt** claim and a
//! residual **leverage** claim, both priced on a bounded constant-product
//! curve inside a fixed sqrt-price band.
//!
//! This crate provides:
//!
//! - **512-bit arithmetic** on [`U256`](ethnum::U256) limbs: exact
//!   products, long division, integer square roots.
//! - **Curve primitives**: amount deltas and next-price solvers in Q96.
//! - **Market math**: mint, redeem, swap, LTV, max debt, and state
//!   reconstruction, all with rounding that favors the market.
//! - **Band construction** from an LTV target and a width.
//!
//! Everything is pure integer math; identical inputs give bit-identical
//! outputs.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `fixed-point` | no | `U64F64` views of sqrt-prices via the `fixed` crate |
//!
//! # Quick Start
//!
//! ```rust
//! use split_curve::domain::{Amount, EdgeBand, Leg, Liquidity, SqrtPrice, SwapSpec};
//! use split_curve::market::SplitMarket;
//!
//! // 1. A band from sqrt-price 0.91 to 1.2
//! let band = EdgeBand::new(
//!     SqrtPrice::from_q96_ratio(91, 100).expect("valid"),
//!     SqrtPrice::from_q96_ratio(120, 100).expect("valid"),
//! )
//! .expect("edge_low < edge_high");
//!
//! // 2. A market holding 1e18 liquidity, priced at par
//! let market = SplitMarket::new(band, Liquidity::new(1_000_000_000_000_000_000));
//! let x = SqrtPrice::PAR;
//!
//! // 3. Mint both legs for fresh liquidity
//! let minted = market
//!     .preview_mint(x, Liquidity::new(1_000_000_000_000))
//!     .expect("in band");
//! assert!(minted.debt().get() > 0);
//!
//! // 4. Sell debt for leverage
//! let spec = SwapSpec::exact_in(Amount::new(1_000_000)).expect("non-zero");
//! let out = market.preview_swap(x, Leg::Debt, spec).expect("stays in band");
//! assert!(out.next_sqrt_price() < x);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Config     │  MarketConfig / BandConfig → FromConfig
//! └──────┬──────┘
//!        ▼
//! ┌─────────────┐
//! │   Market     │  mint, redeem, swap, LTV, max debt, state
//! └──────┬──────┘
//!        ▼
//! ┌─────────────┐
//! │    Math      │  amount deltas, next price, mul512, sqrt512
//! └──────┬──────┘
//!        ▼
//! ┌─────────────┐
//! │   Domain     │  SqrtPrice, EdgeBand, Liquidity, Amount, …
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`SqrtPrice`](domain::SqrtPrice), [`EdgeBand`](domain::EdgeBand), [`Position`](domain::Position), etc. |
//! | [`math`]   | Q96 constants, 512-bit helpers, curve primitives |
//! | [`market`] | Collateral-split operations and [`SplitMarket`](market::SplitMarket) |
//! | [`band`]   | Band and price placement from LTV targets |
//! | [`config`] | Declarative blueprints: [`MarketConfig`](config::MarketConfig), [`BandConfig`](config::BandConfig) |
//! | [`traits`] | [`FromConfig`](traits::FromConfig) construction seam |
//! | [`error`]  | [`CurveError`](error::CurveError) unified error enum |
//! | [`prelude`] | Convenience re-exports |
//!
//! # Logging
//!
//! Market operations emit `tracing` events: `trace!` for computed
//! outcomes, `debug!` for rejections. The crate never installs a
//! subscriber.

pub mod band;
pub mod config;
pub mod domain;
pub mod error;
pub mod market;
pub mod math;
pub mod prelude;
pub mod traits;
