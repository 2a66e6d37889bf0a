//! Collateral-split market math.
//!
//! A market holds liquidity `L` over a fixed [`EdgeBand`] `[a, b]`. At
//! sqrt-price `x` that liquidity is split into two claims on the same
//! base collateral:
//!
//! | Leg | Amount | Meaning |
//! |-----|--------|---------|
//! | debt | `amount_delta_0(a, x, L)` | senior claim, zero at `a` |
//! | leverage | `amount_delta_1(x, b, L)` | residual claim, zero at `b` |
//!
//! Debt value plus leverage equals `L·(b − a)/2^96` at every price, and
//! the market's LTV is the debt share of that total.
//!
//! Rounding always favors the market: amounts paid out round down,
//! amounts collected and outstanding positions round up.
//!
//! [`EdgeBand`]: crate::domain::EdgeBand

mod collateral;
mod ltv;
mod mint;
mod redeem;
mod split_market;
mod state;
mod swap;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use collateral::{collateral_for_liquidity, liquidity_for_collateral, target_ratio};
pub use ltv::compute_ltv;
pub use mint::{
    compute_max_debt, compute_mint, compute_position, is_undercollateralized, marginal_rate,
};
pub use redeem::compute_redeem;
pub use split_market::SplitMarket;
pub use state::state_from_liquidity_and_debt;
pub use swap::compute_swap;
