//! A band and its liquidity, bundled for previews.

use core::fmt;

use ethnum::U256;

use super::{
    compute_ltv, compute_max_debt, compute_mint, compute_position, compute_redeem, compute_swap,
    is_undercollateralized, marginal_rate, state_from_liquidity_and_debt, target_ratio,
};
use crate::config::MarketConfig;
use crate::domain::{
    Amount, BasisPoints, EdgeBand, Leg, Liquidity, Position, RedeemOutcome, Rounding, SqrtPrice,
    SwapOutcome, SwapSpec,
};
use crate::error::Result;
use crate::traits::FromConfig;

/// Immutable snapshot of a collateral-split market.
///
/// Holds the band and the current liquidity; the price is supplied per
/// call because it is owned by whatever stores the market. Every preview
/// returns exactly what the corresponding free function in
/// [`market`](crate::market) returns, so a preview and the state-changing
/// call it precedes always agree.
///
/// # Examples
///
/// ```
/// use split_curve::domain::{EdgeBand, Liquidity, SqrtPrice};
/// use split_curve::market::SplitMarket;
///
/// let band = EdgeBand::new(
///     SqrtPrice::from_q96_ratio(91, 100).expect("valid"),
///     SqrtPrice::from_q96_ratio(120, 100).expect("valid"),
/// )
/// .expect("valid band");
/// let market = SplitMarket::new(band, Liquidity::new(1_000_000_000_000_000_000));
/// let minted = market
///     .preview_mint(SqrtPrice::PAR, Liquidity::new(1_000_000))
///     .expect("in band");
/// assert!(!minted.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SplitMarket {
    band: EdgeBand,
    liquidity: Liquidity,
}

impl SplitMarket {
    /// Creates a market over `band` holding `liquidity`.
    #[must_use]
    pub const fn new(band: EdgeBand, liquidity: Liquidity) -> Self {
        Self { band, liquidity }
    }

    /// Returns the band.
    #[must_use]
    pub const fn band(&self) -> &EdgeBand {
        &self.band
    }

    /// Returns the current liquidity.
    #[must_use]
    pub const fn liquidity(&self) -> Liquidity {
        self.liquidity
    }

    /// Returns the same band with `liquidity` instead.
    #[must_use]
    pub const fn with_liquidity(self, liquidity: Liquidity) -> Self {
        Self { liquidity, ..self }
    }

    /// See [`target_ratio`].
    ///
    /// # Errors
    ///
    /// Same as [`target_ratio`].
    pub fn target_ratio(&self) -> Result<U256> {
        target_ratio(&self.band)
    }

    /// Whole position backed by the market's liquidity, rounded down.
    ///
    /// # Errors
    ///
    /// Same as [`compute_position`].
    pub fn position(&self, sqrt_price: SqrtPrice) -> Result<Position> {
        compute_position(sqrt_price, &self.band, self.liquidity, Rounding::Down)
    }

    /// See [`compute_mint`].
    ///
    /// # Errors
    ///
    /// Same as [`compute_mint`].
    pub fn preview_mint(&self, sqrt_price: SqrtPrice, liquidity_delta: Liquidity) -> Result<Position> {
        compute_mint(sqrt_price, &self.band, liquidity_delta)
    }

    /// See [`compute_redeem`].
    ///
    /// # Errors
    ///
    /// Same as [`compute_redeem`].
    pub fn preview_redeem(
        &self,
        sqrt_price: SqrtPrice,
        debt_in: Amount,
        leverage_in: Amount,
    ) -> Result<RedeemOutcome> {
        compute_redeem(self.liquidity, sqrt_price, &self.band, debt_in, leverage_in)
    }

    /// See [`compute_swap`].
    ///
    /// # Errors
    ///
    /// Same as [`compute_swap`].
    pub fn preview_swap(
        &self,
        sqrt_price: SqrtPrice,
        fixed_leg: Leg,
        spec: SwapSpec,
    ) -> Result<SwapOutcome> {
        compute_swap(self.liquidity, sqrt_price, &self.band, fixed_leg, spec)
    }

    /// See [`compute_ltv`].
    #[must_use]
    pub fn ltv(&self, sqrt_price: SqrtPrice) -> BasisPoints {
        compute_ltv(&self.band, sqrt_price)
    }

    /// Returns `true` once the LTV at `sqrt_price` reaches 10 000.
    ///
    /// At saturation the leverage leg is worth nothing and the debt leg
    /// trades at its maximum rate, which [`marginal_rate`] reports as the
    /// per-unit [`compute_max_debt`].
    #[must_use]
    pub fn is_saturated(&self, sqrt_price: SqrtPrice) -> bool {
        self.ltv(sqrt_price).is_saturated()
    }

    /// See [`compute_max_debt`].
    ///
    /// # Errors
    ///
    /// Same as [`compute_max_debt`].
    pub fn max_debt(&self) -> Result<Amount> {
        compute_max_debt(&self.band, self.liquidity)
    }

    /// See [`is_undercollateralized`].
    ///
    /// # Errors
    ///
    /// Same as [`is_undercollateralized`].
    pub fn is_undercollateralized(&self, debt: Amount) -> Result<bool> {
        is_undercollateralized(&self.band, self.liquidity, debt)
    }

    /// See [`marginal_rate`].
    ///
    /// # Errors
    ///
    /// Same as [`marginal_rate`].
    pub fn marginal_rate(&self, sqrt_price: SqrtPrice, leg: Leg) -> Result<U256> {
        marginal_rate(sqrt_price, &self.band, leg)
    }

    /// See [`state_from_liquidity_and_debt`].
    ///
    /// # Errors
    ///
    /// Same as [`state_from_liquidity_and_debt`].
    pub fn state_from_debt(&self, debt: Amount) -> Result<(Amount, SqrtPrice)> {
        state_from_liquidity_and_debt(&self.band, self.liquidity, debt)
    }
}

impl FromConfig<MarketConfig> for SplitMarket {
    fn from_config(config: &MarketConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.band()?, config.liquidity()))
    }
}

impl fmt::Display for SplitMarket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SplitMarket(band={}, liquidity={})", self.band, self.liquidity)
    }
}
