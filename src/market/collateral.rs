//! Conversion between base collateral and band liquidity.

use ethnum::U256;

use crate::domain::{Amount, EdgeBand, Liquidity, Rounding};
use crate::error::Result;
use crate::math::{amount_delta_1, mul_div, Q96};

/// Q96 scalar converting base collateral into this band's liquidity unit.
///
/// `ratio = 2^96 · 2^96 / (edge_high − edge_low)`, rounded down, so that
/// `liquidity = collateral · ratio / 2^96`. Depends only on the band.
///
/// # Errors
///
/// Returns [`CurveError::Overflow`](crate::error::CurveError::Overflow)
/// only for pathological one-unit-wide bands.
pub fn target_ratio(band: &EdgeBand) -> Result<U256> {
    mul_div(Q96, Q96, band.width(), Rounding::Down)
}

/// Liquidity minted for a deposit of base collateral, rounded down.
///
/// # Errors
///
/// Returns [`CurveError::Overflow`](crate::error::CurveError::Overflow)
/// if the liquidity does not fit 128 bits.
pub fn liquidity_for_collateral(band: &EdgeBand, collateral: Amount) -> Result<Liquidity> {
    let ratio = target_ratio(band)?;
    Liquidity::from_u256(mul_div(collateral.to_u256(), ratio, Q96, Rounding::Down)?)
}

/// Base collateral backing `liquidity`: the whole leg-1 span of the band.
///
/// Debt value plus leverage always sums to this amount at any price.
///
/// # Errors
///
/// Returns [`CurveError::Overflow`](crate::error::CurveError::Overflow)
/// if the amount does not fit 128 bits.
pub fn collateral_for_liquidity(
    band: &EdgeBand,
    liquidity: Liquidity,
    rounding: Rounding,
) -> Result<Amount> {
    Amount::from_u256(amount_delta_1(
        band.edge_low(),
        band.edge_high(),
        liquidity,
        rounding,
    )?)
}
