//! Band construction from LTV targets.
//!
//! These helpers place prices and bands so that [`compute_ltv`] reads
//! back the requested target. Used when a market is configured rather
//! than on the mint, redeem, or swap paths.
//!
//! [`compute_ltv`]: crate::market::compute_ltv

use ethnum::U256;
use tracing::trace;

use crate::domain::{BasisPoints, EdgeBand, Rounding, SqrtPrice};
use crate::error::{CurveError, Result};
use crate::math::{mul_div, BPS_DENOMINATOR, Q192, Q96};

const WIDTH_TOO_LARGE: CurveError =
    CurveError::InvalidBand("width ratio puts an edge outside the sqrt-price range");

/// Sqrt-price at which `band` has LTV `target`.
///
/// `edge_low + ceil(width · t / 10000)` with `t` capped at 10 000, so the
/// result always lies in the band. Reading the LTV back never lands
/// below `t`. It returns `t` exactly when the band is at least 10 000
/// units wide, and stays within one basis point above it while the band
/// is wider than 5 000 units. Narrower bands cannot resolve single basis
/// points.
///
/// # Errors
///
/// Returns [`CurveError::Overflow`] only if the price width is exceeded,
/// which a valid band rules out.
pub fn sqrt_price_from_ltv(band: &EdgeBand, target: BasisPoints) -> Result<SqrtPrice> {
    let t = target.get().min(BPS_DENOMINATOR);
    let offset = mul_div(
        band.width(),
        U256::new(u128::from(t)),
        U256::new(u128::from(BPS_DENOMINATOR)),
        Rounding::Up,
    )?;
    let price = SqrtPrice::new(band.edge_low().get() + offset)?;
    Ok(band.clamp(price))
}

/// Band whose LTV at par equals `target` and whose edges are
/// `width_ratio` apart.
///
/// `width_ratio` is the Q96 ratio `edge_high / edge_low`. With
/// `w = width_ratio` and `t = target`:
///
/// ```text
/// edge_low  = 2^192 · 10000 / (10000 · 2^96 + (w − 2^96) · t)
/// edge_high = edge_low · w / 2^96
/// ```
///
/// both floored.
///
/// # Errors
///
/// Returns [`CurveError::InvalidBand`] if `target` exceeds 10 000, if
/// `width_ratio ≤ 1.0`, if the ratio is too close to 1.0 to separate
/// the edges, or if it is so large that an edge leaves the sqrt-price
/// range.
///
/// # Examples
///
/// ```
/// use split_curve::band::edge_prices_from_ltv_and_width;
/// use split_curve::domain::{BasisPoints, SqrtPrice};
/// use split_curve::market::compute_ltv;
///
/// let width = SqrtPrice::from_q96_ratio(12, 10).expect("valid").get();
/// let band = edge_prices_from_ltv_and_width(BasisPoints::new(7500), width).expect("valid");
/// assert_eq!(compute_ltv(&band, SqrtPrice::PAR), BasisPoints::new(7500));
/// ```
pub fn edge_prices_from_ltv_and_width(target: BasisPoints, width_ratio: U256) -> Result<EdgeBand> {
    if !target.is_valid_percent() {
        return Err(CurveError::InvalidBand("target LTV above 10000 bp"));
    }
    if width_ratio <= Q96 {
        return Err(CurveError::InvalidBand("width ratio must exceed 1.0"));
    }
    let bps = U256::new(u128::from(BPS_DENOMINATOR));
    let spread = (width_ratio - Q96)
        .checked_mul(U256::new(u128::from(target.get())))
        .ok_or(WIDTH_TOO_LARGE)?;
    let denominator = (Q96 * bps).checked_add(spread).ok_or(WIDTH_TOO_LARGE)?;

    let low = mul_div(Q192, bps, denominator, Rounding::Down)
        .and_then(SqrtPrice::new)
        .map_err(|_| WIDTH_TOO_LARGE)?;
    let high = mul_div(low.get(), width_ratio, Q96, Rounding::Down)
        .and_then(SqrtPrice::new)
        .map_err(|_| WIDTH_TOO_LARGE)?;
    let band = EdgeBand::new(low, high)?;
    trace!(%target, %band, "band derived from ltv and width");
    Ok(band)
}
