//! Position accounting: what a slice of liquidity is worth on each leg.

use ethnum::U256;
use tracing::{debug, trace};

use crate::domain::{Amount, EdgeBand, Leg, Liquidity, Position, Rounding, SqrtPrice};
use crate::error::{CurveError, Result};
use crate::math::{amount_delta_0, amount_delta_1, Q96};

/// Debt and leverage represented by `liquidity` at `sqrt_price`.
///
/// `debt = amount_delta_0(edge_low, x, L)` and
/// `leverage = amount_delta_1(x, edge_high, L)`, both with `rounding`.
///
/// # Errors
///
/// - [`CurveError::PriceOutOfBand`] if `sqrt_price` is outside the band.
/// - [`CurveError::Overflow`] if a leg exceeds 128 bits.
pub fn compute_position(
    sqrt_price: SqrtPrice,
    band: &EdgeBand,
    liquidity: Liquidity,
    rounding: Rounding,
) -> Result<Position> {
    let price = band.check(sqrt_price)?;
    let debt = amount_delta_0(band.edge_low(), price, liquidity, rounding)?;
    let leverage = amount_delta_1(price, band.edge_high(), liquidity, rounding)?;
    Ok(Position::new(
        Amount::from_u256(debt)?,
        Amount::from_u256(leverage)?,
    ))
}

/// Debt and leverage minted for `liquidity_delta` at `sqrt_price`.
///
/// Both legs round down, so the caller never receives more than the
/// liquidity is worth.
///
/// # Errors
///
/// - [`CurveError::InvalidLiquidity`] if `liquidity_delta` is zero.
/// - [`CurveError::PriceOutOfBand`] if `sqrt_price` is outside the band.
/// - [`CurveError::InsufficientAmount`] if both legs round to zero.
/// - [`CurveError::Overflow`] if a leg exceeds 128 bits.
///
/// # Examples
///
/// ```
/// use split_curve::domain::{EdgeBand, Liquidity, SqrtPrice};
/// use split_curve::market::compute_mint;
///
/// let band = EdgeBand::new(
///     SqrtPrice::from_q96_ratio(91, 100).expect("valid"),
///     SqrtPrice::from_q96_ratio(120, 100).expect("valid"),
/// )
/// .expect("valid band");
/// let minted = compute_mint(SqrtPrice::PAR, &band, Liquidity::new(1_000_000_000_000_000_000))
///     .expect("in band");
/// assert!(minted.debt().get() > 0 && minted.leverage().get() > 0);
/// ```
pub fn compute_mint(
    sqrt_price: SqrtPrice,
    band: &EdgeBand,
    liquidity_delta: Liquidity,
) -> Result<Position> {
    let liquidity = liquidity_delta.non_zero()?;
    let position = compute_position(sqrt_price, band, liquidity, Rounding::Down)
        .inspect_err(|err| debug!(?err, %sqrt_price, "mint rejected"))?;
    if position.is_empty() {
        debug!(liquidity = liquidity.get(), "mint rounds to zero");
        return Err(CurveError::InsufficientAmount(
            "liquidity too small to mint either leg",
        ));
    }
    trace!(
        liquidity = liquidity.get(),
        debt = position.debt().get(),
        leverage = position.leverage().get(),
        "mint computed"
    );
    Ok(position)
}

/// Largest debt `liquidity` can carry: the debt leg at `edge_high`,
/// rounded down.
///
/// # Errors
///
/// Returns [`CurveError::Overflow`] if the amount exceeds 128 bits.
pub fn compute_max_debt(band: &EdgeBand, liquidity: Liquidity) -> Result<Amount> {
    Amount::from_u256(amount_delta_0(
        band.edge_low(),
        band.edge_high(),
        liquidity,
        Rounding::Down,
    )?)
}

/// Returns `true` if `debt` exceeds what `liquidity` can carry.
///
/// # Errors
///
/// Propagates [`compute_max_debt`] errors.
pub fn is_undercollateralized(band: &EdgeBand, liquidity: Liquidity, debt: Amount) -> Result<bool> {
    Ok(debt > compute_max_debt(band, liquidity)?)
}

/// Amount of `leg` per unit of liquidity at `sqrt_price`, in Q96.
///
/// For the leverage leg this is exactly `edge_high − x`.
///
/// # Errors
///
/// Returns [`CurveError::PriceOutOfBand`] if `sqrt_price` is outside the
/// band.
pub fn marginal_rate(sqrt_price: SqrtPrice, band: &EdgeBand, leg: Leg) -> Result<U256> {
    let price = band.check(sqrt_price)?;
    let unit = Liquidity::from_u256(Q96)?;
    match leg {
        Leg::Debt => amount_delta_0(band.edge_low(), price, unit, Rounding::Down),
        Leg::Leverage => amount_delta_1(price, band.edge_high(), unit, Rounding::Down),
    }
}
