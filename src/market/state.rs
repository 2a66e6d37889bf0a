//! Reconstructing a market's price from its liquidity and debt.

use tracing::{debug, trace};

use crate::domain::{Amount, EdgeBand, Liquidity, Rounding, SqrtPrice};
use crate::error::{CurveError, Result};
use crate::math::{amount_delta_1, next_sqrt_price_from_amount_0};

/// Leverage and sqrt-price of a market holding `liquidity` with `debt`
/// outstanding.
///
/// The price is found by removing `debt` from the leg-0 curve starting at
/// `edge_low`, rounded up, so the debt leg at the returned price is at
/// least `debt`. The leverage is the leg-1 span from that price to
/// `edge_high`, rounded down. Zero debt gives `edge_low` and the full
/// leverage.
///
/// # Errors
///
/// - [`CurveError::InvalidLiquidity`] if `liquidity` is zero.
/// - [`CurveError::PriceOutOfBand`] if `debt` exceeds what the band can
///   carry, i.e. the price would pass `edge_high`.
pub fn state_from_liquidity_and_debt(
    band: &EdgeBand,
    liquidity: Liquidity,
    debt: Amount,
) -> Result<(Amount, SqrtPrice)> {
    let liquidity = liquidity.non_zero()?;
    let price = if debt.is_zero() {
        band.edge_low()
    } else {
        next_sqrt_price_from_amount_0(
            band.edge_low(),
            liquidity,
            debt.to_u256(),
            false,
            Rounding::Up,
        )
        .map_err(|err| match err {
            CurveError::ImpossibleAmount(_) | CurveError::Overflow(_) => {
                CurveError::PriceOutOfBand("debt exceeds what the band can carry")
            }
            other => other,
        })?
    };
    if price > band.edge_high() {
        debug!(debt = debt.get(), liquidity = liquidity.get(), "debt above band capacity");
        return Err(CurveError::PriceOutOfBand(
            "debt exceeds what the band can carry",
        ));
    }
    let leverage = Amount::from_u256(amount_delta_1(
        price,
        band.edge_high(),
        liquidity,
        Rounding::Down,
    )?)?;
    trace!(debt = debt.get(), leverage = leverage.get(), %price, "state reconstructed");
    Ok((leverage, price))
}
