//! Constant-liquidity exchange between the debt and leverage legs.
//!
//! The input leg is burned and the output leg minted, so the price moves
//! as if the input were added to its side of the curve:
//!
//! | Fixed leg | Mode | Price | Solved amount |
//! |-----------|------|-------|---------------|
//! | debt | exact in | down | leverage out, rounded down |
//! | leverage | exact in | up | debt out, rounded down |
//! | leverage | exact out | down | debt in, rounded up |
//! | debt | exact out | up | leverage in, rounded up |

use tracing::{debug, trace};

use crate::domain::{Amount, EdgeBand, Leg, Liquidity, Rounding, SqrtPrice, SwapOutcome, SwapSpec};
use crate::error::{CurveError, Result};
use crate::math::{
    amount_delta_0, amount_delta_1, next_sqrt_price_from_amount_0, next_sqrt_price_from_amount_1,
};

/// Exchanges one leg for the other at constant `liquidity`.
///
/// `fixed_leg` names the leg `spec`'s amount is denominated in: the input
/// leg for [`SwapSpec::ExactIn`], the output leg for
/// [`SwapSpec::ExactOut`]. The next price is rounded against the caller,
/// the solved output down and the solved input up.
///
/// # Errors
///
/// - [`CurveError::InvalidLiquidity`] if `liquidity` is zero.
/// - [`CurveError::PriceOutOfBand`] if `sqrt_price` is outside the band
///   or the swap would push it past an edge.
/// - [`CurveError::InsufficientAmount`] if an exact-in swap yields zero.
///
/// # Examples
///
/// ```
/// use split_curve::domain::{Amount, EdgeBand, Leg, Liquidity, SqrtPrice, SwapSpec};
/// use split_curve::market::compute_swap;
///
/// let band = EdgeBand::new(
///     SqrtPrice::from_q96_ratio(91, 100).expect("valid"),
///     SqrtPrice::from_q96_ratio(120, 100).expect("valid"),
/// )
/// .expect("valid band");
/// let spec = SwapSpec::exact_in(Amount::new(10_000_000_000_000_000)).expect("non-zero");
/// let out = compute_swap(
///     Liquidity::new(1_000_000_000_000_000_000),
///     SqrtPrice::PAR,
///     &band,
///     Leg::Debt,
///     spec,
/// )
/// .expect("stays in band");
/// assert!(out.next_sqrt_price() < SqrtPrice::PAR);
/// ```
pub fn compute_swap(
    liquidity: Liquidity,
    sqrt_price: SqrtPrice,
    band: &EdgeBand,
    fixed_leg: Leg,
    spec: SwapSpec,
) -> Result<SwapOutcome> {
    let liquidity = liquidity.non_zero()?;
    let price = band.check(sqrt_price)?;
    let amount = spec.amount().to_u256();

    let (calculated, next) = match (spec, fixed_leg) {
        (SwapSpec::ExactIn { .. }, Leg::Debt) => {
            let next = within_band(
                band,
                next_sqrt_price_from_amount_0(price, liquidity, amount, true, Rounding::Up),
            )?;
            (amount_delta_1(next, price, liquidity, Rounding::Down)?, next)
        }
        (SwapSpec::ExactIn { .. }, Leg::Leverage) => {
            let next = within_band(
                band,
                next_sqrt_price_from_amount_1(price, liquidity, amount, true, Rounding::Down),
            )?;
            (amount_delta_0(price, next, liquidity, Rounding::Down)?, next)
        }
        (SwapSpec::ExactOut { .. }, Leg::Leverage) => {
            let next = within_band(
                band,
                next_sqrt_price_from_amount_1(price, liquidity, amount, false, Rounding::Down),
            )?;
            (amount_delta_0(next, price, liquidity, Rounding::Up)?, next)
        }
        (SwapSpec::ExactOut { .. }, Leg::Debt) => {
            let next = within_band(
                band,
                next_sqrt_price_from_amount_0(price, liquidity, amount, false, Rounding::Up),
            )?;
            (amount_delta_1(price, next, liquidity, Rounding::Up)?, next)
        }
    };

    let amount_calculated = Amount::from_u256(calculated)?;
    if spec.is_exact_in() && amount_calculated.is_zero() {
        debug!(%fixed_leg, amount_in = spec.amount().get(), "swap output rounds to zero");
        return Err(CurveError::InsufficientAmount("swap output rounds to zero"));
    }
    trace!(
        %fixed_leg,
        exact_in = spec.is_exact_in(),
        amount = spec.amount().get(),
        amount_calculated = amount_calculated.get(),
        next_sqrt_price = %next,
        "swap computed"
    );
    Ok(SwapOutcome::new(amount_calculated, next))
}

/// Any failure to solve the next price means the curve ran past an edge:
/// the band lies strictly inside the representable price range.
fn within_band(band: &EdgeBand, next: Result<SqrtPrice>) -> Result<SqrtPrice> {
    let next = next.map_err(|err| {
        debug!(?err, "swap price solve failed");
        CurveError::PriceOutOfBand("swap moves price past the band")
    })?;
    band.check(next)
}
