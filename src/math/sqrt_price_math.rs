//! Bounded curve primitives on the `x · y = L²` virtual-reserve curve.
//!
//! With `√P = √(y / x)` in Q96, liquidity `L` between two sqrt-prices
//! `a < b` represents
//!
//! ```text
//! leg 0: Δx = L · (b − a) / (a · b)      (scaled by 2^96)
//! leg 1: Δy = L · (b − a)                (scaled by 2^-96)
//! ```
//!
//! Adding leg 0 at constant liquidity lowers the price, adding leg 1
//! raises it. Every function takes the rounding direction from the
//! caller: rounding an output down bounds what the protocol pays, rounding
//! an input up bounds what it collects.
//!
//! # Examples
//!
//! ```
//! use split_curve::domain::{Liquidity, Rounding, SqrtPrice};
//! use split_curve::math::{amount_delta_0, amount_delta_1};
//!
//! let a = SqrtPrice::PAR;
//! let b = SqrtPrice::from_q96_ratio(11, 10).expect("valid");
//! let l = Liquidity::new(1_000_000_000_000_000_000);
//! let x = amount_delta_0(a, b, l, Rounding::Up).expect("fits");
//! let y = amount_delta_1(a, b, l, Rounding::Down).expect("fits");
//! assert!(x > y / 2);
//! ```

use ethnum::U256;

use super::constants::{Q96, RESOLUTION};
use super::full_math::{div_round_u256, mul_div};
use crate::domain::{Liquidity, Rounding, SqrtPrice};
use crate::error::{CurveError, Result};

#[inline]
fn ordered(a: SqrtPrice, b: SqrtPrice) -> (U256, U256) {
    if a <= b {
        (a.get(), b.get())
    } else {
        (b.get(), a.get())
    }
}

/// Leg-0 amount represented by `liquidity` between two sqrt-prices.
///
/// `L · 2^96 · |b − a| / (a · b)`, rounded as requested. The argument
/// order does not matter. Returns zero when `liquidity` is zero or the
/// prices are equal.
///
/// # Errors
///
/// Returns [`CurveError::Overflow`] if the amount exceeds 256 bits.
pub fn amount_delta_0(
    sqrt_a: SqrtPrice,
    sqrt_b: SqrtPrice,
    liquidity: Liquidity,
    rounding: Rounding,
) -> Result<U256> {
    let (lower, upper) = ordered(sqrt_a, sqrt_b);
    if liquidity.is_zero() || lower == upper {
        return Ok(U256::ZERO);
    }

    let numerator1 = liquidity.to_u256() << RESOLUTION;
    let numerator2 = upper - lower;

    // ceil(ceil(n / upper) / lower) == ceil(n / (upper · lower)), and
    // likewise for floor, so the two-step division is exact.
    let scaled = mul_div(numerator1, numerator2, upper, rounding)?;
    div_round_u256(scaled, lower, rounding)
}

/// Leg-1 amount represented by `liquidity` between two sqrt-prices.
///
/// `L · |b − a| / 2^96`, rounded as requested. The argument order does
/// not matter.
///
/// # Errors
///
/// Returns [`CurveError::Overflow`] if the amount exceeds 256 bits
/// (unreachable for 128-bit liquidity and 160-bit prices, but checked).
pub fn amount_delta_1(
    sqrt_a: SqrtPrice,
    sqrt_b: SqrtPrice,
    liquidity: Liquidity,
    rounding: Rounding,
) -> Result<U256> {
    let (lower, upper) = ordered(sqrt_a, sqrt_b);
    if liquidity.is_zero() || lower == upper {
        return Ok(U256::ZERO);
    }
    mul_div(liquidity.to_u256(), upper - lower, Q96, rounding)
}

/// Maps a raw solver result to a price, treating zero as a drained curve.
fn solved_price(raw: U256) -> Result<SqrtPrice> {
    if raw == U256::ZERO {
        return Err(CurveError::ImpossibleAmount("amount drives sqrt price to zero"));
    }
    SqrtPrice::new(raw)
}

/// Sqrt-price after adding or removing an exact leg-0 amount at constant
/// liquidity.
///
/// `√P' = L · 2^96 · √P / (L · 2^96 ± Δx · √P)`. Adding lowers the price,
/// removing raises it. `rounding` applies to the returned price.
///
/// # Errors
///
/// - [`CurveError::InvalidLiquidity`] if `liquidity` is zero.
/// - [`CurveError::ImpossibleAmount`] if a removal would exhaust the
///   virtual reserve, or an addition would push the price to zero.
/// - [`CurveError::Overflow`] if the new price exceeds the price width.
pub fn next_sqrt_price_from_amount_0(
    sqrt_price: SqrtPrice,
    liquidity: Liquidity,
    amount: U256,
    adding: bool,
    rounding: Rounding,
) -> Result<SqrtPrice> {
    let liquidity = liquidity.non_zero()?;
    if amount == U256::ZERO {
        return Ok(sqrt_price);
    }

    let numerator1 = liquidity.to_u256() << RESOLUTION;
    let price = sqrt_price.get();

    if adding {
        if let Some(denominator) = amount
            .checked_mul(price)
            .and_then(|product| numerator1.checked_add(product))
        {
            return solved_price(mul_div(numerator1, price, denominator, rounding)?);
        }
        // Δx · √P overflowed: use the algebraically equal
        // n / (n / √P + Δx), with the inner quotient rounded against the
        // outer direction.
        let per_price = div_round_u256(numerator1, price, rounding.opposite())?;
        let denominator = per_price
            .checked_add(amount)
            .ok_or(CurveError::ImpossibleAmount("amount drives sqrt price to zero"))?;
        return solved_price(div_round_u256(numerator1, denominator, rounding)?);
    }

    let product = amount
        .checked_mul(price)
        .filter(|product| *product < numerator1)
        .ok_or(CurveError::ImpossibleAmount(
            "leg 0 removal exceeds virtual reserve",
        ))?;
    let raw = mul_div(numerator1, price, numerator1 - product, rounding)?;
    solved_price(raw)
}

/// Sqrt-price after adding or removing an exact leg-1 amount at constant
/// liquidity.
///
/// `√P' = √P ± Δy · 2^96 / L`. Adding raises the price, removing lowers
/// it. `rounding` applies to the returned price.
///
/// # Errors
///
/// - [`CurveError::InvalidLiquidity`] if `liquidity` is zero.
/// - [`CurveError::ImpossibleAmount`] if a removal would take the price
///   to zero or below.
/// - [`CurveError::Overflow`] if the new price exceeds the price width.
pub fn next_sqrt_price_from_amount_1(
    sqrt_price: SqrtPrice,
    liquidity: Liquidity,
    amount: U256,
    adding: bool,
    rounding: Rounding,
) -> Result<SqrtPrice> {
    let liquidity = liquidity.non_zero()?;
    if amount == U256::ZERO {
        return Ok(sqrt_price);
    }
    let price = sqrt_price.get();

    if adding {
        let quotient = mul_div(amount, Q96, liquidity.to_u256(), rounding)?;
        let raw = price
            .checked_add(quotient)
            .ok_or(CurveError::Overflow("sqrt price addition overflow"))?;
        return SqrtPrice::new(raw);
    }

    // The quotient is subtracted, so it rounds the opposite way.
    let quotient = mul_div(amount, Q96, liquidity.to_u256(), rounding.opposite())
        .map_err(|_| CurveError::ImpossibleAmount("leg 1 removal exceeds virtual reserve"))?;
    if quotient >= price {
        return Err(CurveError::ImpossibleAmount(
            "leg 1 removal exceeds virtual reserve",
        ));
    }
    SqrtPrice::new(price - quotient)
}
