//! Redemption: surrendering debt and/or leverage for base liquidity.
//!
//! The outstanding position is valued with rounding up, the surrendered
//! amounts are subtracted, and the remainder `(D', V')` is solved for the
//! price `x'` at which it forms a consistent position. With
//! `m = D'·a/Q` and `n = V'·Q` that price is the root in `[a, b]` of
//!
//! ```text
//! m·x'² + (n − m·b)·x' − n·a = 0
//! ```
//!
//! The remaining liquidity is then the larger of the two ceiling
//! inversions of `(D', V')` at `x'`. Whatever `x'` the solver lands on,
//! that maximum is at least the liquidity truly backing the remainder, so
//! a redeem never releases more than a mint of the surrendered amounts
//! would have cost.

use ethnum::U256;
use tracing::{debug, trace};

use super::mint::compute_position;
use crate::domain::{Amount, EdgeBand, Liquidity, RedeemOutcome, Rounding, SqrtPrice};
use crate::error::{CurveError, Result};
use crate::math::{add512x512, mul512, mul_div, sqrt512, Q96, RESOLUTION};

/// Liquidity released by surrendering `debt_in` and `leverage_in` from a
/// market holding `liquidity` at `sqrt_price`.
///
/// Surrendering only debt moves the price toward `edge_low`, only
/// leverage toward `edge_high`. Surrendering the whole outstanding
/// position leaves the price where it was.
///
/// # Errors
///
/// - [`CurveError::InvalidLiquidity`] if `liquidity` is zero.
/// - [`CurveError::InsufficientAmount`] if nothing is surrendered or the
///   released liquidity rounds to zero.
/// - [`CurveError::PriceOutOfBand`] if `sqrt_price` is outside the band.
/// - [`CurveError::ImpossibleAmount`] if either amount exceeds what is
///   outstanding.
pub fn compute_redeem(
    liquidity: Liquidity,
    sqrt_price: SqrtPrice,
    band: &EdgeBand,
    debt_in: Amount,
    leverage_in: Amount,
) -> Result<RedeemOutcome> {
    let liquidity = liquidity.non_zero()?;
    if debt_in.is_zero() && leverage_in.is_zero() {
        return Err(CurveError::InsufficientAmount("nothing surrendered"));
    }

    let outstanding = compute_position(sqrt_price, band, liquidity, Rounding::Up)?;
    let debt_left = outstanding
        .debt()
        .checked_sub(&debt_in)
        .ok_or(CurveError::ImpossibleAmount(
            "debt surrendered exceeds outstanding debt",
        ))?;
    let leverage_left = outstanding
        .leverage()
        .checked_sub(&leverage_in)
        .ok_or(CurveError::ImpossibleAmount(
            "leverage surrendered exceeds outstanding leverage",
        ))?;

    let next_sqrt_price = if debt_left.is_zero() && leverage_left.is_zero() {
        sqrt_price
    } else {
        solve_price(band, debt_left, leverage_left)?
    };
    let remaining =
        remaining_liquidity(band, next_sqrt_price, debt_left, leverage_left, liquidity)?;

    let liquidity_out = liquidity.checked_sub(&remaining).unwrap_or(Liquidity::ZERO);
    if liquidity_out.is_zero() {
        debug!(
            debt_in = debt_in.get(),
            leverage_in = leverage_in.get(),
            "redeem releases no liquidity"
        );
        return Err(CurveError::InsufficientAmount(
            "surrendered amounts release no liquidity",
        ));
    }
    trace!(
        debt_in = debt_in.get(),
        leverage_in = leverage_in.get(),
        liquidity_out = liquidity_out.get(),
        %next_sqrt_price,
        "redeem computed"
    );
    Ok(RedeemOutcome::new(liquidity_out, next_sqrt_price))
}

/// Price at which `(debt, leverage)` forms a consistent position.
///
/// A debt-free remainder sits at `edge_low` and a leverage-free one at
/// `edge_high`. Otherwise the root is kept strictly inside the band so
/// both inversions stay defined.
fn solve_price(band: &EdgeBand, debt: Amount, leverage: Amount) -> Result<SqrtPrice> {
    if debt.is_zero() {
        return Ok(band.edge_low());
    }
    if leverage.is_zero() {
        return Ok(band.edge_high());
    }
    let a = band.edge_low().get();
    let b = band.edge_high().get();

    // m rounds up so dust debt still yields a non-degenerate quadratic
    let m = mul_div(debt.to_u256(), a, Q96, Rounding::Up)?;
    let n = leverage.to_u256() << RESOLUTION;

    // The root is unchanged by scaling m and n together. Shifting both
    // until m·b and n stay below 2^254 keeps 4·m·a in one word and the
    // discriminant, bounded by (n + m·b)², inside 512 bits.
    let shift = (bit_len(m) + bit_len(b))
        .saturating_sub(254)
        .max(bit_len(n).saturating_sub(254));
    let m = m >> shift;
    let n = n >> shift;
    let mb = m * b;
    let four_ma = (m * a) << 2u32;

    // B = n − m·b carried as magnitude and sign
    let (b_abs, b_negative) = if n >= mb {
        (n - mb, false)
    } else {
        (mb - n, true)
    };
    let (sq_hi, sq_lo) = mul512(b_abs, b_abs);
    let (c_hi, c_lo) = mul512(four_ma, n);
    let (disc_lo, disc_hi) = add512x512(sq_lo, sq_hi, c_lo, c_hi)?;
    let root = sqrt512(disc_lo, disc_hi);

    // the discriminant is at least B², so root ≥ |B|
    let numerator = if b_negative {
        root.checked_add(b_abs)
            .ok_or(CurveError::Overflow("redeem root overflow"))?
    } else {
        root - b_abs
    };
    let raw = numerator / (m << 1u32);

    let (lower, upper) = if b - a >= U256::new(2) {
        (a + U256::ONE, b - U256::ONE)
    } else {
        (a, b)
    };
    SqrtPrice::new(raw.clamp(lower, upper))
}

fn bit_len(value: U256) -> u32 {
    256 - value.leading_zeros()
}

/// Smallest liquidity that certainly backs `(debt, leverage)` at
/// `price`, capped at `cap`.
fn remaining_liquidity(
    band: &EdgeBand,
    price: SqrtPrice,
    debt: Amount,
    leverage: Amount,
    cap: Liquidity,
) -> Result<Liquidity> {
    if debt.is_zero() && leverage.is_zero() {
        return Ok(Liquidity::ZERO);
    }
    let a = band.edge_low().get();
    let b = band.edge_high().get();
    let x = price.get();

    // An inversion that overflows is above any 128-bit cap.
    let from_leverage = if leverage.is_zero() {
        U256::ZERO
    } else if x < b {
        mul_div(leverage.to_u256(), Q96, b - x, Rounding::Up).unwrap_or(U256::MAX)
    } else {
        return Ok(cap);
    };
    let from_debt = if debt.is_zero() {
        U256::ZERO
    } else if x > a {
        mul_div(debt.to_u256(), x, x - a, Rounding::Up)
            .and_then(|scaled| mul_div(scaled, a, Q96, Rounding::Up))
            .unwrap_or(U256::MAX)
    } else {
        return Ok(cap);
    };

    Liquidity::from_u256(from_leverage.max(from_debt).min(cap.to_u256()))
}
