//! Extended-precision integer arithmetic on 256-bit limbs.
//!
//! Any 512-bit quantity is carried as two [`U256`] limbs. The helpers
//! here are the only place where products may exceed the native width;
//! every higher layer routes such products through [`mul512`] or
//! [`mul_div`].
//!
//! # Limb order
//!
//! | Function | Order |
//! |----------|-------|
//! | [`mul512`] | returns `(hi, lo)` |
//! | [`sub512x512`], [`add512x512`] | take and return `(low, high)` pairs |
//! | [`sqrt512`] | takes `(lo, hi)` |
//!
//! # Examples
//!
//! ```
//! use ethnum::U256;
//! use split_curve::math::{mul512, sqrt512};
//!
//! let a = U256::MAX;
//! let (hi, lo) = mul512(a, a);
//! assert_eq!(sqrt512(lo, hi), a);
//! ```

use ethnum::U256;

use crate::domain::Rounding;
use crate::error::{CurveError, Result};

/// Exact product of two 256-bit operands as `(hi, lo)`.
///
/// The value is `hi · 2^256 + lo`. Never overflows.
#[must_use]
pub fn mul512(a: U256, b: U256) -> (U256, U256) {
    let (a1, a0) = a.into_words();
    let (b1, b0) = b.into_words();

    // Each partial product of two 128-bit halves fits in 256 bits.
    let p00 = U256::new(a0) * U256::new(b0);
    let p01 = U256::new(a0) * U256::new(b1);
    let p10 = U256::new(a1) * U256::new(b0);
    let p11 = U256::new(a1) * U256::new(b1);

    let (mid, mid_carry) = p01.overflowing_add(p10);
    let (mid_hi, mid_lo) = mid.into_words();

    let (lo, lo_carry) = p00.overflowing_add(U256::from_words(mid_lo, 0));

    let mut hi = p11.wrapping_add(U256::new(mid_hi));
    if mid_carry {
        hi = hi.wrapping_add(U256::from_words(1, 0));
    }
    if lo_carry {
        hi = hi.wrapping_add(U256::ONE);
    }
    (hi, lo)
}

/// Subtracts `(b0, b1)` from `(a0, a1)`, each a `(low, high)` limb pair.
///
/// Precondition: `a ≥ b`. Callers must check this; the result wraps
/// modulo `2^512` otherwise.
#[must_use]
pub fn sub512x512(a0: U256, a1: U256, b0: U256, b1: U256) -> (U256, U256) {
    let (r0, borrow) = a0.overflowing_sub(b0);
    let mut r1 = a1.wrapping_sub(b1);
    if borrow {
        r1 = r1.wrapping_sub(U256::ONE);
    }
    (r0, r1)
}

/// Adds two `(low, high)` limb pairs.
///
/// # Errors
///
/// Returns [`CurveError::Overflow`] if the sum does not fit 512 bits.
pub fn add512x512(a0: U256, a1: U256, b0: U256, b1: U256) -> Result<(U256, U256)> {
    let (r0, carry) = a0.overflowing_add(b0);
    let r1 = a1
        .checked_add(b1)
        .and_then(|v| if carry { v.checked_add(U256::ONE) } else { Some(v) })
        .ok_or(CurveError::Overflow("512-bit addition overflow"))?;
    Ok((r0, r1))
}

/// Compares two 512-bit values given as `(hi, lo)`.
#[inline]
fn le512(a_hi: U256, a_lo: U256, b_hi: U256, b_lo: U256) -> bool {
    a_hi < b_hi || (a_hi == b_hi && a_lo <= b_lo)
}

/// Integer square root of `hi · 2^256 + lo`.
///
/// Returns the largest `r` with `r² ≤ value`. The root of any 512-bit
/// value fits in 256 bits, so the result is exact for perfect squares and
/// the floor otherwise, over the whole input range.
#[must_use]
pub fn sqrt512(lo: U256, hi: U256) -> U256 {
    if hi == U256::ZERO {
        return sqrt256(lo);
    }

    // Root bits are settled from the top; a candidate is kept when its
    // square (computed exactly in 512 bits) stays within the value.
    let mut root = U256::ZERO;
    let top_bit = (512 - hi.leading_zeros() + 1) / 2;
    for bit in (0..top_bit.min(256)).rev() {
        let candidate = root | (U256::ONE << bit);
        let (sq_hi, sq_lo) = mul512(candidate, candidate);
        if le512(sq_hi, sq_lo, hi, lo) {
            root = candidate;
        }
    }
    root
}

/// Floor square root of a single 256-bit value (Newton iteration).
fn sqrt256(value: U256) -> U256 {
    if value < U256::new(2) {
        return value;
    }
    // Initial estimate 2^ceil(bits/2) is always ≥ the true root.
    let bits = 256 - value.leading_zeros();
    let mut x = U256::ONE << ((bits + 1) / 2);
    loop {
        let y = (x + value / x) >> 1u32;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// Divides the 512-bit value `hi · 2^256 + lo` by `denominator`.
///
/// Returns `(quotient, remainder)`.
///
/// # Errors
///
/// - [`CurveError::DivisionByZero`] if `denominator` is zero.
/// - [`CurveError::Overflow`] if the quotient needs more than 256 bits
///   (`hi ≥ denominator`).
pub fn div512(hi: U256, lo: U256, denominator: U256) -> Result<(U256, U256)> {
    if denominator == U256::ZERO {
        return Err(CurveError::DivisionByZero);
    }
    if hi == U256::ZERO {
        return Ok((lo / denominator, lo % denominator));
    }
    if hi >= denominator {
        return Err(CurveError::Overflow("512-bit quotient exceeds 256 bits"));
    }

    // Restoring long division; `rem < denominator` holds between steps.
    let mut rem = hi;
    let mut quotient = U256::ZERO;
    for bit in (0..256u32).rev() {
        let carry = rem.leading_zeros() == 0;
        rem = (rem << 1u32) | ((lo >> bit) & U256::ONE);
        quotient = quotient << 1u32;
        if carry || rem >= denominator {
            rem = rem.wrapping_sub(denominator);
            quotient = quotient | U256::ONE;
        }
    }
    Ok((quotient, rem))
}

/// Computes `a · b / denominator` with a 512-bit intermediate product.
///
/// # Errors
///
/// - [`CurveError::DivisionByZero`] if `denominator` is zero.
/// - [`CurveError::Overflow`] if the rounded quotient exceeds 256 bits.
///
/// # Examples
///
/// ```
/// use ethnum::U256;
/// use split_curve::domain::Rounding;
/// use split_curve::math::mul_div;
///
/// let q = mul_div(U256::MAX, U256::new(3), U256::new(6), Rounding::Up);
/// assert_eq!(q, Ok(U256::MAX / 2 + 1));
/// ```
pub fn mul_div(a: U256, b: U256, denominator: U256, rounding: Rounding) -> Result<U256> {
    let (hi, lo) = mul512(a, b);
    let (quotient, rem) = div512(hi, lo, denominator)?;
    if rounding.is_up() && rem != U256::ZERO {
        return quotient
            .checked_add(U256::ONE)
            .ok_or(CurveError::Overflow("mul_div rounding overflow"));
    }
    Ok(quotient)
}

/// Divides `numerator` by `denominator` with explicit rounding.
///
/// # Errors
///
/// Returns [`CurveError::DivisionByZero`] if `denominator` is zero.
pub fn div_round_u256(numerator: U256, denominator: U256, rounding: Rounding) -> Result<U256> {
    if denominator == U256::ZERO {
        return Err(CurveError::DivisionByZero);
    }
    let quotient = numerator / denominator;
    if rounding.is_up() && numerator % denominator != U256::ZERO {
        // quotient < U256::MAX whenever a remainder exists
        return Ok(quotient + U256::ONE);
    }
    Ok(quotient)
}
