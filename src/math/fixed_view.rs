//! Conversions between Q96 sqrt-prices and [`fixed`] numbers.
//!
//! Only available with the `fixed-point` feature. The engine itself never
//! reads these values: they exist for callers that configure bands or
//! display prices with `fixed` types. Converting to [`U64F64`] drops the
//! low 32 fractional bits, so a round trip is exact only for prices whose
//! low 32 bits are zero.

use ethnum::U256;
use fixed::types::U64F64;

use crate::domain::SqrtPrice;
use crate::error::Result;

/// Fractional bits dropped when narrowing Q96 to Q64.
const SHIFT: u32 = 96 - 64;

/// Truncates a sqrt-price to a `U64F64`.
///
/// Every valid sqrt-price is below `2^64`, so the integer part always fits.
///
/// # Examples
///
/// ```
/// use fixed::types::U64F64;
/// use split_curve::domain::SqrtPrice;
/// use split_curve::math::sqrt_price_to_fixed;
///
/// assert_eq!(sqrt_price_to_fixed(SqrtPrice::PAR), U64F64::ONE);
/// ```
#[must_use]
pub fn sqrt_price_to_fixed(price: SqrtPrice) -> U64F64 {
    let (_, bits) = (price.get() >> SHIFT).into_words();
    U64F64::from_bits(bits)
}

/// Widens a `U64F64` sqrt-price into Q96.
///
/// # Errors
///
/// Returns [`CurveError::InvalidPrice`](crate::error::CurveError::InvalidPrice)
/// if the value is zero.
pub fn sqrt_price_from_fixed(value: U64F64) -> Result<SqrtPrice> {
    SqrtPrice::new(U256::new(value.to_bits()) << SHIFT)
}
