//! Fixed-point constants shared by every layer of the engine.
//!
//! All sqrt-prices and ratios are unsigned Q64.96 values: the real number
//! `r` is stored as `floor(r · 2^96)` in a [`U256`].

use ethnum::U256;

/// Number of fractional bits in a Q96 value.
pub const RESOLUTION: u32 = 96;

/// `2^96`, the fixed-point representation of `1.0`.
pub const Q96: U256 = U256::from_words(0, 1 << RESOLUTION);

/// `2^192`, the square of [`Q96`].
pub const Q192: U256 = U256::from_words(1 << 64, 0);

/// Smallest valid sqrt-price.
pub const MIN_SQRT_PRICE: U256 = U256::ONE;

/// Largest valid sqrt-price, `2^160 - 1`.
pub const MAX_SQRT_PRICE: U256 = U256::from_words(u32::MAX as u128, u128::MAX);

/// Basis-point denominator (10 000 = 100%).
pub const BPS_DENOMINATOR: u32 = 10_000;
