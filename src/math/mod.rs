//! Integer arithmetic for the engine, leaf-first.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `constants` | Q96 scaling base, sqrt-price bounds, basis points |
//! | `full_math` | 512-bit multiply, subtract, add, square root, mul-div |
//! | `sqrt_price_math` | Amount deltas and next-price solvers on the curve |
//! | `fixed_view` | `fixed` conversions (feature `fixed-point`) |
//!
//! Nothing here uses floating point; every result is bit-identical on
//! every platform.

mod constants;
mod full_math;
mod sqrt_price_math;

#[cfg(feature = "fixed-point")]
mod fixed_view;

pub use constants::{BPS_DENOMINATOR, MAX_SQRT_PRICE, MIN_SQRT_PRICE, Q192, Q96, RESOLUTION};
pub use full_math::{
    add512x512, div512, div_round_u256, mul512, mul_div, sqrt512, sub512x512,
};
pub use sqrt_price_math::{
    amount_delta_0, amount_delta_1, next_sqrt_price_from_amount_0,
    next_sqrt_price_from_amount_1,
};

#[cfg(feature = "fixed-point")]
pub use fixed_view::{sqrt_price_from_fixed, sqrt_price_to_fixed};
