//! Value types of the collateral-split engine.
//!
//! All types are small `Copy` newtypes or enums with validated
//! constructors, so invariants such as "sqrt-price is non-zero" or
//! "edge_low < edge_high" are checked once at the boundary.

mod amount;
mod basis_points;
mod edge_band;
mod leg;
mod liquidity;
mod outcome;
mod position;
mod rounding;
mod sqrt_price;
mod swap_spec;

pub use amount::Amount;
pub use basis_points::BasisPoints;
pub use edge_band::EdgeBand;
pub use leg::Leg;
pub use liquidity::Liquidity;
pub use outcome::{RedeemOutcome, SwapOutcome};
pub use position::Position;
pub use rounding::Rounding;
pub use sqrt_price::SqrtPrice;
pub use swap_spec::SwapSpec;
