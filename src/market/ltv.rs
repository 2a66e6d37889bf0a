//! Loan-to-value of a band at a given price.

use ethnum::U256;

use crate::domain::{BasisPoints, EdgeBand, SqrtPrice};
use crate::math::BPS_DENOMINATOR;

/// Debt value as a share of collateral, in basis points.
///
/// `floor(10000 · (x − edge_low) / (edge_high − edge_low))`, saturating
/// to 0 at or below `edge_low` and to 10 000 at or above `edge_high`.
/// Non-decreasing in `sqrt_price`.
#[must_use]
pub fn compute_ltv(band: &EdgeBand, sqrt_price: SqrtPrice) -> BasisPoints {
    if sqrt_price <= band.edge_low() {
        return BasisPoints::ZERO;
    }
    if sqrt_price >= band.edge_high() {
        return BasisPoints::MAX_PERCENT;
    }
    // x − a < 2^160, so the product stays well inside 256 bits
    let offset = sqrt_price.get() - band.edge_low().get();
    let scaled = offset * U256::new(u128::from(BPS_DENOMINATOR)) / band.width();
    let (_, low) = scaled.into_words();
    BasisPoints::new(u32::try_from(low).unwrap_or(BPS_DENOMINATOR))
}
