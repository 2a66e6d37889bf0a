//! Unified error types for the split-curve engine.
//!
//! All fallible operations across the crate return [`CurveError`], so an
//! orchestration layer can map every rejection to a single abort path.
//! The engine never retries and never partially mutates anything: an
//! `Err` means the originating mint, redeem, or swap must be abandoned.

use thiserror::Error;

/// Errors raised by the pricing and collateral engine.
///
/// Variants carrying a `&'static str` describe which check failed; the
/// variant itself is what callers should match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CurveError {
    /// A sqrt-price is zero or exceeds the representable price width.
    #[error("invalid price: {0}")]
    InvalidPrice(&'static str),

    /// Liquidity is zero where a non-zero divisor or quantity is required.
    #[error("invalid liquidity: {0}")]
    InvalidLiquidity(&'static str),

    /// An intermediate or final value exceeds its representable width.
    #[error("overflow: {0}")]
    Overflow(&'static str),

    /// A supplied or computed price lies outside `[edge_low, edge_high]`.
    #[error("price out of band: {0}")]
    PriceOutOfBand(&'static str),

    /// A requested output cannot be produced by the curve.
    #[error("impossible amount: {0}")]
    ImpossibleAmount(&'static str),

    /// The result rounds to zero and conveys no meaningful conversion.
    #[error("insufficient amount: {0}")]
    InsufficientAmount(&'static str),

    /// Band, LTV, or width parameters do not describe a usable band.
    #[error("invalid band: {0}")]
    InvalidBand(&'static str),

    /// Division by a zero denominator.
    #[error("division by zero")]
    DivisionByZero,
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, CurveError>;
