//! Explicit rounding direction for arithmetic operations.

/// Rounding direction supplied by every call site that divides.
///
/// Which direction is safe depends on who is owed the result: amounts
/// paid out round [`Rounding::Down`], amounts collected round
/// [`Rounding::Up`]. The engine never picks a default.
///
/// # Examples
///
/// ```
/// use split_curve::domain::Rounding;
///
/// let r = Rounding::Up;
/// assert!(r.is_up());
/// assert_eq!(r.opposite(), Rounding::Down);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }

    /// Returns the other direction.
    ///
    /// Used where a quantity enters a formula as a subtrahend or divisor,
    /// so rounding it one way moves the result the other way.
    #[must_use]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}
