//! Numeric capability traits.
//!
//! Every formula in the crate is written against the smallest group of
//! operations it needs instead of a concrete numeric type. Each capability
//! is blanket-implemented for all [`num_traits::Float`] types (`f32`, `f64`,
//! and third-party floats); other types (dual numbers, fixed point,
//! arbitrary precision wrappers) implement the traits by hand.

use core::ops::Neg;

use num_traits::{Float, Num, NumAssign, NumCast};

/// Field arithmetic, negation and ordering.
///
/// `zero()` / `one()` come from [`num_traits::Num`]. Implemented for every
/// type that satisfies the bounds, including signed integers.
pub trait Algebraic:
    nalgebra::Scalar + Copy + PartialOrd + Num + NumAssign + Neg<Output = Self>
{
}

impl<T> Algebraic for T where
    T: nalgebra::Scalar + Copy + PartialOrd + Num + NumAssign + Neg<Output = Self>
{
}

/// Largest finite value representable by the type.
pub trait Extremal: Algebraic {
    fn max_value() -> Self;
}

/// Positive and negative infinity, for mathematical (unbounded) bounds.
pub trait ExtendedReal: Algebraic {
    fn infinity() -> Self;
    fn neg_infinity() -> Self;
}

/// Square root and hypotenuse.
pub trait Roots: Algebraic {
    fn sqrt(self) -> Self;

    /// `sqrt(self² + other²)` without intermediate overflow where the type
    /// supports it.
    fn hypot(self, other: Self) -> Self;
}

/// Sine, cosine and arctangent, in radians.
pub trait Trigonometric: Algebraic {
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn atan(self) -> Self;

    /// Four-quadrant arctangent of `self / x`.
    fn atan2(self, x: Self) -> Self;
}

/// Absolute value.
pub trait Signed: Algebraic {
    fn abs(self) -> Self;
}

/// Conversion from an element count.
pub trait FromCount: Algebraic {
    fn from_count(count: usize) -> Self;
}

/// Every capability at once.
pub trait Real: Extremal + ExtendedReal + Roots + Trigonometric + Signed + FromCount {}

impl<T> Real for T where T: Extremal + ExtendedReal + Roots + Trigonometric + Signed + FromCount {}

impl<T: Float + Algebraic> Extremal for T {
    #[inline]
    fn max_value() -> Self {
        <T as Float>::max_value()
    }
}

impl<T: Float + Algebraic> ExtendedReal for T {
    #[inline]
    fn infinity() -> Self {
        <T as Float>::infinity()
    }

    #[inline]
    fn neg_infinity() -> Self {
        <T as Float>::neg_infinity()
    }
}

impl<T: Float + Algebraic> Roots for T {
    #[inline]
    fn sqrt(self) -> Self {
        Float::sqrt(self)
    }

    #[inline]
    fn hypot(self, other: Self) -> Self {
        Float::hypot(self, other)
    }
}

impl<T: Float + Algebraic> Trigonometric for T {
    #[inline]
    fn sin(self) -> Self {
        Float::sin(self)
    }

    #[inline]
    fn cos(self) -> Self {
        Float::cos(self)
    }

    #[inline]
    fn atan(self) -> Self {
        Float::atan(self)
    }

    #[inline]
    fn atan2(self, x: Self) -> Self {
        Float::atan2(self, x)
    }
}

impl<T: Float + Algebraic> Signed for T {
    #[inline]
    fn abs(self) -> Self {
        Float::abs(self)
    }
}

impl<T: Float + Algebraic> FromCount for T {
    /// Counts beyond the representable range saturate to infinity.
    #[inline]
    fn from_count(count: usize) -> Self {
        <T as NumCast>::from(count).unwrap_or_else(<T as Float>::infinity)
    }
}
