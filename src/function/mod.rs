//! Named single-variable functions and their descriptive metadata.

mod trig;

pub use trig::{Cosine, Sine, Tangent, Trig};

use crate::numeric::Algebraic;

/// A closed range of values, used for domain and image bounds.
///
/// Bounds may be infinite when the numeric type supports it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<N> {
    /// Lower bound.
    pub min: N,
    /// Upper bound.
    pub max: N,
}

impl<N: Algebraic> Interval<N> {
    /// Creates a new interval.
    #[must_use]
    pub fn new(min: N, max: N) -> Self {
        Self { min, max }
    }

    /// Returns whether `value` lies within `[min, max]`.
    ///
    /// Always false for NaN-like values that compare unordered.
    #[must_use]
    pub fn contains(&self, value: N) -> bool {
        self.min <= value && value <= self.max
    }

    /// Restricts `value` to `[min, max]`.
    #[must_use]
    pub fn clamp(&self, value: N) -> N {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

/// The contract every named scalar function implements.
///
/// Implementors are zero-sized markers: all metadata is associated
/// constants or associated functions, so a function is selected at compile
/// time by type. Use [`Descriptor`] or [`Trig`] to select one at runtime.
///
/// `domain`/`image` describe the mathematical function and may use
/// infinite bounds. `number_domain`/`number_image` describe what the
/// concrete numeric type `N` can represent.
pub trait MathFunction<N: Algebraic> {
    /// `f(-x) == f(x)` for every `x` in the domain.
    const IS_EVEN: bool;

    /// `f(-x) == -f(x)` for every `x` in the domain.
    const IS_ODD: bool;

    /// No discontinuities over the whole domain.
    const IS_CONTINUOUS: bool;

    /// Human-readable formula, e.g. `"sin(x)"`.
    const PLAIN_TEXT_FORMULA: &'static str;

    /// Inputs over which the function is mathematically defined.
    fn domain() -> Interval<N>;

    /// Inputs representable by `N`.
    fn number_domain() -> Interval<N>;

    /// Outputs the function can produce.
    fn image() -> Interval<N>;

    /// Outputs representable by `N`.
    fn number_image() -> Interval<N>;

    /// Largest output. Only meaningful when `image().max` is finite.
    fn global_maximum() -> N;

    /// Smallest output. Only meaningful when `image().min` is finite.
    fn global_minimum() -> N;

    /// Evaluates the function at `x`.
    ///
    /// Defined for every `x` in [`domain`](Self::domain). Outside it the
    /// result is whatever `N` produces.
    fn eval(x: N) -> N;

    /// Evaluates the first derivative at `x`, with the same domain contract
    /// as [`eval`](Self::eval).
    fn derivative_eval(x: N) -> N;
}

/// Runtime record of a [`MathFunction`]'s metadata and entry points.
#[derive(Debug, Clone, Copy)]
pub struct Descriptor<N> {
    pub is_even: bool,
    pub is_odd: bool,
    pub is_continuous: bool,
    pub formula: &'static str,
    pub domain: Interval<N>,
    pub number_domain: Interval<N>,
    pub image: Interval<N>,
    pub number_image: Interval<N>,
    pub global_maximum: N,
    pub global_minimum: N,
    eval: fn(N) -> N,
    derivative_eval: fn(N) -> N,
}

impl<N: Algebraic> Descriptor<N> {
    /// Captures the metadata and function pointers of `F`.
    #[must_use]
    pub fn of<F: MathFunction<N>>() -> Self {
        Self {
            is_even: F::IS_EVEN,
            is_odd: F::IS_ODD,
            is_continuous: F::IS_CONTINUOUS,
            formula: F::PLAIN_TEXT_FORMULA,
            domain: F::domain(),
            number_domain: F::number_domain(),
            image: F::image(),
            number_image: F::number_image(),
            global_maximum: F::global_maximum(),
            global_minimum: F::global_minimum(),
            eval: F::eval,
            derivative_eval: F::derivative_eval,
        }
    }

    /// Evaluates the described function at `x`.
    #[must_use]
    pub fn eval(&self, x: N) -> N {
        (self.eval)(x)
    }

    /// Evaluates the described function's derivative at `x`.
    #[must_use]
    pub fn derivative_eval(&self, x: N) -> N {
        (self.derivative_eval)(x)
    }

    /// The evaluation entry point as a plain function pointer.
    #[must_use]
    pub fn evaluator(&self) -> fn(N) -> N {
        self.eval
    }
}
