use crate::numeric::{Algebraic, ExtendedReal, Extremal, Trigonometric};

use super::{Descriptor, Interval, MathFunction};

/// `sin(x)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sine;

/// `cos(x)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cosine;

/// `tan(x)`, with poles at `π/2 + kπ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tangent;

const SINE_FORMULA: &str = "sin(x)";
const COSINE_FORMULA: &str = "cos(x)";
const TANGENT_FORMULA: &str = "tan(x)";

fn unbounded<N: ExtendedReal>() -> Interval<N> {
    Interval::new(N::neg_infinity(), N::infinity())
}

fn representable<N: Extremal>() -> Interval<N> {
    Interval::new(-N::max_value(), N::max_value())
}

fn unit<N: Algebraic>() -> Interval<N> {
    Interval::new(-N::one(), N::one())
}

impl<N: Trigonometric + ExtendedReal + Extremal> MathFunction<N> for Sine {
    const IS_EVEN: bool = false;
    const IS_ODD: bool = true;
    const IS_CONTINUOUS: bool = true;
    const PLAIN_TEXT_FORMULA: &'static str = SINE_FORMULA;

    fn domain() -> Interval<N> {
        unbounded()
    }

    fn number_domain() -> Interval<N> {
        representable()
    }

    fn image() -> Interval<N> {
        unit()
    }

    fn number_image() -> Interval<N> {
        unit()
    }

    fn global_maximum() -> N {
        N::one()
    }

    fn global_minimum() -> N {
        -N::one()
    }

    #[inline]
    fn eval(x: N) -> N {
        x.sin()
    }

    #[inline]
    fn derivative_eval(x: N) -> N {
        x.cos()
    }
}

impl<N: Trigonometric + ExtendedReal + Extremal> MathFunction<N> for Cosine {
    const IS_EVEN: bool = true;
    const IS_ODD: bool = false;
    const IS_CONTINUOUS: bool = true;
    const PLAIN_TEXT_FORMULA: &'static str = COSINE_FORMULA;

    fn domain() -> Interval<N> {
        unbounded()
    }

    fn number_domain() -> Interval<N> {
        representable()
    }

    fn image() -> Interval<N> {
        unit()
    }

    fn number_image() -> Interval<N> {
        unit()
    }

    fn global_maximum() -> N {
        N::one()
    }

    fn global_minimum() -> N {
        -N::one()
    }

    #[inline]
    fn eval(x: N) -> N {
        x.cos()
    }

    #[inline]
    fn derivative_eval(x: N) -> N {
        -x.sin()
    }
}

// The poles are excluded pointwise, so the domain bounds stay unbounded.
impl<N: Trigonometric + ExtendedReal + Extremal> MathFunction<N> for Tangent {
    const IS_EVEN: bool = false;
    const IS_ODD: bool = true;
    const IS_CONTINUOUS: bool = false;
    const PLAIN_TEXT_FORMULA: &'static str = TANGENT_FORMULA;

    fn domain() -> Interval<N> {
        unbounded()
    }

    fn number_domain() -> Interval<N> {
        representable()
    }

    fn image() -> Interval<N> {
        unbounded()
    }

    fn number_image() -> Interval<N> {
        representable()
    }

    fn global_maximum() -> N {
        N::infinity()
    }

    fn global_minimum() -> N {
        N::neg_infinity()
    }

    #[inline]
    fn eval(x: N) -> N {
        x.sin() / x.cos()
    }

    #[inline]
    fn derivative_eval(x: N) -> N {
        let c = x.cos();
        N::one() / (c * c)
    }
}

/// Runtime selection among the trigonometric functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trig {
    Sine,
    Cosine,
    Tangent,
}

impl Trig {
    /// Every variant, in declaration order.
    pub const ALL: [Trig; 3] = [Trig::Sine, Trig::Cosine, Trig::Tangent];

    /// Metadata and entry points of the selected function for `N`.
    #[must_use]
    pub fn descriptor<N: Trigonometric + ExtendedReal + Extremal>(self) -> Descriptor<N> {
        match self {
            Trig::Sine => Descriptor::of::<Sine>(),
            Trig::Cosine => Descriptor::of::<Cosine>(),
            Trig::Tangent => Descriptor::of::<Tangent>(),
        }
    }

    /// Same text as the selected function's `PLAIN_TEXT_FORMULA`, for any
    /// numeric type.
    #[must_use]
    pub fn formula(self) -> &'static str {
        match self {
            Trig::Sine => SINE_FORMULA,
            Trig::Cosine => COSINE_FORMULA,
            Trig::Tangent => TANGENT_FORMULA,
        }
    }

    #[must_use]
    pub fn eval<N: Trigonometric + ExtendedReal + Extremal>(self, x: N) -> N {
        match self {
            Trig::Sine => Sine::eval(x),
            Trig::Cosine => Cosine::eval(x),
            Trig::Tangent => Tangent::eval(x),
        }
    }

    #[must_use]
    pub fn derivative_eval<N: Trigonometric + ExtendedReal + Extremal>(self, x: N) -> N {
        match self {
            Trig::Sine => Sine::derivative_eval(x),
            Trig::Cosine => Cosine::derivative_eval(x),
            Trig::Tangent => Tangent::derivative_eval(x),
        }
    }
}
