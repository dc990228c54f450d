//! Implicit lines and the tangent/normal lines of a function's graph.

use crate::numeric::{Algebraic, Signed};

use super::Cartesian;

/// A line in implicit form: `a·x + b·y + c = 0`.
///
/// Coefficients are kept exactly as derived; `(a, b)` is not normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line<N> {
    pub a: N,
    pub b: N,
    pub c: N,
}

impl<N: Algebraic> Line<N> {
    /// Creates a new line from its coefficients.
    #[must_use]
    pub fn new(a: N, b: N, c: N) -> Self {
        Self { a, b, c }
    }

    /// Value of `a·x + b·y + c` at `point`. Zero on the line; the sign
    /// tells the side.
    #[must_use]
    pub fn residual(&self, point: Cartesian<N>) -> N {
        self.a * point.x + self.b * point.y + self.c
    }

    /// Whether `point` lies on the line within `tolerance` of residual.
    #[must_use]
    pub fn contains(&self, point: Cartesian<N>, tolerance: N) -> bool
    where
        N: Signed,
    {
        self.residual(point).abs() <= tolerance
    }

    /// Slope `dy/dx`. Vertical lines (`b = 0`) are not guarded.
    #[must_use]
    pub fn slope(&self) -> N {
        -self.a / self.b
    }
}

pub mod tangent_line {
    use crate::numeric::Algebraic;

    use super::Line;

    /// Tangent at `(x, value)` with slope `slope`:
    /// `-slope·X + Y + (slope·x - value) = 0`.
    #[must_use]
    pub fn from_x<N: Algebraic>(x: N, value: N, slope: N) -> Line<N> {
        Line::new(-slope, N::one(), slope * x - value)
    }

    pub mod slope {
        use crate::numeric::Algebraic;

        /// The tangent slope is the derivative itself.
        #[must_use]
        #[inline]
        pub fn from_x<N: Algebraic>(derivative: N) -> N {
            derivative
        }
    }
}

pub mod normal_line {
    use crate::numeric::Algebraic;

    use super::Line;

    /// Line through `(x, value)` perpendicular to the tangent of slope
    /// `slope`.
    ///
    /// At exactly `x = 0` this returns the y axis `(1, 0, 0)` regardless of
    /// `value` and `slope`. Elsewhere a zero `slope` divides by zero.
    #[must_use]
    pub fn from_x<N: Algebraic>(x: N, value: N, slope: N) -> Line<N> {
        if x == N::zero() {
            return Line::new(N::one(), N::zero(), N::zero());
        }
        let m = self::slope::from_x(slope);
        Line::new(-m, N::one(), m * x - value)
    }

    pub mod slope {
        use crate::numeric::Algebraic;

        /// `-1 / derivative`. A zero derivative is not guarded.
        #[must_use]
        #[inline]
        pub fn from_x<N: Algebraic>(derivative: N) -> N {
            -(N::one() / derivative)
        }
    }
}
