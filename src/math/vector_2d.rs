//! Conversions and derived quantities for 2D vectors.
//!
//! Operations are grouped by the quantity they compute (`magnitude`,
//! `polar_angle`, `distance`, ...) rather than attached to a vector type,
//! and each one asks only for the numeric capabilities it uses. Singular
//! inputs (`x = 0` for the polar angle, a zero vector for normalization)
//! are not intercepted: the result is whatever the numeric type's division
//! produces.

use crate::numeric::Algebraic;

use super::Cartesian;

/// 2D vector in polar form. The angle is in radians and never normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar<N> {
    /// Distance from the origin, conventionally non-negative.
    pub magnitude: N,
    /// Angle from the positive x axis, counter-clockwise.
    pub angle: N,
}

impl<N: Algebraic> Polar<N> {
    /// Creates a new polar vector.
    #[must_use]
    pub fn new(magnitude: N, angle: N) -> Self {
        Self { magnitude, angle }
    }
}

pub mod magnitude {
    use crate::numeric::{Roots, Trigonometric};

    use super::{cartesian, Cartesian};

    /// Length of `v`. Never negative.
    #[must_use]
    pub fn from_cartesian<N: Roots>(v: Cartesian<N>) -> N {
        v.x.hypot(v.y)
    }

    /// Length of the sum of `vectors`.
    #[must_use]
    pub fn from_cartesian_vectors<N, I>(vectors: I) -> N
    where
        N: Roots,
        I: IntoIterator<Item = Cartesian<N>>,
    {
        from_cartesian(cartesian::from_cartesian_vectors(vectors))
    }

    /// Length of the sum of two polar vectors of lengths `m1` and `m2`
    /// whose directions differ by `angle`.
    #[must_use]
    pub fn from_two_polar_vectors<N: Roots + Trigonometric>(m1: N, m2: N, angle: N) -> N {
        let two = N::one() + N::one();
        (m1 * m1 + m2 * m2 + two * m1 * m2 * angle.cos()).sqrt()
    }
}

pub mod x {
    use crate::numeric::Trigonometric;

    /// Horizontal component of a polar vector.
    #[must_use]
    pub fn from_polar<N: Trigonometric>(magnitude: N, angle: N) -> N {
        magnitude * angle.cos()
    }
}

pub mod y {
    use crate::numeric::Trigonometric;

    /// Vertical component of a polar vector.
    #[must_use]
    pub fn from_polar<N: Trigonometric>(magnitude: N, angle: N) -> N {
        magnitude * angle.sin()
    }
}

pub mod polar_angle {
    use crate::numeric::Trigonometric;

    use super::Cartesian;

    /// `atan(y / x)`, in `(-π/2, π/2)`.
    ///
    /// Vectors with `x < 0` get the angle of their negation. `x = 0` is not
    /// special-cased.
    #[must_use]
    pub fn from_cartesian<N: Trigonometric>(v: Cartesian<N>) -> N {
        (v.y / v.x).atan()
    }

    /// Four-quadrant angle `atan2(y, x)`, in `(-π, π]`.
    #[must_use]
    pub fn from_cartesian_full<N: Trigonometric>(v: Cartesian<N>) -> N {
        v.y.atan2(v.x)
    }
}

pub mod cartesian {
    use crate::numeric::{Algebraic, Roots, Signed, Trigonometric};

    use super::{magnitude, x, y, Cartesian, Polar};

    #[must_use]
    pub fn from_polar<N: Trigonometric>(p: Polar<N>) -> Cartesian<N> {
        Cartesian::new(
            x::from_polar(p.magnitude, p.angle),
            y::from_polar(p.magnitude, p.angle),
        )
    }

    /// Componentwise sum. An empty input sums to the zero vector.
    #[must_use]
    pub fn from_cartesian_vectors<N, I>(vectors: I) -> Cartesian<N>
    where
        N: Algebraic,
        I: IntoIterator<Item = Cartesian<N>>,
    {
        vectors.into_iter().fold(Cartesian::zeros(), |acc, v| acc + v)
    }

    /// `v` scaled to unit length. A zero vector is not guarded.
    #[must_use]
    pub fn normalized<N: Roots>(v: Cartesian<N>) -> Cartesian<N> {
        let m = magnitude::from_cartesian(v);
        Cartesian::new(v.x / m, v.y / m)
    }

    /// The sign of each component, `±1`. Zero components are not guarded.
    #[must_use]
    pub fn kvadrantized<N: Signed>(v: Cartesian<N>) -> Cartesian<N> {
        Cartesian::new(v.x / v.x.abs(), v.y / v.y.abs())
    }
}

pub mod polar {
    use crate::numeric::{Algebraic, Roots, Trigonometric};

    use super::{magnitude, polar_angle, Cartesian, Polar};

    /// Magnitude and [`polar_angle::from_cartesian`].
    #[must_use]
    pub fn from_cartesian<N: Roots + Trigonometric>(v: Cartesian<N>) -> Polar<N> {
        Polar::new(magnitude::from_cartesian(v), polar_angle::from_cartesian(v))
    }

    /// Magnitude and [`polar_angle::from_cartesian_full`]; round-trips in
    /// every quadrant.
    #[must_use]
    pub fn from_cartesian_full<N: Roots + Trigonometric>(v: Cartesian<N>) -> Polar<N> {
        Polar::new(
            magnitude::from_cartesian(v),
            polar_angle::from_cartesian_full(v),
        )
    }

    /// Unit magnitude, same angle.
    #[must_use]
    pub fn normalized<N: Algebraic>(p: Polar<N>) -> Polar<N> {
        Polar::new(N::one(), p.angle)
    }
}

pub mod normal1 {
    use crate::numeric::Algebraic;

    use super::Cartesian;

    /// `v` rotated 90° counter-clockwise.
    #[must_use]
    pub fn from_cartesian<N: Algebraic>(v: Cartesian<N>) -> Cartesian<N> {
        Cartesian::new(-v.y, v.x)
    }
}

pub mod normal2 {
    use crate::numeric::Algebraic;

    use super::Cartesian;

    /// `v` rotated 90° clockwise.
    #[must_use]
    pub fn from_cartesian<N: Algebraic>(v: Cartesian<N>) -> Cartesian<N> {
        Cartesian::new(v.y, -v.x)
    }
}

pub mod distance {
    use crate::numeric::{Roots, Trigonometric};

    use super::{direction, magnitude, Cartesian, Polar};

    /// Euclidean distance between two points.
    #[must_use]
    pub fn from_cartesian<N: Roots>(a: Cartesian<N>, b: Cartesian<N>) -> N {
        magnitude::from_cartesian(direction::from_cartesian(a, b))
    }

    /// Distance between two points in polar form, by the law of cosines.
    #[must_use]
    pub fn from_polar<N: Roots + Trigonometric>(a: Polar<N>, b: Polar<N>) -> N {
        let two = N::one() + N::one();
        let (r1, r2) = (a.magnitude, b.magnitude);
        (r1 * r1 + r2 * r2 - two * r1 * r2 * (a.angle - b.angle).cos()).sqrt()
    }
}

pub mod direction {
    use crate::numeric::Algebraic;

    use super::Cartesian;

    /// Unnormalized displacement `to - from`.
    #[must_use]
    pub fn from_cartesian<N: Algebraic>(from: Cartesian<N>, to: Cartesian<N>) -> Cartesian<N> {
        to - from
    }
}

pub mod dot_product {
    use crate::numeric::{Algebraic, Trigonometric};

    use super::Cartesian;

    #[must_use]
    pub fn from_cartesian<N: Algebraic>(a: Cartesian<N>, b: Cartesian<N>) -> N {
        a.dot(&b)
    }

    /// Dot product of two vectors of lengths `len1`, `len2` separated by
    /// `angle`.
    #[must_use]
    pub fn from_polar<N: Trigonometric>(len1: N, len2: N, angle: N) -> N {
        len1 * len2 * angle.cos()
    }
}

pub mod cross_product {
    use crate::numeric::Algebraic;

    use super::Cartesian;

    /// Signed area of the parallelogram spanned by `a` and `b` (the z
    /// component of the 3D cross product).
    #[must_use]
    pub fn from_cartesian<N: Algebraic>(a: Cartesian<N>, b: Cartesian<N>) -> N {
        a.x * b.y - a.y * b.x
    }
}
