//! Geometry of a [`MathFunction`]'s graph.

use crate::function::MathFunction;
use crate::numeric::{Algebraic, FromCount};

use super::line_2d::{normal_line, tangent_line, Line};
use super::sampling::{points, Points};
use super::Cartesian;

/// Graph-level geometry available for every [`MathFunction`].
///
/// ```
/// use trigeo::function::Sine;
/// use trigeo::math::{graph::Graph, Line};
///
/// assert_eq!(Sine::tangent_line_at(0.0_f64), Line::new(-1.0, 1.0, 0.0));
/// ```
pub trait Graph<N: Algebraic>: MathFunction<N> {
    /// The point `(x, f(x))`.
    #[must_use]
    fn point_at(x: N) -> Cartesian<N> {
        Cartesian::new(x, Self::eval(x))
    }

    /// Tangent line of the graph at `x`.
    #[must_use]
    fn tangent_line_at(x: N) -> Line<N> {
        let slope = tangent_line::slope::from_x(Self::derivative_eval(x));
        tangent_line::from_x(x, Self::eval(x), slope)
    }

    /// Normal line of the graph at `x`. The y axis at `x = 0`.
    #[must_use]
    fn normal_line_at(x: N) -> Line<N> {
        normal_line::from_x(x, Self::eval(x), Self::derivative_eval(x))
    }

    /// Points of the graph on `[from, to)` every `step`.
    #[must_use]
    fn samples_by_step(from: N, to: N, step: N) -> Points<N, fn(N) -> N> {
        points::from_step(Self::eval as fn(N) -> N, from, to, step)
    }

    /// `count` evenly spaced points of the graph on `[from, to)`.
    #[must_use]
    fn samples_by_count(from: N, to: N, count: usize) -> Points<N, fn(N) -> N>
    where
        N: FromCount,
    {
        points::from_count(Self::eval as fn(N) -> N, from, to, count)
    }
}

impl<N: Algebraic, F: MathFunction<N> + ?Sized> Graph<N> for F {}
