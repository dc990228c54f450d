pub mod graph;
pub mod line_2d;
pub mod sampling;
pub mod vector_2d;

pub use line_2d::Line;
pub use vector_2d::Polar;

/// 2D vector in cartesian form.
pub type Cartesian<N> = nalgebra::Vector2<N>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
