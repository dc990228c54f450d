//! Generic math functions and plane geometry.
//!
//! Formulas are written once against small numeric capability traits
//! ([`numeric`]) and work for `f32`, `f64`, or any type implementing the
//! capabilities they ask for.

pub mod error;
pub mod function;
pub mod math;
pub mod numeric;

pub use error::{Result, SamplingError, TrigeoError};
pub use function::{Descriptor, Interval, MathFunction};
pub use math::{Cartesian, Line, Polar};
