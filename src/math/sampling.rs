//! Lazy point sequences along a function's graph.

use core::fmt;

use crate::error::{Result, SamplingError};
use crate::numeric::{Algebraic, FromCount};

use super::Cartesian;

/// Points `(x, f(x))` for `x = from, from + step, ...` while `x < to`.
///
/// Pull-based: `f` is evaluated only when the next point is requested.
/// The end of the range is never produced. Cloning an unstarted sequence
/// (or calling the constructor again) restarts the walk from `from`.
///
/// Each `x` is computed as `from + i·step` rather than by repeated
/// addition, so rounding does not drift along the sequence.
#[derive(Clone)]
pub struct Points<N, F> {
    function: F,
    from: N,
    to: N,
    step: N,
    /// Steps taken so far, kept in `N` so `from + index·step` needs no
    /// conversion.
    index: N,
    /// Points left for count-based sequences.
    remaining: Option<usize>,
}

impl<N: Algebraic, F> Points<N, F> {
    /// The `x` of the next point, whether or not it will be produced.
    #[must_use]
    pub fn current_x(&self) -> N {
        self.from + self.index * self.step
    }

    #[must_use]
    pub fn step(&self) -> N {
        self.step
    }

    fn limited(mut self, count: usize) -> Self {
        self.remaining = Some(count);
        self
    }
}

impl<N: Algebraic, F: Fn(N) -> N> Iterator for Points<N, F> {
    type Item = Cartesian<N>;

    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == Some(0) {
            return None;
        }
        let x = self.current_x();
        if !(x < self.to) {
            return None;
        }
        self.index += N::one();
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        Some(Cartesian::new(x, (self.function)(x)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.remaining)
    }
}

impl<N: fmt::Debug, F> fmt::Debug for Points<N, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Points")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("step", &self.step)
            .field("index", &self.index)
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

pub mod points {
    use crate::numeric::{Algebraic, FromCount};

    use super::Points;

    /// Samples `function` on `[from, to)` every `step`.
    ///
    /// A zero step, or one pointing away from `to`, yields an endless
    /// sequence; use [`SamplingParams`](super::SamplingParams) to reject
    /// such input up front.
    #[must_use]
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn from_step<N, F>(function: F, from: N, to: N, step: N) -> Points<N, F>
    where
        N: Algebraic,
        F: Fn(N) -> N,
    {
        tracing::debug!(?from, ?to, ?step, "sampling points");
        if from < to && !(from + step > from) {
            tracing::warn!(?from, ?step, "step does not advance, point sequence is endless");
        }
        Points {
            function,
            from,
            to,
            step,
            index: N::zero(),
            remaining: None,
        }
    }

    /// Samples `function` with `count` evenly spaced points on `[from, to)`.
    ///
    /// The step is `(to - from) / count`. The sequence stops after `count`
    /// points even when rounding leaves the next `x` just below `to`.
    #[must_use]
    pub fn from_count<N, F>(function: F, from: N, to: N, count: usize) -> Points<N, F>
    where
        N: FromCount,
        F: Fn(N) -> N,
    {
        from_step(function, from, to, (to - from) / N::from_count(count)).limited(count)
    }
}

/// How consecutive sample positions are spaced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Spacing<N> {
    /// Fixed distance between consecutive `x` values.
    Step(N),
    /// Number of evenly spaced points.
    Count(usize),
}

/// Parameters describing a sampling run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams<N> {
    /// First `x` sampled.
    pub from: N,
    /// Exclusive end of the range.
    pub to: N,
    /// Spacing between samples.
    pub spacing: Spacing<N>,
}

impl<N: FromCount> Default for SamplingParams<N> {
    fn default() -> Self {
        Self {
            from: N::zero(),
            to: N::one(),
            spacing: Spacing::Count(100),
        }
    }
}

impl<N: FromCount> SamplingParams<N> {
    /// Creates parameters for a fixed step.
    #[must_use]
    pub fn with_step(from: N, to: N, step: N) -> Self {
        Self {
            from,
            to,
            spacing: Spacing::Step(step),
        }
    }

    /// Creates parameters for a fixed number of points.
    #[must_use]
    pub fn with_count(from: N, to: N, count: usize) -> Self {
        Self {
            from,
            to,
            spacing: Spacing::Count(count),
        }
    }

    /// The step these parameters resolve to.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is empty, the count is zero, or the
    /// step does not move `from` toward `to`.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn step(&self) -> Result<N> {
        if !(self.from < self.to) {
            return Err(SamplingError::EmptyRange.into());
        }
        let step = match self.spacing {
            Spacing::Step(step) => step,
            Spacing::Count(0) => return Err(SamplingError::ZeroCount.into()),
            Spacing::Count(count) => (self.to - self.from) / N::from_count(count),
        };
        if !(self.from + step > self.from) {
            return Err(SamplingError::NonAdvancingStep.into());
        }
        Ok(step)
    }

    /// Checks that sampling with these parameters terminates.
    ///
    /// # Errors
    ///
    /// See [`step`](Self::step).
    pub fn validate(&self) -> Result<()> {
        self.step().map(|_| ())
    }

    /// Samples `function` with these parameters.
    ///
    /// # Errors
    ///
    /// See [`step`](Self::step).
    pub fn points<F: Fn(N) -> N>(&self, function: F) -> Result<Points<N, F>> {
        let step = self.step()?;
        let points = points::from_step(function, self.from, self.to, step);
        Ok(match self.spacing {
            Spacing::Count(count) => points.limited(count),
            Spacing::Step(_) => points,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::PI;
    use std::io;
    use std::sync::{Arc, Mutex};

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::TrigeoError;
    use crate::function::{MathFunction, Sine};

    fn square(x: f64) -> f64 {
        x * x
    }

    #[test]
    fn from_step_is_half_open() {
        let pts: Vec<_> = points::from_step(square, 0.0, 10.0, 2.0).collect();
        let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 2.0, 4.0, 6.0, 8.0]);
        for p in &pts {
            assert_eq!(p.y, square(p.x));
        }
    }

    #[test]
    fn from_step_pairs_with_function_values() {
        let pts: Vec<_> = points::from_step(Sine::eval, 0.0_f64, 1.0, 0.25).collect();
        assert_eq!(pts.len(), 4);
        assert_eq!(pts[3].y, 0.75_f64.sin());
    }

    #[test]
    fn from_step_is_restartable() {
        let seq = points::from_step(square, 1.0, 4.0, 1.0);
        let first: Vec<_> = seq.clone().collect();
        let second: Vec<_> = seq.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn from_step_is_lazy() {
        use std::cell::Cell;

        let calls = Cell::new(0);
        let mut seq = points::from_step(
            |x: f64| {
                calls.set(calls.get() + 1);
                x
            },
            0.0,
            100.0,
            1.0,
        );
        assert_eq!(calls.get(), 0);
        seq.next();
        seq.next();
        assert_eq!(calls.get(), 2);
        assert_eq!(seq.current_x(), 2.0);
    }

    #[test]
    fn from_step_empty_when_range_is_empty() {
        assert_eq!(points::from_step(square, 5.0, 5.0, 1.0).count(), 0);
        assert_eq!(points::from_step(square, 6.0, 5.0, 1.0).count(), 0);
    }

    #[test]
    fn zero_step_is_not_guarded() {
        let pts: Vec<_> = points::from_step(square, 0.0, 1.0, 0.0).take(50).collect();
        assert_eq!(pts.len(), 50);
        assert!(pts.iter().all(|p| p.x == 0.0));
    }

    #[test]
    fn from_count_spreads_evenly() {
        let xs: Vec<f64> = points::from_count(square, 0.0, 10.0, 5).map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 2.0, 4.0, 6.0, 8.0]);

        let xs: Vec<f64> = points::from_count(square, 2.0, 4.0, 4).map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 2.5, 3.0, 3.5]);
    }

    #[test]
    fn from_count_yields_exactly_count_points() {
        // Steps like 1/10 and 1/49 are inexact in binary.
        for count in [3, 7, 10, 20, 49, 100, 1000] {
            let xs: Vec<f64> = points::from_count(|x| x, 0.0, 1.0, count).map(|p| p.x).collect();
            assert_eq!(xs.len(), count, "count={count}");
            assert!(xs.iter().all(|&x| x < 1.0), "count={count}");
        }
        assert_eq!(points::from_count(square, -PI, PI, 8).count(), 8);
    }

    #[test]
    fn from_count_positions_do_not_drift() {
        let xs: Vec<f64> = points::from_count(|x| x, 0.0, 1.0, 10).map(|p| p.x).collect();
        for (i, x) in xs.into_iter().enumerate() {
            assert_abs_diff_eq!(x, f64::from(u32::try_from(i).unwrap()) / 10.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn from_count_clone_restarts() {
        let seq = points::from_count(square, 0.0, 1.0, 10);
        assert_eq!(seq.size_hint(), (0, Some(10)));
        let first: Vec<_> = seq.clone().collect();
        assert_eq!(first, seq.collect::<Vec<_>>());
    }

    #[test]
    fn integer_sampling() {
        let ys: Vec<i64> = points::from_step(|x: i64| 3 * x, 0, 7, 3).map(|p| p.y).collect();
        assert_eq!(ys, vec![0, 9, 18]);
    }

    // ── SamplingParams ──

    #[test]
    fn params_default() {
        let params = SamplingParams::<f64>::default();
        assert_eq!(params.from, 0.0);
        assert_eq!(params.to, 1.0);
        assert_eq!(params.spacing, Spacing::Count(100));
        assert!((params.step().unwrap() - 0.01).abs() < 1e-15);
    }

    #[test]
    fn params_resolve_step() {
        assert_eq!(SamplingParams::with_step(0.0, 10.0, 2.0).step().unwrap(), 2.0);
        assert_eq!(SamplingParams::with_count(0.0, 10.0, 4).step().unwrap(), 2.5);
    }

    #[test]
    fn params_points_match_unchecked() {
        let params = SamplingParams::with_step(0.0, 10.0, 2.0);
        let checked: Vec<_> = params.points(square).unwrap().collect();
        let unchecked: Vec<_> = points::from_step(square, 0.0, 10.0, 2.0).collect();
        assert_eq!(checked, unchecked);
    }

    #[test]
    fn params_count_yields_exactly_count_points() {
        let params = SamplingParams::with_count(0.0, 1.0, 10);
        assert_eq!(params.points(square).unwrap().count(), 10);
        assert_eq!(SamplingParams::<f64>::default().points(square).unwrap().count(), 100);
    }

    #[test]
    fn params_reject_empty_range() {
        let err = SamplingParams::with_step(1.0, 1.0, 0.5).validate().unwrap_err();
        assert!(matches!(err, TrigeoError::Sampling(SamplingError::EmptyRange)));
        let err = SamplingParams::with_count(f64::NAN, 1.0, 3).validate().unwrap_err();
        assert!(matches!(err, TrigeoError::Sampling(SamplingError::EmptyRange)));
    }

    #[test]
    fn params_reject_zero_count() {
        let err = SamplingParams::with_count(0.0, 1.0, 0).points(square).unwrap_err();
        assert!(matches!(err, TrigeoError::Sampling(SamplingError::ZeroCount)));
    }

    #[test]
    fn params_reject_non_advancing_step() {
        for step in [0.0, -1.0, f64::NAN] {
            let err = SamplingParams::with_step(0.0, 1.0, step).validate().unwrap_err();
            assert!(
                matches!(err, TrigeoError::Sampling(SamplingError::NonAdvancingStep)),
                "step={step}"
            );
        }
        // Too small to change `from` at this magnitude.
        let err = SamplingParams::with_step(1e20, 2e20, 1.0).validate().unwrap_err();
        assert!(matches!(err, TrigeoError::Sampling(SamplingError::NonAdvancingStep)));
    }

    // ── Logging ──

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn logged_warnings(run: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, run);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn non_advancing_step_warns() {
        for step in [0.0, -1.0] {
            let out = logged_warnings(|| {
                let _ = points::from_step(square, 0.0, 1.0, step);
            });
            assert!(out.contains("WARN"), "step={step}: {out}");
            assert!(out.contains("step does not advance"), "step={step}: {out}");
        }
    }

    #[test]
    fn advancing_step_does_not_warn() {
        let out = logged_warnings(|| {
            let _ = points::from_step(square, 0.0, 1.0, 0.25);
            let _ = points::from_count(square, 0.0, 1.0, 10);
            // Empty range: nothing to walk, nothing to warn about.
            let _ = points::from_step(square, 1.0, 0.0, 0.0);
        });
        assert!(out.is_empty(), "{out}");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            TrigeoError::from(SamplingError::ZeroCount).to_string(),
            "point count must be positive"
        );
    }
}
