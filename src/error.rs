use thiserror::Error;

/// Top-level error type for the trigeo crate.
///
/// The formulas themselves never fail; only the checked entry points
/// (such as [`crate::math::sampling::SamplingParams`]) report errors.
#[derive(Debug, Error)]
pub enum TrigeoError {
    #[error(transparent)]
    Sampling(#[from] SamplingError),
}

/// Errors describing a sampling run that would produce no points or never
/// terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SamplingError {
    #[error("empty sampling range: `from` must be less than `to`")]
    EmptyRange,

    #[error("step does not advance from `from` toward `to`")]
    NonAdvancingStep,

    #[error("point count must be positive")]
    ZeroCount,
}

/// Convenience type alias for results using [`TrigeoError`].
pub type Result<T> = std::result::Result<T, TrigeoError>;
