use crate::Real;
use thiserror::Error;

pub type ExtractionResult<T> = Result<T, ExtractionError>;

/// Classified failure modes of the feature extractors.
///
/// Every failure is detected at the point of violation and returned to the
/// immediate caller; no sentinel value ever stands in for a result. All
/// failures are deterministic functions of the inputs, so none is worth
/// retrying.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractionError {
    #[error("sampling frequency must be positive, got {0} GHz")]
    NonPositiveSamplingFrequency(Real),

    #[error("window of {length} samples at {begin} is invalid for a trace of {trace_len} samples")]
    InvalidWindow {
        begin: usize,
        length: usize,
        trace_len: usize,
    },

    #[error("amplitude extraction requires at least 2 samples, got {0}")]
    EmptyInput(usize),

    #[error("parabolic fit requires at least 3 distinct abscissae, got {0}")]
    InsufficientPoints(usize),

    #[error("parabolic fit is degenerate over the requested window")]
    DegenerateFit,

    #[error("CFD delay of {delay} samples must be less than the trace length {trace_len}")]
    InvalidDelay { delay: usize, trace_len: usize },

    #[error("derived CFD signal never rises above zero")]
    NoPositiveLobe,

    #[error("derived CFD signal maximum (sample {i_max}) follows its minimum (sample {i_min})")]
    WrongLobeOrder { i_max: usize, i_min: usize },

    #[error("derived CFD signal has no zero crossing between samples {begin} and {end}")]
    NoZeroCrossing { begin: usize, end: usize },

    #[error("refined parabola has no real zero crossing (discriminant {0})")]
    NoRealRoot(Real),
}
