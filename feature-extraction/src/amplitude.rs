use crate::{
    Real,
    error::{ExtractionError, ExtractionResult},
    parabola::{ParabolicFit, fit_parabola},
};

/// Number of samples either side of the observed minimum included in the
/// refinement window.
const FIT_HALF_WINDOW: usize = 3;

/// Refined pulse amplitude together with the fit that produced it.
///
/// The fit and its source points are returned by value so that a display
/// collaborator can plot the refinement without the extractor retaining any
/// state between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct AmplitudeFeature {
    /// Pulse amplitude as a positive magnitude.
    pub amplitude: Real,
    pub fit: ParabolicFit,
    /// The `(sample index, value)` points the fit was made over.
    pub points: Vec<(Real, Real)>,
}

/// Extracts the pulse amplitude from a calibrated, negative-going trace.
///
/// The observed minimum is located (excluding sample 0, which may carry a
/// digitizer artifact and is never the true peak) and refined by fitting a
/// parabola to the samples within `FIT_HALF_WINDOW` either side of it,
/// clipped to the trace bounds. The refined amplitude is the negated vertex
/// value, which is more robust to single-sample noise than the raw minimum.
pub fn extract_amplitude(trace: &[Real]) -> ExtractionResult<AmplitudeFeature> {
    if trace.len() < 2 {
        return Err(ExtractionError::EmptyInput(trace.len()));
    }
    let i_min = trace
        .iter()
        .enumerate()
        .skip(1)
        .fold(1, |best, (i, value)| {
            if *value < trace[best] { i } else { best }
        });

    let begin = i_min.saturating_sub(FIT_HALF_WINDOW);
    let end = (i_min + FIT_HALF_WINDOW).min(trace.len() - 1);
    let points: Vec<(Real, Real)> = trace
        .iter()
        .enumerate()
        .take(end + 1)
        .skip(begin)
        .map(|(i, value)| (i as Real, *value))
        .collect();

    let fit = fit_parabola(&points, (begin as Real, end as Real))?;
    Ok(AmplitudeFeature {
        amplitude: -fit.p0,
        fit,
        points,
    })
}
