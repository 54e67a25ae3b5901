use crate::{
    Real,
    amplitude::{self, AmplitudeFeature},
    baseline, calibration, cfd,
    cfd::TimingFeature,
    error::{ExtractionError, ExtractionResult},
};

/// Feature-extraction engine bound to the digitizer's sampling frequency.
///
/// The sampling frequency is the engine's only configuration; it is used
/// solely to convert sample indices to nanoseconds for CFD timing. The engine
/// holds no other state, so one instance may serve any number of traces from
/// any number of threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureExtractor {
    sample_time: Real,
}

impl FeatureExtractor {
    /// Creates an engine for a digitizer sampling at `sampling_frequency_ghz`.
    pub fn new(sampling_frequency_ghz: Real) -> ExtractionResult<Self> {
        if sampling_frequency_ghz.is_finite() && sampling_frequency_ghz > 0.0 {
            Ok(Self {
                sample_time: 1.0 / sampling_frequency_ghz,
            })
        } else {
            Err(ExtractionError::NonPositiveSamplingFrequency(
                sampling_frequency_ghz,
            ))
        }
    }

    /// The sampling interval in nanoseconds.
    pub fn sample_time(&self) -> Real {
        self.sample_time
    }

    /// See [baseline::estimate_baseline].
    pub fn estimate_baseline(
        &self,
        trace: &[Real],
        begin: usize,
        length: usize,
    ) -> ExtractionResult<Real> {
        baseline::estimate_baseline(trace, begin, length)
    }

    /// See [calibration::calibrate].
    pub fn calibrate(
        &self,
        trace: &[Real],
        scale: Real,
        baseline_begin: usize,
        baseline_end: usize,
    ) -> ExtractionResult<Vec<Real>> {
        calibration::calibrate(trace, scale, baseline_begin, baseline_end)
    }

    /// See [amplitude::extract_amplitude].
    pub fn extract_amplitude(&self, trace: &[Real]) -> ExtractionResult<AmplitudeFeature> {
        amplitude::extract_amplitude(trace)
    }

    /// Extracts the CFD zero-crossing time, in nanoseconds, from a calibrated
    /// trace. See [cfd::extract_crossing_time].
    pub fn extract_crossing_time(
        &self,
        calibrated: &[Real],
        constant: Real,
        delay: usize,
    ) -> ExtractionResult<TimingFeature> {
        cfd::extract_crossing_time(calibrated, constant, delay, self.sample_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn sampling_frequency_must_be_positive() {
        assert_eq!(
            FeatureExtractor::new(0.0),
            Err(ExtractionError::NonPositiveSamplingFrequency(0.0))
        );
        assert_eq!(
            FeatureExtractor::new(-2.0),
            Err(ExtractionError::NonPositiveSamplingFrequency(-2.0))
        );
        assert!(FeatureExtractor::new(Real::NAN).is_err());
    }

    #[test]
    fn sample_time_is_the_reciprocal_frequency() {
        let extractor = FeatureExtractor::new(2.0).expect("frequency should be valid");
        assert_approx_eq!(extractor.sample_time(), 0.5);
    }

    #[test]
    fn calibrated_reference_trace_round_trip() {
        // Baseline region [0, 2] averages to zero, so with unit scale the
        // calibrated trace equals the input.
        let trace = [0.0, 0.0, 0.0, -10.0, -8.0, -5.0, 0.0, 0.0];
        let extractor = FeatureExtractor::new(1.0).expect("frequency should be valid");
        let calibrated = extractor
            .calibrate(&trace, 1.0, 0, 2)
            .expect("calibration should succeed");
        assert_eq!(calibrated.as_slice(), trace.as_slice());
        let feature = extractor
            .extract_amplitude(&calibrated)
            .expect("extraction should succeed");
        assert_approx_eq!(feature.amplitude, 6.468936, 1e-5);
    }
}
