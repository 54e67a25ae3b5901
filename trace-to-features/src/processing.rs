use crate::{
    loader::load_trace_file,
    parameters::{CalibrationParameters, CfdParameters},
};
use std::{fmt::Display, path::Path};
use tracing::warn;
use wfd_feature_extraction::{FeatureExtractor, Real};

/// Features extracted from one trace file. Failures of any stage — loading,
/// calibration or extraction — are logged and recorded as empty fields; a
/// failure on one trace never aborts the batch.
#[derive(Debug)]
pub(crate) struct FeatureRow {
    pub(crate) path: String,
    pub(crate) amplitude: Option<Real>,
    pub(crate) crossing_time: Option<Real>,
}

impl FeatureRow {
    pub(crate) const HEADER: &'static str = "trace,amplitude,crossing_time_ns";
}

impl Display for FeatureRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn field(value: &Option<Real>) -> String {
            value.map(|v| v.to_string()).unwrap_or_default()
        }
        write!(
            f,
            "{0},{1},{2}",
            self.path,
            field(&self.amplitude),
            field(&self.crossing_time)
        )
    }
}

/// Runs the full pipeline over one trace file: load, calibrate, then extract
/// amplitude and CFD crossing time.
pub(crate) fn process_trace_file(
    path: &Path,
    extractor: &FeatureExtractor,
    calibration: &CalibrationParameters,
    cfd: &CfdParameters,
) -> FeatureRow {
    let (amplitude, crossing_time) = match load_trace_file(path) {
        Ok(raw) => extract_features(path, &raw, extractor, calibration, cfd),
        Err(error) => {
            warn!("{}: {error:#}", path.display());
            (None, None)
        }
    };
    FeatureRow {
        path: path.display().to_string(),
        amplitude,
        crossing_time,
    }
}

fn extract_features(
    path: &Path,
    raw: &[Real],
    extractor: &FeatureExtractor,
    calibration: &CalibrationParameters,
    cfd: &CfdParameters,
) -> (Option<Real>, Option<Real>) {
    let calibrated = match extractor.calibrate(
        raw,
        calibration.effective_scale(),
        calibration.baseline_begin,
        calibration.baseline_end,
    ) {
        Ok(calibrated) => calibrated,
        Err(error) => {
            warn!("{}: calibration failed: {error}", path.display());
            return (None, None);
        }
    };

    let amplitude = extractor
        .extract_amplitude(&calibrated)
        .map_err(|error| warn!("{}: amplitude extraction failed: {error}", path.display()))
        .ok()
        .map(|feature| feature.amplitude);
    let crossing_time = extractor
        .extract_crossing_time(&calibrated, cfd.constant, cfd.delay)
        .map_err(|error| warn!("{}: timing extraction failed: {error}", path.display()))
        .ok()
        .map(|feature| feature.crossing_time);
    (amplitude, crossing_time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wfd_common::Polarity;

    fn parameters() -> (CalibrationParameters, CfdParameters) {
        (
            CalibrationParameters {
                baseline_begin: 0,
                baseline_end: 31,
                scale: 1.0,
                polarity: Polarity::Negative,
            },
            CfdParameters {
                constant: 0.5,
                delay: 4,
            },
        )
    }

    #[test]
    fn failed_extractions_leave_empty_fields() {
        let row = FeatureRow {
            path: "trace_0001.csv".into(),
            amplitude: Some(82.5),
            crossing_time: None,
        };
        assert_eq!(row.to_string(), "trace_0001.csv,82.5,");
    }

    #[test]
    fn calibration_failure_is_recorded_not_fatal() {
        // Two samples cannot contain the default 32-sample baseline window.
        let extractor = FeatureExtractor::new(1.0).expect("frequency should be valid");
        let (calibration, cfd) = parameters();
        let (amplitude, crossing_time) = extract_features(
            Path::new("short.csv"),
            &[8000.0, 7999.0],
            &extractor,
            &calibration,
            &cfd,
        );
        assert_eq!(amplitude, None);
        assert_eq!(crossing_time, None);
    }

    #[test]
    fn unreadable_trace_file_is_recorded_not_fatal() {
        let extractor = FeatureExtractor::new(1.0).expect("frequency should be valid");
        let (calibration, cfd) = parameters();
        let row = process_trace_file(
            Path::new("does-not-exist.csv"),
            &extractor,
            &calibration,
            &cfd,
        );
        assert_eq!(row.to_string(), "does-not-exist.csv,,");
    }
}
