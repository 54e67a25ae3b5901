use crate::{Real, baseline::estimate_baseline, error::ExtractionResult};

/// Produces a calibrated copy of a raw trace.
///
/// The baseline is estimated over the inclusive window
/// `[baseline_begin, baseline_end]` and every output sample is
/// `(raw - baseline) * scale`. A negative `scale` inverts the polarity, which
/// callers use to make pulses of interest negative-going regardless of how
/// the digitizer recorded them.
pub fn calibrate(
    trace: &[Real],
    scale: Real,
    baseline_begin: usize,
    baseline_end: usize,
) -> ExtractionResult<Vec<Real>> {
    // An inverted window maps to length zero, which the baseline step rejects.
    let length = baseline_end
        .checked_sub(baseline_begin)
        .and_then(|d| d.checked_add(1))
        .unwrap_or(0);
    let baseline = estimate_baseline(trace, baseline_begin, length)?;
    Ok(trace.iter().map(|raw| (raw - baseline) * scale).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractionError;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn affine_in_every_sample() {
        let trace = [2.0, 2.0, 2.0, 2.0, -8.0, -6.0, 2.0];
        let calibrated = calibrate(&trace, 3.0, 0, 3).expect("calibration should succeed");
        assert_eq!(calibrated.len(), trace.len());
        for (raw, value) in trace.iter().zip(&calibrated) {
            assert_approx_eq!(*value, (raw - 2.0) * 3.0);
        }
    }

    #[test]
    fn baseline_region_calibrates_to_zero() {
        let trace = [4.5, 4.5, 4.5, 4.5, -1.0, 0.0];
        let calibrated = calibrate(&trace, 1.0, 0, 3).expect("calibration should succeed");
        for value in &calibrated[0..4] {
            assert_approx_eq!(*value, 0.0);
        }
    }

    #[test]
    fn negative_scale_inverts_polarity() {
        let trace = [0.0, 0.0, 10.0, 8.0, 0.0];
        let calibrated = calibrate(&trace, -1.0, 0, 1).expect("calibration should succeed");
        assert_approx_eq!(calibrated[2], -10.0);
        assert_approx_eq!(calibrated[3], -8.0);
    }

    #[test]
    fn inverted_window_is_rejected() {
        let trace = [1.0, 2.0, 3.0];
        assert_eq!(
            calibrate(&trace, 1.0, 2, 1),
            Err(ExtractionError::InvalidWindow {
                begin: 2,
                length: 0,
                trace_len: 3
            })
        );
    }

    #[test]
    fn window_past_end_is_rejected() {
        let trace = [1.0, 2.0, 3.0];
        assert_eq!(
            calibrate(&trace, 1.0, 1, 3),
            Err(ExtractionError::InvalidWindow {
                begin: 1,
                length: 3,
                trace_len: 3
            })
        );
    }
}
