//! Constant-Fraction-Discrimination timing.
//!
//! A delayed, unattenuated copy of the calibrated pulse minus an attenuated,
//! undelayed copy yields a bipolar signal whose zero-crossing time is largely
//! independent of pulse amplitude. The crossing is located by a coarse scan
//! and refined to sub-sample precision with a local parabolic fit.

use crate::{
    Real,
    error::{ExtractionError, ExtractionResult},
    parabola::{ParabolicFit, fit_parabola},
};

/// Refined zero-crossing time together with the fit that produced it.
///
/// Returned by value, fit context included, so a display collaborator needs
/// no retained extractor state.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingFeature {
    /// Zero-crossing time in nanoseconds from the start of the trace.
    pub crossing_time: Real,
    pub fit: ParabolicFit,
    /// The `(time, value)` points of the derived signal the fit was made over.
    pub points: Vec<(Real, Real)>,
}

/// Outcome of the coarse scan over the derived signal.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CoarseCrossing {
    i_max: usize,
    i_zerocross: usize,
}

/// Builds the bipolar derived signal. The first `delay + 1` samples have no
/// delayed counterpart and are defined to be zero; every later sample `i` is
/// `calibrated[i - delay] - calibrated[i] * constant`.
fn build_derived(calibrated: &[Real], constant: Real, delay: usize) -> Vec<Real> {
    calibrated
        .iter()
        .enumerate()
        .map(|(i, value)| {
            if i <= delay {
                0.0
            } else {
                calibrated[i - delay] - value * constant
            }
        })
        .collect()
}

/// Validates the shape of the derived signal and scans for the first
/// non-positive sample between its maximum and its minimum.
fn locate_crossing(derived: &[Real]) -> ExtractionResult<CoarseCrossing> {
    let (mut i_max, mut i_min) = (0, 0);
    for (i, value) in derived.iter().enumerate() {
        if *value > derived[i_max] {
            i_max = i;
        }
        if *value < derived[i_min] {
            i_min = i;
        }
    }
    if derived[i_max] < 0.0 {
        return Err(ExtractionError::NoPositiveLobe);
    }
    if i_max > i_min {
        return Err(ExtractionError::WrongLobeOrder { i_max, i_min });
    }
    let i_zerocross = (i_max..i_min)
        .find(|i| derived[*i] <= 0.0)
        .ok_or(ExtractionError::NoZeroCrossing {
            begin: i_max,
            end: i_min,
        })?;
    Ok(CoarseCrossing { i_max, i_zerocross })
}

/// Extracts the CFD zero-crossing time from a calibrated, negative-going
/// trace.
///
/// `constant` is the attenuation applied to the undelayed copy, `delay` the
/// shift (in samples) applied to the unattenuated copy, and `sample_time` the
/// sampling interval in nanoseconds. The coarse crossing is refined by
/// fitting a parabola to the derived signal over
/// `[i_max, i_zerocross + 1]` and solving it for zero; of the two algebraic
/// roots, the one nearer the coarse crossing is returned.
pub fn extract_crossing_time(
    calibrated: &[Real],
    constant: Real,
    delay: usize,
    sample_time: Real,
) -> ExtractionResult<TimingFeature> {
    if delay >= calibrated.len() {
        return Err(ExtractionError::InvalidDelay {
            delay,
            trace_len: calibrated.len(),
        });
    }
    let derived = build_derived(calibrated, constant, delay);
    let CoarseCrossing { i_max, i_zerocross } = locate_crossing(&derived)?;

    let last = (i_zerocross + 1).min(derived.len() - 1);
    let points: Vec<(Real, Real)> = derived
        .iter()
        .enumerate()
        .take(last + 1)
        .skip(i_max)
        .map(|(i, value)| (i as Real * sample_time, *value))
        .collect();
    let fit = fit_parabola(
        &points,
        (
            i_max as Real * sample_time,
            (i_zerocross + 1) as Real * sample_time,
        ),
    )?;

    let (lower, upper) = fit
        .zeros()
        .ok_or(ExtractionError::NoRealRoot(fit.zero_discriminant()))?;
    // The algebraic inverse of a parabola is two-fold ambiguous; prefer the
    // root consistent with the coarse, noise-robust scan.
    let raw_crossing = i_zerocross as Real * sample_time;
    let crossing_time = if (lower - raw_crossing).abs() <= (upper - raw_crossing).abs() {
        lower
    } else {
        upper
    };
    Ok(TimingFeature {
        crossing_time,
        fit,
        points,
    })
}
