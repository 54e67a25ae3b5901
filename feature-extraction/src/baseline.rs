use crate::{
    Real,
    error::{ExtractionError, ExtractionResult},
};

/// Estimates the baseline of a trace as the arithmetic mean of `length`
/// consecutive samples beginning at `begin`.
///
/// The window must lie entirely within the trace and must not be empty,
/// otherwise [ExtractionError::InvalidWindow] is returned.
pub fn estimate_baseline(trace: &[Real], begin: usize, length: usize) -> ExtractionResult<Real> {
    let window = begin
        .checked_add(length)
        .filter(|end| length > 0 && *end <= trace.len())
        .and_then(|end| trace.get(begin..end));
    match window {
        Some(window) => Ok(window.iter().sum::<Real>() / length as Real),
        None => Err(ExtractionError::InvalidWindow {
            begin,
            length,
            trace_len: trace.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn constant_window_is_exact() {
        let trace = [7.25; 16];
        assert_eq!(estimate_baseline(&trace, 0, 16), Ok(7.25));
        assert_eq!(estimate_baseline(&trace, 5, 4), Ok(7.25));
    }

    #[test]
    fn mean_of_varying_window() {
        let trace = [1.0, 2.0, 3.0, 4.0, 10.0];
        assert_approx_eq!(
            estimate_baseline(&trace, 0, 4).expect("window should be valid"),
            2.5
        );
        assert_approx_eq!(
            estimate_baseline(&trace, 3, 2).expect("window should be valid"),
            7.0
        );
    }

    #[test]
    fn empty_window_is_rejected() {
        let trace = [1.0, 2.0, 3.0];
        assert_eq!(
            estimate_baseline(&trace, 1, 0),
            Err(ExtractionError::InvalidWindow {
                begin: 1,
                length: 0,
                trace_len: 3
            })
        );
    }

    #[test]
    fn out_of_bounds_window_is_rejected() {
        let trace = [1.0, 2.0, 3.0];
        assert_eq!(
            estimate_baseline(&trace, 2, 2),
            Err(ExtractionError::InvalidWindow {
                begin: 2,
                length: 2,
                trace_len: 3
            })
        );
        assert_eq!(
            estimate_baseline(&trace, 5, 1),
            Err(ExtractionError::InvalidWindow {
                begin: 5,
                length: 1,
                trace_len: 3
            })
        );
    }
}
