//! Extracts timing and amplitude features from digitized detector pulses.
//!
//! A trace takes the form of a slice of scalar voltage samples captured at a
//! fixed rate by a waveform digitizer. Typical usage calibrates the raw trace
//! against its pre-pulse baseline and then runs the extractors over it:
//! ```rust
//! use wfd_feature_extraction::FeatureExtractor;
//!
//! # fn main() -> Result<(), wfd_feature_extraction::ExtractionError> {
//! let trace = [0.0, 0.0, 0.0, -10.0, -8.0, -5.0, 0.0, 0.0];
//! let extractor = FeatureExtractor::new(1.0)?;     // 1 GHz sampling
//! let calibrated = extractor.calibrate(&trace, 1.0, 0, 2)?;
//! let amplitude = extractor.extract_amplitude(&calibrated)?;
//! let timing = extractor.extract_crossing_time(&calibrated, 0.5, 2)?;
//! # Ok(())
//! # }
//! ```
//!
//! Every extraction call is a pure function of its inputs and returns its
//! result by value, so distinct traces may be processed concurrently without
//! coordination.

pub mod amplitude;
pub mod baseline;
pub mod calibration;
pub mod cfd;
pub mod error;
pub mod extractor;
pub mod parabola;

pub use amplitude::{AmplitudeFeature, extract_amplitude};
pub use baseline::estimate_baseline;
pub use calibration::calibrate;
pub use cfd::{TimingFeature, extract_crossing_time};
pub use error::{ExtractionError, ExtractionResult};
pub use extractor::FeatureExtractor;
pub use parabola::{ParabolicFit, fit_parabola};

pub type Real = f64;
