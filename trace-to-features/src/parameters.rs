//! Defines the parameters controlling calibration and timing extraction.
use clap::Args;
use wfd_common::Polarity;
use wfd_feature_extraction::Real;

/// Settings used to calibrate a raw trace against its pre-pulse baseline.
#[derive(Debug, Clone, Args)]
pub(crate) struct CalibrationParameters {
    /// First sample of the baseline-estimation window.
    #[clap(long, default_value = "0")]
    pub(crate) baseline_begin: usize,

    /// Last sample of the baseline-estimation window, inclusive. The window
    /// should lie entirely before the pulse's leading edge.
    #[clap(long, default_value = "31")]
    pub(crate) baseline_end: usize,

    /// Multiplicative scale applied after baseline subtraction, in physical
    /// units per ADC count.
    #[clap(long, default_value = "1.0")]
    pub(crate) scale: Real,

    /// Polarity of the recorded pulses. Positive-going traces are inverted
    /// during calibration so that the extractors always see negative-going
    /// pulses.
    #[clap(long, value_enum, default_value = "negative")]
    pub(crate) polarity: Polarity,
}

impl CalibrationParameters {
    /// The scale with the polarity correction folded in.
    pub(crate) fn effective_scale(&self) -> Real {
        self.scale * self.polarity.sign()
    }
}

/// Settings of the constant-fraction discriminator.
#[derive(Debug, Clone, Args)]
pub(crate) struct CfdParameters {
    /// Attenuation constant applied to the undelayed copy of the pulse.
    #[clap(long, default_value = "0.5")]
    pub(crate) constant: Real,

    /// Delay, in samples, applied to the unattenuated copy of the pulse.
    #[clap(long, default_value = "4")]
    pub(crate) delay: usize,
}
