use clap::ValueEnum;

/// An ADC count as recorded by the digitizer.
pub type Intensity = u16;

/// Polarity of the recorded detector signal, i.e. whether pulses of interest
/// excurse above or below the pedestal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Polarity {
    /// Pulses rise above the pedestal.
    Positive,
    /// Pulses dip below the pedestal.
    Negative,
}

impl Polarity {
    /// Sign to fold into the calibration scale so that calibrated pulses of
    /// interest are always negative-going, the convention the feature
    /// extractors assume.
    pub fn sign(&self) -> f64 {
        match self {
            Polarity::Positive => -1.0,
            Polarity::Negative => 1.0,
        }
    }
}
