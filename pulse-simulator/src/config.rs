//! Deserializable description of the traces to simulate.
use rand::Rng;
use rand_distr::{Distribution as RandDistribution, Normal};
use serde::Deserialize;

/// A scalar whose value is drawn afresh for every trace.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case", untagged)]
pub(crate) enum Distribution {
    Constant(f64),
    Uniform { min: f64, max: f64 },
    Normal { mean: f64, sd: f64 },
}

impl Distribution {
    pub(crate) fn sample(&self, rng: &mut impl Rng) -> f64 {
        match self {
            Self::Constant(value) => *value,
            Self::Uniform { min, max } => rng.random_range(*min..*max),
            Self::Normal { mean, sd } => Normal::new(*mean, *sd)
                .map(|normal| normal.sample(rng))
                .unwrap_or(*mean),
        }
    }
}

/// Shape parameters of a single simulated pulse.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case", rename_all_fields = "kebab-case", tag = "type")]
pub(crate) enum PulseAttributes {
    Flat {
        start: Distribution,
        width: Distribution,
        depth: Distribution,
    },
    Triangular {
        start: Distribution,
        peak_time: Distribution,
        width: Distribution,
        depth: Distribution,
    },
    Gaussian {
        peak_time: Distribution,
        sd: Distribution,
        depth: Distribution,
    },
    Biexp {
        start: Distribution,
        decay: Distribution,
        rise: Distribution,
        depth: Distribution,
    },
}

/// Additive gaussian noise applied to every sample, smoothed with an
/// exponential moving average.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct NoiseAttributes {
    pub(crate) sd: Distribution,
    #[serde(default)]
    pub(crate) smoothing_factor: f64,
}

/// Description of one channel's worth of simulated traces.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub(crate) struct TraceTemplate {
    /// Number of samples per trace.
    pub(crate) samples: usize,
    /// ADC level the trace sits at before and after pulses.
    pub(crate) pedestal: Distribution,
    /// Pulses rendered into each trace, negative-going from the pedestal.
    pub(crate) pulses: Vec<PulseAttributes>,
    pub(crate) noise: Option<NoiseAttributes>,
}
