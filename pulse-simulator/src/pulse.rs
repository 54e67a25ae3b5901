use crate::config::PulseAttributes;
use rand::Rng;

/// A single pulse with its shape parameters drawn from a template.
///
/// `value_at` returns the pulse's depth below the pedestal at a given time;
/// renderers subtract it so that simulated pulses are negative-going.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PulseEvent {
    Flat {
        start: f64,
        stop: f64,
        depth: f64,
    },
    Triangular {
        start: f64,
        peak_time: f64,
        stop: f64,
        depth: f64,
    },
    Gaussian {
        mean: f64,
        sd: f64,
        depth: f64,
    },
    Biexp {
        start: f64,
        decay: f64,
        rise: f64,
        coef: f64,
    },
}

impl PulseEvent {
    pub(crate) fn sample(template: &PulseAttributes, rng: &mut impl Rng) -> Self {
        match template {
            PulseAttributes::Flat {
                start,
                width,
                depth,
            } => {
                let start = start.sample(rng);
                Self::Flat {
                    start,
                    stop: start + width.sample(rng),
                    depth: depth.sample(rng),
                }
            }
            PulseAttributes::Triangular {
                start,
                peak_time,
                width,
                depth,
            } => {
                let start = start.sample(rng);
                let width = width.sample(rng);
                Self::Triangular {
                    start,
                    peak_time: start + peak_time.sample(rng) * width,
                    stop: start + width,
                    depth: depth.sample(rng),
                }
            }
            PulseAttributes::Gaussian {
                peak_time,
                sd,
                depth,
            } => Self::Gaussian {
                mean: peak_time.sample(rng),
                sd: sd.sample(rng),
                depth: depth.sample(rng),
            },
            PulseAttributes::Biexp {
                start,
                decay,
                rise,
                depth,
            } => {
                let decay = decay.sample(rng);
                let rise = rise.sample(rng);
                // Normalize so the peak of exp(-t/decay) - exp(-t/rise)
                // reaches the requested depth.
                let ratio = decay / rise;
                let peak_value = f64::powf(ratio, -1.0 / (ratio - 1.0))
                    - f64::powf(ratio, -ratio / (ratio - 1.0));
                Self::Biexp {
                    start: start.sample(rng),
                    decay,
                    rise,
                    coef: depth.sample(rng) / peak_value,
                }
            }
        }
    }

    /// Time at which the pulse is deepest.
    pub(crate) fn peak_time(&self) -> f64 {
        match self {
            Self::Flat { start, .. } => *start,
            Self::Triangular { peak_time, .. } => *peak_time,
            Self::Gaussian { mean, .. } => *mean,
            Self::Biexp {
                start, decay, rise, ..
            } => start + decay * rise / (decay - rise) * f64::ln(decay / rise),
        }
    }

    pub(crate) fn value_at(&self, time: f64) -> f64 {
        match *self {
            Self::Flat { start, stop, depth } => {
                if start <= time && time < stop {
                    depth
                } else {
                    f64::default()
                }
            }
            Self::Triangular {
                start,
                peak_time,
                stop,
                depth,
            } => {
                if start <= time && time < peak_time {
                    depth * (time - start) / (peak_time - start)
                } else if peak_time <= time && time < stop {
                    depth * (stop - time) / (stop - peak_time)
                } else {
                    f64::default()
                }
            }
            Self::Gaussian { mean, sd, depth } => {
                if time < mean - 6.0 * sd || time > mean + 6.0 * sd {
                    f64::default()
                } else {
                    depth * f64::exp(-f64::powi(0.5 * (time - mean) / sd, 2))
                }
            }
            Self::Biexp {
                start,
                decay,
                rise,
                coef,
            } => {
                if time < start {
                    f64::default()
                } else {
                    let time = time - start;
                    coef * (f64::exp(-time / decay) - f64::exp(-time / rise))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Distribution;
    use assert_approx_eq::assert_approx_eq;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn gaussian_depth_is_reached_at_the_peak() {
        let pulse = PulseEvent::Gaussian {
            mean: 300.0,
            sd: 16.0,
            depth: 450.0,
        };
        assert_approx_eq!(pulse.value_at(300.0), 450.0);
        assert!(pulse.value_at(250.0) < 450.0);
        assert_eq!(pulse.value_at(0.0), 0.0);
    }

    #[test]
    fn biexp_depth_is_reached_at_the_peak() {
        let template = PulseAttributes::Biexp {
            start: Distribution::Constant(100.0),
            decay: Distribution::Constant(30.0),
            rise: Distribution::Constant(5.0),
            depth: Distribution::Constant(200.0),
        };
        let mut rng = StdRng::seed_from_u64(12);
        let pulse = PulseEvent::sample(&template, &mut rng);
        let peak_time = pulse.peak_time();
        assert_approx_eq!(pulse.value_at(peak_time), 200.0, 1e-9);
        assert!(pulse.value_at(peak_time - 1.0) < 200.0);
        assert!(pulse.value_at(peak_time + 1.0) < 200.0);
        assert_eq!(pulse.value_at(99.0), 0.0);
    }

    #[test]
    fn triangular_pulse_ramps_between_start_and_stop() {
        let pulse = PulseEvent::Triangular {
            start: 10.0,
            peak_time: 14.0,
            stop: 20.0,
            depth: 8.0,
        };
        assert_eq!(pulse.value_at(9.0), 0.0);
        assert_approx_eq!(pulse.value_at(12.0), 4.0);
        assert_approx_eq!(pulse.value_at(14.0), 8.0);
        assert_approx_eq!(pulse.value_at(17.0), 4.0);
        assert_eq!(pulse.value_at(20.0), 0.0);
    }
}
