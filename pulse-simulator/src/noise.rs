use crate::config::NoiseAttributes;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Stateful noise generator; the exponential smoothing correlates adjacent
/// samples the way an analog front end would.
pub(crate) struct Noise<'a> {
    attributes: &'a NoiseAttributes,
    previous: f64,
}

impl<'a> Noise<'a> {
    pub(crate) fn new(attributes: &'a NoiseAttributes) -> Self {
        Self {
            attributes,
            previous: f64::default(),
        }
    }

    pub(crate) fn noisify(&mut self, value: f64, rng: &mut impl Rng) -> f64 {
        let sd = self.attributes.sd.sample(rng);
        let sample = Normal::new(0.0, sd)
            .map(|normal| normal.sample(rng))
            .unwrap_or_default();
        self.previous = sample * (1.0 - self.attributes.smoothing_factor)
            + self.previous * self.attributes.smoothing_factor;
        value + self.previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Distribution as ConfigDistribution;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn zero_sd_noise_is_transparent() {
        let attributes = NoiseAttributes {
            sd: ConfigDistribution::Constant(0.0),
            smoothing_factor: 0.5,
        };
        let mut noise = Noise::new(&attributes);
        let mut rng = StdRng::seed_from_u64(99);
        for i in 0..10 {
            assert_eq!(noise.noisify(i as f64, &mut rng), i as f64);
        }
    }
}
