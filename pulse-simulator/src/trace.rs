use crate::{config::TraceTemplate, noise::Noise, pulse::PulseEvent};
use rand::Rng;
use wfd_common::Intensity;

/// Renders one trace from a template: every pulse is subtracted from the
/// pedestal so pulses are negative-going, then noise is applied and the
/// result quantized to ADC counts.
pub(crate) fn render_trace(template: &TraceTemplate, rng: &mut impl Rng) -> Vec<Intensity> {
    let pedestal = template.pedestal.sample(rng);
    let pulses: Vec<PulseEvent> = template
        .pulses
        .iter()
        .map(|attributes| PulseEvent::sample(attributes, rng))
        .collect();
    let mut noise = template.noise.as_ref().map(Noise::new);

    (0..template.samples)
        .map(|i| {
            let time = i as f64;
            let depth: f64 = pulses.iter().map(|pulse| pulse.value_at(time)).sum();
            let value = match noise.as_mut() {
                Some(noise) => noise.noisify(pedestal - depth, rng),
                None => pedestal - depth,
            };
            value.clamp(0.0, Intensity::MAX as f64) as Intensity
        })
        .collect()
}
