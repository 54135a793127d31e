//! Seeded palette and blending randomizers.

use crate::{
    color::hsl_degrees_to_rgb8,
    params::model::{BlendMode, ColorStop, Parameters},
};

const GOLDEN_ANGLE: f64 = 137.507_764_050_037_85;

/// Park-Miller minimal standard generator.
#[derive(Clone, Debug)]
pub(crate) struct MinStd {
    state: i64,
}

impl MinStd {
    const MODULUS: i64 = 2_147_483_647;
    const MULTIPLIER: i64 = 16_807;

    pub(crate) fn new(seed: u32) -> Self {
        let mut state = i64::from(seed) % Self::MODULUS;
        if state <= 0 {
            state += Self::MODULUS - 1;
        }
        Self { state }
    }

    /// Uniform in `[0, 1)`.
    pub(crate) fn next_f64(&mut self) -> f64 {
        self.state = self.state * Self::MULTIPLIER % Self::MODULUS;
        (self.state - 1) as f64 / (Self::MODULUS - 1) as f64
    }
}

/// Random opaque color for every active stop.
pub(crate) fn random_stops(seed: u32, count: usize) -> Vec<ColorStop> {
    let mut rng = MinStd::new(seed);
    (0..count)
        .map(|_| {
            let h = rng.next_f64() * 360.0;
            let s = 0.5 + rng.next_f64() * 0.5;
            let l = 0.3 + rng.next_f64() * 0.4;
            let [r, g, b] = hsl_degrees_to_rgb8(h, s, l);
            ColorStop::opaque(r, g, b)
        })
        .collect()
}

/// Harmony palette: hues step around the wheel by a creativity-scaled golden angle,
/// saturation and lightness jitter widens with creativity.
pub(crate) fn harmony_stops(seed: u32, creativity: f64, count: usize) -> Vec<ColorStop> {
    let c = if creativity.is_nan() {
        0.0
    } else {
        creativity.clamp(0.0, 1.0)
    };
    let mut rng = MinStd::new(seed);
    let base = rng.next_f64() * 360.0;
    let step = GOLDEN_ANGLE * (0.25 + 0.75 * c);
    let sat_base = 0.55 + rng.next_f64() * 0.25;
    let light_base = 0.45 + rng.next_f64() * 0.15;

    (0..count)
        .map(|i| {
            let wobble = (rng.next_f64() * 2.0 - 1.0) * 40.0 * c;
            let h = base + step * i as f64 + wobble;
            let s = sat_base + (rng.next_f64() * 2.0 - 1.0) * 0.35 * c;
            let l = light_base + (rng.next_f64() * 2.0 - 1.0) * 0.3 * c;
            let [r, g, b] = hsl_degrees_to_rgb8(h, s.clamp(0.2, 1.0), l.clamp(0.15, 0.85));
            ColorStop::opaque(r, g, b)
        })
        .collect()
}

/// Reseed and scatter the field-shape parameters.
pub(crate) fn randomize_blending(params: &mut Parameters, seed: u32, creativity: f64) {
    let c = if creativity.is_nan() {
        0.0
    } else {
        creativity.clamp(0.0, 1.0)
    };
    let mut rng = MinStd::new(seed);
    params.seed = seed;
    params.flow_intensity = rng.next_f64() * c;
    params.organic_distortion = rng.next_f64() * c;
    params.color_variance = rng.next_f64() * c * 0.3;
    params.color_spread = 0.5 + rng.next_f64() * c;
    let pick = (rng.next_f64() * BlendMode::ALL.len() as f64) as usize;
    params.blend_mode = BlendMode::ALL[pick.min(BlendMode::ALL.len() - 1)];
}

#[cfg(test)]
#[path = "../../tests/unit/session/random.rs"]
mod tests;
