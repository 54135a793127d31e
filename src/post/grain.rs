use crate::{
    field::noise::fbm,
    foundation::math::{hash_coords, mix64, signed_unit_f64},
};

const OCTAVES: u32 = 3;
const AMOUNT_SCALE: f64 = 0.1;
/// Lattice frequency at `noise_scale == 1`; larger scales give finer grain.
const BASE_FREQUENCY: f64 = 0.1;
const CHANNEL_SPREAD: f64 = 0.15;
const CHANNEL_SALT: [u64; 3] = [0x52, 0x47, 0x42];

/// Deterministic film grain: fBm value noise with a slight per-channel wobble.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Grain {
    seed: u64,
    amplitude: f64,
    frequency: f64,
}

impl Grain {
    pub(crate) fn new(seed: u32, noise_amount: f64, noise_scale: f64) -> Self {
        Self {
            seed: mix64(u64::from(seed)),
            amplitude: noise_amount * AMOUNT_SCALE,
            frequency: noise_scale * BASE_FREQUENCY,
        }
    }

    /// Per-channel additive offsets for pixel `(x, y)`.
    pub(crate) fn offsets(&self, x: u32, y: u32) -> [f64; 3] {
        let base = fbm(
            self.seed,
            f64::from(x) * self.frequency,
            f64::from(y) * self.frequency,
            OCTAVES,
        ) * self.amplitude;
        CHANNEL_SALT.map(|salt| {
            let h = hash_coords(self.seed ^ salt, i64::from(x), i64::from(y));
            base * (1.0 + CHANNEL_SPREAD * signed_unit_f64(h))
        })
    }

    pub(crate) fn apply(&self, rgb: [f64; 3], x: u32, y: u32) -> [f64; 3] {
        let o = self.offsets(x, y);
        [
            (rgb[0] + o[0]).clamp(0.0, 1.0),
            (rgb[1] + o[1]).clamp(0.0, 1.0),
            (rgb[2] + o[2]).clamp(0.0, 1.0),
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/post/grain.rs"]
mod tests;
