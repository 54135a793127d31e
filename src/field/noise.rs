//! Seeded displacement fields and lattice value noise.

use crate::{
    foundation::core::{Point, Vec2},
    foundation::math::{SplitMix64, hash_coords, lerp, signed_unit_f64},
};

const FLOW_SALT: u64 = 0x464c_4f57;
const ORGANIC_SALT: u64 = 0x4f52_4741;

const FLOW_FREQ: (f64, f64) = (2.3, 1.7);
const ORGANIC_FREQ: [(f64, f64); 3] = [(0.9, 1.1), (1.6, 0.7), (0.4, 1.3)];
const ORGANIC_WEIGHTS: [f64; 3] = [0.5, 0.3, 0.2];

fn phases<const N: usize>(seed: u32, salt: u64) -> [f64; N] {
    let mut rng = SplitMix64::new(u64::from(seed) ^ salt);
    std::array::from_fn(|_| rng.next_f64() * std::f64::consts::TAU)
}

/// Trigonometric flow displacement with per-seed phases.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FlowField {
    phase: [f64; 4],
    amplitude: f64,
}

impl FlowField {
    pub(crate) fn new(seed: u32, flow_intensity: f64) -> Self {
        Self {
            phase: phases(seed, FLOW_SALT),
            amplitude: 0.5 * flow_intensity,
        }
    }

    pub(crate) fn displace(&self, p: Point) -> Vec2 {
        if self.amplitude == 0.0 {
            return Vec2::ZERO;
        }
        let (fa, fb) = FLOW_FREQ;
        let dx = (p.y * fa + self.phase[0]).sin() * (p.x * fb + self.phase[1]).cos();
        let dy = (p.x * fa + self.phase[2]).cos() * (p.y * fb + self.phase[3]).sin();
        Vec2::new(dx, dy) * self.amplitude
    }
}

/// Low-frequency warp added equally to both axes.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OrganicWarp {
    phase: [f64; 6],
    amount: f64,
}

impl OrganicWarp {
    pub(crate) fn new(seed: u32, organic_distortion: f64) -> Self {
        Self {
            phase: phases(seed, ORGANIC_SALT),
            amount: organic_distortion,
        }
    }

    pub(crate) fn offset(&self, p: Point) -> f64 {
        if self.amount == 0.0 {
            return 0.0;
        }
        let mut sum = 0.0;
        for (i, ((fx, fy), w)) in ORGANIC_FREQ.iter().zip(ORGANIC_WEIGHTS).enumerate() {
            let a = (p.x * fx + self.phase[2 * i]).sin();
            let b = (p.y * fy + self.phase[2 * i + 1]).cos();
            sum += w * a * b;
        }
        sum * self.amount
    }
}

/// Bilinear value noise on the integer lattice, smoothstep-faded, in `[-1, 1)`.
pub(crate) fn value_noise(seed: u64, x: f64, y: f64) -> f64 {
    let x0 = x.floor();
    let y0 = y.floor();
    let (fx, fy) = (x - x0, y - y0);
    let u = fx * fx * (3.0 - 2.0 * fx);
    let v = fy * fy * (3.0 - 2.0 * fy);

    let (xi, yi) = (x0 as i64, y0 as i64);
    let h = |ix: i64, iy: i64| signed_unit_f64(hash_coords(seed, ix, iy));

    let top = lerp(h(xi, yi), h(xi + 1, yi), u);
    let bottom = lerp(h(xi, yi + 1), h(xi + 1, yi + 1), u);
    lerp(top, bottom, v)
}

/// Fractal sum of `octaves` value-noise layers, normalized back into `[-1, 1]`.
pub(crate) fn fbm(seed: u64, x: f64, y: f64, octaves: u32) -> f64 {
    let mut value = 0.0;
    let mut amplitude = 0.5;
    let mut frequency = 1.0;
    let mut norm = 0.0;
    for octave in 0..octaves {
        let layer_seed = seed.wrapping_add(u64::from(octave).wrapping_mul(0x9E37_79B9));
        value += amplitude * value_noise(layer_seed, x * frequency, y * frequency);
        norm += amplitude;
        amplitude *= 0.5;
        frequency *= 2.0;
    }
    if norm == 0.0 { 0.0 } else { value / norm }
}

#[cfg(test)]
#[path = "../../tests/unit/field/noise.rs"]
mod tests;
