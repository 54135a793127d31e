/// Streaming FNV-1a (64-bit).
#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// SplitMix64 finalizer.
pub(crate) fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Sequential SplitMix64 stream. Every consumer builds its own from a seed; nothing is shared.
#[derive(Clone, Debug)]
pub(crate) struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    const GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

    pub(crate) fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(Self::GAMMA);
        mix64(self.state)
    }

    /// Uniform in `[0, 1)`.
    pub(crate) fn next_f64(&mut self) -> f64 {
        unit_f64(self.next_u64())
    }
}

/// Stateless hash of a seed and an integer lattice coordinate.
pub(crate) fn hash_coords(seed: u64, x: i64, y: i64) -> u64 {
    let h = mix64(seed ^ 0x5851_F42D_4C95_7F2D);
    let h = mix64(h ^ (x as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    mix64(h ^ (y as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F))
}

/// Top 53 bits mapped to `[0, 1)`.
pub(crate) fn unit_f64(h: u64) -> f64 {
    (h >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Hash mapped to `[-1, 1)`.
pub(crate) fn signed_unit_f64(h: u64) -> f64 {
    unit_f64(h) * 2.0 - 1.0
}

/// Replace NaN with `default` and clamp everything else (infinities included) into `[lo, hi]`.
pub(crate) fn sanitize_f64(v: f64, default: f64, lo: f64, hi: f64) -> f64 {
    if v.is_nan() { default } else { v.clamp(lo, hi) }
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub(crate) fn smoothstep01(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Ping-pong `t` into `[0, 1]` with period 2.
pub(crate) fn mirror_wrap01(t: f64) -> f64 {
    if !t.is_finite() {
        return 0.0;
    }
    let m = t.rem_euclid(2.0);
    if m > 1.0 { 2.0 - m } else { m }
}

/// Quantize a normalized channel to u8. Non-finite input maps to 0.
pub(crate) fn unit_to_u8(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
