use crate::{
    foundation::math::{lerp, smoothstep01},
    params::model::{ColorStop, MAX_ACTIVE_STOPS},
};

/// Active stops in normalized form, ready for per-pixel lookup.
#[derive(Clone, Debug)]
pub(crate) struct Palette {
    stops: [[f64; 4]; MAX_ACTIVE_STOPS],
    len: usize,
}

impl Palette {
    /// `stops` must hold at least one entry; only the first `MAX_ACTIVE_STOPS` are used.
    pub(crate) fn new(stops: &[ColorStop]) -> Self {
        let mut out = [[0.0; 4]; MAX_ACTIVE_STOPS];
        let len = stops.len().min(MAX_ACTIVE_STOPS);
        for (slot, stop) in out.iter_mut().zip(stops.iter().take(len)) {
            *slot = stop.to_unit();
        }
        Self { stops: out, len }
    }

    /// Straight `[r, g, b, a]` at `pos` in `[0, 1]`, smoothstep-eased between neighbors.
    pub(crate) fn sample(&self, pos: f64) -> [f64; 4] {
        if self.len == 0 {
            return [0.0; 4];
        }
        if self.len == 1 {
            return self.stops[0];
        }
        let scaled = pos.clamp(0.0, 1.0) * (self.len - 1) as f64;
        let lo = (scaled.floor() as usize).min(self.len - 2);
        let t = smoothstep01(scaled - lo as f64);
        let (a, b) = (self.stops[lo], self.stops[lo + 1]);
        std::array::from_fn(|i| lerp(a[i], b[i], t))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/palette.rs"]
mod tests;
