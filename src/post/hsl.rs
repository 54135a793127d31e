use crate::color::{hsl_to_rgb, rgb_to_hsl};

/// Rotate hue by `hue_turn` (fraction of a full turn) and shift saturation by `sat_delta`.
pub(crate) fn apply_hue_saturation(rgb: [f64; 3], hue_turn: f64, sat_delta: f64) -> [f64; 3] {
    let (h, s, l) = rgb_to_hsl(rgb[0], rgb[1], rgb[2]);
    let h = (h + hue_turn).rem_euclid(1.0);
    let s = (s + sat_delta).clamp(0.0, 1.0);
    let (r, g, b) = hsl_to_rgb(h, s, l);
    [r, g, b].map(|c| c.clamp(0.0, 1.0))
}

#[cfg(test)]
#[path = "../../tests/unit/post/hsl.rs"]
mod tests;
