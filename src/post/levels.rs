use crate::{color::luminance, params::model::Adjustments};

const SHADOW_END: f64 = 0.33;
const MIDTONE_END: f64 = 0.66;
const HIGHLIGHT_SPAN: f64 = 0.34;

/// Additive offset for a pixel of luminance `l`. Shadows fade out toward the midtones,
/// highlights fade in above them.
pub(crate) fn levels_offset(l: f64, adj: &Adjustments) -> f64 {
    if l < SHADOW_END {
        adj.levels_shadows * (1.0 - l / SHADOW_END)
    } else if l < MIDTONE_END {
        adj.levels_midtones
    } else {
        adj.levels_highlights * (l - MIDTONE_END) / HIGHLIGHT_SPAN
    }
}

pub(crate) fn apply_levels(rgb: [f64; 3], adj: &Adjustments) -> [f64; 3] {
    let d = levels_offset(luminance(rgb[0], rgb[1], rgb[2]), adj);
    rgb.map(|c| (c + d).clamp(0.0, 1.0))
}

#[cfg(test)]
#[path = "../../tests/unit/post/levels.rs"]
mod tests;
