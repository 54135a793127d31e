use rayon::prelude::*;

use crate::{color::luminance_u8, foundation::core::Quality};

const SELF_WEIGHT: f64 = 4.0;
const EDGE_WEIGHT: f64 = 1.0;
const CORNER_WEIGHT: f64 = 0.7;
const TOTAL_WEIGHT: f64 = SELF_WEIGHT + 4.0 * EDGE_WEIGHT + 4.0 * CORNER_WEIGHT;
const MAX_BLEND: f64 = 0.6;

/// Quality-dependent smoothing knobs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SmoothingPlan {
    pub(crate) strength: f64,
    pub(crate) contrast_threshold: f64,
}

impl SmoothingPlan {
    /// `None` when the levels intensity is below the quality's gate.
    pub(crate) fn for_levels(intensity: f64, quality: Quality) -> Option<Self> {
        let (gate, strength, contrast_threshold) = match quality {
            Quality::Preview => (0.3, (intensity * 0.5).min(0.8), 0.15),
            Quality::Export => (0.1, (intensity * 0.8).min(1.0), 0.10),
        };
        (intensity > gate).then_some(Self {
            strength,
            contrast_threshold,
        })
    }
}

/// Contrast-adaptive smoothing over interior pixels. Reads from a snapshot, so the result
/// does not depend on visiting order. Returns the number of pixels changed.
pub(crate) fn smooth_edges(
    buf: &mut [u8],
    width: usize,
    height: usize,
    plan: SmoothingPlan,
    parallel: bool,
) -> usize {
    if width < 3 || height < 3 {
        return 0;
    }
    let src = buf.to_vec();
    let lum: Vec<f64> = src.chunks_exact(4).map(luminance_u8).collect();
    let stride = width * 4;

    if parallel {
        buf.par_chunks_mut(stride)
            .enumerate()
            .map(|(y, out)| smooth_row(&src, &lum, width, height, y, plan, out))
            .sum()
    } else {
        buf.chunks_mut(stride)
            .enumerate()
            .map(|(y, out)| smooth_row(&src, &lum, width, height, y, plan, out))
            .sum()
    }
}

fn smooth_row(
    src: &[u8],
    lum: &[f64],
    width: usize,
    height: usize,
    y: usize,
    plan: SmoothingPlan,
    out: &mut [u8],
) -> usize {
    if y == 0 || y + 1 == height {
        return 0;
    }
    let mut changed = 0;
    for x in 1..width - 1 {
        if smooth_pixel(src, lum, width, x, y, plan, &mut out[x * 4..x * 4 + 3]) {
            changed += 1;
        }
    }
    changed
}

fn smooth_pixel(
    src: &[u8],
    lum: &[f64],
    width: usize,
    x: usize,
    y: usize,
    plan: SmoothingPlan,
    out_rgb: &mut [u8],
) -> bool {
    let center = y * width + x;
    let l = lum[center];

    let mut contrast: f64 = 0.0;
    let mut acc = [0.0f64; 3];
    for dy in -1isize..=1 {
        for dx in -1isize..=1 {
            let idx = (center as isize + dy * width as isize + dx) as usize;
            contrast = contrast.max((lum[idx] - l).abs());
            let w = match (dx, dy) {
                (0, 0) => SELF_WEIGHT,
                (0, _) | (_, 0) => EDGE_WEIGHT,
                _ => CORNER_WEIGHT,
            };
            for (c, a) in acc.iter_mut().enumerate() {
                *a += w * f64::from(src[idx * 4 + c]);
            }
        }
    }

    if contrast <= plan.contrast_threshold {
        return false;
    }
    let blend = (contrast * contrast * plan.strength * 2.0).min(MAX_BLEND);
    let mut changed = false;
    for (c, slot) in out_rgb.iter_mut().enumerate() {
        let orig = f64::from(src[center * 4 + c]);
        let avg = acc[c] / TOTAL_WEIGHT;
        let v = (orig + (avg - orig) * blend).round().clamp(0.0, 255.0) as u8;
        changed |= v != *slot;
        *slot = v;
    }
    changed
}

#[cfg(test)]
#[path = "../../tests/unit/post/smooth.rs"]
mod tests;
