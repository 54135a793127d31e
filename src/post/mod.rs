//! Post-processing: levels, hue/saturation, grain and edge-adaptive smoothing, in place.
//!
//! The first three stages are fused into one per-pixel pass so each channel is rounded
//! exactly once. Smoothing runs afterwards against a snapshot of that result. Alpha is never
//! modified.

pub(crate) mod grain;
pub(crate) mod hsl;
pub(crate) mod levels;
pub(crate) mod smooth;

use rayon::prelude::*;

use crate::{
    foundation::core::{Quality, rgba_len},
    foundation::error::{GradientError, GradientResult},
    foundation::math::unit_to_u8,
    params::model::Adjustments,
    post::{
        grain::Grain,
        hsl::apply_hue_saturation,
        levels::apply_levels,
        smooth::{SmoothingPlan, smooth_edges},
    },
};

/// What a post-processing call actually did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PostStats {
    /// Levels stage ran.
    pub levels: bool,
    /// Hue/saturation stage ran.
    pub color: bool,
    /// Grain stage ran.
    pub grain: bool,
    /// Smoothing stage ran.
    pub smoothing: bool,
    /// Pixels whose color the smoothing stage changed.
    pub smoothed_pixels: usize,
}

/// Apply `adjustments` to an RGBA8 buffer in place.
///
/// Adjustments are sanitized first. With neutral adjustments the buffer is left
/// byte-identical. Grain uses `adjustments.grain_seed`, or 0 when unset; use
/// [`crate::Parameters::resolved_adjustments`] to fall back to the parameter seed.
pub fn apply_post_processing(
    buf: &mut [u8],
    width: u32,
    height: u32,
    adjustments: &Adjustments,
    quality: Quality,
) -> GradientResult<PostStats> {
    post_process(buf, width, height, adjustments, quality, true)
}

#[tracing::instrument(skip(buf, adjustments))]
pub(crate) fn post_process(
    buf: &mut [u8],
    width: u32,
    height: u32,
    adjustments: &Adjustments,
    quality: Quality,
    parallel: bool,
) -> GradientResult<PostStats> {
    let expected = rgba_len(width, height)?;
    if buf.len() != expected {
        return Err(GradientError::evaluation(format!(
            "post-processing expects {expected} bytes for {width}x{height}, got {}",
            buf.len()
        )));
    }

    let adj = adjustments.sanitized();
    let mut stats = PostStats::default();
    if expected == 0 || adj.is_neutral() {
        tracing::debug!("neutral adjustments, buffer untouched");
        return Ok(stats);
    }

    let pass = PixelPass::new(&adj);
    stats.levels = pass.levels.is_some();
    stats.color = pass.color.is_some();
    stats.grain = pass.grain.is_some();

    if pass.is_active() {
        let stride = width as usize * 4;
        if parallel {
            buf.par_chunks_mut(stride)
                .enumerate()
                .for_each(|(y, row)| pass.run_row(y as u32, row));
        } else {
            buf.chunks_mut(stride)
                .enumerate()
                .for_each(|(y, row)| pass.run_row(y as u32, row));
        }
    }

    if let Some(plan) = SmoothingPlan::for_levels(adj.levels_intensity(), quality) {
        stats.smoothing = true;
        stats.smoothed_pixels =
            smooth_edges(buf, width as usize, height as usize, plan, parallel);
    }

    tracing::debug!(?stats, "post-processing done");
    Ok(stats)
}

struct PixelPass {
    levels: Option<Adjustments>,
    color: Option<(f64, f64)>,
    grain: Option<Grain>,
}

impl PixelPass {
    fn new(adj: &Adjustments) -> Self {
        Self {
            levels: adj.has_levels().then_some(*adj),
            color: adj
                .has_color()
                .then_some((adj.hue_shift / 360.0, adj.saturation)),
            grain: adj.has_grain().then(|| {
                Grain::new(
                    adj.grain_seed.unwrap_or(0),
                    adj.noise_amount,
                    adj.noise_scale,
                )
            }),
        }
    }

    fn is_active(&self) -> bool {
        self.levels.is_some() || self.color.is_some() || self.grain.is_some()
    }

    fn run_row(&self, y: u32, row: &mut [u8]) {
        for (x, px) in row.chunks_exact_mut(4).enumerate() {
            let mut rgb = [px[0], px[1], px[2]].map(|c| f64::from(c) / 255.0);
            if let Some(adj) = &self.levels {
                rgb = apply_levels(rgb, adj);
            }
            if let Some((turn, sat)) = self.color {
                rgb = apply_hue_saturation(rgb, turn, sat);
            }
            if let Some(grain) = &self.grain {
                rgb = grain.apply(rgb, x as u32, y);
            }
            px[0] = unit_to_u8(rgb[0]);
            px[1] = unit_to_u8(rgb[1]);
            px[2] = unit_to_u8(rgb[2]);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/post/mod.rs"]
mod tests;
