use rayon::prelude::*;

use crate::{
    field::{
        composite::flatten_onto,
        modes::{field_value, palette_position},
        noise::{FlowField, OrganicWarp},
        palette::Palette,
        transform::SamplingFrame,
    },
    foundation::core::{Point, Quality, Raster, rgba_len},
    foundation::error::{GradientError, GradientResult},
    foundation::math::{hash_coords, signed_unit_f64, unit_to_u8},
    params::model::{BlendMode, Parameters},
};

const VARIANCE_SALT: u64 = 0x5641_5249;

/// Output options that are not part of the parameter contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOpts {
    /// Post-processing thresholds.
    pub quality: Quality,
    /// Opaque color to flatten onto; `None` keeps straight alpha.
    pub background: Option<[u8; 3]>,
    /// Render rows in parallel. Output bytes do not depend on this flag.
    pub parallel: bool,
    /// Dedicated worker count; `None` uses the global rayon pool.
    pub threads: Option<usize>,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            quality: Quality::Preview,
            background: None,
            parallel: true,
            threads: None,
        }
    }
}

/// Everything a pixel needs, resolved once per render.
struct FieldContext {
    frame: SamplingFrame,
    flow: FlowField,
    organic: OrganicWarp,
    palette: Palette,
    mode: BlendMode,
    spread: f64,
    variance: f64,
    variance_seed: u64,
    background: Option<[u8; 3]>,
}

impl FieldContext {
    fn new(params: &Parameters, width: u32, height: u32, background: Option<[u8; 3]>) -> Self {
        Self {
            frame: SamplingFrame::new(width, height, params),
            flow: FlowField::new(params.seed, params.flow_intensity),
            organic: OrganicWarp::new(params.seed, params.organic_distortion),
            palette: Palette::new(params.active_stops()),
            mode: params.blend_mode,
            spread: params.color_spread,
            variance: 0.5 * params.color_variance,
            variance_seed: u64::from(params.seed) ^ VARIANCE_SALT,
            background,
        }
    }

    fn shade(&self, x: u32, y: u32) -> [u8; 4] {
        let mut p = self.frame.sample(x, y);
        p += self.flow.displace(p);
        let o = self.organic.offset(p);
        p = Point::new(p.x + o, p.y + o);

        let t = field_value(self.mode, p);
        let c = self.palette.sample(palette_position(self.mode, t, self.spread));

        let jitter = if self.variance > 0.0 {
            signed_unit_f64(hash_coords(self.variance_seed, i64::from(x), i64::from(y)))
                * self.variance
        } else {
            0.0
        };

        let px = [
            unit_to_u8(c[0] + jitter),
            unit_to_u8(c[1] + jitter),
            unit_to_u8(c[2] + jitter),
            unit_to_u8(c[3]),
        ];
        match self.background {
            Some(bg) => flatten_onto(px, bg),
            None => px,
        }
    }

    fn shade_row(&self, y: u32, row: &mut [u8]) {
        for (x, px) in row.chunks_exact_mut(4).enumerate() {
            px.copy_from_slice(&self.shade(x as u32, y));
        }
    }
}

/// Produce the base (pre-post-processing) raster for `params`.
///
/// `params` is sanitized first, so any field value is accepted. A zero side yields an empty
/// buffer.
#[tracing::instrument(skip(params, opts), fields(seed = params.seed, mode = params.blend_mode.as_str()))]
pub fn render_field(
    params: &Parameters,
    width: u32,
    height: u32,
    opts: &RenderOpts,
) -> GradientResult<Raster> {
    let len = rgba_len(width, height)?;
    if len == 0 {
        tracing::debug!("empty canvas");
        return Ok(Raster::empty(width, height));
    }

    let params = params.sanitized();
    let ctx = FieldContext::new(&params, width, height, opts.background);
    let row_bytes = width as usize * 4;
    let mut data = vec![0u8; len];

    if opts.parallel {
        data.par_chunks_mut(row_bytes)
            .enumerate()
            .for_each(|(y, row)| ctx.shade_row(y as u32, row));
    } else {
        data.chunks_mut(row_bytes)
            .enumerate()
            .for_each(|(y, row)| ctx.shade_row(y as u32, row));
    }

    Ok(Raster {
        width,
        height,
        data,
    })
}

/// Dedicated rayon pool. `Some(0)` is rejected.
pub(crate) fn build_thread_pool(threads: Option<usize>) -> GradientResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(GradientError::validation(
            "render option 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| GradientError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/field/render.rs"]
mod tests;
