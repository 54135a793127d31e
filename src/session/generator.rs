use crate::{
    field::render::{RenderOpts, build_thread_pool, render_field},
    foundation::core::{Quality, Raster, preview_dimensions},
    foundation::error::{GradientError, GradientResult},
    foundation::math::Fnv1a64,
    params::codec::{decode_params, encode_params},
    params::model::{ColorStop, Parameters},
    post::post_process,
    session::presets::{COLOR_PRESETS, color_preset},
    session::random::{harmony_stops, random_stops, randomize_blending},
};

/// Longest side of the interactive preview canvas.
pub const DEFAULT_PREVIEW_MAX_SIDE: u32 = 800;

/// Run the full pipeline (field, then post-processing) for `params`.
///
/// `opts.threads` installs a dedicated pool for the call; otherwise rayon's global pool is
/// used when `opts.parallel` is set.
#[tracing::instrument(skip(params, opts), fields(quality = ?opts.quality))]
pub fn render_gradient(
    params: &Parameters,
    width: u32,
    height: u32,
    opts: &RenderOpts,
) -> GradientResult<Raster> {
    let run = || -> GradientResult<Raster> {
        let params = params.sanitized();
        let mut raster = render_field(&params, width, height, opts)?;
        post_process(
            &mut raster.data,
            width,
            height,
            &params.resolved_adjustments(),
            opts.quality,
            opts.parallel,
        )?;
        Ok(raster)
    };

    match opts.threads {
        Some(_) if opts.parallel => build_thread_pool(opts.threads)?.install(run),
        Some(0) => Err(GradientError::validation(
            "render option 'threads' must be >= 1 when set",
        )),
        _ => run(),
    }
}

/// Stateful generator session holding the current [`Parameters`].
#[derive(Clone, Debug, Default)]
pub struct GradientGenerator {
    params: Parameters,
}

impl GradientGenerator {
    /// Session with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session starting from `params` (sanitized).
    pub fn with_params(params: Parameters) -> Self {
        Self {
            params: params.sanitized(),
        }
    }

    /// Current parameters.
    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Replace the current parameters (sanitized).
    pub fn set_params(&mut self, params: Parameters) {
        self.params = params.sanitized();
    }

    /// Decode a JSON payload and make it current. On error the previous parameters stay.
    pub fn update_params(&mut self, payload: &str) -> GradientResult<()> {
        self.params = decode_params(payload)?;
        Ok(())
    }

    /// Preview-quality RGBA8 bytes for a `width x height` canvas.
    pub fn generate_gradient_data(&self, width: u32, height: u32) -> GradientResult<Vec<u8>> {
        Ok(self.render(width, height, &RenderOpts::default())?.data)
    }

    /// Full pipeline with explicit options.
    pub fn render(&self, width: u32, height: u32, opts: &RenderOpts) -> GradientResult<Raster> {
        render_gradient(&self.params, width, height, opts)
    }

    /// Export-quality render.
    pub fn render_export(&self, width: u32, height: u32) -> GradientResult<Raster> {
        let opts = RenderOpts {
            quality: Quality::Export,
            ..RenderOpts::default()
        };
        self.render(width, height, &opts)
    }

    /// Preview render fitted into a [`DEFAULT_PREVIEW_MAX_SIDE`] box with the export aspect
    /// ratio.
    pub fn render_preview(&self, export_width: u32, export_height: u32) -> GradientResult<Raster> {
        let (w, h) = preview_dimensions(export_width, export_height, DEFAULT_PREVIEW_MAX_SIDE);
        self.render(w, h, &RenderOpts::default())
    }

    /// Canonical JSON of the current parameters.
    pub fn get_params_json(&self) -> GradientResult<String> {
        Ok(serde_json::to_string(&encode_params(&self.params)?)?)
    }

    /// Load a built-in palette into the stops. `color_count` is kept.
    pub fn apply_color_preset(&mut self, name: &str) -> GradientResult<()> {
        let stops = color_preset(name).ok_or_else(|| {
            let known: Vec<&str> = COLOR_PRESETS.iter().map(|(n, _)| *n).collect();
            GradientError::validation(format!(
                "unknown color preset '{name}' (expected one of: {})",
                known.join(", ")
            ))
        })?;
        for (slot, stop) in self.params.colors.iter_mut().zip(stops.iter()) {
            *slot = *stop;
        }
        self.params = self.params.sanitized();
        Ok(())
    }

    /// Random opaque color for each active stop.
    pub fn randomize_colors(&mut self, seed: u32) {
        let count = self.params.active_stops().len();
        self.apply_active(&random_stops(seed, count));
    }

    /// Harmony-based palette; `creativity` in `0..1` widens hue and tone spread.
    pub fn randomize_with_advanced_rng(&mut self, seed: u32, creativity: f64) {
        let count = self.params.active_stops().len();
        self.apply_active(&harmony_stops(seed, creativity, count));
    }

    /// Reseed and scatter flow, organic, variance, spread and blend mode.
    pub fn randomize_blending(&mut self, seed: u32, creativity: f64) {
        randomize_blending(&mut self.params, seed, creativity);
        self.params = self.params.sanitized();
    }

    /// FNV-1a over the canonical encoding. Equal fingerprints mean identical output.
    pub fn fingerprint(&self) -> GradientResult<u64> {
        params_fingerprint(&self.params)
    }

    fn apply_active(&mut self, stops: &[ColorStop]) {
        for (slot, stop) in self.params.colors.iter_mut().zip(stops) {
            *slot = *stop;
        }
        self.params = self.params.sanitized();
    }
}

/// Fingerprint of a parameter snapshot, see [`GradientGenerator::fingerprint`].
pub fn params_fingerprint(params: &Parameters) -> GradientResult<u64> {
    let canonical = serde_json::to_vec(&encode_params(&params.sanitized())?)?;
    let mut h = Fnv1a64::new_default();
    h.write_bytes(&canonical);
    Ok(h.finish())
}

#[cfg(test)]
#[path = "../../tests/unit/session/generator.rs"]
mod tests;
