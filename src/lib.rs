//! Deterministic procedural gradient/noise generator.
//!
//! A [`Parameters`] value fully describes an image: the [field engine](render_field) maps
//! every pixel through a seeded flow field and a blend-mode distance function into an
//! N-stop palette, then [`apply_post_processing`] runs levels, hue/saturation, grain and
//! edge-adaptive smoothing in place. Same parameters, dimensions and quality always give
//! byte-identical RGBA8 output.
//!
//! ```
//! use gradient_noise::GradientGenerator;
//!
//! let mut g = GradientGenerator::new();
//! g.update_params(r#"{"seed": 7, "blend_mode": "radial"}"#)?;
//! g.apply_color_preset("sunset")?;
//! let rgba = g.generate_gradient_data(64, 32)?;
//! assert_eq!(rgba.len(), 64 * 32 * 4);
//! # Ok::<(), gradient_noise::GradientError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod color;
mod field;
mod foundation;
mod params;
mod post;
mod session;

pub use field::render::{RenderOpts, render_field};
pub use foundation::core::{Quality, Raster, Rgba8Premul, preview_dimensions, rgba_len};
pub use foundation::error::{GradientError, GradientResult};
pub use params::codec::{decode_params, decode_params_value, encode_params};
pub use params::model::{
    Adjustments, BlendMode, ColorStop, MAX_ACTIVE_STOPS, MIN_ACTIVE_STOPS, Parameters,
    STOP_CAPACITY, clamp_color_count,
};
pub use post::{PostStats, apply_post_processing};
pub use session::generator::{
    DEFAULT_PREVIEW_MAX_SIDE, GradientGenerator, params_fingerprint, render_gradient,
};
pub use session::history::{HISTORY_CAPACITY, ParamHistory};
pub use session::presets::{COLOR_PRESETS, color_preset};
