use crate::foundation::math::sanitize_f64;

/// Internal stop capacity. Stops at index `>= color_count` are zero-filled.
pub const STOP_CAPACITY: usize = 8;
/// Smallest active stop count.
pub const MIN_ACTIVE_STOPS: usize = 2;
/// Largest active stop count; requests for 7 or 8 stops clamp here.
pub const MAX_ACTIVE_STOPS: usize = 6;

pub(crate) const DEFAULT_SEED: u32 = 42;
pub(crate) const DEFAULT_COLOR_SPREAD: f64 = 0.7;
pub(crate) const DEFAULT_FLOW_INTENSITY: f64 = 0.3;
pub(crate) const DEFAULT_ORGANIC_DISTORTION: f64 = 0.2;
pub(crate) const DEFAULT_COLOR_VARIANCE: f64 = 0.1;
pub(crate) const DEFAULT_CENTER_BIAS: f64 = 0.5;
pub(crate) const DEFAULT_ZOOM: f64 = 1.0;
pub(crate) const DEFAULT_NOISE_SCALE: f64 = 1.0;

const SPREAD_RANGE: (f64, f64) = (0.05, 8.0);
const ZOOM_RANGE: (f64, f64) = (0.1, 10.0);
const OFFSET_LIMIT: f64 = 1.0e6;
const NOISE_SCALE_RANGE: (f64, f64) = (0.05, 64.0);

/// Field-distance function used to turn a warped coordinate into a palette position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlendMode {
    /// Linear projection along the horizontal axis.
    #[default]
    Smooth,
    /// Euclidean distance from the center.
    Radial,
    /// Angle around the center.
    Angular,
    /// Manhattan distance from the center.
    Diamond,
    /// Angle twisted by radius (spiral).
    Vortex,
}

impl BlendMode {
    /// Every mode, in canonical order.
    pub const ALL: [BlendMode; 5] = [
        BlendMode::Smooth,
        BlendMode::Radial,
        BlendMode::Angular,
        BlendMode::Diamond,
        BlendMode::Vortex,
    ];

    /// Lenient name lookup; unknown names fall back to [`BlendMode::Smooth`].
    pub fn from_name(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "radial" => BlendMode::Radial,
            "angular" => BlendMode::Angular,
            "diamond" => BlendMode::Diamond,
            "vortex" => BlendMode::Vortex,
            _ => BlendMode::Smooth,
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            BlendMode::Smooth => "smooth",
            BlendMode::Radial => "radial",
            BlendMode::Angular => "angular",
            BlendMode::Diamond => "diamond",
            BlendMode::Vortex => "vortex",
        }
    }

    /// Modes whose field value is periodic; their palette position mirror-wraps
    /// instead of saturating.
    pub fn is_periodic(self) -> bool {
        matches!(self, BlendMode::Angular | BlendMode::Vortex)
    }
}

impl serde::Serialize for BlendMode {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for BlendMode {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Ok(BlendMode::from_name(&s))
    }
}

/// One palette entry: straight sRGB bytes plus an alpha in `0..1`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorStop {
    /// sRGB bytes.
    pub rgb: [u8; 3],
    /// Opacity in `0..1`.
    pub alpha: f64,
}

impl ColorStop {
    /// Transparent black, used for unused and padded slots.
    pub const EMPTY: ColorStop = ColorStop {
        rgb: [0, 0, 0],
        alpha: 0.0,
    };

    /// Fully opaque stop.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgb: [r, g, b],
            alpha: 1.0,
        }
    }

    /// Normalized `[r, g, b, a]`.
    pub fn to_unit(self) -> [f64; 4] {
        [
            f64::from(self.rgb[0]) / 255.0,
            f64::from(self.rgb[1]) / 255.0,
            f64::from(self.rgb[2]) / 255.0,
            self.alpha,
        ]
    }

    fn sanitized(self) -> Self {
        Self {
            rgb: self.rgb,
            alpha: sanitize_f64(self.alpha, 1.0, 0.0, 1.0),
        }
    }
}

/// Post-processing adjustments. All-zero deltas make the pipeline a no-op.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Adjustments {
    /// Shadow band delta, `-1..1`.
    pub levels_shadows: f64,
    /// Midtone band delta, `-1..1`.
    pub levels_midtones: f64,
    /// Highlight band delta, `-1..1`.
    pub levels_highlights: f64,
    /// Hue rotation in degrees, normalized into `[0, 360)`.
    pub hue_shift: f64,
    /// Saturation delta, `-1..1`.
    pub saturation: f64,
    /// Grain amplitude, `0..1`.
    pub noise_amount: f64,
    /// Grain frequency multiplier; larger values give finer grain.
    pub noise_scale: f64,
    /// Grain seed; `None` derives the grain from [`Parameters::seed`].
    pub grain_seed: Option<u32>,
}

impl Default for Adjustments {
    fn default() -> Self {
        Self {
            levels_shadows: 0.0,
            levels_midtones: 0.0,
            levels_highlights: 0.0,
            hue_shift: 0.0,
            saturation: 0.0,
            noise_amount: 0.0,
            noise_scale: DEFAULT_NOISE_SCALE,
            grain_seed: None,
        }
    }
}

impl Adjustments {
    /// Sum of absolute levels deltas; gates edge smoothing.
    pub fn levels_intensity(&self) -> f64 {
        self.levels_shadows.abs() + self.levels_midtones.abs() + self.levels_highlights.abs()
    }

    /// `true` when any levels band is non-zero.
    pub fn has_levels(&self) -> bool {
        self.levels_shadows != 0.0 || self.levels_midtones != 0.0 || self.levels_highlights != 0.0
    }

    /// `true` when hue or saturation is non-neutral.
    pub fn has_color(&self) -> bool {
        normalize_degrees(self.hue_shift) != 0.0 || self.saturation != 0.0
    }

    /// `true` when grain is enabled.
    pub fn has_grain(&self) -> bool {
        self.noise_amount > 0.0
    }

    /// `true` when no stage would touch the buffer.
    pub fn is_neutral(&self) -> bool {
        !self.has_levels() && !self.has_color() && !self.has_grain()
    }

    /// Clamp every field into its documented domain.
    pub fn sanitized(&self) -> Self {
        Self {
            levels_shadows: sanitize_f64(self.levels_shadows, 0.0, -1.0, 1.0),
            levels_midtones: sanitize_f64(self.levels_midtones, 0.0, -1.0, 1.0),
            levels_highlights: sanitize_f64(self.levels_highlights, 0.0, -1.0, 1.0),
            hue_shift: normalize_degrees(self.hue_shift),
            saturation: sanitize_f64(self.saturation, 0.0, -1.0, 1.0),
            noise_amount: sanitize_f64(self.noise_amount, 0.0, 0.0, 1.0),
            noise_scale: sanitize_f64(
                self.noise_scale,
                DEFAULT_NOISE_SCALE,
                NOISE_SCALE_RANGE.0,
                NOISE_SCALE_RANGE.1,
            ),
            grain_seed: self.grain_seed,
        }
    }
}

/// The single value flowing through the whole pipeline.
///
/// Construct directly, via [`Default`], or decode from JSON with
/// [`crate::decode_params`]. The engine sanitizes a copy before every generation, so any
/// field value (including NaN) is safe to render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parameters {
    /// PRNG seed for the flow, organic and variance fields.
    pub seed: u32,
    /// Field-distance function.
    pub blend_mode: BlendMode,
    /// Divisor on the field position; smaller values traverse the palette faster.
    pub color_spread: f64,
    /// Amplitude of the seeded flow displacement, `0..1`.
    pub flow_intensity: f64,
    /// Amplitude of the low-frequency organic warp, `0..1`.
    pub organic_distortion: f64,
    /// Per-pixel color jitter, `0..1`.
    pub color_variance: f64,
    /// Pull of sampling coordinates toward the canvas center, `0..1`.
    pub center_bias: f64,
    /// Horizontal pan in pixels at generation resolution.
    pub offset_x: f64,
    /// Vertical pan in pixels at generation resolution.
    pub offset_y: f64,
    /// Zoom factor; larger shows more detail.
    pub zoom: f64,
    /// Rotation of the sampling frame in degrees.
    pub canvas_rotation: f64,
    /// Fixed-capacity palette.
    pub colors: [ColorStop; STOP_CAPACITY],
    /// Number of active stops in `colors`.
    pub color_count: usize,
    /// Post-processing block.
    pub adjustments: Adjustments,
}

impl Default for Parameters {
    fn default() -> Self {
        let mut colors = [ColorStop::EMPTY; STOP_CAPACITY];
        colors[0] = ColorStop::opaque(0xff, 0x66, 0x33);
        colors[1] = ColorStop::opaque(0x33, 0x33, 0x4d);
        colors[2] = ColorStop::opaque(0x99, 0xcc, 0xe6);
        colors[3] = ColorStop::opaque(0x1a, 0x1a, 0x1a);
        Self {
            seed: DEFAULT_SEED,
            blend_mode: BlendMode::Smooth,
            color_spread: DEFAULT_COLOR_SPREAD,
            flow_intensity: DEFAULT_FLOW_INTENSITY,
            organic_distortion: DEFAULT_ORGANIC_DISTORTION,
            color_variance: DEFAULT_COLOR_VARIANCE,
            center_bias: DEFAULT_CENTER_BIAS,
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: DEFAULT_ZOOM,
            canvas_rotation: 0.0,
            colors,
            color_count: 4,
            adjustments: Adjustments::default(),
        }
    }
}

impl Parameters {
    /// Active stops, `colors[..color_count]` after clamping the count.
    pub fn active_stops(&self) -> &[ColorStop] {
        &self.colors[..clamp_color_count(self.color_count)]
    }

    /// Replace the palette with `stops`, setting `color_count` to their (clamped) length.
    ///
    /// Missing stops are padded with transparent black; extra stops are dropped.
    pub fn set_stops(&mut self, stops: &[ColorStop]) {
        let count = clamp_color_count(stops.len());
        let mut colors = [ColorStop::EMPTY; STOP_CAPACITY];
        for (slot, stop) in colors.iter_mut().zip(stops.iter().take(count)) {
            *slot = *stop;
        }
        self.colors = colors;
        self.color_count = count;
    }

    /// Adjustments with `grain_seed` resolved against [`Parameters::seed`].
    pub fn resolved_adjustments(&self) -> Adjustments {
        Adjustments {
            grain_seed: Some(self.adjustments.grain_seed.unwrap_or(self.seed)),
            ..self.adjustments
        }
    }

    /// Clamp every field into its documented domain and zero-fill inactive stops.
    ///
    /// Idempotent: `p.sanitized().sanitized() == p.sanitized()`.
    pub fn sanitized(&self) -> Self {
        let color_count = clamp_color_count(self.color_count);
        let mut colors = [ColorStop::EMPTY; STOP_CAPACITY];
        for (slot, stop) in colors.iter_mut().zip(self.colors.iter()).take(color_count) {
            *slot = stop.sanitized();
        }

        Self {
            seed: self.seed,
            blend_mode: self.blend_mode,
            color_spread: sanitize_f64(
                self.color_spread,
                DEFAULT_COLOR_SPREAD,
                SPREAD_RANGE.0,
                SPREAD_RANGE.1,
            ),
            flow_intensity: sanitize_f64(self.flow_intensity, DEFAULT_FLOW_INTENSITY, 0.0, 1.0),
            organic_distortion: sanitize_f64(
                self.organic_distortion,
                DEFAULT_ORGANIC_DISTORTION,
                0.0,
                1.0,
            ),
            color_variance: sanitize_f64(self.color_variance, DEFAULT_COLOR_VARIANCE, 0.0, 1.0),
            center_bias: sanitize_f64(self.center_bias, DEFAULT_CENTER_BIAS, 0.0, 1.0),
            offset_x: sanitize_f64(self.offset_x, 0.0, -OFFSET_LIMIT, OFFSET_LIMIT),
            offset_y: sanitize_f64(self.offset_y, 0.0, -OFFSET_LIMIT, OFFSET_LIMIT),
            zoom: sanitize_f64(self.zoom, DEFAULT_ZOOM, ZOOM_RANGE.0, ZOOM_RANGE.1),
            canvas_rotation: normalize_degrees(self.canvas_rotation),
            colors,
            color_count,
            adjustments: self.adjustments.sanitized(),
        }
    }
}

/// Clamp a requested stop count into `[MIN_ACTIVE_STOPS, MAX_ACTIVE_STOPS]`.
pub fn clamp_color_count(n: usize) -> usize {
    n.clamp(MIN_ACTIVE_STOPS, MAX_ACTIVE_STOPS)
}

/// Normalize an angle in degrees into `[0, 360)`. Non-finite input maps to 0.
pub(crate) fn normalize_degrees(deg: f64) -> f64 {
    if !deg.is_finite() {
        return 0.0;
    }
    let d = deg.rem_euclid(360.0);
    if d >= 360.0 { 0.0 } else { d }
}

#[cfg(test)]
#[path = "../../tests/unit/params/model.rs"]
mod tests;
