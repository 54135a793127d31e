//! JSON codec for [`Parameters`].
//!
//! Decoding is lenient about values and strict about shape: every field is optional and
//! out-of-domain numbers are clamped, but a payload that is not an object, carries a field
//! of the wrong JSON type, or contains an unparseable color is rejected as a whole.

use serde::{Deserialize, Serialize};

use crate::{
    color::{format_hex, parse_hex},
    foundation::error::{GradientError, GradientResult},
    foundation::math::unit_to_u8,
    params::model::{
        Adjustments, BlendMode, ColorStop, DEFAULT_CENTER_BIAS, DEFAULT_COLOR_SPREAD,
        DEFAULT_COLOR_VARIANCE, DEFAULT_FLOW_INTENSITY, DEFAULT_NOISE_SCALE,
        DEFAULT_ORGANIC_DISTORTION, DEFAULT_SEED, DEFAULT_ZOOM, MAX_ACTIVE_STOPS,
        MIN_ACTIVE_STOPS, Parameters, STOP_CAPACITY, clamp_color_count,
    },
};

/// Decode a JSON payload into sanitized [`Parameters`].
pub fn decode_params(payload: &str) -> GradientResult<Parameters> {
    let value: serde_json::Value = serde_json::from_str(payload)?;
    decode_params_value(&value)
}

/// Decode an already-parsed JSON value into sanitized [`Parameters`].
pub fn decode_params_value(value: &serde_json::Value) -> GradientResult<Parameters> {
    if !value.is_object() {
        return Err(GradientError::serde("parameter payload must be a JSON object"));
    }
    let raw = RawParameters::deserialize(value)?;
    raw.into_parameters()
}

/// Encode [`Parameters`] in canonical form (active stops only).
pub fn encode_params(params: &Parameters) -> GradientResult<serde_json::Value> {
    Ok(serde_json::to_value(CanonicalParameters::from(params))?)
}

impl Serialize for Parameters {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        CanonicalParameters::from(self).serialize(s)
    }
}

impl<'de> Deserialize<'de> for Parameters {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        RawParameters::deserialize(d)?
            .into_parameters()
            .map_err(serde::de::Error::custom)
    }
}

#[derive(Serialize)]
struct CanonicalParameters {
    seed: u32,
    blend_mode: BlendMode,
    color_spread: f64,
    flow_intensity: f64,
    organic_distortion: f64,
    color_variance: f64,
    center_bias: f64,
    offset_x: f64,
    offset_y: f64,
    zoom: f64,
    canvas_rotation: f64,
    color_count: usize,
    colors: Vec<CanonicalStop>,
    levels_shadows: f64,
    levels_midtones: f64,
    levels_highlights: f64,
    hue_shift: f64,
    saturation: f64,
    noise_amount: f64,
    noise_scale: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    grain_seed: Option<u32>,
}

#[derive(Serialize)]
struct CanonicalStop {
    hex: String,
    alpha: f64,
}

impl From<&Parameters> for CanonicalParameters {
    fn from(p: &Parameters) -> Self {
        let a = &p.adjustments;
        Self {
            seed: p.seed,
            blend_mode: p.blend_mode,
            color_spread: p.color_spread,
            flow_intensity: p.flow_intensity,
            organic_distortion: p.organic_distortion,
            color_variance: p.color_variance,
            center_bias: p.center_bias,
            offset_x: p.offset_x,
            offset_y: p.offset_y,
            zoom: p.zoom,
            canvas_rotation: p.canvas_rotation,
            color_count: p.active_stops().len(),
            colors: p
                .active_stops()
                .iter()
                .map(|s| CanonicalStop {
                    hex: format_hex(s.rgb),
                    alpha: s.alpha,
                })
                .collect(),
            levels_shadows: a.levels_shadows,
            levels_midtones: a.levels_midtones,
            levels_highlights: a.levels_highlights,
            hue_shift: a.hue_shift,
            saturation: a.saturation,
            noise_amount: a.noise_amount,
            noise_scale: a.noise_scale,
            grain_seed: a.grain_seed,
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawParameters {
    seed: Option<serde_json::Number>,
    blend_mode: Option<BlendMode>,
    color_spread: Option<f64>,
    flow_intensity: Option<f64>,
    organic_distortion: Option<f64>,
    color_variance: Option<f64>,
    center_bias: Option<f64>,
    offset_x: Option<f64>,
    offset_y: Option<f64>,
    zoom: Option<f64>,
    canvas_rotation: Option<f64>,
    color_count: Option<serde_json::Number>,
    colors: Option<Vec<StopRepr>>,
    color_1: Option<Vec<f64>>,
    color_2: Option<Vec<f64>>,
    color_3: Option<Vec<f64>>,
    color_4: Option<Vec<f64>>,
    color_5: Option<Vec<f64>>,
    color_6: Option<Vec<f64>>,
    color_7: Option<Vec<f64>>,
    color_8: Option<Vec<f64>>,
    levels_shadows: Option<f64>,
    levels_midtones: Option<f64>,
    levels_highlights: Option<f64>,
    hue_shift: Option<f64>,
    saturation: Option<f64>,
    noise_amount: Option<f64>,
    noise_scale: Option<f64>,
    grain_seed: Option<serde_json::Number>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StopRepr {
    Hex(String),
    Obj {
        hex: String,
        #[serde(default = "one")]
        alpha: f64,
    },
    Arr(Vec<f64>),
}

fn one() -> f64 {
    1.0
}

impl StopRepr {
    fn to_stop(&self) -> GradientResult<ColorStop> {
        match self {
            StopRepr::Hex(s) => {
                let (rgb, a) = parse_hex(s).map_err(GradientError::serde)?;
                let alpha = a.map_or(1.0, |a| f64::from(a) / 255.0);
                Ok(ColorStop { rgb, alpha })
            }
            StopRepr::Obj { hex, alpha } => {
                let (rgb, _) = parse_hex(hex).map_err(GradientError::serde)?;
                Ok(ColorStop { rgb, alpha: *alpha })
            }
            StopRepr::Arr(v) => unit_array_to_stop(v),
        }
    }
}

fn unit_array_to_stop(v: &[f64]) -> GradientResult<ColorStop> {
    match v {
        [r, g, b] => Ok(ColorStop {
            rgb: [unit_to_u8(*r), unit_to_u8(*g), unit_to_u8(*b)],
            alpha: 1.0,
        }),
        [r, g, b, a] => Ok(ColorStop {
            rgb: [unit_to_u8(*r), unit_to_u8(*g), unit_to_u8(*b)],
            alpha: *a,
        }),
        _ => Err(GradientError::serde(
            "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
        )),
    }
}

/// Wrap any JSON integer into `u32` (low 32 bits). Integral floats are accepted.
fn wrap_u32(n: &serde_json::Number, field: &str) -> GradientResult<u32> {
    if let Some(v) = n.as_u64() {
        return Ok(v as u32);
    }
    if let Some(v) = n.as_i64() {
        return Ok(v as u32);
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 => Ok((f as i64) as u32),
        _ => Err(GradientError::serde(format!("'{field}' must be an integer"))),
    }
}

/// Saturate any JSON number into a stop count. Negatives become 0, floats truncate.
fn saturate_count(n: &serde_json::Number) -> usize {
    if let Some(v) = n.as_u64() {
        return usize::try_from(v).unwrap_or(usize::MAX);
    }
    if n.as_i64().is_some() {
        return 0;
    }
    match n.as_f64() {
        Some(f) if f > 0.0 => f as usize,
        _ => 0,
    }
}

impl RawParameters {
    fn into_parameters(self) -> GradientResult<Parameters> {
        let seed = match &self.seed {
            Some(n) => wrap_u32(n, "seed")?,
            None => DEFAULT_SEED,
        };
        let grain_seed = match &self.grain_seed {
            Some(n) => Some(wrap_u32(n, "grain_seed")?),
            None => None,
        };

        let stops = match self.collect_stops()? {
            Some(stops) => stops,
            None => Parameters::default().active_stops().to_vec(),
        };
        let requested = match &self.color_count {
            Some(n) => saturate_count(n),
            None => stops.len(),
        };
        let color_count = clamp_color_count(requested);
        if color_count != requested || stops.len() < color_count {
            tracing::warn!(
                requested,
                supplied = stops.len(),
                color_count,
                min = MIN_ACTIVE_STOPS,
                max = MAX_ACTIVE_STOPS,
                "color stops clamped"
            );
        }

        let mut colors = [ColorStop::EMPTY; STOP_CAPACITY];
        for (slot, stop) in colors.iter_mut().zip(stops) {
            *slot = stop;
        }

        let adjustments = Adjustments {
            levels_shadows: self.levels_shadows.unwrap_or(0.0),
            levels_midtones: self.levels_midtones.unwrap_or(0.0),
            levels_highlights: self.levels_highlights.unwrap_or(0.0),
            hue_shift: self.hue_shift.unwrap_or(0.0),
            saturation: self.saturation.unwrap_or(0.0),
            noise_amount: self.noise_amount.unwrap_or(0.0),
            noise_scale: self.noise_scale.unwrap_or(DEFAULT_NOISE_SCALE),
            grain_seed,
        };

        let params = Parameters {
            seed,
            blend_mode: self.blend_mode.unwrap_or_default(),
            color_spread: self.color_spread.unwrap_or(DEFAULT_COLOR_SPREAD),
            flow_intensity: self.flow_intensity.unwrap_or(DEFAULT_FLOW_INTENSITY),
            organic_distortion: self.organic_distortion.unwrap_or(DEFAULT_ORGANIC_DISTORTION),
            color_variance: self.color_variance.unwrap_or(DEFAULT_COLOR_VARIANCE),
            center_bias: self.center_bias.unwrap_or(DEFAULT_CENTER_BIAS),
            offset_x: self.offset_x.unwrap_or(0.0),
            offset_y: self.offset_y.unwrap_or(0.0),
            zoom: self.zoom.unwrap_or(DEFAULT_ZOOM),
            canvas_rotation: self.canvas_rotation.unwrap_or(0.0),
            colors,
            color_count,
            adjustments,
        };
        Ok(params.sanitized())
    }

    /// Stops from `colors`, or from the legacy `color_N` slots when `colors` is absent.
    /// `None` when the payload carries neither.
    ///
    /// Legacy slots are positional: the list runs up to the highest slot present, with gaps
    /// filled by transparent black.
    fn collect_stops(&self) -> GradientResult<Option<Vec<ColorStop>>> {
        if let Some(colors) = &self.colors {
            let mut out = Vec::with_capacity(colors.len().min(STOP_CAPACITY));
            for repr in colors.iter().take(STOP_CAPACITY) {
                out.push(repr.to_stop()?);
            }
            return Ok(Some(out));
        }

        let legacy = [
            &self.color_1,
            &self.color_2,
            &self.color_3,
            &self.color_4,
            &self.color_5,
            &self.color_6,
            &self.color_7,
            &self.color_8,
        ];
        let Some(last) = legacy.iter().rposition(|c| c.is_some()) else {
            return Ok(None);
        };
        let present = last + 1;
        let mut out = Vec::with_capacity(present);
        for slot in legacy.iter().take(present) {
            out.push(match slot {
                Some(v) => unit_array_to_stop(v)?,
                None => ColorStop::EMPTY,
            });
        }
        Ok(Some(out))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/params/codec.rs"]
mod tests;
