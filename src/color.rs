//! Color conversions shared by the parameter codec, the field engine and post-processing.
//!
//! All conversions operate on normalized `0..1` sRGB values; there is no linearization.

/// BT.601 luma weights.
pub(crate) const LUMA_R: f64 = 0.299;
pub(crate) const LUMA_G: f64 = 0.587;
pub(crate) const LUMA_B: f64 = 0.114;

pub(crate) fn luminance(r: f64, g: f64, b: f64) -> f64 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

pub(crate) fn luminance_u8(px: &[u8]) -> f64 {
    (LUMA_R * f64::from(px[0]) + LUMA_G * f64::from(px[1]) + LUMA_B * f64::from(px[2])) / 255.0
}

/// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional, case-insensitive).
///
/// Returns the RGB bytes and the optional alpha byte.
pub(crate) fn parse_hex(s: &str) -> Result<([u8; 3], Option<u8>), String> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    if !s.is_ascii() {
        return Err("hex color must be ASCII".to_owned());
    }

    match s.len() {
        6 => Ok((
            [hex_byte(&s[0..2])?, hex_byte(&s[2..4])?, hex_byte(&s[4..6])?],
            None,
        )),
        8 => Ok((
            [hex_byte(&s[0..2])?, hex_byte(&s[2..4])?, hex_byte(&s[4..6])?],
            Some(hex_byte(&s[6..8])?),
        )),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}

pub(crate) fn format_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// RGB -> HSL, all components in `0..1`. Achromatic input yields hue 0 and saturation 0.
pub(crate) fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = max - min;
    let sum = max + min;
    let l = sum / 2.0;

    if diff == 0.0 {
        return (0.0, 0.0, l);
    }

    let s = if l > 0.5 {
        diff / (2.0 - sum)
    } else {
        diff / sum
    };

    let h = if max == r {
        ((g - b) / diff + if g < b { 6.0 } else { 0.0 }) / 6.0
    } else if max == g {
        ((b - r) / diff + 2.0) / 6.0
    } else {
        ((r - g) / diff + 4.0) / 6.0
    };

    (h, s, l)
}

/// HSL -> RGB, all components in `0..1`.
pub(crate) fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    (
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

/// Hue in degrees, saturation and lightness in `0..1`, to RGB bytes.
pub(crate) fn hsl_degrees_to_rgb8(h_deg: f64, s: f64, l: f64) -> [u8; 3] {
    let h = h_deg.rem_euclid(360.0) / 360.0;
    let (r, g, b) = hsl_to_rgb(h, s.clamp(0.0, 1.0), l.clamp(0.0, 1.0));
    [
        crate::foundation::math::unit_to_u8(r),
        crate::foundation::math::unit_to_u8(g),
        crate::foundation::math::unit_to_u8(b),
    ]
}

#[cfg(test)]
#[path = "../tests/unit/color.rs"]
mod tests;
