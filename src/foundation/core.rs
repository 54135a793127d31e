use crate::foundation::error::{GradientError, GradientResult};

pub use kurbo::{Affine, Point, Vec2};

/// Rendering quality. The field math is shared; only post-processing thresholds differ.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    /// Interactive preview.
    #[default]
    Preview,
    /// Full-quality export; more aggressive anti-banding.
    Export,
}

/// A generated raster as RGBA8 pixels.
///
/// Pixels are **straight** (non-premultiplied) alpha, row-major, top-left origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl Raster {
    /// A zero-sized raster with the given (possibly zero) dimensions.
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: Vec::new(),
        }
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba8Premul {
    /// Red, premultiplied.
    pub r: u8,
    /// Green, premultiplied.
    pub g: u8,
    /// Blue, premultiplied.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8Premul {
    /// Premultiply straight RGBA8 components.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Components as an array.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Byte length of a `width x height` RGBA8 buffer, checked for overflow.
pub fn rgba_len(width: u32, height: u32) -> GradientResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| GradientError::evaluation("raster buffer size overflow"))
}

/// Fit `width x height` inside a `max_side` box, keeping the aspect ratio.
///
/// Dimensions already inside the box are returned unchanged. A non-zero side never shrinks
/// to zero.
pub fn preview_dimensions(width: u32, height: u32, max_side: u32) -> (u32, u32) {
    if width == 0 || height == 0 || max_side == 0 {
        return (0, 0);
    }
    if width <= max_side && height <= max_side {
        return (width, height);
    }
    let aspect = f64::from(width) / f64::from(height);
    if aspect >= 1.0 {
        let h = (f64::from(max_side) / aspect).round().max(1.0) as u32;
        (max_side, h)
    } else {
        let w = (f64::from(max_side) * aspect).round().max(1.0) as u32;
        (w, max_side)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
