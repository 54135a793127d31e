use crate::{
    foundation::core::{Affine, Point, Vec2},
    foundation::math::lerp,
    params::model::Parameters,
};

/// Share of the distance to the origin removed at `center_bias = 1`.
pub(crate) const CENTER_PULL: f64 = 0.5;

/// Maps pixel indices to the normalized, aspect-preserving sampling plane.
///
/// The shorter canvas side spans `[-1, 1]`; rotation, zoom and pan are folded into a single
/// affine so every pixel costs one matrix multiply.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SamplingFrame {
    affine: Affine,
    center_bias: f64,
}

impl SamplingFrame {
    pub(crate) fn new(width: u32, height: u32, params: &Parameters) -> Self {
        let w = f64::from(width);
        let h = f64::from(height);
        let half = (w.min(h) / 2.0).max(0.5);

        let to_unit = Affine::scale(1.0 / half) * Affine::translate((-w / 2.0, -h / 2.0));
        let view = Affine::translate(Vec2::new(params.offset_x / half, params.offset_y / half))
            * Affine::scale(1.0 / params.zoom)
            * Affine::rotate(params.canvas_rotation.to_radians());

        Self {
            affine: view * to_unit,
            center_bias: params.center_bias,
        }
    }

    /// Sampling coordinate of the center of pixel `(x, y)`, center bias applied.
    pub(crate) fn sample(&self, x: u32, y: u32) -> Point {
        let p = self.affine * Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
        let k = lerp(1.0, 1.0 - CENTER_PULL, self.center_bias);
        Point::new(p.x * k, p.y * k)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/transform.rs"]
mod tests;
