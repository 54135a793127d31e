use std::f64::consts::{SQRT_2, TAU};

use crate::{
    foundation::core::Point,
    foundation::math::mirror_wrap01,
    params::model::BlendMode,
};

/// Radius-to-angle coupling of [`BlendMode::Vortex`].
pub(crate) const VORTEX_TWIST: f64 = 1.5;

/// Angle around the origin as a turn fraction in `[0, 1)`. The origin itself maps to 0.
fn turn(p: Point) -> f64 {
    if p.x == 0.0 && p.y == 0.0 {
        return 0.0;
    }
    let t = p.y.atan2(p.x) / TAU;
    let t = t.rem_euclid(1.0);
    if t >= 1.0 { 0.0 } else { t }
}

/// Raw field value for a warped sampling coordinate.
pub(crate) fn field_value(mode: BlendMode, p: Point) -> f64 {
    match mode {
        BlendMode::Smooth => (p.x + 1.0) / 2.0,
        BlendMode::Radial => p.x.hypot(p.y) / SQRT_2,
        BlendMode::Angular => turn(p),
        BlendMode::Diamond => (p.x.abs() + p.y.abs()) / 2.0,
        BlendMode::Vortex => turn(p) + VORTEX_TWIST * p.x.hypot(p.y),
    }
}

/// Palette position in `[0, 1]`: divide by spread, then saturate or mirror-wrap.
pub(crate) fn palette_position(mode: BlendMode, t: f64, color_spread: f64) -> f64 {
    let pos = t / color_spread;
    if !pos.is_finite() {
        return 0.0;
    }
    if mode.is_periodic() {
        mirror_wrap01(pos)
    } else {
        pos.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/field/modes.rs"]
mod tests;
