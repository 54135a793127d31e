use crate::foundation::{
    core::Rgba8Premul,
    math::mul_div255_u16,
};

/// Source-over for premultiplied RGBA8.
pub(crate) fn over(dst: Rgba8Premul, src: Rgba8Premul) -> Rgba8Premul {
    if src.a == 0 {
        return dst;
    }
    let inv = 255u16 - u16::from(src.a);
    let blend = |s: u8, d: u8| -> u8 {
        let v = u16::from(s) + mul_div255_u16(u16::from(d), inv);
        v.min(255) as u8
    };
    Rgba8Premul {
        r: blend(src.r, dst.r),
        g: blend(src.g, dst.g),
        b: blend(src.b, dst.b),
        a: blend(src.a, dst.a),
    }
}

/// Flatten straight `[r, g, b, a]` over an opaque background.
///
/// Color comes from the composite; the alpha byte is the source's own.
pub(crate) fn flatten_onto(px: [u8; 4], background: [u8; 3]) -> [u8; 4] {
    let src = Rgba8Premul::from_straight_rgba(px[0], px[1], px[2], px[3]);
    let dst = Rgba8Premul::from_straight_rgba(background[0], background[1], background[2], 255);
    let out = over(dst, src);
    [out.r, out.g, out.b, px[3]]
}

#[cfg(test)]
#[path = "../../tests/unit/field/composite.rs"]
mod tests;
