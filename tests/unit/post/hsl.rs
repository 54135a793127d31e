use super::*;

fn close(a: [f64; 3], b: [f64; 3]) -> bool {
    a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-9)
}

#[test]
fn hue_rotation_cycles_primaries() {
    assert!(close(apply_hue_saturation([1.0, 0.0, 0.0], 1.0 / 3.0, 0.0), [0.0, 1.0, 0.0]));
    assert!(close(apply_hue_saturation([1.0, 0.0, 0.0], -1.0 / 3.0, 0.0), [0.0, 0.0, 1.0]));
}

#[test]
fn full_desaturation_yields_gray() {
    let out = apply_hue_saturation([0.9, 0.3, 0.1], 0.0, -1.0);
    assert!((out[0] - out[1]).abs() < 1e-12);
    assert!((out[1] - out[2]).abs() < 1e-12);
}

#[test]
fn gray_is_stable_under_hue_shift() {
    let g = [0.4, 0.4, 0.4];
    assert!(close(apply_hue_saturation(g, 0.25, 0.0), g));
}
