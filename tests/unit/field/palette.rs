use super::*;

fn red_blue() -> Palette {
    Palette::new(&[ColorStop::opaque(255, 0, 0), ColorStop::opaque(0, 0, 255)])
}

#[test]
fn endpoints_hit_stops_exactly() {
    let p = red_blue();
    assert_eq!(p.sample(0.0), [1.0, 0.0, 0.0, 1.0]);
    assert_eq!(p.sample(1.0), [0.0, 0.0, 1.0, 1.0]);
    assert_eq!(p.sample(-3.0), [1.0, 0.0, 0.0, 1.0]);
    assert_eq!(p.sample(9.0), [0.0, 0.0, 1.0, 1.0]);
}

#[test]
fn midpoint_is_even_blend() {
    let c = red_blue().sample(0.5);
    assert!((c[0] - 0.5).abs() < 1e-12);
    assert!((c[2] - 0.5).abs() < 1e-12);
}

#[test]
fn easing_flattens_near_stops() {
    let c = red_blue().sample(0.1);
    // smoothstep(0.1) = 0.028
    assert!((c[2] - 0.028).abs() < 1e-12);
}

#[test]
fn alpha_interpolates_with_color() {
    let p = Palette::new(&[
        ColorStop::opaque(0, 0, 0),
        ColorStop::EMPTY,
        ColorStop::opaque(255, 255, 255),
    ]);
    assert_eq!(p.sample(0.5)[3], 0.0);
    assert!((p.sample(0.25)[3] - 0.5).abs() < 1e-12);
}

#[test]
fn single_and_empty_palettes() {
    let one = Palette::new(&[ColorStop::opaque(255, 255, 255)]);
    assert_eq!(one.sample(0.7), [1.0, 1.0, 1.0, 1.0]);
    assert_eq!(Palette::new(&[]).sample(0.5), [0.0; 4]);
}
