use super::*;
use crate::params::model::ColorStop;

fn two_stop(mode: BlendMode) -> Parameters {
    let mut p = Parameters {
        blend_mode: mode,
        flow_intensity: 0.0,
        organic_distortion: 0.0,
        color_variance: 0.0,
        center_bias: 0.0,
        color_spread: 1.0,
        ..Parameters::default()
    };
    p.set_stops(&[ColorStop::opaque(255, 0, 0), ColorStop::opaque(0, 0, 255)]);
    p
}

#[test]
fn buffer_has_expected_length() {
    let r = render_field(&Parameters::default(), 7, 3, &RenderOpts::default()).unwrap();
    assert_eq!((r.width, r.height), (7, 3));
    assert_eq!(r.data.len(), 7 * 3 * 4);
}

#[test]
fn zero_sized_canvas_is_empty() {
    for (w, h) in [(0, 0), (0, 10), (10, 0)] {
        let r = render_field(&Parameters::default(), w, h, &RenderOpts::default()).unwrap();
        assert!(r.data.is_empty());
    }
}

#[test]
fn smooth_ramp_runs_left_to_right() {
    let r = render_field(&two_stop(BlendMode::Smooth), 16, 4, &RenderOpts::default()).unwrap();
    let left = r.pixel(0, 2).unwrap();
    let right = r.pixel(15, 2).unwrap();
    assert!(left[0] > left[2]);
    assert!(right[2] > right[0]);
    assert_eq!(left[3], 255);
}

#[test]
fn transparent_stops_produce_transparent_output() {
    let mut p = two_stop(BlendMode::Radial);
    p.set_stops(&[ColorStop::EMPTY, ColorStop::EMPTY]);
    let r = render_field(&p, 5, 5, &RenderOpts::default()).unwrap();
    assert!(r.data.chunks_exact(4).all(|px| px[3] == 0));

    let opts = RenderOpts {
        background: Some([10, 20, 30]),
        ..RenderOpts::default()
    };
    let r = render_field(&p, 5, 5, &opts).unwrap();
    assert!(r.data.chunks_exact(4).all(|px| px == [10, 20, 30, 0]));
}

#[test]
fn parallel_matches_sequential() {
    let p = Parameters {
        blend_mode: BlendMode::Vortex,
        flow_intensity: 0.8,
        organic_distortion: 0.6,
        color_variance: 0.4,
        ..Parameters::default()
    };
    let par = render_field(&p, 33, 17, &RenderOpts::default()).unwrap();
    let seq = render_field(
        &p,
        33,
        17,
        &RenderOpts {
            parallel: false,
            ..RenderOpts::default()
        },
    )
    .unwrap();
    assert_eq!(par, seq);
}

#[test]
fn hostile_floats_render_without_panicking() {
    let p = Parameters {
        color_spread: f64::NAN,
        flow_intensity: f64::INFINITY,
        organic_distortion: -1e9,
        color_variance: f64::NAN,
        center_bias: f64::NEG_INFINITY,
        offset_x: f64::INFINITY,
        offset_y: f64::NAN,
        zoom: 0.0,
        canvas_rotation: 1e9,
        ..Parameters::default()
    };
    let r = render_field(&p, 6, 6, &RenderOpts::default()).unwrap();
    assert_eq!(r.data.len(), 6 * 6 * 4);
}

#[test]
fn variance_changes_output_deterministically() {
    let mut p = two_stop(BlendMode::Smooth);
    let base = render_field(&p, 8, 8, &RenderOpts::default()).unwrap();
    p.color_variance = 1.0;
    let a = render_field(&p, 8, 8, &RenderOpts::default()).unwrap();
    let b = render_field(&p, 8, 8, &RenderOpts::default()).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, base);
    // Jitter never touches alpha.
    assert!(a.data.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn zero_threads_rejected() {
    assert!(matches!(
        build_thread_pool(Some(0)),
        Err(GradientError::Validation(_))
    ));
    assert!(build_thread_pool(Some(2)).is_ok());
}
