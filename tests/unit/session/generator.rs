use super::*;
use crate::params::model::BlendMode;

#[test]
fn generate_is_deterministic() {
    let g = GradientGenerator::new();
    let a = g.generate_gradient_data(24, 16).unwrap();
    let b = g.generate_gradient_data(24, 16).unwrap();
    assert_eq!(a.len(), 24 * 16 * 4);
    assert_eq!(a, b);
}

#[test]
fn failed_update_keeps_previous_params() {
    let mut g = GradientGenerator::new();
    g.update_params(r#"{"seed": 7, "blend_mode": "radial"}"#).unwrap();
    let before = *g.params();
    let err = g.update_params(r#"{"seed": "seven"}"#).unwrap_err();
    assert!(matches!(err, GradientError::Serde(_)));
    assert_eq!(*g.params(), before);
    assert_eq!(g.params().blend_mode, BlendMode::Radial);
}

#[test]
fn params_json_round_trips() {
    let mut g = GradientGenerator::new();
    g.update_params(r#"{"seed": 3, "zoom": 2.5, "hue_shift": -90}"#).unwrap();
    let json = g.get_params_json().unwrap();
    let mut h = GradientGenerator::new();
    h.update_params(&json).unwrap();
    assert_eq!(g.params(), h.params());
    assert_eq!(h.params().adjustments.hue_shift, 270.0);
}

#[test]
fn preset_keeps_color_count() {
    let mut g = GradientGenerator::new();
    assert_eq!(g.params().color_count, 4);
    g.apply_color_preset("ocean").unwrap();
    assert_eq!(g.params().color_count, 4);
    assert_eq!(g.params().colors[0], ColorStop::opaque(0x0a, 0xbd, 0xe3));
    assert_eq!(g.params().colors[3], ColorStop::opaque(0x1e, 0x37, 0x99));
    assert_eq!(g.params().colors[4], ColorStop::EMPTY);
}

#[test]
fn unknown_preset_is_validation_error() {
    let mut g = GradientGenerator::new();
    let before = *g.params();
    let err = g.apply_color_preset("vaporwave").unwrap_err();
    assert!(matches!(err, GradientError::Validation(_)));
    assert!(err.to_string().contains("sunset"));
    assert_eq!(*g.params(), before);
}

#[test]
fn randomizers_touch_only_active_stops() {
    let mut g = GradientGenerator::new();
    g.randomize_colors(1234);
    let first = *g.params();
    assert_eq!(first.color_count, 4);
    assert!(first.active_stops().iter().all(|s| s.alpha == 1.0));
    assert_eq!(first.colors[4], ColorStop::EMPTY);

    let mut again = GradientGenerator::new();
    again.randomize_colors(1234);
    assert_eq!(*again.params(), first);

    g.randomize_with_advanced_rng(99, 0.7);
    assert_ne!(g.params().colors, first.colors);
    assert_eq!(g.params().colors[5], ColorStop::EMPTY);
}

#[test]
fn randomize_blending_reseeds() {
    let mut g = GradientGenerator::new();
    g.randomize_blending(77, 0.5);
    assert_eq!(g.params().seed, 77);
    assert!(g.params().flow_intensity <= 0.5);
    assert!(g.params().color_spread >= 0.5);
}

#[test]
fn fingerprint_tracks_output_relevant_changes() {
    let mut g = GradientGenerator::new();
    let a = g.fingerprint().unwrap();
    assert_eq!(a, GradientGenerator::new().fingerprint().unwrap());
    g.update_params(r#"{"seed": 43}"#).unwrap();
    assert_ne!(a, g.fingerprint().unwrap());
}

#[test]
fn threads_option_is_validated() {
    let g = GradientGenerator::new();
    for parallel in [true, false] {
        let opts = RenderOpts {
            threads: Some(0),
            parallel,
            ..RenderOpts::default()
        };
        assert!(matches!(
            g.render(4, 4, &opts),
            Err(GradientError::Validation(_))
        ));
    }
    let opts = RenderOpts {
        threads: Some(2),
        ..RenderOpts::default()
    };
    assert_eq!(
        g.render(9, 5, &opts).unwrap(),
        g.render(9, 5, &RenderOpts::default()).unwrap()
    );
}

#[test]
fn export_differs_from_preview_only_in_post() {
    let mut g = GradientGenerator::new();
    g.update_params(r#"{"levels_midtones": 0.2, "color_variance": 0}"#)
        .unwrap();
    let preview = g.render(16, 16, &RenderOpts::default()).unwrap();
    let export = g.render_export(16, 16).unwrap();
    assert_eq!(preview.data.len(), export.data.len());
    // Alpha comes straight from the field either way.
    for (p, e) in preview.data.chunks_exact(4).zip(export.data.chunks_exact(4)) {
        assert_eq!(p[3], e[3]);
    }
}

#[test]
fn preview_fits_default_box() {
    let g = GradientGenerator::new();
    let r = g.render_preview(1600, 400).unwrap();
    assert_eq!((r.width, r.height), (DEFAULT_PREVIEW_MAX_SIDE, 200));
    assert_eq!(r.data.len(), 800 * 200 * 4);
}
