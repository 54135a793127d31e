use super::*;

fn gradient_buf(w: u32, h: u32) -> Vec<u8> {
    let mut buf = Vec::new();
    for y in 0..h {
        for x in 0..w {
            buf.extend_from_slice(&[(x * 20) as u8, (y * 30) as u8, 128, 200]);
        }
    }
    buf
}

#[test]
fn neutral_adjustments_are_noop() {
    let mut buf = gradient_buf(8, 6);
    let before = buf.clone();
    let adj = Adjustments {
        hue_shift: 720.0,
        grain_seed: Some(5),
        ..Adjustments::default()
    };
    let stats = apply_post_processing(&mut buf, 8, 6, &adj, Quality::Export).unwrap();
    assert_eq!(stats, PostStats::default());
    assert_eq!(buf, before);
}

#[test]
fn length_mismatch_is_evaluation_error() {
    let mut buf = vec![0u8; 10];
    let adj = Adjustments {
        saturation: 0.5,
        ..Adjustments::default()
    };
    let err = apply_post_processing(&mut buf, 2, 2, &adj, Quality::Preview).unwrap_err();
    assert!(matches!(err, GradientError::Evaluation(_)));
}

#[test]
fn alpha_is_never_modified() {
    let mut buf = gradient_buf(10, 10);
    let adj = Adjustments {
        levels_shadows: 0.5,
        levels_highlights: -0.5,
        hue_shift: 90.0,
        saturation: 0.4,
        noise_amount: 1.0,
        grain_seed: Some(1),
        ..Adjustments::default()
    };
    let stats = apply_post_processing(&mut buf, 10, 10, &adj, Quality::Export).unwrap();
    assert!(stats.levels && stats.color && stats.grain && stats.smoothing);
    assert!(buf.chunks_exact(4).all(|px| px[3] == 200));
}

#[test]
fn smoothing_gate_depends_on_quality() {
    let adj = Adjustments {
        levels_midtones: 0.2,
        ..Adjustments::default()
    };
    let mut buf = gradient_buf(4, 4);
    let preview = apply_post_processing(&mut buf, 4, 4, &adj, Quality::Preview).unwrap();
    assert!(!preview.smoothing);
    let mut buf = gradient_buf(4, 4);
    let export = apply_post_processing(&mut buf, 4, 4, &adj, Quality::Export).unwrap();
    assert!(export.smoothing);
}

#[test]
fn highlights_brighten_bright_pixels() {
    let (w, h) = (6, 6);
    let mut prev: Option<Vec<u8>> = None;
    for step in 0..=5 {
        let mut buf = [220u8, 220, 220, 255].repeat(w * h);
        let adj = Adjustments {
            levels_highlights: f64::from(step) * 0.1,
            ..Adjustments::default()
        };
        apply_post_processing(&mut buf, w as u32, h as u32, &adj, Quality::Preview).unwrap();
        if let Some(p) = &prev {
            assert!(buf.iter().zip(p).all(|(a, b)| a >= b));
        }
        prev = Some(buf);
    }
    assert!(prev.unwrap()[0] > 220);
}

#[test]
fn grain_is_deterministic_and_seeded() {
    let adj = Adjustments {
        noise_amount: 0.8,
        noise_scale: 2.0,
        grain_seed: Some(99),
        ..Adjustments::default()
    };
    let run = |adj: &Adjustments| {
        let mut buf = gradient_buf(12, 9);
        apply_post_processing(&mut buf, 12, 9, adj, Quality::Preview).unwrap();
        buf
    };
    assert_eq!(run(&adj), run(&adj));
    let other = Adjustments {
        grain_seed: Some(100),
        ..adj
    };
    assert_ne!(run(&adj), run(&other));
}

#[test]
fn sequential_matches_parallel() {
    let adj = Adjustments {
        levels_shadows: 0.6,
        levels_highlights: 0.3,
        saturation: -0.3,
        noise_amount: 0.5,
        ..Adjustments::default()
    };
    let mut a = gradient_buf(15, 13);
    let mut b = a.clone();
    let sa = post_process(&mut a, 15, 13, &adj, Quality::Export, true).unwrap();
    let sb = post_process(&mut b, 15, 13, &adj, Quality::Export, false).unwrap();
    assert_eq!(a, b);
    assert_eq!(sa, sb);
}

#[test]
fn empty_buffer_is_ok() {
    let adj = Adjustments {
        saturation: 1.0,
        ..Adjustments::default()
    };
    let stats = apply_post_processing(&mut [], 0, 5, &adj, Quality::Export).unwrap();
    assert_eq!(stats, PostStats::default());
}
