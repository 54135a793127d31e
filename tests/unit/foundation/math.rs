use super::*;

#[test]
fn fnv_matches_reference_vectors() {
    assert_eq!(Fnv1a64::new_default().finish(), 0xcbf2_9ce4_8422_2325);
    let mut h = Fnv1a64::new_default();
    h.write_bytes(b"a");
    assert_eq!(h.finish(), 0xaf63_dc4c_8601_ec8c);

    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"gradient");
    let mut b = Fnv1a64::new_default();
    b.write_bytes(b"grad");
    b.write_bytes(b"ient");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(0, 255), 0);
    assert_eq!(mul_div255_u16(128, 255), 128);
    assert_eq!(mul_div255_u16(255, 128), 128);
    assert_eq!(mul_div255_u16(1, 127), 0);
}

#[test]
fn splitmix_streams_repeat_for_same_seed() {
    let mut a = SplitMix64::new(42);
    let mut b = SplitMix64::new(42);
    let mut c = SplitMix64::new(43);
    let xs: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
    let ys: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
    let zs: Vec<u64> = (0..8).map(|_| c.next_u64()).collect();
    assert_eq!(xs, ys);
    assert_ne!(xs, zs);
}

#[test]
fn unit_ranges_hold() {
    let mut r = SplitMix64::new(7);
    for _ in 0..1000 {
        let u = r.next_f64();
        assert!((0.0..1.0).contains(&u));
        let s = signed_unit_f64(r.next_u64());
        assert!((-1.0..1.0).contains(&s));
    }
    assert_eq!(unit_f64(0), 0.0);
    assert!(unit_f64(u64::MAX) < 1.0);
}

#[test]
fn hash_coords_separates_axes() {
    assert_ne!(hash_coords(1, 2, 3), hash_coords(1, 3, 2));
    assert_ne!(hash_coords(1, 2, 3), hash_coords(2, 2, 3));
    assert_eq!(hash_coords(9, -4, 5), hash_coords(9, -4, 5));
}

#[test]
fn sanitize_handles_non_finite() {
    assert_eq!(sanitize_f64(f64::NAN, 0.5, 0.0, 1.0), 0.5);
    assert_eq!(sanitize_f64(f64::INFINITY, 0.5, 0.0, 1.0), 1.0);
    assert_eq!(sanitize_f64(f64::NEG_INFINITY, 0.5, 0.0, 1.0), 0.0);
    assert_eq!(sanitize_f64(0.25, 0.5, 0.0, 1.0), 0.25);
}

#[test]
fn mirror_wrap_ping_pongs() {
    assert_eq!(mirror_wrap01(0.25), 0.25);
    assert!((mirror_wrap01(1.25) - 0.75).abs() < 1e-12);
    assert!((mirror_wrap01(-0.25) - 0.25).abs() < 1e-12);
    assert_eq!(mirror_wrap01(f64::NAN), 0.0);
}

#[test]
fn unit_to_u8_clamps_and_rounds() {
    assert_eq!(unit_to_u8(-3.0), 0);
    assert_eq!(unit_to_u8(2.0), 255);
    assert_eq!(unit_to_u8(0.5), 128);
    assert_eq!(unit_to_u8(f64::NAN), 0);
    assert_eq!(unit_to_u8(f64::INFINITY), 255);
}

#[test]
fn smoothstep_endpoints() {
    assert_eq!(smoothstep01(0.0), 0.0);
    assert_eq!(smoothstep01(1.0), 1.0);
    assert_eq!(smoothstep01(0.5), 0.5);
    assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
}
