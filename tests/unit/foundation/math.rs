use super::*;

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u16(255, 255), 255);
    assert_eq!(mul_div255_u16(0, 255), 0);
    assert_eq!(mul_div255_u16(128, 255), 128);
    assert_eq!(mul_div255_u8(255, 90), 90);
}

#[test]
fn lerp_endpoints_and_midpoint() {
    assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
    assert_eq!(lerp(2.0, 10.0, 0.5), 6.0);
    let v = lerp_vec(Vec2::new(0.0, 10.0), Vec2::new(100.0, 0.0), 0.25);
    assert_eq!(v, Vec2::new(25.0, 7.5));
}

#[test]
fn premul_then_unpremul_is_close() {
    let straight = [200, 100, 50, 40];
    let p = premul_rgba8(straight);
    assert_eq!(p[3], 40);
    assert!(p[0] <= 40 && p[1] <= 40 && p[2] <= 40);
    let back = unpremul_rgba8(p);
    for c in 0..3 {
        assert!((i32::from(back[c]) - i32::from(straight[c])).abs() <= 4);
    }
    assert_eq!(unpremul_rgba8([9, 9, 9, 0]), [0, 0, 0, 0]);
}
