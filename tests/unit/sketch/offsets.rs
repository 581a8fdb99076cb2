use super::*;
use crate::noise::{NoiseConfig, ValueNoise};

struct Const(f64);

impl NoiseField for Const {
    fn sample2(&self, _x: f64, _y: f64) -> f64 {
        self.0
    }
}

#[test]
fn extremes_of_noise_map_to_documented_ranges() {
    let lo = NoiseOffsets::sample(&Const(0.0), 150.0, FrameIndex(3), 90.0);
    assert_eq!(lo.noise_y, 0.0);
    assert_eq!(lo.noise_y2, 50.0);
    assert_eq!(lo.noise_x, 500.0);
    assert_eq!(lo.noise_x2, 100.0);

    let hi = NoiseOffsets::sample(&Const(1.0), 150.0, FrameIndex(3), 90.0);
    assert_eq!(hi.noise_y, 100.0);
    assert_eq!(hi.noise_y2, -50.0);
    assert_eq!(hi.noise_x, -600.0);
    assert_eq!(hi.noise_x2, -100.0);
}

#[test]
fn real_noise_stays_inside_ranges() {
    let n = ValueNoise::new(21, NoiseConfig::default());
    for f in (0..600).step_by(37) {
        for a in [1.0, 45.2, 180.0, 359.8] {
            let o = NoiseOffsets::sample(&n, 230.0, FrameIndex(f), a);
            assert!((0.0..=100.0).contains(&o.noise_y));
            assert!((-50.0..=50.0).contains(&o.noise_y2));
            assert!((-600.0..=500.0).contains(&o.noise_x));
            assert!((-100.0..=100.0).contains(&o.noise_x2));
        }
    }
}

#[test]
fn noise_y_ignores_frame() {
    let n = ValueNoise::new(4, NoiseConfig::default());
    let a = NoiseOffsets::sample(&n, 120.0, FrameIndex(0), 10.0);
    let b = NoiseOffsets::sample(&n, 120.0, FrameIndex(500), 10.0);
    assert_eq!(a.noise_y, b.noise_y);
}
