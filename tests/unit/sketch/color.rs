use super::*;
use crate::noise::{NoiseConfig, PerlinNoise, ValueNoise};

struct Const(f64);

impl NoiseField for Const {
    fn sample2(&self, _x: f64, _y: f64) -> f64 {
        self.0
    }
}

#[test]
fn channels_span_documented_ranges() {
    let lo = stroke_color(&Const(0.0), 30.0, FrameIndex(1), 40.0);
    assert_eq!((lo.r, lo.g, lo.b, lo.a), (0.0, 0.0, 50.0, 40.0));
    let hi = stroke_color(&Const(1.0), 30.0, FrameIndex(1), 40.0);
    assert_eq!((hi.r, hi.g, hi.b), (50.0, 180.0, 270.0));
}

#[test]
fn channels_stay_in_range_for_both_noise_kinds() {
    let fields: [Box<dyn NoiseField>; 2] = [
        Box::new(ValueNoise::new(8, NoiseConfig::default())),
        Box::new(PerlinNoise::new(8, NoiseConfig::default())),
    ];
    for n in &fields {
        for f in (0..1000).step_by(53) {
            for a in (1..360).step_by(17) {
                let c = stroke_color(n.as_ref(), a as f64, FrameIndex(f), 40.0);
                assert!((0.0..=50.0).contains(&c.r));
                assert!((0.0..=180.0).contains(&c.g));
                assert!((50.0..=270.0).contains(&c.b));
            }
        }
    }
}

#[test]
fn red_depends_only_on_angle() {
    let n = ValueNoise::new(2, NoiseConfig::default());
    let a = stroke_color(&n, 77.0, FrameIndex(0), 40.0);
    let b = stroke_color(&n, 77.0, FrameIndex(999), 40.0);
    assert_eq!(a.r, b.r);
}

#[test]
fn quantization_saturates_blue() {
    let c = StrokeColor {
        r: 12.4,
        g: 179.6,
        b: 270.0,
        a: 40.0,
    };
    assert_eq!(c.to_rgba8(), [12, 180, 255, 40]);
}
