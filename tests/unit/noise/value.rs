use super::*;

fn grid() -> impl Iterator<Item = (f64, f64)> {
    (0..60).flat_map(|i| (0..20).map(move |j| (i as f64 * 0.173, j as f64 * 0.917)))
}

#[test]
fn output_stays_in_unit_interval() {
    let n = ValueNoise::new(3, NoiseConfig::default());
    for (x, y) in grid() {
        let v = n.sample2(x, y);
        assert!((0.0..=1.0).contains(&v), "{v} at ({x}, {y})");
    }
}

#[test]
fn loud_configs_are_normalized() {
    let cfg = NoiseConfig {
        octaves: 8,
        falloff: 1.0,
        ..NoiseConfig::default()
    };
    let n = ValueNoise::new(11, cfg);
    for (x, y) in grid() {
        let v = n.sample2(x, y);
        assert!((0.0..=1.0).contains(&v));
    }
}

#[test]
fn same_seed_same_values_different_seed_differs() {
    let a = ValueNoise::new(9, NoiseConfig::default());
    let b = ValueNoise::new(9, NoiseConfig::default());
    let c = ValueNoise::new(10, NoiseConfig::default());
    let mut any_diff = false;
    for (x, y) in grid() {
        assert_eq!(a.sample2(x, y), b.sample2(x, y));
        any_diff |= a.sample2(x, y) != c.sample2(x, y);
    }
    assert!(any_diff);
}

#[test]
fn field_is_continuous() {
    let n = ValueNoise::new(5, NoiseConfig::default());
    let eps = 1e-6;
    for (x, y) in grid() {
        let d = (n.sample2(x + eps, y) - n.sample2(x, y)).abs();
        assert!(d < 1e-3, "jump of {d} at ({x}, {y})");
    }
}

#[test]
fn negative_coordinates_are_mirrored() {
    let n = ValueNoise::new(5, NoiseConfig::default());
    assert_eq!(n.sample2(-1.25, -0.5), n.sample2(1.25, 0.5));
}
