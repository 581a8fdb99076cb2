use super::*;
use crate::noise::{NoiseConfig, ValueNoise};

struct Const(f64);

impl NoiseField for Const {
    fn sample2(&self, _x: f64, _y: f64) -> f64 {
        self.0
    }
}

#[test]
fn body_angles_cover_one_to_three_sixty() {
    let angles: Vec<f64> = AngleSteps::body(&Style::default()).collect();
    assert_eq!(angles.len(), 1796);
    assert_eq!(angles[0], 1.0);
    assert!((angles[angles.len() - 1] - 360.0).abs() < 1e-9);
    assert_eq!(AngleSteps::body(&Style::default()).len(), 1796);
}

#[test]
fn tentacle_angles_are_eighteen() {
    let angles: Vec<f64> = AngleSteps::tentacles(&Style::default()).collect();
    assert_eq!(angles.len(), 18);
    assert_eq!(angles[0], 1.0);
    assert_eq!(angles[17], 341.0);
}

#[test]
fn degenerate_steps_are_empty() {
    assert_eq!(AngleSteps::new(1.0, 360.0, 0.0).count(), 0);
    assert_eq!(AngleSteps::new(10.0, 5.0, 1.0).count(), 0);
}

#[test]
fn vanishing_step_saturates_length() {
    let steps = AngleSteps::new(1.0, 360.0, 1e-300);
    assert_eq!(steps.len(), usize::MAX);
    assert_eq!(steps.take(2).collect::<Vec<_>>(), vec![1.0, 1.0]);
}

#[test]
fn radii_stay_in_range_for_all_frames() {
    let n = ValueNoise::new(99, NoiseConfig::default());
    for f in 0..5000 {
        let b = body_radius(&n, FrameIndex(f));
        assert!((100.0..=300.0).contains(&b), "body radius {b} at {f}");
        let t = tentacle_radius(&n, FrameIndex(f));
        assert!((20.0..=40.0).contains(&t), "tentacle radius {t} at {f}");
    }
}

#[test]
fn body_stroke_vertices_with_zero_noise() {
    let c = Point::new(500.0, 400.0);
    let s = body_stroke(&Const(0.0), c, 100.0, FrameIndex(0), 90.0, &Style::default());
    assert_eq!(s.points[0], Point::new(500.0, 500.0));
    assert_eq!(s.points[1], Point::new(500.0, 280.0));
    // y = 400 + 100 * sin(90deg) + 200 = 700
    let x = 500.0 + 100.0 * 90f64.to_radians().cos();
    assert!((s.points[2].x - x).abs() < 1e-9);
    assert!((s.points[2].y - (700.0 / 25.0 + 400.0 + 50.0)).abs() < 1e-9);
    assert!((s.points[3].x - (x + 500.0)).abs() < 1e-9);
    assert!((s.points[3].y - (700.0 / 10.0 + 1000.0)).abs() < 1e-9);
    assert_eq!(s.weight, 1.0);

    let later = body_stroke(&Const(0.0), c, 100.0, FrameIndex(1), 90.0, &Style::default());
    assert_eq!(later.weight, 6.0);
}

#[test]
fn tentacle_stroke_vertices_with_zero_noise() {
    let c = Point::new(500.0, 400.0);
    let s = tentacle_stroke(&Const(0.0), c, 20.0, FrameIndex(0), 0.0, &Style::default());
    // cos(0) = 1: x = 560, x2 = 510, y = 400.
    assert_eq!(s.points[0], Point::new(510.0, 600.0));
    assert_eq!(s.points[1], Point::new(510.0, 360.0));
    assert!((s.points[2].x - 660.0).abs() < 1e-9);
    assert!((s.points[2].y - (400.0 / 1.1 + 500.0 + 50.0)).abs() < 1e-9);
    assert_eq!(s.points[3], Point::new(1060.0, 1040.0));
    assert_eq!(s.weight, 6.0);
}
