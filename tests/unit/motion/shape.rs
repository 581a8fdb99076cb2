use super::*;

fn canvas() -> Canvas {
    Canvas {
        width: 1000,
        height: 800,
    }
}

fn released() -> PointerState {
    PointerState::released(Point::new(500.0, 400.0))
}

fn within_bounds(s: &AnimatedShape, c: Canvas) -> bool {
    let h = c.half_extent();
    (-h.x..=h.x).contains(&s.offset.x) && (-h.y..=h.y).contains(&s.offset.y)
}

#[test]
fn released_with_zero_velocity_is_a_fixed_point() {
    let mut s = AnimatedShape::new(Vec2::new(12.5, -40.0), Vec2::ZERO);
    for _ in 0..100 {
        s.update(&released(), canvas(), MotionParams::default());
    }
    assert_eq!(s.offset, Vec2::new(12.5, -40.0));
    assert_eq!(s.velocity, Vec2::ZERO);
}

#[test]
fn velocity_decays_by_exact_power_law() {
    let v0 = Vec2::new(3.0, -2.0);
    let mut s = AnimatedShape::new(Vec2::ZERO, v0);
    let n = 25;
    for _ in 0..n {
        s.update(&released(), canvas(), MotionParams::default());
    }
    let expected = v0.hypot() * 0.90f64.powi(n);
    assert!((s.velocity.hypot() - expected).abs() < 1e-12);
}

#[test]
fn released_drift_moves_by_velocity_before_decay() {
    let mut s = AnimatedShape::new(Vec2::ZERO, Vec2::new(0.4, 0.4));
    s.update(&released(), canvas(), MotionParams::default());
    assert_eq!(s.offset, Vec2::new(0.4, 0.4));
    assert!((s.velocity.x - 0.36).abs() < 1e-12);
}

#[test]
fn pressed_converges_geometrically_toward_target() {
    let c = canvas();
    let pointer = PointerState::pressed(Point::new(800.0, 100.0));
    let target = pointer.position - c.center();
    let mut s = AnimatedShape::new(Vec2::new(-200.0, 150.0), Vec2::new(5.0, 5.0));

    let mut prev = (s.offset - target).hypot();
    for _ in 0..200 {
        s.update(&pointer, c, MotionParams::default());
        let d = (s.offset - target).hypot();
        if prev > 1e-9 {
            assert!(d < prev);
            assert!((d / prev - 0.97).abs() < 1e-6);
        }
        prev = d;
    }
    assert_eq!(s.velocity, Vec2::new(5.0, 5.0));
}

#[test]
fn wrap_teleports_to_opposite_edge() {
    let c = canvas();
    let mut s = AnimatedShape::new(Vec2::new(499.8, -399.9), Vec2::new(0.5, -0.5));
    s.update(&released(), c, MotionParams::default());
    assert_eq!(s.offset.x, -500.0);
    assert_eq!(s.offset.y, 400.0);
}

#[test]
fn offset_stays_in_bounds_over_many_frames() {
    let c = canvas();
    let mut s = AnimatedShape::new(Vec2::ZERO, Vec2::new(90.0, -75.0));
    let params = MotionParams {
        follow: 0.03,
        damping: 1.0,
    };
    for i in 0..2000 {
        let pointer = if i % 300 < 100 {
            PointerState::pressed(Point::new((i % 1000) as f64, (i % 800) as f64))
        } else {
            released()
        };
        s.update(&pointer, c, params);
        assert!(within_bounds(&s, c), "out of bounds at frame {i}: {:?}", s.offset);
    }
}

#[test]
fn center_is_canvas_center_plus_offset() {
    let s = AnimatedShape::new(Vec2::new(10.0, -20.0), Vec2::ZERO);
    assert_eq!(s.center(canvas()), Point::new(510.0, 380.0));
}

#[test]
fn motion_params_validation() {
    assert!(MotionParams::default().validate().is_ok());
    assert!(
        MotionParams {
            follow: 0.0,
            damping: 0.9
        }
        .validate()
        .is_err()
    );
    assert!(
        MotionParams {
            follow: 0.5,
            damping: 1.1
        }
        .validate()
        .is_err()
    );
}
