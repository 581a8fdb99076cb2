use super::*;

#[test]
fn defaults_are_valid() {
    let s = Style::default();
    s.validate().unwrap();
    assert_eq!(s.body_weight, None);
    assert_eq!(s.tentacle_weight, 6.0);
    assert_eq!(s.background_alpha, 90);
}

#[test]
fn rejects_non_positive_weights_and_steps() {
    for bad in [
        Style {
            body_weight: Some(0.0),
            ..Style::default()
        },
        Style {
            tentacle_weight: f64::NAN,
            ..Style::default()
        },
        Style {
            body_step_deg: -0.2,
            ..Style::default()
        },
        Style {
            tentacle_step_deg: 0.0,
            ..Style::default()
        },
        Style {
            body_step_deg: 1e-300,
            ..Style::default()
        },
        Style {
            tentacle_step_deg: 720.0,
            ..Style::default()
        },
        Style {
            stroke_alpha: 300.0,
            ..Style::default()
        },
    ] {
        assert!(bad.validate().is_err(), "{bad:?}");
    }
}

#[test]
fn partial_json_keeps_remaining_defaults() {
    let s: Style = serde_json::from_str(r#"{ "tentacle_weight": 1.5 }"#).unwrap();
    assert_eq!(s.tentacle_weight, 1.5);
    assert_eq!(s.body_step_deg, 0.2);
}

#[test]
fn step_bounds_are_inclusive() {
    let s = Style {
        body_step_deg: MIN_STEP_DEG,
        tentacle_step_deg: MAX_STEP_DEG,
        ..Style::default()
    };
    s.validate().unwrap();
}

#[test]
fn unset_body_weight_follows_tentacle_weight_after_first_frame() {
    let s = Style {
        tentacle_weight: 3.5,
        ..Style::default()
    };
    assert_eq!(s.body_weight_at(FrameIndex(0)), FIRST_FRAME_BODY_WEIGHT);
    assert_eq!(s.body_weight_at(FrameIndex(1)), 3.5);
    assert_eq!(s.body_weight_at(FrameIndex(500)), 3.5);

    let pinned = Style {
        body_weight: Some(2.0),
        ..s
    };
    assert_eq!(pinned.body_weight_at(FrameIndex(0)), 2.0);
    assert_eq!(pinned.body_weight_at(FrameIndex(9)), 2.0);
}
