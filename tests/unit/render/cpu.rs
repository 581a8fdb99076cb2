use super::*;
use crate::foundation::core::{Canvas, FrameIndex, Point, Vec2};
use crate::sketch::color::StrokeColor;
use crate::sketch::curve::CurveStroke;

fn settings(width: u32, height: u32) -> RenderSettings {
    RenderSettings {
        canvas: Canvas { width, height },
        background_rgba: [0, 0, 0, 90],
    }
}

fn horizontal_line(y: f64, weight: f64) -> CurveStroke {
    CurveStroke {
        color: StrokeColor {
            r: 255.0,
            g: 255.0,
            b: 255.0,
            a: 255.0,
        },
        weight,
        points: [
            Point::new(-10.0, y),
            Point::new(0.0, y),
            Point::new(32.0, y),
            Point::new(42.0, y),
        ],
    }
}

fn alpha_at(frame: &FrameRGBA, x: u32, y: u32) -> u8 {
    frame.data[((y * frame.width + x) * 4 + 3) as usize]
}

#[test]
fn wash_darkens_and_raises_alpha() {
    let mut px = vec![200, 100, 50, 255, 0, 0, 0, 0];
    wash_in_place(&mut px, premul_rgba8([0, 0, 0, 90]));
    assert!(px[0] < 200 && px[1] < 100 && px[2] < 50);
    assert_eq!(px[3], 255);
    assert_eq!(&px[4..], &[0, 0, 0, 90]);
}

#[test]
fn premul_over_skips_transparent_and_replaces_opaque() {
    let mut dst = vec![10, 20, 30, 255, 10, 20, 30, 255];
    let src = vec![0, 0, 0, 0, 200, 100, 0, 255];
    premul_over_in_place(&mut dst, &src).unwrap();
    assert_eq!(&dst[..4], &[10, 20, 30, 255]);
    assert_eq!(&dst[4..], &[200, 100, 0, 255]);
}

#[test]
fn premul_over_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(premul_over_in_place(&mut dst, &[0u8; 4]).is_err());
}

#[test]
fn new_rejects_empty_canvas() {
    assert!(CpuBackend::new(settings(0, 16)).is_err());
}

#[test]
fn stroke_lands_on_its_row_only() {
    let mut backend = CpuBackend::new(settings(32, 32)).unwrap();
    let scene = FrameScene::from_parts(
        FrameIndex(0),
        Vec2::ZERO,
        vec![horizontal_line(16.0, 4.0)],
        vec![],
    );
    let frame = backend.render_scene(&scene).unwrap();
    assert_eq!((frame.width, frame.height), (32, 32));
    assert_eq!(frame.data.len(), 32 * 32 * 4);
    assert!(frame.premultiplied);
    assert!(alpha_at(&frame, 16, 16) > 200);
    // Off the stroke only the background wash is visible.
    assert_eq!(alpha_at(&frame, 16, 2), 90);
}

#[test]
fn translation_moves_the_stroke() {
    let mut backend = CpuBackend::new(settings(32, 32)).unwrap();
    let scene = FrameScene::from_parts(
        FrameIndex(0),
        Vec2::new(0.0, 8.0),
        vec![horizontal_line(8.0, 2.0)],
        vec![],
    );
    let frame = backend.render_scene(&scene).unwrap();
    assert!(alpha_at(&frame, 16, 16) > 200);
    assert_eq!(alpha_at(&frame, 16, 8), 90);
}

#[test]
fn trails_fade_over_frames_and_reset_clears() {
    let mut backend = CpuBackend::new(settings(32, 32)).unwrap();
    let lit = FrameScene::from_parts(
        FrameIndex(0),
        Vec2::ZERO,
        vec![horizontal_line(16.0, 4.0)],
        vec![],
    );
    let first = backend.render_scene(&lit).unwrap();
    let red_before = first.data[((16 * 32 + 16) * 4) as usize];

    let empty = FrameScene::from_parts(FrameIndex(1), Vec2::ZERO, vec![], vec![]);
    let second = backend.render_scene(&empty).unwrap();
    let red_after = second.data[((16 * 32 + 16) * 4) as usize];
    assert!(red_after < red_before);
    assert!(red_after > 0);

    backend.reset();
    let third = backend.render_scene(&empty).unwrap();
    assert_eq!(third.data[((16 * 32 + 16) * 4) as usize], 0);
    assert_eq!(alpha_at(&third, 16, 16), 90);
}
