//! Interactive window: hold the left mouse button to drag the jellyfish, Escape to quit.

use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

use crate::config::SketchConfig;
use crate::foundation::core::{FrameIndex, Point};
use crate::foundation::error::{JellyfishError, JellyfishResult};
use crate::motion::pointer::PointerState;
use crate::render::backend::FrameRGBA;
use crate::session::{Animator, AnimatorOpts};

/// Premultiplied RGBA8 shown over black, packed as `0x00RRGGBB`.
pub fn frame_to_0rgb(frame: &FrameRGBA, out: &mut Vec<u32>) {
    out.clear();
    out.extend(frame.data.chunks_exact(4).map(|px| {
        let (r, g, b) = if frame.premultiplied {
            (px[0], px[1], px[2])
        } else {
            let a = u16::from(px[3]);
            (
                crate::foundation::math::mul_div255_u8(u16::from(px[0]), a),
                crate::foundation::math::mul_div255_u8(u16::from(px[1]), a),
                crate::foundation::math::mul_div255_u8(u16::from(px[2]), a),
            )
        };
        (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }));
}

/// Run the sketch in a window until it is closed or Escape is pressed.
///
/// Returns the number of frames shown.
pub fn run(cfg: &SketchConfig) -> JellyfishResult<u64> {
    let mut animator = Animator::new(cfg, AnimatorOpts::default())?;
    let width = cfg.canvas.width as usize;
    let height = cfg.canvas.height as usize;

    let mut window = Window::new("jellyfish", width, height, WindowOptions::default())
        .map_err(|e| JellyfishError::render(format!("window init: {e}")))?;
    window.set_target_fps(cfg.fps.as_f64().round().max(1.0) as usize);

    let mut buffer = Vec::with_capacity(width * height);
    let mut frame = FrameIndex(0);
    let mut last_pos = cfg.canvas.center();
    tracing::info!(width, height, "preview window open");

    while window.is_open() && !window.is_key_down(Key::Escape) {
        if let Some((x, y)) = window.get_mouse_pos(MouseMode::Clamp) {
            last_pos = Point::new(f64::from(x), f64::from(y));
        }
        let pointer = PointerState {
            pressed: window.get_mouse_down(MouseButton::Left),
            position: last_pos,
        };

        let rgba = animator.step(frame, &pointer)?;
        frame_to_0rgb(&rgba, &mut buffer);
        window
            .update_with_buffer(&buffer, width, height)
            .map_err(|e| JellyfishError::render(format!("window update: {e}")))?;
        frame = frame.next();
    }

    tracing::info!(frames = frame.0, "preview closed");
    Ok(frame.0)
}

#[cfg(test)]
#[path = "../tests/unit/preview.rs"]
mod tests;
