use crate::foundation::core::{Canvas, FrameIndex, Point};
use crate::foundation::error::{JellyfishError, JellyfishResult};
use crate::foundation::math::lerp;

/// Pointer state sampled once per frame, in canvas pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PointerState {
    pub pressed: bool,
    pub position: Point,
}

impl PointerState {
    /// A released pointer resting at `position`.
    pub fn released(position: Point) -> Self {
        Self {
            pressed: false,
            position,
        }
    }

    /// A pressed pointer at `position`.
    pub fn pressed(position: Point) -> Self {
        Self {
            pressed: true,
            position,
        }
    }
}

/// Press/release edge reported by [`DragTracker::observe`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Pressed { at: Point },
    Released { at: Point },
}

/// Edge-detects press and release and remembers where the current drag began.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragTracker {
    was_pressed: bool,
    drag_start: Option<Point>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current frame's pointer state; returns the edge crossed this frame, if any.
    pub fn observe(&mut self, pointer: &PointerState) -> Option<PointerEvent> {
        let edge = match (self.was_pressed, pointer.pressed) {
            (false, true) => {
                self.drag_start = Some(pointer.position);
                Some(PointerEvent::Pressed {
                    at: pointer.position,
                })
            }
            (true, false) => {
                self.drag_start = None;
                Some(PointerEvent::Released {
                    at: pointer.position,
                })
            }
            _ => None,
        };
        self.was_pressed = pointer.pressed;
        edge
    }

    pub fn is_dragging(&self) -> bool {
        self.was_pressed
    }

    /// Where the active drag began; `None` while released.
    pub fn drag_start(&self) -> Option<Point> {
        self.drag_start
    }
}

/// One scripted pointer sample.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PointerKey {
    pub frame: FrameIndex,
    pub pressed: bool,
    pub x: f64,
    pub y: f64,
}

/// Scripted pointer input for headless rendering.
///
/// `pressed` holds from a key until the next key; the position is interpolated linearly between
/// consecutive keys and held after the last one. Before the first key the pointer is released at
/// the canvas center.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PointerTrack {
    keys: Vec<PointerKey>,
}

impl PointerTrack {
    pub fn new(keys: Vec<PointerKey>) -> JellyfishResult<Self> {
        let track = Self { keys };
        track.validate()?;
        Ok(track)
    }

    pub fn keys(&self) -> &[PointerKey] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys must be in non-decreasing frame order.
    pub fn validate(&self) -> JellyfishResult<()> {
        for pair in self.keys.windows(2) {
            if pair[1].frame < pair[0].frame {
                return Err(JellyfishError::validation(format!(
                    "pointer keys must be sorted by frame ({} follows {})",
                    pair[1].frame.0, pair[0].frame.0
                )));
            }
        }
        Ok(())
    }

    /// Last frame mentioned by the track, if any.
    pub fn last_frame(&self) -> Option<FrameIndex> {
        self.keys.last().map(|k| k.frame)
    }

    /// Pointer state at `frame`.
    pub fn sample(&self, frame: FrameIndex, canvas: Canvas) -> PointerState {
        let idx = self.keys.partition_point(|k| k.frame <= frame);
        if idx == 0 {
            return PointerState::released(canvas.center());
        }
        let cur = self.keys[idx - 1];
        let position = match self.keys.get(idx) {
            Some(next) if next.frame > cur.frame => {
                let t = (frame.0 - cur.frame.0) as f64 / (next.frame.0 - cur.frame.0) as f64;
                Point::new(lerp(cur.x, next.x, t), lerp(cur.y, next.y, t))
            }
            _ => Point::new(cur.x, cur.y),
        };
        PointerState {
            pressed: cur.pressed,
            position,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/pointer.rs"]
mod tests;
