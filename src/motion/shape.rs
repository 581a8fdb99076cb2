use crate::foundation::core::{Canvas, Point, Vec2};
use crate::foundation::error::{JellyfishError, JellyfishResult};
use crate::foundation::math::lerp_vec;
use crate::motion::pointer::PointerState;

/// Tunables of the drag/release motion model.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MotionParams {
    /// Fraction of the remaining distance to the pointer covered per frame while pressed.
    pub follow: f64,
    /// Velocity multiplier applied per frame while released.
    pub damping: f64,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self {
            follow: 0.03,
            damping: 0.90,
        }
    }
}

impl MotionParams {
    pub fn validate(&self) -> JellyfishResult<()> {
        if !(self.follow > 0.0 && self.follow <= 1.0) {
            return Err(JellyfishError::validation(format!(
                "motion.follow must be in (0, 1], got {}",
                self.follow
            )));
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(JellyfishError::validation(format!(
                "motion.damping must be in [0, 1], got {}",
                self.damping
            )));
        }
        Ok(())
    }
}

/// Offset of the jellyfish from the canvas center, plus its free-flight velocity.
///
/// After every [`AnimatedShape::update`] the offset lies inside
/// `[-W/2, W/2] x [-H/2, H/2]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimatedShape {
    pub offset: Vec2,
    pub velocity: Vec2,
}

impl Default for AnimatedShape {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            velocity: Vec2::new(0.4, 0.4),
        }
    }
}

impl AnimatedShape {
    pub fn new(offset: Vec2, velocity: Vec2) -> Self {
        Self { offset, velocity }
    }

    /// Advance one frame.
    ///
    /// Pressed: the offset eases toward `pointer - center` by `params.follow`; velocity is kept.
    /// Released: the offset drifts by `velocity`, then velocity decays by `params.damping`.
    /// Both paths finish with [`AnimatedShape::wrap_around`].
    pub fn update(&mut self, pointer: &PointerState, canvas: Canvas, params: MotionParams) {
        if pointer.pressed {
            let target = pointer.position - canvas.center();
            self.offset = lerp_vec(self.offset, target, params.follow);
        } else {
            self.offset += self.velocity;
            self.velocity *= params.damping;
        }
        self.wrap_around(canvas);
    }

    /// Teleport an offset that left the canvas to the opposite edge, per axis.
    pub fn wrap_around(&mut self, canvas: Canvas) {
        let half = canvas.half_extent();
        self.offset.x = wrap_axis(self.offset.x, half.x);
        self.offset.y = wrap_axis(self.offset.y, half.y);
    }

    /// The jellyfish center in canvas pixel coordinates.
    pub fn center(&self, canvas: Canvas) -> Point {
        canvas.center() + self.offset
    }
}

fn wrap_axis(v: f64, half: f64) -> f64 {
    if v > half {
        -half
    } else if v < -half {
        half
    } else {
        v
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/shape.rs"]
mod tests;
