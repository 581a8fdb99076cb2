use crate::foundation::core::FrameIndex;
use crate::foundation::error::{JellyfishError, JellyfishResult};

/// Smallest accepted angular step, in degrees.
pub const MIN_STEP_DEG: f64 = 0.01;
/// Largest accepted angular step, in degrees.
pub const MAX_STEP_DEG: f64 = 360.0;
/// Body stroke width on the very first frame when `body_weight` is unset.
pub const FIRST_FRAME_BODY_WEIGHT: f64 = 1.0;

/// Visual tunables of the sketch.
///
/// Curve multipliers and vertex offsets are fixed; only weights, alpha, angular density and the
/// background are configurable.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Style {
    /// Stroke width of the body curves in pixels.
    ///
    /// Unset means the body starts at [`FIRST_FRAME_BODY_WEIGHT`] on frame 0 and inherits
    /// `tentacle_weight` on every later frame.
    pub body_weight: Option<f64>,
    /// Stroke width of the tentacle curves in pixels.
    pub tentacle_weight: f64,
    /// Stroke alpha, `0..=255`.
    pub stroke_alpha: f64,
    /// Angular step between body curves, in degrees.
    pub body_step_deg: f64,
    /// Angular step between tentacles, in degrees.
    pub tentacle_step_deg: f64,
    /// Background color painted over the previous frame before drawing.
    pub background_rgb: [u8; 3],
    /// Alpha of the background wash; below 255 leaves trails.
    pub background_alpha: u8,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            body_weight: None,
            tentacle_weight: 6.0,
            stroke_alpha: 40.0,
            body_step_deg: 0.2,
            tentacle_step_deg: 20.0,
            background_rgb: [0, 0, 0],
            background_alpha: 90,
        }
    }
}

impl Style {
    /// Stroke width of the body curves drawn on `frame`.
    pub fn body_weight_at(&self, frame: FrameIndex) -> f64 {
        match self.body_weight {
            Some(w) => w,
            None if frame == FrameIndex(0) => FIRST_FRAME_BODY_WEIGHT,
            None => self.tentacle_weight,
        }
    }

    pub fn validate(&self) -> JellyfishResult<()> {
        for (name, w) in [
            ("body_weight", self.body_weight.unwrap_or(FIRST_FRAME_BODY_WEIGHT)),
            ("tentacle_weight", self.tentacle_weight),
        ] {
            if !(w.is_finite() && w > 0.0) {
                return Err(JellyfishError::validation(format!(
                    "style.{name} must be > 0, got {w}"
                )));
            }
        }
        for (name, step) in [
            ("body_step_deg", self.body_step_deg),
            ("tentacle_step_deg", self.tentacle_step_deg),
        ] {
            if !(MIN_STEP_DEG..=MAX_STEP_DEG).contains(&step) {
                return Err(JellyfishError::validation(format!(
                    "style.{name} must be in [{MIN_STEP_DEG}, {MAX_STEP_DEG}], got {step}"
                )));
            }
        }
        if !(0.0..=255.0).contains(&self.stroke_alpha) {
            return Err(JellyfishError::validation(format!(
                "style.stroke_alpha must be in [0, 255], got {}",
                self.stroke_alpha
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/style.rs"]
mod tests;
