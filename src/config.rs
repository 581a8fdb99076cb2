use std::path::Path;

use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Vec2};
use crate::foundation::error::{JellyfishError, JellyfishResult};
use crate::motion::pointer::PointerTrack;
use crate::motion::shape::{AnimatedShape, MotionParams};
use crate::noise::NoiseConfig;
use crate::sketch::style::Style;

/// Starting state of the animated shape.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    pub offset: Vec2,
    pub velocity: Vec2,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        let shape = AnimatedShape::default();
        Self {
            offset: shape.offset,
            velocity: shape.velocity,
        }
    }
}

impl ShapeConfig {
    pub fn to_shape(self) -> AnimatedShape {
        AnimatedShape::new(self.offset, self.velocity)
    }
}

/// A complete sketch description, loaded from JSON.
///
/// Every field is optional; `{}` describes the stock 1000x800, 60 fps jellyfish.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SketchConfig {
    pub canvas: Canvas,
    pub fps: Fps,
    /// Frames rendered by default (`[0, duration)`).
    pub duration: FrameIndex,
    pub seed: u64,
    pub noise: NoiseConfig,
    pub shape: ShapeConfig,
    pub motion: MotionParams,
    pub style: Style,
    /// Scripted pointer input for headless rendering.
    pub pointer: PointerTrack,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            fps: Fps::default(),
            duration: FrameIndex(600),
            seed: 0,
            noise: NoiseConfig::default(),
            shape: ShapeConfig::default(),
            motion: MotionParams::default(),
            style: Style::default(),
            pointer: PointerTrack::default(),
        }
    }
}

impl SketchConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> JellyfishResult<Self> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|e| JellyfishError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> JellyfishResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            JellyfishError::validation(format!("failed to read config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> JellyfishResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| JellyfishError::serde(e.to_string()))
    }

    pub fn validate(&self) -> JellyfishResult<()> {
        self.canvas.validate()?;
        Fps::new(self.fps.num, self.fps.den)?;
        self.noise.validate()?;
        self.motion.validate()?;
        self.style.validate()?;
        self.pointer.validate()?;
        if !(self.shape.offset.is_finite() && self.shape.velocity.is_finite()) {
            return Err(JellyfishError::validation(
                "shape offset/velocity must be finite",
            ));
        }
        Ok(())
    }

    /// `[0, duration)`.
    pub fn default_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: self.duration,
        }
    }

    /// Straight RGBA8 background wash.
    pub fn background_rgba(&self) -> [u8; 4] {
        let [r, g, b] = self.style.background_rgb;
        [r, g, b, self.style.background_alpha]
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
