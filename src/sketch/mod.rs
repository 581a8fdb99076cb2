//! Per-frame geometry of the jellyfish.
//!
//! Everything here is a pure function of the noise field, the shape offset, the canvas, the style
//! and the frame index. [`draw_frame`] assembles one [`FrameScene`]: 1796 translucent body strokes
//! fanning around the bell followed by 18 heavier tentacle strokes. Each stroke is the middle
//! segment of a four-point Catmull-Rom curve.

/// Stroke colors modulated by angle and frame.
pub mod color;
/// Body and tentacle contour generation.
pub mod contour;
/// Catmull-Rom to cubic Bézier conversion.
pub mod curve;
/// Shared noise-driven vertex offsets.
pub mod offsets;
/// Scene assembly.
pub mod scene;
/// Style parameters.
pub mod style;

pub use color::{StrokeColor, stroke_color};
pub use contour::{AngleSteps, body_radius, body_stroke, tentacle_radius, tentacle_stroke};
pub use curve::CurveStroke;
pub use offsets::NoiseOffsets;
pub use scene::{FrameScene, draw_frame};
pub use style::Style;
