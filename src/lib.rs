//! A noise-driven generative jellyfish.
//!
//! Each frame, a bell of translucent Bézier strokes and a ring of heavier tentacles are shaped by
//! coherent noise and composited over a slowly fading canvas, leaving trails. The pointer drags
//! the jellyfish; released, it drifts and wraps around the canvas edges.
//!
//! [`Animator`] drives the simulation. Rendered frames go to any [`FrameSink`] (PNG sequence,
//! `ffmpeg` MP4 or memory).
#![forbid(unsafe_code)]

mod foundation;

pub mod config;
pub mod encode;
pub mod motion;
pub mod noise;
#[cfg(feature = "preview")]
pub mod preview;
pub mod render;
pub mod session;
pub mod sketch;

pub use config::{ShapeConfig, SketchConfig};
pub use encode::{
    FfmpegSink, FfmpegSinkOpts, FrameSink, InMemorySink, PngSequenceSink, SinkConfig, write_png,
};
pub use foundation::core::{Affine, BezPath, Canvas, Fps, FrameIndex, FrameRange, Point, Vec2};
pub use foundation::error::{JellyfishError, JellyfishResult};
pub use foundation::math::{lerp, lerp_vec};
pub use motion::{AnimatedShape, DragTracker, MotionParams, PointerKey, PointerState, PointerTrack};
pub use crate::noise::{NoiseConfig, NoiseField, NoiseKind, build_noise};
pub use render::{BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend};
pub use session::{Animator, AnimatorOpts, RenderStats};
pub use sketch::{FrameScene, Style, draw_frame};
