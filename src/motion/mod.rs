//! Position state of the animated shape and the pointer input that steers it.

/// Pointer state, drag tracking, and scripted pointer tracks.
pub mod pointer;
/// The animated shape and its per-frame position update.
pub mod shape;

pub use pointer::{DragTracker, PointerEvent, PointerKey, PointerState, PointerTrack};
pub use shape::{AnimatedShape, MotionParams};
