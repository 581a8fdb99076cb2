//! Rasterization of frame scenes.

/// Backend trait, settings and the rendered frame type.
pub mod backend;
/// `vello_cpu` backend.
pub mod cpu;

pub use backend::{BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend};
pub use cpu::CpuBackend;
