use crate::foundation::core::Canvas;
use crate::foundation::error::JellyfishResult;
use crate::sketch::scene::FrameScene;

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha copy of the pixel data.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            out.extend_from_slice(&crate::foundation::math::unpremul_rgba8([
                px[0], px[1], px[2], px[3],
            ]));
        }
        out
    }
}

/// A renderer that paints successive [`FrameScene`]s onto a persistent canvas.
///
/// Frames are not independent: each call washes the background over the previous result before
/// drawing, so the caller must feed scenes in timeline order.
pub trait RenderBackend {
    /// Composite `scene` over the accumulated canvas and read back the result.
    fn render_scene(&mut self, scene: &FrameScene) -> JellyfishResult<FrameRGBA>;

    /// Forget the accumulated canvas.
    fn reset(&mut self);
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug, Default)]
pub enum BackendKind {
    /// CPU raster backend powered by `vello_cpu`.
    #[default]
    Cpu,
}

/// Backend-agnostic settings.
#[derive(Clone, Debug)]
pub struct RenderSettings {
    pub canvas: Canvas,
    /// Straight RGBA8 wash applied before each frame.
    pub background_rgba: [u8; 4],
}

/// Create a rendering backend implementation.
pub fn create_backend(
    kind: BackendKind,
    settings: &RenderSettings,
) -> JellyfishResult<Box<dyn RenderBackend>> {
    match kind {
        BackendKind::Cpu => Ok(Box::new(crate::render::cpu::CpuBackend::new(
            settings.clone(),
        )?)),
    }
}
