use crate::foundation::core::{Affine, BezPath};
use crate::foundation::error::{JellyfishError, JellyfishResult};
use crate::foundation::math::{add_sat_u8, mul_div255_u8, premul_rgba8};
use crate::render::backend::{FrameRGBA, RenderBackend, RenderSettings};
use crate::sketch::scene::FrameScene;

/// CPU backend powered by `vello_cpu` for stroke rasterization.
///
/// Holds the accumulated canvas between frames. Each frame is:
/// 1. wash the canvas with the background color at its alpha;
/// 2. rasterize all strokes into a transparent layer;
/// 3. premul-over the layer onto the canvas.
pub struct CpuBackend {
    settings: RenderSettings,
    width: u16,
    height: u16,
    ctx: Option<vello_cpu::RenderContext>,
    canvas: vello_cpu::Pixmap,
    layer: vello_cpu::Pixmap,
}

impl CpuBackend {
    pub fn new(settings: RenderSettings) -> JellyfishResult<Self> {
        settings.canvas.validate()?;
        let width: u16 = settings
            .canvas
            .width
            .try_into()
            .map_err(|_| JellyfishError::render("canvas width exceeds u16"))?;
        let height: u16 = settings
            .canvas
            .height
            .try_into()
            .map_err(|_| JellyfishError::render("canvas height exceeds u16"))?;
        Ok(Self {
            settings,
            width,
            height,
            ctx: None,
            canvas: vello_cpu::Pixmap::new(width, height),
            layer: vello_cpu::Pixmap::new(width, height),
        })
    }

    fn with_ctx_mut<R>(
        &mut self,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> JellyfishResult<R>,
    ) -> JellyfishResult<R> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == self.width && ctx.height() == self.height => ctx,
            _ => vello_cpu::RenderContext::new(self.width, self.height),
        };
        ctx.reset();
        let out = f(self, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    fn rasterize_strokes(&mut self, scene: &FrameScene) -> JellyfishResult<()> {
        clear_pixmap_to_transparent(&mut self.layer);
        self.with_ctx_mut(|this, ctx| {
            ctx.set_transform(affine_to_cpu(scene.transform()));
            for stroke in &scene.strokes {
                let [r, g, b, a] = stroke.color.to_rgba8();
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(stroke.weight));
                ctx.stroke_path(&bezpath_to_cpu(&stroke.to_path()));
            }
            ctx.flush();
            ctx.render_to_pixmap(&mut this.layer);
            Ok(())
        })
    }
}

impl RenderBackend for CpuBackend {
    fn render_scene(&mut self, scene: &FrameScene) -> JellyfishResult<FrameRGBA> {
        let wash = premul_rgba8(self.settings.background_rgba);
        wash_in_place(self.canvas.data_as_u8_slice_mut(), wash);

        self.rasterize_strokes(scene)?;
        premul_over_in_place(
            self.canvas.data_as_u8_slice_mut(),
            self.layer.data_as_u8_slice(),
        )?;

        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: self.canvas.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn reset(&mut self) {
        clear_pixmap_to_transparent(&mut self.canvas);
    }
}

fn clear_pixmap_to_transparent(pixmap: &mut vello_cpu::Pixmap) {
    pixmap.data_as_u8_slice_mut().fill(0);
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

/// Composite a uniform premultiplied color over every pixel.
fn wash_in_place(dst: &mut [u8], wash_premul: [u8; 4]) {
    let inv = 255u16 - u16::from(wash_premul[3]);
    for d in dst.chunks_exact_mut(4) {
        for c in 0..4 {
            d[c] = add_sat_u8(wash_premul[c], mul_div255_u8(u16::from(d[c]), inv));
        }
    }
}

fn premul_over_in_place(dst: &mut [u8], src: &[u8]) -> JellyfishResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(JellyfishError::render(
            "premul_over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let sa = u16::from(s[3]);
        if sa == 0 {
            continue;
        }
        let inv = 255u16 - sa;
        for c in 0..4 {
            d[c] = add_sat_u8(s[c], mul_div255_u8(u16::from(d[c]), inv));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
