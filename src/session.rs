use crate::config::SketchConfig;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{JellyfishError, JellyfishResult};
use crate::motion::pointer::{DragTracker, PointerEvent, PointerState};
use crate::motion::shape::AnimatedShape;
use crate::noise::{NoiseField, build_noise};
use crate::render::backend::{
    BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend,
};
use crate::sketch::scene::{FrameScene, draw_frame};

/// Options for creating an [`Animator`].
#[derive(Clone, Copy, Debug, Default)]
pub struct AnimatorOpts {
    pub backend: BackendKind,
}

/// Counters collected while rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames_rendered: u64,
    pub strokes_drawn: u64,
}

/// Owns the one mutable jellyfish and drives it frame by frame.
///
/// Frames must be produced in order: the shape position and the raster trails both depend on
/// every earlier frame. Asking for a frame behind the current position rewinds to frame 0 and
/// replays.
pub struct Animator {
    cfg: SketchConfig,
    noise: Box<dyn NoiseField>,
    shape: AnimatedShape,
    drag: DragTracker,
    backend: Box<dyn RenderBackend>,
    next_frame: FrameIndex,
    stats: RenderStats,
}

impl Animator {
    pub fn new(cfg: &SketchConfig, opts: AnimatorOpts) -> JellyfishResult<Self> {
        cfg.validate()?;
        let noise = build_noise(&cfg.noise, cfg.seed)?;
        let backend = create_backend(
            opts.backend,
            &RenderSettings {
                canvas: cfg.canvas,
                background_rgba: cfg.background_rgba(),
            },
        )?;
        Ok(Self {
            cfg: cfg.clone(),
            noise,
            shape: cfg.shape.to_shape(),
            drag: DragTracker::new(),
            backend,
            next_frame: FrameIndex(0),
            stats: RenderStats::default(),
        })
    }

    pub fn config(&self) -> &SketchConfig {
        &self.cfg
    }

    pub fn shape(&self) -> &AnimatedShape {
        &self.shape
    }

    pub fn drag(&self) -> &DragTracker {
        &self.drag
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// The frame the next [`Animator::advance`] is expected to produce.
    pub fn next_frame(&self) -> FrameIndex {
        self.next_frame
    }

    /// Return to the configured starting state.
    pub fn reset(&mut self) {
        self.shape = self.cfg.shape.to_shape();
        self.drag = DragTracker::new();
        self.backend.reset();
        self.next_frame = FrameIndex(0);
    }

    /// Update the shape from `pointer` and build the scene for `frame`, without rasterizing.
    pub fn advance(&mut self, frame: FrameIndex, pointer: &PointerState) -> FrameScene {
        if let Some(edge) = self.drag.observe(pointer) {
            match edge {
                PointerEvent::Pressed { at } => {
                    tracing::debug!(frame = frame.0, x = at.x, y = at.y, "drag start")
                }
                PointerEvent::Released { at } => {
                    tracing::debug!(frame = frame.0, x = at.x, y = at.y, "drag end")
                }
            }
        }
        self.shape.update(pointer, self.cfg.canvas, self.cfg.motion);
        self.next_frame = frame.next();
        draw_frame(
            self.noise.as_ref(),
            &self.shape,
            self.cfg.canvas,
            &self.cfg.style,
            frame,
        )
    }

    /// Advance with an explicit pointer state and rasterize the frame.
    #[tracing::instrument(skip(self, pointer), fields(frame = frame.0))]
    pub fn step(
        &mut self,
        frame: FrameIndex,
        pointer: &PointerState,
    ) -> JellyfishResult<FrameRGBA> {
        let scene = self.advance(frame, pointer);
        let out = self.backend.render_scene(&scene)?;
        self.stats.frames_rendered += 1;
        self.stats.strokes_drawn += scene.strokes.len() as u64;
        tracing::debug!(
            strokes = scene.strokes.len(),
            offset_x = self.shape.offset.x,
            offset_y = self.shape.offset.y,
            "frame rendered"
        );
        Ok(out)
    }

    /// Advance using the configured pointer track.
    pub fn step_scripted(&mut self, frame: FrameIndex) -> JellyfishResult<FrameRGBA> {
        let pointer = self.cfg.pointer.sample(frame, self.cfg.canvas);
        self.step(frame, &pointer)
    }

    fn rewind_if_behind(&mut self, frame: FrameIndex) {
        if frame < self.next_frame {
            tracing::debug!(
                requested = frame.0,
                next = self.next_frame.0,
                "rewinding to frame 0"
            );
            self.reset();
        }
    }

    /// Scripted scene for `frame`, replaying the motion of every earlier frame without
    /// rasterizing.
    pub fn scene_at(&mut self, frame: FrameIndex) -> FrameScene {
        self.rewind_if_behind(frame);
        while self.next_frame < frame {
            let f = self.next_frame;
            let pointer = self.cfg.pointer.sample(f, self.cfg.canvas);
            self.advance(f, &pointer);
        }
        let pointer = self.cfg.pointer.sample(frame, self.cfg.canvas);
        self.advance(frame, &pointer)
    }

    /// Scripted render of `frame`, rasterizing every earlier frame so trails are exact.
    pub fn render_frame(&mut self, frame: FrameIndex) -> JellyfishResult<FrameRGBA> {
        self.rewind_if_behind(frame);
        while self.next_frame < frame {
            self.step_scripted(self.next_frame)?;
        }
        self.step_scripted(frame)
    }

    /// Scripted render of `range` into `sink`.
    ///
    /// Frames before `range.start` are rendered but not pushed.
    #[tracing::instrument(skip(self, sink), fields(start = range.start.0, end = range.end.0))]
    pub fn render_range(
        &mut self,
        range: FrameRange,
        sink: &mut dyn FrameSink,
    ) -> JellyfishResult<RenderStats> {
        if range.is_empty() {
            return Err(JellyfishError::validation("render range is empty"));
        }
        if let Some(last) = self.cfg.pointer.last_frame()
            && last >= range.end
        {
            tracing::warn!(
                last_key = last.0,
                end = range.end.0,
                "pointer track extends beyond the render range"
            );
        }

        self.rewind_if_behind(range.start);
        while self.next_frame < range.start {
            self.step_scripted(self.next_frame)?;
        }

        let before = self.stats;
        tracing::info!(frames = range.len_frames(), "render start");
        sink.begin(SinkConfig {
            width: self.cfg.canvas.width,
            height: self.cfg.canvas.height,
            fps: self.cfg.fps,
        })?;
        for frame in range.iter() {
            let rgba = self.step_scripted(frame)?;
            sink.push_frame(frame, &rgba)?;
        }
        sink.end()?;

        let stats = RenderStats {
            frames_rendered: self.stats.frames_rendered - before.frames_rendered,
            strokes_drawn: self.stats.strokes_drawn - before.strokes_drawn,
        };
        tracing::info!(frames = stats.frames_rendered, "render done");
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../tests/unit/session.rs"]
mod tests;
