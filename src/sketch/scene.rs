use crate::foundation::core::{Affine, Canvas, FrameIndex, Vec2};
use crate::motion::shape::AnimatedShape;
use crate::noise::NoiseField;
use crate::sketch::contour::{
    AngleSteps, body_radius, body_stroke, tentacle_radius, tentacle_stroke,
};
use crate::sketch::curve::CurveStroke;
use crate::sketch::style::Style;

/// Everything drawn on one frame, in draw order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameScene {
    pub frame: FrameIndex,
    /// Translation applied to every stroke.
    pub translate: Vec2,
    /// Body strokes first, then tentacle strokes.
    pub strokes: Vec<CurveStroke>,
    #[serde(skip)]
    body_len: usize,
}

impl FrameScene {
    pub fn from_parts(
        frame: FrameIndex,
        translate: Vec2,
        body: Vec<CurveStroke>,
        tentacles: Vec<CurveStroke>,
    ) -> Self {
        let body_len = body.len();
        let mut strokes = body;
        strokes.extend(tentacles);
        Self {
            frame,
            translate,
            strokes,
            body_len,
        }
    }

    pub fn transform(&self) -> Affine {
        Affine::translate(self.translate)
    }

    pub fn body(&self) -> &[CurveStroke] {
        &self.strokes[..self.body_len]
    }

    pub fn tentacles(&self) -> &[CurveStroke] {
        &self.strokes[self.body_len..]
    }
}

/// Build the scene for `frame` with the shape at its already-updated position.
pub fn draw_frame(
    noise: &dyn NoiseField,
    shape: &AnimatedShape,
    canvas: Canvas,
    style: &Style,
    frame: FrameIndex,
) -> FrameScene {
    let center = shape.center(canvas);
    let translate = Vec2::new(
        center.x - f64::from(canvas.width) / 2.0,
        center.y - f64::from(canvas.height) / 1.5,
    );

    let radius = body_radius(noise, frame);
    let body = AngleSteps::body(style)
        .map(|a| body_stroke(noise, center, radius, frame, a, style))
        .collect();

    let radius = tentacle_radius(noise, frame);
    let tentacles = AngleSteps::tentacles(style)
        .map(|a| tentacle_stroke(noise, center, radius, frame, a, style))
        .collect();

    FrameScene::from_parts(frame, translate, body, tentacles)
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/scene.rs"]
mod tests;
