use kurbo::CubicBez;

use crate::foundation::core::{BezPath, Point};
use crate::sketch::color::StrokeColor;

/// One stroked four-point Catmull-Rom curve.
///
/// `points[0]` and `points[3]` only steer the tangents; the visible segment runs from
/// `points[1]` to `points[2]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CurveStroke {
    pub color: StrokeColor,
    pub weight: f64,
    pub points: [Point; 4],
}

impl CurveStroke {
    /// The visible segment as an exactly equivalent cubic Bézier.
    pub fn to_cubic(&self) -> CubicBez {
        catmull_rom_segment(self.points)
    }

    pub fn to_path(&self) -> BezPath {
        let c = self.to_cubic();
        let mut path = BezPath::new();
        path.move_to(c.p0);
        path.curve_to(c.p1, c.p2, c.p3);
        path
    }
}

/// Uniform Catmull-Rom segment between `p[1]` and `p[2]` (tension 0) as a cubic Bézier.
pub fn catmull_rom_segment(p: [Point; 4]) -> CubicBez {
    let c1 = p[1] + (p[2] - p[0]) / 6.0;
    let c2 = p[2] - (p[3] - p[1]) / 6.0;
    CubicBez::new(p[1], c1, c2, p[2])
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/curve.rs"]
mod tests;
