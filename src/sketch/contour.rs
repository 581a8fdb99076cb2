use crate::foundation::core::{FrameIndex, Point};
use crate::noise::NoiseField;
use crate::sketch::color::stroke_color;
use crate::sketch::curve::CurveStroke;
use crate::sketch::offsets::NoiseOffsets;
use crate::sketch::style::Style;

const FIRST_ANGLE_DEG: f64 = 1.0;
const LAST_ANGLE_DEG: f64 = 360.0;
const RADIUS_TIME_SCALE: f64 = 300.0;

/// Angles `start + i * step` for every `i` with the angle `<= end`.
///
/// Angles are computed from the index rather than accumulated, so the sequence (and its length)
/// does not depend on rounding drift.
#[derive(Clone, Copy, Debug)]
pub struct AngleSteps {
    start: f64,
    step: f64,
    count: usize,
    next: usize,
}

impl AngleSteps {
    pub fn new(start: f64, end: f64, step: f64) -> Self {
        let count = if step > 0.0 && end >= start {
            // Float-to-int casts saturate; a vanishing step yields `usize::MAX` here.
            (((end - start) / step + 1e-9).floor() as usize).saturating_add(1)
        } else {
            0
        };
        Self {
            start,
            step,
            count,
            next: 0,
        }
    }

    /// `[1, 360]` at the body step (1796 angles at 0.2 degrees).
    pub fn body(style: &Style) -> Self {
        Self::new(FIRST_ANGLE_DEG, LAST_ANGLE_DEG, style.body_step_deg)
    }

    /// `[1, 360]` at the tentacle step (18 angles at 20 degrees).
    pub fn tentacles(style: &Style) -> Self {
        Self::new(FIRST_ANGLE_DEG, LAST_ANGLE_DEG, style.tentacle_step_deg)
    }
}

impl Iterator for AngleSteps {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.count {
            return None;
        }
        let a = self.start + self.step * self.next as f64;
        self.next += 1;
        Some(a)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.count - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for AngleSteps {}

/// Bell radius for `frame`, in `[100, 300]`.
pub fn body_radius(noise: &dyn NoiseField, frame: FrameIndex) -> f64 {
    200.0 * noise.sample1(frame.as_time() / RADIUS_TIME_SCALE) + 100.0
}

/// Tentacle ring radius for `frame`, in `[20, 40]`.
pub fn tentacle_radius(noise: &dyn NoiseField, frame: FrameIndex) -> f64 {
    20.0 * noise.sample1(frame.as_time() / RADIUS_TIME_SCALE) + 20.0
}

/// One bell curve: from an anchor below the center, up through a noised crown point, out to the
/// rim and down to a far trailing point.
pub fn body_stroke(
    noise: &dyn NoiseField,
    center: Point,
    radius: f64,
    frame: FrameIndex,
    angle_deg: f64,
    style: &Style,
) -> CurveStroke {
    let a = angle_deg.to_radians();
    let x = center.x + radius * a.cos();
    let y = center.y
        + radius * a.sin()
        + (200.0 - noise.sample2(a, frame.as_time() / 100.0) * 400.0);
    let n = NoiseOffsets::sample(noise, radius, frame, angle_deg);

    CurveStroke {
        color: stroke_color(noise, angle_deg, frame, style.stroke_alpha),
        weight: style.body_weight_at(frame),
        points: [
            Point::new(center.x, center.y + 100.0),
            Point::new(center.x, center.y - 120.0 + n.noise_y),
            Point::new(x, y / 25.0 + 400.0 + n.noise_y2),
            Point::new(x + n.noise_x, y / 10.0 + 1000.0),
        ],
    }
}

/// One tentacle: hangs from the half-radius ring and sweeps out past the triple-radius ring.
pub fn tentacle_stroke(
    noise: &dyn NoiseField,
    center: Point,
    radius: f64,
    frame: FrameIndex,
    angle_deg: f64,
    style: &Style,
) -> CurveStroke {
    let a = angle_deg.to_radians();
    let x = center.x + radius * 3.0 * a.cos();
    let x2 = center.x + (radius / 2.0) * a.cos();
    let y = center.y + radius * a.sin();
    let n = NoiseOffsets::sample(noise, radius, frame, angle_deg);

    CurveStroke {
        color: stroke_color(noise, angle_deg, frame, style.stroke_alpha),
        weight: style.tentacle_weight,
        points: [
            Point::new(x2, center.y + 200.0),
            Point::new(x2, center.y - 40.0 + n.noise_y),
            Point::new(x + n.noise_x2, y / 1.1 + 500.0 + n.noise_y2),
            Point::new(x + n.noise_x, y / 10.0 + 1000.0),
        ],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/contour.rs"]
mod tests;
