use crate::foundation::core::FrameIndex;
use crate::noise::NoiseField;

/// Straight-alpha stroke color with unclamped real channels on a `0..=255` scale.
///
/// Blue can exceed 255 (up to 270); quantization saturates it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StrokeColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl StrokeColor {
    /// Quantize to straight RGBA8, saturating out-of-range channels.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f64| c.round().clamp(0.0, 255.0) as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

/// Color for the stroke at `angle_deg` on `frame`.
///
/// Red depends on the angle only; green and blue also drift with time at different rates.
pub fn stroke_color(
    noise: &dyn NoiseField,
    angle_deg: f64,
    frame: FrameIndex,
    alpha: f64,
) -> StrokeColor {
    let a = angle_deg.to_radians();
    let f = frame.as_time();
    StrokeColor {
        r: 50.0 * noise.sample1(a),
        g: 180.0 * noise.sample2(a, f / 30.0),
        b: 220.0 * noise.sample2(a, f / 60.0) + 50.0,
        a: alpha,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/color.rs"]
mod tests;
