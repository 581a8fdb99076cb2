use crate::foundation::core::FrameIndex;
use crate::noise::NoiseField;

/// Four noise-driven displacements shared by body and tentacle vertices.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct NoiseOffsets {
    /// `noise(r/100) * 100`, in `[0, 100]`.
    pub noise_y: f64,
    /// `50 - noise(r/100, f/120) * 100`, in `[-50, 50]`.
    pub noise_y2: f64,
    /// `500 - noise(rad a, f/120) * 1100`, in `[-600, 500]`.
    pub noise_x: f64,
    /// `100 - noise(rad(360 - a), f/200) * 200`, in `[-100, 100]`.
    pub noise_x2: f64,
}

impl NoiseOffsets {
    pub fn sample(
        noise: &dyn NoiseField,
        radius: f64,
        frame: FrameIndex,
        angle_deg: f64,
    ) -> Self {
        let f = frame.as_time();
        let r = radius / 100.0;
        Self {
            noise_y: noise.sample1(r) * 100.0,
            noise_y2: 50.0 - noise.sample2(r, f / 120.0) * 100.0,
            noise_x: 500.0 - noise.sample2(angle_deg.to_radians(), f / 120.0) * 1100.0,
            noise_x2: 100.0 - noise.sample2((360.0 - angle_deg).to_radians(), f / 200.0) * 200.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sketch/offsets.rs"]
mod tests;
