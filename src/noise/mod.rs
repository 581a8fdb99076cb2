//! Smooth deterministic noise fields.
//!
//! Every contour vertex and stroke color is derived from a [`NoiseField`]. Two implementations
//! are provided:
//!
//! - [`ValueNoise`]: a seeded lattice noise with cosine interpolation and octave layering. This is
//!   the default and matches the look of the classic creative-coding `noise()` helper.
//! - [`PerlinNoise`]: fractal Perlin noise from the `noise` crate, folded into `[0, 1]`.

/// Seeded lattice noise with cosine interpolation.
pub mod value;
/// Fractal gradient noise over `noise::Fbm<Perlin>`.
pub mod perlin;
pub(crate) mod lattice;

pub use perlin::PerlinNoise;
pub use value::ValueNoise;

use crate::foundation::error::{JellyfishError, JellyfishResult};

/// A deterministic smooth function of one or two real coordinates.
///
/// Implementations must return values in `[0, 1]` and must return identical values for identical
/// inputs for the lifetime of the field.
pub trait NoiseField: Send + Sync {
    /// Sample the field at `(x, y)`.
    fn sample2(&self, x: f64, y: f64) -> f64;

    /// Sample the field along the `y = 0` line.
    fn sample1(&self, x: f64) -> f64 {
        self.sample2(x, 0.0)
    }
}

/// Which noise implementation backs a sketch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseKind {
    /// [`ValueNoise`].
    #[default]
    Value,
    /// [`PerlinNoise`].
    Perlin,
}

/// Noise configuration shared by both implementations.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// Implementation to use.
    pub kind: NoiseKind,
    /// Number of layered octaves, `1..=8`.
    pub octaves: u32,
    /// Amplitude multiplier applied per octave, `(0, 1]`.
    pub falloff: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            kind: NoiseKind::Value,
            octaves: 4,
            falloff: 0.5,
        }
    }
}

impl NoiseConfig {
    pub(crate) const MAX_OCTAVES: u32 = 8;

    /// Validate octave count and falloff.
    pub fn validate(&self) -> JellyfishResult<()> {
        if self.octaves == 0 || self.octaves > Self::MAX_OCTAVES {
            return Err(JellyfishError::validation(format!(
                "noise octaves must be in 1..={}, got {}",
                Self::MAX_OCTAVES,
                self.octaves
            )));
        }
        if !(self.falloff > 0.0 && self.falloff <= 1.0) {
            return Err(JellyfishError::validation(format!(
                "noise falloff must be in (0, 1], got {}",
                self.falloff
            )));
        }
        Ok(())
    }

    /// Sum of per-octave amplitudes, starting at `0.5`.
    pub(crate) fn total_amplitude(&self) -> f64 {
        let mut amp = 0.5;
        let mut total = 0.0;
        for _ in 0..self.octaves {
            total += amp;
            amp *= self.falloff;
        }
        total
    }
}

/// Build the configured noise field for `seed`.
pub fn build_noise(cfg: &NoiseConfig, seed: u64) -> JellyfishResult<Box<dyn NoiseField>> {
    cfg.validate()?;
    Ok(match cfg.kind {
        NoiseKind::Value => Box::new(ValueNoise::new(seed, *cfg)),
        NoiseKind::Perlin => Box::new(PerlinNoise::new(seed, *cfg)),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/noise/mod.rs"]
mod tests;
