use ::noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use crate::noise::{NoiseConfig, NoiseField};

/// Fractal Perlin noise (`noise::Fbm<Perlin>`) folded into `[0, 1]`.
///
/// Octave `k` samples at frequency `2^k` with amplitude `falloff^k`. `Fbm` rescales the octave sum
/// to roughly `[-1, 1]`; the result is mapped to `[0, 1]` and clamped.
#[derive(Clone, Debug)]
pub struct PerlinNoise {
    fbm: Fbm<Perlin>,
}

impl PerlinNoise {
    pub fn new(seed: u64, cfg: NoiseConfig) -> Self {
        // `Fbm` takes a 32-bit seed; fold the high half in.
        let folded = (seed ^ (seed >> 32)) as u32;
        let octaves = cfg.octaves.clamp(1, NoiseConfig::MAX_OCTAVES) as usize;
        let fbm = Fbm::<Perlin>::new(folded)
            .set_octaves(octaves)
            .set_frequency(1.0)
            .set_lacunarity(2.0)
            .set_persistence(cfg.falloff);
        Self { fbm }
    }
}

impl NoiseField for PerlinNoise {
    fn sample2(&self, x: f64, y: f64) -> f64 {
        ((self.fbm.get([x, y]) + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/noise/perlin.rs"]
mod tests;
