use crate::noise::lattice::fill_table;
use crate::noise::{NoiseConfig, NoiseField};

const TABLE_BITS: u32 = 12;
const TABLE_LEN: usize = 1 << TABLE_BITS;
const TABLE_MASK: u64 = (TABLE_LEN as u64) - 1;
const Y_WRAP_BITS: u32 = 4;
const Y_WRAP: u64 = 1 << Y_WRAP_BITS;

/// Seeded lattice ("value") noise.
///
/// A table of 4096 uniform random values is indexed by the integer lattice cell; the fractional
/// part is blended with a cosine ease on both axes. Octaves double the frequency and scale the
/// amplitude by `falloff`, starting from `0.5`. When the summed amplitude exceeds `1` the result is
/// divided by it so the output stays in `[0, 1]`.
///
/// Negative coordinates are mirrored (`|x|`, `|y|`).
#[derive(Clone, Debug)]
pub struct ValueNoise {
    table: Vec<f64>,
    octaves: u32,
    falloff: f64,
    norm: f64,
}

impl ValueNoise {
    pub fn new(seed: u64, cfg: NoiseConfig) -> Self {
        Self {
            table: fill_table(seed, TABLE_LEN),
            octaves: cfg.octaves.clamp(1, NoiseConfig::MAX_OCTAVES),
            falloff: cfg.falloff,
            norm: cfg.total_amplitude().max(1.0),
        }
    }

    fn at(&self, cell: u64) -> f64 {
        self.table[(cell & TABLE_MASK) as usize]
    }
}

fn scaled_cosine(t: f64) -> f64 {
    0.5 * (1.0 - (t * std::f64::consts::PI).cos())
}

impl NoiseField for ValueNoise {
    fn sample2(&self, x: f64, y: f64) -> f64 {
        let (x, y) = (x.abs(), y.abs());
        let mut xi = x.floor() as u64;
        let mut yi = y.floor() as u64;
        let mut xf = x - x.floor();
        let mut yf = y - y.floor();

        let mut out = 0.0;
        let mut amp = 0.5;
        for _ in 0..self.octaves {
            let cell = xi.wrapping_add(yi << Y_WRAP_BITS);
            let rx = scaled_cosine(xf);
            let ry = scaled_cosine(yf);

            let mut n1 = self.at(cell);
            n1 += rx * (self.at(cell.wrapping_add(1)) - n1);
            let mut n2 = self.at(cell.wrapping_add(Y_WRAP));
            n2 += rx * (self.at(cell.wrapping_add(Y_WRAP + 1)) - n2);
            n1 += ry * (n2 - n1);

            out += n1 * amp;
            amp *= self.falloff;

            xi <<= 1;
            xf *= 2.0;
            yi <<= 1;
            yf *= 2.0;
            if xf >= 1.0 {
                xi = xi.wrapping_add(1);
                xf -= 1.0;
            }
            if yf >= 1.0 {
                yi = yi.wrapping_add(1);
                yf -= 1.0;
            }
        }
        out / self.norm
    }
}

#[cfg(test)]
#[path = "../../tests/unit/noise/value.rs"]
mod tests;
