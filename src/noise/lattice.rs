/// Fill a value-noise lattice with `len` uniform samples in `[0, 1)` drawn from `seed`.
///
/// Each entry is a SplitMix64 output reduced to its top 53 bits, so the table is a pure function
/// of `(seed, len)` and a longer table extends a shorter one.
pub(crate) fn fill_table(seed: u64, len: usize) -> Vec<f64> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
            let mut z = state;
            z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
            ((z ^ (z >> 31)) >> 11) as f64 / (1u64 << 53) as f64
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/noise/lattice.rs"]
mod tests;
