//! Deterministic demo data.
//!
//! The generator is a sine-seeded hash, not a statistical PRNG: the same seed
//! always yields the same value on every platform with IEEE-754 `sin`, which
//! keeps demo dashboards and snapshot tests reproducible.

use crate::core::BandBound;

/// Scale applied to `sin(seed)` before taking the fractional part.
pub const SEED_SCALE: f64 = 10_000.0;

/// Baseline utilization of [`utilization_grid`] cells, in percent.
pub const UTILIZATION_BASE: f64 = 70.0;

/// Pseudo-random value in `[0, 1)`: `frac(sin(seed) * 10000)`.
#[must_use]
pub fn seeded_unit(seed: f64) -> f64 {
    let x = seed.sin() * SEED_SCALE;
    x - x.floor()
}

/// Random walk of `n` samples starting at `base`.
///
/// Each step adds `(seeded_unit(seed + i) - 0.5) * volatility + trend` to the
/// running value. Emitted samples are clamped at zero; the walk itself is not,
/// so a dip below zero has to be climbed back out of.
#[must_use]
pub fn synthetic_series(n: usize, base: f64, volatility: f64, trend: f64, seed: f64) -> Vec<f64> {
    let mut value = base;
    (0..n)
        .map(|i| {
            value += (seeded_unit(seed + i as f64) - 0.5) * volatility + trend;
            value.max(0.0)
        })
        .collect()
}

/// Symmetric relative envelope around `series`: `[v * (1 - w), v * (1 + w)]`,
/// with the lower bound clamped at zero.
#[must_use]
pub fn synthetic_band(series: &[f64], width: f64) -> Vec<BandBound> {
    series
        .iter()
        .map(|&value| BandBound {
            lower: (value * (1.0 - width)).max(0.0),
            upper: value * (1.0 + width),
        })
        .collect()
}

/// `rows x cols` utilization percentages around 70.
///
/// The offset rounds half up, so `-2.5` becomes `-2`.
#[must_use]
pub fn utilization_grid(rows: usize, cols: usize) -> Vec<Vec<f64>> {
    (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| {
                    let seed = (r * 10 + c) as f64;
                    UTILIZATION_BASE + (seeded_unit(seed) * 30.0 - 10.0 + 0.5).floor()
                })
                .collect()
        })
        .collect()
}
