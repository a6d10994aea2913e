//! Decibel conversion and spectrum scaling
//!
//! The exact-zero clamp to -100 dB is a convention, not an identity, and is
//! relied on for reproducible comparisons; do not replace it with an
//! epsilon floor.

use crate::spectrum::dft::dft;

/// Default target level for normalized spectrum plots
pub const DEFAULT_TARGET_DB: f64 = 96.0;

/// Convert magnitudes to decibels
///
/// 20·log10(m), with an exact-zero magnitude mapping to exactly -100 dB
/// instead of -inf.
pub fn to_db(magnitudes: &[f64]) -> Vec<f64> {
    magnitudes
        .iter()
        .map(|&m| if m == 0.0 { -100.0 } else { 20.0 * m.log10() })
        .collect()
}

/// Shift a decibel sequence so its maximum equals `target`
pub fn normalize_to_target_db(db: &[f64], target: f64) -> Vec<f64> {
    let max = db.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    db.iter().map(|&v| v + target - max).collect()
}

/// Normalized magnitude spectrum of a frame in dB
///
/// |dft(x)|/N converted to dB, shifted so the peak sits at `target_db`,
/// truncated to the N/2+1 non-negative-frequency bins (257 for N = 512).
pub fn scaled_spectrum_db(x: &[f64], target_db: f64) -> Vec<f64> {
    let n = x.len();

    let magnitudes: Vec<f64> = dft(x).iter().map(|c| c.norm() / n as f64).collect();
    let mut spectrum = normalize_to_target_db(&to_db(&magnitudes), target_db);
    spectrum.truncate(n / 2 + 1);
    spectrum
}
