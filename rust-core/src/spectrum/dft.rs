//! Direct discrete Fourier transform
//!
//! The textbook O(N²) definition, kept deliberately FFT-free so results can
//! be checked against the definition itself. Use `FftEngine` when speed
//! matters.

use num_complex::Complex64;
use std::f64::consts::PI;

/// Direct DFT of a real signal
///
/// X[k] = Σ_n x[n] * exp(-2πi·kn/N), returning all N complex bins.
pub fn dft(samples: &[f64]) -> Vec<Complex64> {
    let n = samples.len();
    let step = -2.0 * PI / n as f64;

    (0..n)
        .map(|k| {
            let mut sum = Complex64::new(0.0, 0.0);
            for (i, &x) in samples.iter().enumerate() {
                let phase = step * (k * i) as f64;
                sum += x * Complex64::new(phase.cos(), phase.sin());
            }
            sum
        })
        .collect()
}
