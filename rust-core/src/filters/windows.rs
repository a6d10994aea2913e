//! Window functions for spectral weighting

use std::f64::consts::PI;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowType {
    /// Hann window: w[n] = 0.5 - 0.5*cos(2πn/(M-1))
    /// Mainlobe width: 8π/M, Sidelobe attenuation: ~44 dB
    Hann,

    /// Hamming window: w[n] = 0.54 - 0.46*cos(2πn/(M-1))
    /// Mainlobe width: 8π/M, Sidelobe attenuation: ~53 dB
    Hamming,

    /// Rectangular window (no windowing)
    Rectangular,
}

/// Generate window coefficients
///
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (M)
///
/// # Returns
/// Vector of window coefficients w[n] for n = 0..M-1
pub fn generate_window(window_type: WindowType, length: usize) -> Vec<f64> {
    let m = length as f64;
    let mut window = Vec::with_capacity(length);

    match window_type {
        WindowType::Hann => {
            for n in 0..length {
                let angle = 2.0 * PI * n as f64 / (m - 1.0);
                window.push(0.5 - 0.5 * angle.cos());
            }
        }

        WindowType::Hamming => {
            for n in 0..length {
                let angle = 2.0 * PI * n as f64 / (m - 1.0);
                window.push(0.54 - 0.46 * angle.cos());
            }
        }

        WindowType::Rectangular => {
            window.resize(length, 1.0);
        }
    }

    window
}

/// Energy-normalized Hann weighting for spectrum estimates
///
/// Raw weights w[n] = 1 - cos(2πn/(M-1)) (twice the Hann window), scaled
/// by 1/Σw² so the window's own energy drops out of the weighted estimate.
pub fn energy_normalized_hann(length: usize) -> Vec<f64> {
    let mut window = generate_window(WindowType::Hann, length);
    for w in window.iter_mut() {
        *w *= 2.0;
    }

    let energy: f64 = window.iter().map(|w| w * w).sum();
    for w in window.iter_mut() {
        *w /= energy;
    }

    window
}

/// Apply the energy-normalized Hann weighting to a signal frame
pub fn apply_weighting(signal: &[f64]) -> Vec<f64> {
    let window = energy_normalized_hann(signal.len());

    signal
        .iter()
        .zip(window.iter())
        .map(|(&s, &w)| s * w)
        .collect()
}
