//! FFT engine for real-valued signals
//!
//! Fast counterpart of the direct DFT, used for inspecting band responses
//! where O(N²) per band adds up.

use ndarray::Array2;
use realfft::{RealFftPlanner, RealToComplex};
use std::sync::Arc;

/// FFT engine for real-valued signals
pub struct FftEngine {
    /// FFT size (number of samples)
    fft_size: usize,

    /// Real FFT processor
    r2c: Arc<dyn RealToComplex<f64>>,

    /// Reusable input buffer
    input_buffer: Vec<f64>,

    /// Reusable output buffer (complex spectrum)
    output_buffer: Vec<num_complex::Complex<f64>>,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `fft_size` - FFT size (number of samples)
    pub fn new(fft_size: usize) -> Self {
        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(fft_size);

        let input_buffer = vec![0.0; fft_size];
        let output_buffer = vec![num_complex::Complex::new(0.0, 0.0); fft_size / 2 + 1];

        Self {
            fft_size,
            r2c,
            input_buffer,
            output_buffer,
        }
    }

    /// Compute FFT and return magnitude spectrum
    ///
    /// # Arguments
    /// * `signal` - Input signal (will be zero-padded if shorter than fft_size)
    ///
    /// # Returns
    /// Magnitude spectrum |X[k]| for k = 0..fft_size/2 (positive frequencies only)
    pub fn magnitudes(&mut self, signal: &[f64]) -> Vec<f64> {
        // Copy signal to input buffer with zero-padding
        let copy_len = signal.len().min(self.fft_size);
        self.input_buffer[..copy_len].copy_from_slice(&signal[..copy_len]);
        if copy_len < self.fft_size {
            self.input_buffer[copy_len..].fill(0.0);
        }

        self.r2c
            .process(&mut self.input_buffer, &mut self.output_buffer)
            .expect("FFT processing failed");

        self.output_buffer.iter().map(|c| c.norm()).collect()
    }

    /// Per-band magnitude spectra of a response matrix
    ///
    /// One row of |Y_b[k]| per band, shape (band_count, fft_size/2 + 1) --
    /// the inspection view of the filter bank's frequency coverage.
    pub fn band_response_spectra(&mut self, responses: &Array2<f64>) -> Array2<f64> {
        let bins = self.num_bins();
        let mut spectra = Array2::zeros((responses.nrows(), bins));

        for (band, row) in responses.rows().into_iter().enumerate() {
            let samples = row.to_vec();
            let magnitudes = self.magnitudes(&samples);
            for (k, &m) in magnitudes.iter().enumerate() {
                spectra[[band, k]] = m;
            }
        }

        spectra
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Get number of frequency bins (fft_size/2 + 1 for real FFT)
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2 + 1
    }

    /// Convert bin index to normalized frequency (units of π rad/sample)
    pub fn bin_to_frequency(&self, bin: usize) -> f64 {
        2.0 * bin as f64 / self.fft_size as f64
    }

    /// Get frequency axis in normalized units (0 to 1, where 1 = π rad/sample)
    pub fn frequency_axis(&self) -> Vec<f64> {
        (0..self.num_bins())
            .map(|bin| self.bin_to_frequency(bin))
            .collect()
    }
}
