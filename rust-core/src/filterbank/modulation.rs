//! Cosine modulation of the prototype onto the subband center frequencies
//!
//! Band k's filter is the prototype multiplied by a cosine at frequency
//! (2k+1)π/(2B), shifting the lowpass passband onto 32 uniformly spaced
//! centers across the Nyquist range. One prototype design yields the whole
//! bank.

use crate::config::BankConfig;
use crate::error::{BankError, BankResult};
use log::debug;
use ndarray::{Array2, ArrayView1};

/// Bank of cosine-modulated FIR filters
///
/// Immutable after construction; one instance serves every frame.
pub struct FilterBank {
    config: BankConfig,

    /// Coefficient matrix, shape (band_count, filter_length)
    coefficients: Array2<f64>,
}

impl FilterBank {
    /// Construct the bank from a prototype lowpass filter
    ///
    /// coeff[b][n] = cos((2b+1) * (n - phase_offset) * π / (2 * band_count)) * prototype[n]
    ///
    /// # Arguments
    /// * `config` - Bank configuration (validated here)
    /// * `prototype` - Prototype coefficients, length must equal `config.filter_length`
    pub fn new(config: BankConfig, prototype: &[f64]) -> BankResult<Self> {
        config.validate()?;

        if prototype.len() != config.filter_length {
            return Err(BankError::PrototypeLength {
                expected: config.filter_length,
                actual: prototype.len(),
            });
        }

        let bands = config.band_count;
        let taps = config.filter_length;
        let mut coefficients = Array2::zeros((bands, taps));

        for band in 0..bands {
            let omega = config.modulation_frequency(band);
            for (n, &h_n) in prototype.iter().enumerate() {
                let phase = omega * (n as f64 - config.phase_offset);
                coefficients[[band, n]] = phase.cos() * h_n;
            }
        }

        debug!("constructed filter bank: {} bands x {} taps", bands, taps);

        Ok(Self {
            config,
            coefficients,
        })
    }

    /// Coefficients of one band's filter
    pub fn band(&self, band: usize) -> ArrayView1<'_, f64> {
        self.coefficients.row(band)
    }

    /// Full coefficient matrix, shape (band_count, filter_length)
    pub fn coefficients(&self) -> &Array2<f64> {
        &self.coefficients
    }

    /// Number of bands
    pub fn band_count(&self) -> usize {
        self.config.band_count
    }

    /// Filter length in taps
    pub fn filter_length(&self) -> usize {
        self.config.filter_length
    }

    /// Bank configuration
    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    /// Center frequency of a band in radians per sample
    pub fn modulation_frequency(&self, band: usize) -> f64 {
        self.config.modulation_frequency(band)
    }
}
