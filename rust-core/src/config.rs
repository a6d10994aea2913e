//! Analysis configuration
//!
//! Collects the constants of the 32-band MP3-style analysis stage into one
//! explicit structure instead of scattering them as free literals.

use crate::error::ConfigError;
use std::f64::consts::PI;

/// Configuration for prototype design and filter-bank construction
#[derive(Debug, Clone, PartialEq)]
pub struct BankConfig {
    /// Sample rate in Hz
    pub sample_rate: f64,

    /// Number of subbands
    pub band_count: usize,

    /// Prototype filter length in taps (also the analysis window length)
    pub filter_length: usize,

    /// Prototype passband edge in Hz
    pub passband_edge: f64,

    /// Prototype stopband edge in Hz
    pub stopband_edge: f64,

    /// Sample-index offset of the cosine modulation
    ///
    /// The MP3 convention is 16; kept tunable because it is tied to the
    /// prototype's delay convention, not a fixed property of the bank.
    pub phase_offset: f64,
}

impl Default for BankConfig {
    /// The standard MP3 analysis stage: 32 bands of a 512-tap prototype
    /// at 44.1 kHz, passband edge Nyquist/128, stopband edge Nyquist/32
    fn default() -> Self {
        let sample_rate = 44100.0;
        let nyquist = sample_rate / 2.0;

        Self {
            sample_rate,
            band_count: 32,
            filter_length: 512,
            passband_edge: nyquist / 128.0,
            stopband_edge: nyquist / 32.0,
            phase_offset: 16.0,
        }
    }
}

impl BankConfig {
    /// Nyquist frequency in Hz
    pub fn nyquist(&self) -> f64 {
        self.sample_rate / 2.0
    }

    /// Cosine modulation frequency of a band, in radians per sample
    ///
    /// Band `b` is centered at `(2b + 1) * π / (2 * band_count)`, placing
    /// the `band_count` passbands uniformly across the Nyquist range.
    pub fn modulation_frequency(&self, band: usize) -> f64 {
        (2 * band + 1) as f64 * PI / (2 * self.band_count) as f64
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rate <= 0.0 {
            return Err(ConfigError::NonPositiveSampleRate {
                sample_rate: self.sample_rate,
            });
        }

        if self.band_count == 0 {
            return Err(ConfigError::ZeroBandCount);
        }

        if self.filter_length == 0 {
            return Err(ConfigError::ZeroFilterLength);
        }

        // The efficient evaluation folds the window into 2B partial sums
        if self.filter_length % (2 * self.band_count) != 0 {
            return Err(ConfigError::FilterLengthNotPolyphase {
                filter_length: self.filter_length,
                band_count: self.band_count,
            });
        }

        let nyquist = self.nyquist();
        if self.passband_edge <= 0.0
            || self.passband_edge >= self.stopband_edge
            || self.stopband_edge >= nyquist
        {
            return Err(ConfigError::EdgeOrdering {
                passband_edge: self.passband_edge,
                stopband_edge: self.stopband_edge,
                nyquist,
            });
        }

        Ok(())
    }
}
