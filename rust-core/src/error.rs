//! Error types for the subband analysis workbench
//!
//! Mismatched array lengths are rejected immediately with a descriptive
//! failure rather than silently producing wrong-shaped output.

use thiserror::Error;

/// Umbrella error type for the filter-bank surface
#[derive(Debug, Error)]
pub enum BankError {
    /// Configuration validation errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Prototype filter design errors
    #[error("Filter design error: {0}")]
    Design(#[from] DesignError),

    /// Prototype filter does not match the configured tap count
    #[error("Invalid prototype length: expected {expected} taps, got {actual}")]
    PrototypeLength { expected: usize, actual: usize },

    /// Audio frame does not match the configured analysis window
    #[error("Invalid frame length: expected {expected} samples, got {actual}")]
    FrameLength { expected: usize, actual: usize },
}

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Sample rate must be positive
    #[error("Non-positive sample rate: {sample_rate} Hz")]
    NonPositiveSampleRate { sample_rate: f64 },

    /// At least one band is required
    #[error("Band count must be non-zero")]
    ZeroBandCount,

    /// At least one filter tap is required
    #[error("Filter length must be non-zero")]
    ZeroFilterLength,

    /// Polyphase evaluation folds the window into 2*band_count partial sums
    #[error("Filter length {filter_length} is not a multiple of 2 * band count ({band_count})")]
    FilterLengthNotPolyphase {
        filter_length: usize,
        band_count: usize,
    },

    /// Band edges must satisfy 0 < passband < stopband < Nyquist
    #[error(
        "Invalid band edges: passband {passband_edge} Hz, stopband {stopband_edge} Hz, \
         Nyquist {nyquist} Hz"
    )]
    EdgeOrdering {
        passband_edge: f64,
        stopband_edge: f64,
        nyquist: f64,
    },
}

/// Prototype filter design errors
#[derive(Debug, Error)]
pub enum DesignError {
    /// The Parks-McClellan exchange failed to produce a design
    #[error("Equiripple design failed: {0}")]
    Equiripple(String),
}

/// Specialized result type for the filter-bank surface
pub type BankResult<T> = std::result::Result<T, BankError>;
