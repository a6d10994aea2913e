//! Subband Workbench - MP3-style analysis filter bank core
//!
//! Splits audio into 32 uniform subbands using a cosine-modulated filter
//! bank derived from a single 512-tap lowpass prototype, plus the spectral
//! inspection utilities (direct DFT, dB scaling, FFT engine) used to
//! evaluate the designs.

pub mod config;
pub mod error;
pub mod filterbank;
pub mod filters;
pub mod spectrum;

pub use config::BankConfig;
pub use error::{BankError, BankResult};
pub use filterbank::{analyze_frame, BandOutput, FilterBank, OutputMode, SubbandAnalyzer};
pub use filters::design::design_prototype_filter;
