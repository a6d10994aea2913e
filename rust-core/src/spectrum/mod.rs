//! Spectral inspection utilities

pub mod db;
pub mod dft;
pub mod fft;

pub use db::{normalize_to_target_db, scaled_spectrum_db, to_db, DEFAULT_TARGET_DB};
pub use dft::dft;
pub use fft::FftEngine;
