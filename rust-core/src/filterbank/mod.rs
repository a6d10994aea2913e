//! Cosine-modulated subband analysis filter bank

pub mod analysis;
pub mod delay;
pub mod modulation;

pub use analysis::{
    analyze_frame, band_energies, band_responses, decimate_responses, BandOutput, OutputMode,
    SubbandAnalyzer,
};
pub use delay::DelayLine;
pub use modulation::FilterBank;
