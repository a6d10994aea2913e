//! Prototype filter design and analysis windows

pub mod design;
pub mod windows;

pub use design::{design_prototype, design_prototype_filter, DesignMethod, PrototypeSpec};
pub use windows::{apply_weighting, energy_normalized_hann, generate_window, WindowType};
