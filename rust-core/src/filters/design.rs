//! Prototype lowpass filter design
//!
//! The filter bank is built from a single 512-tap linear-phase lowpass
//! prototype. Two design methods are supported: equiripple (Parks-McClellan)
//! and truncation of the ideal brick-wall response. The bank does not depend
//! on which method produced the coefficients.

use crate::config::BankConfig;
use crate::error::{BankResult, DesignError};
use log::debug;
use num_complex::Complex64;
use std::f64::consts::PI;

/// Design method for the prototype filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesignMethod {
    /// Equiripple (Parks-McClellan/Remez) design over passband and stopband
    Equiripple,

    /// Truncated inverse transform of the ideal brick-wall response
    IdealTruncation,
}

/// Prototype filter specifications
#[derive(Debug, Clone)]
pub struct PrototypeSpec {
    /// Filter length in taps
    pub num_taps: usize,

    /// Passband edge in Hz
    pub passband_edge: f64,

    /// Stopband edge in Hz
    pub stopband_edge: f64,

    /// Sample rate in Hz
    pub sample_rate: f64,

    /// Desired passband gain
    pub passband_gain: f64,

    /// Design method
    pub method: DesignMethod,
}

impl PrototypeSpec {
    /// Derive the prototype specification from a bank configuration
    ///
    /// Uses the MP3 passband gain of 2 and the equiripple method.
    pub fn from_config(config: &BankConfig) -> Self {
        Self {
            num_taps: config.filter_length,
            passband_edge: config.passband_edge,
            stopband_edge: config.stopband_edge,
            sample_rate: config.sample_rate,
            passband_gain: 2.0,
            method: DesignMethod::Equiripple,
        }
    }
}

/// Design a prototype lowpass filter
///
/// # Arguments
/// * `spec` - Prototype specifications
///
/// # Returns
/// Filter coefficients h[n] for n = 0..num_taps-1
pub fn design_prototype(spec: &PrototypeSpec) -> Result<Vec<f64>, DesignError> {
    match spec.method {
        DesignMethod::Equiripple => design_equiripple(spec),
        DesignMethod::IdealTruncation => Ok(design_ideal_truncation(spec)),
    }
}

/// Design the bank's prototype filter from its configuration
///
/// Entry point for filter-bank construction: validates the configuration
/// and runs the equiripple design over its band edges.
pub fn design_prototype_filter(config: &BankConfig) -> BankResult<Vec<f64>> {
    config.validate()?;
    let h = design_prototype(&PrototypeSpec::from_config(config))?;
    Ok(h)
}

/// Equiripple design via the Parks-McClellan exchange
///
/// Band edges are normalized to cycles/sample, so the grid spans [0, 0.5].
fn design_equiripple(spec: &PrototypeSpec) -> Result<Vec<f64>, DesignError> {
    use pm_remez::{constant, pm_parameters, pm_remez, BandSetting};

    let pm_err = |e: pm_remez::error::Error| DesignError::Equiripple(e.to_string());

    let fs = spec.sample_rate;
    let bands = [
        BandSetting::new(0.0, spec.passband_edge / fs, constant(spec.passband_gain))
            .map_err(pm_err)?,
        BandSetting::new(spec.stopband_edge / fs, 0.5, constant(0.0)).map_err(pm_err)?,
    ];

    let parameters = pm_parameters(spec.num_taps, &bands).map_err(pm_err)?;
    let design = pm_remez(&parameters).map_err(pm_err)?;

    debug!(
        "equiripple prototype: {} taps, edges {:.1}/{:.1} Hz, weighted error {:.3e}",
        spec.num_taps, spec.passband_edge, spec.stopband_edge, design.weighted_error
    );

    Ok(design.impulse_response)
}

/// Truncated inverse transform of the ideal brick-wall lowpass
///
/// h[n] = gain * sin(ωc(n - c)) / (π(n - c)) with ωc at the passband edge,
/// centered at c = (M-1)/2 for linear phase.
fn design_ideal_truncation(spec: &PrototypeSpec) -> Vec<f64> {
    let m = spec.num_taps;
    let wc_rad = 2.0 * PI * spec.passband_edge / spec.sample_rate;

    let center = (m - 1) as f64 / 2.0;
    let mut h = Vec::with_capacity(m);

    for n in 0..m {
        let n_shifted = n as f64 - center;

        let h_ideal = if n_shifted.abs() < 1e-10 {
            // At center point: limit as n -> 0
            wc_rad / PI
        } else {
            (wc_rad * n_shifted).sin() / (PI * n_shifted)
        };

        h.push(spec.passband_gain * h_ideal);
    }

    debug!(
        "truncated ideal prototype: {} taps, cutoff {:.5} rad/sample",
        m, wc_rad
    );

    h
}

/// Calculate frequency response at given frequencies
///
/// # Arguments
/// * `h` - Filter coefficients
/// * `frequencies` - Normalized frequencies (units of π rad/sample)
///
/// # Returns
/// Complex frequency response H(e^jω)
pub fn frequency_response(h: &[f64], frequencies: &[f64]) -> Vec<Complex64> {
    let mut response = Vec::with_capacity(frequencies.len());

    for &omega in frequencies {
        let omega_rad = omega * PI;
        let mut sum = Complex64::new(0.0, 0.0);

        for (n, &h_n) in h.iter().enumerate() {
            let phase = -(omega_rad * n as f64);
            sum += h_n * Complex64::new(phase.cos(), phase.sin());
        }

        response.push(sum);
    }

    response
}

/// Calculate magnitude response in dB
pub fn magnitude_response_db(h: &[f64], frequencies: &[f64]) -> Vec<f64> {
    frequency_response(h, frequencies)
        .iter()
        .map(|c| 20.0 * c.norm().log10())
        .collect()
}
