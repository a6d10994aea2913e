//! Per-band filtering and subband output extraction
//!
//! Two evaluation paths share the same bank:
//! - frame path: filter one fixed 512-sample frame through every band with
//!   zero initial conditions and extract full responses, energies, or
//!   decimated samples;
//! - streaming path: `SubbandAnalyzer` carries a delay line across calls and
//!   emits one 32-sample output vector per 32 input samples via the
//!   efficient folded evaluation of the MP3 standard.

use crate::config::BankConfig;
use crate::error::{BankError, BankResult};
use crate::filterbank::delay::DelayLine;
use crate::filterbank::modulation::FilterBank;
use log::debug;
use ndarray::{s, Array2, ArrayView1};

/// Which subband output the frame path should extract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Full filtered time series per band, for spectral inspection
    FullResponse,

    /// One scalar per band: the sum of squared response samples
    Energy,

    /// Every band_count-th response sample per band (critically sampled)
    Decimated,
}

/// Subband output of one analysis frame
#[derive(Debug, Clone)]
pub enum BandOutput {
    /// Shape (band_count, frame_len)
    FullResponse(Array2<f64>),

    /// One energy per band
    Energy(Vec<f64>),

    /// Shape (band_count, frame_len / band_count)
    Decimated(Array2<f64>),
}

/// Filter one frame through every band of the bank
///
/// Direct-form FIR with zero initial conditions, truncated to the frame
/// length: y_b[m] = Σ_{k=0..m} coeff[b][k] * frame[m-k]. Frames are
/// independent; no state is carried between calls.
///
/// # Returns
/// Response matrix of shape (band_count, frame_len)
pub fn band_responses(bank: &FilterBank, frame: &[f64]) -> BankResult<Array2<f64>> {
    if frame.len() != bank.filter_length() {
        return Err(BankError::FrameLength {
            expected: bank.filter_length(),
            actual: frame.len(),
        });
    }

    let bands = bank.band_count();
    let len = frame.len();
    let mut responses = Array2::zeros((bands, len));

    for band in 0..bands {
        let coeffs = bank.band(band);
        for m in 0..len {
            let mut acc = 0.0;
            for k in 0..=m {
                acc += coeffs[k] * frame[m - k];
            }
            responses[[band, m]] = acc;
        }
    }

    Ok(responses)
}

/// Per-band energy: Σ_n y_b[n]² over the analysis window
///
/// Discards phase; an energy indicator, not a decimated subband sample.
pub fn band_energies(responses: &Array2<f64>) -> Vec<f64> {
    responses
        .rows()
        .into_iter()
        .map(|row| row.iter().map(|y| y * y).sum())
        .collect()
}

/// Keep every `band_count`-th time sample of each band's response
///
/// The critically sampled output: one sample per band per band_count input
/// samples, taken at indices band_count-1, 2*band_count-1, ... so the frame
/// path agrees with `SubbandAnalyzer`, which emits after each band_count
/// new samples.
///
/// # Panics
/// Panics if `band_count` is zero.
pub fn decimate_responses(responses: &Array2<f64>, band_count: usize) -> Array2<f64> {
    assert!(band_count > 0, "band_count must be non-zero");
    responses
        .slice(s![.., band_count - 1..;band_count as isize])
        .to_owned()
}

/// Filter a frame and extract the requested output form
pub fn analyze_frame(
    bank: &FilterBank,
    frame: &[f64],
    mode: OutputMode,
) -> BankResult<BandOutput> {
    let responses = band_responses(bank, frame)?;

    Ok(match mode {
        OutputMode::FullResponse => BandOutput::FullResponse(responses),
        OutputMode::Energy => BandOutput::Energy(band_energies(&responses)),
        OutputMode::Decimated => {
            BandOutput::Decimated(decimate_responses(&responses, bank.band_count()))
        }
    })
}

/// Streaming subband analyzer with per-channel filter state
///
/// Owns the bank, a delay line of the last filter_length samples, and the
/// cosine matrixing table of the efficient evaluation. Every band_count new
/// samples it emits one vector of band_count subband samples, equal to the
/// decimated direct convolution output. State carries across calls; use one
/// analyzer per channel.
pub struct SubbandAnalyzer {
    bank: FilterBank,

    /// Prototype coefficients, kept separate for the windowing step
    prototype: Vec<f64>,

    /// History of the last filter_length input samples
    delay: DelayLine,

    /// Matrixing table M[b][q] = cos((2b+1)(q - offset)π/(2B)), shape (B, 2B)
    matrix: Array2<f64>,

    /// Folded partial sums c[q], reused every hop
    partials: Vec<f64>,

    /// Samples buffered toward the next hop
    pending: usize,
}

impl SubbandAnalyzer {
    /// Create an analyzer for one channel
    pub fn new(config: BankConfig, prototype: &[f64]) -> BankResult<Self> {
        let bank = FilterBank::new(config, prototype)?;

        let bands = bank.band_count();
        let two_b = 2 * bands;
        let offset = bank.config().phase_offset;

        let mut matrix = Array2::zeros((bands, two_b));
        for band in 0..bands {
            let omega = bank.modulation_frequency(band);
            for q in 0..two_b {
                matrix[[band, q]] = (omega * (q as f64 - offset)).cos();
            }
        }

        Ok(Self {
            delay: DelayLine::new(bank.filter_length()),
            prototype: prototype.to_vec(),
            partials: vec![0.0; two_b],
            matrix,
            bank,
            pending: 0,
        })
    }

    /// Push new samples, collecting one output vector per band_count samples
    ///
    /// Each output vector holds one new sample for every band. A call may
    /// return zero, one, or several vectors depending on how many samples
    /// were pending from previous calls.
    pub fn push_samples(&mut self, samples: &[f64]) -> Vec<Vec<f64>> {
        let hop = self.bank.band_count();
        let mut outputs = Vec::with_capacity(samples.len() / hop + 1);

        for &sample in samples {
            self.delay.push(sample);
            self.pending += 1;

            if self.pending == hop {
                self.pending = 0;
                outputs.push(self.matrixed_hop());
            }
        }

        outputs
    }

    /// Efficient evaluation of one hop
    ///
    /// z[i] = h[i] * x[newest - i]; the cosine's half-period sign flip
    /// folds the window into 2B partial sums c[q] = Σ_p (-1)^p z[q + 2B·p],
    /// and s = M · c. Equals Σ_i coeff[b][i] * x[newest - i] per band.
    fn matrixed_hop(&mut self) -> Vec<f64> {
        let two_b = 2 * self.bank.band_count();

        let z = self.delay.windowed_products(&self.prototype);

        self.partials.fill(0.0);
        for (i, &z_i) in z.iter().enumerate() {
            let q = i % two_b;
            if (i / two_b) % 2 == 0 {
                self.partials[q] += z_i;
            } else {
                self.partials[q] -= z_i;
            }
        }

        let c = ArrayView1::from(&self.partials[..]);
        self.matrix.dot(&c).to_vec()
    }

    /// Clear the delay line and the hop counter
    pub fn reset(&mut self) {
        debug!("resetting subband analyzer state");
        self.delay.reset();
        self.pending = 0;
    }

    /// Samples buffered toward the next hop
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// The underlying filter bank
    pub fn bank(&self) -> &FilterBank {
        &self.bank
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::design::{design_prototype, DesignMethod, PrototypeSpec};

    fn test_prototype(config: &BankConfig) -> Vec<f64> {
        let spec = PrototypeSpec {
            method: DesignMethod::IdealTruncation,
            ..PrototypeSpec::from_config(config)
        };
        design_prototype(&spec).unwrap()
    }

    fn test_frame(len: usize) -> Vec<f64> {
        (0..len)
            .map(|n| (n as f64 * 0.021).sin() + 0.4 * (n as f64 * 0.37).cos())
            .collect()
    }

    #[test]
    fn test_response_shapes() {
        let config = BankConfig::default();
        let prototype = test_prototype(&config);
        let bank = FilterBank::new(config, &prototype).unwrap();
        let frame = test_frame(512);

        let responses = band_responses(&bank, &frame).unwrap();
        assert_eq!(responses.dim(), (32, 512));

        let energies = band_energies(&responses);
        assert_eq!(energies.len(), 32);

        let decimated = decimate_responses(&responses, 32);
        assert_eq!(decimated.dim(), (32, 16));
    }

    #[test]
    fn test_rejects_wrong_frame_length() {
        let config = BankConfig::default();
        let prototype = test_prototype(&config);
        let bank = FilterBank::new(config, &prototype).unwrap();

        let short_frame = vec![0.0; 100];
        assert!(matches!(
            band_responses(&bank, &short_frame),
            Err(BankError::FrameLength {
                expected: 512,
                actual: 100
            })
        ));
    }

    #[test]
    fn test_impulse_response_reproduces_coefficients() {
        let config = BankConfig::default();
        let prototype = test_prototype(&config);
        let bank = FilterBank::new(config, &prototype).unwrap();

        let mut impulse = vec![0.0; 512];
        impulse[0] = 1.0;

        let responses = band_responses(&bank, &impulse).unwrap();
        for band in 0..32 {
            for n in 0..512 {
                let diff = (responses[[band, n]] - bank.coefficients()[[band, n]]).abs();
                assert!(diff < 1e-12);
            }
        }
    }

    #[test]
    fn test_energies_non_negative_and_zero_iff_zero() {
        let config = BankConfig::default();
        let prototype = test_prototype(&config);
        let bank = FilterBank::new(config, &prototype).unwrap();

        // Zero frame gives exactly zero energy in every band
        let zero_frame = vec![0.0; 512];
        let responses = band_responses(&bank, &zero_frame).unwrap();
        for e in band_energies(&responses) {
            assert_eq!(e, 0.0);
        }

        // A non-trivial frame gives strictly positive energy in every band
        let responses = band_responses(&bank, &test_frame(512)).unwrap();
        for e in band_energies(&responses) {
            assert!(e > 0.0);
        }
    }

    #[test]
    fn test_determinism() {
        let config = BankConfig::default();
        let prototype = test_prototype(&config);
        let bank = FilterBank::new(config, &prototype).unwrap();
        let frame = test_frame(512);

        let first = band_responses(&bank, &frame).unwrap();
        let second = band_responses(&bank, &frame).unwrap();
        assert_eq!(first, second);

        let e1 = band_energies(&first);
        let e2 = band_energies(&second);
        assert_eq!(e1, e2);
    }

    #[test]
    fn test_analyze_frame_modes() {
        let config = BankConfig::default();
        let prototype = test_prototype(&config);
        let bank = FilterBank::new(config, &prototype).unwrap();
        let frame = test_frame(512);

        match analyze_frame(&bank, &frame, OutputMode::FullResponse).unwrap() {
            BandOutput::FullResponse(r) => assert_eq!(r.dim(), (32, 512)),
            other => panic!("wrong output variant: {:?}", other),
        }

        match analyze_frame(&bank, &frame, OutputMode::Energy).unwrap() {
            BandOutput::Energy(e) => assert_eq!(e.len(), 32),
            other => panic!("wrong output variant: {:?}", other),
        }

        match analyze_frame(&bank, &frame, OutputMode::Decimated).unwrap() {
            BandOutput::Decimated(d) => assert_eq!(d.dim(), (32, 16)),
            other => panic!("wrong output variant: {:?}", other),
        }
    }

    #[test]
    fn test_streaming_matches_direct_convolution() {
        let config = BankConfig::default();
        let prototype = test_prototype(&config);
        let bank = FilterBank::new(config.clone(), &prototype).unwrap();
        let mut analyzer = SubbandAnalyzer::new(config, &prototype).unwrap();

        let frame = test_frame(512);
        let outputs = analyzer.push_samples(&frame);
        assert_eq!(outputs.len(), 16);

        // Hop t sees samples up to index 32t + 31; with zero initial
        // conditions the matrixed output must equal the direct convolution
        for (t, s) in outputs.iter().enumerate() {
            let newest = 32 * t + 31;
            for band in 0..32 {
                let mut expected = 0.0;
                for i in 0..=newest {
                    expected += bank.coefficients()[[band, i]] * frame[newest - i];
                }
                assert!(
                    (s[band] - expected).abs() < 1e-9,
                    "hop {} band {}: {} vs {}",
                    t,
                    band,
                    s[band],
                    expected
                );
            }
        }
    }

    #[test]
    fn test_decimated_mode_matches_streaming_output() {
        let config = BankConfig::default();
        let prototype = test_prototype(&config);
        let bank = FilterBank::new(config.clone(), &prototype).unwrap();
        let mut analyzer = SubbandAnalyzer::new(config, &prototype).unwrap();

        let frame = test_frame(512);
        let responses = band_responses(&bank, &frame).unwrap();
        let decimated = decimate_responses(&responses, 32);
        let streamed = analyzer.push_samples(&frame);

        // Same input, same outputs: decimated frame samples line up with
        // the vectors the streaming path emits every 32 samples
        assert_eq!(decimated.dim(), (32, 16));
        assert_eq!(streamed.len(), 16);
        for (t, s) in streamed.iter().enumerate() {
            for band in 0..32 {
                assert!(
                    (decimated[[band, t]] - s[band]).abs() < 1e-9,
                    "hop {} band {}: {} vs {}",
                    t,
                    band,
                    decimated[[band, t]],
                    s[band]
                );
            }
        }
    }

    #[test]
    #[should_panic(expected = "band_count must be non-zero")]
    fn test_decimate_rejects_zero_band_count() {
        let responses = Array2::zeros((2, 8));
        decimate_responses(&responses, 0);
    }

    #[test]
    fn test_streaming_state_carries_across_calls() {
        let config = BankConfig::default();
        let prototype = test_prototype(&config);
        let frame = test_frame(512);

        // One call with the whole frame vs many calls with uneven chunks
        let mut whole = SubbandAnalyzer::new(config.clone(), &prototype).unwrap();
        let expected = whole.push_samples(&frame);

        let mut chunked = SubbandAnalyzer::new(config, &prototype).unwrap();
        let mut actual = Vec::new();
        for chunk in frame.chunks(23) {
            actual.extend(chunked.push_samples(chunk));
        }

        assert_eq!(expected.len(), actual.len());
        for (a, b) in expected.iter().zip(actual.iter()) {
            for (x, y) in a.iter().zip(b.iter()) {
                assert!((x - y).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let config = BankConfig::default();
        let prototype = test_prototype(&config);
        let frame = test_frame(512);

        let mut analyzer = SubbandAnalyzer::new(config.clone(), &prototype).unwrap();
        let fresh = analyzer.push_samples(&frame);

        analyzer.push_samples(&frame[..48]);
        assert_eq!(analyzer.pending(), 16);

        analyzer.reset();
        assert_eq!(analyzer.pending(), 0);

        let after_reset = analyzer.push_samples(&frame);
        for (a, b) in fresh.iter().zip(after_reset.iter()) {
            for (x, y) in a.iter().zip(b.iter()) {
                assert!((x - y).abs() < 1e-12);
            }
        }
    }
}
