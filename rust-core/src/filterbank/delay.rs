//! Sample history for the streaming analyzer
//!
//! Fixed-capacity ring buffer holding the most recent samples of one
//! channel, addressed newest-first. Allocated once, never resized.

/// Circular delay line over the last `capacity` samples
pub struct DelayLine {
    /// Sample storage, zero-initialized (zero initial conditions)
    buffer: Vec<f64>,

    /// Next write position
    cursor: usize,
}

impl DelayLine {
    /// Create a delay line holding `capacity` samples, all zero
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "delay line capacity must be non-zero");
        Self {
            buffer: vec![0.0; capacity],
            cursor: 0,
        }
    }

    /// Shift in a new sample, discarding the oldest
    #[inline]
    pub fn push(&mut self, sample: f64) {
        self.buffer[self.cursor] = sample;
        self.cursor = (self.cursor + 1) % self.buffer.len();
    }

    /// Sample `age` steps into the past (0 = newest)
    ///
    /// `age` must be less than the capacity.
    #[inline]
    pub fn sample_back(&self, age: usize) -> f64 {
        let len = self.buffer.len();
        self.buffer[(self.cursor + len - 1 - age) % len]
    }

    /// Element-wise product of the history with a weight vector
    ///
    /// Returns z[i] = weights[i] * x[newest - i]; the weight vector must
    /// not be longer than the capacity.
    pub fn windowed_products(&self, weights: &[f64]) -> Vec<f64> {
        weights
            .iter()
            .enumerate()
            .map(|(age, &w)| w * self.sample_back(age))
            .collect()
    }

    /// Clear the history (back to zero initial conditions)
    pub fn reset(&mut self) {
        self.buffer.fill(0.0);
        self.cursor = 0;
    }

    /// Capacity in samples
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True only for a zero-capacity line
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
