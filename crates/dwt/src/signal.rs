//! Validated named signal wrapper.

use crate::error::DwtError;

/// A named, validated sequence of finite `f64` samples with sampling
/// metadata.
///
/// The transform engine consumes only the sample slice; the name and
/// sampling rate travel with the signal through I/O layers.
///
/// # Example
///
/// ```ignore
/// use wavelib_dwt::Signal;
///
/// let signal = Signal::new("sensor_a", vec![5.0, 6.0, 7.0, 8.0])?;
/// assert_eq!(signal.len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Signal {
    name: String,
    samples: Vec<f64>,
    sampling_rate: f64,
}

impl Signal {
    /// Creates a new `Signal` with a sampling rate of 1.0 after validating
    /// the samples.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`DwtError::EmptySignal`] | `samples` is empty |
    /// | [`DwtError::NonFiniteData`] | any sample is NaN or infinite |
    pub fn new(name: impl Into<String>, samples: Vec<f64>) -> Result<Self, DwtError> {
        if samples.is_empty() {
            return Err(DwtError::EmptySignal);
        }
        if !samples.iter().all(|v| v.is_finite()) {
            return Err(DwtError::NonFiniteData);
        }
        Ok(Self {
            name: name.into(),
            samples,
            sampling_rate: 1.0,
        })
    }

    /// Sets the sampling rate in samples per unit time.
    pub fn with_sampling_rate(mut self, rate: f64) -> Self {
        self.sampling_rate = rate;
        self
    }

    /// Returns the signal name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the samples as a slice.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Returns the sampling rate.
    pub fn sampling_rate(&self) -> f64 {
        self.sampling_rate
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if the signal has no samples.
    ///
    /// Note: a validated `Signal` is never empty.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Consumes the signal, returning its sample buffer.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}

impl AsRef<[f64]> for Signal {
    fn as_ref(&self) -> &[f64] {
        &self.samples
    }
}
