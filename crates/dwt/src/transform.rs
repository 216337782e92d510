//! Multilevel 1-D discrete wavelet transform and its inverse.

use tracing::{debug, warn};

use crate::convolution::convolve_valid;
use crate::error::DwtError;
use crate::extension::{ExtensionMode, deextend, extend};
use crate::filters::FilterSet;
use crate::resample::{downsample, upsample};

/// One level of a pyramid decomposition: the low-pass approximation and
/// the high-pass details produced at that depth.
///
/// Levels are created by [`decompose`] and consumed read-only, deepest
/// first, by [`reconstruct`]. Only the approximation is decomposed
/// further; details are terminal at their level.
#[derive(Clone, Debug, PartialEq)]
pub struct DecompositionLevel {
    approximation: Vec<f64>,
    details: Vec<f64>,
}

impl DecompositionLevel {
    /// Creates a level from its two coefficient arrays.
    pub fn new(approximation: Vec<f64>, details: Vec<f64>) -> Self {
        Self {
            approximation,
            details,
        }
    }

    /// Low-pass (approximation) coefficients.
    pub fn approximation(&self) -> &[f64] {
        &self.approximation
    }

    /// High-pass (details) coefficients.
    pub fn details(&self) -> &[f64] {
        &self.details
    }
}

/// Returns the advisory maximum decomposition depth for a signal length,
/// `floor(log2(len))`.
///
/// [`decompose`] tolerates deeper requests — coefficient arrays simply
/// stop shrinking once boundary extension dominates — but levels past
/// this bound carry no additional information.
pub fn max_decomposition_level(len: usize) -> usize {
    if len < 2 {
        return 0;
    }
    (usize::BITS - 1 - len.leading_zeros()) as usize
}

/// Multilevel 1-D discrete wavelet transform (Mallat pyramid scheme).
///
/// Per level the working sequence is extended on both sides by
/// `filter length - 1` samples, convolved against the decomposition
/// low-pass and high-pass filters, cropped to the valid window, and
/// downsampled. The approximation becomes the next level's input.
///
/// Always returns exactly `levels` entries: when the working sequence
/// becomes shorter than the filter at deep levels, boundary extension
/// folds the reflection and the pyramid keeps producing (degenerate but
/// deterministic) coefficients.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`DwtError::EmptySignal`] | `samples` is empty |
/// | [`DwtError::InvalidLevelCount`] | `levels == 0` |
pub fn decompose(
    samples: &[f64],
    filters: &FilterSet,
    levels: usize,
    mode: ExtensionMode,
) -> Result<Vec<DecompositionLevel>, DwtError> {
    if samples.is_empty() {
        return Err(DwtError::EmptySignal);
    }
    if levels == 0 {
        return Err(DwtError::InvalidLevelCount);
    }

    let extension_size = filters.length() - 1;
    let mut out = Vec::with_capacity(levels);
    let mut approximation = samples.to_vec();
    let mut details = approximation.clone();

    for level in 1..=levels {
        if approximation.len() < filters.length() {
            warn!(
                level,
                working_len = approximation.len(),
                filter_len = filters.length(),
                "working sequence shorter than filter, extension folds"
            );
        }

        let approximation_ext = extend(&approximation, mode, extension_size);
        let details_ext = extend(&details, mode, extension_size);

        approximation = downsample(&convolve_valid(&approximation_ext, filters.dec_low(), 0));
        details = downsample(&convolve_valid(&details_ext, filters.dec_high(), 0));

        debug!(
            level,
            approximation_len = approximation.len(),
            details_len = details.len(),
            "decomposition level complete"
        );

        out.push(DecompositionLevel::new(
            approximation.clone(),
            details.clone(),
        ));
        details = approximation.clone();
    }
    Ok(out)
}

/// Multilevel inverse discrete wavelet transform.
///
/// Starts from the deepest requested level and works upward: both
/// branches are upsampled, convolved against the reconstruction filters
/// with the valid window grown by one sample on each side
/// (`margin = -1`), and summed. The extra margin compensates the phase
/// offset between the even-length reconstruction filters and the
/// odd-index downsample. Between levels the sum is de-extended down to
/// the next-shallower details length to shed accumulated boundary
/// samples.
///
/// `up_to_level` of 0, or any value beyond the stored depth, means full
/// reconstruction. For even-length inputs the fully reconstructed
/// sequence has the original length; odd-length inputs come back one
/// sample longer (the downsample discards the length parity).
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`DwtError::EmptyDecomposition`] | `levels` is empty |
/// | [`DwtError::LengthMismatch`] | stored approximation/details lengths disagree after filtering |
pub fn reconstruct(
    levels: &[DecompositionLevel],
    filters: &FilterSet,
    up_to_level: usize,
) -> Result<Vec<f64>, DwtError> {
    if levels.is_empty() {
        return Err(DwtError::EmptyDecomposition);
    }
    let depth = if up_to_level == 0 || up_to_level > levels.len() {
        levels.len()
    } else {
        up_to_level
    };

    let mut approximation = levels[depth - 1].approximation().to_vec();
    let mut details = levels[depth - 1].details().to_vec();

    for i in (0..depth).rev() {
        let low = convolve_valid(&upsample(&approximation), filters.rec_low(), -1);
        let high = convolve_valid(&upsample(&details), filters.rec_high(), -1);
        if low.len() != high.len() {
            return Err(DwtError::LengthMismatch {
                level: i + 1,
                approximation: low.len(),
                details: high.len(),
            });
        }
        approximation = low.iter().zip(&high).map(|(a, d)| a + d).collect();

        debug!(
            level = i + 1,
            reconstructed_len = approximation.len(),
            "reconstruction level complete"
        );

        if i == 0 {
            continue;
        }
        let next_details = levels[i - 1].details();
        if approximation.len() > next_details.len() {
            approximation = deextend(&approximation, next_details.len());
        }
        details = next_details.to_vec();
    }
    Ok(approximation)
}
