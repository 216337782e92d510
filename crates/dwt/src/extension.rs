//! Boundary extension and de-extension of sample sequences.

use crate::error::DwtError;

/// Policy for padding a sequence before filtering.
///
/// # Example
///
/// ```ignore
/// use wavelib_dwt::{ExtensionMode, extend};
///
/// let padded = extend(&[1.0, 2.0, 3.0, 4.0], ExtensionMode::SymmetricHalfPoint, 2);
/// assert_eq!(padded, vec![3.0, 2.0, 1.0, 2.0, 3.0, 4.0, 3.0, 2.0]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExtensionMode {
    /// Mirrors the sequence about its first and last sample, excluding the
    /// boundary sample itself. When the padding exceeds the sequence length
    /// the reflection folds back and forth between the two boundaries.
    #[default]
    SymmetricHalfPoint,
    /// Pads both sides with zeros.
    ZeroPadding,
    /// Wraps the sequence periodically.
    PeriodicPadding,
}

impl ExtensionMode {
    /// Parses an extension mode from a case-insensitive name string.
    ///
    /// # Supported Names
    ///
    /// | Input | Mode |
    /// |-------|------|
    /// | `"symmetric"` | [`ExtensionMode::SymmetricHalfPoint`] |
    /// | `"zero"` | [`ExtensionMode::ZeroPadding`] |
    /// | `"periodic"` | [`ExtensionMode::PeriodicPadding`] |
    ///
    /// # Errors
    ///
    /// Returns [`DwtError::UnsupportedExtensionMode`] if the name is not
    /// recognized.
    pub fn from_name(name: &str) -> Result<Self, DwtError> {
        match name.to_lowercase().as_str() {
            "symmetric" => Ok(Self::SymmetricHalfPoint),
            "zero" => Ok(Self::ZeroPadding),
            "periodic" => Ok(Self::PeriodicPadding),
            _ => Err(DwtError::UnsupportedExtensionMode(name.to_string())),
        }
    }

    /// Returns the canonical name of the mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SymmetricHalfPoint => "symmetric",
            Self::ZeroPadding => "zero",
            Self::PeriodicPadding => "periodic",
        }
    }
}

/// Reflects an out-of-range index back into `[0, n)`, bouncing between the
/// two boundaries without repeating the boundary sample.
fn reflect(mut idx: isize, n: usize) -> usize {
    if n == 1 {
        return 0;
    }
    let n = n as isize;
    while idx < 0 || idx >= n {
        if idx < 0 {
            idx = -idx;
        } else {
            idx = 2 * (n - 1) - idx;
        }
    }
    idx as usize
}

/// Pads `samples` with `size` extra samples on each side according to `mode`.
///
/// The result has length `samples.len() + 2 * size`. An empty input or a
/// zero `size` is returned unchanged. Padding larger than the sequence
/// itself is well defined for every mode: symmetric extension folds,
/// periodic extension keeps wrapping, zero padding stays zero.
pub fn extend(samples: &[f64], mode: ExtensionMode, size: usize) -> Vec<f64> {
    let n = samples.len();
    if n == 0 || size == 0 {
        return samples.to_vec();
    }
    let mut out = Vec::with_capacity(n + 2 * size);
    match mode {
        ExtensionMode::SymmetricHalfPoint => {
            for i in (1..=size).rev() {
                out.push(samples[reflect(-(i as isize), n)]);
            }
            out.extend_from_slice(samples);
            for i in 1..=size {
                out.push(samples[reflect((n - 1 + i) as isize, n)]);
            }
        }
        ExtensionMode::ZeroPadding => {
            out.resize(size, 0.0);
            out.extend_from_slice(samples);
            out.resize(n + 2 * size, 0.0);
        }
        ExtensionMode::PeriodicPadding => {
            for i in (1..=size).rev() {
                out.push(samples[(n - i % n) % n]);
            }
            out.extend_from_slice(samples);
            for i in 1..=size {
                out.push(samples[(n - 1 + i) % n]);
            }
        }
    }
    out
}

/// Removes `(samples.len() - target_len) / 2` samples from each end,
/// returning exactly `target_len` samples. The inverse of [`extend`].
///
/// `target_len` must not exceed the input length; longer targets return
/// the input unchanged.
pub fn deextend(samples: &[f64], target_len: usize) -> Vec<f64> {
    if target_len >= samples.len() {
        return samples.to_vec();
    }
    let pad = (samples.len() - target_len) / 2;
    samples[pad..pad + target_len].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_valid() {
        assert_eq!(
            ExtensionMode::from_name("Symmetric").unwrap(),
            ExtensionMode::SymmetricHalfPoint
        );
        assert_eq!(
            ExtensionMode::from_name("zero").unwrap(),
            ExtensionMode::ZeroPadding
        );
        assert_eq!(
            ExtensionMode::from_name("PERIODIC").unwrap(),
            ExtensionMode::PeriodicPadding
        );
    }

    #[test]
    fn from_name_invalid() {
        let err = ExtensionMode::from_name("smooth").unwrap_err();
        assert!(matches!(err, DwtError::UnsupportedExtensionMode(ref s) if s == "smooth"));
    }

    #[test]
    fn default_is_symmetric() {
        assert_eq!(ExtensionMode::default(), ExtensionMode::SymmetricHalfPoint);
    }

    #[test]
    fn symmetric_excludes_boundary_sample() {
        let out = extend(&[1.0, 2.0, 3.0, 4.0], ExtensionMode::SymmetricHalfPoint, 2);
        assert_eq!(out, vec![3.0, 2.0, 1.0, 2.0, 3.0, 4.0, 3.0, 2.0]);
    }

    #[test]
    fn symmetric_folds_when_padding_exceeds_length() {
        let out = extend(&[1.0, 2.0], ExtensionMode::SymmetricHalfPoint, 3);
        assert_eq!(out, vec![2.0, 1.0, 2.0, 1.0, 2.0, 1.0, 2.0, 1.0]);
    }

    #[test]
    fn symmetric_fold_longer() {
        let out = extend(&[1.0, 2.0, 3.0, 4.0], ExtensionMode::SymmetricHalfPoint, 5);
        assert_eq!(
            out,
            vec![2.0, 3.0, 4.0, 3.0, 2.0, 1.0, 2.0, 3.0, 4.0, 3.0, 2.0, 1.0, 2.0, 3.0]
        );
    }

    #[test]
    fn symmetric_single_sample_repeats() {
        let out = extend(&[7.0], ExtensionMode::SymmetricHalfPoint, 2);
        assert_eq!(out, vec![7.0, 7.0, 7.0, 7.0, 7.0]);
    }

    #[test]
    fn zero_padding() {
        let out = extend(&[1.0, 2.0, 3.0], ExtensionMode::ZeroPadding, 2);
        assert_eq!(out, vec![0.0, 0.0, 1.0, 2.0, 3.0, 0.0, 0.0]);
    }

    #[test]
    fn periodic_padding() {
        let out = extend(&[1.0, 2.0, 3.0], ExtensionMode::PeriodicPadding, 2);
        assert_eq!(out, vec![2.0, 3.0, 1.0, 2.0, 3.0, 1.0, 2.0]);
    }

    #[test]
    fn extend_empty_input() {
        assert!(extend(&[], ExtensionMode::SymmetricHalfPoint, 3).is_empty());
    }

    #[test]
    fn extend_zero_size_is_identity() {
        let x = [1.0, 2.0, 3.0];
        assert_eq!(extend(&x, ExtensionMode::PeriodicPadding, 0), x.to_vec());
    }

    #[test]
    fn extend_length_law() {
        for size in 0..6 {
            let out = extend(&[1.0, 2.0, 3.0, 4.0], ExtensionMode::SymmetricHalfPoint, size);
            assert_eq!(out.len(), 4 + 2 * size);
        }
    }

    #[test]
    fn deextend_trims_symmetrically() {
        let out = deextend(&[9.0, 1.0, 2.0, 3.0, 4.0, 9.0], 4);
        assert_eq!(out, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn deextend_target_longer_is_identity() {
        let x = [1.0, 2.0];
        assert_eq!(deextend(&x, 5), x.to_vec());
    }

    #[test]
    fn extension_round_trip_all_modes() {
        let x = [4.0, -1.0, 0.5, 2.0, 3.0];
        for mode in [
            ExtensionMode::SymmetricHalfPoint,
            ExtensionMode::ZeroPadding,
            ExtensionMode::PeriodicPadding,
        ] {
            for size in 0..x.len() {
                let restored = deextend(&extend(&x, mode, size), x.len());
                assert_eq!(restored, x.to_vec(), "mode {:?}, size {}", mode, size);
            }
        }
    }

    #[test]
    fn mode_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ExtensionMode>();
    }
}
