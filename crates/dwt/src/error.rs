//! Error types for the wavelib-dwt crate.

/// Error type for all fallible operations in the wavelib-dwt crate.
///
/// Covers validation failures caught before a transform starts and
/// structural inconsistencies detected during reconstruction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DwtError {
    /// Returned when the input signal contains no samples.
    #[error("signal is empty")]
    EmptySignal,

    /// Returned when the input data contains non-finite values (NaN or infinity).
    #[error("input data contains non-finite values")]
    NonFiniteData,

    /// Returned when a decomposition is requested with zero levels.
    #[error("level count must be at least 1")]
    InvalidLevelCount,

    /// Returned when a filter sequence of a filter set is empty.
    #[error("filter '{name}' is empty")]
    EmptyFilter {
        /// Which of the four filters was empty.
        name: &'static str,
    },

    /// Returned when an unsupported wavelet name is provided.
    #[error("unsupported wavelet: {0}")]
    UnsupportedWavelet(String),

    /// Returned when an unsupported extension mode name is provided.
    #[error("unsupported extension mode: {0}")]
    UnsupportedExtensionMode(String),

    /// Returned when reconstruction is attempted from an empty level list.
    #[error("decomposition contains no levels")]
    EmptyDecomposition,

    /// Returned when a stored decomposition level has approximation and
    /// details arrays whose filtered lengths disagree at the summation step.
    #[error(
        "length mismatch at level {level}: approximation branch {approximation}, details branch {details}"
    )]
    LengthMismatch {
        /// 1-based level index at which the mismatch was detected.
        level: usize,
        /// Length of the filtered approximation branch.
        approximation: usize,
        /// Length of the filtered details branch.
        details: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_empty_signal() {
        assert_eq!(DwtError::EmptySignal.to_string(), "signal is empty");
    }

    #[test]
    fn display_non_finite() {
        assert_eq!(
            DwtError::NonFiniteData.to_string(),
            "input data contains non-finite values"
        );
    }

    #[test]
    fn display_invalid_level_count() {
        assert_eq!(
            DwtError::InvalidLevelCount.to_string(),
            "level count must be at least 1"
        );
    }

    #[test]
    fn display_empty_filter() {
        let err = DwtError::EmptyFilter { name: "dec_low" };
        assert_eq!(err.to_string(), "filter 'dec_low' is empty");
    }

    #[test]
    fn display_unsupported_wavelet() {
        let err = DwtError::UnsupportedWavelet("meyer".into());
        assert_eq!(err.to_string(), "unsupported wavelet: meyer");
    }

    #[test]
    fn display_unsupported_extension_mode() {
        let err = DwtError::UnsupportedExtensionMode("smooth".into());
        assert_eq!(err.to_string(), "unsupported extension mode: smooth");
    }

    #[test]
    fn display_empty_decomposition() {
        assert_eq!(
            DwtError::EmptyDecomposition.to_string(),
            "decomposition contains no levels"
        );
    }

    #[test]
    fn display_length_mismatch() {
        let err = DwtError::LengthMismatch {
            level: 2,
            approximation: 6,
            details: 4,
        };
        assert_eq!(
            err.to_string(),
            "length mismatch at level 2: approximation branch 6, details branch 4"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<DwtError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<DwtError>();
    }
}
