//! Error types for wavelib-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the wavelib-io crate.
///
/// Covers missing files, CSV format failures, and signal validation
/// problems encountered while bridging files into `Signal` values.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the CSV library.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when a file yields no usable signals.
    #[error("no signals found in {}", path.display())]
    NoData {
        /// Path to the file that was read.
        path: PathBuf,
    },

    /// Wraps a signal validation error from the wavelib-dwt crate.
    #[error("signal error: {reason}")]
    Signal {
        /// Description of the underlying validation failure.
        reason: String,
    },
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}

impl From<wavelib_dwt::DwtError> for IoError {
    fn from(e: wavelib_dwt::DwtError) -> Self {
        IoError::Signal {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.csv");
    }

    #[test]
    fn display_csv() {
        let err = IoError::Csv {
            reason: "unequal lengths".to_string(),
        };
        assert_eq!(err.to_string(), "csv error: unequal lengths");
    }

    #[test]
    fn display_no_data() {
        let err = IoError::NoData {
            path: PathBuf::from("/data/empty.csv"),
        };
        assert_eq!(err.to_string(), "no signals found in /data/empty.csv");
    }

    #[test]
    fn from_dwt_error() {
        let err: IoError = wavelib_dwt::DwtError::EmptySignal.into();
        assert!(matches!(err, IoError::Signal { .. }));
        assert_eq!(err.to_string(), "signal error: signal is empty");
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
