//! CSV signal reader configuration and orchestration.

use std::path::Path;

use tracing::{debug, info};
use wavelib_dwt::Signal;

use crate::error::IoError;

/// Configuration for reading signals from a CSV file.
///
/// Each row becomes one [`Signal`]. Use the builder methods (`with_*`)
/// to customise the column separator, header handling, and sampling
/// metadata. The [`Default`] implementation reads comma-separated rows
/// of bare samples at unit sampling interval.
#[derive(Debug, Clone)]
pub struct ReadConfig {
    /// Column separator byte.
    separator: u8,
    /// Whether to skip the first row (header).
    skip_first_row: bool,
    /// Whether the first column holds the signal name.
    name_in_first_column: bool,
    /// Time between consecutive samples; the reciprocal becomes each
    /// signal's sampling rate.
    sampling_interval: f64,
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            separator: b',',
            skip_first_row: false,
            name_in_first_column: false,
            sampling_interval: 1.0,
        }
    }
}

impl ReadConfig {
    /// Sets the column separator.
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    /// Sets whether the first row is skipped as a header.
    pub fn with_skip_first_row(mut self, skip: bool) -> Self {
        self.skip_first_row = skip;
        self
    }

    /// Sets whether the first column holds the signal name.
    pub fn with_name_in_first_column(mut self, named: bool) -> Self {
        self.name_in_first_column = named;
        self
    }

    /// Sets the sampling interval (time between samples).
    pub fn with_sampling_interval(mut self, interval: f64) -> Self {
        self.sampling_interval = interval;
        self
    }

    /// Returns the column separator.
    pub fn separator(&self) -> u8 {
        self.separator
    }

    fn sampling_rate(&self) -> f64 {
        if self.sampling_interval.abs() > f64::EPSILON {
            1.0 / self.sampling_interval
        } else {
            1.0
        }
    }
}

/// Reads signals from a CSV file, one signal per row.
///
/// Cells that do not parse as numbers are skipped, as are rows that
/// yield no samples; rows without an explicit name are called
/// `"Line {n}"` after their 1-based row number.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`IoError::FileNotFound`] | `path` does not exist |
/// | [`IoError::Csv`] | the CSV reader fails |
/// | [`IoError::NoData`] | no row yields a usable signal |
/// | [`IoError::Signal`] | a row's samples fail validation |
pub fn read_csv(path: &Path, config: &ReadConfig) -> Result<Vec<Signal>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    info!(path = %path.display(), "reading signals");

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.separator)
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut signals = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let line_number = row_idx + 1;
        if row_idx == 0 && config.skip_first_row {
            continue;
        }
        let record = record?;

        let mut name = String::new();
        let mut samples = Vec::new();
        for (col_idx, cell) in record.iter().enumerate() {
            let cell = cell.trim();
            if col_idx == 0 && config.name_in_first_column {
                name = cell.to_string();
                continue;
            }
            if let Ok(value) = cell.parse::<f64>() {
                samples.push(value);
            }
        }
        if samples.is_empty() {
            debug!(line_number, "skipping row with no numeric samples");
            continue;
        }
        if name.is_empty() {
            name = format!("Line {line_number}");
        }
        let signal = Signal::new(name, samples)?.with_sampling_rate(config.sampling_rate());
        signals.push(signal);
    }

    if signals.is_empty() {
        return Err(IoError::NoData {
            path: path.to_path_buf(),
        });
    }
    info!(n_signals = signals.len(), "signals loaded");
    Ok(signals)
}
