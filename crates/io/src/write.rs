//! CSV signal writer configuration and orchestration.

use std::path::Path;

use tracing::info;
use wavelib_dwt::Signal;

use crate::error::IoError;

/// Configuration for writing signals to a CSV file.
///
/// Each signal becomes one row of samples, optionally preceded by the
/// signal name in the first column.
#[derive(Debug, Clone)]
pub struct WriteConfig {
    /// Column separator byte.
    separator: u8,
    /// Whether to write the signal name as the first column.
    include_names: bool,
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self {
            separator: b',',
            include_names: false,
        }
    }
}

impl WriteConfig {
    /// Sets the column separator.
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    /// Sets whether signal names are written as the first column.
    pub fn with_include_names(mut self, include: bool) -> Self {
        self.include_names = include;
        self
    }

    /// Returns the column separator.
    pub fn separator(&self) -> u8 {
        self.separator
    }
}

/// Writes signals to a CSV file, one row per signal.
///
/// # Errors
///
/// Returns [`IoError::Csv`] if the CSV writer fails (including
/// filesystem errors surfaced through it).
pub fn write_csv(path: &Path, signals: &[Signal], config: &WriteConfig) -> Result<(), IoError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.separator)
        .flexible(true)
        .from_path(path)?;

    for signal in signals {
        let mut record: Vec<String> = Vec::with_capacity(
            signal.len() + usize::from(config.include_names),
        );
        if config.include_names {
            record.push(signal.name().to_string());
        }
        record.extend(signal.samples().iter().map(|v| v.to_string()));
        writer.write_record(&record)?;
    }
    writer.flush().map_err(|e| IoError::Csv {
        reason: e.to_string(),
    })?;

    info!(path = %path.display(), n_signals = signals.len(), "signals written");
    Ok(())
}
