use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level wavelib configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WavelibConfig {
    /// Transform settings.
    #[serde(default)]
    pub transform: TransformToml,

    /// CSV I/O settings.
    #[serde(default)]
    pub io: IoToml,
}

/// `[transform]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransformToml {
    /// Wavelet family name.
    pub wavelet: Option<String>,
    /// Decomposition depth.
    pub levels: Option<usize>,
    /// Boundary extension mode.
    pub extension: Option<String>,
}

/// `[io]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    /// Column separator character.
    pub separator: Option<char>,
    /// Whether input rows carry the signal name in the first column.
    pub name_in_first_column: Option<bool>,
    /// Whether to skip the first input row.
    pub skip_first_row: Option<bool>,
    /// Time between consecutive samples.
    pub sampling_interval: Option<f64>,
}

impl WavelibConfig {
    /// Loads configuration from a TOML file, or returns defaults when no
    /// path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Returns the configured separator as a byte, defaulting to a comma.
    pub fn separator(&self) -> u8 {
        self.io.separator.map_or(b',', |c| c as u8)
    }
}
