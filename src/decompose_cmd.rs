use anyhow::{Context, Result};
use tracing::info;

use wavelib_dwt::{ExtensionMode, Signal, Wavelet, decompose, max_decomposition_level};
use wavelib_io::{ReadConfig, WriteConfig, read_csv, write_csv};

use crate::cli::DecomposeArgs;
use crate::config::WavelibConfig;

/// Run the `decompose` subcommand: forward-transform every signal in the
/// input CSV and write one coefficient row per approximation/details
/// array, named `<signal>.A<level>` and `<signal>.D<level>`.
pub fn run(args: DecomposeArgs) -> Result<()> {
    let config = WavelibConfig::load(args.config.as_deref())?;

    let wavelet_name = args
        .wavelet
        .or_else(|| config.transform.wavelet.clone())
        .unwrap_or_else(|| Wavelet::default().name().to_string());
    let wavelet = Wavelet::from_name(&wavelet_name)?;
    let filters = wavelet.filter_set();

    let mode = match args.extension.or_else(|| config.transform.extension.clone()) {
        Some(name) => ExtensionMode::from_name(&name)?,
        None => ExtensionMode::default(),
    };

    let read_config = build_read_config(&config);
    let signals = read_csv(&args.input, &read_config)
        .with_context(|| format!("failed to read signals: {}", args.input.display()))?;

    let mut rows = Vec::new();
    for signal in &signals {
        let levels = args
            .levels
            .or(config.transform.levels)
            .unwrap_or_else(|| max_decomposition_level(signal.len()).max(1));

        let decomposition = decompose(signal.samples(), &filters, levels, mode)
            .with_context(|| format!("decomposition failed for signal '{}'", signal.name()))?;
        info!(
            signal = %signal.name(),
            wavelet = wavelet.name(),
            levels,
            "signal decomposed"
        );

        for (idx, level) in decomposition.iter().enumerate() {
            let depth = idx + 1;
            rows.push(Signal::new(
                format!("{}.A{depth}", signal.name()),
                level.approximation().to_vec(),
            )?);
            rows.push(Signal::new(
                format!("{}.D{depth}", signal.name()),
                level.details().to_vec(),
            )?);
        }
    }

    let write_config = WriteConfig::default()
        .with_include_names(true)
        .with_separator(config.separator());
    write_csv(&args.output, &rows, &write_config)
        .with_context(|| format!("failed to write coefficients: {}", args.output.display()))?;
    Ok(())
}

/// Bridge the TOML `[io]` section to a `ReadConfig`.
fn build_read_config(config: &WavelibConfig) -> ReadConfig {
    let mut read_config = ReadConfig::default().with_separator(config.separator());
    if let Some(named) = config.io.name_in_first_column {
        read_config = read_config.with_name_in_first_column(named);
    }
    if let Some(skip) = config.io.skip_first_row {
        read_config = read_config.with_skip_first_row(skip);
    }
    if let Some(interval) = config.io.sampling_interval {
        read_config = read_config.with_sampling_interval(interval);
    }
    read_config
}
