use std::collections::BTreeMap;

use anyhow::{Context, Result, bail};
use tracing::info;

use wavelib_dwt::{DecompositionLevel, Signal, Wavelet, reconstruct};
use wavelib_io::{ReadConfig, WriteConfig, read_csv, write_csv};

use crate::cli::ReconstructArgs;
use crate::config::WavelibConfig;

/// Coefficient rows for one signal, keyed by 1-based level.
type LevelRows = BTreeMap<usize, (Option<Vec<f64>>, Option<Vec<f64>>)>;

/// Run the `reconstruct` subcommand: regroup `<signal>.A<level>` /
/// `<signal>.D<level>` coefficient rows and inverse-transform each
/// signal back to samples.
pub fn run(args: ReconstructArgs) -> Result<()> {
    let config = WavelibConfig::load(args.config.as_deref())?;

    let wavelet_name = args
        .wavelet
        .or_else(|| config.transform.wavelet.clone())
        .unwrap_or_else(|| Wavelet::default().name().to_string());
    let wavelet = Wavelet::from_name(&wavelet_name)?;
    let filters = wavelet.filter_set();

    // Coefficient files always carry row names.
    let read_config = ReadConfig::default()
        .with_separator(config.separator())
        .with_name_in_first_column(true);
    let rows = read_csv(&args.input, &read_config)
        .with_context(|| format!("failed to read coefficients: {}", args.input.display()))?;

    let mut grouped: BTreeMap<String, LevelRows> = BTreeMap::new();
    for row in rows {
        let (signal_name, kind, level) = parse_row_name(row.name())?;
        let entry = grouped
            .entry(signal_name)
            .or_default()
            .entry(level)
            .or_default();
        match kind {
            RowKind::Approximation => entry.0 = Some(row.into_samples()),
            RowKind::Details => entry.1 = Some(row.into_samples()),
        }
    }

    let mut outputs = Vec::new();
    for (signal_name, level_rows) in grouped {
        let levels = collect_levels(&signal_name, level_rows)?;
        let samples = reconstruct(&levels, &filters, args.up_to_level)
            .with_context(|| format!("reconstruction failed for signal '{signal_name}'"))?;
        info!(
            signal = %signal_name,
            wavelet = wavelet.name(),
            n_levels = levels.len(),
            "signal reconstructed"
        );
        outputs.push(Signal::new(signal_name, samples)?);
    }

    let write_config = WriteConfig::default()
        .with_include_names(true)
        .with_separator(config.separator());
    write_csv(&args.output, &outputs, &write_config)
        .with_context(|| format!("failed to write signals: {}", args.output.display()))?;
    Ok(())
}

enum RowKind {
    Approximation,
    Details,
}

/// Splits a coefficient row name into signal name, row kind, and level.
fn parse_row_name(name: &str) -> Result<(String, RowKind, usize)> {
    let Some((signal_name, suffix)) = name.rsplit_once('.') else {
        bail!("row '{name}' is not a coefficient row (expected '<signal>.A<level>' or '<signal>.D<level>')");
    };
    let kind = match suffix.chars().next() {
        Some('A') => RowKind::Approximation,
        Some('D') => RowKind::Details,
        _ => bail!("row '{name}' has an unknown coefficient kind"),
    };
    let level: usize = suffix[1..]
        .parse()
        .with_context(|| format!("row '{name}' has an invalid level index"))?;
    if level == 0 {
        bail!("row '{name}' has level 0; levels are 1-based");
    }
    Ok((signal_name.to_string(), kind, level))
}

/// Assembles grouped rows into a contiguous level list, deepest last.
fn collect_levels(signal_name: &str, level_rows: LevelRows) -> Result<Vec<DecompositionLevel>> {
    let depth = *level_rows
        .keys()
        .next_back()
        .with_context(|| format!("signal '{signal_name}' has no coefficient rows"))?;
    let mut levels = Vec::with_capacity(depth);
    for depth_idx in 1..=depth {
        let Some((approximation, details)) = level_rows.get(&depth_idx).cloned() else {
            bail!("signal '{signal_name}' is missing level {depth_idx}");
        };
        let approximation = approximation
            .with_context(|| format!("signal '{signal_name}' is missing A{depth_idx}"))?;
        let details = details
            .with_context(|| format!("signal '{signal_name}' is missing D{depth_idx}"))?;
        levels.push(DecompositionLevel::new(approximation, details));
    }
    Ok(levels)
}
