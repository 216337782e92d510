use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Wavelib discrete wavelet transform toolkit.
#[derive(Parser)]
#[command(
    name = "wavelib",
    version,
    about = "Multilevel discrete wavelet transform toolkit"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a template signal and write it to CSV.
    Generate(GenerateArgs),
    /// Decompose signals from CSV into wavelet coefficients.
    Decompose(DecomposeArgs),
    /// Reconstruct signals from a CSV of wavelet coefficients.
    Reconstruct(ReconstructArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Signal template: sine, cosine, impulse, or noise.
    #[arg(short, long, default_value = "sine")]
    pub template: String,

    /// Number of samples to generate.
    #[arg(short, long, default_value_t = 64)]
    pub length: usize,

    /// Oscillation frequency in Hz (sine and cosine templates).
    #[arg(short, long, default_value_t = 1.0)]
    pub frequency: f64,

    /// Peak amplitude.
    #[arg(short, long, default_value_t = 1.0)]
    pub amplitude: f64,

    /// Sampling rate in samples per second.
    #[arg(short = 'r', long, default_value_t = 64.0)]
    pub sampling_rate: f64,

    /// RNG seed for the noise template.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Name of the generated signal.
    #[arg(short, long)]
    pub name: Option<String>,

    /// Path for the output CSV file.
    #[arg(short, long)]
    pub output: PathBuf,
}

/// Arguments for the `decompose` subcommand.
#[derive(clap::Args)]
pub struct DecomposeArgs {
    /// Path to the input signal CSV file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the output coefficient CSV file.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Wavelet family name (haar, db2, db3, db4, sym4, coif1).
    #[arg(short, long)]
    pub wavelet: Option<String>,

    /// Decomposition depth; defaults to the maximum the signal supports.
    #[arg(short, long)]
    pub levels: Option<usize>,

    /// Boundary extension mode (symmetric, zero, periodic).
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `reconstruct` subcommand.
#[derive(clap::Args)]
pub struct ReconstructArgs {
    /// Path to the input coefficient CSV file (decompose output).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the reconstructed signal CSV file.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Wavelet family name; must match the one used to decompose.
    #[arg(short, long)]
    pub wavelet: Option<String>,

    /// Reconstruct from this level only (0 = use all levels).
    #[arg(short = 'u', long, default_value_t = 0)]
    pub up_to_level: usize,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
