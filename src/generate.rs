use std::f64::consts::TAU;

use anyhow::{Context, Result, bail};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use wavelib_dwt::Signal;
use wavelib_io::{WriteConfig, write_csv};

use crate::cli::GenerateArgs;

/// Run the `generate` subcommand: build a template signal and write it
/// to CSV.
pub fn run(args: GenerateArgs) -> Result<()> {
    if args.length == 0 {
        bail!("signal length must be at least 1");
    }
    if args.sampling_rate <= 0.0 {
        bail!("sampling rate must be positive");
    }

    let samples = match args.template.to_lowercase().as_str() {
        "sine" => oscillation(&args, f64::sin),
        "cosine" => oscillation(&args, f64::cos),
        "impulse" => {
            let mut samples = vec![0.0; args.length];
            samples[0] = args.amplitude;
            samples
        }
        "noise" => {
            let mut rng = match args.seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_os_rng(),
            };
            let amplitude = args.amplitude.abs();
            (0..args.length)
                .map(|_| rng.random_range(-amplitude..=amplitude))
                .collect()
        }
        other => bail!("unknown template '{other}': expected sine, cosine, impulse, or noise"),
    };

    let name = args
        .name
        .clone()
        .unwrap_or_else(|| args.template.to_lowercase());
    let signal = Signal::new(name, samples)
        .context("generated samples failed validation")?
        .with_sampling_rate(args.sampling_rate);

    info!(
        template = %args.template,
        length = args.length,
        path = %args.output.display(),
        "writing generated signal"
    );
    let write_config = WriteConfig::default().with_include_names(true);
    write_csv(&args.output, &[signal], &write_config)
        .with_context(|| format!("failed to write CSV: {}", args.output.display()))?;
    Ok(())
}

/// Samples `amplitude * f(2*pi * frequency * t)` at the configured rate.
fn oscillation(args: &GenerateArgs, f: fn(f64) -> f64) -> Vec<f64> {
    (0..args.length)
        .map(|i| {
            let t = i as f64 / args.sampling_rate;
            args.amplitude * f(TAU * args.frequency * t)
        })
        .collect()
}
