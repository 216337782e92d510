//! Rate-halving and rate-doubling primitives.

/// Halves the sampling rate by keeping every sample at an odd 0-based
/// index (`1, 3, 5, …`), discarding index 0.
///
/// The output length is `floor(len / 2)`. The odd-index phase is a design
/// commitment: the reconstruction path's crop margin assumes it.
pub fn downsample(samples: &[f64]) -> Vec<f64> {
    samples
        .iter()
        .skip(1)
        .step_by(2)
        .copied()
        .collect()
}

/// Doubles the sampling rate by inserting one zero between every pair of
/// consecutive samples.
///
/// The output starts and ends on a real sample, so its length is
/// `2 * len - 1` for non-empty input. Empty input yields empty output.
pub fn upsample(samples: &[f64]) -> Vec<f64> {
    if samples.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0.0; 2 * samples.len() - 1];
    for (i, &v) in samples.iter().enumerate() {
        out[2 * i] = v;
    }
    out
}
