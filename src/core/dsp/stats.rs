//! Level statistics

/// dBFS reported for a silent signal, the most negative finite `f64`
pub const SILENCE_DBFS: f64 = f64::MIN;

/// Compute RMS (Root Mean Square)
pub fn rms(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let sum_sq: f64 = samples.iter().map(|s| s * s).sum();
    (sum_sq / samples.len() as f64).sqrt()
}

/// Convert an amplitude to dB relative to `full_scale`
///
/// Zero amplitude maps to [`SILENCE_DBFS`], which compares below any
/// threshold and stays a plain number in JSON output.
pub fn amplitude_to_dbfs(amplitude: f64, full_scale: f64) -> f64 {
    if amplitude > 0.0 {
        20.0 * (amplitude / full_scale).log10()
    } else {
        SILENCE_DBFS
    }
}
