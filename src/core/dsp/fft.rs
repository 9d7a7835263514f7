//! Real-input FFT over a whole signal

use realfft::{FftError, RealFftPlanner};

/// Magnitude spectrum of the non-negative frequency half
///
/// Transforms the full sequence (length N) without windowing and returns the
/// first N/2 bin magnitudes. Bin `k` sits at `k * sample_rate / N` Hz; see
/// [`bin_frequency`]. Fewer than two samples yield an empty spectrum.
pub fn magnitude_spectrum(samples: &[f64]) -> Result<Vec<f64>, FftError> {
    let n = samples.len();
    if n < 2 {
        return Ok(Vec::new());
    }

    let mut planner = RealFftPlanner::<f64>::new();
    let r2c = planner.plan_fft_forward(n);

    let mut input = r2c.make_input_vec();
    input.copy_from_slice(samples);
    let mut spectrum = r2c.make_output_vec();

    r2c.process(&mut input, &mut spectrum)?;

    Ok(spectrum[..n / 2].iter().map(|c| c.norm()).collect())
}

/// Center frequency of bin `k` for an N-point transform
pub fn bin_frequency(k: usize, sample_rate: u32, n: usize) -> f64 {
    k as f64 * sample_rate as f64 / n as f64
}
