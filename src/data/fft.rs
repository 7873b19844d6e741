// Spectrum of the lab curves.
// Provides windowing and one-sided magnitude spectrum utilities for plotting
use rustfft::{num_complex::Complex, FftPlanner};

/// Supported FFT window functions for spectral analysis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum FFTWindow {
    /// Rectangular (no windowing)
    Rect,
    /// Hann window
    #[default]
    Hann,
    /// Hamming window
    Hamming,
    /// Blackman window
    Blackman,
}

impl FFTWindow {
    /// All available window types (for UI selection)
    pub const ALL: &'static [FFTWindow] = &[
        FFTWindow::Rect,
        FFTWindow::Hann,
        FFTWindow::Hamming,
        FFTWindow::Blackman,
    ];

    /// Human-readable label for each window type
    pub fn label(&self) -> &'static str {
        match self {
            FFTWindow::Rect => "Rect",
            FFTWindow::Hann => "Hann",
            FFTWindow::Hamming => "Hamming",
            FFTWindow::Blackman => "Blackman",
        }
    }

    /// Window weight for sample `n` of `len`.
    pub fn weight(&self, n: usize, len: usize) -> f64 {
        let x = 2.0 * std::f64::consts::PI * n as f64 / len as f64;
        match self {
            FFTWindow::Rect => 1.0,
            FFTWindow::Hann => 0.5 - 0.5 * x.cos(),
            FFTWindow::Hamming => 0.54 - 0.46 * x.cos(),
            FFTWindow::Blackman => 0.42 - 0.5 * x.cos() + 0.08 * (2.0 * x).cos(),
        }
    }
}

/// One-sided magnitude spectrum of `samples` taken at `fs` Hz.
///
/// Returns `[frequency, magnitude]` pairs for bins below Nyquist, normalized
/// by `2/N`, or `None` when there are fewer than two samples.
pub fn compute_spectrum(samples: &[f64], fs: f64, window: FFTWindow) -> Option<Vec<[f64; 2]>> {
    let len = samples.len();
    if len < 2 || !(fs > 0.0) {
        return None;
    }
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(len);
    let mut data: Vec<Complex<f64>> = samples
        .iter()
        .enumerate()
        .map(|(i, &v)| Complex {
            re: v * window.weight(i, len),
            im: 0.0,
        })
        .collect();
    fft.process(&mut data);

    let scale = 2.0 / len as f64;
    Some(
        data.iter()
            .take(len / 2)
            .enumerate()
            .map(|(k, c)| [k as f64 * fs / len as f64, c.norm() * scale])
            .collect(),
    )
}

/// Magnitude in decibels, floored to avoid `-inf`.
pub fn to_db(mag: f64) -> f64 {
    20.0 * mag.max(1e-12).log10()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_peaks_at_its_bin() {
        let fs = 100.0;
        let n = 400;
        let samples: Vec<f64> = (0..n)
            .map(|i| (2.0 * std::f64::consts::PI * 5.0 * i as f64 / fs).sin())
            .collect();
        let spec = compute_spectrum(&samples, fs, FFTWindow::Rect).unwrap();
        assert_eq!(spec.len(), n / 2);
        let peak = spec
            .iter()
            .max_by(|a, b| a[1].total_cmp(&b[1]))
            .unwrap();
        assert!((peak[0] - 5.0).abs() < 1e-9);
        assert!((peak[1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn too_short_is_none() {
        assert!(compute_spectrum(&[1.0], 10.0, FFTWindow::Hann).is_none());
    }
}
