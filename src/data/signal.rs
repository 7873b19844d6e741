//! Time axis and harmonic signal generation.

use std::f64::consts::PI;

/// Amplitude, frequency and phase of the harmonic plus the noise display toggle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalParams {
    pub amplitude: f64,
    /// Frequency in Hz.
    pub frequency: f64,
    /// Phase in radians.
    pub phase: f64,
    pub show_noise: bool,
}

impl Default for SignalParams {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            frequency: 1.0,
            phase: 0.0,
            show_noise: true,
        }
    }
}

/// `n` evenly spaced samples over `[start, end]`, both ends included.
pub fn time_axis(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Sampling frequency of an evenly spaced axis, `1 / (t[1] - t[0])`.
pub fn sampling_frequency(t: &[f64]) -> Option<f64> {
    let dt = t.get(1)? - t.first()?;
    (dt > 0.0).then(|| 1.0 / dt)
}

/// `amplitude * sin(2π · frequency · t + phase)` for every sample of `t`.
pub fn harmonic(t: &[f64], amplitude: f64, frequency: f64, phase: f64) -> Vec<f64> {
    t.iter()
        .map(|&ti| amplitude * (2.0 * PI * frequency * ti + phase).sin())
        .collect()
}

/// The harmonic described by `params`, with `noise` added when `show_noise` is set.
///
/// `noise` shorter than `t` only perturbs the leading samples.
pub fn harmonic_with_noise(t: &[f64], params: &SignalParams, noise: &[f64]) -> Vec<f64> {
    let mut y = harmonic(t, params.amplitude, params.frequency, params.phase);
    if params.show_noise {
        for (yi, ni) in y.iter_mut().zip(noise) {
            *yi += ni;
        }
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_includes_both_ends() {
        let t = time_axis(0.0, 10.0, 1000);
        assert_eq!(t.len(), 1000);
        assert_eq!(t[0], 0.0);
        assert_eq!(t[999], 10.0);
    }

    #[test]
    fn degenerate_axes() {
        assert!(time_axis(0.0, 1.0, 0).is_empty());
        assert_eq!(time_axis(2.0, 5.0, 1), vec![2.0]);
        assert_eq!(sampling_frequency(&[1.0]), None);
        assert_eq!(sampling_frequency(&[1.0, 1.0]), None);
    }

    #[test]
    fn sampling_frequency_of_lab_axis() {
        let t = time_axis(0.0, 10.0, 1000);
        let fs = sampling_frequency(&t).unwrap();
        assert!((fs - 99.9).abs() < 1e-9, "fs = {fs}");
    }

    #[test]
    fn noise_hidden_gives_bare_harmonic() {
        let t = time_axis(0.0, 1.0, 16);
        let params = SignalParams {
            show_noise: false,
            ..Default::default()
        };
        let noise = vec![0.5; 16];
        assert_eq!(
            harmonic_with_noise(&t, &params, &noise),
            harmonic(&t, 1.0, 1.0, 0.0)
        );
    }

    #[test]
    fn noise_shown_is_added() {
        let t = time_axis(0.0, 1.0, 16);
        let params = SignalParams::default();
        let noise = vec![0.25; 16];
        let clean = harmonic(&t, 1.0, 1.0, 0.0);
        let noisy = harmonic_with_noise(&t, &params, &noise);
        for (c, n) in clean.iter().zip(&noisy) {
            assert!((n - c - 0.25).abs() < 1e-12);
        }
    }
}
