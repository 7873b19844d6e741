//! Error type shared by the signal maths, configuration loading and export.

use thiserror::Error;

/// Everything that can go wrong while computing or exporting lab curves.
#[derive(Debug, Error)]
pub enum LabError {
    /// Butterworth cutoff outside the open interval (0, Nyquist).
    #[error("cutoff {cutoff_hz:.3} Hz must lie strictly between 0 and the Nyquist frequency {nyquist_hz:.3} Hz")]
    InvalidCutoff { cutoff_hz: f64, nyquist_hz: f64 },

    #[error("filter order must be at least 1, got {0}")]
    InvalidOrder(usize),

    /// Zero-phase filtering needs more samples than its edge padding.
    #[error("signal has {len} samples, zero-phase filtering needs more than {padlen}")]
    SignalTooShort { len: usize, padlen: usize },

    #[error("invalid noise parameters: mean {mean}, variance {variance}")]
    InvalidNoise { mean: f64, variance: f64 },

    #[error("invalid range for '{name}': min {min}, initial {initial}, max {max}")]
    InvalidRange {
        name: String,
        min: f64,
        initial: f64,
        max: f64,
    },

    #[error("time axis needs at least two samples over a positive interval")]
    InvalidTimeAxis,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T, E = LabError> = std::result::Result<T, E>;
