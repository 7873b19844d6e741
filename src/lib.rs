//! Harmonic lab crate root: re-exports and module wiring.
//!
//! An interactive signal-processing exercise built on egui/eframe: a harmonic
//! signal with additive Gaussian noise, filtered either by a zero-phase
//! Butterworth low-pass or a moving average, with every parameter on a slider.
//!
//! - `data`: signal maths, noise cache, filters, session state and export
//! - `config`: presets and file-loadable signal settings
//! - `panels`: controls, export menu and spectrum panel
//! - `app`: the eframe application and [`run_lab`]

pub mod app;
pub mod color_scheme;
pub mod config;
pub mod data;
pub mod error;
pub mod panels;

// Public re-exports for a compact external API
pub use app::{run_lab, HarmonicLabApp};
pub use color_scheme::ColorScheme;
pub use config::{LabConfig, ParamRange, PlotLayout, SignalSettings};
pub use data::filter::{FilterKind, FilterSettings};
pub use data::lab::{LabCurves, LabSession};
pub use data::noise::NoiseParams;
pub use data::signal::SignalParams;
pub use error::LabError;

/// Install `env_logger` with an `info` default, overridable by `RUST_LOG`.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
