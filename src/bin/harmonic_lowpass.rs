//! Harmonic, noise and Butterworth low-pass in one plot.
//!
//! ```bash
//! cargo run --bin harmonic-lowpass
//! HARMONIC_LAB_CONFIG=my_lab.yaml cargo run --bin harmonic-lowpass
//! ```

use harmonic_lab::{init_logging, run_lab, LabConfig};

fn main() -> eframe::Result<()> {
    init_logging();
    run_lab(LabConfig::from_env_or(LabConfig::lowpass()))
}
