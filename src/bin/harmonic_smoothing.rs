//! Noisy harmonic on top, optionally smoothed by a moving average below.
//!
//! ```bash
//! cargo run --bin harmonic-smoothing
//! ```

use harmonic_lab::{init_logging, run_lab, LabConfig};

fn main() -> eframe::Result<()> {
    init_logging();
    run_lab(LabConfig::from_env_or(LabConfig::smoothing()))
}
