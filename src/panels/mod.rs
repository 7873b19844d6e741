pub mod controls_ui;
pub mod export_ui;
pub mod panel_trait;
#[cfg(feature = "fft")]
pub mod spectrum_ui;
