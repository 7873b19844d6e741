//! Sliders, checkbox and buttons driving the lab session.

use egui::{Color32, RichText, Ui};
use egui_phosphor::regular as icons;

use super::panel_trait::{Panel, PanelState};
use crate::config::ParamRange;
use crate::data::filter::FilterKind;
use crate::data::lab::LabSession;

pub struct ControlsPanel {
    pub state: PanelState,
}

impl Default for ControlsPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Controls", icons::SLIDERS_HORIZONTAL),
        }
    }
}

/// Slider over `range`; returns the new value if the user moved it.
fn param_slider(ui: &mut Ui, enabled: bool, value: f64, range: &ParamRange, label: &str) -> Option<f64> {
    let mut v = value;
    let mut slider = egui::Slider::new(&mut v, range.min..=range.max).text(label);
    if let Some(step) = range.step {
        slider = slider.step_by(step);
    }
    ui.add_enabled(enabled, slider).changed().then_some(v)
}

impl Panel for ControlsPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, session: &mut LabSession) {
        let ranges = session.settings().ranges;
        let signal = *session.signal();

        ui.strong("Harmonic");
        if let Some(v) = param_slider(ui, true, signal.amplitude, &ranges.amplitude, "Amplitude") {
            session.set_amplitude(v);
        }
        if let Some(v) = param_slider(ui, true, signal.frequency, &ranges.frequency, "Frequency (Hz)") {
            session.set_frequency(v);
        }
        if let Some(v) = param_slider(ui, true, signal.phase, &ranges.phase, "Phase (rad)") {
            session.set_phase(v);
        }

        ui.separator();
        ui.strong("Noise");
        let mut show_noise = signal.show_noise;
        if ui.checkbox(&mut show_noise, "Show noise").changed() {
            session.set_show_noise(show_noise);
        }
        let noise = session.noise_params();
        if let Some(v) = param_slider(ui, true, noise.mean, &ranges.noise_mean, "Noise mean") {
            session.set_noise_mean(v);
        }
        if let Some(v) = param_slider(ui, true, noise.variance, &ranges.noise_variance, "Noise variance") {
            session.set_noise_variance(v);
        }
        if ui
            .button(format!("{} Regenerate noise", icons::SHUFFLE))
            .on_hover_text("Draw a new noise realization with the current mean and variance")
            .clicked()
        {
            session.regenerate_noise();
        }

        ui.separator();
        ui.strong("Filter");
        let available: Vec<FilterKind> = session.available_filters().to_vec();
        let filter = *session.filter();
        if available.len() > 1 {
            let mut kind = filter.kind;
            egui::ComboBox::from_id_salt("filter_kind")
                .selected_text(kind.label())
                .show_ui(ui, |ui| {
                    for k in &available {
                        ui.selectable_value(&mut kind, *k, k.label());
                    }
                });
            if kind != filter.kind {
                session.set_filter_kind(kind);
            }
        }
        let offers = |k: FilterKind| available.is_empty() || available.contains(&k);
        if offers(FilterKind::Butterworth) {
            let enabled = session.filter().kind == FilterKind::Butterworth;
            if let Some(v) = param_slider(ui, enabled, filter.cutoff_hz, &ranges.cutoff_hz, "Cutoff (Hz)") {
                session.set_cutoff(v);
            }
        }
        if offers(FilterKind::MovingAverage) {
            let enabled = session.window_enabled();
            if let Some(v) = param_slider(ui, enabled, filter.window as f64, &ranges.window, "Window size") {
                session.set_window(v.round().max(0.0) as usize);
            }
        }
        ui.label(RichText::new(session.filter().describe()).weak());

        ui.separator();
        if ui
            .button(format!("{} Reset", icons::ARROW_COUNTER_CLOCKWISE))
            .on_hover_text("Restore the initial parameters")
            .clicked()
        {
            session.reset();
        }

        if let Some(e) = session.last_error() {
            ui.separator();
            ui.colored_label(Color32::RED, e.to_string());
        }
    }
}
