use egui::{Color32, Ui};
use egui_phosphor::regular as icons;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use super::panel_trait::{Panel, PanelState};
use crate::data::fft::{compute_spectrum, to_db, FFTWindow};
use crate::data::lab::LabSession;
use crate::data::trace_look::CurveLooks;

pub struct SpectrumPanel {
    pub state: PanelState,
    pub window: FFTWindow,
    pub db: bool,
    pub noisy_color: Color32,
    pub filtered_color: Color32,
    fit_view: bool,
    // (session revision, window) the cached spectra belong to
    cached_for: Option<(u64, FFTWindow)>,
    noisy: Vec<[f64; 2]>,
    filtered: Vec<[f64; 2]>,
}

impl Default for SpectrumPanel {
    fn default() -> Self {
        Self {
            state: PanelState::hidden("Spectrum", icons::WAVEFORM),
            window: FFTWindow::Hann,
            db: false,
            noisy_color: Color32::from_rgb(0x64, 0xb5, 0xf6),
            filtered_color: Color32::from_rgb(0x19, 0x76, 0xd2),
            fit_view: false,
            cached_for: None,
            noisy: Vec::new(),
            filtered: Vec::new(),
        }
    }
}

impl SpectrumPanel {
    /// Follow the colours of the noisy and filtered time-domain curves.
    pub fn set_colors(&mut self, looks: &CurveLooks) {
        self.noisy_color = looks.noisy.color;
        self.filtered_color = looks.filtered.color;
    }

    fn refresh(&mut self, session: &LabSession) {
        let key = (session.revision(), self.window);
        if self.cached_for == Some(key) {
            return;
        }
        let curves = session.curves();
        self.noisy = compute_spectrum(&curves.noisy, session.fs(), self.window).unwrap_or_default();
        self.filtered =
            compute_spectrum(&curves.filtered, session.fs(), self.window).unwrap_or_default();
        self.cached_for = Some(key);
    }

    fn points(&self, spec: &[[f64; 2]]) -> PlotPoints<'static> {
        if self.db {
            spec.iter().map(|p| [p[0], to_db(p[1])]).collect()
        } else {
            spec.iter().copied().collect()
        }
    }
}

impl Panel for SpectrumPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, session: &mut LabSession) {
        ui.horizontal(|ui| {
            ui.label("Window:");
            egui::ComboBox::from_id_salt("spectrum_window")
                .selected_text(self.window.label())
                .show_ui(ui, |ui| {
                    for w in FFTWindow::ALL {
                        ui.selectable_value(&mut self.window, *w, w.label());
                    }
                });
            ui.separator();
            if ui
                .button(if self.db { "Linear" } else { "dB" })
                .on_hover_text("Toggle magnitude scale")
                .clicked()
            {
                self.db = !self.db;
                self.fit_view = true;
            }
            if ui.button("Fit into view").clicked() {
                self.fit_view = true;
            }
        });

        self.refresh(session);
        if self.noisy.is_empty() {
            ui.label("Spectrum: not enough samples");
            return;
        }

        let mut plot = Plot::new("spectrum_plot")
            .legend(Legend::default())
            .allow_scroll(false)
            .allow_boxed_zoom(true)
            .x_axis_label("Hz")
            .y_axis_label(if self.db { "Magnitude (dB)" } else { "Magnitude" });
        if self.fit_view {
            plot = plot.reset();
            self.fit_view = false;
        }
        let noisy = Line::new("Noisy", self.points(&self.noisy)).color(self.noisy_color);
        let filtered = Line::new("Filtered", self.points(&self.filtered)).color(self.filtered_color);
        plot.show(ui, |plot_ui| {
            plot_ui.line(noisy);
            plot_ui.line(filtered);
        });
    }
}
