//! Main application module for the harmonic lab.
//!
//! | Sub-module | Responsibility |
//! | ---------- | -------------- |
//! | [`plot`]   | Central time-domain plots in overlay or split layout |
//! | [`run`]    | Top-level [`run_lab()`] entry point and icon loading |

mod plot;
mod run;

pub use run::run_lab;

use eframe::egui;
use egui_phosphor::regular as icons;

use crate::color_scheme::ColorScheme;
use crate::config::{FeatureFlags, LabConfig, PlotLayout};
use crate::data::lab::LabSession;
use crate::data::trace_look::CurveLooks;
use crate::error::Result;
use crate::panels::controls_ui::ControlsPanel;
use crate::panels::export_ui::ExportPanel;
use crate::panels::panel_trait::Panel;
#[cfg(feature = "fft")]
use crate::panels::spectrum_ui::SpectrumPanel;

use plot::{PlotView, FILTERED_NAME, HARMONIC_NAME, NOISY_NAME};

/// Standalone lab window implementing [`eframe::App`].
pub struct HarmonicLabApp {
    /// Parameters, noise and curves.
    pub session: LabSession,

    // ── Panels ───────────────────────────────────────────────────────────────
    pub controls: ControlsPanel,
    pub export: ExportPanel,
    #[cfg(feature = "fft")]
    pub spectrum: SpectrumPanel,

    // ── Appearance ───────────────────────────────────────────────────────────
    pub layout: PlotLayout,
    pub y_range: (f64, f64),
    pub looks: CurveLooks,
    pub features: FeatureFlags,
    pub headline: Option<String>,
    pub color_scheme: ColorScheme,
    color_scheme_applied: bool,
    reset_view: bool,
}

impl HarmonicLabApp {
    /// Build the session from `cfg.settings` and the panels from the rest of `cfg`.
    pub fn new(cfg: &LabConfig) -> Result<Self> {
        let session = LabSession::new(cfg.settings.clone())?;
        Ok(Self {
            session,
            controls: ControlsPanel::default(),
            export: ExportPanel::default(),
            #[cfg(feature = "fft")]
            spectrum: SpectrumPanel::default(),
            layout: cfg.layout,
            y_range: cfg.y_range,
            looks: cfg.looks.clone(),
            features: cfg.features.clone(),
            headline: cfg.headline.clone(),
            color_scheme: cfg.color_scheme.clone(),
            color_scheme_applied: false,
            reset_view: false,
        })
    }

    fn render_menu_bar(&mut self, ui: &mut egui::Ui) {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button(format!("{} View", icons::EYE), |ui| {
                let label = self.controls.state.label();
                ui.checkbox(&mut self.controls.state.visible, label);
                #[cfg(feature = "fft")]
                if self.features.spectrum {
                    let label = self.spectrum.state.label();
                    ui.checkbox(&mut self.spectrum.state.visible, label);
                }
                ui.separator();
                ui.strong("Curves");
                self.looks.noisy.render_editor(ui, NOISY_NAME);
                self.looks.filtered.render_editor(ui, FILTERED_NAME);
                self.looks.harmonic.render_editor(ui, HARMONIC_NAME);
                ui.separator();
                ui.checkbox(&mut self.features.grid, "Grid");
                ui.checkbox(&mut self.features.legend, "Legend");
                ui.separator();
                egui::ComboBox::from_label("Theme")
                    .selected_text(self.color_scheme.label())
                    .show_ui(ui, |ui| {
                        for scheme in ColorScheme::all() {
                            if ui
                                .selectable_label(&self.color_scheme == scheme, scheme.label())
                                .clicked()
                            {
                                self.color_scheme = scheme.clone();
                                self.color_scheme_applied = false;
                            }
                        }
                    });
            });
            if self.features.export {
                self.export.render_menu(ui, &mut self.session);
            }
            if ui
                .button(format!("{} Fit to view", icons::ARROWS_OUT))
                .on_hover_text("Reset zoom and pan")
                .clicked()
            {
                self.reset_view = true;
            }
        });
    }
}

impl eframe::App for HarmonicLabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.color_scheme_applied {
            self.color_scheme.apply(ctx);
            self.color_scheme_applied = true;
        }

        egui::TopBottomPanel::top("lab_menu").show(ctx, |ui| {
            self.render_menu_bar(ui);
            if let Some(h) = &self.headline {
                let mut text = egui::RichText::new(h).heading();
                if let Some(c) = self.color_scheme.headline_color() {
                    text = text.color(c);
                }
                ui.label(text);
            }
        });

        if self.controls.state.visible {
            egui::SidePanel::left("lab_controls")
                .resizable(true)
                .default_width(340.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        self.controls.render_panel(ui, &mut self.session);
                    });
                });
        }

        #[cfg(feature = "fft")]
        if self.features.spectrum && self.spectrum.state.visible {
            egui::TopBottomPanel::bottom("lab_spectrum")
                .resizable(true)
                .min_height(120.0)
                .default_height(260.0)
                .show(ctx, |ui| {
                    self.spectrum.set_colors(&self.looks);
                    self.spectrum.render_panel(ui, &mut self.session);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let view = PlotView {
                looks: &self.looks,
                features: &self.features,
                y_range: self.y_range,
                reset_view: self.reset_view,
            };
            view.show(ui, &self.session, self.layout);
        });
        self.reset_view = false;

        self.export.handle_screenshot(ctx);
    }
}
