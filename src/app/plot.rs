//! Central time-domain plots.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::config::{FeatureFlags, PlotLayout};
use crate::data::lab::LabSession;
use crate::data::trace_look::{CurveLooks, TraceLook};

pub(crate) const HARMONIC_NAME: &str = "Harmonic signal";
pub(crate) const NOISY_NAME: &str = "Signal with noise";
pub(crate) const FILTERED_NAME: &str = "Filtered signal";

/// Everything the plot needs besides the session.
pub(crate) struct PlotView<'a> {
    pub looks: &'a CurveLooks,
    pub features: &'a FeatureFlags,
    pub y_range: (f64, f64),
    pub reset_view: bool,
}

fn curve_line<'a>(name: &str, t: &[f64], y: &[f64], look: &TraceLook) -> Line<'a> {
    let points: PlotPoints<'a> = t.iter().zip(y).map(|(&x, &y)| [x, y]).collect();
    look.style_line(Line::new(name, points))
}

impl PlotView<'_> {
    fn base_plot(&self, id: &str, session: &LabSession) -> Plot<'static> {
        let t = session.time();
        let (t0, t1) = (
            t.first().copied().unwrap_or(0.0),
            t.last().copied().unwrap_or(1.0),
        );
        let mut plot = Plot::new(id.to_string())
            .allow_scroll(false)
            .allow_boxed_zoom(true)
            .show_grid(self.features.grid)
            .include_x(t0)
            .include_x(t1)
            .include_y(self.y_range.0)
            .include_y(self.y_range.1)
            .x_axis_label("Time (s)")
            .y_axis_label("Amplitude");
        if self.features.legend {
            plot = plot.legend(Legend::default());
        }
        if self.reset_view {
            plot = plot.reset();
        }
        plot
    }

    pub fn show(&self, ui: &mut egui::Ui, session: &LabSession, layout: PlotLayout) {
        match layout {
            PlotLayout::Overlay => self.show_overlay(ui, session),
            PlotLayout::Split => self.show_split(ui, session),
        }
    }

    /// Noisy, filtered and clean harmonic in one plot.
    fn show_overlay(&self, ui: &mut egui::Ui, session: &LabSession) {
        let t = session.time();
        let curves = session.curves();
        let looks = self.looks;
        self.base_plot("lab_overlay", session).show(ui, |plot_ui| {
            if looks.noisy.visible {
                plot_ui.line(curve_line(NOISY_NAME, t, &curves.noisy, &looks.noisy));
            }
            if looks.filtered.visible {
                plot_ui.line(curve_line(FILTERED_NAME, t, &curves.filtered, &looks.filtered));
            }
            if looks.harmonic.visible {
                plot_ui.line(curve_line(HARMONIC_NAME, t, &curves.harmonic, &looks.harmonic));
            }
        });
    }

    /// Source signal on top, filtered signal below, time axes linked.
    fn show_split(&self, ui: &mut egui::Ui, session: &LabSession) {
        let t = session.time();
        let curves = session.curves();
        let looks = self.looks;
        let half = (ui.available_height() - ui.spacing().item_spacing.y) / 2.0;

        ui.strong("Source signal");
        self.base_plot("lab_source", session)
            .height(half - 20.0)
            .link_axis("lab_time", [true, false])
            .show(ui, |plot_ui| {
                if looks.noisy.visible {
                    plot_ui.line(curve_line(NOISY_NAME, t, &curves.noisy, &looks.noisy));
                }
                if looks.harmonic.visible {
                    plot_ui.line(curve_line(HARMONIC_NAME, t, &curves.harmonic, &looks.harmonic));
                }
            });

        ui.strong(format!("Filtered signal ({})", session.filter().describe()));
        self.base_plot("lab_filtered", session)
            .link_axis("lab_time", [true, false])
            .show(ui, |plot_ui| {
                if looks.filtered.visible {
                    plot_ui.line(curve_line(FILTERED_NAME, t, &curves.filtered, &looks.filtered));
                }
            });
    }
}
