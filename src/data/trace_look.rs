//! TraceLook: visual styling for the lab curves.

use eframe::egui;
use egui_plot::{Line, LineStyle};

/// The visual presentation of a curve (color, visibility, width, line style).
#[derive(Debug, Clone)]
pub struct TraceLook {
    pub color: egui::Color32,
    pub visible: bool,
    pub width: f32,
    pub style: LineStyle,
}

impl Default for TraceLook {
    fn default() -> Self {
        Self {
            color: egui::Color32::GRAY,
            visible: true,
            width: 2.0,
            style: LineStyle::Solid,
        }
    }
}

impl TraceLook {
    pub fn solid(color: egui::Color32) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Dense dashes, the closest egui_plot gets to a dash-dot stroke.
    pub fn dash_dot(color: egui::Color32) -> Self {
        Self {
            color,
            style: LineStyle::Dashed { length: 8.0 },
            ..Default::default()
        }
    }

    /// Apply color, width and style to a line.
    pub fn style_line<'a>(&self, line: Line<'a>) -> Line<'a> {
        line.color(self.color).width(self.width).style(self.style)
    }

    /// Render an inline editor for this look.
    pub(crate) fn render_editor(&mut self, ui: &mut egui::Ui, label: &str) {
        ui.horizontal(|ui| {
            ui.checkbox(&mut self.visible, label);
            let mut c = self.color;
            if ui.color_edit_button_srgba(&mut c).changed() {
                self.color = c;
            }
            ui.add(
                egui::DragValue::new(&mut self.width)
                    .range(0.5..=6.0)
                    .speed(0.1),
            )
            .on_hover_text("Line width");
        });
    }
}

/// Looks of the three lab curves.
#[derive(Debug, Clone)]
pub struct CurveLooks {
    pub harmonic: TraceLook,
    pub noisy: TraceLook,
    pub filtered: TraceLook,
}

impl Default for CurveLooks {
    fn default() -> Self {
        Self {
            harmonic: TraceLook::dash_dot(egui::Color32::from_rgb(0xff, 0x98, 0x00)),
            noisy: TraceLook::solid(egui::Color32::from_rgb(0x64, 0xb5, 0xf6)),
            filtered: TraceLook::solid(egui::Color32::from_rgb(0x19, 0x76, 0xd2)),
        }
    }
}

impl CurveLooks {
    /// Blue raw curve over red filtered curve, harmonic hidden.
    pub fn split() -> Self {
        Self {
            harmonic: TraceLook {
                visible: false,
                ..TraceLook::dash_dot(egui::Color32::from_rgb(0xff, 0x98, 0x00))
            },
            noisy: TraceLook::solid(egui::Color32::from_rgba_unmultiplied(0, 0, 255, 204)),
            filtered: TraceLook::solid(egui::Color32::from_rgba_unmultiplied(255, 0, 0, 204)),
        }
    }
}
