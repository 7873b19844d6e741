use std::path::PathBuf;
use std::sync::Arc;

use egui::Ui;
use egui_phosphor::regular as icons;

use super::panel_trait::{Panel, PanelState};
use crate::data::export;
use crate::data::lab::LabSession;

pub struct ExportPanel {
    pub state: PanelState,
    /// Target of a requested viewport screenshot, consumed when the image arrives.
    pending_screenshot: Option<PathBuf>,
}

impl Default for ExportPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Export", icons::EXPORT),
            pending_screenshot: None,
        }
    }
}

impl ExportPanel {
    /// Save the screenshot delivered by egui, if one was requested.
    pub fn handle_screenshot(&mut self, ctx: &egui::Context) {
        if self.pending_screenshot.is_none() {
            return;
        }
        let image: Option<Arc<egui::ColorImage>> = ctx.input(|i| {
            i.events.iter().rev().find_map(|e| {
                if let egui::Event::Screenshot { image, .. } = e {
                    Some(image.clone())
                } else {
                    None
                }
            })
        });
        if let (Some(image), Some(path)) = (image, self.pending_screenshot.take()) {
            match export::save_color_image_png(&path, &image) {
                Ok(()) => log::info!("saved screenshot to {}", path.display()),
                Err(e) => log::error!("failed to save screenshot: {e}"),
            }
        }
    }
}

impl Panel for ExportPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }
    fn state_mut(&mut self) -> &mut PanelState {
        &mut self.state
    }

    fn render_menu(&mut self, ui: &mut Ui, session: &mut LabSession) {
        ui.menu_button(self.state.label(), |ui| {
            if ui
                .button(format!("{} Save screenshot", icons::CAMERA))
                .on_hover_text("Take a screenshot of the entire window")
                .clicked()
            {
                if let Some(path) = rfd::FileDialog::new()
                    .set_file_name(export::timestamped_name("harmonic_lab", "png"))
                    .add_filter("PNG", &["png"])
                    .save_file()
                {
                    self.pending_screenshot = Some(path);
                    ui.ctx()
                        .send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
                }
                ui.close();
            }
            if ui
                .button(format!("{} Curves as CSV", icons::FILE_CSV))
                .clicked()
            {
                if let Some(path) = rfd::FileDialog::new()
                    .set_file_name(export::timestamped_name("curves", "csv"))
                    .add_filter("CSV", &["csv"])
                    .save_file()
                {
                    match export::save_curves_csv(&path, session) {
                        Ok(()) => log::info!("exported curves to {}", path.display()),
                        Err(e) => log::error!("failed to export curves CSV: {e}"),
                    }
                }
                ui.close();
            }
            if ui
                .button(format!("{} Settings as YAML", icons::FLOPPY_DISK))
                .on_hover_text("Save slider ranges and initial values for HARMONIC_LAB_CONFIG")
                .clicked()
            {
                if let Some(path) = rfd::FileDialog::new()
                    .set_file_name("harmonic_lab.yaml")
                    .add_filter("YAML", &["yaml", "yml"])
                    .save_file()
                {
                    if let Err(e) = session.settings().save_yaml(&path) {
                        log::error!("failed to save settings: {e}");
                    }
                }
                ui.close();
            }
        });
    }
}
