use egui::Ui;

use crate::data::lab::LabSession;

#[derive(Debug, Clone, Copy)]
pub struct PanelState {
    pub title: &'static str,
    pub icon: &'static str,
    pub visible: bool,
}

impl PanelState {
    pub fn new(title: &'static str, icon: &'static str) -> Self {
        Self {
            title,
            icon,
            visible: true,
        }
    }

    pub fn hidden(title: &'static str, icon: &'static str) -> Self {
        Self {
            visible: false,
            ..Self::new(title, icon)
        }
    }

    /// Icon and title, for menu entries.
    pub fn label(&self) -> String {
        format!("{} {}", self.icon, self.title)
    }
}

pub trait Panel {
    fn state(&self) -> &PanelState;
    fn state_mut(&mut self) -> &mut PanelState;

    fn title(&self) -> &'static str {
        self.state().title
    }

    // Optional hooks with default empty impls
    fn render_menu(&mut self, _ui: &mut Ui, _session: &mut LabSession) {}
    fn render_panel(&mut self, _ui: &mut Ui, _session: &mut LabSession) {}
}
