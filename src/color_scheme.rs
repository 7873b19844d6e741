//! Color scheme definitions for the lab window.

use eframe::egui::{Color32, Context, Visuals};

/// Visual theme for the lab UI.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ColorScheme {
    /// Follow the eframe default (dark).
    #[default]
    Dark,
    /// Light theme.
    Light,
    /// Pale blue-grey lab notebook look: light panels, blue-tinted plot area.
    Lab,
}

impl ColorScheme {
    /// All built-in schemes (useful for combo-box UIs).
    pub fn all() -> &'static [ColorScheme] {
        &[ColorScheme::Dark, ColorScheme::Light, ColorScheme::Lab]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Dark => "Dark",
            ColorScheme::Light => "Light",
            ColorScheme::Lab => "Lab",
        }
    }

    /// Apply this scheme's visuals to an egui context.
    pub fn apply(&self, ctx: &Context) {
        ctx.set_visuals(self.visuals());
    }

    pub fn visuals(&self) -> Visuals {
        match self {
            ColorScheme::Dark => Visuals::dark(),
            ColorScheme::Light => Visuals::light(),
            ColorScheme::Lab => {
                let mut v = Visuals::light();
                let panel = Color32::from_rgb(0xe0, 0xf2, 0xf7);
                let plot_bg = Color32::from_rgb(0xf0, 0xf8, 0xff);
                let slider = Color32::from_rgb(0xb0, 0xbe, 0xc5);
                let slider_hover = Color32::from_rgb(0x90, 0xa4, 0xae);
                let accent = Color32::from_rgb(0x54, 0x6e, 0x7a);
                v.panel_fill = panel;
                v.window_fill = panel;
                v.extreme_bg_color = plot_bg;
                v.faint_bg_color = Color32::from_rgb(0xe3, 0xf2, 0xfd);
                v.widgets.inactive.bg_fill = slider;
                v.widgets.inactive.weak_bg_fill = slider;
                v.widgets.hovered.bg_fill = slider_hover;
                v.widgets.hovered.weak_bg_fill = slider_hover;
                v.widgets.active.bg_fill = accent;
                v.selection.bg_fill = accent;
                v
            }
        }
    }

    /// Colour of the headline text.
    pub fn headline_color(&self) -> Option<Color32> {
        match self {
            ColorScheme::Lab => Some(Color32::from_rgb(0x2e, 0x7d, 0x32)),
            _ => None,
        }
    }
}
