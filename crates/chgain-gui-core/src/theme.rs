//! Visual styling for the chgain editor.

use egui::{Color32, CornerRadius, Stroke, Style, Visuals};

/// Theme colors for the editor window.
pub struct Theme {
    /// Window background behind the painted editor area.
    pub background: Color32,
    /// Primary accent color for active elements.
    pub accent: Color32,
    /// Dimmed accent color for inactive elements.
    pub accent_dim: Color32,
    /// Primary text color.
    pub text_primary: Color32,
    /// Secondary/muted text color.
    pub text_secondary: Color32,
    /// Slider track color.
    pub slider_track: Color32,
    /// Toggle fill when switched on.
    pub toggle_on: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            accent: Color32::from_rgb(40, 110, 200),
            accent_dim: Color32::from_rgb(150, 180, 220),
            text_primary: Color32::BLACK,
            text_secondary: Color32::from_rgb(90, 90, 100),
            slider_track: Color32::from_rgb(215, 215, 222),
            toggle_on: Color32::from_rgb(120, 170, 235),
        }
    }
}

impl Theme {
    /// Apply the theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        // Light visuals as base
        let mut visuals = Visuals::light();

        visuals.window_fill = self.background;
        visuals.panel_fill = self.background;
        visuals.extreme_bg_color = self.slider_track;

        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.noninteractive.corner_radius = CornerRadius::same(2);

        visuals.widgets.inactive.bg_fill = self.slider_track;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);
        visuals.widgets.inactive.corner_radius = CornerRadius::same(2);

        visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, self.accent);
        visuals.widgets.hovered.corner_radius = CornerRadius::same(2);

        visuals.widgets.active.bg_fill = self.accent_dim;
        visuals.widgets.active.fg_stroke = Stroke::new(2.0, self.accent);
        visuals.widgets.active.corner_radius = CornerRadius::same(2);

        // Selected toggle buttons and the filled part of bar sliders
        visuals.selection.bg_fill = self.toggle_on;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        style.visuals = visuals;
        style.spacing.button_padding = egui::vec2(6.0, 2.0);

        ctx.set_style(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_colours_match_the_painted_background() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color32::WHITE);
        assert_eq!(theme.text_primary, Color32::BLACK);
    }

    #[test]
    fn apply_sets_panel_fill() {
        let ctx = egui::Context::default();
        let theme = Theme::default();
        theme.apply(&ctx);
        let style = ctx.style();
        assert_eq!(style.visuals.panel_fill, theme.background);
        assert_eq!(style.visuals.selection.bg_fill, theme.toggle_on);
    }
}
