// SysLogView - ui/theme.rs
//
// Colours, text styles and layout constants.
// No dependencies on app state or business logic.

use egui::{Color32, FontId, TextStyle};

/// Status line colour for non-fatal config.toml warnings.
pub const STATUS_WARNING: Color32 = Color32::from_rgb(217, 119, 6); // Amber 600

/// Layout constants.
pub const WINDOW_SIZE: [f32; 2] = [900.0, 600.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [480.0, 320.0];
pub const COMBO_WIDTH: f32 = 560.0;
pub const BUTTON_MIN_WIDTH: f32 = 80.0;

/// Apply the configured theme and font size to the whole context.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_theme(if dark_mode {
        egui::Theme::Dark
    } else {
        egui::Theme::Light
    });

    ctx.style_mut(|style| {
        style
            .text_styles
            .insert(TextStyle::Body, FontId::proportional(font_size));
        style
            .text_styles
            .insert(TextStyle::Button, FontId::proportional(font_size));
        style
            .text_styles
            .insert(TextStyle::Heading, FontId::proportional(font_size * 1.3));
        // Log content: slightly smaller so more columns fit.
        style
            .text_styles
            .insert(TextStyle::Monospace, FontId::monospace(font_size * 0.9));
    });
}
