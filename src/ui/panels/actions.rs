// SysLogView - ui/panels/actions.rs
//
// Bottom button row and status line.

use crate::app::view::UserInput;
use crate::ui::theme;

/// Render the OK / Cancel / Reload row.
///
/// `status` is the optional config.toml warning summary shown to the left.
pub fn render(ui: &mut egui::Ui, status: Option<&str>, inputs: &mut Vec<UserInput>) {
    ui.horizontal(|ui| {
        if let Some(msg) = status {
            ui.colored_label(theme::STATUS_WARNING, msg);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add(egui::Button::new("Cancel").min_size([theme::BUTTON_MIN_WIDTH, 0.0].into()))
                .clicked()
            {
                inputs.push(UserInput::Cancel);
            }
            if ui
                .add(egui::Button::new("OK").min_size([theme::BUTTON_MIN_WIDTH, 0.0].into()))
                .clicked()
            {
                inputs.push(UserInput::Ok);
            }
            if ui
                .button("Reload")
                .on_hover_text("Read the file again (F5)")
                .clicked()
            {
                inputs.push(UserInput::Reload);
            }
        });
    });
}
