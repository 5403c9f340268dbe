// SysLogView - ui/panels/selector.rs
//
// Editable file selector: a text field for typing any path, a drop-down of
// the known files, and a native "Browse…" picker.

use crate::app::session::SessionState;
use crate::app::view::UserInput;
use crate::ui::theme;

/// Directory the native picker opens in.
const BROWSE_START_DIR: &str = "/var/log";

/// Render the selector row.
///
/// `edit_buffer` holds the text field content between frames. A
/// `SelectionChanged` input is produced when a known file is picked, a file
/// is browsed to, or the typed path is confirmed (Enter or focus loss).
pub fn render(
    ui: &mut egui::Ui,
    session: &SessionState,
    edit_buffer: &mut String,
    inputs: &mut Vec<UserInput>,
) {
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(edit_buffer)
                .desired_width(theme::COMBO_WIDTH)
                .hint_text("Path of a log file"),
        );
        if response.lost_focus() && *edit_buffer != session.current_filename {
            inputs.push(UserInput::SelectionChanged(edit_buffer.trim().to_string()));
        }

        let mut picked: Option<String> = None;
        egui::ComboBox::from_id_salt("known_files")
            .selected_text("")
            .width(24.0)
            .show_ui(ui, |ui| {
                for entry in &session.entries {
                    let selected = entry.path == session.current_filename;
                    if ui.selectable_label(selected, entry.path.as_str()).clicked() && !selected {
                        picked = Some(entry.path.clone());
                    }
                }
            });

        if ui
            .button("Browse\u{2026}")
            .on_hover_text("Choose a file to view")
            .clicked()
        {
            if let Some(path) = rfd::FileDialog::new()
                .set_directory(BROWSE_START_DIR)
                .pick_file()
            {
                picked = Some(path.display().to_string());
            }
        }

        if let Some(path) = picked {
            edit_buffer.clone_from(&path);
            inputs.push(UserInput::SelectionChanged(path));
        }
    });
}
