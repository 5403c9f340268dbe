// SysLogView - ui/panels/log_view.rs
//
// Read-only text pane with the `System Log (<file>)` heading.

use crate::app::view::ViewLoop;

/// Render the heading and the scrollable content of the current file.
///
/// The pane starts scrolled to the end, where the newest lines are.
pub fn render(ui: &mut egui::Ui, view: &ViewLoop) {
    ui.label(egui::RichText::new(view.title()).strong());
    ui.add_space(4.0);

    egui::ScrollArea::both()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            // A `&str` buffer makes the TextEdit read-only but still selectable.
            let mut content: &str = view.content();
            ui.add(
                egui::TextEdit::multiline(&mut content)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY),
            );
        });
}
