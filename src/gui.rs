// SysLogView - gui.rs
//
// Top-level eframe::App implementation.
// Translates widget and window events into view loop inputs and closes the
// window once the loop terminates.

use crate::app::store::ConfigStore;
use crate::app::view::{UserInput, ViewLoop, ViewState};
use crate::ui;

/// The SysLogView dialog.
pub struct SysLogViewApp {
    pub view: ViewLoop,
    pub store: ConfigStore,
    /// Text field content of the file selector.
    pub edit_buffer: String,
    /// Message shown next to the buttons (startup configuration warnings).
    pub status: Option<String>,
    /// Set once the window close has been requested by the app itself.
    closing: bool,
}

impl SysLogViewApp {
    /// Create the dialog for an already initialised view loop.
    pub fn new(view: ViewLoop, store: ConfigStore, status: Option<String>) -> Self {
        let edit_buffer = view.session().current_filename.clone();
        Self {
            view,
            store,
            edit_buffer,
            status,
            closing: false,
        }
    }

    /// Feed one input to the view loop and react to termination.
    fn apply(&mut self, ctx: &egui::Context, input: UserInput) {
        let selection_input = matches!(input, UserInput::SelectionChanged(_));

        match self.view.handle(input) {
            ViewState::Viewing => {
                if selection_input {
                    self.edit_buffer = self.view.session().current_filename.clone();
                }
            }
            ViewState::Terminated(outcome) => {
                if self.closing {
                    return;
                }
                self.closing = true;
                tracing::debug!(?outcome, "Closing dialog");

                if let Err(e) = self.view.finish(&self.store) {
                    tracing::warn!(error = %e, "Could not save file list");
                    eprintln!("Warning: {e}");
                }
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }
}

/// Inputs that do not come from a widget: window close, shortcuts, drops.
fn window_inputs(ctx: &egui::Context) -> Vec<UserInput> {
    ctx.input(|i| {
        let mut inputs = Vec::new();

        if i.viewport().close_requested() || i.key_pressed(egui::Key::Escape) {
            inputs.push(UserInput::Cancel);
        }
        if i.key_pressed(egui::Key::F5) {
            inputs.push(UserInput::Reload);
        }
        for file in &i.raw.dropped_files {
            match &file.path {
                Some(path) => inputs.push(UserInput::SelectionChanged(path.display().to_string())),
                None => inputs.push(UserInput::Other(format!(
                    "dropped file '{}' has no path",
                    file.name
                ))),
            }
        }

        inputs
    })
}

impl eframe::App for SysLogViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut inputs = window_inputs(ctx);

        egui::TopBottomPanel::top("selector").show(ctx, |ui| {
            ui.add_space(4.0);
            ui::panels::selector::render(
                ui,
                self.view.session(),
                &mut self.edit_buffer,
                &mut inputs,
            );
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("actions").show(ctx, |ui| {
            ui.add_space(4.0);
            ui::panels::actions::render(ui, self.status.as_deref(), &mut inputs);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::log_view::render(ui, &self.view);
        });

        for input in inputs {
            self.apply(ctx, input);
        }
    }
}
