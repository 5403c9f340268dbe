// SysLogView - app/mod.rs
//
// Application layer: persistence of the file list, session state and the
// view loop state machine.
// Dependencies: core, platform, util.
// Must NOT depend on: ui, egui.

pub mod session;
pub mod store;
pub mod view;
