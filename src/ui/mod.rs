// SysLogView - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: app (session, view loop), egui.
// Must NOT depend on: platform, direct I/O.

pub mod panels;
pub mod theme;
