// SysLogView - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library, regex, tracing.
// Must NOT depend on: ui, platform, app, or perform I/O.

pub mod filelist;
pub mod sanitize;
