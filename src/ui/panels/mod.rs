// SysLogView - ui/panels/mod.rs

pub mod actions;
pub mod log_view;
pub mod selector;
