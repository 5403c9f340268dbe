// SysLogView - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "SysLogView";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "syslogview";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// File list
// =============================================================================

/// Name of the persisted file list inside the var directory.
pub const FILENAMES_FILE_NAME: &str = "filenames";

/// Prefix marking the default entry in the file list.
pub const DEFAULT_MARKER: char = '*';

/// Prefix marking a comment line in the file list.
pub const COMMENT_MARKER: char = '#';

/// Log files always offered, even when the persisted list omits them.
pub const BUILTIN_FILENAMES: &[&str] = &[
    "/var/log/boot.log",
    "/var/log/messages",
    "/var/log/YaST2/y2log",
];

/// Bundled file list written on first run when no list exists yet.
pub const BUNDLED_FILENAMES: &str = include_str!("../../data/filenames");

// =============================================================================
// View
// =============================================================================

/// Text shown in place of the content of a file that cannot be read.
pub const FILE_NOT_FOUND_TEXT: &str = "File not found.";

/// Command-line argument that prints usage instead of opening the dialog.
pub const HELP_ARGUMENT: &str = "help";

/// Default upper bound on bytes loaded into the text pane.
///
/// Larger files are shown from their tail so the most recent lines stay
/// visible without holding the whole file in the widget.
pub const DEFAULT_MAX_DISPLAY_BYTES: u64 = 16 * 1024 * 1024; // 16 MiB

/// Minimum user-configurable display cap.
pub const MIN_MAX_DISPLAY_BYTES: u64 = 64 * 1024; // 64 KiB

/// Maximum user-configurable display cap.
pub const ABSOLUTE_MAX_DISPLAY_BYTES: u64 = 256 * 1024 * 1024; // 256 MiB

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
