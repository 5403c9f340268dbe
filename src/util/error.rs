// SysLogView - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Store and config errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type returned from the binary's `run`.
///
/// Store and config problems never reach this level: a broken file list
/// falls back to the built-in files and config.toml problems become
/// warnings. Only a GUI that cannot start ends the process with an error.
#[derive(Debug)]
pub enum ViewerError {
    /// The GUI could not be started.
    Gui(String),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gui(msg) => write!(f, "GUI error: {msg}"),
        }
    }
}

impl std::error::Error for ViewerError {}

// ---------------------------------------------------------------------------
// File list store errors
// ---------------------------------------------------------------------------

/// Errors related to the persisted `filenames` list.
#[derive(Debug)]
pub enum StoreError {
    /// The file list does not exist yet (first run).
    NotFound { path: PathBuf },

    /// Copying the bundled default list into place failed.
    Bootstrap {
        path: PathBuf,
        source: io::Error,
    },

    /// Reading the file list failed for a reason other than absence.
    Read { path: PathBuf, source: io::Error },

    /// Writing the updated file list failed.
    Write { path: PathBuf, source: io::Error },
}

impl StoreError {
    /// Whether this error only signals a missing file list.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "File list '{}' does not exist", path.display())
            }
            Self::Bootstrap { path, source } => write!(
                f,
                "Cannot install default file list at '{}': {source}",
                path.display()
            ),
            Self::Read { path, source } => {
                write!(f, "Cannot read file list '{}': {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "Cannot write file list '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound { .. } => None,
            Self::Bootstrap { source, .. } => Some(source),
            Self::Read { source, .. } => Some(source),
            Self::Write { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for SysLogView results.
pub type Result<T> = std::result::Result<T, ViewerError>;
