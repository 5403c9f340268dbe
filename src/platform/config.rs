// SysLogView - platform/config.rs
//
// Platform-specific directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for SysLogView configuration and state.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory holding config.toml (e.g. ~/.config/syslogview/)
    pub config_dir: PathBuf,

    /// Default directory for the persisted `filenames` list.
    pub var_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let var_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                var = %var_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                var_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                var_dir: fallback,
            }
        }
    }

    /// Location of config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[paths]` section.
    pub paths: PathsSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[view]` section.
    pub view: ViewSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[paths]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct PathsSection {
    /// Directory holding the `filenames` list.
    pub var_dir: Option<String>,
    /// System-provided default list copied on first run.
    pub bundled_filenames: Option<String>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[view]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ViewSection {
    /// Largest number of bytes loaded into the text pane.
    pub max_display_bytes: Option<u64>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    // -- Paths --
    /// Override for the var directory.
    pub var_dir: Option<PathBuf>,
    /// System-provided default list.
    pub bundled_filenames: Option<PathBuf>,

    // -- UI --
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Body font size in points.
    pub font_size: f32,

    // -- View --
    /// Largest number of bytes loaded into the text pane.
    pub max_display_bytes: u64,

    // -- Logging --
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            var_dir: None,
            bundled_filenames: None,
            dark_mode: true,
            font_size: constants::DEFAULT_FONT_SIZE,
            max_display_bytes: constants::DEFAULT_MAX_DISPLAY_BYTES,
            log_level: None,
        }
    }
}

impl AppConfig {
    /// Directory holding the `filenames` list.
    ///
    /// Priority: CLI override > config.toml > platform default.
    pub fn resolve_var_dir(&self, cli: Option<&Path>, paths: &PlatformPaths) -> PathBuf {
        cli.map(Path::to_path_buf)
            .or_else(|| self.var_dir.clone())
            .unwrap_or_else(|| paths.var_dir.clone())
    }
}

/// Read and parse config.toml without validation.
///
/// A missing file is not an error: it yields the all-default raw config.
fn read_raw(config_path: &Path) -> Result<RawConfig, ConfigError> {
    let content = match std::fs::read_to_string(config_path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
            return Ok(RawConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: config_path.to_path_buf(),
                source,
            })
        }
    };

    toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: config_path.to_path_buf(),
        source,
    })
}

/// Load and validate config.toml at `config_path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first run).
/// If the file is unreadable or unparseable, returns defaults with a warning
/// so the dialog still opens.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    let raw = match read_raw(config_path) {
        Ok(raw) => raw,
        Err(e) => {
            warnings.push(format!("{e}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    let mut config = AppConfig::default();

    // -- Paths --
    config.var_dir = raw
        .paths
        .var_dir
        .filter(|s| !s.is_empty())
        .map(PathBuf::from);
    config.bundled_filenames = raw
        .paths
        .bundled_filenames
        .filter(|s| !s.is_empty())
        .map(PathBuf::from);

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => {
                warnings.push(format!(
                    "[ui] theme = \"{other}\" is not recognised. Expected \"dark\" or \"light\". Using default (dark).",
                ));
            }
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
        } else {
            warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "[ui] font_size".to_string(),
                    value: size.to_string(),
                    expected: format!(
                        "{}-{}, using default ({})",
                        constants::MIN_FONT_SIZE,
                        constants::MAX_FONT_SIZE,
                        constants::DEFAULT_FONT_SIZE
                    ),
                }
                .to_string(),
            );
        }
    }

    // -- View: max_display_bytes --
    if let Some(bytes) = raw.view.max_display_bytes {
        if (constants::MIN_MAX_DISPLAY_BYTES..=constants::ABSOLUTE_MAX_DISPLAY_BYTES)
            .contains(&bytes)
        {
            config.max_display_bytes = bytes;
        } else {
            warnings.push(
                ConfigError::ValueOutOfRange {
                    field: "[view] max_display_bytes".to_string(),
                    value: bytes.to_string(),
                    expected: format!(
                        "{}-{}, using default ({})",
                        constants::MIN_MAX_DISPLAY_BYTES,
                        constants::ABSOLUTE_MAX_DISPLAY_BYTES,
                        constants::DEFAULT_MAX_DISPLAY_BYTES
                    ),
                }
                .to_string(),
            );
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    (config, warnings)
}

/// One-line summary of config warnings for the dialog's status line.
///
/// `None` when there is nothing to report; the details go to the log.
pub fn warning_summary(warnings: &[String]) -> Option<String> {
    match warnings.len() {
        0 => None,
        1 => Some("1 configuration warning, see log output".to_string()),
        n => Some(format!("{n} configuration warnings, see log output")),
    }
}
