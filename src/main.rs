// SysLogView - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing ("help" prints usage and exits)
// 2. config.toml loading and logging initialisation
// 3. Loading the known-files list and building the session
// 4. eframe GUI launch

mod gui;

pub use syslogview::app;
pub use syslogview::core;
pub use syslogview::platform;
pub use syslogview::ui;
pub use syslogview::util;

use crate::app::session::{LaunchMode, SessionState};
use crate::app::store::ConfigStore;
use crate::app::view::ViewLoop;
use crate::core::filelist::ConfigList;
use crate::util::error::{Result, ViewerError};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// SysLogView - browse and view system log files.
///
/// Shows one log file at a time; the file shown when the dialog is
/// confirmed with OK becomes the default for the next start.
#[derive(Parser, Debug)]
#[command(name = "syslogview", version, about)]
struct Cli {
    /// Log file to show, or "help" to print this usage.
    filename: Option<String>,

    /// Directory holding the persisted `filenames` list.
    #[arg(long = "var-dir")]
    var_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "SysLogView failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Resolve paths and read config.toml before logging starts so the
    // configured level takes effect; warnings are reported right after.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) =
        platform::config::load_config(&platform_paths.config_file());

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "SysLogView starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    let requested = match LaunchMode::from_argument(cli.filename.as_deref()) {
        LaunchMode::Help => {
            if let Err(e) = Cli::command().print_long_help() {
                tracing::error!(error = %e, "Failed to print usage");
            }
            return Ok(());
        }
        LaunchMode::View { filename } => filename,
    };

    let var_dir = config.resolve_var_dir(cli.var_dir.as_deref(), &platform_paths);
    let store = ConfigStore::new(&var_dir).with_bundled(config.bundled_filenames.clone());

    let list = match store.load() {
        Ok(list) => list,
        Err(e) => {
            tracing::error!(error = %e, "Could not load file list; offering built-in files only");
            let mut list = ConfigList::new();
            list.merge_builtins(util::constants::BUILTIN_FILENAMES);
            list
        }
    };

    let session = SessionState::new(&list, requested.as_deref());
    let view = ViewLoop::new(session, list, config.max_display_bytes);

    let status = platform::config::warning_summary(&config_warnings);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size(ui::theme::WINDOW_SIZE)
            .with_min_inner_size(ui::theme::MIN_WINDOW_SIZE)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    let dark_mode = config.dark_mode;
    let font_size = config.font_size;
    eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, dark_mode, font_size);
            Ok(Box::new(gui::SysLogViewApp::new(view, store, status)))
        }),
    )
    .map_err(|e| ViewerError::Gui(e.to_string()))?;

    tracing::info!("SysLogView finished");
    Ok(())
}
