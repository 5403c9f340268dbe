// SysLogView - app/view.rs
//
// The view loop as a state machine, independent of the GUI toolkit.
//
//   Viewing --SelectionChanged/Reload/Other--> Viewing    (content re-read)
//   Viewing --Ok-----------------------------> Terminated(Committed)
//   Viewing --Cancel-------------------------> Terminated(Aborted)
//
// The GUI translates widget events into `UserInput`; tests drive the same
// machine directly.

use crate::app::session::SessionState;
use crate::app::store::ConfigStore;
use crate::core::filelist::ConfigList;
use crate::core::sanitize::sanitize;
use crate::platform::fs;
use crate::util::constants::FILE_NOT_FOUND_TEXT;
use crate::util::error::StoreError;
use std::path::Path;

/// One user action delivered to the view loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    /// The combo box value changed (picked from the list or typed).
    SelectionChanged(String),
    /// Re-read the current file without changing the selection.
    Reload,
    /// "OK": close and remember the current file as default.
    Ok,
    /// "Cancel" or window close: close without saving.
    Cancel,
    /// Anything the loop has no handler for.
    Other(String),
}

/// How the dialog ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Committed,
    Aborted,
}

/// Lifecycle of the view loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Viewing,
    Terminated(Outcome),
}

/// Read `path` and make its content displayable.
///
/// Never fails: an empty path or unreadable file yields the
/// "File not found." placeholder.
pub fn read_for_display(path: &str, max_bytes: u64) -> String {
    if path.is_empty() {
        return FILE_NOT_FOUND_TEXT.to_string();
    }
    match fs::read_tail(Path::new(path), max_bytes) {
        Ok(raw) => sanitize(&raw),
        Err(e) => {
            tracing::debug!(path, error = %e, "Cannot read log file");
            FILE_NOT_FOUND_TEXT.to_string()
        }
    }
}

/// Drives a session from creation to commit or abort.
#[derive(Debug)]
pub struct ViewLoop {
    session: SessionState,
    list: ConfigList,
    max_display_bytes: u64,
    state: ViewState,
    content: String,
    title: String,
}

impl ViewLoop {
    /// Start viewing; the initial file is read immediately.
    pub fn new(session: SessionState, list: ConfigList, max_display_bytes: u64) -> Self {
        let mut view = Self {
            session,
            list,
            max_display_bytes,
            state: ViewState::Viewing,
            content: String::new(),
            title: String::new(),
        };
        view.refresh();
        view
    }

    /// Re-read and re-sanitize the current file and recompute the title.
    pub fn refresh(&mut self) {
        self.content = read_for_display(&self.session.current_filename, self.max_display_bytes);
        self.title = self.session.title();
    }

    /// Apply one input. Inputs after termination are ignored.
    pub fn handle(&mut self, input: UserInput) -> ViewState {
        if self.state != ViewState::Viewing {
            tracing::debug!(?input, "Input after dialog closed; ignored");
            return self.state;
        }

        match input {
            UserInput::SelectionChanged(filename) => {
                self.session.select(&filename);
                self.refresh();
            }
            UserInput::Reload => self.refresh(),
            UserInput::Ok => {
                self.session.running = false;
                self.state = ViewState::Terminated(Outcome::Committed);
                tracing::info!(file = %self.session.current_filename, "Dialog confirmed");
            }
            UserInput::Cancel => {
                self.state = ViewState::Terminated(Outcome::Aborted);
                tracing::info!("Dialog cancelled");
            }
            UserInput::Other(what) => {
                tracing::info!(input = %what, "Bad user input");
                self.refresh();
            }
        }
        self.state
    }

    /// Persist the selection if the dialog was confirmed.
    ///
    /// Returns `Ok(true)` on both commit and abort; the list is written only
    /// on commit.
    pub fn finish(&self, store: &ConfigStore) -> Result<bool, StoreError> {
        match self.state {
            ViewState::Terminated(Outcome::Committed) => {
                store.save(&self.session.current_filename, &self.list)?;
                Ok(true)
            }
            ViewState::Terminated(Outcome::Aborted) => Ok(true),
            ViewState::Viewing => {
                tracing::warn!("finish() called while still viewing; nothing saved");
                Ok(true)
            }
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Sanitized content of the current file.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Heading of the text pane: `System Log (<file>)`.
    pub fn title(&self) -> &str {
        &self.title
    }
}
