// SysLogView - app/session.rs
//
// Selection session: which file is shown and which files the combo box
// offers. Created once at startup from the persisted list and the command
// line; owned by the view loop until the dialog closes.

use crate::core::filelist::{ConfigList, FileEntry};
use crate::util::constants::HELP_ARGUMENT;

/// What the positional command-line argument asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchMode {
    /// Print command-line usage; the dialog is never opened.
    Help,
    /// Open the dialog, optionally pre-selecting a file.
    View { filename: Option<String> },
}

impl LaunchMode {
    /// Interpret the optional positional argument.
    pub fn from_argument(arg: Option<&str>) -> Self {
        match arg {
            Some(HELP_ARGUMENT) => Self::Help,
            Some(name) if !name.is_empty() => Self::View {
                filename: Some(name.to_string()),
            },
            _ => Self::View { filename: None },
        }
    }
}

/// State of one viewing session.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// File currently shown in the text pane. Empty if nothing is selected.
    pub current_filename: String,

    /// Combo box items. `is_default` flags the item that is selected.
    pub entries: Vec<FileEntry>,

    /// False once the user has confirmed the dialog.
    pub running: bool,
}

impl SessionState {
    /// Build the initial session.
    ///
    /// The initial file is `requested` when given, otherwise the list's
    /// default entry, otherwise the first entry.
    pub fn new(list: &ConfigList, requested: Option<&str>) -> Self {
        let requested = requested.filter(|name| !name.is_empty());

        let (current_filename, entries) = match requested {
            Some(name) => {
                let mut entries = vec![FileEntry::marked_default(name)];
                entries.extend(
                    list.entries()
                        .filter(|e| e.path != name)
                        .map(|e| FileEntry::new(e.path.clone())),
                );
                (name.to_string(), entries)
            }
            None => {
                let mut entries: Vec<FileEntry> = list.entries().cloned().collect();
                if !entries.iter().any(|e| e.is_default) {
                    if let Some(first) = entries.first_mut() {
                        first.is_default = true;
                    }
                }
                let current = entries
                    .iter()
                    .find(|e| e.is_default)
                    .map(|e| e.path.clone())
                    .unwrap_or_default();
                (current, entries)
            }
        };

        tracing::debug!(
            file = %current_filename,
            entries = entries.len(),
            "Session created"
        );

        Self {
            current_filename,
            entries,
            running: true,
        }
    }

    /// Switch to `filename`, adding it to the combo items if it is new.
    ///
    /// Returns `true` if the shown file changed.
    pub fn select(&mut self, filename: &str) -> bool {
        if filename == self.current_filename {
            return false;
        }

        if !filename.is_empty() && !self.entries.iter().any(|e| e.path == filename) {
            self.entries.push(FileEntry::new(filename));
        }
        for entry in &mut self.entries {
            entry.is_default = entry.path == filename;
        }

        tracing::debug!(from = %self.current_filename, to = filename, "Selection changed");
        self.current_filename = filename.to_string();
        true
    }

    /// Heading of the text pane.
    pub fn title(&self) -> String {
        format!("System Log ({})", self.current_filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(text: &str) -> ConfigList {
        ConfigList::parse(text)
    }

    fn items(session: &SessionState) -> Vec<&str> {
        session.entries.iter().map(|e| e.path.as_str()).collect()
    }

    #[test]
    fn test_launch_mode_help() {
        assert_eq!(LaunchMode::from_argument(Some("help")), LaunchMode::Help);
    }

    #[test]
    fn test_launch_mode_filename_and_empty() {
        assert_eq!(
            LaunchMode::from_argument(Some("/tmp/custom.log")),
            LaunchMode::View {
                filename: Some("/tmp/custom.log".to_string())
            }
        );
        assert_eq!(
            LaunchMode::from_argument(Some("")),
            LaunchMode::View { filename: None }
        );
        assert_eq!(
            LaunchMode::from_argument(None),
            LaunchMode::View { filename: None }
        );
    }

    #[test]
    fn test_requested_file_comes_first_and_is_selected() {
        let session = SessionState::new(&list("*/a\n/b\n/c\n"), Some("/b"));
        assert_eq!(session.current_filename, "/b");
        assert_eq!(items(&session), vec!["/b", "/a", "/c"]);
        let selected: Vec<_> = session.entries.iter().filter(|e| e.is_default).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].path, "/b");
        assert!(session.running);
    }

    #[test]
    fn test_stored_default_is_selected_without_argument() {
        let session = SessionState::new(&list("/a\n*/b\n"), None);
        assert_eq!(session.current_filename, "/b");
        assert_eq!(items(&session), vec!["/a", "/b"]);
    }

    #[test]
    fn test_first_entry_is_selected_without_default() {
        let session = SessionState::new(&list("/a\n/b\n"), None);
        assert_eq!(session.current_filename, "/a");
        assert!(session.entries[0].is_default);
    }

    #[test]
    fn test_empty_list_has_no_selection() {
        let session = SessionState::new(&ConfigList::new(), None);
        assert_eq!(session.current_filename, "");
        assert!(session.entries.is_empty());
        assert_eq!(session.title(), "System Log ()");
    }

    #[test]
    fn test_select_known_and_new_file() {
        let mut session = SessionState::new(&list("*/a\n/b\n"), None);

        assert!(session.select("/b"));
        assert_eq!(session.current_filename, "/b");
        assert_eq!(items(&session), vec!["/a", "/b"]);

        assert!(session.select("/tmp/typed.log"));
        assert_eq!(items(&session), vec!["/a", "/b", "/tmp/typed.log"]);
        assert!(session.entries[2].is_default);
        assert!(!session.entries[1].is_default);

        assert!(!session.select("/tmp/typed.log"));
    }

    #[test]
    fn test_title_format() {
        let session = SessionState::new(&ConfigList::new(), Some("/tmp/custom.log"));
        assert_eq!(session.title(), "System Log (/tmp/custom.log)");
    }
}
