// SysLogView - app/store.rs
//
// Persistence of the known-files list at `<var-dir>/filenames`.
//
// - First run: the list is bootstrapped from the system-provided default
//   (config.toml `[paths] bundled_filenames`) or, failing that, from the
//   copy compiled into the binary.
// - Saves are atomic (write temp → rename). There is no locking: the last
//   writer wins.

use crate::core::filelist::ConfigList;
use crate::platform::fs;
use crate::util::constants::{BUILTIN_FILENAMES, BUNDLED_FILENAMES, FILENAMES_FILE_NAME};
use crate::util::error::StoreError;
use std::path::{Path, PathBuf};

/// Reads and writes the persisted list of known log files.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    bundled: Option<PathBuf>,
}

impl ConfigStore {
    /// Store for the list inside `var_dir`.
    pub fn new(var_dir: &Path) -> Self {
        Self {
            path: var_dir.join(FILENAMES_FILE_NAME),
            bundled: None,
        }
    }

    /// Use `bundled` as the first-run template instead of the built-in copy.
    pub fn with_bundled(mut self, bundled: Option<PathBuf>) -> Self {
        self.bundled = bundled;
        self
    }

    /// Path of the persisted list.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the list content, reporting absence as `StoreError::NotFound`.
    fn read_text(&self) -> Result<String, StoreError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(StoreError::NotFound {
                path: self.path.clone(),
            }),
            Err(source) => Err(StoreError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Copy the default list into place.
    fn install_default(&self) -> Result<(), StoreError> {
        let template = match &self.bundled {
            Some(bundled) => std::fs::read(bundled).unwrap_or_else(|e| {
                tracing::warn!(
                    bundled = %bundled.display(),
                    error = %e,
                    "Bundled file list unreadable; using built-in copy"
                );
                BUNDLED_FILENAMES.as_bytes().to_vec()
            }),
            None => BUNDLED_FILENAMES.as_bytes().to_vec(),
        };

        fs::write_atomic(&self.path, &template).map_err(|source| StoreError::Bootstrap {
            path: self.path.clone(),
            source,
        })?;

        tracing::info!(path = %self.path.display(), "Installed default file list");
        Ok(())
    }

    /// Load the list, merged with the built-in log files.
    ///
    /// A missing list is bootstrapped from the bundled default first.
    pub fn load(&self) -> Result<ConfigList, StoreError> {
        let text = match self.read_text() {
            Ok(text) => text,
            Err(e) if e.is_not_found() => {
                tracing::debug!(path = %self.path.display(), "No file list yet");
                self.install_default()?;
                self.read_text()?
            }
            Err(e) => return Err(e),
        };

        let mut list = ConfigList::parse(&text);
        list.merge_builtins(BUILTIN_FILENAMES);

        tracing::info!(
            path = %self.path.display(),
            entries = list.len(),
            default = list.default_entry().map(|e| e.path.as_str()).unwrap_or(""),
            "File list loaded"
        );
        Ok(list)
    }

    /// Persist `list` with `filename` as the new default.
    ///
    /// Returns the list as written.
    pub fn save(&self, filename: &str, list: &ConfigList) -> Result<ConfigList, StoreError> {
        let updated = list.with_default(filename);

        fs::write_atomic(&self.path, updated.render().as_bytes()).map_err(|source| {
            StoreError::Write {
                path: self.path.clone(),
                source,
            }
        })?;

        tracing::info!(
            path = %self.path.display(),
            default = filename,
            entries = updated.len(),
            "File list saved"
        );
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths(list: &ConfigList) -> Vec<String> {
        list.entries().map(|e| e.path.clone()).collect()
    }

    #[test]
    fn test_load_bootstraps_from_builtin_copy() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::new(dir.path());

        let list = store.load().unwrap();

        assert!(store.path().exists(), "file list must be installed");
        assert_eq!(
            std::fs::read_to_string(store.path()).unwrap(),
            BUNDLED_FILENAMES
        );
        assert_eq!(list.default_entry().unwrap().path, "/var/log/messages");
        for builtin in BUILTIN_FILENAMES {
            assert!(list.contains(builtin), "missing built-in {builtin}");
        }
    }

    #[test]
    fn test_load_bootstraps_from_configured_template() {
        let dir = TempDir::new().unwrap();
        let template = dir.path().join("template");
        std::fs::write(&template, "*/srv/app.log\n").unwrap();
        let store = ConfigStore::new(&dir.path().join("var")).with_bundled(Some(template));

        let list = store.load().unwrap();

        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "*/srv/app.log\n");
        assert_eq!(list.default_entry().unwrap().path, "/srv/app.log");
    }

    #[test]
    fn test_load_missing_template_falls_back_to_builtin_copy() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::new(dir.path()).with_bundled(Some(dir.path().join("absent")));
        store.load().unwrap();
        assert_eq!(
            std::fs::read_to_string(store.path()).unwrap(),
            BUNDLED_FILENAMES
        );
    }

    #[test]
    fn test_load_empty_list_yields_builtins_only() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::new(dir.path());
        std::fs::write(store.path(), "").unwrap();

        let list = store.load().unwrap();

        assert_eq!(paths(&list), BUILTIN_FILENAMES.to_vec());
        assert!(list.default_entry().is_none());
    }

    #[test]
    fn test_save_marks_selected_file() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::new(dir.path());
        std::fs::write(store.path(), "*/var/log/messages\n/var/log/zypper.log\n").unwrap();

        let list = store.load().unwrap();
        store.save("/var/log/zypper.log", &list).unwrap();

        let saved = std::fs::read_to_string(store.path()).unwrap();
        let marked: Vec<_> = saved.lines().filter(|l| l.starts_with('*')).collect();
        assert_eq!(marked, vec!["*/var/log/zypper.log"]);
        assert!(saved.starts_with("/var/log/messages\n"), "{saved}");
        assert!(saved.ends_with('\n'));
    }

    #[test]
    fn test_save_twice_is_identical() {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::new(dir.path());
        let list = store.load().unwrap();

        store.save("/tmp/custom.log", &list).unwrap();
        let first = std::fs::read_to_string(store.path()).unwrap();
        store.save("/tmp/custom.log", &list).unwrap();
        let second = std::fs::read_to_string(store.path()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_save_unwritable_location_errors() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let store = ConfigStore::new(&blocker);

        let err = store.save("/var/log/messages", &ConfigList::new()).unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }), "got {err:?}");
    }
}
