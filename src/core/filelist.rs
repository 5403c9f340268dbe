// SysLogView - core/filelist.rs
//
// In-memory model of the persisted `filenames` list.
// Pure data and text transformations: no I/O, no UI.
//
// On-disk format (kept byte-compatible with existing installations):
//   - one path per line, `\n` separated
//   - lines starting with `#` are comments
//   - a line starting with `*` is the default file; the `*` is not part of
//     the path

use crate::util::constants::{COMMENT_MARKER, DEFAULT_MARKER};

// =============================================================================
// FileEntry
// =============================================================================

/// A known log file path, optionally flagged as the default selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path exactly as written in the list, without the default marker.
    pub path: String,

    /// Whether this entry carries the default marker.
    pub is_default: bool,
}

impl FileEntry {
    /// A plain (non-default) entry.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_default: false,
        }
    }

    /// An entry carrying the default marker.
    pub fn marked_default(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_default: true,
        }
    }

    /// Render the entry as a single list line.
    pub fn to_line(&self) -> String {
        if self.is_default {
            format!("{DEFAULT_MARKER}{}", self.path)
        } else {
            self.path.clone()
        }
    }
}

// =============================================================================
// ConfigLine / ConfigList
// =============================================================================

/// One line of the persisted list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLine {
    Entry(FileEntry),
    Comment(String),
    Blank,
}

impl ConfigLine {
    /// Classify a single raw line (without its `\n`).
    pub fn parse(raw: &str) -> Self {
        // Tolerate lists edited on Windows.
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if line.trim().is_empty() {
            return Self::Blank;
        }
        if line.starts_with(COMMENT_MARKER) {
            return Self::Comment(line.to_string());
        }
        match line.strip_prefix(DEFAULT_MARKER) {
            Some("") => Self::Blank,
            Some(path) => Self::Entry(FileEntry::marked_default(path)),
            None => Self::Entry(FileEntry::new(line)),
        }
    }
}

/// Ordered, deduplicated list of known log files.
///
/// Invariants:
/// - every path appears in at most one `Entry` line
/// - at most one entry has `is_default` set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigList {
    lines: Vec<ConfigLine>,
}

impl ConfigList {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the text content of a `filenames` file.
    ///
    /// Only the first `*` line is honoured as default; any later marked line
    /// is kept as a plain entry. Duplicate paths keep their first position.
    pub fn parse(text: &str) -> Self {
        let mut list = Self::new();
        for raw in text.split('\n') {
            match ConfigLine::parse(raw) {
                ConfigLine::Entry(entry) => {
                    list.push_entry(entry);
                }
                other => list.lines.push(other),
            }
        }
        list
    }

    /// Append `entry` unless its path is already listed.
    ///
    /// A default marker on a duplicate is transferred to the existing entry
    /// when the list has no default yet. Returns `true` if a new line was
    /// appended.
    pub fn push_entry(&mut self, mut entry: FileEntry) -> bool {
        let has_default = self.default_entry().is_some();

        if let Some(existing) = self.entry_mut(&entry.path) {
            if entry.is_default && !has_default {
                existing.is_default = true;
            }
            return false;
        }

        if has_default {
            entry.is_default = false;
        }
        self.lines.push(ConfigLine::Entry(entry));
        true
    }

    /// Append every built-in path that is not already listed.
    pub fn merge_builtins(&mut self, builtins: &[&str]) {
        for path in builtins {
            if self.push_entry(FileEntry::new(*path)) {
                tracing::debug!(path, "Added built-in log file to list");
            }
        }
    }

    /// All lines, including comments and blanks, in file order.
    pub fn lines(&self) -> &[ConfigLine] {
        &self.lines
    }

    /// File entries in list order.
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        self.lines.iter().filter_map(|line| match line {
            ConfigLine::Entry(entry) => Some(entry),
            _ => None,
        })
    }

    /// The entry carrying the default marker, if any.
    pub fn default_entry(&self) -> Option<&FileEntry> {
        self.entries().find(|e| e.is_default)
    }

    /// Whether `path` is listed.
    pub fn contains(&self, path: &str) -> bool {
        self.entries().any(|e| e.path == path)
    }

    /// Number of file entries.
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entry_mut(&mut self, path: &str) -> Option<&mut FileEntry> {
        self.lines.iter_mut().find_map(|line| match line {
            ConfigLine::Entry(entry) if entry.path == path => Some(entry),
            _ => None,
        })
    }

    /// Derive the list to persist after `filename` was the last file viewed.
    ///
    /// - the previous default keeps its marker only if it is `filename`
    /// - a plain entry equal to `filename` gains the marker
    /// - `filename` is appended as default if it was never listed
    /// - comments and blank lines are dropped
    ///
    /// An empty `filename` leaves the result without any default.
    pub fn with_default(&self, filename: &str) -> Self {
        let mut updated = Self::new();
        let mut default_set = false;

        for entry in self.entries() {
            let is_default = entry.path == filename;
            default_set |= is_default;
            updated.push_entry(FileEntry {
                path: entry.path.clone(),
                is_default,
            });
        }

        if !default_set && !filename.is_empty() {
            updated.push_entry(FileEntry::marked_default(filename));
        }

        updated
    }

    /// Render the entries as file content: one per line, trailing newline.
    pub fn render(&self) -> String {
        let mut out = self
            .entries()
            .map(FileEntry::to_line)
            .collect::<Vec<_>>()
            .join("\n");
        out.push('\n');
        out
    }
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::constants::BUILTIN_FILENAMES;

    fn paths(list: &ConfigList) -> Vec<&str> {
        list.entries().map(|e| e.path.as_str()).collect()
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let list = ConfigList::parse("# header\n\n/var/log/a.log\n   \n#/var/log/hidden\n");
        assert_eq!(paths(&list), vec!["/var/log/a.log"]);
        assert_eq!(
            list.lines()
                .iter()
                .filter(|l| matches!(l, ConfigLine::Comment(_)))
                .count(),
            2
        );
    }

    #[test]
    fn test_parse_strips_default_marker() {
        let list = ConfigList::parse("/var/log/a.log\n*/var/log/b.log\n");
        let default = list.default_entry().expect("default present");
        assert_eq!(default.path, "/var/log/b.log");
        assert_eq!(paths(&list), vec!["/var/log/a.log", "/var/log/b.log"]);
    }

    #[test]
    fn test_parse_honours_only_first_default() {
        let list = ConfigList::parse("*/var/log/a.log\n*/var/log/b.log\n");
        let defaults: Vec<_> = list.entries().filter(|e| e.is_default).collect();
        assert_eq!(defaults.len(), 1);
        assert_eq!(defaults[0].path, "/var/log/a.log");
        assert!(list.contains("/var/log/b.log"));
    }

    #[test]
    fn test_parse_deduplicates_paths() {
        let list = ConfigList::parse("/var/log/a.log\n/var/log/b.log\n/var/log/a.log\n");
        assert_eq!(paths(&list), vec!["/var/log/a.log", "/var/log/b.log"]);
    }

    #[test]
    fn test_marked_duplicate_transfers_default() {
        let list = ConfigList::parse("/var/log/a.log\n*/var/log/a.log\n");
        assert_eq!(list.len(), 1);
        assert!(list.default_entry().is_some());
    }

    #[test]
    fn test_parse_tolerates_crlf() {
        let list = ConfigList::parse("*/var/log/a.log\r\n/var/log/b.log\r\n");
        assert_eq!(paths(&list), vec!["/var/log/a.log", "/var/log/b.log"]);
    }

    #[test]
    fn test_lone_marker_is_blank() {
        let list = ConfigList::parse("*\n/var/log/a.log\n");
        assert_eq!(paths(&list), vec!["/var/log/a.log"]);
        assert!(list.default_entry().is_none());
    }

    #[test]
    fn test_merge_builtins_into_empty_list() {
        let mut list = ConfigList::parse("");
        list.merge_builtins(BUILTIN_FILENAMES);
        assert_eq!(paths(&list), BUILTIN_FILENAMES.to_vec());
        assert!(list.default_entry().is_none());
    }

    #[test]
    fn test_merge_builtins_keeps_existing_marker() {
        let mut list = ConfigList::parse("*/var/log/messages\n");
        list.merge_builtins(BUILTIN_FILENAMES);
        assert_eq!(list.len(), 3);
        assert_eq!(list.default_entry().unwrap().path, "/var/log/messages");
    }

    #[test]
    fn test_with_default_moves_marker() {
        let list = ConfigList::parse("*/var/log/a.log\n/var/log/b.log\n");
        let updated = list.with_default("/var/log/b.log");
        assert_eq!(updated.render(), "/var/log/a.log\n*/var/log/b.log\n");
    }

    #[test]
    fn test_with_default_keeps_unchanged_default() {
        let list = ConfigList::parse("*/var/log/a.log\n/var/log/b.log\n");
        let updated = list.with_default("/var/log/a.log");
        assert_eq!(updated.render(), "*/var/log/a.log\n/var/log/b.log\n");
    }

    #[test]
    fn test_with_default_appends_unknown_file() {
        let list = ConfigList::parse("*/var/log/a.log\n");
        let updated = list.with_default("/tmp/custom.log");
        assert_eq!(updated.render(), "/var/log/a.log\n*/tmp/custom.log\n");
    }

    #[test]
    fn test_with_default_drops_comments() {
        let list = ConfigList::parse("# comment\n/var/log/a.log\n\n");
        let updated = list.with_default("/var/log/a.log");
        assert_eq!(updated.render(), "*/var/log/a.log\n");
    }

    #[test]
    fn test_with_empty_filename_clears_default() {
        let list = ConfigList::parse("*/var/log/a.log\n");
        let updated = list.with_default("");
        assert_eq!(updated.render(), "/var/log/a.log\n");
    }

    #[test]
    fn test_with_default_exactly_one_marker() {
        // Several marked lines in the input must collapse to one marker.
        let list = ConfigList::parse("*/a\n*/b\n*/c\n/d\n");
        for target in ["/a", "/b", "/c", "/d", "/e"] {
            let rendered = list.with_default(target).render();
            let marked: Vec<_> = rendered.lines().filter(|l| l.starts_with('*')).collect();
            assert_eq!(marked, vec![format!("*{target}")], "target {target}");
        }
    }

    #[test]
    fn test_with_default_is_idempotent() {
        let list = ConfigList::parse("*/var/log/a.log\n/var/log/b.log\n");
        let once = list.with_default("/tmp/new.log");
        let twice = ConfigList::parse(&once.render()).with_default("/tmp/new.log");
        assert_eq!(once.render(), twice.render());
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(ConfigList::new().render(), "\n");
    }
}
