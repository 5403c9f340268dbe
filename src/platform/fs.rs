// SysLogView - platform/fs.rs
//
// Filesystem helpers: bounded reads of log files and atomic replacement
// of small text files.

use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

/// Read at most `max_bytes` from the end of the file at `path`.
///
/// Files up to `max_bytes` are returned whole. For larger files the tail is
/// returned, starting after the first newline inside the window so the view
/// never begins with half a line.
///
/// The reported size is only a hint: `/proc` files and character devices
/// report 0, so every read is capped at `max_bytes` regardless.
pub fn read_tail(path: &Path, max_bytes: u64) -> io::Result<Vec<u8>> {
    let mut file = std::fs::File::open(path)?;
    let len = file.metadata()?.len();

    if len <= max_bytes {
        let mut buf = Vec::new();
        (&mut file).take(max_bytes).read_to_end(&mut buf)?;
        return Ok(buf);
    }

    file.seek(SeekFrom::Start(len - max_bytes))?;
    let mut buf = Vec::with_capacity(max_bytes as usize);
    file.take(max_bytes).read_to_end(&mut buf)?;

    tracing::debug!(
        path = %path.display(),
        size = len,
        shown = max_bytes,
        "File exceeds display limit; showing tail"
    );

    match buf.iter().position(|&b| b == b'\n') {
        Some(pos) if pos + 1 < buf.len() => Ok(buf.split_off(pos + 1)),
        _ => Ok(buf),
    }
}

/// Replace the file at `path` with `content` atomically (write temp → rename).
///
/// Creates all parent directories as needed. A crash between write and
/// rename leaves the previous file intact.
pub fn write_atomic(path: &Path, content: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    std::fs::write(&tmp, content)?;

    std::fs::rename(&tmp, path).map_err(|e| {
        // Clean up the temp file on failure; ignore any secondary error.
        let _ = std::fs::remove_file(&tmp);
        e
    })
}
