// SysLogView - core/sanitize.rs
//
// Turns raw log file bytes into text that is safe to put in a text widget:
// encoding repair, ANSI escape removal, control character stripping.

use regex::Regex;
use std::sync::OnceLock;

/// Matches ANSI escape sequences:
/// - CSI: `ESC [` parameter bytes, intermediate bytes, one final byte
///   (colours, cursor movement, erase)
/// - OSC: `ESC ]` ... terminated by BEL or `ESC \` (window titles, links)
fn ansi_regex() -> &'static Regex {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    ANSI.get_or_init(|| {
        Regex::new(r"\x1b\[[\x30-\x3f]*[\x20-\x2f]*[\x40-\x7e]|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)")
            .expect("ansi_regex: invalid regex")
    })
}

/// Whether `c` is a control character removed from displayed text.
///
/// Covers 0x00-0x1F and 0x7F except LF (0x0A) and CR (0x0D).
fn is_stripped_control(c: char) -> bool {
    matches!(c, '\u{00}'..='\u{09}' | '\u{0b}' | '\u{0c}' | '\u{0e}'..='\u{1f}' | '\u{7f}')
}

/// Make raw file content displayable.
///
/// 1. Invalid UTF-8 sequences become U+FFFD.
/// 2. ANSI escape sequences are removed.
/// 3. Remaining ASCII control characters are removed, LF and CR are kept.
pub fn sanitize(raw: &[u8]) -> String {
    let decoded = String::from_utf8_lossy(raw);
    let without_ansi = ansi_regex().replace_all(&decoded, "");
    without_ansi
        .chars()
        .filter(|&c| !is_stripped_control(c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        let text = "Jan 01 00:00:00 host kernel: ok\r\nsecond line\n";
        assert_eq!(sanitize(text.as_bytes()), text);
    }

    #[test]
    fn test_invalid_utf8_replaced() {
        let raw = b"abc\xff\xfedef";
        let out = sanitize(raw);
        assert!(out.starts_with("abc"));
        assert!(out.ends_with("def"));
        assert!(out.contains('\u{fffd}'));
    }

    #[test]
    fn test_colour_codes_removed() {
        let raw = b"\x1b[1;31mERROR\x1b[0m disk \x1b[32mok\x1b[m\n";
        assert_eq!(sanitize(raw), "ERROR disk ok\n");
    }

    #[test]
    fn test_cursor_and_osc_sequences_removed() {
        let raw = b"\x1b[2K\x1b[1Gprogress\x1b]0;title\x07 done";
        assert_eq!(sanitize(raw), "progress done");
    }

    #[test]
    fn test_bare_escape_and_nul_removed() {
        assert_eq!(sanitize(b"hello\x1bworld\x00"), "helloworld");
    }

    #[test]
    fn test_all_control_bytes_stripped_except_lf_cr() {
        let mut raw: Vec<u8> = (0x00u8..=0x1f).collect();
        raw.push(0x7f);
        raw.extend_from_slice(b"\x1b[33mtext\x1b[0m");
        let out = sanitize(&raw);
        assert_eq!(out, "\n\rtext");
        assert!(!out.contains('\u{1b}'));
    }

    #[test]
    fn test_tab_is_stripped() {
        assert_eq!(sanitize(b"a\tb"), "ab");
    }
}
