//! Text Helpers
//!
//! Character-count truncation and date display shared by cards and tables.

use chrono::{DateTime, Utc};

/// Ellipsis appended to truncated previews
pub const ELLIPSIS: &str = "...";

/// First `max` characters of `text`; may cut mid-word
pub fn prefix_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Prefix of at most `max` characters, with an ellipsis only when cut
pub fn preview(text: &str, max: usize) -> String {
    let head = prefix_chars(text, max);
    if head.len() < text.len() {
        format!("{}{}", head, ELLIPSIS)
    } else {
        head.to_string()
    }
}

/// Long US date, e.g. `January 5, 2024`
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}

/// Treat empty and whitespace-only optionals as absent
pub(crate) fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_prefix_chars_counts_characters() {
        assert_eq!(prefix_chars("héllo wörld", 7), "héllo w");
        assert_eq!(prefix_chars("short", 50), "short");
        assert_eq!(prefix_chars("", 3), "");
    }

    #[test]
    fn test_preview_ellipsis_only_when_cut() {
        assert_eq!(preview("abcdef", 3), "abc...");
        assert_eq!(preview("abc", 3), "abc");
        assert_eq!(preview("ab", 3), "ab");
    }

    #[test]
    fn test_format_date() {
        let at = Utc.with_ymd_and_hms(2024, 1, 5, 10, 30, 0).unwrap();
        assert_eq!(format_date(&at), "January 5, 2024");
    }
}
