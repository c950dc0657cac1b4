//! Small string helpers used by the scrapers and for logging.

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (backing off to a char
/// boundary) with an ellipsis and the dropped byte count appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}

/// Everything after the last `/` of a link.
///
/// `"/alice/my-post-1a2b"` gives `"my-post-1a2b"`; a trailing slash gives
/// an empty string, and a link with no slash is returned whole.
pub fn last_path_segment(link: &str) -> &str {
    link.rsplit('/').next().unwrap_or(link)
}

/// Collapse an element's text nodes and trim the result.
pub fn joined_trimmed<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts.collect::<String>().trim().to_string()
}
