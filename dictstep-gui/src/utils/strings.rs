//! String helpers for labels in the step list and dialog.

/// Truncates a string to a maximum character count, adding ellipsis if truncated.
///
/// Truncation happens at character boundaries, so multi-byte text is safe.
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Shortens a path for display by keeping its tail, where the file name is.
pub fn display_path(path: &str, max_chars: usize) -> String {
    let count = path.chars().count();
    if path.is_empty() {
        return "(none)".to_string();
    }
    if count <= max_chars {
        return path.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let tail: String = path.chars().skip(count - keep).collect();
    format!("...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_string_preserves_short_strings() {
        assert_eq!(truncate_string("Hello", 10), "Hello");
        assert_eq!(truncate_string("Test", 4), "Test");
    }

    #[test]
    fn truncate_string_adds_ellipsis() {
        assert_eq!(truncate_string("Hello World", 8), "Hello...");
        assert_eq!(truncate_string("世界世界世界", 5), "世界...");
    }

    #[test]
    fn display_path_keeps_file_name() {
        assert_eq!(display_path("", 10), "(none)");
        assert_eq!(display_path("/a/b.json", 20), "/a/b.json");
        assert_eq!(display_path("/very/long/dir/input.json", 13), "...input.json");
    }
}
