//! Remote Path Utilities
//!
//! Remote paths are slash-delimited and relative to the server root.
//! The empty string is the root itself.

/// Compose the remote path of `name` inside `dir`
///
/// # Examples
/// ```
/// use filetui::logic::path::join_path;
///
/// assert_eq!(join_path("", "docs"), "docs");
/// assert_eq!(join_path("docs", "photos"), "docs/photos");
/// assert_eq!(join_path("docs/2024", "a.txt"), "docs/2024/a.txt");
/// ```
pub fn join_path(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Parent of a remote path, `None` at the root
///
/// ```
/// use filetui::logic::path::parent_path;
///
/// assert_eq!(parent_path(""), None);
/// assert_eq!(parent_path("docs"), Some(String::new()));
/// assert_eq!(parent_path("docs/photos"), Some("docs".to_string()));
/// ```
pub fn parent_path(path: &str) -> Option<String> {
    let segments = path_segments(path);
    if segments.is_empty() {
        return None;
    }
    Some(segments[..segments.len() - 1].join("/"))
}

/// Non-empty segments of a path
pub fn path_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Each segment paired with the cumulative path up to and including it
///
/// `"a/b/c"` yields `[("a", "a"), ("b", "a/b"), ("c", "a/b/c")]`.
pub fn cumulative_segments(path: &str) -> Vec<(String, String)> {
    let mut cumulative = String::new();
    path_segments(path)
        .into_iter()
        .map(|segment| {
            cumulative = join_path(&cumulative, segment);
            (segment.to_string(), cumulative.clone())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path_root() {
        assert_eq!(join_path("", "old"), "old");
    }

    #[test]
    fn test_join_path_nested() {
        assert_eq!(join_path("docs", "a.txt"), "docs/a.txt");
        assert_eq!(join_path("docs/photos", "b.png"), "docs/photos/b.png");
    }

    #[test]
    fn test_path_segments_skips_empty() {
        assert_eq!(path_segments(""), Vec::<&str>::new());
        assert_eq!(path_segments("/docs//photos/"), vec!["docs", "photos"]);
    }

    #[test]
    fn test_cumulative_segments() {
        assert_eq!(
            cumulative_segments("music/live/2024"),
            vec![
                ("music".to_string(), "music".to_string()),
                ("live".to_string(), "music/live".to_string()),
                ("2024".to_string(), "music/live/2024".to_string()),
            ]
        );
    }

    #[test]
    fn test_cumulative_segments_normalizes_slashes() {
        let segments = cumulative_segments("/a//b/");
        assert_eq!(segments[1].1, "a/b");
    }

    #[test]
    fn test_parent_path() {
        assert_eq!(parent_path("a/b/c"), Some("a/b".to_string()));
        assert_eq!(parent_path("a"), Some(String::new()));
        assert_eq!(parent_path(""), None);
    }
}
