//! Dialog input validation
//!
//! Decides locally, before any request, whether a dialog submission is valid.

use std::path::PathBuf;

/// Trimmed folder name, or `None` when the dialog must refuse to submit
pub fn folder_name(input: &str) -> Option<String> {
    let name = input.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// New name for a rename, or `None` when nothing should be sent
///
/// # Examples
/// ```
/// use filetui::logic::dialogs::rename_target;
///
/// assert_eq!(rename_target("a.txt", "  b.txt "), Some("b.txt".to_string()));
/// assert_eq!(rename_target("a.txt", " a.txt"), None);
/// assert_eq!(rename_target("a.txt", "   "), None);
/// ```
pub fn rename_target(original: &str, input: &str) -> Option<String> {
    let name = input.trim();
    if name.is_empty() || name == original {
        None
    } else {
        Some(name.to_string())
    }
}

/// Turn typed upload input into a local path, expanding a leading `~`
pub fn local_upload_path(input: &str) -> Option<PathBuf> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if input == "~" {
        return dirs::home_dir().or_else(|| Some(PathBuf::from(input)));
    }
    if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Some(home.join(rest));
        }
    }

    Some(PathBuf::from(input))
}

/// Confirmation text of the delete dialog
pub fn delete_message(name: &str) -> String {
    format!("Are you sure you want to delete \"{}\"?", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_name_trims() {
        assert_eq!(folder_name("  photos "), Some("photos".to_string()));
    }

    #[test]
    fn test_folder_name_rejects_blank() {
        assert_eq!(folder_name(""), None);
        assert_eq!(folder_name(" \t "), None);
    }

    #[test]
    fn test_rename_unchanged_after_trim() {
        assert_eq!(rename_target("old", "old   "), None);
    }

    #[test]
    fn test_rename_empty() {
        assert_eq!(rename_target("old", ""), None);
    }

    #[test]
    fn test_rename_changed() {
        assert_eq!(rename_target("old", "new"), Some("new".to_string()));
    }

    #[test]
    fn test_local_upload_path() {
        assert_eq!(local_upload_path("   "), None);
        assert_eq!(
            local_upload_path(" /tmp/song.mp3 "),
            Some(PathBuf::from("/tmp/song.mp3"))
        );
    }

    #[test]
    fn test_local_upload_path_expands_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(local_upload_path("~/a.png"), Some(home.join("a.png")));
        }
    }

    #[test]
    fn test_delete_message() {
        assert_eq!(
            delete_message("old"),
            "Are you sure you want to delete \"old\"?"
        );
    }
}
