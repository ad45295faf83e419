//! Navigation Model
//!
//! The current remote directory, the listing rendered for it, and the
//! bookkeeping that keeps the two consistent.

use crate::api::DirectoryEntry;

/// Navigation state (current path, listing, selection)
#[derive(Clone, Debug)]
pub struct NavigationModel {
    /// Remote directory being shown, `""` is the root
    pub current_path: String,

    /// Listing of `current_path`, in backend order
    pub entries: Vec<DirectoryEntry>,

    /// Selected row in the file list
    pub selected_index: Option<usize>,

    /// A listing request is in flight
    pub loading: bool,

    /// Sequence token of the most recent listing request, if unanswered
    pub pending_list_seq: Option<u64>,

    /// Path that unanswered listing request is for
    pub pending_path: Option<String>,
}

impl NavigationModel {
    /// Create initial navigation model at the root with nothing loaded
    pub fn new() -> Self {
        Self {
            current_path: String::new(),
            entries: Vec::new(),
            selected_index: None,
            loading: false,
            pending_list_seq: None,
            pending_path: None,
        }
    }

    /// Currently selected entry
    pub fn selected_entry(&self) -> Option<&DirectoryEntry> {
        self.selected_index.and_then(|idx| self.entries.get(idx))
    }

    /// Directory a refresh should list: the one being navigated to, if any
    pub fn refresh_target(&self) -> &str {
        self.pending_path.as_deref().unwrap_or(&self.current_path)
    }

    /// Whether a listing response with `seq` is the one we are waiting for
    pub fn is_current_listing(&self, seq: u64) -> bool {
        self.pending_list_seq == Some(seq)
    }
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::EntryType;

    #[test]
    fn test_navigation_model_creation() {
        let model = NavigationModel::new();
        assert_eq!(model.current_path, "");
        assert!(model.selected_index.is_none());
        assert!(!model.loading);
    }

    #[test]
    fn test_selected_entry() {
        let mut model = NavigationModel::new();
        model.entries.push(DirectoryEntry {
            name: "docs".to_string(),
            entry_type: EntryType::Directory,
            size: None,
            modified: None,
        });
        assert!(model.selected_entry().is_none());

        model.selected_index = Some(0);
        assert_eq!(model.selected_entry().map(|e| e.name.as_str()), Some("docs"));

        model.selected_index = Some(5);
        assert!(model.selected_entry().is_none());
    }

    #[test]
    fn test_is_current_listing() {
        let mut model = NavigationModel::new();
        assert!(!model.is_current_listing(1));
        model.pending_list_seq = Some(2);
        assert!(!model.is_current_listing(1));
        assert!(model.is_current_listing(2));
    }

    #[test]
    fn test_refresh_target_prefers_pending_navigation() {
        let mut model = NavigationModel::new();
        model.current_path = "docs".to_string();
        assert_eq!(model.refresh_target(), "docs");

        model.pending_path = Some("music".to_string());
        assert_eq!(model.refresh_target(), "music");
    }
}
