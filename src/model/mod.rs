//! Pure Application Model
//!
//! The Model is the whole session state of the client, passed explicitly to
//! every controller instead of living in globals:
//!
//! - **NavigationModel**: current remote directory, its listing, selection,
//!   loading flag and listing sequence tokens
//! - **UiModel**: preferences, the open dialog, the toast, mouse hit zones
//!
//! Key principles:
//! - Clone + Debug: can snapshot and compare state in tests
//! - No services: all I/O lives in the API service worker
//! - Pure accessors: helper methods are side-effect free

pub mod navigation;
pub mod types;
pub mod ui;

pub use navigation::NavigationModel;
pub use types::*;
pub use ui::UiModel;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Current directory and its listing
    pub navigation: NavigationModel,

    /// Dialogs, toast and preferences
    pub ui: UiModel,

    /// Last token handed out for a request (listing sequence or dialog ticket)
    last_token: u64,
}

impl Model {
    /// Create initial model at the server root
    pub fn new(vim_mode: bool) -> Self {
        Self {
            navigation: NavigationModel::new(),
            ui: UiModel::new(vim_mode),
            last_token: 0,
        }
    }

    /// Allocate a fresh, strictly increasing request token
    pub fn issue_token(&mut self) -> u64 {
        self.last_token += 1;
        self.last_token
    }

    /// Check if any modal dialog is showing
    pub fn has_modal(&self) -> bool {
        self.ui.dialog.is_some()
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: impl Into<String>, is_error: bool) {
        self.ui.show_toast(message, is_error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_creation() {
        let model = Model::new(false);
        assert_eq!(model.navigation.current_path, "");
        assert!(model.navigation.entries.is_empty());
        assert!(!model.ui.vim_mode);
        assert!(!model.has_modal());
    }

    #[test]
    fn test_tokens_increase() {
        let mut model = Model::new(false);
        let first = model.issue_token();
        let second = model.issue_token();
        assert!(second > first);
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::new(false);
        let _cloned = model.clone();
    }
}
