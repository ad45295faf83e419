//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! preferences, the modal dialog, the toast, and the click bindings of the
//! last rendered frame.

use std::time::Instant;

use ratatui::layout::Rect;

use super::types::{Dialog, HitZone, Toast};

/// UI preferences and popups
#[derive(Clone, Debug)]
pub struct UiModel {
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Modal dialog currently shown
    pub dialog: Option<Dialog>,

    /// Toast notification
    pub toast: Option<Toast>,

    /// Click targets of the last frame, highest priority first
    pub hit_zones: Vec<HitZone>,

    /// Screen area of the open dialog in the last frame
    pub dialog_area: Option<Rect>,

    /// Server shown in the status bar title
    pub server_label: String,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    /// Create initial UI model with default preferences
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            dialog: None,
            toast: None,
            hit_zones: Vec::new(),
            dialog_area: None,
            server_label: String::new(),
            should_quit: false,
        }
    }

    /// Show a toast, replacing any visible one and restarting its timer
    pub fn show_toast(&mut self, message: impl Into<String>, is_error: bool) {
        self.toast = Some(Toast {
            message: message.into(),
            is_error,
            shown_at: Instant::now(),
        });
    }

    /// Check if the toast has outlived its display time
    pub fn should_dismiss_toast(&self) -> bool {
        match &self.toast {
            Some(toast) => {
                crate::logic::ui::should_dismiss_toast(toast.shown_at.elapsed().as_millis())
            }
            None => false,
        }
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    /// Close the dialog without any action
    pub fn close_dialog(&mut self) {
        self.dialog = None;
        self.dialog_area = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::MkdirDialog;
    use std::time::Duration;

    #[test]
    fn test_ui_model_creation() {
        let model = UiModel::new(true);
        assert!(model.vim_mode);
        assert!(model.dialog.is_none());
        assert!(model.toast.is_none());
        assert!(!model.should_quit);
    }

    #[test]
    fn test_toast() {
        let mut model = UiModel::new(false);
        model.show_toast("Folder created", false);
        assert!(!model.should_dismiss_toast());
        assert_eq!(model.toast.as_ref().map(|t| t.is_error), Some(false));

        model.dismiss_toast();
        assert!(model.toast.is_none());
    }

    #[test]
    fn test_newest_toast_wins_and_restarts_timer() {
        let mut model = UiModel::new(false);
        model.show_toast("first", false);
        if let Some(toast) = model.toast.as_mut() {
            toast.shown_at = Instant::now() - Duration::from_millis(2900);
        }

        model.show_toast("second", true);
        let toast = model.toast.as_ref().unwrap();
        assert_eq!(toast.message, "second");
        assert!(toast.is_error);
        assert!(toast.shown_at.elapsed() < Duration::from_millis(1000));
        assert!(!model.should_dismiss_toast());
    }

    #[test]
    fn test_expired_toast() {
        let mut model = UiModel::new(false);
        model.show_toast("old", false);
        if let Some(toast) = model.toast.as_mut() {
            toast.shown_at = Instant::now() - Duration::from_millis(3001);
        }
        assert!(model.should_dismiss_toast());
    }

    #[test]
    fn test_close_dialog() {
        let mut model = UiModel::new(false);
        model.dialog = Some(Dialog::Mkdir(MkdirDialog::default()));
        model.dialog_area = Some(Rect::new(0, 0, 10, 5));

        model.close_dialog();
        assert!(model.dialog.is_none());
        assert!(model.dialog_area.is_none());
    }
}
