//! Shared types for the Model
//!
//! Dialog state, toast, and the declarative actions the view binds to
//! screen regions.

use std::path::PathBuf;
use std::time::Instant;

use ratatui::layout::Rect;

/// Upload dialog: local files picked so far plus the overwrite flag
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadDialog {
    /// Path being typed
    pub input: String,
    /// Local files selected for upload
    pub files: Vec<PathBuf>,
    pub overwrite: bool,
    /// Fraction sent of the in-flight upload
    pub progress: f64,
    pub pending: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MkdirDialog {
    pub name: String,
    pub pending: Option<u64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenameDialog {
    /// Entry name when the dialog was opened
    pub original: String,
    /// Edited name, prefilled with `original`
    pub name: String,
    pub pending: Option<u64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeleteDialog {
    pub name: String,
    pub is_dir: bool,
    /// Only meaningful (and shown) for directories
    pub recursive: bool,
    pub pending: Option<u64>,
}

/// The modal dialog currently shown
#[derive(Clone, Debug, PartialEq)]
pub enum Dialog {
    Upload(UploadDialog),
    Mkdir(MkdirDialog),
    Rename(RenameDialog),
    Delete(DeleteDialog),
}

impl Dialog {
    /// Ticket of the submission this dialog is waiting on
    pub fn pending(&self) -> Option<u64> {
        match self {
            Dialog::Upload(d) => d.pending,
            Dialog::Mkdir(d) => d.pending,
            Dialog::Rename(d) => d.pending,
            Dialog::Delete(d) => d.pending,
        }
    }

    pub fn clear_pending(&mut self) {
        match self {
            Dialog::Upload(d) => {
                d.pending = None;
                d.progress = 0.0;
            }
            Dialog::Mkdir(d) => d.pending = None,
            Dialog::Rename(d) => d.pending = None,
            Dialog::Delete(d) => d.pending = None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Dialog::Upload(_) => "Upload Files",
            Dialog::Mkdir(_) => "New Folder",
            Dialog::Rename(_) => "Rename",
            Dialog::Delete(_) => "Confirm Delete",
        }
    }
}

/// Transient status message
#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub is_error: bool,
    pub shown_at: Instant,
}

/// What a click on a piece of the view does
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewAction {
    /// Navigate to an absolute remote path (breadcrumb links)
    Navigate(String),
    /// Enter a directory of the current listing
    OpenDirectory(String),
    /// Select a row of the file list
    Select(usize),
    /// Open the rename dialog for an entry
    Rename(String),
    /// Open the delete dialog for an entry
    Delete { name: String, is_dir: bool },
}

/// A screen region bound to an action, rebuilt on every frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HitZone {
    pub area: Rect,
    pub action: ViewAction,
}

impl HitZone {
    pub fn new(area: Rect, action: ViewAction) -> Self {
        Self { area, action }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x.saturating_add(self.area.width)
            && row >= self.area.y
            && row < self.area.y.saturating_add(self.area.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_pending_roundtrip() {
        let mut dialog = Dialog::Upload(UploadDialog {
            progress: 0.4,
            pending: Some(7),
            ..Default::default()
        });
        assert_eq!(dialog.pending(), Some(7));

        dialog.clear_pending();
        assert_eq!(dialog.pending(), None);
        if let Dialog::Upload(upload) = &dialog {
            assert_eq!(upload.progress, 0.0);
        }
    }

    #[test]
    fn test_hit_zone_contains_is_half_open() {
        let zone = HitZone::new(Rect::new(10, 2, 5, 1), ViewAction::Navigate(String::new()));
        assert!(zone.contains(10, 2));
        assert!(zone.contains(14, 2));
        assert!(!zone.contains(15, 2));
        assert!(!zone.contains(10, 3));
        assert!(!zone.contains(9, 2));
    }
}
