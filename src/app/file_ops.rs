//! File operation methods
//!
//! User actions that are not dialog flows:
//! - Download the selected file into the local download directory
//! - Dispatch clicks on the rendered view

use std::path::PathBuf;

use crate::api::RequestError;
use crate::logic;
use crate::model::ViewAction;
use crate::services::api::ApiRequest;
use crate::App;

impl App {
    /// Download the selected file; directories are skipped
    pub fn download_selected(&mut self) {
        let Some(entry) = self.model.navigation.selected_entry() else {
            return;
        };
        if entry.is_dir() {
            return;
        }

        let name = entry.name.clone();
        let path = logic::path::join_path(&self.model.navigation.current_path, &name);
        let dest = self.download_dir().join(&name);
        let ticket = self.model.issue_token();

        self.model.show_toast(format!("Downloading {}", name), false);
        self.send(ApiRequest::Download { path, dest, ticket });
    }

    pub(crate) fn finish_download(&mut self, ticket: u64, result: Result<PathBuf, RequestError>) {
        match result {
            Ok(dest) => {
                tracing::debug!("download {} saved to {}", ticket, dest.display());
                self.model.show_toast(format!("Saved {}", dest.display()), false);
            }
            Err(e) => {
                tracing::warn!("download {} failed: {}", ticket, e);
                self.model.show_toast(e.message, true);
            }
        }
    }

    /// Perform the action bound to a clicked region of the view
    pub fn dispatch(&mut self, action: ViewAction) {
        match action {
            ViewAction::Navigate(path) => self.list_directory(path),
            ViewAction::OpenDirectory(name) => self.enter_directory(&name),
            ViewAction::Select(index) => {
                if index < self.model.navigation.entries.len() {
                    self.model.navigation.selected_index = Some(index);
                }
            }
            ViewAction::Rename(name) => self.open_rename_dialog(&name),
            ViewAction::Delete { name, is_dir } => self.open_delete_dialog(&name, is_dir),
        }
    }
}
