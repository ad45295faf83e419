//! Navigation orchestration methods
//!
//! Listing directories and moving the selection:
//! - Requesting listings tagged with a sequence token
//! - Applying only the response of the latest request
//! - Going into folders, up to the parent, home, refresh

use crate::api::{DirectoryEntry, RequestError};
use crate::logic;
use crate::services::api::ApiRequest;
use crate::App;

impl App {
    /// Request the listing of `path`.
    ///
    /// The current path and the rendered entries stay untouched until the
    /// response arrives; only the loading flag changes now.
    pub fn list_directory(&mut self, path: impl Into<String>) {
        let path = path.into();
        let seq = self.model.issue_token();

        self.model.navigation.loading = true;
        self.model.navigation.pending_list_seq = Some(seq);
        self.model.navigation.pending_path = Some(path.clone());

        self.send(ApiRequest::ListDirectory { path, seq });
    }

    /// Re-list the current directory, or the one still being opened
    pub fn refresh(&mut self) {
        let path = self.model.navigation.refresh_target().to_string();
        self.list_directory(path);
    }

    /// Enter a directory of the current listing
    pub fn enter_directory(&mut self, name: &str) {
        let path = logic::path::join_path(&self.model.navigation.current_path, name);
        self.list_directory(path);
    }

    /// Enter the selected entry if it is a directory
    pub fn open_selected(&mut self) {
        let Some(entry) = self.model.navigation.selected_entry() else {
            return;
        };
        if entry.is_dir() {
            let name = entry.name.clone();
            self.enter_directory(&name);
        }
    }

    pub fn go_parent(&mut self) {
        if let Some(parent) = logic::path::parent_path(&self.model.navigation.current_path) {
            self.list_directory(parent);
        }
    }

    pub fn go_home(&mut self) {
        self.list_directory(String::new());
    }

    pub fn select_next(&mut self) {
        let nav = &mut self.model.navigation;
        nav.selected_index = logic::navigation::next_selection(nav.selected_index, nav.entries.len());
    }

    pub fn select_prev(&mut self) {
        let nav = &mut self.model.navigation;
        nav.selected_index = logic::navigation::prev_selection(nav.selected_index, nav.entries.len());
    }

    pub fn select_first(&mut self) {
        let nav = &mut self.model.navigation;
        nav.selected_index = logic::navigation::clamp_selection(Some(0), nav.entries.len());
    }

    pub fn select_last(&mut self) {
        let nav = &mut self.model.navigation;
        nav.selected_index = nav.entries.len().checked_sub(1);
    }

    /// Apply a listing response.
    ///
    /// Responses to anything but the latest listing request are dropped.
    /// On success the path, entries and selection are replaced together;
    /// on failure only an error toast is shown.
    pub(crate) fn finish_listing(
        &mut self,
        seq: u64,
        path: String,
        result: Result<Vec<DirectoryEntry>, RequestError>,
    ) {
        if !self.model.navigation.is_current_listing(seq) {
            tracing::debug!("dropping stale listing seq={} path={:?}", seq, path);
            return;
        }

        let nav = &mut self.model.navigation;
        nav.pending_list_seq = None;
        nav.pending_path = None;
        nav.loading = false;

        match result {
            Ok(entries) => {
                let selection = if nav.current_path == path {
                    nav.selected_index
                } else {
                    None
                };
                nav.selected_index = logic::navigation::clamp_selection(selection, entries.len());
                nav.current_path = path;
                nav.entries = entries;
            }
            Err(e) => {
                tracing::warn!("listing {:?} failed: {}", path, e);
                self.model.show_toast(e.message, true);
            }
        }
    }
}
