//! Dialog orchestration methods
//!
//! The four modal flows share one shape: open with fields populated,
//! submit after local validation, then on the response either close, toast
//! and refresh (success) or stay open and toast (failure). Esc or a click
//! outside the dialog closes it without any request.

use crate::api::{RequestError, UploadFile};
use crate::logic;
use crate::model::{DeleteDialog, Dialog, MkdirDialog, RenameDialog, UploadDialog};
use crate::services::api::{ApiRequest, Operation};
use crate::App;

impl App {
    pub fn open_upload_dialog(&mut self) {
        self.model.ui.dialog = Some(Dialog::Upload(UploadDialog::default()));
    }

    pub fn open_mkdir_dialog(&mut self) {
        self.model.ui.dialog = Some(Dialog::Mkdir(MkdirDialog::default()));
    }

    pub fn open_rename_dialog(&mut self, name: &str) {
        self.model.ui.dialog = Some(Dialog::Rename(RenameDialog {
            original: name.to_string(),
            name: name.to_string(),
            pending: None,
        }));
    }

    pub fn open_delete_dialog(&mut self, name: &str, is_dir: bool) {
        self.model.ui.dialog = Some(Dialog::Delete(DeleteDialog {
            name: name.to_string(),
            is_dir,
            recursive: false,
            pending: None,
        }));
    }

    pub fn open_rename_selected(&mut self) {
        if let Some(entry) = self.model.navigation.selected_entry() {
            let name = entry.name.clone();
            self.open_rename_dialog(&name);
        }
    }

    pub fn open_delete_selected(&mut self) {
        if let Some(entry) = self.model.navigation.selected_entry() {
            let (name, is_dir) = (entry.name.clone(), entry.is_dir());
            self.open_delete_dialog(&name, is_dir);
        }
    }

    pub fn cancel_dialog(&mut self) {
        self.model.ui.close_dialog();
    }

    /// Type a character into the dialog's text field
    pub fn dialog_input(&mut self, c: char) {
        match &mut self.model.ui.dialog {
            Some(Dialog::Upload(d)) => d.input.push(c),
            Some(Dialog::Mkdir(d)) => d.name.push(c),
            Some(Dialog::Rename(d)) => d.name.push(c),
            _ => {}
        }
    }

    /// Delete the last character of the text field, or the last picked
    /// upload file when the upload input is already empty
    pub fn dialog_backspace(&mut self) {
        match &mut self.model.ui.dialog {
            Some(Dialog::Upload(d)) => {
                if d.input.pop().is_none() {
                    d.files.pop();
                }
            }
            Some(Dialog::Mkdir(d)) => {
                d.name.pop();
            }
            Some(Dialog::Rename(d)) => {
                d.name.pop();
            }
            _ => {}
        }
    }

    /// Flip the dialog's checkbox (overwrite or recursive)
    pub fn dialog_toggle(&mut self) {
        match &mut self.model.ui.dialog {
            Some(Dialog::Upload(d)) => d.overwrite = !d.overwrite,
            Some(Dialog::Delete(d)) if d.is_dir => d.recursive = !d.recursive,
            _ => {}
        }
    }

    /// Enter in a dialog: picks a typed upload path, otherwise submits
    pub fn dialog_enter(&mut self) {
        if let Some(Dialog::Upload(d)) = &mut self.model.ui.dialog {
            if let Some(path) = logic::dialogs::local_upload_path(&d.input) {
                d.files.push(path);
                d.input.clear();
                return;
            }
        }
        self.submit_dialog();
    }

    /// Validate the open dialog and send its request
    pub fn submit_dialog(&mut self) {
        let Some(dialog) = self.model.ui.dialog.clone() else {
            return;
        };
        if dialog.pending().is_some() {
            return;
        }

        let current = self.model.navigation.current_path.clone();

        let request = match dialog {
            Dialog::Upload(d) => {
                if d.files.is_empty() {
                    return;
                }
                let ticket = self.model.issue_token();
                ApiRequest::Upload {
                    path: current,
                    files: d.files.iter().map(UploadFile::new).collect(),
                    overwrite: d.overwrite,
                    ticket,
                }
            }
            Dialog::Mkdir(d) => {
                let Some(name) = logic::dialogs::folder_name(&d.name) else {
                    return;
                };
                let ticket = self.model.issue_token();
                ApiRequest::CreateDirectory {
                    path: logic::path::join_path(&current, &name),
                    ticket,
                }
            }
            Dialog::Rename(d) => {
                let Some(name) = logic::dialogs::rename_target(&d.original, &d.name) else {
                    self.model.ui.close_dialog();
                    return;
                };
                let ticket = self.model.issue_token();
                ApiRequest::Move {
                    from: logic::path::join_path(&current, &d.original),
                    to: logic::path::join_path(&current, &name),
                    ticket,
                }
            }
            Dialog::Delete(d) => {
                let ticket = self.model.issue_token();
                ApiRequest::Delete {
                    path: logic::path::join_path(&current, &d.name),
                    recursive: d.is_dir && d.recursive,
                    ticket,
                }
            }
        };

        self.set_dialog_pending(request_ticket(&request));
        self.send(request);
    }

    fn set_dialog_pending(&mut self, ticket: u64) {
        match &mut self.model.ui.dialog {
            Some(Dialog::Upload(d)) => {
                d.pending = Some(ticket);
                d.progress = 0.0;
            }
            Some(Dialog::Mkdir(d)) => d.pending = Some(ticket),
            Some(Dialog::Rename(d)) => d.pending = Some(ticket),
            Some(Dialog::Delete(d)) => d.pending = Some(ticket),
            None => {}
        }
    }

    /// Progress of an upload; ignored unless its dialog is still open
    pub(crate) fn upload_progress(&mut self, ticket: u64, fraction: f64) {
        if let Some(Dialog::Upload(d)) = &mut self.model.ui.dialog {
            if d.pending == Some(ticket) {
                d.progress = fraction;
            }
        }
    }

    /// Apply the result of a dialog submission.
    ///
    /// The dialog is only closed or re-enabled when it is the one that
    /// submitted; the toast and refresh happen regardless.
    pub(crate) fn finish_mutation(
        &mut self,
        ticket: u64,
        operation: Operation,
        result: Result<(), RequestError>,
    ) {
        let owns_dialog = self
            .model
            .ui
            .dialog
            .as_ref()
            .and_then(|d| d.pending())
            == Some(ticket);

        match result {
            Ok(()) => {
                if owns_dialog {
                    self.model.ui.close_dialog();
                }
                self.model.show_toast(operation.success_message(), false);
                self.refresh();
            }
            Err(e) => {
                tracing::warn!("{:?} failed: {}", operation, e);
                if owns_dialog {
                    if let Some(dialog) = self.model.ui.dialog.as_mut() {
                        dialog.clear_pending();
                    }
                }
                self.model.show_toast(e.message, true);
            }
        }
    }
}

fn request_ticket(request: &ApiRequest) -> u64 {
    match request {
        ApiRequest::ListDirectory { seq, .. } => *seq,
        ApiRequest::CreateDirectory { ticket, .. }
        | ApiRequest::Move { ticket, .. }
        | ApiRequest::Delete { ticket, .. }
        | ApiRequest::Upload { ticket, .. }
        | ApiRequest::Download { ticket, .. } => *ticket,
    }
}
