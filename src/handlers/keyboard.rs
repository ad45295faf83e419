//! Keyboard Input Handler
//!
//! An open dialog captures all keys. Otherwise keys drive navigation and
//! open the dialogs.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Dialog;
use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return;
    }

    if app.model.ui.dialog.is_some() {
        handle_dialog_key(app, key);
        return;
    }

    let vim = app.model.ui.vim_mode;

    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,

        KeyCode::Down => app.select_next(),
        KeyCode::Up => app.select_prev(),
        KeyCode::Char('j') if vim => app.select_next(),
        KeyCode::Char('k') if vim => app.select_prev(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),
        KeyCode::Char('G') if vim => app.select_last(),

        KeyCode::Enter | KeyCode::Right => app.open_selected(),
        KeyCode::Char('l') if vim => app.open_selected(),
        KeyCode::Backspace | KeyCode::Left => app.go_parent(),
        KeyCode::Char('h') if vim => app.go_parent(),
        KeyCode::Char('~') => app.go_home(),

        KeyCode::F(5) => app.refresh(),
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => app.refresh(),

        KeyCode::Char('u') => app.open_upload_dialog(),
        KeyCode::Char('n') => app.open_mkdir_dialog(),
        KeyCode::Char('r') => app.open_rename_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.open_delete_selected(),
        KeyCode::Char('o') => app.download_selected(),

        _ => {}
    }
}

fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        app.cancel_dialog();
        return;
    }

    // The delete dialog has no text field, only a confirmation
    if matches!(app.model.ui.dialog, Some(Dialog::Delete(_))) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => app.submit_dialog(),
            KeyCode::Char('n') | KeyCode::Char('N') => app.cancel_dialog(),
            KeyCode::Tab | KeyCode::Char(' ') => app.dialog_toggle(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Enter => app.dialog_enter(),
        KeyCode::Tab => app.dialog_toggle(),
        KeyCode::Backspace => app.dialog_backspace(),
        KeyCode::Char(c) => app.dialog_input(c),
        _ => {}
    }
}
