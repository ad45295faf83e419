//! Mouse Input Handler
//!
//! Left clicks are resolved against the hit zones registered by the last
//! rendered frame. With a dialog open, clicks outside it cancel the dialog.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::ui::hit_test;
use crate::App;

/// Handle mouse input
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => click(app, mouse.column, mouse.row),
        MouseEventKind::ScrollDown if !app.model.has_modal() => app.select_next(),
        MouseEventKind::ScrollUp if !app.model.has_modal() => app.select_prev(),
        _ => {}
    }
}

fn click(app: &mut App, column: u16, row: u16) {
    if app.model.has_modal() {
        let inside = app
            .model
            .ui
            .dialog_area
            .is_some_and(|area| area.contains(Position::new(column, row)));
        if !inside {
            app.cancel_dialog();
        }
        return;
    }

    if let Some(action) = hit_test(&app.model.ui.hit_zones, column, row) {
        tracing::debug!("click at ({}, {}) -> {:?}", column, row, action);
        app.dispatch(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HitZone, Model, ViewAction};
    use crate::services::api::ApiRequest;
    use crate::ui::icons::{IconMode, IconRenderer, IconTheme};
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;
    use std::path::PathBuf;
    use tokio::sync::mpsc;

    fn app() -> (App, mpsc::UnboundedReceiver<ApiRequest>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let app = App::new(
            Model::new(false),
            tx,
            IconRenderer::new(IconMode::Emoji, IconTheme::default()),
            PathBuf::from("/tmp"),
        );
        (app, rx)
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_click_on_zone_dispatches() {
        let (mut app, mut rx) = app();
        app.model.ui.hit_zones.push(HitZone::new(
            Rect::new(0, 0, 10, 1),
            ViewAction::Navigate("docs".to_string()),
        ));

        handle_mouse(&mut app, left_click(3, 0));

        match rx.try_recv() {
            Ok(ApiRequest::ListDirectory { path, .. }) => assert_eq!(path, "docs"),
            other => panic!("unexpected request: {:?}", other),
        }
    }

    #[test]
    fn test_click_outside_zones_does_nothing() {
        let (mut app, mut rx) = app();
        app.model.ui.hit_zones.push(HitZone::new(
            Rect::new(0, 0, 10, 1),
            ViewAction::Navigate("docs".to_string()),
        ));

        handle_mouse(&mut app, left_click(3, 5));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_backdrop_click_cancels_dialog() {
        let (mut app, mut rx) = app();
        app.open_mkdir_dialog();
        app.model.ui.dialog_area = Some(Rect::new(10, 5, 30, 8));

        handle_mouse(&mut app, left_click(15, 7));
        assert!(app.model.has_modal());

        handle_mouse(&mut app, left_click(2, 2));
        assert!(!app.model.has_modal());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_zones_ignored_while_dialog_open() {
        let (mut app, mut rx) = app();
        app.model.ui.hit_zones.push(HitZone::new(
            Rect::new(0, 0, 10, 1),
            ViewAction::Navigate("docs".to_string()),
        ));
        app.open_mkdir_dialog();
        app.model.ui.dialog_area = Some(Rect::new(0, 0, 10, 1));

        handle_mouse(&mut app, left_click(3, 0));
        assert!(rx.try_recv().is_err());
        assert!(app.model.has_modal());
    }
}
