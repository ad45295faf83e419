use super::icons::IconRenderer;
use crate::api::DirectoryEntry;
use crate::logic::file::{file_kind, FileKind};
use crate::logic::formatting::{format_size, format_timestamp};
use crate::model::{HitZone, ViewAction};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const RENAME_BUTTON: &str = "[Rename]";
const DELETE_BUTTON: &str = "[Delete]";
const HIGHLIGHT_SYMBOL: &str = "> ";

/// Lines taken by one entry (name line + metadata line)
pub const ROW_HEIGHT: u16 = 2;

/// View model of one listing entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRow {
    pub kind: FileKind,
    pub name: String,
    pub meta: String,
    /// Bound to a click on the row; only directories open
    pub open: Option<ViewAction>,
    pub rename: ViewAction,
    pub delete: ViewAction,
}

/// Build the rows for a listing, in backend order
pub fn file_rows(entries: &[DirectoryEntry]) -> Vec<FileRow> {
    entries
        .iter()
        .map(|entry| {
            let is_dir = entry.is_dir();
            FileRow {
                kind: file_kind(entry),
                name: entry.name.clone(),
                meta: entry_meta(entry),
                open: is_dir.then(|| ViewAction::OpenDirectory(entry.name.clone())),
                rename: ViewAction::Rename(entry.name.clone()),
                delete: ViewAction::Delete {
                    name: entry.name.clone(),
                    is_dir,
                },
            }
        })
        .collect()
}

/// Metadata line: size or "Folder", then the modification time if known
pub fn entry_meta(entry: &DirectoryEntry) -> String {
    let mut meta = if entry.is_dir() {
        "Folder".to_string()
    } else {
        format_size(entry.size.unwrap_or(0))
    };

    if let Some(modified) = &entry.modified {
        meta.push_str(" • ");
        meta.push_str(&format_timestamp(modified));
    }

    meta
}

/// Cut `text` to at most `max_width` columns, marking the cut with an ellipsis
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

/// Render the listing and register the click targets of the visible rows.
///
/// Per row the buttons are registered before the row itself, so that
/// `hit_test` resolves a click on a button to the button's action.
pub fn render_file_list(
    f: &mut Frame,
    area: Rect,
    rows: &[FileRow],
    selected: Option<usize>,
    loading: bool,
    icon_renderer: &IconRenderer,
    zones: &mut Vec<HitZone>,
) {
    let title = if loading { "Files (loading…)" } else { "Files" };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if rows.is_empty() {
        let placeholder = if loading { "Loading…" } else { "Empty folder" };
        let empty = Paragraph::new(placeholder)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let inner = block.inner(area);
    let content_x = inner.x.saturating_add(HIGHLIGHT_SYMBOL.width() as u16);
    let content_width = inner.width.saturating_sub(HIGHLIGHT_SYMBOL.width() as u16) as usize;
    let buttons_width = RENAME_BUTTON.width() + 1 + DELETE_BUTTON.width();

    let button_style = Style::default().fg(Color::Yellow);
    let meta_style = Style::default().fg(Color::Rgb(120, 120, 120));

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let icon = icon_renderer.entry(row.kind);
            let icon_width = icon.content.width();

            // name | padding | [Rename] [Delete]
            let name_room = content_width.saturating_sub(icon_width + buttons_width + 1);
            let name = truncate_to_width(&row.name, name_room);
            let padding = content_width.saturating_sub(icon_width + name.width() + buttons_width);

            let name_style = if row.kind == FileKind::Directory {
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let first = Line::from(vec![
                icon,
                Span::styled(name, name_style),
                Span::raw(" ".repeat(padding)),
                Span::styled(RENAME_BUTTON, button_style),
                Span::raw(" "),
                Span::styled(DELETE_BUTTON, button_style),
            ]);
            let second = Line::from(vec![
                Span::raw(" ".repeat(icon_width)),
                Span::styled(row.meta.clone(), meta_style),
            ]);

            ListItem::new(vec![first, second])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_spacing(HighlightSpacing::Always);

    let mut state = ListState::default();
    state.select(selected);
    f.render_stateful_widget(list, area, &mut state);

    // Only fully visible rows get click targets
    let offset = state.offset();
    let visible = (inner.height / ROW_HEIGHT) as usize;
    let buttons_fit = content_width >= buttons_width;
    let rename_x = content_x.saturating_add(content_width.saturating_sub(buttons_width) as u16);
    let delete_x = rename_x.saturating_add(RENAME_BUTTON.width() as u16 + 1);

    for (slot, (index, row)) in rows.iter().enumerate().skip(offset).take(visible).enumerate() {
        let y = inner.y + slot as u16 * ROW_HEIGHT;

        if buttons_fit {
            zones.push(HitZone::new(
                Rect::new(rename_x, y, RENAME_BUTTON.width() as u16, 1),
                row.rename.clone(),
            ));
            zones.push(HitZone::new(
                Rect::new(delete_x, y, DELETE_BUTTON.width() as u16, 1),
                row.delete.clone(),
            ));
        }

        let action = row.open.clone().unwrap_or(ViewAction::Select(index));
        zones.push(HitZone::new(
            Rect::new(inner.x, y, inner.width, ROW_HEIGHT),
            action,
        ));
    }
}
