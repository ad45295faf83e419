use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use crate::api::DirectoryEntry;

/// Status text for the current listing
///
/// Parts are joined with `" | "`; each part is `Label: value` or a bare word.
pub fn status_line(
    current_path: &str,
    entries: &[DirectoryEntry],
    selected: Option<&DirectoryEntry>,
    loading: bool,
) -> String {
    let mut metrics = Vec::new();

    metrics.push(format!("Path: /{}", current_path));
    metrics.push(format!("{} items", entries.len()));

    if let Some(entry) = selected {
        // "dirname/" for directories, "filename" for files
        let formatted_name = if entry.is_dir() {
            format!("{}/", entry.name)
        } else {
            entry.name.clone()
        };
        metrics.push(format!("Selected: {}", formatted_name));
    }

    if loading {
        metrics.push("Loading".to_string());
    }

    metrics.join(" | ")
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, status_line: &str, server: &str) {
    // Color the labels (before colons)
    let mut spans = vec![];
    for (idx, part) in status_line.split(" | ").enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }

        if let Some(colon_pos) = part.find(':') {
            let label = &part[..=colon_pos];
            let value = &part[colon_pos + 1..];
            spans.push(Span::styled(label.to_string(), Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(value.to_string()));
        } else if part == "Loading" {
            spans.push(Span::styled(part.to_string(), Style::default().fg(Color::Magenta)));
        } else {
            spans.push(Span::raw(part.to_string()));
        }
    }

    let status_bar = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Status ({})", server)),
        )
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}
