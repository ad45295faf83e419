use super::layout::centered_rect;
use crate::logic;
use crate::model::{DeleteDialog, Dialog, MkdirDialog, RenameDialog, UploadDialog};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const DIALOG_WIDTH: u16 = 60;
const MAX_LISTED_FILES: usize = 5;

/// Render the open dialog centered in `area` and return where it was drawn
pub fn render_dialog(f: &mut Frame, area: Rect, dialog: &Dialog) -> Rect {
    let (lines, border_color) = match dialog {
        Dialog::Upload(d) => (upload_lines(d), Color::Cyan),
        Dialog::Mkdir(d) => (mkdir_lines(d), Color::Cyan),
        Dialog::Rename(d) => (rename_lines(d), Color::Yellow),
        Dialog::Delete(d) => (delete_lines(d), Color::Red),
    };

    // Lines plus top and bottom borders
    let height = lines.len() as u16 + 2;
    let dialog_area = centered_rect(area, DIALOG_WIDTH, height);

    let prompt = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(dialog.title())
                .border_style(Style::default().fg(border_color)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, dialog_area);
    f.render_widget(prompt, dialog_area);

    dialog_area
}

fn input_line(value: &str, pending: bool) -> Line<'static> {
    let cursor = if pending { "" } else { "_" };
    Line::from(vec![
        Span::raw("> "),
        Span::styled(
            format!("{}{}", value, cursor),
            Style::default().fg(Color::Yellow),
        ),
    ])
}

fn checkbox_line(checked: bool, label: &str, key: &str) -> Line<'static> {
    let mark = if checked { "[x]" } else { "[ ]" };
    Line::from(vec![
        Span::styled(mark, Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {} ", label)),
        Span::styled(format!("({})", key), Style::default().fg(Color::DarkGray)),
    ])
}

fn hint_line(pending: bool, idle: &str) -> Line<'static> {
    if pending {
        Line::styled(
            "Working…",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::ITALIC),
        )
    } else {
        Line::styled(idle.to_string(), Style::default().fg(Color::DarkGray))
    }
}

fn progress_line(fraction: f64) -> Line<'static> {
    let bar_width = DIALOG_WIDTH.saturating_sub(10);
    let filled = logic::ui::progress_cells(fraction, bar_width);
    Line::from(vec![
        Span::styled("█".repeat(filled as usize), Style::default().fg(Color::Green)),
        Span::styled(
            "░".repeat(bar_width.saturating_sub(filled) as usize),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(format!(" {:>3}%", (fraction.clamp(0.0, 1.0) * 100.0).round() as u8)),
    ])
}

fn upload_lines(d: &UploadDialog) -> Vec<Line<'static>> {
    let pending = d.pending.is_some();
    let mut lines = vec![
        Line::raw("Local file path:"),
        input_line(&d.input, pending),
        Line::raw(""),
    ];

    if d.files.is_empty() {
        lines.push(Line::styled(
            "No files selected",
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        lines.push(Line::raw(format!("Selected ({}):", d.files.len())));
        for path in d.files.iter().take(MAX_LISTED_FILES) {
            lines.push(Line::raw(format!("  - {}", path.display())));
        }
        if d.files.len() > MAX_LISTED_FILES {
            lines.push(Line::raw(format!(
                "  ... and {} more",
                d.files.len() - MAX_LISTED_FILES
            )));
        }
    }

    lines.push(Line::raw(""));
    lines.push(checkbox_line(d.overwrite, "Overwrite existing files", "Tab"));

    if pending {
        lines.push(progress_line(d.progress));
    }

    lines.push(hint_line(
        pending,
        "Enter adds the typed path; Enter on an empty path uploads",
    ));
    lines
}

fn mkdir_lines(d: &MkdirDialog) -> Vec<Line<'static>> {
    let pending = d.pending.is_some();
    vec![
        Line::raw("Folder name:"),
        input_line(&d.name, pending),
        Line::raw(""),
        hint_line(pending, "Enter to create, Esc to cancel"),
    ]
}

fn rename_lines(d: &RenameDialog) -> Vec<Line<'static>> {
    let pending = d.pending.is_some();
    vec![
        Line::raw(format!("New name for \"{}\":", d.original)),
        input_line(&d.name, pending),
        Line::raw(""),
        hint_line(pending, "Enter to rename, Esc to cancel"),
    ]
}

fn delete_lines(d: &DeleteDialog) -> Vec<Line<'static>> {
    let pending = d.pending.is_some();
    let mut lines = vec![Line::raw(logic::dialogs::delete_message(&d.name)), Line::raw("")];

    if d.is_dir {
        lines.push(checkbox_line(d.recursive, "Delete folder contents", "Space"));
        lines.push(Line::raw(""));
    }

    lines.push(Line::styled(
        "WARNING: This action cannot be undone!",
        Style::default().fg(Color::Red),
    ));
    lines.push(hint_line(pending, "Continue? (y/n)"));
    lines
}
