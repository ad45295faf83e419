use crate::model::Dialog;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn key(label: &'static str, action: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(label, Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ]
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, dialog: Option<&Dialog>) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    // An open dialog captures the keyboard; only its keys apply
    if let Some(dialog) = dialog {
        match dialog {
            Dialog::Upload(_) => {
                hotkey_spans.extend(key("Enter", ":Add path / Upload  "));
                hotkey_spans.extend(key("Tab", ":Overwrite  "));
                hotkey_spans.extend(key("Bksp", ":Edit / Remove file  "));
            }
            Dialog::Mkdir(_) | Dialog::Rename(_) => {
                hotkey_spans.extend(key("Enter", ":Confirm  "));
            }
            Dialog::Delete(d) => {
                hotkey_spans.extend(key("y", ":Delete  "));
                hotkey_spans.extend(key("n", ":Keep  "));
                if d.is_dir {
                    hotkey_spans.extend(key("Space", ":Recursive  "));
                }
            }
        }
        hotkey_spans.extend(key("Esc", ":Cancel"));
        return hotkey_spans;
    }

    // Navigation keys (different for vim mode)
    if vim_mode {
        hotkey_spans.extend(key("hjkl", ":Nav  "));
        hotkey_spans.extend(key("G", ":Last  "));
    } else {
        hotkey_spans.extend(key("↑/↓", ":Nav  "));
        hotkey_spans.extend(key("Enter", ":Open  "));
        hotkey_spans.extend(key("←", ":Back  "));
    }

    hotkey_spans.extend(key("~", ":Home  "));
    hotkey_spans.extend(key("F5", ":Refresh  "));
    hotkey_spans.extend(key("u", ":Upload  "));
    hotkey_spans.extend(key("n", ":New Folder  "));
    hotkey_spans.extend(key("r", ":Rename  "));
    hotkey_spans.extend(key("d", ":Delete  "));
    hotkey_spans.extend(key("o", ":Download  "));

    // Quit - always available
    hotkey_spans.extend(key("q", ":Quit"));

    hotkey_spans
}

/// Build the legend paragraph without its block
fn legend_paragraph(vim_mode: bool, dialog: Option<&Dialog>) -> Paragraph<'static> {
    Paragraph::new(Line::from(build_hotkey_spans(vim_mode, dialog)))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool, dialog: Option<&Dialog>) {
    let legend = legend_paragraph(vim_mode, dialog)
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, vim_mode: bool, dialog: Option<&Dialog>) -> u16 {
    // Counted without the block; line_count() mis-counts bordered paragraphs
    let available_width = terminal_width.saturating_sub(2);
    let line_count = legend_paragraph(vim_mode, dialog).line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DeleteDialog, MkdirDialog};

    /// Helper function to convert spans to plain text for assertions
    fn spans_to_text(spans: &[Span]) -> String {
        spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_browse_legend_lists_actions() {
        let text = spans_to_text(&build_hotkey_spans(false, None));
        for expected in ["u:Upload", "n:New Folder", "r:Rename", "d:Delete", "q:Quit"] {
            assert!(text.contains(expected), "missing {:?} in {}", expected, text);
        }
        assert!(!text.contains("hjkl"));
    }

    #[test]
    fn test_vim_legend() {
        let text = spans_to_text(&build_hotkey_spans(true, None));
        assert!(text.contains("hjkl:Nav"));
    }

    #[test]
    fn test_dialog_legend_replaces_browse_keys() {
        let dialog = Dialog::Mkdir(MkdirDialog::default());
        let text = spans_to_text(&build_hotkey_spans(false, Some(&dialog)));
        assert!(text.contains("Esc:Cancel"));
        assert!(!text.contains("u:Upload"));
    }

    #[test]
    fn test_recursive_hint_only_for_directories() {
        let file = Dialog::Delete(DeleteDialog {
            name: "a.txt".to_string(),
            is_dir: false,
            recursive: false,
            pending: None,
        });
        let dir = Dialog::Delete(DeleteDialog {
            name: "old".to_string(),
            is_dir: true,
            recursive: false,
            pending: None,
        });
        assert!(!spans_to_text(&build_hotkey_spans(false, Some(&file))).contains("Recursive"));
        assert!(spans_to_text(&build_hotkey_spans(false, Some(&dir))).contains("Recursive"));
    }

    #[test]
    fn test_legend_height_grows_when_narrow() {
        assert_eq!(calculate_legend_height(400, false, None), 3);
        assert!(calculate_legend_height(30, false, None) > 3);
    }
}
