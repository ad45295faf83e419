use super::icons::IconRenderer;
use crate::logic::path::cumulative_segments;
use crate::model::{HitZone, ViewAction};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Separator drawn between two crumbs
pub const SEPARATOR: &str = " / ";

/// One element of the breadcrumb trail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Crumb {
    /// Clickable ancestor (or the home link) with the path it leads to
    Link { label: String, path: String },
    /// The directory being shown
    Current { label: String },
}

/// Build the trail for a remote path
///
/// # Examples
/// ```
/// use filetui::ui::breadcrumb::{breadcrumb_trail, Crumb};
///
/// let trail = breadcrumb_trail("a/b");
/// assert_eq!(trail[0], Crumb::Link { label: "Home".into(), path: "".into() });
/// assert_eq!(trail[1], Crumb::Link { label: "a".into(), path: "a".into() });
/// assert_eq!(trail[2], Crumb::Current { label: "b".into() });
/// ```
pub fn breadcrumb_trail(path: &str) -> Vec<Crumb> {
    let segments = cumulative_segments(path);
    let last = segments.len().saturating_sub(1);

    let mut trail = vec![Crumb::Link {
        label: "Home".to_string(),
        path: String::new(),
    }];

    for (i, (label, path)) in segments.into_iter().enumerate() {
        if i == last {
            trail.push(Crumb::Current { label });
        } else {
            trail.push(Crumb::Link { label, path });
        }
    }

    trail
}

/// Render the breadcrumb bar and register a hit zone per link
pub fn render_breadcrumb(
    f: &mut Frame,
    area: Rect,
    trail: &[Crumb],
    title: &str,
    icon_renderer: &IconRenderer,
    zones: &mut Vec<HitZone>,
) {
    let inner = Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2).min(1),
    };
    let right_edge = inner.x.saturating_add(inner.width);

    let link_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::UNDERLINED);
    let current_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let mut spans: Vec<Span> = Vec::new();
    let mut x = inner.x;

    for (i, crumb) in trail.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray)));
            x = x.saturating_add(SEPARATOR.width() as u16);
        }

        let start = x;
        if i == 0 {
            let icon = icon_renderer.home();
            x = x.saturating_add(icon.content.width() as u16);
            spans.push(icon);
        }

        match crumb {
            Crumb::Link { label, path } => {
                x = x.saturating_add(label.width() as u16);
                spans.push(Span::styled(label.clone(), link_style));

                // Links pushed off the right edge are not clickable
                if start < right_edge && inner.height > 0 {
                    let width = x.min(right_edge) - start;
                    zones.push(HitZone::new(
                        Rect::new(start, inner.y, width, 1),
                        ViewAction::Navigate(path.clone()),
                    ));
                }
            }
            Crumb::Current { label } => {
                x = x.saturating_add(label.width() as u16);
                spans.push(Span::styled(label.clone(), current_style));
            }
        }
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(bar, area);
}
