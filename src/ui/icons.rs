use ratatui::{
    style::{Color, Style},
    text::Span,
};

use crate::logic::file::FileKind;

/// Icon display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Emoji,    // Standard emoji icons (📁, 🎵, etc.)
    NerdFont, // Nerd Fonts icons (U+E5FF, etc.)
}

impl IconMode {
    /// Parse the `icon_mode` config value, falling back to emoji
    pub fn from_config(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "nerdfont" | "nerd" | "nerd_font" => IconMode::NerdFont,
            _ => IconMode::Emoji,
        }
    }
}

/// Icon theme using terminal colors (respects user's terminal theme)
#[derive(Debug, Clone)]
pub struct IconTheme {
    pub folder_color: Color,
    pub audio_color: Color,
    pub image_color: Color,
    pub file_color: Color,
    pub home_color: Color,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            folder_color: Color::Blue,
            audio_color: Color::Magenta,
            image_color: Color::Green,
            file_color: Color::Cyan,
            home_color: Color::Yellow,
        }
    }
}

/// Icon renderer that handles both emoji and Nerd Font modes
#[derive(Debug, Clone)]
pub struct IconRenderer {
    mode: IconMode,
    theme: IconTheme,
}

impl IconRenderer {
    pub fn new(mode: IconMode, theme: IconTheme) -> Self {
        Self { mode, theme }
    }

    /// Icon for a listing entry, with a trailing space
    pub fn entry(&self, kind: FileKind) -> Span<'static> {
        let (emoji, nerd, color) = match kind {
            FileKind::Directory => ("📁 ", "\u{E5FF} ", self.theme.folder_color),
            FileKind::Audio => ("🎵 ", "\u{F001} ", self.theme.audio_color),
            FileKind::Image => ("📷 ", "\u{F03E} ", self.theme.image_color),
            FileKind::Generic => ("📄 ", "\u{F15B} ", self.theme.file_color),
        };

        let icon = match self.mode {
            IconMode::Emoji => emoji,
            IconMode::NerdFont => nerd,
        };

        Span::styled(icon, Style::default().fg(color))
    }

    /// Icon in front of the breadcrumb's home link
    pub fn home(&self) -> Span<'static> {
        let icon = match self.mode {
            IconMode::Emoji => "🏠 ",
            IconMode::NerdFont => "\u{F015} ",
        };
        Span::styled(icon, Style::default().fg(self.theme.home_color))
    }
}
