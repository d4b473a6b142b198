#![forbid(unsafe_code)]

//! Per-layer styles for the compositor.

use tgrid_render::cell::{Color, Style};
use tgrid_render::drawing::BorderChars;

/// Visual choices for every compositing layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Fill for every cell not covered by a widget.
    pub background: Style,
    pub border: Style,
    pub border_chars: BorderChars,
    pub label: Style,
    pub button: Style,
    /// Visible button the cursor is resting on.
    pub button_focused: Style,
    pub log_panel: Style,
    pub log_title: Style,
    /// Text-entry prompt row.
    pub prompt: Style,
    pub cursor: Style,
    pub cursor_glyph: char,
}

impl Default for Theme {
    /// Blue field, bold ASCII border, black-on-white buttons turning green
    /// under the cursor, and a red `X` cursor on white.
    fn default() -> Self {
        Self {
            background: Style::new().bg(Color::Blue),
            border: Style::new().bold(),
            border_chars: BorderChars::ASCII,
            label: Style::new().fg(Color::White).bg(Color::Blue),
            button: Style::new().fg(Color::Black).bg(Color::White),
            button_focused: Style::new().fg(Color::Black).bg(Color::Green),
            log_panel: Style::new().fg(Color::White).bg(Color::Black),
            log_title: Style::new().fg(Color::Yellow).bg(Color::Black).bold(),
            prompt: Style::new().fg(Color::Black).bg(Color::Yellow).bold(),
            cursor: Style::new().fg(Color::Red).bg(Color::White),
            cursor_glyph: 'X',
        }
    }
}

impl Theme {
    /// A theme with no colors at all, only glyphs.
    ///
    /// Handy for snapshot assertions where escapes would be noise.
    pub fn monochrome() -> Self {
        Self {
            background: Style::PLAIN,
            border: Style::PLAIN,
            border_chars: BorderChars::ASCII,
            label: Style::PLAIN,
            button: Style::PLAIN,
            button_focused: Style::PLAIN,
            log_panel: Style::PLAIN,
            log_title: Style::PLAIN,
            prompt: Style::PLAIN,
            cursor: Style::PLAIN,
            cursor_glyph: 'X',
        }
    }

    #[must_use]
    pub fn with_border_chars(mut self, chars: BorderChars) -> Self {
        self.border_chars = chars;
        self
    }

    #[must_use]
    pub fn with_cursor_glyph(mut self, glyph: char) -> Self {
        self.cursor_glyph = glyph;
        self
    }
}
