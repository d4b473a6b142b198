#![forbid(unsafe_code)]

//! Drawing primitives for the canvas.
//!
//! Thin helpers on top of [`Canvas::set`] so the compositor can draw the
//! border, text runs, and filled regions without repeating cell loops.
//! Every helper inherits `set`'s clipping: nothing is written off-canvas.

use tgrid_core::geometry::Rect;

use crate::canvas::Canvas;
use crate::cell::{Cell, Style};

/// Characters used to draw a border around a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderChars {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderChars {
    /// ASCII-only border (`+ - |`).
    pub const ASCII: Self = Self {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
    };

    /// Simple box-drawing characters (U+250x).
    pub const SQUARE: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    /// Rounded corners.
    pub const ROUNDED: Self = Self {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        horizontal: '─',
        vertical: '│',
    };

    /// Double-line border.
    pub const DOUBLE: Self = Self {
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        horizontal: '═',
        vertical: '║',
    };

    /// Heavy (thick) border.
    pub const HEAVY: Self = Self {
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        horizontal: '━',
        vertical: '┃',
    };

    /// Look up a preset by its lowercase name.
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "ascii" => Some(Self::ASCII),
            "square" => Some(Self::SQUARE),
            "rounded" => Some(Self::ROUNDED),
            "double" => Some(Self::DOUBLE),
            "heavy" => Some(Self::HEAVY),
            _ => None,
        }
    }
}

impl Default for BorderChars {
    fn default() -> Self {
        Self::ASCII
    }
}

/// Extension trait for drawing on a [`Canvas`].
pub trait Draw {
    /// Print text starting at `(x, y)`, one char per cell, all in `style`.
    ///
    /// Stops at `max_x` (exclusive) or the canvas edge, whichever comes
    /// first. Returns the x position after the last character written.
    fn print_text_clipped(&mut self, x: u16, y: u16, text: &str, style: Style, max_x: u16) -> u16;

    /// Draw a border along the edges of `rect` in `style`.
    fn draw_border(&mut self, rect: Rect, chars: BorderChars, style: Style);

    /// Restyle every cell in `rect` without touching its glyph.
    fn paint_area(&mut self, rect: Rect, style: Style);
}

impl Draw for Canvas {
    fn print_text_clipped(&mut self, x: u16, y: u16, text: &str, style: Style, max_x: u16) -> u16 {
        let limit = max_x.min(self.width());
        let mut cx = x;
        for ch in text.chars() {
            if cx >= limit {
                break;
            }
            self.set(cx, y, Cell::new(ch, style));
            cx += 1;
        }
        cx
    }

    fn draw_border(&mut self, rect: Rect, chars: BorderChars, style: Style) {
        if rect.is_empty() {
            return;
        }
        let h_cell = Cell::new(chars.horizontal, style);
        let v_cell = Cell::new(chars.vertical, style);
        let right = rect.right() - 1;
        let bottom = rect.bottom() - 1;

        for x in rect.x..rect.right() {
            self.set(x, rect.y, h_cell);
            self.set(x, bottom, h_cell);
        }
        for y in rect.y..rect.bottom() {
            self.set(rect.x, y, v_cell);
            self.set(right, y, v_cell);
        }

        // Corners last so they win over the edges.
        self.set(rect.x, rect.y, Cell::new(chars.top_left, style));
        self.set(right, rect.y, Cell::new(chars.top_right, style));
        self.set(rect.x, bottom, Cell::new(chars.bottom_left, style));
        self.set(right, bottom, Cell::new(chars.bottom_right, style));
    }

    fn paint_area(&mut self, rect: Rect, style: Style) {
        let clipped = self.bounds().intersection(&rect);
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    cell.style = style;
                }
            }
        }
    }
}
