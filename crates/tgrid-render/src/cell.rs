#![forbid(unsafe_code)]

//! Cell and style types.
//!
//! A [`Cell`] is one display character plus its [`Style`]. Both are small
//! `Copy` values: the canvas stores them inline in a single row-major vector
//! and compares them bitwise when deciding whether a new SGR sequence is
//! needed during serialization.
//!
//! Styles are terminal-agnostic. They are resolved to escape sequences only
//! in [`crate::ansi`], at serialization time.

/// ANSI palette color.
///
/// Only the 16 standard terminal colors plus the terminal default are
/// modeled; the grid never emits true-color sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// The terminal's own default (SGR 39 / 49).
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// SGR parameter selecting this color as the foreground.
    #[must_use]
    pub const fn fg_code(self) -> u8 {
        match self.palette_index() {
            None => 39,
            Some(i) if i < 8 => 30 + i,
            Some(i) => 90 + (i - 8),
        }
    }

    /// SGR parameter selecting this color as the background.
    #[must_use]
    pub const fn bg_code(self) -> u8 {
        match self.palette_index() {
            None => 49,
            Some(i) if i < 8 => 40 + i,
            Some(i) => 100 + (i - 8),
        }
    }

    const fn palette_index(self) -> Option<u8> {
        match self {
            Self::Default => None,
            Self::Black => Some(0),
            Self::Red => Some(1),
            Self::Green => Some(2),
            Self::Yellow => Some(3),
            Self::Blue => Some(4),
            Self::Magenta => Some(5),
            Self::Cyan => Some(6),
            Self::White => Some(7),
            Self::BrightBlack => Some(8),
            Self::BrightRed => Some(9),
            Self::BrightGreen => Some(10),
            Self::BrightYellow => Some(11),
            Self::BrightBlue => Some(12),
            Self::BrightMagenta => Some(13),
            Self::BrightCyan => Some(14),
            Self::BrightWhite => Some(15),
        }
    }
}

bitflags::bitflags! {
    /// 8-bit cell style flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        /// Bold / increased intensity.
        const BOLD          = 0b0000_0001;
        /// Dim / decreased intensity.
        const DIM           = 0b0000_0010;
        /// Italic text.
        const ITALIC        = 0b0000_0100;
        /// Underlined text.
        const UNDERLINE     = 0b0000_1000;
        /// Blinking text.
        const BLINK         = 0b0001_0000;
        /// Reverse video (swap fg/bg).
        const REVERSE       = 0b0010_0000;
    }
}

/// Visual attributes of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    pub flags: StyleFlags,
}

impl Style {
    /// The terminal default: no colors, no flags.
    pub const PLAIN: Self = Self::new();

    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: Color::Default,
            bg: Color::Default,
            flags: StyleFlags::empty(),
        }
    }

    #[must_use]
    pub const fn fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    #[must_use]
    pub const fn bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    /// Add style flags, keeping any already set.
    #[must_use]
    pub const fn flags(mut self, flags: StyleFlags) -> Self {
        self.flags = self.flags.union(flags);
        self
    }

    #[must_use]
    pub const fn bold(self) -> Self {
        self.flags(StyleFlags::BOLD)
    }

    /// Whether this style needs no SGR parameters at all.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        *self == Self::PLAIN
    }
}

/// A single grid cell: one character and its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    /// Glyph used for empty cells.
    pub const BLANK_CHAR: char = ' ';

    #[inline]
    #[must_use]
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }

    /// A blank cell painted with `style`.
    #[inline]
    #[must_use]
    pub const fn blank(style: Style) -> Self {
        Self::new(Self::BLANK_CHAR, style)
    }

    /// Create a cell from a single character with the plain style.
    #[inline]
    #[must_use]
    pub const fn from_char(ch: char) -> Self {
        Self::new(ch, Style::PLAIN)
    }

    #[inline]
    #[must_use]
    pub const fn with_char(mut self, ch: char) -> Self {
        self.ch = ch;
        self
    }

    #[inline]
    #[must_use]
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Check if this cell shows no glyph.
    #[inline]
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.ch == Self::BLANK_CHAR
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Style::PLAIN)
    }
}
