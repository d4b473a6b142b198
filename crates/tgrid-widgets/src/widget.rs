#![forbid(unsafe_code)]

//! The widget model.
//!
//! Widgets are plain data. The [`WidgetRegistry`](crate::registry::WidgetRegistry)
//! owns labels, buttons, and the log panel; the cursor is owned by whoever
//! drives input and is handed to the compositor each frame. [`Widget`] is a
//! borrowed, tagged view over all of them used when walking the scene in
//! layering order.

use std::fmt;

use tgrid_core::geometry::Rect;

/// Identifier of a button within one registry.
///
/// Ids are assigned in insertion order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ButtonId(pub(crate) usize);

impl ButtonId {
    /// Insertion index of the button.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Static text, left-aligned at `(col, row)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub row: u16,
    pub col: u16,
}

impl Label {
    /// Cells covered by the text.
    pub fn footprint(&self) -> Rect {
        Rect::row_span(self.col, self.row, self.text.chars().count() as u16)
    }
}

/// An interactive button. Its width is the label length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub id: ButtonId,
    pub label: String,
    pub row: u16,
    pub col: u16,
    pub visible: bool,
}

impl Button {
    #[inline]
    pub fn width(&self) -> u16 {
        self.label.chars().count() as u16
    }

    /// Cells covered by the label.
    pub fn footprint(&self) -> Rect {
        Rect::row_span(self.col, self.row, self.width())
    }

    /// Whether `(x, y)` is on this button, ignoring visibility.
    #[inline]
    pub fn covers(&self, x: u16, y: u16) -> bool {
        self.footprint().contains(x, y)
    }
}

/// One cell step in a cardinal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// The single cursor. Always drawn on top of everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cursor {
    /// Column.
    pub x: u16,
    /// Row.
    pub y: u16,
}

impl Cursor {
    #[inline]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Top-left cell inside the border.
    pub const fn home() -> Self {
        Self::new(1, 1)
    }

    /// Move one cell in `dir`, staying inside `bounds`. No wraparound.
    ///
    /// An empty `bounds` leaves the cursor where it is.
    #[must_use]
    pub fn step(self, dir: Direction, bounds: Rect) -> Self {
        let (x, y) = match dir {
            Direction::Up => (self.x, self.y.saturating_sub(1)),
            Direction::Down => (self.x, self.y.saturating_add(1)),
            Direction::Left => (self.x.saturating_sub(1), self.y),
            Direction::Right => (self.x.saturating_add(1), self.y),
        };
        match bounds.clamp_point(x, y) {
            Some((x, y)) => Self::new(x, y),
            None => self,
        }
    }
}

/// A fixed screen region showing the tail of the log buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPanel {
    pub region: Rect,
    /// Drawn on the first row of the region when present.
    pub title: Option<String>,
}

impl LogPanel {
    /// The rows available for log lines, below the title if there is one.
    pub fn content_area(&self) -> Rect {
        match self.title {
            Some(_) => Rect::new(
                self.region.x,
                self.region.y.saturating_add(1),
                self.region.width,
                self.region.height.saturating_sub(1),
            ),
            None => self.region,
        }
    }
}

/// Borrowed, tagged view of one element of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget<'a> {
    /// Occupies the outermost rows and columns of the grid.
    Border(Rect),
    Label(&'a Label),
    Button(&'a Button),
    LogPanel(&'a LogPanel),
    /// Text-entry prompt. Painted over its whole row up to the right
    /// border, below the log panel.
    Prompt(&'a Label),
    Cursor(Cursor),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(label: &str, row: u16, col: u16) -> Button {
        Button {
            id: ButtonId(0),
            label: label.to_string(),
            row,
            col,
            visible: true,
        }
    }

    #[test]
    fn button_footprint_is_label_width() {
        let b = button("Go", 2, 2);
        assert_eq!(b.footprint(), Rect::new(2, 2, 2, 1));
        assert!(b.covers(2, 2));
        assert!(b.covers(3, 2));
        assert!(!b.covers(4, 2));
        assert!(!b.covers(2, 1));
    }

    #[test]
    fn cursor_step_clamps_to_bounds() {
        let inner = Rect::from_size(10, 5).interior();
        let c = Cursor::home();
        assert_eq!(c.step(Direction::Up, inner), c);
        assert_eq!(c.step(Direction::Left, inner), c);
        assert_eq!(c.step(Direction::Right, inner), Cursor::new(2, 1));
        assert_eq!(Cursor::new(8, 3).step(Direction::Right, inner), Cursor::new(8, 3));
        assert_eq!(Cursor::new(8, 3).step(Direction::Down, inner), Cursor::new(8, 3));
    }

    #[test]
    fn cursor_step_in_empty_bounds_stays_put() {
        let c = Cursor::new(4, 4);
        assert_eq!(c.step(Direction::Down, Rect::default()), c);
    }

    #[test]
    fn titled_panel_content_skips_first_row() {
        let panel = LogPanel {
            region: Rect::new(20, 1, 10, 4),
            title: Some("Log".into()),
        };
        assert_eq!(panel.content_area(), Rect::new(20, 2, 10, 3));

        let untitled = LogPanel {
            title: None,
            ..panel
        };
        assert_eq!(untitled.content_area(), Rect::new(20, 1, 10, 4));
    }

    #[test]
    fn button_id_display() {
        assert_eq!(ButtonId(3).to_string(), "#3");
        assert_eq!(ButtonId(3).index(), 3);
    }
}
