#![forbid(unsafe_code)]

//! Canvas grid storage.
//!
//! The `Canvas` is a 2D grid of [`Cell`]s representing one rendered frame.
//!
//! # Layout
//!
//! Cells are stored in row-major order: `index = y * width + x`.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height`
//! 2. Width and height never change after creation
//! 3. Out-of-bounds writes are ignored, never panic

use tgrid_core::geometry::Rect;

use crate::ansi;
use crate::cell::{Cell, Style};

/// A 2D grid of cells.
///
/// # Example
///
/// ```
/// use tgrid_render::canvas::Canvas;
/// use tgrid_render::cell::{Cell, Style};
///
/// let mut canvas = Canvas::new(4, 1, Style::PLAIN);
/// canvas.set(0, 0, Cell::from_char('H'));
/// canvas.set(1, 0, Cell::from_char('i'));
/// canvas.set(9, 9, Cell::from_char('!')); // ignored
/// assert_eq!(canvas.to_plain_lines(), vec!["Hi  ".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    /// Create a canvas with every cell blank and painted with `fill_style`.
    ///
    /// A zero width or height is clamped to 1 so the canvas is never empty.
    pub fn new(width: u16, height: u16, fill_style: Style) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let area = Rect::from_size(width, height).area() as usize;
        Self {
            width,
            height,
            cells: vec![Cell::blank(fill_style); area],
        }
    }

    /// Canvas width in cells.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Canvas height in cells.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Bounding rect of the entire canvas.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get a reference to the cell at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Get a mutable reference to the cell at (x, y).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Set the cell at (x, y).
    ///
    /// Does nothing if the coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = cell;
        }
    }

    /// Fill the part of `rect` that lies on the canvas with `cell`.
    pub fn fill(&mut self, rect: Rect, cell: Cell) {
        let clipped = self.bounds().intersection(&rect);
        for y in clipped.y..clipped.bottom() {
            for x in clipped.x..clipped.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Get raw access to the cell slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get the cells of row `y`.
    ///
    /// Returns `None` if `y` is out of bounds.
    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Iterate over rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }

    /// Row text without any styling.
    pub fn to_plain_lines(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.ch).collect())
            .collect()
    }

    /// Serialize the canvas into one frame string.
    ///
    /// The frame starts with an SGR reset. Within a row an SGR sequence is
    /// emitted only where a cell's style differs from the previous cell's;
    /// a non-plain style is reset before each row's `\n`. No cursor movement
    /// or screen clearing is embedded.
    pub fn serialize(&self) -> String {
        // Glyphs plus a typical sprinkling of SGR changes.
        let mut out = String::with_capacity(self.cells.len() * 2 + self.height as usize * 8);
        out.push_str(ansi::SGR_RESET);
        for row in self.rows() {
            let mut current = Style::PLAIN;
            for cell in row {
                if cell.style != current {
                    ansi::push_style(&mut out, cell.style);
                    current = cell.style;
                }
                out.push(cell.ch);
            }
            if !current.is_plain() {
                out.push_str(ansi::SGR_RESET);
            }
            out.push('\n');
        }
        out
    }
}
