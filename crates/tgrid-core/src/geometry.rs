#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All coordinates are terminal cells, 0-indexed, origin at top-left.
//! Widget footprints, the log panel region, and the border interior are all
//! expressed as [`Rect`]s so placement checks reduce to containment and
//! overlap tests.

/// A rectangle of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle anchored at the origin.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// A single-row span starting at `(x, y)`.
    #[inline]
    pub const fn row_span(x: u16, y: u16, width: u16) -> Self {
        Self::new(x, y, width, 1)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Area in cells.
    #[inline]
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if `other` lies entirely inside this rectangle.
    ///
    /// An empty `other` is never contained.
    #[inline]
    pub const fn contains_rect(&self, other: &Rect) -> bool {
        !other.is_empty()
            && other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Check if the two rectangles share at least one cell.
    #[inline]
    pub const fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Compute the intersection with another rectangle.
    ///
    /// Returns an empty rectangle if the rectangles don't overlap.
    pub fn intersection(&self, other: &Rect) -> Rect {
        if !self.intersects(other) {
            return Rect::default();
        }
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// The rectangle shrunk by one cell on every side.
    ///
    /// For a full-screen grid this is the strict interior of the border.
    /// Rectangles narrower or shorter than 3 cells have an empty interior.
    pub const fn interior(&self) -> Rect {
        if self.width < 3 || self.height < 3 {
            return Rect::new(self.x.saturating_add(1), self.y.saturating_add(1), 0, 0);
        }
        Rect::new(self.x + 1, self.y + 1, self.width - 2, self.height - 2)
    }

    /// Clamp a point into the rectangle.
    ///
    /// Returns `None` for an empty rectangle.
    pub fn clamp_point(&self, x: u16, y: u16) -> Option<(u16, u16)> {
        if self.is_empty() {
            return None;
        }
        Some((
            x.clamp(self.x, self.right() - 1),
            y.clamp(self.y, self.bottom() - 1),
        ))
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// The full rectangle of this size anchored at the origin.
    #[inline]
    pub const fn bounds(self) -> Rect {
        Rect::from_size(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(5, 5, 10, 10);
        assert!(r.contains(5, 5));
        assert!(r.contains(14, 14));
        assert!(!r.contains(4, 5));
        assert!(!r.contains(15, 5));
        assert!(!r.contains(5, 15));
    }

    #[test]
    fn intersects_and_intersection_agree() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert!(a.intersects(&b));
        assert_eq!(a.intersection(&b), Rect::new(5, 5, 5, 5));

        let c = Rect::new(10, 0, 5, 5);
        assert!(!a.intersects(&c), "touching edges do not overlap");
        assert_eq!(a.intersection(&c), Rect::default());
    }

    #[test]
    fn empty_rect_never_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.intersects(&Rect::new(2, 2, 0, 4)));
    }

    #[test]
    fn contains_rect_requires_full_cover() {
        let outer = Rect::new(1, 1, 8, 3);
        assert!(outer.contains_rect(&Rect::row_span(2, 2, 2)));
        assert!(outer.contains_rect(&Rect::row_span(1, 1, 8)));
        assert!(!outer.contains_rect(&Rect::row_span(1, 1, 9)));
        assert!(!outer.contains_rect(&Rect::row_span(0, 1, 2)));
        assert!(!outer.contains_rect(&Rect::row_span(2, 2, 0)));
    }

    #[test]
    fn area_does_not_overflow() {
        assert_eq!(Rect::from_size(80, 24).area(), 1920);
        assert_eq!(Rect::new(3, 3, 0, 9).area(), 0);
        assert_eq!(Rect::from_size(u16::MAX, u16::MAX).area(), 65535 * 65535);
    }

    #[test]
    fn interior_of_grid_excludes_border() {
        let grid = Rect::from_size(10, 5);
        assert_eq!(grid.interior(), Rect::new(1, 1, 8, 3));
    }

    #[test]
    fn interior_of_tiny_grid_is_empty() {
        assert!(Rect::from_size(2, 5).interior().is_empty());
        assert!(Rect::from_size(5, 2).interior().is_empty());
        assert_eq!(Rect::from_size(3, 3).interior(), Rect::new(1, 1, 1, 1));
    }

    #[test]
    fn clamp_point_pins_to_edges() {
        let r = Rect::new(1, 1, 8, 3);
        assert_eq!(r.clamp_point(0, 0), Some((1, 1)));
        assert_eq!(r.clamp_point(50, 50), Some((8, 3)));
        assert_eq!(r.clamp_point(4, 2), Some((4, 2)));
        assert_eq!(Rect::default().clamp_point(0, 0), None);
    }

    #[test]
    fn size_bounds() {
        assert_eq!(Size::new(80, 24).bounds(), Rect::new(0, 0, 80, 24));
    }
}
