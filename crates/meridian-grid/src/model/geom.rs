//! Integer cell geometry with inclusive boundary semantics.
//!
//! Grid coordinates are cell indices, not pixels. Unlike conventional
//! exclusive-bound rectangles, a [`GridRect`] occupies the closed range
//! `[origin, origin + extent]` on each axis: a rectangle with a zero extent
//! occupies exactly one cell, and `width == extent.x + 1`. All arithmetic in
//! this module honors that convention.

/// A cell position in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridPoint {
    pub x: i64,
    pub y: i64,
}

impl GridPoint {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };
}

impl From<(i64, i64)> for GridPoint {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// A rectangle of cells defined by origin and extent, both ends inclusive.
///
/// The occupied index range is `[origin.x, origin.x + extent.x]` by
/// `[origin.y, origin.y + extent.y]`. The extent is always non-negative;
/// constructors normalize reversed inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridRect {
    pub origin: GridPoint,
    pub extent: GridPoint,
}

impl GridRect {
    /// Create a rectangle from an origin and a (non-negative) extent.
    #[inline]
    pub const fn new(x: i64, y: i64, extent_x: i64, extent_y: i64) -> Self {
        Self {
            origin: GridPoint { x, y },
            extent: GridPoint {
                x: extent_x,
                y: extent_y,
            },
        }
    }

    /// Create a rectangle spanning two corner cells, in any order.
    ///
    /// Both corners are included in the result.
    #[inline]
    pub fn from_points(a: GridPoint, b: GridPoint) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self {
            origin: GridPoint { x, y },
            extent: GridPoint {
                x: a.x.max(b.x) - x,
                y: a.y.max(b.y) - y,
            },
        }
    }

    /// Create a normalized rectangle from a gesture origin and a signed
    /// extent (a drag can extend in any direction).
    #[inline]
    pub fn from_extent(x: i64, y: i64, extent_x: i64, extent_y: i64) -> Self {
        Self::from_points(
            GridPoint::new(x, y),
            GridPoint::new(x + extent_x, y + extent_y),
        )
    }

    /// Left edge column index (inclusive).
    #[inline]
    pub fn left(&self) -> i64 {
        self.origin.x
    }

    /// Top edge row index (inclusive).
    #[inline]
    pub fn top(&self) -> i64 {
        self.origin.y
    }

    /// Right edge column index (inclusive).
    #[inline]
    pub fn right(&self) -> i64 {
        self.origin.x + self.extent.x
    }

    /// Bottom edge row index (inclusive).
    #[inline]
    pub fn bottom(&self) -> i64 {
        self.origin.y + self.extent.y
    }

    /// One past the right edge.
    #[inline]
    pub fn right_exclusive(&self) -> i64 {
        self.right() + 1
    }

    /// One past the bottom edge.
    #[inline]
    pub fn bottom_exclusive(&self) -> i64 {
        self.bottom() + 1
    }

    /// Number of columns occupied.
    #[inline]
    pub fn width(&self) -> i64 {
        self.extent.x + 1
    }

    /// Number of rows occupied.
    #[inline]
    pub fn height(&self) -> i64 {
        self.extent.y + 1
    }

    /// Top-left cell.
    #[inline]
    pub fn top_left(&self) -> GridPoint {
        self.origin
    }

    /// Bottom-right cell (the corner opposite the origin).
    #[inline]
    pub fn corner(&self) -> GridPoint {
        GridPoint {
            x: self.right(),
            y: self.bottom(),
        }
    }

    /// Check if a cell is inside the rectangle (boundaries included).
    #[inline]
    pub fn contains(&self, point: GridPoint) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Translate the rectangle horizontally.
    #[inline]
    pub fn move_x(&mut self, delta: i64) {
        self.origin.x += delta;
    }

    /// Translate the rectangle vertically.
    #[inline]
    pub fn move_y(&mut self, delta: i64) {
        self.origin.y += delta;
    }

    /// Resize horizontally, keeping the left edge fixed.
    ///
    /// A positive delta moves the right edge rightward; a negative delta
    /// shrinks from the right.
    #[inline]
    pub fn grow_from_left(&mut self, delta_width: i64) {
        self.extent.x += delta_width;
    }

    /// Resize vertically, keeping the top edge fixed.
    #[inline]
    pub fn grow_from_top(&mut self, delta_height: i64) {
        self.extent.y += delta_height;
    }
}
