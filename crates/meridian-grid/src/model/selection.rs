//! A selection rectangle with gesture anchors.
//!
//! [`Selection`] is the unit the grid view creates per drag gesture: an
//! inclusive [`GridRect`] plus the cell the gesture began at
//! (`first_selected_cell`) and the opposite corner (`last_selected_cell`).
//! Tracking both anchors keeps the pinned corner of a drag identifiable
//! while the rectangle is grown in any direction.
//!
//! When the grid host inserts or deletes rows or columns, each live
//! selection is adjusted **in place** rather than rebuilt; every adjustment
//! reports exactly one of three outcomes via [`Adjustment`], and callers
//! rely on [`Adjustment::Removed`] to drop selections whose extent a
//! deletion entirely consumed.

use super::geom::{GridPoint, GridRect};

/// Outcome of a structural-edit adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// The edit did not touch this selection.
    Unaffected,
    /// The selection was moved or resized in place.
    Adjusted,
    /// A deletion consumed the selection's entire extent; the caller must
    /// discard it.
    Removed,
}

impl Adjustment {
    /// Returns `true` unless the selection was left untouched.
    #[inline]
    pub fn changed(self) -> bool {
        !matches!(self, Adjustment::Unaffected)
    }
}

/// Which axis a structural edit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Columns,
    Rows,
}

/// A rectangular cell selection created by a user gesture.
///
/// # Example
///
/// ```
/// use meridian_grid::model::{Adjustment, Selection};
///
/// // Drag started at (0, 3) and covers rows 3-5, columns 0-2
/// let mut selection = Selection::new(0, 3, 2, 2);
///
/// // Two rows inserted above: the whole selection shifts down
/// assert_eq!(
///     selection.adjust_for_rows_inserted(3, 2),
///     Adjustment::Adjusted,
/// );
/// assert_eq!(selection.rect().top(), 5);
/// assert_eq!(selection.rect().bottom(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    rect: GridRect,
    /// The cell the gesture began at.
    first_selected_cell: GridPoint,
    /// The corner opposite the gesture start.
    last_selected_cell: GridPoint,
}

impl Selection {
    /// Create a selection from a gesture origin and a signed extent.
    ///
    /// The rectangle is normalized; the anchors preserve the gesture
    /// direction, so `first_selected_cell` is the origin argument even when
    /// the extent is negative.
    pub fn new(origin_x: i64, origin_y: i64, extent_x: i64, extent_y: i64) -> Self {
        let first = GridPoint::new(origin_x, origin_y);
        let last = GridPoint::new(origin_x + extent_x, origin_y + extent_y);
        Self {
            rect: GridRect::from_points(first, last),
            first_selected_cell: first,
            last_selected_cell: last,
        }
    }

    /// The selection's rectangle.
    #[inline]
    pub fn rect(&self) -> GridRect {
        self.rect
    }

    /// The cell the gesture began at.
    #[inline]
    pub fn first_selected_cell(&self) -> GridPoint {
        self.first_selected_cell
    }

    /// The corner opposite the gesture start.
    #[inline]
    pub fn last_selected_cell(&self) -> GridPoint {
        self.last_selected_cell
    }

    /// Check if a cell lies inside the selection.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        self.rect.contains(GridPoint::new(x, y))
    }

    /// The selection's shadow on the vertical axis: a zero-width rectangle
    /// spanning the same rows, used for fast row-membership tests.
    pub fn flattened_x(&self) -> GridRect {
        GridRect::new(0, self.rect.top(), 0, self.rect.extent.y)
    }

    /// The selection's shadow on the horizontal axis: a zero-height
    /// rectangle spanning the same columns.
    pub fn flattened_y(&self) -> GridRect {
        GridRect::new(self.rect.left(), 0, self.rect.extent.x, 0)
    }

    /// Translate the selection horizontally; both anchors move with it.
    pub fn move_x(&mut self, delta: i64) {
        self.rect.move_x(delta);
        self.first_selected_cell.x += delta;
        self.last_selected_cell.x += delta;
    }

    /// Translate the selection vertically; both anchors move with it.
    pub fn move_y(&mut self, delta: i64) {
        self.rect.move_y(delta);
        self.first_selected_cell.y += delta;
        self.last_selected_cell.y += delta;
    }

    /// Resize horizontally with the left edge fixed.
    ///
    /// The right edge moves by `delta_width`; whichever anchor sits on the
    /// moving edge is displaced with it, so the pinned corner of the gesture
    /// stays put.
    pub fn grow_from_left(&mut self, delta_width: i64) {
        let moving_edge = self.rect.right();
        if self.last_selected_cell.x == moving_edge {
            self.last_selected_cell.x += delta_width;
        } else if self.first_selected_cell.x == moving_edge {
            self.first_selected_cell.x += delta_width;
        }
        self.rect.grow_from_left(delta_width);
    }

    /// Resize vertically with the top edge fixed.
    pub fn grow_from_top(&mut self, delta_height: i64) {
        let moving_edge = self.rect.bottom();
        if self.last_selected_cell.y == moving_edge {
            self.last_selected_cell.y += delta_height;
        } else if self.first_selected_cell.y == moving_edge {
            self.first_selected_cell.y += delta_height;
        }
        self.rect.grow_from_top(delta_height);
    }

    /// Adjust for `count` rows inserted at `row`.
    pub fn adjust_for_rows_inserted(&mut self, row: i64, count: i64) -> Adjustment {
        self.adjust_inserted(Axis::Rows, row, count)
    }

    /// Adjust for `count` rows deleted starting at `row`.
    pub fn adjust_for_rows_deleted(&mut self, row: i64, count: i64) -> Adjustment {
        self.adjust_deleted(Axis::Rows, row, count)
    }

    /// Adjust for `count` columns inserted at `column`.
    pub fn adjust_for_columns_inserted(&mut self, column: i64, count: i64) -> Adjustment {
        self.adjust_inserted(Axis::Columns, column, count)
    }

    /// Adjust for `count` columns deleted starting at `column`.
    pub fn adjust_for_columns_deleted(&mut self, column: i64, count: i64) -> Adjustment {
        self.adjust_deleted(Axis::Columns, column, count)
    }

    fn start(&self, axis: Axis) -> i64 {
        match axis {
            Axis::Columns => self.rect.left(),
            Axis::Rows => self.rect.top(),
        }
    }

    fn end_exclusive(&self, axis: Axis) -> i64 {
        match axis {
            Axis::Columns => self.rect.right_exclusive(),
            Axis::Rows => self.rect.bottom_exclusive(),
        }
    }

    fn translate(&mut self, axis: Axis, delta: i64) {
        match axis {
            Axis::Columns => self.move_x(delta),
            Axis::Rows => self.move_y(delta),
        }
    }

    fn grow(&mut self, axis: Axis, delta: i64) {
        match axis {
            Axis::Columns => self.grow_from_left(delta),
            Axis::Rows => self.grow_from_top(delta),
        }
    }

    fn adjust_inserted(&mut self, axis: Axis, index: i64, count: i64) -> Adjustment {
        if count <= 0 || index >= self.end_exclusive(axis) {
            return Adjustment::Unaffected;
        }
        if index <= self.start(axis) {
            // Inserted at or before the leading edge: the whole selection
            // shifts away from it.
            self.translate(axis, count);
        } else {
            // Inserted strictly inside: the selection absorbs the new
            // rows/columns.
            self.grow(axis, count);
        }
        Adjustment::Adjusted
    }

    fn adjust_deleted(&mut self, axis: Axis, deletion_start: i64, count: i64) -> Adjustment {
        let start = self.start(axis);
        let end_exclusive = self.end_exclusive(axis);

        if count <= 0 || deletion_start >= end_exclusive {
            return Adjustment::Unaffected;
        }

        let deletion_end_exclusive = deletion_start + count;
        if deletion_end_exclusive <= start {
            // Deletion wholly before: shift toward it.
            self.translate(axis, -count);
            return Adjustment::Adjusted;
        }

        if deletion_start <= start {
            if deletion_end_exclusive >= end_exclusive {
                // Deletion fully covers the selection.
                return Adjustment::Removed;
            }
            // Deletion overlaps the leading edge with a remainder beyond it:
            // the survivors land at the deletion start.
            let new_extent = end_exclusive - deletion_end_exclusive - 1;
            self.translate(axis, deletion_start - start);
            self.grow(axis, new_extent - (end_exclusive - 1 - start));
            return Adjustment::Adjusted;
        }

        if deletion_end_exclusive >= end_exclusive {
            // Deletion starts inside and extends beyond: keep the head.
            self.grow(axis, deletion_start - end_exclusive);
        } else {
            // Deletion wholly inside: the selection contracts around it.
            self.grow(axis, -count);
        }
        Adjustment::Adjusted
    }
}
