//! Aggregate selection model for grid views.
//!
//! [`SelectionModel`] is the controller a grid view talks to. It owns, in
//! parallel, the ordered list of rectangular [`Selection`]s and their
//! flattened per-axis projections; two standalone [`SpanSet`]s for
//! header-driven row and column selection; an `all_rows_selected` fast path;
//! and the change-batching machinery that coalesces any number of mutations
//! into at most one `selection_changed` emission.
//!
//! # Example
//!
//! ```
//! use meridian_grid::model::{SelectionModel, SelectionOptions};
//!
//! let mut model = SelectionModel::with_options(
//!     SelectionOptions::default().with_multi_select(true),
//! );
//! model.set_row_count(50);
//!
//! model.selection_changed.connect(|snapshot| {
//!     println!("selected rows: {:?}", snapshot.selected_rows);
//! });
//!
//! model.begin_change();
//! model.select(0, 2, 3, 3, false);
//! model.select_rows(10, 12);
//! model.end_change(); // exactly one notification
//! ```

use meridian_grid_core::{Signal, grid_debug};

use super::geom::{GridPoint, GridRect};
use super::selection::{Adjustment, Selection};
use super::span_set::SpanSet;

/// What kind of gesture produced a selection, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// A rectangular cell selection.
    Cell,
    /// A header-driven row selection.
    Row,
    /// A header-driven column selection.
    Column,
}

/// Behavior flags consumed from the grid host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionOptions {
    /// Allow multiple simultaneous cell selections (Ctrl+click, Ctrl+drag).
    pub multi_select: bool,
    /// Keep at most one header-row highlight when projecting cell
    /// selections onto rows.
    pub single_row_selection: bool,
    /// Project cell selections into the row span set when a batch settles.
    pub auto_select_rows: bool,
    /// Project cell selections into the column span set when a batch settles.
    pub auto_select_columns: bool,
}

impl SelectionOptions {
    /// Builder-style setter for `multi_select`.
    pub fn with_multi_select(mut self, enabled: bool) -> Self {
        self.multi_select = enabled;
        self
    }

    /// Builder-style setter for `single_row_selection`.
    pub fn with_single_row_selection(mut self, enabled: bool) -> Self {
        self.single_row_selection = enabled;
        self
    }

    /// Builder-style setter for `auto_select_rows`.
    pub fn with_auto_select_rows(mut self, enabled: bool) -> Self {
        self.auto_select_rows = enabled;
        self
    }

    /// Builder-style setter for `auto_select_columns`.
    pub fn with_auto_select_columns(mut self, enabled: bool) -> Self {
        self.auto_select_columns = enabled;
        self
    }
}

/// Read-only view of the selection state, delivered with each
/// `selection_changed` emission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSnapshot {
    /// Every selected row index, ascending.
    pub selected_rows: Vec<i64>,
    /// Every selected column index, ascending.
    pub selected_columns: Vec<i64>,
    /// The live rectangular selections, oldest first.
    pub selections: Vec<Selection>,
}

/// Manages selection state for a grid view.
///
/// All operations are synchronous and run to completion on the calling
/// thread. The model is owned by a single hosting grid instance; callers
/// must serialize access externally if used outside a single-threaded UI
/// loop.
///
/// # Signals
///
/// - `selection_changed`: emitted once per settled non-silent change batch,
///   with a [`SelectionSnapshot`].
pub struct SelectionModel {
    /// Behavior flags.
    options: SelectionOptions,

    /// Current grid dimensions, pushed by the host.
    row_count: i64,
    column_count: i64,

    /// Rectangular cell selections, oldest first.
    selections: Vec<Selection>,
    /// Zero-width vertical projection of each selection, index-aligned with
    /// `selections`.
    flattened_x: Vec<GridRect>,
    /// Zero-height horizontal projection, index-aligned with `selections`.
    flattened_y: Vec<GridRect>,

    /// Rows selected via the row header.
    row_spans: SpanSet,
    /// Columns selected via the column header.
    column_spans: SpanSet,

    /// Fast path for "every row is selected". Mutually exclusive with
    /// `row_spans`; expanded into an explicit span before any partial
    /// deselection.
    all_rows_selected: bool,

    /// Gesture kinds, most recent first.
    kind_stack: Vec<SelectionKind>,

    /// Batch nesting depth.
    nested_changes: u32,
    /// A non-silent change was flagged in the current batch.
    changed: bool,
    /// Only silent changes were flagged so far.
    silently_changed: bool,

    /// Emitted when a non-silent change batch settles.
    pub selection_changed: Signal<SelectionSnapshot>,
}

impl Default for SelectionModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionModel {
    /// Creates a new selection model with default options.
    pub fn new() -> Self {
        Self::with_options(SelectionOptions::default())
    }

    /// Creates a new selection model with the given options.
    pub fn with_options(options: SelectionOptions) -> Self {
        Self {
            options,
            row_count: 0,
            column_count: 0,
            selections: Vec::new(),
            flattened_x: Vec::new(),
            flattened_y: Vec::new(),
            row_spans: SpanSet::new(),
            column_spans: SpanSet::new(),
            all_rows_selected: false,
            kind_stack: Vec::new(),
            nested_changes: 0,
            changed: false,
            silently_changed: false,
            selection_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Host-supplied state
    // =========================================================================

    /// Gets the behavior options.
    pub fn options(&self) -> SelectionOptions {
        self.options
    }

    /// Sets the behavior options.
    ///
    /// Changing options does not alter existing selections; subsequent
    /// gestures follow the new behavior.
    pub fn set_options(&mut self, options: SelectionOptions) {
        self.options = options;
    }

    /// Current row count, as last pushed by the grid host.
    pub fn row_count(&self) -> i64 {
        self.row_count
    }

    /// Current column count, as last pushed by the grid host.
    pub fn column_count(&self) -> i64 {
        self.column_count
    }

    /// Sets the row count. The host must keep this current; it bounds
    /// [`selected_rows`](Self::selected_rows) when every row is selected and
    /// is used to materialize the all-rows flag into an explicit span.
    pub fn set_row_count(&mut self, rows: i64) {
        self.row_count = rows.max(0);
    }

    /// Sets the column count.
    pub fn set_column_count(&mut self, columns: i64) {
        self.column_count = columns.max(0);
    }

    // =========================================================================
    // Change batching
    // =========================================================================

    /// Opens a change batch. Batches nest; mutations made while a batch is
    /// open coalesce into at most one `selection_changed` emission when the
    /// outermost batch ends.
    pub fn begin_change(&mut self) {
        self.nested_changes += 1;
    }

    /// Closes a change batch.
    ///
    /// When the outermost batch ends with a flagged change, auto-projection
    /// runs (per [`SelectionOptions`]) and `selection_changed` fires exactly
    /// once, unless every change in the batch was silent.
    ///
    /// # Panics
    ///
    /// Panics when called without a matching [`begin_change`](Self::begin_change):
    /// an unbalanced batch is a caller bug, not a recoverable condition.
    pub fn end_change(&mut self) {
        assert!(
            self.nested_changes > 0,
            "end_change called without matching begin_change"
        );
        self.nested_changes -= 1;
        if self.nested_changes == 0 && (self.changed || self.silently_changed) {
            self.settle_batch();
        }
    }

    fn set_changed(&mut self, silent: bool) {
        if silent {
            self.silently_changed = true;
        } else {
            self.changed = true;
        }
    }

    fn settle_batch(&mut self) {
        if self.options.auto_select_rows {
            self.select_rows_from_cells(0, false);
        }
        if self.options.auto_select_columns {
            self.select_columns_from_cells(0);
        }

        let notify = self.changed;
        self.changed = false;
        self.silently_changed = false;

        if notify {
            grid_debug!(
                target: "meridian_grid::selection",
                selection_count = self.selections.len(),
                "selection batch settled"
            );
            self.selection_changed.emit(self.snapshot());
        }
    }

    /// Builds a read-only snapshot of the current selection state.
    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            selected_rows: self.selected_rows(),
            selected_columns: self.selected_columns(),
            selections: self.selections.clone(),
        }
    }

    // =========================================================================
    // Cell selection mutators
    // =========================================================================

    /// Selects a rectangle from a gesture origin and signed extent.
    ///
    /// With `multi_select` enabled the new selection is appended; otherwise
    /// it replaces whatever was selected. A `silent` selection still updates
    /// state but does not, by itself, cause a notification.
    pub fn select(
        &mut self,
        origin_x: i64,
        origin_y: i64,
        extent_x: i64,
        extent_y: i64,
        silent: bool,
    ) {
        self.begin_change();
        let selection = Selection::new(origin_x, origin_y, extent_x, extent_y);
        if !self.options.multi_select {
            self.selections.clear();
            self.flattened_x.clear();
            self.flattened_y.clear();
        }
        self.flattened_x.push(selection.flattened_x());
        self.flattened_y.push(selection.flattened_y());
        self.selections.push(selection);
        self.push_kind(SelectionKind::Cell);
        self.set_changed(silent);
        self.end_change();
    }

    /// Selects a single cell.
    pub fn select_cell(&mut self, x: i64, y: i64) {
        self.select(x, y, 0, 0, false);
    }

    /// Toggles a rectangle: removes the existing selection with an identical
    /// footprint, or selects it if there is none.
    pub fn toggle_select(&mut self, origin_x: i64, origin_y: i64, extent_x: i64, extent_y: i64) {
        let probe = GridRect::from_extent(origin_x, origin_y, extent_x, extent_y);
        match self.selections.iter().position(|s| s.rect() == probe) {
            Some(index) => {
                self.begin_change();
                self.remove_selection_at(index);
                self.set_changed(false);
                self.end_change();
            }
            None => self.select(origin_x, origin_y, extent_x, extent_y, false),
        }
    }

    /// Drops the last cell selection and its projections. Clears the
    /// all-rows flag too, unless `keep_row_selections` is set.
    pub fn clear_most_recent_selection(&mut self, keep_row_selections: bool) {
        self.begin_change();
        if !keep_row_selections && self.all_rows_selected {
            self.all_rows_selected = false;
            self.set_changed(false);
        }
        if self.selections.pop().is_some() {
            self.flattened_x.pop();
            self.flattened_y.pop();
            self.set_changed(false);
        }
        self.end_change();
    }

    /// Removes all selection state: cell selections, projections, row and
    /// column spans, the all-rows flag, and gesture precedence.
    pub fn clear(&mut self) {
        self.begin_change();
        self.selections.clear();
        self.flattened_x.clear();
        self.flattened_y.clear();
        self.row_spans.clear();
        self.column_spans.clear();
        self.all_rows_selected = false;
        self.kind_stack.clear();
        self.set_changed(false);
        self.end_change();
    }

    // =========================================================================
    // Row/column selection mutators
    // =========================================================================

    /// Selects rows `[start, stop]` via the row header. Supersedes the
    /// all-rows flag.
    pub fn select_rows(&mut self, start: i64, stop: i64) {
        self.begin_change();
        self.all_rows_selected = false;
        self.row_spans.select(start, stop);
        self.push_kind(SelectionKind::Row);
        self.set_changed(false);
        self.end_change();
    }

    /// Selects columns `[start, stop]` via the column header.
    pub fn select_columns(&mut self, start: i64, stop: i64) {
        self.begin_change();
        self.column_spans.select(start, stop);
        self.push_kind(SelectionKind::Column);
        self.set_changed(false);
        self.end_change();
    }

    /// Selects every row as an O(1) flag, superseding any explicit row
    /// spans.
    pub fn select_all_rows(&mut self) {
        self.begin_change();
        self.all_rows_selected = true;
        self.row_spans.clear();
        self.push_kind(SelectionKind::Row);
        self.set_changed(false);
        self.end_change();
    }

    /// Deselects a single row.
    ///
    /// An all-rows state is first materialized into an explicit
    /// `[0, row_count - 1]` span, since a single flag cannot represent a
    /// partial deselection.
    pub fn deselect_row(&mut self, row: i64) {
        self.begin_change();
        if self.all_rows_selected {
            self.all_rows_selected = false;
            self.row_spans.clear();
            if self.row_count > 0 {
                self.row_spans.select(0, self.row_count - 1);
            }
        }
        self.row_spans.deselect(row, row);
        self.set_changed(false);
        self.end_change();
    }

    /// Deselects a single column.
    pub fn deselect_column(&mut self, column: i64) {
        self.begin_change();
        self.column_spans.deselect(column, column);
        self.set_changed(false);
        self.end_change();
    }

    /// Undoes the most recent row-header selection.
    pub fn clear_most_recent_row_selection(&mut self) {
        self.begin_change();
        self.row_spans.clear_most_recent_selection();
        self.set_changed(false);
        self.end_change();
    }

    /// Undoes the most recent column-header selection.
    pub fn clear_most_recent_column_selection(&mut self) {
        self.begin_change();
        self.column_spans.clear_most_recent_selection();
        self.set_changed(false);
        self.end_change();
    }

    // =========================================================================
    // Projection
    // =========================================================================

    /// Projects the current cell selections into the row span set, so header
    /// rows highlight along with rectangular selections.
    ///
    /// Existing row spans are cleared first unless `keep_row_selections` is
    /// set. In `single_row_selection` mode only the most recent selection is
    /// projected. This is a projection helper: it does not flag a change.
    pub fn select_rows_from_cells(&mut self, offset: i64, keep_row_selections: bool) {
        if self.options.single_row_selection {
            self.row_spans.clear();
            if let Some(last) = self.selections.last() {
                let rect = last.rect();
                self.row_spans.select(rect.top() + offset, rect.bottom() + offset);
            }
            return;
        }

        if !keep_row_selections {
            self.row_spans.clear();
        }
        for index in 0..self.selections.len() {
            let rect = self.selections[index].rect();
            self.row_spans.select(rect.top() + offset, rect.bottom() + offset);
        }
    }

    /// Projects the current cell selections into the column span set.
    pub fn select_columns_from_cells(&mut self, offset: i64) {
        self.column_spans.clear();
        for index in 0..self.selections.len() {
            let rect = self.selections[index].rect();
            self.column_spans
                .select(rect.left() + offset, rect.right() + offset);
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Checks if a cell is selected through any representation: its column,
    /// its row (explicit or all-rows), or a rectangular cell selection.
    pub fn is_selected(&self, x: i64, y: i64) -> bool {
        self.is_column_selected(x) || self.is_row_selected(y) || self.is_cell_selected(x, y)
    }

    /// Checks if a cell lies inside any rectangular selection.
    pub fn is_cell_selected(&self, x: i64, y: i64) -> bool {
        self.selections.iter().any(|s| s.contains(x, y))
    }

    /// Checks if a row is selected via the all-rows flag or the row header.
    pub fn is_row_selected(&self, row: i64) -> bool {
        (self.all_rows_selected && row >= 0 && row < self.row_count)
            || self.row_spans.is_selected(row)
    }

    /// Checks if a column is selected via the column header.
    pub fn is_column_selected(&self, column: i64) -> bool {
        self.column_spans.is_selected(column)
    }

    /// Checks if any rectangular selection includes the given row, using the
    /// flattened vertical projections.
    pub fn is_cell_selected_in_row(&self, row: i64) -> bool {
        self.flattened_x
            .iter()
            .any(|r| r.contains(GridPoint::new(0, row)))
    }

    /// Checks if any rectangular selection includes the given column, using
    /// the flattened horizontal projections.
    pub fn is_cell_selected_in_column(&self, column: i64) -> bool {
        self.flattened_y
            .iter()
            .any(|r| r.contains(GridPoint::new(column, 0)))
    }

    /// Checks if a selection with this exact footprint exists.
    pub fn is_rectangle_selected(
        &self,
        origin_x: i64,
        origin_y: i64,
        extent_x: i64,
        extent_y: i64,
    ) -> bool {
        let probe = GridRect::from_extent(origin_x, origin_y, extent_x, extent_y);
        self.selections.iter().any(|s| s.rect() == probe)
    }

    /// Checks if a cell lies inside the most recent selection.
    pub fn is_in_current_selection_rectangle(&self, x: i64, y: i64) -> bool {
        self.selections.last().is_some_and(|s| s.contains(x, y))
    }

    /// Every selected row index, ascending. Bounded by the host-pushed row
    /// count when the all-rows flag is set.
    pub fn selected_rows(&self) -> Vec<i64> {
        if self.all_rows_selected {
            (0..self.row_count).collect()
        } else {
            self.row_spans.indices()
        }
    }

    /// Every selected column index, ascending.
    pub fn selected_columns(&self) -> Vec<i64> {
        self.column_spans.indices()
    }

    /// Returns `true` if any rectangular cell selection exists.
    pub fn has_selections(&self) -> bool {
        !self.selections.is_empty()
    }

    /// Returns `true` if any row is selected.
    pub fn has_row_selections(&self) -> bool {
        (self.all_rows_selected && self.row_count > 0) || !self.row_spans.is_empty()
    }

    /// Returns `true` if any column is selected.
    pub fn has_column_selections(&self) -> bool {
        !self.column_spans.is_empty()
    }

    /// Returns `true` if every row is selected via the fast-path flag.
    pub fn are_all_rows_selected(&self) -> bool {
        self.all_rows_selected
    }

    /// The live rectangular selections, oldest first.
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// The most recent rectangular selection.
    pub fn last_selection(&self) -> Option<&Selection> {
        self.selections.last()
    }

    /// Number of live rectangular selections.
    pub fn selection_count(&self) -> usize {
        self.selections.len()
    }

    /// The kind of the most recent selection gesture.
    pub fn last_selection_type(&self) -> Option<SelectionKind> {
        self.kind_stack.first().copied()
    }

    // =========================================================================
    // Structural-edit propagation
    // =========================================================================

    /// Adjusts every live selection for `count` rows inserted at `row`.
    pub fn adjust_for_rows_inserted(&mut self, row: i64, count: i64) {
        if count <= 0 {
            return;
        }
        grid_debug!(
            target: "meridian_grid::selection",
            row,
            count,
            "adjusting selections for inserted rows"
        );
        self.begin_change();
        self.row_count += count;
        for index in (0..self.selections.len()).rev() {
            let adjustment = self.selections[index].adjust_for_rows_inserted(row, count);
            self.apply_adjustment(index, adjustment);
        }
        self.end_change();
    }

    /// Adjusts every live selection for `count` rows deleted starting at
    /// `row`. Selections whose extent the deletion entirely consumed are
    /// dropped, together with their projections.
    pub fn adjust_for_rows_deleted(&mut self, row: i64, count: i64) {
        if count <= 0 {
            return;
        }
        grid_debug!(
            target: "meridian_grid::selection",
            row,
            count,
            "adjusting selections for deleted rows"
        );
        self.begin_change();
        self.row_count = (self.row_count - count).max(0);
        for index in (0..self.selections.len()).rev() {
            let adjustment = self.selections[index].adjust_for_rows_deleted(row, count);
            self.apply_adjustment(index, adjustment);
        }
        self.end_change();
    }

    /// Adjusts every live selection for `count` rows moved from `old_row` to
    /// `new_row`, as a deletion followed by an insertion.
    pub fn adjust_for_rows_moved(&mut self, old_row: i64, new_row: i64, count: i64) {
        if count <= 0 {
            return;
        }
        self.begin_change();
        for index in (0..self.selections.len()).rev() {
            let deleted = self.selections[index].adjust_for_rows_deleted(old_row, count);
            if deleted == Adjustment::Removed {
                self.apply_adjustment(index, deleted);
                continue;
            }
            let inserted = self.selections[index].adjust_for_rows_inserted(new_row, count);
            if deleted.changed() || inserted.changed() {
                self.refresh_projections_at(index);
                self.set_changed(false);
            }
        }
        self.end_change();
    }

    /// Adjusts every live selection for `count` columns inserted at `column`.
    pub fn adjust_for_columns_inserted(&mut self, column: i64, count: i64) {
        if count <= 0 {
            return;
        }
        self.begin_change();
        self.column_count += count;
        for index in (0..self.selections.len()).rev() {
            let adjustment = self.selections[index].adjust_for_columns_inserted(column, count);
            self.apply_adjustment(index, adjustment);
        }
        self.end_change();
    }

    /// Adjusts every live selection for `count` columns deleted starting at
    /// `column`.
    pub fn adjust_for_columns_deleted(&mut self, column: i64, count: i64) {
        if count <= 0 {
            return;
        }
        self.begin_change();
        self.column_count = (self.column_count - count).max(0);
        for index in (0..self.selections.len()).rev() {
            let adjustment = self.selections[index].adjust_for_columns_deleted(column, count);
            self.apply_adjustment(index, adjustment);
        }
        self.end_change();
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn apply_adjustment(&mut self, index: usize, adjustment: Adjustment) {
        match adjustment {
            Adjustment::Unaffected => {}
            Adjustment::Adjusted => {
                self.refresh_projections_at(index);
                self.set_changed(false);
            }
            Adjustment::Removed => {
                self.remove_selection_at(index);
                self.set_changed(false);
            }
        }
    }

    /// Removes a selection and its projections together, preserving the
    /// index alignment of the three parallel arrays.
    fn remove_selection_at(&mut self, index: usize) {
        self.selections.remove(index);
        self.flattened_x.remove(index);
        self.flattened_y.remove(index);
    }

    fn refresh_projections_at(&mut self, index: usize) {
        self.flattened_x[index] = self.selections[index].flattened_x();
        self.flattened_y[index] = self.selections[index].flattened_y();
    }

    /// Moves a gesture kind to the front of the precedence list.
    fn push_kind(&mut self, kind: SelectionKind) {
        self.kind_stack.retain(|k| *k != kind);
        self.kind_stack.insert(0, kind);
    }
}

static_assertions::assert_impl_all!(SelectionModel: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn counting_model(options: SelectionOptions) -> (SelectionModel, Arc<Mutex<Vec<SelectionSnapshot>>>) {
        let model = SelectionModel::with_options(options);
        let snapshots = Arc::new(Mutex::new(Vec::new()));
        let snapshots_clone = snapshots.clone();
        model.selection_changed.connect(move |snapshot| {
            snapshots_clone.lock().push(snapshot.clone());
        });
        (model, snapshots)
    }

    fn multi() -> SelectionOptions {
        SelectionOptions::default().with_multi_select(true)
    }

    #[test]
    fn test_select_and_query() {
        let (mut model, _) = counting_model(multi());
        model.select(1, 2, 2, 3, false);

        assert!(model.has_selections());
        assert!(model.is_cell_selected(3, 5));
        assert!(model.is_selected(3, 5));
        assert!(!model.is_cell_selected(4, 5));
        assert!(model.is_cell_selected_in_row(4));
        assert!(!model.is_cell_selected_in_row(6));
        assert!(model.is_cell_selected_in_column(2));
        assert!(!model.is_cell_selected_in_column(4));
        assert!(model.is_rectangle_selected(1, 2, 2, 3));
        assert!(!model.is_rectangle_selected(1, 2, 2, 2));
    }

    #[test]
    fn test_single_select_replaces() {
        let (mut model, _) = counting_model(SelectionOptions::default());
        model.select(0, 0, 1, 1, false);
        model.select(5, 5, 0, 0, false);
        assert_eq!(model.selection_count(), 1);
        assert!(model.is_cell_selected(5, 5));
        assert!(!model.is_cell_selected(0, 0));
    }

    #[test]
    fn test_multi_select_appends() {
        let (mut model, _) = counting_model(multi());
        model.select(0, 0, 1, 1, false);
        model.select(5, 5, 0, 0, false);
        assert_eq!(model.selection_count(), 2);
        assert!(model.is_cell_selected(0, 0));
        assert!(model.is_cell_selected(5, 5));
    }

    #[test]
    fn test_toggle_select_removes_identical_footprint() {
        let (mut model, _) = counting_model(multi());
        model.select(1, 1, 2, 2, false);
        model.select(8, 8, 0, 0, false);

        model.toggle_select(1, 1, 2, 2);
        assert_eq!(model.selection_count(), 1);
        assert!(!model.is_cell_selected(2, 2));
        assert!(!model.is_cell_selected_in_row(2));

        model.toggle_select(1, 1, 2, 2);
        assert_eq!(model.selection_count(), 2);
    }

    #[test]
    fn test_is_in_current_selection_rectangle() {
        let (mut model, _) = counting_model(multi());
        model.select(0, 0, 2, 2, false);
        model.select(10, 10, 1, 1, false);
        assert!(model.is_in_current_selection_rectangle(11, 11));
        assert!(!model.is_in_current_selection_rectangle(1, 1));
    }

    #[test]
    fn test_batching_fires_once_after_outermost_end() {
        let (mut model, snapshots) = counting_model(multi());
        model.begin_change();
        model.begin_change();
        model.select(0, 0, 1, 1, false);
        model.select(4, 4, 0, 0, false);
        model.end_change();
        assert_eq!(snapshots.lock().len(), 0);
        model.end_change();
        assert_eq!(snapshots.lock().len(), 1);
        assert_eq!(snapshots.lock()[0].selections.len(), 2);
    }

    #[test]
    fn test_unbatched_select_notifies_immediately() {
        let (mut model, snapshots) = counting_model(multi());
        model.select(0, 0, 0, 0, false);
        model.select(1, 1, 0, 0, false);
        assert_eq!(snapshots.lock().len(), 2);
    }

    #[test]
    #[should_panic(expected = "end_change called without matching begin_change")]
    fn test_unbalanced_end_change_panics() {
        let mut model = SelectionModel::new();
        model.end_change();
    }

    #[test]
    fn test_silent_batch_fires_nothing() {
        let (mut model, snapshots) = counting_model(multi());
        model.begin_change();
        model.select(0, 0, 1, 1, true);
        model.select(4, 4, 0, 0, true);
        model.end_change();
        assert_eq!(snapshots.lock().len(), 0);
        // State still changed
        assert_eq!(model.selection_count(), 2);
    }

    #[test]
    fn test_one_non_silent_change_forces_notification() {
        let (mut model, snapshots) = counting_model(multi());
        model.begin_change();
        model.select(0, 0, 1, 1, true);
        model.select(4, 4, 0, 0, false);
        model.select(8, 8, 0, 0, true);
        model.end_change();
        assert_eq!(snapshots.lock().len(), 1);
    }

    #[test]
    fn test_row_and_column_selection() {
        let (mut model, _) = counting_model(multi());
        model.select_rows(2, 4);
        model.select_columns(1, 1);

        assert!(model.is_row_selected(3));
        assert!(!model.is_row_selected(5));
        assert!(model.is_column_selected(1));
        assert!(model.has_row_selections());
        assert!(model.has_column_selections());
        assert_eq!(model.selected_rows(), vec![2, 3, 4]);
        assert_eq!(model.selected_columns(), vec![1]);

        // Column or row selection makes every cell on that line selected
        assert!(model.is_selected(1, 100));
        assert!(model.is_selected(100, 3));
        assert!(!model.is_selected(0, 0));
    }

    #[test]
    fn test_select_all_rows_and_partial_deselect() {
        let (mut model, _) = counting_model(multi());
        model.set_row_count(6);
        model.select_all_rows();

        assert!(model.are_all_rows_selected());
        assert!(model.is_row_selected(5));
        assert!(!model.is_row_selected(6));
        assert_eq!(model.selected_rows(), vec![0, 1, 2, 3, 4, 5]);

        // Partial deselection materializes the flag into an explicit span
        model.deselect_row(3);
        assert!(!model.are_all_rows_selected());
        assert_eq!(model.selected_rows(), vec![0, 1, 2, 4, 5]);
    }

    #[test]
    fn test_deselect_column() {
        let (mut model, _) = counting_model(multi());
        model.select_columns(0, 4);
        model.deselect_column(2);
        assert_eq!(model.selected_columns(), vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_select_rows_supersedes_all_rows_flag() {
        let (mut model, _) = counting_model(multi());
        model.set_row_count(10);
        model.select_all_rows();
        model.select_rows(1, 2);
        assert!(!model.are_all_rows_selected());
        assert_eq!(model.selected_rows(), vec![1, 2]);
    }

    #[test]
    fn test_clear_most_recent_selection() {
        let (mut model, _) = counting_model(multi());
        model.select(0, 0, 1, 1, false);
        model.select(5, 5, 1, 1, false);
        model.select_all_rows();

        model.clear_most_recent_selection(true);
        assert_eq!(model.selection_count(), 1);
        assert!(model.are_all_rows_selected());

        model.clear_most_recent_selection(false);
        assert_eq!(model.selection_count(), 0);
        assert!(!model.are_all_rows_selected());
    }

    #[test]
    fn test_clear_most_recent_row_and_column_selection() {
        let (mut model, _) = counting_model(multi());
        model.select_rows(0, 2);
        model.select_rows(8, 9);
        model.clear_most_recent_row_selection();
        assert_eq!(model.selected_rows(), vec![0, 1, 2]);

        model.select_columns(4, 5);
        model.clear_most_recent_column_selection();
        assert!(!model.has_column_selections());
    }

    #[test]
    fn test_clear_removes_everything() {
        let (mut model, _) = counting_model(multi());
        model.select(0, 0, 3, 3, false);
        model.select_rows(1, 2);
        model.select_columns(1, 2);
        model.select_all_rows();

        model.clear();
        assert!(!model.has_selections());
        assert!(!model.has_row_selections());
        assert!(!model.has_column_selections());
        assert!(model.last_selection_type().is_none());
    }

    #[test]
    fn test_last_selection_type_precedence() {
        let (mut model, _) = counting_model(multi());
        assert_eq!(model.last_selection_type(), None);
        model.select(0, 0, 0, 0, false);
        assert_eq!(model.last_selection_type(), Some(SelectionKind::Cell));
        model.select_rows(1, 1);
        assert_eq!(model.last_selection_type(), Some(SelectionKind::Row));
        model.select_columns(1, 1);
        assert_eq!(model.last_selection_type(), Some(SelectionKind::Column));
        model.select(2, 2, 0, 0, false);
        assert_eq!(model.last_selection_type(), Some(SelectionKind::Cell));
    }

    #[test]
    fn test_rows_inserted_propagates_to_all_selections() {
        let (mut model, snapshots) = counting_model(multi());
        model.set_row_count(20);
        model.select(0, 3, 2, 2, false); // rows 3-5
        model.select(0, 10, 1, 1, false); // rows 10-11
        snapshots.lock().clear();

        model.adjust_for_rows_inserted(4, 2);
        assert_eq!(model.row_count(), 22);

        let rects: Vec<_> = model.selections().iter().map(|s| s.rect()).collect();
        assert_eq!(rects[0], GridRect::new(0, 3, 2, 4)); // grown: rows 3-7
        assert_eq!(rects[1], GridRect::new(0, 12, 1, 1)); // moved: rows 12-13
        assert_eq!(snapshots.lock().len(), 1);
    }

    #[test]
    fn test_rows_deleted_drops_fully_covered_selection() {
        let (mut model, _) = counting_model(multi());
        model.set_row_count(20);
        model.select(0, 3, 2, 2, false); // rows 3-5
        model.select(0, 10, 1, 1, false); // rows 10-11

        model.adjust_for_rows_deleted(2, 5); // rows 2-6 go away
        assert_eq!(model.selection_count(), 1);
        assert_eq!(model.row_count(), 15);

        // The survivor shifted up, and the parallel projection arrays
        // stayed aligned with it.
        let rect = model.selections()[0].rect();
        assert_eq!(rect, GridRect::new(0, 5, 1, 1));
        assert!(model.is_cell_selected_in_row(5));
        assert!(!model.is_cell_selected_in_row(3));
        assert!(model.is_cell_selected_in_column(1));
    }

    #[test]
    fn test_rows_deleted_unaffected_selection_fires_no_notification() {
        let (mut model, snapshots) = counting_model(multi());
        model.set_row_count(20);
        model.select(0, 2, 1, 1, false); // rows 2-3
        snapshots.lock().clear();

        model.adjust_for_rows_deleted(10, 2);
        assert_eq!(snapshots.lock().len(), 0);
        assert_eq!(model.selections()[0].rect(), GridRect::new(0, 2, 1, 1));
    }

    #[test]
    fn test_rows_moved_is_delete_then_insert() {
        let (mut model, _) = counting_model(multi());
        model.set_row_count(20);
        model.select(0, 5, 0, 3, false); // rows 5-8

        // Move rows 0-1 to the end: the selection shifts up by two.
        model.adjust_for_rows_moved(0, 15, 2);
        assert_eq!(model.selections()[0].rect(), GridRect::new(0, 3, 0, 3));
        assert_eq!(model.row_count(), 20);
    }

    #[test]
    fn test_columns_inserted_and_deleted() {
        let (mut model, _) = counting_model(multi());
        model.set_column_count(10);
        model.select(3, 0, 2, 2, false); // columns 3-5

        model.adjust_for_columns_inserted(0, 1);
        assert_eq!(model.column_count(), 11);
        assert_eq!(model.selections()[0].rect(), GridRect::new(4, 0, 2, 2));

        model.adjust_for_columns_deleted(0, 2);
        assert_eq!(model.column_count(), 9);
        assert_eq!(model.selections()[0].rect(), GridRect::new(2, 0, 2, 2));

        model.adjust_for_columns_deleted(1, 9);
        assert!(!model.has_selections());
    }

    #[test]
    fn test_negative_count_edits_are_noops() {
        let (mut model, snapshots) = counting_model(multi());
        model.set_row_count(10);
        model.select(0, 3, 2, 2, false);
        snapshots.lock().clear();

        model.adjust_for_rows_inserted(3, -1);
        model.adjust_for_rows_deleted(3, 0);
        model.adjust_for_columns_inserted(0, -2);
        model.adjust_for_columns_deleted(0, 0);
        model.adjust_for_rows_moved(0, 5, 0);

        assert_eq!(model.row_count(), 10);
        assert_eq!(model.selections()[0].rect(), GridRect::new(0, 3, 2, 2));
        assert_eq!(snapshots.lock().len(), 0);
    }

    #[test]
    fn test_auto_select_rows_projection() {
        let (mut model, _) = counting_model(multi().with_auto_select_rows(true));
        model.select(0, 3, 2, 2, false); // rows 3-5
        model.select(0, 8, 1, 1, false); // rows 8-9

        assert!(model.is_row_selected(4));
        assert!(model.is_row_selected(8));
        assert!(!model.is_row_selected(6));
        assert_eq!(model.selected_rows(), vec![3, 4, 5, 8, 9]);
    }

    #[test]
    fn test_auto_select_rows_single_row_mode_projects_last_only() {
        let options = multi()
            .with_auto_select_rows(true)
            .with_single_row_selection(true);
        let (mut model, _) = counting_model(options);
        model.select(0, 3, 2, 2, false);
        model.select(0, 8, 1, 1, false);

        assert_eq!(model.selected_rows(), vec![8, 9]);
    }

    #[test]
    fn test_auto_select_columns_projection() {
        let (mut model, _) = counting_model(multi().with_auto_select_columns(true));
        model.select(2, 0, 1, 1, false); // columns 2-3
        model.select(7, 0, 0, 0, false); // column 7

        assert_eq!(model.selected_columns(), vec![2, 3, 7]);
        assert!(model.is_column_selected(7));
    }

    #[test]
    fn test_select_rows_from_cells_keep_existing() {
        let (mut model, _) = counting_model(multi());
        model.select_rows(0, 1);
        model.select(0, 5, 0, 0, false);

        model.select_rows_from_cells(0, true);
        assert_eq!(model.selected_rows(), vec![0, 1, 5]);

        model.select_rows_from_cells(0, false);
        assert_eq!(model.selected_rows(), vec![5]);
    }

    #[test]
    fn test_snapshot_contents() {
        let (mut model, snapshots) = counting_model(multi());
        model.set_row_count(5);
        model.begin_change();
        model.select(1, 1, 1, 1, false);
        model.select_rows(0, 0);
        model.select_columns(3, 4);
        model.end_change();

        let captured = snapshots.lock();
        assert_eq!(captured.len(), 1);
        let snapshot = &captured[0];
        assert_eq!(snapshot.selected_rows, vec![0]);
        assert_eq!(snapshot.selected_columns, vec![3, 4]);
        assert_eq!(snapshot.selections.len(), 1);
        assert_eq!(snapshot.selections[0].rect(), GridRect::new(1, 1, 1, 1));
    }
}
