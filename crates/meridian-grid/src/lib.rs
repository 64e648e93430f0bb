//! Selection tracking engine for interactive grid widgets.
//!
//! This crate records which cells, rows, and columns of a two-dimensional
//! grid are currently selected, keeps that record correct and minimal as the
//! user drags, clicks, and modifier-clicks, and keeps it correct as the
//! underlying row/column set is structurally edited (rows or columns
//! inserted, deleted, or moved) without being rebuilt from scratch.
//!
//! # Core Types
//!
//! - [`model::SpanSet`]: run-length-encoded one-dimensional selection set
//!   with merge/subtract algebra and bounded undo
//! - [`model::GridRect`]: inclusive-bound integer rectangle (a rectangle
//!   with zero extent occupies exactly one cell)
//! - [`model::Selection`]: a rectangle plus gesture anchors, with
//!   incremental structural-edit adjustment
//! - [`model::SelectionModel`]: the aggregate controller holding the
//!   selection list, row/column projections, header row/column span sets,
//!   and change batching
//!
//! Rendering, cell editing, and data adapters are external collaborators:
//! this crate is purely in-memory state reached through the
//! [`SelectionModel`](model::SelectionModel) query and mutator surface,
//! with change notification delivered through a
//! [`Signal`](meridian_grid_core::Signal).
//!
//! # Example
//!
//! ```
//! use meridian_grid::model::{SelectionModel, SelectionOptions};
//!
//! let mut selection = SelectionModel::with_options(
//!     SelectionOptions::default().with_multi_select(true),
//! );
//! selection.set_row_count(100);
//! selection.set_column_count(20);
//!
//! selection.selection_changed.connect(|snapshot| {
//!     println!("{} selection(s)", snapshot.selections.len());
//! });
//!
//! // Drag from (1, 2) spanning 3 columns and 4 rows
//! selection.select(1, 2, 2, 3, false);
//! assert!(selection.is_cell_selected(3, 5));
//!
//! // The grid host deleted rows 0-9; the selection follows
//! selection.adjust_for_rows_deleted(0, 10);
//! assert!(!selection.has_selections());
//! ```

pub mod model;
pub mod prelude;

pub use model::{
    Adjustment, GridPoint, GridRect, Selection, SelectionKind, SelectionModel, SelectionOptions,
    SelectionSnapshot, Span, SpanSet,
};
