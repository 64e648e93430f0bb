//! Selection state for grid views.
//!
//! This module provides the data structures and algorithms behind grid
//! selection:
//!
//! - [`SpanSet`]: a run-length-encoded set of selected indices on one axis
//!   (rows or columns), with merge-on-select and split-on-deselect algebra
//! - [`GridPoint`] / [`GridRect`]: integer cell geometry with **inclusive**
//!   boundary semantics
//! - [`Selection`]: a rectangle plus the anchors of the gesture that created
//!   it, adjustable in place when rows or columns are inserted or deleted
//! - [`SelectionModel`]: the aggregate controller a grid view talks to
//!
//! Data flows in two directions. User gestures go through the
//! [`SelectionModel`] mutators, which drive the [`Selection`] and [`SpanSet`]
//! algebra and coalesce into one batched change notification. Structural
//! grid edits arrive from the grid host through the `adjust_for_*` hooks and
//! propagate to every live selection, each of which reports exactly one of
//! three outcomes ([`Adjustment`]).

mod geom;
mod selection;
mod selection_model;
mod span_set;

pub use geom::{GridPoint, GridRect};
pub use selection::{Adjustment, Selection};
pub use selection_model::{SelectionKind, SelectionModel, SelectionOptions, SelectionSnapshot};
pub use span_set::{Span, SpanSet};
