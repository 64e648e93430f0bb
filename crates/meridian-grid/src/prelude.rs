//! Prelude module for Meridian Grid.
//!
//! This module re-exports the most commonly used types for convenient
//! importing:
//!
//! ```ignore
//! use meridian_grid::prelude::*;
//! ```

// ============================================================================
// Signal/Slot System
// ============================================================================

pub use meridian_grid_core::{ConnectionGuard, ConnectionId, Signal};

// ============================================================================
// Geometry
// ============================================================================

pub use crate::model::{GridPoint, GridRect};

// ============================================================================
// Selection Engine
// ============================================================================

pub use crate::model::{
    Adjustment, Selection, SelectionKind, SelectionModel, SelectionOptions, SelectionSnapshot,
    Span, SpanSet,
};
