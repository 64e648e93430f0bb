//! Run-length-encoded selection set for one grid axis.
//!
//! [`SpanSet`] records which row or column indices are selected as a sorted
//! list of closed intervals ([`Span`]s). Selecting merges every overlapping
//! or abutting span into one; deselecting carves holes, splitting spans where
//! necessary. The set also keeps a bounded stack of snapshots so the most
//! recent `select` can be undone.
//!
//! # Invariant
//!
//! After every mutation the stored spans are sorted ascending by `start` and
//! pairwise non-overlapping and non-abutting: for consecutive spans,
//! `spans[i].stop + 1 < spans[i + 1].start`.

use meridian_grid_core::grid_trace;
use std::collections::VecDeque;

/// Default cap on the undo snapshot stack.
const DEFAULT_HISTORY_LIMIT: usize = 64;

/// A closed integer interval `[start, stop]` of selected indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: i64,
    pub stop: i64,
}

impl Span {
    /// Create a span from two endpoints, in either order.
    ///
    /// A single index is expressed as `Span::new(i, i)`.
    #[inline]
    pub fn new(a: i64, b: i64) -> Self {
        Self {
            start: a.min(b),
            stop: a.max(b),
        }
    }

    /// Check if an index lies within the span (endpoints included).
    #[inline]
    pub fn contains(&self, index: i64) -> bool {
        index >= self.start && index <= self.stop
    }

    /// Check if two closed intervals intersect, including full containment
    /// either way.
    #[inline]
    fn overlaps(&self, other: &Span) -> bool {
        self.start <= other.stop && other.start <= self.stop
    }

    /// Check if two spans are adjacent with no gap (one's stop is exactly
    /// one less than the other's start).
    #[inline]
    fn abuts(&self, other: &Span) -> bool {
        self.stop + 1 == other.start || other.stop + 1 == self.start
    }

    /// The smallest span covering both inputs.
    #[inline]
    fn merge(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            stop: self.stop.max(other.stop),
        }
    }
}

/// A run-length-encoded set of selected indices on one axis.
///
/// Used standalone for header-driven row and column selection, and as the
/// projection target when cell selections are flattened onto an axis.
///
/// # Example
///
/// ```
/// use meridian_grid::model::SpanSet;
///
/// let mut rows = SpanSet::new();
/// rows.select(2, 5);
/// rows.select(6, 8); // abuts [2, 5]: merged into one span
/// assert_eq!(rows.span_count(), 1);
/// assert!(rows.is_selected(7));
///
/// rows.deselect(4, 6); // carves a hole
/// assert_eq!(rows.indices(), vec![2, 3, 7, 8]);
/// ```
#[derive(Debug, Clone)]
pub struct SpanSet {
    /// Sorted, non-overlapping, non-abutting spans.
    spans: Vec<Span>,
    /// Snapshots pushed before each `select`, oldest first.
    history: VecDeque<Vec<Span>>,
    history_limit: usize,
}

impl Default for SpanSet {
    fn default() -> Self {
        Self::new()
    }
}

impl SpanSet {
    /// Create an empty set with the default undo history cap.
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create an empty set with a caller-controlled undo history cap.
    ///
    /// A limit of zero disables snapshots entirely;
    /// [`clear_most_recent_selection`](Self::clear_most_recent_selection)
    /// then becomes a no-op.
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            spans: Vec::new(),
            history: VecDeque::new(),
            history_limit: limit,
        }
    }

    /// Select every index in `[start, stop]` (endpoints in either order; a
    /// single index is `select(i, i)`).
    ///
    /// Every existing span that overlaps or abuts the new range is merged
    /// into it. A snapshot of the pre-mutation state is pushed first so the
    /// call can be undone.
    pub fn select(&mut self, start: i64, stop: i64) {
        self.store_state();

        let mut merged = Span::new(start, stop);
        let mut kept = Vec::with_capacity(self.spans.len() + 1);
        for span in self.spans.drain(..) {
            if span.overlaps(&merged) || span.abuts(&merged) {
                merged = merged.merge(&span);
            } else {
                kept.push(span);
            }
        }
        kept.push(merged);
        kept.sort_unstable_by_key(|s| s.start);
        self.spans = kept;

        grid_trace!(
            target: "meridian_grid::span_set",
            start = merged.start,
            stop = merged.stop,
            span_count = self.spans.len(),
            "selected span"
        );
        self.check_invariants();
    }

    /// Deselect every index in `[start, stop]` (endpoints in either order).
    ///
    /// Each overlapped span is replaced by its 0, 1, or 2 remainder
    /// fragments; spans outside the range pass through unchanged.
    pub fn deselect(&mut self, start: i64, stop: i64) {
        let target = Span::new(start, stop);
        let mut kept = Vec::with_capacity(self.spans.len() + 1);
        for span in self.spans.drain(..) {
            if !span.overlaps(&target) {
                kept.push(span);
                continue;
            }
            if span.start < target.start {
                kept.push(Span::new(span.start, target.start - 1));
            }
            if span.stop > target.stop {
                kept.push(Span::new(target.stop + 1, span.stop));
            }
        }
        self.spans = kept;

        grid_trace!(
            target: "meridian_grid::span_set",
            start = target.start,
            stop = target.stop,
            span_count = self.spans.len(),
            "deselected span"
        );
        self.check_invariants();
    }

    /// Check if an index is selected.
    pub fn is_selected(&self, index: i64) -> bool {
        self.spans.iter().any(|span| span.contains(index))
    }

    /// Returns every individually selected index, ascending.
    pub fn indices(&self) -> Vec<i64> {
        self.spans
            .iter()
            .flat_map(|span| span.start..=span.stop)
            .collect()
    }

    /// Read-only view of the stored spans, sorted ascending by start.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Number of stored spans.
    pub fn span_count(&self) -> usize {
        self.spans.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Remove all spans and drop the undo history.
    pub fn clear(&mut self) {
        self.spans.clear();
        self.history.clear();
    }

    /// Undo the most recent `select` by restoring the snapshot taken before
    /// it. No-op when no snapshot exists.
    pub fn clear_most_recent_selection(&mut self) {
        if let Some(previous) = self.history.pop_back() {
            self.spans = previous;
        }
    }

    fn store_state(&mut self) {
        if self.history_limit == 0 {
            return;
        }
        if self.history.len() == self.history_limit {
            self.history.pop_front();
        }
        self.history.push_back(self.spans.clone());
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) {
        for pair in self.spans.windows(2) {
            debug_assert!(
                pair[0].stop + 1 < pair[1].start,
                "spans must be sorted, non-overlapping, non-abutting: {:?}",
                self.spans
            );
        }
    }

    #[cfg(not(debug_assertions))]
    fn check_invariants(&self) {}
}
