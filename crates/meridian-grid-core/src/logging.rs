//! Logging facilities for Meridian Grid.
//!
//! Meridian Grid uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! ```
//!
//! The [`targets`] module holds the target strings used throughout the
//! workspace, so `RUST_LOG`-style directives can filter per subsystem, e.g.
//! `meridian_grid::selection=trace`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "meridian_grid_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "meridian_grid_core::signal";
    /// Span set (run-length selection algebra) target.
    pub const SPAN_SET: &str = "meridian_grid::span_set";
    /// Selection model target.
    pub const SELECTION: &str = "meridian_grid::selection";
}

/// Macros for common tracing patterns.
///
/// These are thin wrappers around the `tracing` macros with consistent
/// target naming across the workspace.
#[macro_export]
macro_rules! grid_trace {
    (target: $target:expr, $($arg:tt)*) => {
        tracing::trace!(target: $target, $($arg)*)
    };
    ($($arg:tt)*) => {
        tracing::trace!(target: "meridian_grid", $($arg)*)
    };
}

#[macro_export]
macro_rules! grid_debug {
    (target: $target:expr, $($arg:tt)*) => {
        tracing::debug!(target: $target, $($arg)*)
    };
    ($($arg:tt)*) => {
        tracing::debug!(target: "meridian_grid", $($arg)*)
    };
}
