//! Core systems for Meridian Grid.
//!
//! This crate provides the foundational components shared by the Meridian Grid
//! model layer:
//!
//! - **Signal/Slot System**: Type-safe change notification between the
//!   selection model and its consumers
//! - **Error Types**: Signal connection errors
//! - **Logging**: `tracing` target constants and logging macros
//!
//! The selection engine is single-threaded and synchronous, so signals here
//! dispatch directly on the emitting thread. There is no event loop and no
//! queued invocation; cross-thread use requires external serialization.
//!
//! # Signal/Slot Example
//!
//! ```
//! use meridian_grid_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! let _ = value_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::{Result, SignalError};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
