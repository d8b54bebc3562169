//! Append-only audit trail for the northgate gate engine.
//!
//! Every validation the engine performs is recorded here, regardless of
//! outcome — the transparency rule applies to the gate itself.  The trail is
//! an explicit capability: the engine receives an [`AuditSink`]
//! implementation at construction time instead of writing to a hidden
//! process-wide logger, which keeps the trail's lifecycle visible and
//! testable.
//!
//! The default sink is [`MemorySink`], an in-memory append-only sequence
//! guarded by a single mutex so that entry ordering reflects a total order
//! of engine calls.  A session's entries can additionally be exported as a
//! [JSON Lines](https://jsonlines.org/) file via [`TrailWriter`] — an
//! export, not persistence: the authoritative trail lives and dies with the
//! process.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use audit_trail::{AuditEntry, AuditEvent, AuditSink, MemorySink};
//!
//! let sink = Arc::new(MemorySink::new());
//! sink.record(AuditEntry::new(
//!     AuditEvent::ActionProposed,
//!     "fetch repo".to_string(),
//! ));
//! assert_eq!(sink.len(), 1);
//! ```

pub mod entry;
pub mod sink;
pub mod writer;

// Re-export primary public types at the crate root for convenience.
pub use entry::{AuditEntry, AuditEvent};
pub use sink::{AuditSink, MemorySink};
pub use writer::{TrailWriteError, TrailWriter};
