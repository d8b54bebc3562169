//! # gate-engine
//!
//! Core rule-evaluation logic for the northgate pre-execution policy gate.
//! Given a proposed agent action and a context of situational flags, the
//! engine evaluates a fixed sequence of checks against the
//! [`rule_catalog`] and produces a [`Decision`]: approve, or veto with a
//! traceable rationale.  Every call is recorded in an injected
//! [`AuditSink`](audit_trail::AuditSink), and a one-way halt transition
//! stops all further validation.
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use audit_trail::MemorySink;
//! use gate_engine::{ActionContext, GateEngine};
//!
//! let mut engine = GateEngine::new(Arc::new(MemorySink::new()));
//! let decision = engine
//!     .validate("fetch repo", &ActionContext::default())
//!     .unwrap();
//! assert!(decision.approved);
//! ```

mod checks;
mod context;
mod decision;
mod engine;

// Re-export primary public API at crate root.
pub use context::ActionContext;
pub use decision::Decision;
pub use engine::{EngineError, EngineState, GateEngine, HaltSignal};
