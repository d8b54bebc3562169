//! # rule-catalog
//!
//! The fixed, ordered catalog of north-star policy rules enforced by the
//! northgate gate engine.  The catalog is pure data: an immutable static
//! slice of 15 statements, addressable by their stable 1-based index.
//!
//! Rule indices are semantically meaningful — index 1 carries the highest
//! precedence when several rules are cited for the same action — and are
//! used as stable identifiers when cross-referencing violations in
//! decisions and audit entries.
//!
//! ## Quick start
//!
//! ```rust
//! use rule_catalog::RuleCatalog;
//!
//! let catalog = RuleCatalog::new();
//! let text = catalog.text_of(1).unwrap();
//! assert!(text.contains("Lawful"));
//! ```

mod catalog;

// Re-export primary public types at the crate root for convenience.
pub use catalog::{CatalogError, Rule, RuleCatalog, RULES, RULE_COUNT};
