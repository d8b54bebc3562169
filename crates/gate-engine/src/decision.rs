use serde::{Deserialize, Serialize};

/// The outcome of one validation call.
///
/// Invariant: `approved` is true exactly when `violations` is empty. Both
/// constructors maintain this; there is no other way to build a `Decision`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    /// Whether the proposed action may proceed.
    pub approved: bool,
    /// Violated rule indices, ascending. Empty on approval.
    pub violations: Vec<u8>,
    /// Human-readable explanation. On veto this lists every violated index
    /// and quotes the full text of the lowest-index violated rule.
    pub message: String,
}

impl Decision {
    /// An approval with no violations.
    pub fn cleared() -> Self {
        Self {
            approved: true,
            violations: Vec::new(),
            message: "Proceed safely.".to_string(),
        }
    }

    /// A veto citing the given violations.
    ///
    /// `violations` must be non-empty and sorted ascending; `primary_text`
    /// is the full statement of the lowest-index violated rule.
    pub fn vetoed(violations: Vec<u8>, primary_text: &str) -> Self {
        debug_assert!(!violations.is_empty());
        debug_assert!(violations.windows(2).all(|w| w[0] < w[1]));

        let message = format!(
            "Vetoed: rules {violations:?} violated. {primary_text}"
        );
        Self {
            approved: false,
            violations,
            message,
        }
    }
}
