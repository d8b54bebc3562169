//! The fixed detection heuristics behind each checked rule.
//!
//! Matching is case-insensitive substring containment throughout: no
//! tokenization and no word-boundary checks, so a keyword embedded inside a
//! longer word still matches.  This is intentional current behavior — the
//! keyword and phrase sets below are the specified detection heuristics,
//! not an extensibility point, and the matching semantics must not be
//! tightened without flagging it as a behavior change.

use crate::context::ActionContext;

/// Keywords whose presence marks an action as unlawful (rule 1).
const ILLEGAL_KEYWORDS: &[&str] = &["hack", "steal", "fraud", "illegal"];

/// Phrases carrying catastrophic risk (rule 4).
const HIGH_RISK_PHRASES: &[&str] = &["deploy weapon", "erase all data", "cause harm"];

/// Phrases describing actions presumed not undoable once executed (rule 5).
const IRREVERSIBLE_PHRASES: &[&str] = &["delete account", "send money", "post publicly"];

/// Minimum acceptable truth score; at or below this the truth check fails.
const TRUTH_SCORE_FLOOR: f64 = 0.9;

/// Risk assigned when any high-risk phrase is present.
const HIGH_RISK_SCORE: f64 = 0.5;

/// Maximum tolerated catastrophic-risk score (the ">0.1%" of rule 4).
const RISK_THRESHOLD: f64 = 0.001;

/// Case-insensitive substring containment against a needle set.
fn contains_any(action: &str, needles: &[&str]) -> bool {
    let lower = action.to_lowercase();
    needles.iter().any(|needle| lower.contains(needle))
}

/// Rule 1: the action text mentions an illegal-action keyword.
pub(crate) fn violates_legality(action: &str) -> bool {
    contains_any(action, ILLEGAL_KEYWORDS)
}

/// Rule 2: the action text mentions lying, or the context's truth score is
/// at or below the floor.
pub(crate) fn violates_truth(action: &str, context: &ActionContext) -> bool {
    contains_any(action, &["lie"]) || context.truth_score <= TRUTH_SCORE_FLOOR
}

/// Rule 4 input: estimated severity of potential harm, in [0, 1].
pub(crate) fn catastrophic_risk(action: &str) -> f64 {
    if contains_any(action, HIGH_RISK_PHRASES) {
        HIGH_RISK_SCORE
    } else {
        0.0
    }
}

/// Rule 5 input: the action is presumed not undoable once executed.
pub(crate) fn is_irreversible(action: &str) -> bool {
    contains_any(action, IRREVERSIBLE_PHRASES)
}

/// Run every check unconditionally (no short-circuit) and collect the
/// violated rule indices.
///
/// The returned vector is sorted ascending: the reporting contract is
/// "cite by ascending rule index", independent of the order the checks
/// happen to run in.
pub(crate) fn collect_violations(action: &str, context: &ActionContext) -> Vec<u8> {
    let mut violations = Vec::new();

    if violates_legality(action) {
        violations.push(1);
    }
    if violates_truth(action, context) {
        violations.push(2);
    }
    if !context.verified {
        violations.push(3);
    }
    if catastrophic_risk(action) > RISK_THRESHOLD {
        violations.push(4);
    }
    if !context.consent && is_irreversible(action) {
        violations.push(5);
    }

    violations.sort_unstable();
    violations
}
