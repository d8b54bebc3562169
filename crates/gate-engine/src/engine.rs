use std::sync::Arc;

use tracing::{error, info, warn};

use audit_trail::{AuditEntry, AuditEvent, AuditSink};
use rule_catalog::{CatalogError, RuleCatalog};

use crate::checks;
use crate::context::ActionContext;
use crate::decision::Decision;

/// How many trail entries [`GateEngine::recent_log`] returns.
const RECENT_LOG_LIMIT: usize = 10;

/// Lifecycle state of the engine.
///
/// The only transition is `Active -> Halted`, triggered by
/// [`GateEngine::halt`]; there is no way out of `Halted` within the
/// process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Active,
    Halted,
}

/// Errors surfaced by [`GateEngine::validate`].
///
/// A veto is *not* an error — it is a normal [`Decision`] outcome.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The engine was halted; no further validation is possible.
    #[error("gate engine is halted; no further validation is possible")]
    Halted,

    /// A violation index missed the catalog. Impossible for the fixed
    /// indices the checks produce, but propagated rather than panicking.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Terminal signal returned by [`GateEngine::halt`].
///
/// The host is contractually required to treat this value as "stop all
/// further agent activity immediately" — typically by printing the notice
/// and terminating the session with a halt-specific exit status. The engine
/// itself never aborts the process.
#[must_use = "a halt signal must terminate the validation session"]
#[derive(Debug)]
pub struct HaltSignal {
    /// Operator-facing stop notice.
    pub notice: String,
}

/// The rule-evaluation engine.
///
/// Holds the immutable [`RuleCatalog`], an injected [`AuditSink`] for the
/// append-only trail, and the one-way lifecycle state. All evaluation is
/// synchronous, sub-millisecond CPU work over small strings; no external
/// resources are acquired.
pub struct GateEngine {
    catalog: RuleCatalog,
    sink: Arc<dyn AuditSink>,
    state: EngineState,
}

impl std::fmt::Debug for GateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GateEngine")
            .field("state", &self.state)
            .field("rules", &self.catalog.len())
            .field("trail_len", &self.sink.len())
            .finish()
    }
}

impl GateEngine {
    /// Create an active engine over the built-in catalog, recording a
    /// startup entry in `sink`.
    pub fn new(sink: Arc<dyn AuditSink>) -> Self {
        let catalog = RuleCatalog::new();
        sink.record(AuditEntry::new(
            AuditEvent::EngineStarted,
            format!("Gate initialized with {} rules", catalog.len()),
        ));
        info!(rules = catalog.len(), "gate engine initialized");

        Self {
            catalog,
            sink,
            state: EngineState::Active,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_halted(&self) -> bool {
        self.state == EngineState::Halted
    }

    /// The injected audit sink.
    pub fn sink(&self) -> &Arc<dyn AuditSink> {
        &self.sink
    }

    /// Evaluate one proposed action against every rule check.
    ///
    /// Records an `ActionProposed` entry before evaluation and a
    /// `ActionCleared` or `ActionVetoed` entry after it — every call is
    /// logged regardless of outcome (rule 6). Checks run unconditionally
    /// with no short-circuit; the veto message cites all violated indices
    /// and quotes the lowest-index rule's full text.
    ///
    /// Fails with [`EngineError::Halted`] once the engine has been halted;
    /// a halted engine never returns a normal decision.
    pub fn validate(
        &mut self,
        action: &str,
        context: &ActionContext,
    ) -> Result<Decision, EngineError> {
        if self.state == EngineState::Halted {
            warn!(action, "validation rejected: engine is halted");
            return Err(EngineError::Halted);
        }

        info!(action, "validating proposed action");
        self.sink.record(AuditEntry::new(
            AuditEvent::ActionProposed,
            action.to_string(),
        ));

        let violations = checks::collect_violations(action, context);

        if violations.is_empty() {
            info!(action, "action cleared");
            self.sink.record(AuditEntry::new(
                AuditEvent::ActionCleared,
                action.to_string(),
            ));
            return Ok(Decision::cleared());
        }

        let primary_text = self.catalog.text_of(violations[0])?;
        let decision = Decision::vetoed(violations.clone(), primary_text);

        warn!(
            action,
            ?violations,
            primary = primary_text,
            "action vetoed"
        );
        self.sink.record(
            AuditEntry::new(AuditEvent::ActionVetoed, decision.message.clone())
                .with_violations(violations),
        );

        Ok(decision)
    }

    /// The last 10 trail entries, rendered, most-recent-last.
    ///
    /// A bounded view for display; the underlying trail is never truncated.
    /// Idempotent between state changes.
    pub fn recent_log(&self) -> Vec<String> {
        self.sink
            .recent(RECENT_LOG_LIMIT)
            .iter()
            .map(AuditEntry::to_string)
            .collect()
    }

    /// Engage the emergency stop (rule 9).
    ///
    /// Records the terminal trail entry, transitions the engine to
    /// [`EngineState::Halted`], and returns the [`HaltSignal`] the host
    /// must act on. The transition is one-way; the terminal entry is
    /// recorded only on the first call.
    pub fn halt(&mut self) -> HaltSignal {
        if self.state != EngineState::Halted {
            error!("EMERGENCY STOP ACTIVATED");
            self.sink.record(AuditEntry::new(
                AuditEvent::EngineHalted,
                "All actions halted per Rule 9.".to_string(),
            ));
            self.state = EngineState::Halted;
        }

        HaltSignal {
            notice: "Red button pressed - system halted.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use audit_trail::MemorySink;

    fn engine() -> (GateEngine, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let engine = GateEngine::new(Arc::clone(&sink) as Arc<dyn AuditSink>);
        (engine, sink)
    }

    // -- approval path --

    #[test]
    fn benign_action_is_approved() {
        let (mut engine, _) = engine();
        let d = engine
            .validate("fetch repo", &ActionContext::default())
            .unwrap();
        assert!(d.approved);
        assert!(d.violations.is_empty());
        assert_eq!(d.message, "Proceed safely.");
    }

    // -- per-rule vetoes --

    #[test]
    fn illegal_keyword_vetoes_with_rule_one() {
        let (mut engine, _) = engine();
        for action in ["hack the db", "steal credentials", "wire fraud", "illegal dump"] {
            let d = engine.validate(action, &ActionContext::default()).unwrap();
            assert!(!d.approved, "expected veto for: {action}");
            assert!(d.violations.contains(&1));
        }
    }

    #[test]
    fn case_variants_of_hack_veto_identically() {
        let (mut engine, _) = engine();
        let ctx = ActionContext::default();
        let a = engine.validate("HACK the db", &ctx).unwrap();
        let b = engine.validate("hack the db", &ctx).unwrap();
        let c = engine.validate("HaCk the db", &ctx).unwrap();
        for d in [&a, &b, &c] {
            assert!(!d.approved);
            assert_eq!(d.violations, vec![1]);
        }
        assert_eq!(a.message, b.message);
        assert_eq!(b.message, c.message);
    }

    #[test]
    fn low_truth_score_vetoes_regardless_of_text() {
        let (mut engine, _) = engine();
        let ctx = ActionContext::default().with_truth_score(0.9);
        let d = engine.validate("fetch repo", &ctx).unwrap();
        assert!(!d.approved);
        assert!(d.violations.contains(&2));
    }

    #[test]
    fn unverified_context_vetoes_with_rule_three() {
        let (mut engine, _) = engine();
        let ctx = ActionContext::default().with_verified(false);
        let d = engine.validate("fetch repo", &ctx).unwrap();
        assert_eq!(d.violations, vec![3]);
    }

    #[test]
    fn high_risk_phrase_vetoes_with_rule_four() {
        let (mut engine, _) = engine();
        let d = engine
            .validate("deploy weapon to production", &ActionContext::default())
            .unwrap();
        assert!(d.violations.contains(&4));
    }

    #[test]
    fn irreversible_action_needs_consent() {
        let (mut engine, _) = engine();

        let without = engine
            .validate("delete account for bob", &ActionContext::default())
            .unwrap();
        assert!(without.violations.contains(&5));

        let with = engine
            .validate(
                "delete account for bob",
                &ActionContext::default().with_consent(true),
            )
            .unwrap();
        assert!(!with.violations.contains(&5));
        assert!(with.approved);
    }

    // -- multi-violation reporting --

    #[test]
    fn multiple_violations_all_collected_and_primary_is_lowest() {
        let (mut engine, _) = engine();
        let d = engine
            .validate("hack and delete account", &ActionContext::default())
            .unwrap();
        assert!(!d.approved);
        assert_eq!(d.violations, vec![1, 5]);
        assert!(d.message.contains("[1, 5]"));
        // Primary reason quotes rule 1, the lowest violated index.
        assert!(d.message.contains("Lawful by default"));
        assert!(!d.message.contains("Human sovereignty"));
    }

    // -- audit trail --

    #[test]
    fn every_validate_call_is_logged() {
        let (mut engine, sink) = engine();
        assert_eq!(sink.len(), 1); // startup entry

        engine
            .validate("fetch repo", &ActionContext::default())
            .unwrap();
        // proposed + cleared
        assert_eq!(sink.len(), 3);

        engine
            .validate("hack the db", &ActionContext::default())
            .unwrap();
        // proposed + vetoed
        assert_eq!(sink.len(), 5);

        let all = sink.snapshot();
        assert_eq!(all[1].event, AuditEvent::ActionProposed);
        assert_eq!(all[2].event, AuditEvent::ActionCleared);
        assert_eq!(all[3].event, AuditEvent::ActionProposed);
        assert_eq!(all[4].event, AuditEvent::ActionVetoed);
        assert_eq!(all[4].violations, Some(vec![1]));
    }

    #[test]
    fn recent_log_is_last_ten_in_call_order() {
        let (mut engine, sink) = engine();
        for i in 0..8 {
            engine
                .validate(&format!("fetch repo {i}"), &ActionContext::default())
                .unwrap();
        }
        // 1 startup + 16 validation entries in the full trail.
        assert_eq!(sink.len(), 17);

        let recent = engine.recent_log();
        assert_eq!(recent.len(), 10);
        // Most-recent-last: the final entry clears "fetch repo 7".
        assert!(recent[9].contains("Action cleared: fetch repo 7"));
        assert!(recent[8].contains("Action proposed: fetch repo 7"));
        assert!(recent[0].contains("fetch repo 3"));
    }

    #[test]
    fn recent_log_is_idempotent() {
        let (mut engine, _) = engine();
        for i in 0..6 {
            engine
                .validate(&format!("fetch repo {i}"), &ActionContext::default())
                .unwrap();
        }
        assert_eq!(engine.recent_log(), engine.recent_log());
    }

    // -- halt --

    #[test]
    fn halt_transitions_and_signals() {
        let (mut engine, sink) = engine();
        assert_eq!(engine.state(), EngineState::Active);

        let signal = engine.halt();
        assert_eq!(engine.state(), EngineState::Halted);
        assert!(engine.is_halted());
        assert!(signal.notice.contains("system halted"));

        let last = sink.recent(1);
        assert_eq!(last[0].event, AuditEvent::EngineHalted);
        assert!(last[0].detail.contains("Rule 9"));
    }

    #[test]
    fn validate_after_halt_is_rejected() {
        let (mut engine, sink) = engine();
        let _signal = engine.halt();
        let len_after_halt = sink.len();

        let err = engine
            .validate("fetch repo", &ActionContext::default())
            .unwrap_err();
        assert!(matches!(err, EngineError::Halted));
        // The rejected call records nothing.
        assert_eq!(sink.len(), len_after_halt);
    }

    #[test]
    fn repeated_halt_records_one_terminal_entry() {
        let (mut engine, sink) = engine();
        let _first = engine.halt();
        let len = sink.len();
        let _second = engine.halt();
        assert_eq!(sink.len(), len);
        assert!(engine.is_halted());
    }

    #[test]
    fn startup_records_initialization_entry() {
        let (_engine, sink) = engine();
        let all = sink.snapshot();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].event, AuditEvent::EngineStarted);
        assert!(all[0].detail.contains("15 rules"));
    }
}
