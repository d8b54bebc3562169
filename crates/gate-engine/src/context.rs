use serde::{Deserialize, Serialize};

/// Situational flags accompanying one validation call.
///
/// Constructed fresh per call by the host and not retained by the engine
/// beyond it; only its effect on the decision and the audit trail survives.
/// Absent fields default rather than error, so context handling is total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionContext {
    /// Whether the action's claims have been verified (rule 3).
    #[serde(default = "default_verified")]
    pub verified: bool,
    /// Whether explicit human consent was given for irreversible actions
    /// (rule 5).
    #[serde(default)]
    pub consent: bool,
    /// Estimated truthfulness of the action's claims, in [0, 1] (rule 2).
    #[serde(default = "default_truth_score")]
    pub truth_score: f64,
}

impl Default for ActionContext {
    fn default() -> Self {
        Self {
            verified: default_verified(),
            consent: false,
            truth_score: default_truth_score(),
        }
    }
}

impl ActionContext {
    /// Set the consent flag, consuming and returning `self`.
    pub fn with_consent(mut self, consent: bool) -> Self {
        self.consent = consent;
        self
    }

    /// Set the verified flag, consuming and returning `self`.
    pub fn with_verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    /// Set the truth score, consuming and returning `self`.
    pub fn with_truth_score(mut self, truth_score: f64) -> Self {
        self.truth_score = truth_score;
        self
    }
}

// ---------------------------------------------------------------------------
// Default-value functions used by serde
// ---------------------------------------------------------------------------

fn default_verified() -> bool {
    true
}

fn default_truth_score() -> f64 {
    1.0
}
