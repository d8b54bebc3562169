use std::fmt;

use serde::{Deserialize, Serialize};

/// A single immutable audit entry recording one event in the gate's life.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: uuid::Uuid,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub event: AuditEvent,
    /// Free-form detail: the proposed action text, the veto reason, or the
    /// halt notice, depending on the event.
    pub detail: String,
    /// Violated rule indices, ascending. Present only on veto entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<u8>>,
}

impl AuditEntry {
    /// Create a new entry with an auto-generated UUID v4 and the current UTC
    /// timestamp. `violations` defaults to `None`.
    pub fn new(event: AuditEvent, detail: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            timestamp: chrono::Utc::now(),
            event,
            detail,
            violations: None,
        }
    }

    /// Attach the violated rule indices to this entry, consuming and
    /// returning `self` for builder-style usage.
    pub fn with_violations(mut self, violations: Vec<u8>) -> Self {
        self.violations = Some(violations);
        self
    }
}

impl fmt::Display for AuditEntry {
    /// Renders the entry in the trail's line format:
    /// `[2025-11-30 12:00:00] Action proposed: fetch repo`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.event,
            self.detail
        )
    }
}

/// The kind of event being recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditEvent {
    EngineStarted,
    ActionProposed,
    ActionCleared,
    ActionVetoed,
    EngineHalted,
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::EngineStarted => "Engine started",
            Self::ActionProposed => "Action proposed",
            Self::ActionCleared => "Action cleared",
            Self::ActionVetoed => "Action vetoed",
            Self::EngineHalted => "Engine halted",
        };
        f.write_str(label)
    }
}
