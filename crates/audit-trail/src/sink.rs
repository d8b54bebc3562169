use std::sync::Mutex;

use crate::entry::AuditEntry;

/// Capability for recording and reading back audit entries.
///
/// Injected into the gate engine at construction so the trail's lifecycle is
/// explicit rather than hidden behind process-global logger state.
/// Implementations must be append-only: recorded entries are never dropped
/// or reordered within a process lifetime.
pub trait AuditSink: Send + Sync {
    /// Append one entry to the trail.
    fn record(&self, entry: AuditEntry);

    /// The last `limit` entries, most-recent-last.
    ///
    /// A bounded view only — the underlying trail is not truncated.
    /// Idempotent: repeated calls with no intervening `record` return the
    /// same slice.
    fn recent(&self, limit: usize) -> Vec<AuditEntry>;

    /// Total number of entries recorded so far.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A copy of the full trail, in record order.
    fn snapshot(&self) -> Vec<AuditEntry>;
}

/// The default in-memory sink.
///
/// A single mutex guards the trail so that entry ordering reflects a total
/// order of engine calls and no entry is lost or duplicated under
/// concurrent use.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<AuditEntry>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AuditSink for MemorySink {
    fn record(&self, entry: AuditEntry) {
        tracing::debug!(event = ?entry.event, detail = %entry.detail, "audit entry recorded");
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(entry);
    }

    fn recent(&self, limit: usize) -> Vec<AuditEntry> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let start = entries.len().saturating_sub(limit);
        entries[start..].to_vec()
    }

    fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    fn snapshot(&self) -> Vec<AuditEntry> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}
