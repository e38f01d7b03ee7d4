//! Bounded history of spin results.

use chrono::{DateTime, Utc};

/// Maximum number of entries kept in a history log.
pub const HISTORY_CAP: usize = 20;

/// Immutable record of one settled spin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Category icon of the wheel that produced the result (e.g. "👤").
    pub icon: String,
    /// The picked label.
    pub label: String,
    /// When the spin settled.
    pub at: DateTime<Utc>,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current time.
    #[must_use]
    pub fn new(icon: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            at: Utc::now(),
        }
    }
}

/// Bounded, most-recent-first log of spin results.
///
/// The only mutation paths are [`record`](Self::record) and
/// [`clear`](Self::clear); entries beyond [`HISTORY_CAP`] are evicted
/// silently from the old end.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Prepends an entry, evicting the oldest beyond the cap.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAP);
    }

    /// Empties the log.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, most recent first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_prepends() {
        let mut log = HistoryLog::new();
        log.record(HistoryEntry::new("👤", "first"));
        log.record(HistoryEntry::new("👤", "second"));
        assert_eq!(log.entries()[0].label, "second");
        assert_eq!(log.entries()[1].label, "first");
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut log = HistoryLog::new();
        for i in 0..25 {
            log.record(HistoryEntry::new("🎵", format!("entry {i}")));
        }
        assert_eq!(log.len(), HISTORY_CAP);
        // Most recent first, oldest five evicted
        assert_eq!(log.entries()[0].label, "entry 24");
        assert_eq!(log.entries()[HISTORY_CAP - 1].label, "entry 5");
    }

    #[test]
    fn test_clear() {
        let mut log = HistoryLog::new();
        log.record(HistoryEntry::new("👤", "x"));
        log.clear();
        assert!(log.is_empty());
    }
}
