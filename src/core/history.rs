//! Session history
//!
//! Successful conversions in the order they happened.

use crate::shared::types::HistoryEntry;
use tracing::debug;

/// Number of recent conversions shown in the history table
pub const DEFAULT_DISPLAY_LIMIT: usize = 40;

/// Session-scoped conversion history.
///
/// Created empty when a session starts and appended to on every successful
/// conversion. Entries are never pruned; only the displayed slice is limited.
#[derive(Debug, Clone, Default)]
pub struct ConversionHistory {
    entries: Vec<HistoryEntry>,
}

impl ConversionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: HistoryEntry) {
        debug!(
            id = %entry.id,
            from_unit = %entry.from_unit,
            to_unit = %entry.to_unit,
            total = self.entries.len() + 1,
            "recorded conversion"
        );
        self.entries.push(entry);
    }

    /// The last `limit` entries, oldest first
    pub fn recent(&self, limit: usize) -> &[HistoryEntry] {
        let start = self.entries.len().saturating_sub(limit);
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::UnitCategory;

    fn entry(value: f64) -> HistoryEntry {
        HistoryEntry::new(value, "meter", value / 1000.0, "kilometer", UnitCategory::Length)
    }

    #[test]
    fn test_starts_empty() {
        let history = ConversionHistory::new();
        assert!(history.is_empty());
        assert!(history.recent(DEFAULT_DISPLAY_LIMIT).is_empty());
    }

    #[test]
    fn test_record_keeps_insertion_order() {
        let mut history = ConversionHistory::new();
        history.record(entry(1.0));
        history.record(entry(2.0));

        let recent = history.recent(DEFAULT_DISPLAY_LIMIT);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].value, 1.0);
        assert_eq!(recent[1].value, 2.0);
    }

    #[test]
    fn test_display_slice_is_capped_but_history_is_not() {
        let mut history = ConversionHistory::new();
        for i in 0..55 {
            history.record(entry(i as f64));
        }

        assert_eq!(history.len(), 55);
        let recent = history.recent(DEFAULT_DISPLAY_LIMIT);
        assert_eq!(recent.len(), 40);
        assert_eq!(recent[0].value, 15.0);
        assert_eq!(recent[39].value, 54.0);
        assert_eq!(history.iter().next().map(|e| e.value), Some(0.0));
    }

    #[test]
    fn test_entries_get_distinct_ids() {
        let mut history = ConversionHistory::new();
        history.record(entry(1.0));
        history.record(entry(1.0));
        let ids: Vec<_> = history.iter().map(|e| e.id).collect();
        assert_ne!(ids[0], ids[1]);
    }
}
