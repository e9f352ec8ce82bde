//! Journal entry snapshot type

use chrono::NaiveDateTime;

/// A single journal entry as supplied by the entry repository.
///
/// Entries are immutable from the engine's perspective; content and
/// word counts are opaque and irrelevant here. A `timestamp` of `None`
/// marks an entry whose stored timestamp could not be parsed: such
/// entries are skipped by date-bucketed aggregations (streaks,
/// heatmap) but still count toward mood distributions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub id: String,
    pub timestamp: Option<NaiveDateTime>,
    pub mood: Option<String>,
}

impl JournalEntry {
    pub fn new(id: String, timestamp: Option<NaiveDateTime>, mood: Option<String>) -> Self {
        JournalEntry {
            id,
            timestamp,
            mood,
        }
    }
}
