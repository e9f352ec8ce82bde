//! Calendar-day bucketing of journal entries

use crate::domain::JournalEntry;
use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};

/// Entries sharing one calendar day, in caller-supplied order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayBucket {
    pub entries: Vec<JournalEntry>,
}

impl DayBucket {
    /// Number of entries written on this day.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Mood of the first entry supplied for this day.
    ///
    /// "First" means first in the caller's input order, not the
    /// chronologically earliest; a caller that wants time order must
    /// pre-sort the snapshot.
    pub fn representative_mood(&self) -> Option<&str> {
        self.entries.first().and_then(|entry| entry.mood.as_deref())
    }
}

/// Group entries by calendar day.
///
/// The calendar day is the date component of the entry's stored local
/// wall-clock timestamp; no timezone conversion is applied. Entries
/// without a parseable timestamp are skipped. With `year` set, entries
/// outside that year are dropped, so an out-of-range year yields an
/// empty map rather than an error. O(n) over the entry set.
pub fn bucket_by_day(
    entries: &[JournalEntry],
    year: Option<i32>,
) -> BTreeMap<NaiveDate, DayBucket> {
    let mut buckets: BTreeMap<NaiveDate, DayBucket> = BTreeMap::new();

    for entry in entries {
        let Some(timestamp) = entry.timestamp else {
            continue;
        };
        let date = timestamp.date();
        if year.is_some_and(|y| date.year() != y) {
            continue;
        }
        buckets.entry(date).or_default().entries.push(entry.clone());
    }

    buckets
}

/// Distinct calendar days that contain at least one entry.
pub fn active_dates(entries: &[JournalEntry]) -> BTreeSet<NaiveDate> {
    entries
        .iter()
        .filter_map(|entry| entry.timestamp.map(|t| t.date()))
        .collect()
}
