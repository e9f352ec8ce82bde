//! Mood frequency distribution over a filtered entry set

use crate::domain::moods::CategoryLookup;
use crate::domain::JournalEntry;
use std::collections::HashMap;

/// One mood's share of a time window
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionEntry {
    pub mood: String,
    pub count: usize,
    pub percentage: f64,
}

/// Count mood occurrences over an already time-filtered entry set.
///
/// Percentages are taken over the entries that carry a mood label, so
/// they sum to 100 (up to rounding) whenever any labeled entry exists.
/// Moods with zero occurrences in the window are excluded. Ordering is
/// count descending, then declaration order of the configured mood
/// list, then label, so output is stable across runs. Unknown labels
/// are included verbatim.
pub fn aggregate(entries: &[JournalEntry], lookup: &CategoryLookup) -> Vec<DistributionEntry> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        if let Some(mood) = &entry.mood {
            *counts.entry(mood.to_lowercase()).or_insert(0) += 1;
        }
    }

    let total: usize = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut distribution: Vec<DistributionEntry> = counts
        .into_iter()
        .map(|(mood, count)| DistributionEntry {
            percentage: count as f64 / total as f64 * 100.0,
            mood,
            count,
        })
        .collect();

    distribution.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| lookup.rank_of(&a.mood).cmp(&lookup.rank_of(&b.mood)))
            .then_with(|| a.mood.cmp(&b.mood))
    });

    distribution
}
