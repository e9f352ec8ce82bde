//! Streak statistics use case

use crate::domain::{buckets, streaks, StreakResult};
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use chrono::NaiveDate;

/// Service computing writing-streak statistics for a journal
pub struct StreaksService {
    repository: FileSystemRepository,
}

impl StreaksService {
    pub fn new(repository: FileSystemRepository) -> Self {
        StreaksService { repository }
    }

    /// Compute streaks relative to `reference` (normally today),
    /// optionally scoped to a single year. Returns the result plus
    /// any data-quality warnings from loading.
    pub fn execute(
        &self,
        year: Option<i32>,
        reference: NaiveDate,
    ) -> Result<(StreakResult, Vec<String>)> {
        let (from, to) = year_window(year);
        let (entries, warnings) = self.repository.load_entries(from, to)?;

        let active = buckets::active_dates(&entries);
        let result = streaks::calculate(&active, reference);

        Ok((result, warnings))
    }
}

/// First and last day of a year, or an unbounded window.
pub(crate) fn year_window(year: Option<i32>) -> (Option<NaiveDate>, Option<NaiveDate>) {
    match year {
        Some(y) => (
            NaiveDate::from_ymd_opt(y, 1, 1),
            NaiveDate::from_ymd_opt(y, 12, 31),
        ),
        None => (None, None),
    }
}
