//! Writing-streak calculation over active calendar days

use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

/// Streak statistics derived from the active calendar-day set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreakResult {
    pub current: u32,
    pub longest: u32,
    pub active_days: u32,
    pub last_active: Option<NaiveDate>,
}

/// Count consecutive active days ending at `reference` (inclusive).
///
/// Walks backward day-by-day and stops at the first day not in the
/// set. If `reference` itself is absent the streak is 0 even when the
/// previous day is active; this is deliberately non-forgiving
/// ("yesterday still counts" is not a thing here).
pub fn current_streak(active: &BTreeSet<NaiveDate>, reference: NaiveDate) -> u32 {
    let mut day = reference;
    let mut count = 0;

    while active.contains(&day) {
        count += 1;
        let Some(previous) = day.pred_opt() else {
            break;
        };
        day = previous;
    }

    count
}

/// Longest run of consecutive active days anywhere in the set.
///
/// Walks the distinct dates in order; a gap of exactly one day extends
/// the running counter, anything else closes it. Zero active days
/// yields 0, a single active day yields 1.
pub fn longest_streak(active: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for &day in active {
        run = match previous {
            Some(prev) if day - prev == Duration::days(1) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(day);
    }

    longest
}

/// Full streak statistics for a journal, relative to `reference`
/// (normally today).
pub fn calculate(active: &BTreeSet<NaiveDate>, reference: NaiveDate) -> StreakResult {
    StreakResult {
        current: current_streak(active, reference),
        longest: longest_streak(active),
        active_days: active.len() as u32,
        last_active: active.iter().next_back().copied(),
    }
}
