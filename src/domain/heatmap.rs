//! Full-year calendar heatmap construction

use crate::domain::buckets::DayBucket;
use crate::domain::moods::{CategoryLookup, NEUTRAL_COLOR};
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeMap;

/// Color used for days without any entries.
pub const EMPTY_COLOR: &str = "#f0f0f0";

/// One calendar day in the heatmap grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Category key of the day's representative mood, `None` for
    /// empty days and unclassified moods.
    pub category: Option<String>,
    pub color: String,
    pub entry_count: usize,
}

impl DayCell {
    pub fn has_entries(&self) -> bool {
        self.entry_count > 0
    }
}

/// Build the week-column grid for a full year.
///
/// Walks every date from Jan 1 to Dec 31 (365 or 366 iterations)
/// whether or not entries exist, so coverage is always complete. A
/// column closes after emitting a Sunday or at the end of the year:
/// the first and last columns may hold fewer than seven cells, all
/// interior columns hold exactly seven.
pub fn build_heatmap(
    year: i32,
    buckets: &BTreeMap<NaiveDate, DayBucket>,
    lookup: &CategoryLookup,
) -> Vec<Vec<DayCell>> {
    let mut columns = Vec::new();
    let mut column = Vec::new();

    let Some(start) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        return columns;
    };

    let mut date = start;
    while date.year() == year {
        column.push(make_cell(date, buckets.get(&date), lookup));

        if date.weekday() == Weekday::Sun {
            columns.push(std::mem::take(&mut column));
        }

        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }

    if !column.is_empty() {
        columns.push(column);
    }

    columns
}

fn make_cell(date: NaiveDate, bucket: Option<&DayBucket>, lookup: &CategoryLookup) -> DayCell {
    let Some(bucket) = bucket.filter(|b| b.count() > 0) else {
        return DayCell {
            date,
            category: None,
            color: EMPTY_COLOR.to_string(),
            entry_count: 0,
        };
    };

    // Unclassified moods (and mood-less entries) keep the correct
    // entry count but render with the neutral color.
    match bucket
        .representative_mood()
        .and_then(|mood| lookup.category_for(mood))
    {
        Some(category) => DayCell {
            date,
            category: Some(category.key.clone()),
            color: category.color.clone(),
            entry_count: bucket.count(),
        },
        None => DayCell {
            date,
            category: None,
            color: NEUTRAL_COLOR.to_string(),
            entry_count: bucket.count(),
        },
    }
}
