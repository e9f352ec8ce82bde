//! Output formatting utilities

use crate::domain::distribution::DistributionEntry;
use crate::domain::heatmap::DayCell;
use crate::domain::{MoodCategory, StreakResult};
use chrono::Datelike;
use std::collections::HashMap;

/// Glyphs assigned to categories in declaration order.
const CATEGORY_GLYPHS: [char; 10] = ['#', '@', 'o', '*', '+', 'x', '%', '&', '=', '~'];

const EMPTY_GLYPH: char = '·';
const UNCATEGORIZED_GLYPH: char = '?';

const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Format streak statistics for display
pub fn format_streaks(result: &StreakResult) -> String {
    let last = result
        .last_active
        .map(|d| d.format("%d-%m-%Y").to_string())
        .unwrap_or_else(|| "never".to_string());

    format!(
        "Current streak: {} days\n\
         Longest streak: {} days\n\
         Active days:    {}\n\
         Last entry:     {}\n",
        result.current, result.longest, result.active_days, last
    )
}

/// Format a mood distribution for display
pub fn format_distribution(distribution: &[DistributionEntry]) -> String {
    if distribution.is_empty() {
        return "No moods found".to_string();
    }

    let mut output = String::new();
    for entry in distribution {
        output.push_str(&format!(
            "{:<14} {:>4}  {:>5.1}%\n",
            entry.mood, entry.count, entry.percentage
        ));
    }
    output
}

/// Format the category table for display
pub fn format_categories(categories: &[MoodCategory]) -> String {
    if categories.is_empty() {
        return "No categories configured".to_string();
    }

    let mut output = String::new();
    for category in categories {
        output.push_str(&format!(
            "{:<10} {:<10} {:<8} {}\n",
            category.key,
            category.name,
            category.color,
            category.moods.join(", ")
        ));
    }
    output
}

/// Render the week-column grid as text: one row per weekday, one
/// glyph per day, plus a legend mapping glyphs to categories.
pub fn format_heatmap(year: i32, columns: &[Vec<DayCell>], categories: &[MoodCategory]) -> String {
    let glyphs: HashMap<&str, char> = categories
        .iter()
        .enumerate()
        .map(|(i, c)| (c.key.as_str(), CATEGORY_GLYPHS[i % CATEGORY_GLYPHS.len()]))
        .collect();

    let mut rows = vec![String::new(); 7];
    for column in columns {
        let mut slots = [' '; 7];
        for cell in column {
            let index = cell.date.weekday().num_days_from_monday() as usize;
            slots[index] = cell_glyph(cell, &glyphs);
        }
        for (index, row) in rows.iter_mut().enumerate() {
            row.push(slots[index]);
            row.push(' ');
        }
    }

    let mut output = format!("{}\n", year);
    for (label, row) in WEEKDAY_LABELS.iter().zip(&rows) {
        output.push_str(&format!("{}  {}\n", label, row.trim_end()));
    }

    output.push('\n');
    for category in categories {
        output.push_str(&format!(
            "  {} {} ({})\n",
            glyphs[category.key.as_str()],
            category.name,
            category.color
        ));
    }
    output.push_str(&format!("  {} uncategorized\n", UNCATEGORIZED_GLYPH));
    output.push_str(&format!("  {} no entries\n", EMPTY_GLYPH));

    output
}

fn cell_glyph(cell: &DayCell, glyphs: &HashMap<&str, char>) -> char {
    if !cell.has_entries() {
        return EMPTY_GLYPH;
    }
    match &cell.category {
        Some(key) => glyphs.get(key.as_str()).copied().unwrap_or(UNCATEGORIZED_GLYPH),
        None => UNCATEGORIZED_GLYPH,
    }
}
