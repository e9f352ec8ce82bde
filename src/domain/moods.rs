//! Mood category configuration and lookup

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Color used for mood labels that belong to no configured category.
pub const NEUTRAL_COLOR: &str = "#c8c8c8";

/// A grouping of individual mood labels used for heatmap coloring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodCategory {
    pub key: String,
    pub name: String,
    pub color: String,
    pub moods: Vec<String>,
}

/// Read-only mood label → category index.
///
/// Built once at engine initialization from the configured category
/// table and passed by reference into the aggregations; never mutated
/// afterward. Lookup is O(1).
#[derive(Debug, Clone)]
pub struct CategoryLookup {
    categories: Vec<MoodCategory>,
    by_mood: HashMap<String, usize>,
    rank: HashMap<String, usize>,
}

impl CategoryLookup {
    /// Build the lookup from a category table.
    ///
    /// Mood labels are matched case-insensitively. A label listed in
    /// more than one category belongs to the first one declared.
    pub fn new(categories: Vec<MoodCategory>) -> Self {
        let mut by_mood = HashMap::new();
        let mut rank = HashMap::new();

        for (index, category) in categories.iter().enumerate() {
            for mood in &category.moods {
                let label = mood.to_lowercase();
                by_mood.entry(label.clone()).or_insert(index);
                let next = rank.len();
                rank.entry(label).or_insert(next);
            }
        }

        CategoryLookup {
            categories,
            by_mood,
            rank,
        }
    }

    /// The configured categories, in declaration order.
    pub fn categories(&self) -> &[MoodCategory] {
        &self.categories
    }

    /// Category for a mood label, or `None` if unclassified.
    pub fn category_for(&self, mood: &str) -> Option<&MoodCategory> {
        self.by_mood
            .get(&mood.to_lowercase())
            .map(|&index| &self.categories[index])
    }

    /// Heatmap color for a mood label; unknown labels degrade to the
    /// neutral color rather than erroring.
    pub fn color_for(&self, mood: &str) -> &str {
        self.category_for(mood)
            .map(|category| category.color.as_str())
            .unwrap_or(NEUTRAL_COLOR)
    }

    /// Declaration-order rank of a mood label across the configured
    /// category table, used as a deterministic tie-breaker when
    /// distribution counts are equal. Unknown labels rank last.
    pub fn rank_of(&self, mood: &str) -> usize {
        self.rank
            .get(&mood.to_lowercase())
            .copied()
            .unwrap_or(usize::MAX)
    }
}

/// Built-in category table used when a journal carries no custom
/// configuration.
pub fn default_categories() -> Vec<MoodCategory> {
    vec![
        MoodCategory {
            key: "happy".to_string(),
            name: "Happy".to_string(),
            color: "#f5c542".to_string(),
            moods: vec![
                "happy".to_string(),
                "excited".to_string(),
                "grateful".to_string(),
                "relaxed".to_string(),
                "content".to_string(),
            ],
        },
        MoodCategory {
            key: "sad".to_string(),
            name: "Sad".to_string(),
            color: "#5b8dd9".to_string(),
            moods: vec![
                "sad".to_string(),
                "lonely".to_string(),
                "hurt".to_string(),
                "disappointed".to_string(),
            ],
        },
        MoodCategory {
            key: "angry".to_string(),
            name: "Angry".to_string(),
            color: "#d95b5b".to_string(),
            moods: vec![
                "angry".to_string(),
                "frustrated".to_string(),
                "annoyed".to_string(),
            ],
        },
        MoodCategory {
            key: "anxious".to_string(),
            name: "Anxious".to_string(),
            color: "#a05bd9".to_string(),
            moods: vec![
                "anxious".to_string(),
                "stressed".to_string(),
                "worried".to_string(),
                "overwhelmed".to_string(),
            ],
        },
        MoodCategory {
            key: "calm".to_string(),
            name: "Calm".to_string(),
            color: "#5bd98d".to_string(),
            moods: vec![
                "calm".to_string(),
                "peaceful".to_string(),
                "tired".to_string(),
                "thoughtful".to_string(),
            ],
        },
    ]
}
