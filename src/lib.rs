//! moodlog - Terminal mood journal analytics
//!
//! Reads timestamped, mood-tagged markdown journal notes and derives
//! writing-streak statistics, a full-year calendar heatmap and mood
//! frequency distributions.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodlogError;
