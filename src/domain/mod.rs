//! Domain layer - the mood analytics engine
//!
//! Every function in this layer is pure and synchronous: given an
//! immutable entry snapshot, output is a deterministic function of
//! input. Nothing here performs I/O or mutates shared state, so the
//! engine can be invoked repeatedly or concurrently without
//! coordination.

pub mod buckets;
pub mod distribution;
pub mod entry;
pub mod heatmap;
pub mod moods;
pub mod streaks;

pub use entry::JournalEntry;
pub use moods::{CategoryLookup, MoodCategory};
pub use streaks::StreakResult;
