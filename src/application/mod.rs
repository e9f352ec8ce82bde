//! Application layer - Use cases and orchestration

pub mod categories;
pub mod heatmap;
pub mod init;
pub mod moods;
pub mod streaks;

pub use categories::CategoriesService;
pub use heatmap::HeatmapService;
pub use moods::MoodsService;
pub use streaks::StreaksService;
