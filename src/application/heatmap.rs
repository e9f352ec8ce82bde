//! Calendar heatmap use case

use crate::application::streaks::year_window;
use crate::domain::buckets::bucket_by_day;
use crate::domain::heatmap::{build_heatmap, DayCell};
use crate::domain::CategoryLookup;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};

/// Service building the full-year heatmap grid for a journal
pub struct HeatmapService {
    repository: FileSystemRepository,
}

impl HeatmapService {
    pub fn new(repository: FileSystemRepository) -> Self {
        HeatmapService { repository }
    }

    /// Build the week-column grid for `year`. Returns the grid plus
    /// any data-quality warnings from loading.
    pub fn execute(&self, year: i32) -> Result<(Vec<Vec<DayCell>>, Vec<String>)> {
        let config = self.repository.load_config()?;
        let lookup = CategoryLookup::new(config.categories);

        let (from, to) = year_window(Some(year));
        let (entries, warnings) = self.repository.load_entries(from, to)?;

        let buckets = bucket_by_day(&entries, Some(year));
        let columns = build_heatmap(year, &buckets, &lookup);

        Ok((columns, warnings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Config;
    use std::fs;
    use tempfile::TempDir;

    fn journal_with(notes: &[(&str, &str)]) -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new()).unwrap();
        for (name, content) in notes {
            fs::write(temp.path().join(name), content).unwrap();
        }
        (temp, repo)
    }

    #[test]
    fn test_heatmap_covers_full_year() {
        let (_temp, repo) = journal_with(&[("2024-03-01.md", "## 09:00 #happy\n\nx\n")]);

        let service = HeatmapService::new(repo);
        let (columns, warnings) = service.execute(2024).unwrap();

        assert!(warnings.is_empty());
        let total: usize = columns.iter().map(|c| c.len()).sum();
        assert_eq!(total, 366);

        let active: usize = columns
            .iter()
            .flatten()
            .filter(|cell| cell.has_entries())
            .count();
        assert_eq!(active, 1);
    }

    #[test]
    fn test_heatmap_empty_year_is_well_formed() {
        let (_temp, repo) = journal_with(&[]);

        let service = HeatmapService::new(repo);
        let (columns, _) = service.execute(2023).unwrap();

        let total: usize = columns.iter().map(|c| c.len()).sum();
        assert_eq!(total, 365);
        assert!(columns.iter().flatten().all(|cell| !cell.has_entries()));
    }
}
