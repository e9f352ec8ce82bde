//! Mood distribution use case

use crate::domain::distribution::{aggregate, DistributionEntry};
use crate::domain::CategoryLookup;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::NaiveDate;

/// Service computing the mood distribution for a time window
pub struct MoodsService {
    repository: FileSystemRepository,
}

impl MoodsService {
    pub fn new(repository: FileSystemRepository) -> Self {
        MoodsService { repository }
    }

    /// Aggregate mood frequencies over the optional date window.
    /// Returns the ranked distribution plus any data-quality warnings
    /// from loading.
    pub fn execute(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<(Vec<DistributionEntry>, Vec<String>)> {
        let config = self.repository.load_config()?;
        let lookup = CategoryLookup::new(config.categories);

        let (entries, warnings) = self.repository.load_entries(from, to)?;
        let distribution = aggregate(&entries, &lookup);

        Ok((distribution, warnings))
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
    fn test_distribution_over_window() {
        let (_temp, repo) = journal_with(&[
            ("2025-01-10.md", "## 09:00 #happy\n\nx\n"),
            (
                "2025-01-15.md",
                "## 09:00 #happy\n\nx\n\n## 20:00 #sad\n\ny\n",
            ),
            ("2025-01-20.md", "## 09:00 #sad\n\nx\n"),
        ]);

        let service = MoodsService::new(repo);
        let from = NaiveDate::from_ymd_opt(2025, 1, 12).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 1, 18).unwrap();
        let (distribution, warnings) = service.execute(Some(from), Some(to)).unwrap();

        assert!(warnings.is_empty());
        assert_eq!(distribution.len(), 2);
        // Tie on count; "happy" is declared before "sad".
        assert_eq!(distribution[0].mood, "happy");
        assert_eq!(distribution[1].mood, "sad");
    }

    #[test]
    fn test_malformed_entry_still_counts_toward_distribution() {
        let (_temp, repo) = journal_with(&[(
            "2025-01-15.md",
            "## 99:99 #happy\n\nbroken time, valid mood\n",
        )]);

        let service = MoodsService::new(repo);
        let (distribution, warnings) = service.execute(None, None).unwrap();

        assert_eq!(warnings.len(), 1);
        assert_eq!(distribution.len(), 1);
        assert_eq!(distribution[0].mood, "happy");
        assert_eq!(distribution[0].count, 1);
    }

    #[test]
    fn test_empty_window_is_empty_list() {
        let (_temp, repo) = journal_with(&[("2025-01-15.md", "## 09:00 #happy\n\nx\n")]);

        let service = MoodsService::new(repo);
        let from = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let (distribution, _) = service.execute(Some(from), None).unwrap();

        assert!(distribution.is_empty());
    }
}
