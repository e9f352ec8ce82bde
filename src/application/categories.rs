//! Category table use case

use crate::domain::MoodCategory;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};

/// Service exposing the configured mood-category table
pub struct CategoriesService {
    repository: FileSystemRepository,
}

impl CategoriesService {
    pub fn new(repository: FileSystemRepository) -> Self {
        CategoriesService { repository }
    }

    /// The category table as configured for this journal.
    pub fn list(&self) -> Result<Vec<MoodCategory>> {
        Ok(self.repository.load_config()?.categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Config;
    use tempfile::TempDir;

    #[test]
    fn test_list_returns_configured_categories() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new()).unwrap();

        let service = CategoriesService::new(repo);
        let categories = service.list().unwrap();

        assert!(!categories.is_empty());
        assert!(categories.iter().any(|c| c.key == "happy"));
    }

    #[test]
    fn test_list_fails_outside_journal() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        let service = CategoriesService::new(repo);
        assert!(service.list().is_err());
    }
}
