//! File system repository

use crate::domain::JournalEntry;
use crate::error::{MoodlogError, Result};
use crate::infrastructure::notes::parse_note;
use crate::infrastructure::Config;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A daily note file with its calendar date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFile {
    pub filename: String,
    pub date: NaiveDate,
}

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .moodlog/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .moodlog/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .moodlog directory exists
    fn is_initialized(&self) -> bool;

    /// Create .moodlog directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks MOODLOG_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        // 1. Check MOODLOG_ROOT environment variable first
        if let Ok(root_path) = std::env::var("MOODLOG_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_moodlog_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(MoodlogError::Config(format!(
                    "MOODLOG_ROOT is set to '{}' but no .moodlog directory found. \
                    Run 'moodlog init' in that directory or unset MOODLOG_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_moodlog_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .moodlog
                    return Err(MoodlogError::NotMoodlogDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .moodlog directory
    fn has_moodlog_dir(path: &Path) -> bool {
        path.join(".moodlog").is_dir()
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_moodlog_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let moodlog_dir = self.root.join(".moodlog");

        if moodlog_dir.exists() {
            return Err(MoodlogError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&moodlog_dir)?;
        Ok(())
    }
}

// Entry loading (not part of trait - filesystem-specific)
impl FileSystemRepository {
    fn normalize_relative_path(path: &Path) -> Option<String> {
        let parts: Vec<&str> = path
            .iter()
            .map(|part| part.to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }

    fn note_file_from_relative_path(rel: &Path) -> Option<NoteFile> {
        let filename = Self::normalize_relative_path(rel)?;
        let leaf = rel.file_name()?.to_str()?;

        let stem = leaf.strip_suffix(".md")?;
        let date = NaiveDate::parse_from_str(stem, "%Y-%m-%d").ok()?;

        Some(NoteFile { filename, date })
    }

    /// Collect daily note files, recursing into subdirectories but
    /// skipping dot-directories such as .moodlog itself.
    pub fn collect_note_files(&self) -> Vec<NoteFile> {
        let mut notes = Vec::new();

        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            if !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .map(|name| !name.starts_with('.'))
                .unwrap_or(true)
        });

        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            if let Some(note) = Self::note_file_from_relative_path(rel) {
                notes.push(note);
            }
        }

        // Oldest first; ties (the same date in different folders) fall
        // back to the path so the snapshot order is stable.
        notes.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.filename.cmp(&b.filename)));

        notes
    }

    /// Materialize the entry snapshot for the analytics engine.
    ///
    /// Entries come back in file-then-heading order (oldest note
    /// first), which downstream aggregations treat as the
    /// caller-defined order. Files whose dates fall outside the
    /// optional `from`/`to` window are not read at all, keeping
    /// aggregation cost proportional to the scoped window. The second
    /// element carries data-quality warnings; unreadable or malformed
    /// content never aborts the load.
    pub fn load_entries(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<(Vec<JournalEntry>, Vec<String>)> {
        let mut entries = Vec::new();
        let mut warnings = Vec::new();

        for note in self.collect_note_files() {
            if from.is_some_and(|f| note.date < f) {
                continue;
            }
            if to.is_some_and(|t| note.date > t) {
                continue;
            }

            let content = match fs::read_to_string(self.root.join(&note.filename)) {
                Ok(content) => content,
                Err(e) => {
                    warnings.push(format!("{}: {}", note.filename, e));
                    continue;
                }
            };

            let parsed = parse_note(&content, &note.filename, note.date);
            entries.extend(parsed.entries);
            warnings.extend(parsed.warnings);
        }

        Ok((entries, warnings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_repository() {
        let path = PathBuf::from("/tmp/test");
        let repo = FileSystemRepository::new(path.clone());
        assert_eq!(repo.root, path);
    }

    #[test]
    fn test_is_initialized() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());
        repo.initialize().unwrap();
        assert!(repo.is_initialized());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();

        let result = repo.initialize();
        assert!(result.is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();

        fs::create_dir(temp.path().join(".moodlog")).unwrap();

        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let repo = FileSystemRepository::discover_from(&subdir).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_no_moodlog() {
        let temp = TempDir::new().unwrap();

        let result = FileSystemRepository::discover_from(temp.path());
        assert!(result.is_err());

        match result.unwrap_err() {
            MoodlogError::NotMoodlogDirectory(_) => {}
            _ => panic!("Expected NotMoodlogDirectory error"),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();

        let config = Config::new();
        repo.save_config(&config).unwrap();

        let loaded = repo.load_config().unwrap();
        assert_eq!(loaded.categories, config.categories);
    }

    #[test]
    fn test_collect_note_files_sorted_oldest_first() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        fs::write(temp.path().join("2025-01-17.md"), "a").unwrap();
        fs::write(temp.path().join("2025-01-15.md"), "b").unwrap();
        fs::write(temp.path().join("2025-01-16.md"), "c").unwrap();

        let notes = repo.collect_note_files();
        let names: Vec<&str> = notes.iter().map(|n| n.filename.as_str()).collect();
        assert_eq!(
            names,
            vec!["2025-01-15.md", "2025-01-16.md", "2025-01-17.md"]
        );
    }

    #[test]
    fn test_collect_note_files_ignores_other_files() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        fs::write(temp.path().join("2025-01-17.md"), "note").unwrap();
        fs::write(temp.path().join("readme.txt"), "text").unwrap();
        fs::write(temp.path().join("notes.md"), "not daily").unwrap();

        let notes = repo.collect_note_files();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].filename, "2025-01-17.md");
    }

    #[test]
    fn test_collect_note_files_recursive_skips_dot_dirs() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        fs::write(temp.path().join("2025-01-15.md"), "root").unwrap();
        fs::create_dir_all(temp.path().join("archive")).unwrap();
        fs::write(temp.path().join("archive").join("2025-01-16.md"), "nested").unwrap();
        fs::create_dir_all(temp.path().join(".moodlog")).unwrap();
        fs::write(temp.path().join(".moodlog").join("2025-01-17.md"), "hidden").unwrap();

        let notes = repo.collect_note_files();
        let names: Vec<&str> = notes.iter().map(|n| n.filename.as_str()).collect();
        assert_eq!(names, vec!["2025-01-15.md", "archive/2025-01-16.md"]);
    }

    #[test]
    fn test_load_entries_combines_files_in_order() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        fs::write(
            temp.path().join("2025-01-15.md"),
            "## 09:00 #happy\n\nMorning.\n## 20:00 #tired\n\nEvening.\n",
        )
        .unwrap();
        fs::write(temp.path().join("2025-01-16.md"), "## 10:00 #calm\n\nOk.\n").unwrap();

        let (entries, warnings) = repo.load_entries(None, None).unwrap();

        assert!(warnings.is_empty());
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].id, "2025-01-15.md#1");
        assert_eq!(entries[1].id, "2025-01-15.md#2");
        assert_eq!(entries[2].id, "2025-01-16.md#1");
    }

    #[test]
    fn test_load_entries_window_skips_files() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        fs::write(temp.path().join("2025-01-10.md"), "early").unwrap();
        fs::write(temp.path().join("2025-01-15.md"), "inside").unwrap();
        fs::write(temp.path().join("2025-01-20.md"), "late").unwrap();

        let from = NaiveDate::from_ymd_opt(2025, 1, 12).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 1, 18).unwrap();

        let (entries, _) = repo.load_entries(Some(from), Some(to)).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "2025-01-15.md#1");
    }

    #[test]
    fn test_load_entries_surfaces_warnings_without_failing() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        fs::write(
            temp.path().join("2025-01-15.md"),
            "## 25:99 #happy\n\nBroken time.\n",
        )
        .unwrap();
        fs::write(temp.path().join("2025-01-16.md"), "## 10:00 #calm\n\nFine.\n").unwrap();

        let (entries, warnings) = repo.load_entries(None, None).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("2025-01-15.md"));
        // The broken entry is still present, just untimed.
        assert_eq!(entries[0].timestamp, None);
        assert_eq!(entries[0].mood.as_deref(), Some("happy"));
    }

    #[test]
    fn test_load_entries_empty_journal() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        let (entries, warnings) = repo.load_entries(None, None).unwrap();
        assert!(entries.is_empty());
        assert!(warnings.is_empty());
    }
}
