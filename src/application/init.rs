//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;

/// Initialize a new mood journal at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    // Initialize .moodlog directory
    repo.initialize()?;

    // Write the default mood-category table
    let config = Config::new();
    repo.save_config(&config)?;

    println!("Initialized moodlog journal at {}", path.display());
    println!(
        "Categories: {}",
        config
            .categories
            .iter()
            .map(|c| c.key.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(())
}
