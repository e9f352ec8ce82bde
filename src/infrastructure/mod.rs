//! Infrastructure layer - File system and configuration

pub mod config;
pub mod notes;
pub mod repository;

pub use config::Config;
pub use repository::{FileSystemRepository, JournalRepository, NoteFile};
