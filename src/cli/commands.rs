//! CLI command definitions

use crate::error::{MoodlogError, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Terminal mood journal analytics", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new mood journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Show writing-streak statistics
    Streaks {
        /// Restrict to a single year
        #[arg(short, long)]
        year: Option<i32>,

        /// Reference date (DD-MM-YYYY, default: today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show the calendar heatmap for a year
    Heatmap {
        /// Year to render (default: current year)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Show the mood distribution for a date window
    Moods {
        /// Start of the window (DD-MM-YYYY, inclusive)
        #[arg(long)]
        from: Option<String>,

        /// End of the window (DD-MM-YYYY, inclusive)
        #[arg(long)]
        to: Option<String>,
    },

    /// Show the configured mood categories
    Categories,
}

/// Parse a CLI date argument (DD-MM-YYYY).
pub fn parse_cli_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%d-%m-%Y")
        .map_err(|_| MoodlogError::InvalidDate(input.to_string()))
}
