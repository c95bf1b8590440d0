//! CLI module - Command-line interface for themeprobe

mod commands;

use clap::{Parser, Subcommand};

/// themeprobe - AnimeThemes API probe
/// Fetches one search response, saves it and prints a summary
#[derive(Parser)]
#[command(name = "themeprobe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Query the API and save the response (default)
    #[command(alias = "run")]
    Probe {
        /// Search query, overrides the configured one
        query: Vec<String>,
        /// Directory for the response snapshot
        #[arg(long)]
        output_dir: Option<String>,
    },

    /// Create default config file
    Init,
}

pub use commands::*;
