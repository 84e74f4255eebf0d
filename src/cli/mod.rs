//! CLI module - Command-line interface for Kinolookup
//!
//! Without a subcommand the interactive lookup session starts.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Kinolookup - Kinopoisk film lookup
/// Finds films by title and saves their details to JSON or CSV
#[derive(Parser)]
#[command(name = "kinolookup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (json or csv), overrides the config file
    #[arg(long, global = true)]
    pub format: Option<String>,

    /// Output file name without extension, overrides the config file
    #[arg(long, short = 'o', global = true)]
    pub output: Option<String>,

    /// Path to a config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create default config file
    Init,
}

pub use commands::*;
