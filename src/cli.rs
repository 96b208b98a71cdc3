use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "motorsort")]
#[command(author, version, about = "Motorsport recording organizer")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sort the source directory into the library
    Run {
        /// Show what would be done without touching the library
        #[arg(long)]
        dry_run: bool,

        /// Source directory (overrides config)
        #[arg(long)]
        source: Option<PathBuf>,

        /// Library root (overrides config)
        #[arg(long)]
        destination: Option<PathBuf>,
    },

    /// Parse filenames and print the resolved event records
    Parse {
        /// Filenames to parse
        #[arg(required = true)]
        filenames: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Extra sprint rounds, "RR" or "YYYY-RR"
        #[arg(long, value_delimiter = ',')]
        sprint: Vec<String>,
    },

    /// Check that required external tools are available
    CheckTools,

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
