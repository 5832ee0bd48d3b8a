//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// weathercast CLI
#[derive(Debug, Parser)]
#[command(name = "weathercast")]
#[command(author, version, about = "Fetch, store and report weather forecasts", long_about = None)]
pub struct Cli {
    /// Configuration file (default: ./config.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level, overrides the configured log level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch a forecast and save it as JSON in the data directory
    ///
    /// Example: weathercast fetch Austin, Texas
    Fetch {
        /// City words, joined with spaces (default: configured city)
        city: Vec<String>,
    },

    /// Render an HTML forecast report
    ///
    /// Reads a saved forecast with --input, otherwise fetches and saves a
    /// fresh one first.
    Report {
        /// City words, joined with spaces (default: configured city)
        city: Vec<String>,

        /// Previously saved forecast JSON
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output path (default: next to the forecast JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the summarized forecast as the webhook would return it
    Weather {
        /// City words, joined with spaces (default: configured city)
        city: Vec<String>,
    },
}

impl Commands {
    /// City words given on the command line
    #[must_use]
    pub fn city_words(&self) -> &[String] {
        match self {
            Self::Fetch { city } | Self::Report { city, .. } | Self::Weather { city } => city,
        }
    }
}

/// Join positional words into one location, falling back to `default`
#[must_use]
pub fn join_city(words: &[String], default: &str) -> String {
    if words.is_empty() {
        default.to_string()
    } else {
        words.join(" ")
    }
}

/// Determine log filter level from verbosity count
#[must_use]
pub const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}
