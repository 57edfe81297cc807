//! Command-line argument parsing for weatherkit
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use crate::config::LoggingConfig;
use crate::formatting::TemperatureUnit;
use crate::logging::TAG;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// weatherkit - validate city names, format readings and forward log messages
#[derive(Parser, Debug)]
#[command(name = "weatherkit")]
#[command(version)]
#[command(about = "City name validation, reading formatters and tagged logging", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only errors are logged)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether each name is a plausible city name
    Validate {
        /// City names to check
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Format a Fahrenheit temperature for display
    Format {
        /// Temperature in degrees Fahrenheit
        #[arg(allow_hyphen_values = true)]
        temperature: f64,

        /// Display unit (defaults to the configured unit)
        #[arg(short, long)]
        unit: Option<TemperatureUnit>,
    },

    /// Forward a message to the log (debug records are shown unless -q is set)
    Log {
        /// Message to forward
        message: String,

        /// Error detail; logs at error level when present
        #[arg(short, long)]
        error: Option<String>,
    },

    /// Print the icon URL for a condition code
    Icon {
        /// OpenWeatherMap icon code, e.g. 01d
        code: String,
    },

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Logging settings for this run, derived from the configured ones
    ///
    /// `-v`/`-q` replace the level. The `log` subcommand additionally lets
    /// its own debug records through unless `-q` was given.
    pub fn effective_logging(&self, base: &LoggingConfig) -> LoggingConfig {
        let verbosity = self.verbosity();
        let mut logging = base.clone();
        if let Some(level) = verbosity.log_level() {
            logging.level = level.to_string();
        }

        let forwards_debug = matches!(self.command, Commands::Log { .. })
            && verbosity != Verbosity::Quiet
            && !matches!(logging.level.to_ascii_lowercase().as_str(), "debug" | "trace");
        if forwards_debug {
            logging.level = format!("{},{}=debug", logging.level, TAG);
        }

        logging
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Log level override for this verbosity, if any
    pub fn log_level(&self) -> Option<&'static str> {
        match self {
            Verbosity::Quiet => Some("error"),
            Verbosity::Normal => None,
            Verbosity::Verbose => Some("debug"),
            Verbosity::VeryVerbose => Some("trace"),
        }
    }
}
