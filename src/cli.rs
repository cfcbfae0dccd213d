//! Command-line argument parsing
//!
//! Supports:
//! - Dumping the model of a suite file as JSON
//! - Adding a fresh holder to a section and dumping the result
//! - Printing the effective configuration
//! - Console verbosity for all of the above

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use rfedit::config::EngineConfig;

/// Inspect tabular suites through the editing model
#[derive(Parser, Debug)]
#[command(name = "rfedit", version, about = "Inspect tabular suites through the editing model")]
pub struct CliArgs {
    /// Read configuration from FILE instead of the default location
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// More console logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum CliCommand {
    /// Print the model of a suite file as JSON
    Dump {
        /// Suite file to read
        path: PathBuf,
    },
    /// Add a freshly named holder to a section, then print the model
    Fresh {
        /// Suite file to read
        path: PathBuf,
        /// Section header, e.g. "Test Cases", "Tasks" or "Keywords"
        #[arg(long, default_value = "Test Cases")]
        section: String,
    },
    /// Print the effective configuration as YAML
    Config,
}

impl CliArgs {
    /// Configuration from `--config` or the default location
    pub fn load_config(&self) -> EngineConfig {
        match &self.config {
            Some(path) => EngineConfig::load_from(path),
            None => EngineConfig::load(),
        }
    }
}
