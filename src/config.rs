//! Runtime configuration
//!
//! The only setting is where enrollments are stored. It defaults to
//! `enrollments.json` in the working directory and can be overridden
//! from the command line.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::storage::DEFAULT_FILE_NAME;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON file the enrollment list is loaded from and saved to
    pub data_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_FILE_NAME),
        }
    }
}

impl Config {
    /// Resolve configuration from parsed command-line arguments
    pub fn from_cli(cli: &Cli) -> Self {
        let config = Config::default();
        match &cli.file {
            Some(path) => config.with_data_file(path.clone()),
            None => config,
        }
    }

    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }
}
