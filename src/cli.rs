//! CLI interface for course-registration

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::Config;
use crate::console::Console;
use crate::session::Session;

#[derive(Parser, Debug)]
#[command(name = "course-registration")]
#[command(about = "Register students for courses and keep the list in a JSON file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enrollment data file (default: enrollments.json)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Parse arguments and run the interactive menu on stdin/stdout
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);
    tracing::debug!("Using data file {}", config.data_file.display());

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut session = Session::start(&config, console)?;
    session.run()
}
