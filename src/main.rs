//! Course Registration - console enrollment manager
//!
//! Registers students for courses and stores the list in a JSON file.

use course_registration::cli;

fn main() -> anyhow::Result<()> {
    // Initialize logging (WARN level by default, use RUST_LOG=info for debug).
    // Logs go to stderr so they never mix with the menu on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into())
        )
        .with_writer(std::io::stderr)
        .init();

    // Run CLI
    cli::run()
}
