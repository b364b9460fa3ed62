//! CLI entry point for the harvester.

use caselog_harvester::cli;
use tracing_subscriber::EnvFilter;

fn main() {
    // Default to INFO so per-case pipeline progress is visible; RUST_LOG
    // still takes precedence.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
