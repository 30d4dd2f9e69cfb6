//! Inspecta CLI binary.

use inspecta::cli::Cli;
use inspecta::output;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Main entry point for the inspecta CLI.
///
/// Uses tokio's current_thread runtime for simplicity and lower overhead.
/// This is appropriate for CLI applications with sequential I/O-bound operations.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize tracing subscriber
    // Can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=inspecta=debug cargo run
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("inspecta=info")),
        )
        .with_target(false)
        .init();

    tracing::debug!("Starting inspecta CLI");

    let cli = Cli::parse_args();
    if let Err(e) = cli.execute().await {
        output::error(&format!("{e:#}"));
        return ExitCode::FAILURE;
    }

    tracing::debug!("Inspecta CLI completed successfully");
    ExitCode::SUCCESS
}
