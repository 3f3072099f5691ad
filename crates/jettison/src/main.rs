//! Jettison CLI binary.

use jettison::cli::Cli;
use jettison::output;
use tracing_subscriber::EnvFilter;

/// Main entry point for the jettison CLI.
///
/// Uses tokio's current_thread runtime for simplicity and lower overhead.
/// The mutation passes are synchronous; only the read and write edges are
/// async.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse_args();

    // Debug notes are suppressed unless --debug (or RUST_LOG) lowers the
    // filter. Diagnostics go to stderr; stdout carries the outcome only.
    let default_filter = if cli.debug {
        "jettison=debug"
    } else {
        "jettison=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting jettison CLI");

    if let Err(e) = cli.execute().await {
        // Terminal errors are reported exactly once, on the diagnostic
        // stream, with path context already attached.
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }

    tracing::debug!("Jettison CLI completed");
}
