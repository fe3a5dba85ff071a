// Dashboard entry point.
//
// Startup sequence:
// 1. Parse CLI arguments
// 2. Initialize tracing (to a file when the TUI owns the terminal)
// 3. Dispatch the command

use clap::Parser;

use flea_dashboard::cli::{self, Cli};

use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.command.owns_terminal())?;

    cli::run(cli).await
}

/// Initialize tracing. One-shot commands log to stderr; the TUI logs to a
/// file because the terminal belongs to the dashboard.
fn init_tracing(to_file: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("flea_dashboard=info,warn"));

    if to_file {
        let log_dir = std::env::current_dir()?.join("logs");
        std::fs::create_dir_all(&log_dir)?;
        let log_file = std::fs::File::create(log_dir.join("fleadash.log"))?;

        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::sync::Arc::new(log_file))
            .with_ansi(false)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .context("failed to set tracing subscriber")?;
    } else {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .context("failed to set tracing subscriber")?;
    }

    Ok(())
}
