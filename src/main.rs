//! Occurrence notification receiver.
//!
//! Accepts `POST /notify` with a JSON occurrence payload, writes one line per
//! notification to stdout and always answers `{"ok": true}`.
//!
//! ```text
//!   Client ──POST /notify──▶ listener ──▶ http::server ──▶ notify::record
//!                                                              │
//!   Client ◀──{"ok": true}──────────────── http::server ◀──────┤
//!                                                              ▼
//!                                                     notify::sink (stdout)
//! ```
//!
//! Diagnostics go to stderr through `tracing`.

use std::path::PathBuf;

use clap::Parser;

use occurrence_notifier::config::{load_config, NotifierConfig};
use occurrence_notifier::lifecycle;
use occurrence_notifier::observability::logging;

#[derive(Parser)]
#[command(name = "occurrence-notifier")]
#[command(about = "Receives occurrence notifications and logs them to stdout", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => NotifierConfig::default(),
    };

    logging::init(&config.observability.log_level);
    tracing::info!("occurrence-notifier v{} starting", env!("CARGO_PKG_VERSION"));

    lifecycle::start(config).await?;
    Ok(())
}
