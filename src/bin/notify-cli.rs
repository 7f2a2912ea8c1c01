//! Command-line sender for occurrence notifications.
//!
//! `send` posts one notification; `repeat` runs the bounded repeat schedule
//! until it completes or Ctrl+C arrives.

use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use occurrence_notifier::client::{NotificationRequest, NotifierClient};
use occurrence_notifier::lifecycle::{signals, Shutdown};
use occurrence_notifier::observability::logging;

#[derive(Parser)]
#[command(name = "notify-cli")]
#[command(about = "Send occurrence notifications to a receiver", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://127.0.0.1:5088")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a single notification
    Send(Payload),
    /// Send the same notification several times
    Repeat {
        #[command(flatten)]
        payload: Payload,

        /// Number of sends (clamped to 1..=5)
        #[arg(long, default_value_t = 5)]
        total: u32,

        /// Seconds between sends (0 means one minute)
        #[arg(long, default_value_t = 60)]
        interval_secs: u64,
    },
}

#[derive(Args)]
struct Payload {
    #[arg(long = "type")]
    entity_type: Option<String>,
    #[arg(long)]
    entity_name: Option<String>,
    #[arg(long)]
    entity_id: Option<String>,
    #[arg(long)]
    occurrence_id: Option<String>,
    #[arg(long)]
    title: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    latitude: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    longitude: Option<f64>,
    #[arg(long)]
    message: Option<String>,
}

impl From<Payload> for NotificationRequest {
    fn from(p: Payload) -> Self {
        NotificationRequest {
            entity_type: p.entity_type,
            entity_name: p.entity_name,
            entity_id: p.entity_id,
            occurrence_id: p.occurrence_id,
            title: p.title,
            latitude: p.latitude,
            longitude: p.longitude,
            message: p.message,
            timestamp: None,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init("info");

    let client = NotifierClient::new(&cli.url);

    match cli.command {
        Commands::Send(payload) => {
            let req = NotificationRequest::from(payload).restamped();
            client.notify(&req).await?;
            println!("Notification sent to {}", client.notify_url());
        }
        Commands::Repeat {
            payload,
            total,
            interval_secs,
        } => {
            let shutdown = Shutdown::new();
            let trigger = shutdown.clone();
            tokio::spawn(async move {
                signals::termination().await;
                trigger.trigger();
            });

            let task = client.notify_repeated(
                payload.into(),
                total,
                Duration::from_secs(interval_secs),
                shutdown.subscribe(),
            );
            let sent = task.await?;
            println!("{} notification(s) sent to {}", sent, client.notify_url());
        }
    }

    Ok(())
}
