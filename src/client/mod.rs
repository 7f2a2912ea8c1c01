//! Outbound notifier client.
//!
//! Posts [`NotificationRequest`] payloads to a receiver's `/notify` route,
//! once or on a bounded repeat schedule.

pub mod request;

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::http::NOTIFY_PATH;

pub use request::NotificationRequest;

/// Most sends a single repeat schedule makes.
pub const MAX_SENDS: u32 = 5;

/// Spacing used when a schedule is given no usable interval.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("receiver returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Number of sends and spacing for a repeat schedule.
pub fn schedule(total: u32, interval: Duration) -> (u32, Duration) {
    let sends = total.clamp(1, MAX_SENDS);
    let interval = if interval.is_zero() {
        DEFAULT_INTERVAL
    } else {
        interval
    };
    (sends, interval)
}

#[derive(Debug, Clone)]
pub struct NotifierClient {
    client: Client,
    base_url: String,
}

impl NotifierClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL of the receiver's notify route.
    pub fn notify_url(&self) -> String {
        format!("{}{}", self.base_url, NOTIFY_PATH)
    }

    /// Send one notification.
    pub async fn notify(&self, req: &NotificationRequest) -> Result<(), ClientError> {
        let occurrence_id = req.occurrence_id.as_deref().unwrap_or("-");

        let resp = match self.client.post(self.notify_url()).json(req).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!(occurrence_id, error = %e, "Notification failed");
                return Err(e.into());
            }
        };

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::error!(occurrence_id, %status, "Notification rejected");
            return Err(ClientError::Status { status, body });
        }

        Ok(())
    }

    /// Send `total` copies of a notification in the background, the first
    /// immediately and the rest `interval` apart.
    ///
    /// `total` is clamped to `1..=MAX_SENDS` and a zero interval becomes
    /// [`DEFAULT_INTERVAL`]. Every copy is restamped before sending. The
    /// schedule stops at the first failed send or when `shutdown` fires.
    /// The task resolves to the number of successful sends.
    pub fn notify_repeated(
        &self,
        req: NotificationRequest,
        total: u32,
        interval: Duration,
        mut shutdown: broadcast::Receiver<()>,
    ) -> JoinHandle<u32> {
        let (sends, interval) = schedule(total, interval);
        let client = self.clone();

        tokio::spawn(async move {
            let occurrence_id = req.occurrence_id.clone().unwrap_or_else(|| "-".into());
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            let mut sent = 0;
            while sent < sends {
                tokio::select! {
                    biased;
                    _ = shutdown.recv() => {
                        tracing::info!(%occurrence_id, sent, "Repeated notifications cancelled");
                        break;
                    }
                    _ = ticker.tick() => {}
                }

                if client.notify(&req.restamped()).await.is_err() {
                    tracing::warn!(%occurrence_id, sent, "Repeated notifications stopped after failure");
                    break;
                }
                sent += 1;
            }
            sent
        })
    }

    /// Send a notification once a minute for `minutes` minutes, clamped to
    /// `1..=MAX_SENDS`.
    pub fn notify_for_minutes(
        &self,
        req: NotificationRequest,
        minutes: u32,
        shutdown: broadcast::Receiver<()>,
    ) -> JoinHandle<u32> {
        self.notify_repeated(req, minutes, DEFAULT_INTERVAL, shutdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_clamps() {
        let ms = Duration::from_millis(10);
        assert_eq!(schedule(0, ms), (1, ms));
        assert_eq!(schedule(3, ms), (3, ms));
        assert_eq!(schedule(50, ms), (5, ms));
        assert_eq!(schedule(2, Duration::ZERO), (2, DEFAULT_INTERVAL));
    }

    #[test]
    fn test_notify_url() {
        let client = NotifierClient::new("http://127.0.0.1:5088/");
        assert_eq!(client.notify_url(), "http://127.0.0.1:5088/notify");
    }
}
