//! Occurrence notification receiver library.

pub mod client;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod notify;
pub mod observability;

pub use client::{NotificationRequest, NotifierClient};
pub use config::NotifierConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use notify::{Ack, NotificationRecord, NotificationSink};
