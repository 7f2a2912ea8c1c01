//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, POST /notify)
//!     → request.rs (request ID assigned and echoed)
//!     → notify::NotificationRecord (decode, extract, format)
//!     → notify::NotificationSink (emit line)
//!     → {"ok": true}
//! ```

pub mod request;
pub mod server;

pub use request::{request_id, X_REQUEST_ID};
pub use server::{AppState, HttpServer, NOTIFY_PATH};
