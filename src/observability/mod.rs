//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Process diagnostics (startup, shutdown, per-request debug events)
//!     → logging.rs (tracing subscriber, stderr)
//!
//! Notification lines
//!     → notify::sink (stdout, plain text)
//! ```
//!
//! # Design Decisions
//! - Diagnostics go to stderr so stdout carries only notification lines
//! - RUST_LOG overrides the configured level

pub mod logging;
