//! Occurrence notification handling.
//!
//! # Data Flow
//! ```text
//! POST /notify body
//!     → record.rs (decode, fold key casing, extract fields with defaults)
//!     → render.rs (truthiness and text form of loose JSON values)
//!     → NotificationRecord::log_line (timestamped plain-text line)
//!     → sink.rs (stdout, one line per request)
//! ```
//!
//! # Design Decisions
//! - Decoding never fails the request: bad bodies become an empty mapping
//! - Record construction and formatting are pure; the clock and the sink are
//!   supplied by the HTTP handler

pub mod record;
pub mod render;
pub mod sink;

use serde::{Deserialize, Serialize};

pub use record::{decode_body, fold_keys, BodyError, NotificationRecord, PLACEHOLDER};
pub use sink::{NotificationSink, StdoutSink};

/// Acknowledgment returned for every notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub ok: bool,
}

impl Ack {
    pub const fn ok() -> Self {
        Self { ok: true }
    }
}

impl Default for Ack {
    fn default() -> Self {
        Self::ok()
    }
}
