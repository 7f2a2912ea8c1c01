//! Notification log sink.

use std::io::{self, Write};

/// Destination for formatted notification lines.
pub trait NotificationSink: Send + Sync {
    /// Write one line. The sink appends the newline.
    fn emit(&self, line: &str) -> io::Result<()>;
}

/// Writes each line to standard output under the stdout lock.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl NotificationSink for StdoutSink {
    fn emit(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()
    }
}
