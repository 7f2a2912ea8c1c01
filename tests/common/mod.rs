//! Shared utilities for integration tests.

use std::io;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use occurrence_notifier::config::NotifierConfig;
use occurrence_notifier::http::HttpServer;
use occurrence_notifier::lifecycle::Shutdown;
use occurrence_notifier::notify::NotificationSink;
use tokio::net::TcpListener;

/// Sink that keeps every line in memory.
#[derive(Debug, Default)]
pub struct CaptureSink {
    lines: Mutex<Vec<String>>,
}

impl CaptureSink {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl NotificationSink for CaptureSink {
    fn emit(&self, line: &str) -> io::Result<()> {
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }
}

/// Sink whose writes always fail.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct FailingSink;

impl NotificationSink for FailingSink {
    fn emit(&self, _line: &str) -> io::Result<()> {
        Err(io::Error::other("broken pipe"))
    }
}

/// Server over a capturing sink with default configuration.
pub fn capture_server() -> (HttpServer, Arc<CaptureSink>) {
    let sink = Arc::new(CaptureSink::default());
    let server = HttpServer::with_sink(NotifierConfig::default(), sink.clone());
    (server, sink)
}

/// Start a receiver on an ephemeral loopback port.
#[allow(dead_code)]
pub async fn start_receiver(shutdown: &Shutdown) -> (SocketAddr, Arc<CaptureSink>) {
    let (server, sink) = capture_server();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, sink)
}

/// Poll until the sink holds `count` lines or two seconds pass.
#[allow(dead_code)]
pub async fn wait_for_lines(sink: &CaptureSink, count: usize) -> Vec<String> {
    for _ in 0..200 {
        let lines = sink.lines();
        if lines.len() >= count {
            return lines;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    sink.lines()
}
