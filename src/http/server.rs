//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the notification handler
//! - Wire up middleware (tracing, limits, timeout, request ID)
//! - Bind server to listener
//! - Stop accepting on shutdown and drain in-flight requests

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::HeaderMap,
    routing::post,
    Json, Router,
};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::NotifierConfig;
use crate::http::request::{
    is_json, propagate_request_id_layer, request_id, set_request_id_layer,
};
use crate::notify::{decode_body, fold_keys, Ack, NotificationRecord, NotificationSink, StdoutSink};

/// The single route served.
pub const NOTIFY_PATH: &str = "/notify";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub sink: Arc<dyn NotificationSink>,
}

/// HTTP server for the notification receiver.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server that writes notification lines to stdout.
    pub fn new(config: NotifierConfig) -> Self {
        Self::with_sink(config, Arc::new(StdoutSink))
    }

    /// Create a server that writes notification lines to the given sink.
    pub fn with_sink(config: NotifierConfig, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            router: Self::build_router(&config, AppState { sink }),
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &NotifierConfig, state: AppState) -> Router {
        Router::new()
            .route(NOTIFY_PATH, post(notify_handler))
            .with_state(state)
            .layer(DefaultBodyLimit::disable())
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http())
                    .layer(propagate_request_id_layer())
                    .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
                    .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
            )
    }

    /// A clone of the fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown receiver fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Receives one notification, writes its line and acknowledges.
///
/// Never fails: bodies without a JSON content type, or that do not decode
/// to a JSON object, are treated as empty, and a failing sink is only logged.
async fn notify_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<Ack> {
    let request_id = request_id(&headers);

    let fields = if is_json(&headers) {
        decode_body(&body).unwrap_or_else(|e| {
            tracing::warn!(request_id = %request_id, error = %e, "Treating notification body as empty");
            Default::default()
        })
    } else {
        tracing::warn!(request_id = %request_id, "Notification without JSON content type, treating body as empty");
        Default::default()
    };
    let record = NotificationRecord::from_fields(&fold_keys(fields));

    tracing::debug!(
        request_id = %request_id,
        entity = %record.target,
        entity_id = %record.entity_id,
        "Notification received"
    );

    if let Err(e) = state.sink.emit(&record.log_line(Utc::now())) {
        tracing::error!(request_id = %request_id, error = %e, "Failed to write notification line");
    }

    Json(Ack::ok())
}
