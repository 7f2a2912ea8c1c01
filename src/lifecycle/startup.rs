//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration
//! - Bind the listener and begin accepting traffic
//! - Wire OS signals to the shutdown coordinator
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener starts last (traffic only when ready)

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::{validate_config, ConfigError, NotifierConfig};
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Run the receiver until a termination signal arrives.
pub async fn start(config: NotifierConfig) -> Result<(), StartupError> {
    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        max_body_size = config.limits.max_body_size,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let address = config.listener.bind_address.clone();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind { address, source })?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        signals::termination().await;
        trigger.trigger();
    });

    let server = HttpServer::new(config);
    server
        .run(listener, server_shutdown)
        .await
        .map_err(StartupError::Serve)?;

    tracing::info!("Shutdown complete");
    Ok(())
}
