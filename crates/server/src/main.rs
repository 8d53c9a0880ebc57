// Eventboard API server
// Decision: One storage handle for the process, opened before binding and closed after shutdown

use anyhow::{Context, Result};
use eventboard_core::telemetry::{init_telemetry, TelemetryConfig};
use eventboard_server::auth::AuthConfig;
use eventboard_server::storage::StorageBackend;
use eventboard_server::{build_router, ServerConfig, StorageMode};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Optional .env next to the binary
    dotenvy::dotenv().ok();

    // Initialize telemetry with OpenTelemetry support
    // Configure via environment variables:
    // - OTEL_SERVICE_NAME: Service name (default: "eventboard-server")
    // - OTEL_EXPORTER_OTLP_ENDPOINT: OTLP endpoint (e.g., "http://localhost:4317")
    // - RUST_LOG: Log filter (default: "eventboard_server=debug,tower_http=debug")
    let mut telemetry_config = TelemetryConfig::from_env();
    if telemetry_config.service_name == "eventboard" {
        telemetry_config.service_name = "eventboard-server".to_string();
    }
    if telemetry_config.log_filter.is_none() {
        telemetry_config.log_filter = Some("eventboard_server=debug,tower_http=debug".to_string());
    }
    telemetry_config.service_version = Some(env!("CARGO_PKG_VERSION").to_string());

    // Keep the guard alive for the lifetime of the application
    let _telemetry_guard = init_telemetry(telemetry_config);

    let config = ServerConfig::from_env().context("Invalid server configuration")?;

    let db = match config.storage {
        StorageMode::Postgres => {
            let db = StorageBackend::postgres(&config.database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");
            db
        }
        StorageMode::Memory => {
            tracing::warn!("Using in-memory storage, data is lost on restart");
            StorageBackend::in_memory()
        }
    };
    let db = Arc::new(db);

    let auth_config = AuthConfig::from_env();
    if auth_config.ephemeral_secret {
        tracing::warn!(
            "AUTH_JWT_SECRET not set, using a random secret. Tokens will not survive a restart."
        );
    }

    let app = build_router(db.clone(), &auth_config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    tracing::info!("Server running on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    db.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
