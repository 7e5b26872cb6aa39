use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use patient_core::{
    CoreConfig, DEFAULT_PATIENT_DATA_DIR, PatientService, config::store_kind_from_env_value,
    open_repository,
};

/// Main entry point for the patient service
///
/// Resolves configuration from the environment once, wires the selected patient store into a
/// `PatientService`, and serves the REST API until interrupted.
///
/// # Environment Variables
/// - `PATIENT_REST_ADDR`: REST server address (default: "0.0.0.0:4000")
/// - `PATIENT_DATA_DIR`: Directory for patient data storage (default: "patient_data")
/// - `PATIENT_STORE`: `file` or `memory` (default: "file")
/// - `RUST_LOG`: tracing filter directives
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("patient=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("PATIENT_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:4000".into());
    let patient_data_dir = std::env::var("PATIENT_DATA_DIR")
        .unwrap_or_else(|_| DEFAULT_PATIENT_DATA_DIR.into());
    let store_kind = store_kind_from_env_value(std::env::var("PATIENT_STORE").ok())?;

    let cfg = Arc::new(CoreConfig::new(PathBuf::from(patient_data_dir), store_kind)?);

    tracing::info!(
        "++ Using {} patient store at {}",
        cfg.store_kind(),
        cfg.patient_data_dir().display()
    );

    let patient_service = PatientService::new(open_repository(cfg));
    let app = api_rest::router(AppState { patient_service });

    tracing::info!("++ Starting patient REST API on {}", rest_addr);

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("-- Patient REST API stopped");
    Ok(())
}

/// Resolves on ctrl-c, or on SIGTERM where the platform has it.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("-- Received ctrl-c, shutting down"),
        _ = terminate => tracing::info!("-- Received SIGTERM, shutting down"),
    }
}
