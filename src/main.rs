//! Nestbox Server — personal cloud file organizer.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use nestbox_core::config::AppConfig;
use nestbox_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("NESTBOX_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Nestbox v{}", env!("CARGO_PKG_VERSION"));

    // ── Database connection + migrations ─────────────────────────
    let db = nestbox_database::DatabasePool::connect(&config.database).await?;
    nestbox_database::migration::run_migrations(db.pool()).await?;
    let db_pool = db.into_pool();

    // ── Blob storage ─────────────────────────────────────────────
    let storage = Arc::new(nestbox_storage::StorageManager::new(&config.storage).await?);
    tracing::info!(provider = storage.provider_type(), "Blob storage initialized");

    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(nestbox_database::repositories::user::UserRepository::new(
        db_pool.clone(),
    ));
    let directory_repo = Arc::new(
        nestbox_database::repositories::directory::DirectoryRepository::new(db_pool.clone()),
    );
    let file_repo = Arc::new(nestbox_database::repositories::file::FileRepository::new(
        db_pool.clone(),
    ));

    // ── External collaborators ───────────────────────────────────
    let verifier = Arc::new(nestbox_auth::IdentityVerifier::new(&config.identity));
    let insight = Arc::new(nestbox_insight::InsightClient::new(&config.insight)?);

    // ── Services ─────────────────────────────────────────────────
    let user_service = Arc::new(nestbox_service::user::UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&verifier),
    ));
    let directory_service = Arc::new(nestbox_service::directory::DirectoryService::new(
        Arc::clone(&directory_repo),
        Arc::clone(&file_repo),
        Arc::clone(&user_repo),
    ));
    let organize_service = Arc::new(nestbox_service::directory::OrganizeService::new(
        Arc::clone(&directory_service),
        Arc::clone(&directory_repo),
        Arc::clone(&file_repo),
        Arc::clone(&insight),
    ));
    let upload_service = Arc::new(nestbox_service::file::UploadService::new(
        Arc::clone(&file_repo),
        Arc::clone(&directory_repo),
        Arc::clone(&storage),
        config.storage.clone(),
    ));
    let insight_service = Arc::new(nestbox_service::insight::MetadataInsightService::new(
        Arc::clone(&file_repo),
        Arc::clone(&insight),
    ));

    // ── HTTP server ──────────────────────────────────────────────
    let app_state = nestbox_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        storage: Arc::clone(&storage),
        user_service,
        directory_service,
        organize_service,
        upload_service,
        insight_service,
    };

    let app = nestbox_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Nestbox server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db_pool.close().await;
    tracing::info!("Nestbox server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
