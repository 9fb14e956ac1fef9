//! Health check handlers.

use axum::Json;
use axum::extract::State;

use crate::state::AppState;

/// GET /health
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /health/detailed
///
/// Pings the database and the blob store; reports per-dependency
/// status without failing the request.
pub async fn detailed_health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let database = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db_pool)
        .await
        .is_ok();

    let storage = state.storage.health_check().await.unwrap_or(false);

    let status = if database && storage { "ok" } else { "degraded" };

    Json(serde_json::json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "checks": {
            "database": database,
            "storage": storage,
        },
    }))
}
