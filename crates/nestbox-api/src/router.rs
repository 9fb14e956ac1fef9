//! Route definitions for the Nestbox HTTP API.
//!
//! Application routes are mounted under `/api`; health checks sit at
//! the root. The router receives `AppState` and passes it to all
//! handlers via axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;

    let api_routes = Router::new()
        .route("/identity/login", post(handlers::identity::login))
        .route(
            "/directory/{id}",
            get(handlers::directory::get_directory)
                .delete(handlers::directory::delete_directory),
        )
        .route(
            "/directory/create",
            post(handlers::directory::create_directory),
        )
        .route("/file/upload", post(handlers::file::upload_file))
        .route("/root-dir", get(handlers::directory::get_root_directory))
        .route(
            "/root-dir/create",
            post(handlers::directory::create_under_root),
        )
        .route(
            "/getMostAccessedDirectory",
            get(handlers::directory::most_accessed_directory),
        )
        .route(
            "/updateDirectoryAccess",
            post(handlers::directory::update_directory_access),
        )
        .route(
            "/process-directory/{id}",
            post(handlers::organize::process_directory),
        )
        .route("/getMetadata", get(handlers::insight::get_metadata));

    let health_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/detailed", get(handlers::health::detailed_health));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&state))
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Build the CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let origins = &state.config.server.cors_allowed_origins;

    let allow_origin = if origins.contains(&"*".to_string()) {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins.iter().filter_map(|o| o.parse().ok()))
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
