//! Route configuration.

use crate::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Single item lookup
        .route("/search", get(handlers::search))
        // Bulk lookup: comma-separated query list or multipart file upload
        .route(
            "/bulk",
            get(handlers::bulk_query).post(handlers::bulk_upload),
        )
        // Health check (intentionally free of upstream calls)
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
