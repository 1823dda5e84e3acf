//! Single item lookup endpoint.

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::Value;

/// Query parameters for GET /search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Barcode/UPC (or free text) to look up.
    #[serde(default)]
    pub q: Option<String>,
}

/// GET /search
///
/// Fetches a fresh token, issues one lookup, and relays the tagged result
/// with status 200 whether the lookup succeeded or failed upstream. Only a
/// token exchange failure produces a 500.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Value>> {
    let query = upclink_core::Query::new(params.q.as_deref().unwrap_or(""))
        .map_err(|_| ApiError::BadRequest("Missing UPC query parameter".to_string()))?;

    let token = state.upstream.fetch_token().await?;
    let result = state.upstream.lookup(&query, &token).await;

    tracing::debug!(barcode = %query, found = result.is_found(), "single lookup served");
    Ok(Json(result.to_json()))
}
