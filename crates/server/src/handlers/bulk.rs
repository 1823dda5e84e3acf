//! Bulk lookup endpoints.

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Multipart, Query, State};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use upclink_core::{LookupResult, query};

/// Query parameters for GET /bulk.
#[derive(Debug, Deserialize)]
pub struct BulkParams {
    /// Comma-separated list of barcodes.
    #[serde(default)]
    pub q: Option<String>,
}

/// Bulk lookup response.
#[derive(Debug, Serialize)]
pub struct BulkResponse {
    /// One tagged result per submitted query, in input order.
    pub results: Vec<LookupResult>,
}

/// GET /bulk
///
/// Accepts a comma-separated barcode list in `q` and delegates to the bulk
/// aggregator: one token for the whole batch, parallel lookups, per-item
/// failures embedded in their own results.
pub async fn bulk_query(
    State(state): State<AppState>,
    Query(params): Query<BulkParams>,
) -> ApiResult<Json<BulkResponse>> {
    let raw = params
        .q
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing q parameter".to_string()))?;

    let queries = query::parse_comma_list(&raw);
    if queries.is_empty() {
        return Err(ApiError::BadRequest(
            "No valid barcodes in query".to_string(),
        ));
    }

    let results = state.upstream.lookup_many(&queries).await?;
    Ok(Json(BulkResponse { results }))
}

/// POST /bulk
///
/// Accepts a multipart file of newline-separated barcodes. The upload is
/// staged to a temporary file that is removed on every exit path (drop
/// semantics cover success, rejection, and batch failure alike).
pub async fn bulk_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<BulkResponse>> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.file_name().is_some() {
            upload = Some(field.bytes().await?);
            break;
        }
    }
    let upload = upload.ok_or_else(|| ApiError::BadRequest("Missing file upload".to_string()))?;

    let staged = match &state.config.server.upload_dir {
        Some(dir) => NamedTempFile::new_in(dir)?,
        None => NamedTempFile::new()?,
    };
    tokio::fs::write(staged.path(), &upload).await?;
    let text = tokio::fs::read_to_string(staged.path())
        .await
        .map_err(|e| match e.kind() {
            // Caller-supplied binary garbage, not an infrastructure failure.
            std::io::ErrorKind::InvalidData => {
                ApiError::BadRequest("Uploaded file is not valid UTF-8 text".to_string())
            }
            _ => ApiError::Staging(e),
        })?;

    let queries = query::parse_lines(&text);
    if queries.is_empty() {
        return Err(ApiError::BadRequest(
            "No valid barcodes in file".to_string(),
        ));
    }

    tracing::info!(batch_size = queries.len(), "processing bulk upload");
    let results = state.upstream.lookup_many(&queries).await?;
    Ok(Json(BulkResponse { results }))
}
