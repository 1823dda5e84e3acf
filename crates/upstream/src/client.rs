//! eBay Browse API client: token exchange, item lookup, bulk fan-out.

use crate::error::UpstreamError;
use futures::future;
use serde::Deserialize;
use serde_json::Value;
use upclink_core::config::UpstreamConfig;
use upclink_core::{AccessToken, LookupResult, Query};

/// Token endpoint response body.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Client for the upstream marketplace API.
///
/// Holds one `reqwest::Client` (connection pooling) but no token state:
/// every request or batch performs a fresh client-credentials exchange.
#[derive(Clone)]
pub struct EbayClient {
    http: reqwest::Client,
    config: UpstreamConfig,
}

impl EbayClient {
    /// Create a client from upstream configuration.
    pub fn new(config: UpstreamConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Exchange client credentials for a bearer token.
    ///
    /// One outbound POST; no caching, no retry. Fails if the identity
    /// endpoint is unreachable, returns non-2xx, or omits `access_token`.
    pub async fn fetch_token(&self) -> Result<AccessToken, UpstreamError> {
        let response = self
            .http
            .post(&self.config.token_url)
            .basic_auth(&self.config.client_id, Some(&self.config.client_secret))
            .form(&[
                ("grant_type", "client_credentials"),
                ("scope", self.config.scope.as_str()),
            ])
            .send()
            .await
            .map_err(UpstreamError::TokenRequest)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(UpstreamError::TokenRequest)?;

        if !status.is_success() {
            return Err(UpstreamError::TokenRejected {
                status,
                detail: body,
            });
        }

        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|_| UpstreamError::TokenMalformed)?;
        Ok(AccessToken::new(token.access_token))
    }

    /// Look up one query against the search endpoint.
    ///
    /// Infallible by contract: any failure (network, non-2xx, malformed
    /// body) is captured in the returned result so that one failing item
    /// never aborts a batch.
    pub async fn lookup(&self, query: &Query, token: &AccessToken) -> LookupResult {
        match self.search(query, token).await {
            Ok(payload) => LookupResult::found(query.clone(), payload),
            Err(detail) => {
                tracing::warn!(query = %query, detail = %detail, "item lookup failed");
                LookupResult::failed(query.clone(), detail)
            }
        }
    }

    /// Look up a whole batch, sharing one token across all queries.
    ///
    /// Exactly one token exchange per batch; a token failure fails the
    /// batch before any search call is issued. Lookups fan out without a
    /// concurrency cap (batches are operator-sized) and results come back
    /// in input order, duplicates preserved.
    pub async fn lookup_many(
        &self,
        queries: &[Query],
    ) -> Result<Vec<LookupResult>, UpstreamError> {
        if queries.is_empty() {
            return Err(UpstreamError::EmptyBatch);
        }

        let token = self.fetch_token().await?;
        tracing::debug!(batch_size = queries.len(), "dispatching bulk lookup");

        let lookups = queries.iter().map(|query| self.lookup(query, &token));
        Ok(future::join_all(lookups).await)
    }

    /// One search call; the error side carries the upstream error detail
    /// (or the low-level error message) ready for embedding in a result.
    async fn search(&self, query: &Query, token: &AccessToken) -> Result<Value, Value> {
        let response = self
            .http
            .get(&self.config.search_url)
            .query(&[("q", query.as_str())])
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(|e| Value::String(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Value::String(e.to_string()))?;

        if !status.is_success() {
            // Relay the upstream error body verbatim when it is JSON.
            return Err(match serde_json::from_str(&body) {
                Ok(value) => value,
                Err(_) => Value::String(body),
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| Value::String(format!("malformed upstream response: {e}")))
    }
}
