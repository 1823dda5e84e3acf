//! Configuration types shared across crates.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration, built once at startup and passed
/// explicitly to the components that need it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream marketplace API configuration.
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

impl AppConfig {
    /// Validate the configuration, failing fast on unusable settings.
    pub fn validate(&self) -> crate::Result<()> {
        if self.upstream.client_id.trim().is_empty() {
            return Err(crate::Error::InvalidConfig(
                "upstream.client_id must be set (EBAY_CLIENT_ID)".to_string(),
            ));
        }
        if self.upstream.client_secret.trim().is_empty() {
            return Err(crate::Error::InvalidConfig(
                "upstream.client_secret must be set (EBAY_CLIENT_SECRET)".to_string(),
            ));
        }
        Ok(())
    }

    /// Create a test configuration with dummy credentials.
    ///
    /// **For testing only.**
    pub fn for_testing() -> Self {
        Self {
            server: ServerConfig::default(),
            upstream: UpstreamConfig {
                client_id: "test-client-id".to_string(),
                client_secret: "test-client-secret".to_string(),
                ..Default::default()
            },
        }
    }
}

/// HTTP server configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host (e.g., "0.0.0.0").
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory for staging bulk uploads (system temp dir when unset).
    /// Staged files are removed when processing finishes, on every path.
    #[serde(default)]
    pub upload_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// The full listen address ("host:port").
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            upload_dir: None,
        }
    }
}

/// Upstream marketplace API configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// OAuth2 client-credentials identity.
    #[serde(default)]
    pub client_id: String,
    /// OAuth2 client-credentials secret.
    #[serde(default)]
    pub client_secret: String,
    /// Token exchange endpoint.
    #[serde(default = "default_token_url")]
    pub token_url: String,
    /// Item summary search endpoint.
    #[serde(default = "default_search_url")]
    pub search_url: String,
    /// OAuth scope requested with the token.
    #[serde(default = "default_scope")]
    pub scope: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            token_url: default_token_url(),
            search_url: default_search_url(),
            scope: default_scope(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    crate::DEFAULT_PORT
}

fn default_token_url() -> String {
    "https://api.ebay.com/identity/v1/oauth2/token".to_string()
}

fn default_search_url() -> String {
    "https://api.ebay.com/buy/browse/v1/item_summary/search".to_string()
}

fn default_scope() -> String {
    "https://api.ebay.com/oauth/api_scope".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_upstream_api() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.listen_addr(), "0.0.0.0:3000");
        assert!(config.server.upload_dir.is_none());
        assert_eq!(
            config.upstream.token_url,
            "https://api.ebay.com/identity/v1/oauth2/token"
        );
        assert_eq!(
            config.upstream.search_url,
            "https://api.ebay.com/buy/browse/v1/item_summary/search"
        );
    }

    #[test]
    fn validate_rejects_missing_credentials() {
        let config = AppConfig::default();
        assert!(config.validate().is_err());

        let config = AppConfig::for_testing();
        assert!(config.validate().is_ok());
    }
}
