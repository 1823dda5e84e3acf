//! Bearer access tokens.

use std::fmt;

/// A short-lived bearer token obtained via client-credentials exchange.
///
/// Tokens are scoped to the request or batch that fetched them and are
/// never cached or shared across concurrent requests.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a raw token string as returned by the identity endpoint.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the token value for use in an Authorization header.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Never print the token value in logs.
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessToken(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_value() {
        let token = AccessToken::new("v^1.1#i^1#secret");
        assert_eq!(format!("{token:?}"), "AccessToken(..)");
        assert_eq!(token.as_str(), "v^1.1#i^1#secret");
    }
}
