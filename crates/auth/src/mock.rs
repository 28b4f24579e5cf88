//! Mock Credential Implementation
//!
//! Returns a fixed token and records requested scopes for test assertions.
//! Thread-safe via `Arc<Mutex<>>`.

use std::sync::{Arc, Mutex};

use crate::{CredentialError, TokenCredential};

pub const MOCK_TOKEN: &str = "mock-token";

/// Mock credential that records every scope it was asked for.
#[derive(Debug, Clone)]
pub struct MockCredential {
    token: String,
    scopes: Arc<Mutex<Vec<String>>>,
}

impl MockCredential {
    pub fn new() -> Self {
        Self::with_token(MOCK_TOKEN)
    }

    /// Create a mock credential that issues `token` for every scope.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            scopes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Return all requested scopes, in request order.
    pub fn requested_scopes(&self) -> Vec<String> {
        self.scopes
            .lock()
            .expect("scopes lock poisoned, prior test panicked")
            .clone()
    }
}

impl Default for MockCredential {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TokenCredential for MockCredential {
    async fn get_token(&self, scope: &str) -> Result<String, CredentialError> {
        tracing::debug!(scope = %scope, "Mock credential: issuing token");
        self.scopes
            .lock()
            .map_err(|e| CredentialError::Request(format!("scopes lock poisoned: {e}")))?
            .push(scope.to_string());
        Ok(self.token.clone())
    }
}
