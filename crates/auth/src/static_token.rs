//! Pre-acquired tokens
//!
//! Useful when tokens are minted elsewhere, e.g. `az account get-access-token`
//! in a CI step, and handed to the migration through the environment.

use std::collections::HashMap;

use crate::{scopes, CredentialError, TokenCredential};

/// Credential that hands out fixed tokens keyed by scope
#[derive(Clone, Default)]
pub struct StaticTokenCredential {
    tokens: HashMap<String, String>,
}

impl std::fmt::Debug for StaticTokenCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenCredential")
            .field("scopes", &self.tokens.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl StaticTokenCredential {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the token returned for `scope`.
    pub fn with_token(mut self, scope: impl Into<String>, token: impl Into<String>) -> Self {
        self.tokens.insert(scope.into(), token.into());
        self
    }

    /// Read `SYNAPSE_ACCESS_TOKEN` and `FABRIC_ACCESS_TOKEN`.
    pub fn from_env() -> Result<Self, CredentialError> {
        let mut credential = Self::new();

        if let Ok(token) = std::env::var("SYNAPSE_ACCESS_TOKEN") {
            credential = credential.with_token(scopes::SYNAPSE_DEV, token);
        }
        if let Ok(token) = std::env::var("FABRIC_ACCESS_TOKEN") {
            credential = credential.with_token(scopes::FABRIC_API, token);
        }

        if credential.tokens.is_empty() {
            return Err(CredentialError::Configuration(
                "SYNAPSE_ACCESS_TOKEN or FABRIC_ACCESS_TOKEN is required for static provider"
                    .to_string(),
            ));
        }

        Ok(credential)
    }
}

#[async_trait::async_trait]
impl TokenCredential for StaticTokenCredential {
    async fn get_token(&self, scope: &str) -> Result<String, CredentialError> {
        self.tokens
            .get(scope)
            .cloned()
            .ok_or_else(|| CredentialError::UnsupportedScope(scope.to_string()))
    }
}
