//! Entra ID client-credentials flow
//!
//! Exchanges an application's client id and secret for an access token at
//! `{authority_host}/{tenant_id}/oauth2/v2.0/token`.

use reqwest::Client;
use serde::Deserialize;

use crate::{CredentialConfig, CredentialError, TokenCredential};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// OAuth2 error body returned by the token endpoint
#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    error: String,
    error_description: Option<String>,
}

/// Credential backed by a service principal secret
pub struct ClientSecretCredential {
    http: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
}

impl ClientSecretCredential {
    pub fn new(config: CredentialConfig) -> Result<Self, CredentialError> {
        let tenant_id = require(config.tenant_id, "AZURE_TENANT_ID")?;
        let client_id = require(config.client_id, "AZURE_CLIENT_ID")?;
        let client_secret = require(config.client_secret, "AZURE_CLIENT_SECRET")?;

        let token_url = format!(
            "{}/{}/oauth2/v2.0/token",
            config.authority_host.trim_end_matches('/'),
            tenant_id
        );

        Ok(Self {
            http: Client::new(),
            token_url,
            client_id,
            client_secret,
        })
    }
}

fn require(value: Option<String>, key: &str) -> Result<String, CredentialError> {
    value.ok_or_else(|| {
        CredentialError::Configuration(format!(
            "{} is required for client_secret provider",
            key
        ))
    })
}

/// Turn a resource scope into the `.default` scope the v2 endpoint expects.
pub fn default_scope(scope: &str) -> String {
    if scope.ends_with("/.default") {
        scope.to_string()
    } else {
        format!("{}/.default", scope.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl TokenCredential for ClientSecretCredential {
    async fn get_token(&self, scope: &str) -> Result<String, CredentialError> {
        let scope = default_scope(scope);
        tracing::debug!(scope = %scope, "Requesting access token");

        let params = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("grant_type", "client_credentials"),
            ("scope", scope.as_str()),
        ];

        let response = self
            .http
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| CredentialError::Request(format!("HTTP request failed: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());

            if let Ok(error_response) = serde_json::from_str::<TokenErrorResponse>(&error_body) {
                return Err(CredentialError::Response(format!(
                    "Token endpoint returned {} ({}): {}",
                    status,
                    error_response.error,
                    error_response.error_description.unwrap_or_default()
                )));
            }

            return Err(CredentialError::Response(format!(
                "Token endpoint returned {}: {}",
                status, error_body
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| CredentialError::Response(format!("Failed to parse response: {}", e)))?;

        Ok(token.access_token)
    }
}
