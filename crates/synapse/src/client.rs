//! Synapse HTTP Client Implementation
//!
//! Issues authenticated `GET` requests against
//! `https://{workspace}.dev.azuresynapse.net/{resourceType}[/{name}]?api-version=...`.

use reqwest::{Client, Url};
use serde_json::Value;
use synfab_auth::{scopes, TokenCredential};
use synfab_common::{MigrationConfig, ResourceType};

use crate::{listing_items, SynapseApi, SynapseError};

/// Real Synapse HTTP client bound to one workspace.
pub struct SynapseClient {
    http: Client,
    base_url: Url,
    api_version: String,
    token: String,
}

impl std::fmt::Debug for SynapseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SynapseClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_version", &self.api_version)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl SynapseClient {
    /// Create a client from a base URL and an already acquired bearer token.
    pub fn new(
        base_url: &str,
        api_version: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, SynapseError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| SynapseError::Request(format!("Invalid base URL {}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(SynapseError::Request(format!(
                "Base URL cannot carry a path: {}",
                base_url
            )));
        }

        Ok(Self {
            http: Client::new(),
            base_url,
            api_version: api_version.into(),
            token: token.into(),
        })
    }

    /// Acquire a source-scoped token and bind a client to `workspace_name`.
    pub async fn connect(
        config: &MigrationConfig,
        workspace_name: &str,
        credential: &dyn TokenCredential,
    ) -> Result<Self, SynapseError> {
        let token = credential.get_token(scopes::SYNAPSE_DEV).await?;
        let client = Self::new(
            &config.synapse_base_url(workspace_name),
            config.synapse_api_version.clone(),
            token,
        )?;
        tracing::debug!(base_url = %client.base_url, "Synapse client connected");
        Ok(client)
    }

    fn resource_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so segments are always available
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json(&self, url: Url) -> Result<Value, SynapseError> {
        tracing::debug!(url = %url, "Sending Synapse API request");

        let response = self
            .http
            .get(url)
            .query(&[("api-version", self.api_version.as_str())])
            .bearer_auth(&self.token)
            .header("content-type", "application/json")
            .send()
            .await
            .map_err(|e| SynapseError::Request(format!("HTTP request failed: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(SynapseError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| SynapseError::Response(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait::async_trait]
impl SynapseApi for SynapseClient {
    async fn list_resources(&self, resource_type: ResourceType) -> Result<Vec<Value>, SynapseError> {
        let body = self
            .get_json(self.resource_url(&[resource_type.as_str()]))
            .await?;
        listing_items(body)
    }

    async fn get_resource(
        &self,
        resource_type: ResourceType,
        name: &str,
    ) -> Result<Value, SynapseError> {
        self.get_json(self.resource_url(&[resource_type.as_str(), name]))
            .await
    }
}
