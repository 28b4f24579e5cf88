//! Fabric HTTP Client Implementation
//!
//! POSTs item envelopes to `{base_url}/v1/workspaces/{workspaceId}/items`.

use reqwest::{Client, Url};
use serde::Deserialize;
use synfab_auth::{scopes, TokenCredential};
use synfab_common::MigrationConfig;

use crate::{CreatedItem, FabricApi, FabricError, ItemEnvelope};

#[derive(Debug, Deserialize)]
struct CreatedItemBody {
    id: Option<String>,
}

/// Real Fabric HTTP client.
pub struct FabricClient {
    http: Client,
    base_url: Url,
    token: String,
}

impl std::fmt::Debug for FabricClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FabricClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl FabricClient {
    /// Create a client from a base URL and an already acquired bearer token.
    pub fn new(base_url: &str, token: impl Into<String>) -> Result<Self, FabricError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| FabricError::Request(format!("Invalid base URL {}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(FabricError::Request(format!(
                "Base URL cannot carry a path: {}",
                base_url
            )));
        }

        Ok(Self {
            http: Client::new(),
            base_url,
            token: token.into(),
        })
    }

    /// Acquire a destination-scoped token and build a client.
    pub async fn connect(
        config: &MigrationConfig,
        credential: &dyn TokenCredential,
    ) -> Result<Self, FabricError> {
        let token = credential.get_token(scopes::FABRIC_API).await?;
        Self::new(config.fabric_base_url(), token)
    }

    fn items_url(&self, workspace_id: &str) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so segments are always available
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(["v1", "workspaces", workspace_id, "items"]);
        }
        url
    }
}

#[async_trait::async_trait]
impl FabricApi for FabricClient {
    async fn create_item(
        &self,
        workspace_id: &str,
        envelope: &ItemEnvelope,
    ) -> Result<CreatedItem, FabricError> {
        let url = self.items_url(workspace_id);

        tracing::debug!(
            url = %url,
            item_type = %envelope.item_type,
            display_name = %envelope.display_name,
            "Sending Fabric create item request"
        );

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(envelope)
            .send()
            .await
            .map_err(|e| FabricError::Request(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response body".to_string());

        if !status.is_success() {
            return Err(FabricError::Status {
                status: status.as_u16(),
                body,
            });
        }

        // 202 responses carry no body; the item is provisioned asynchronously
        let id = serde_json::from_str::<CreatedItemBody>(&body)
            .ok()
            .and_then(|created| created.id);

        Ok(CreatedItem {
            status: status.as_u16(),
            id,
        })
    }
}
