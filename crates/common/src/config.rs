//! Configuration management following 12-factor app principles
//!
//! Endpoint configuration is loaded from environment variables so the same
//! binary can target public cloud, sovereign clouds or a local mock server.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_SYNAPSE_API_VERSION: &str = "2020-12-01";
pub const DEFAULT_SYNAPSE_ENDPOINT_SUFFIX: &str = "dev.azuresynapse.net";
pub const DEFAULT_FABRIC_BASE_URL: &str = "https://api.fabric.microsoft.com";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationConfig {
    /// `api-version` query parameter sent to the Synapse development endpoint
    pub synapse_api_version: String,

    /// Host suffix appended to the workspace name
    pub synapse_endpoint_suffix: String,

    /// Full base URL overriding `https://{workspace}.{suffix}`
    pub synapse_base_url: Option<String>,

    /// Fabric REST API base URL (without the `/v1` segment)
    pub fabric_base_url: String,
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            synapse_api_version: DEFAULT_SYNAPSE_API_VERSION.to_string(),
            synapse_endpoint_suffix: DEFAULT_SYNAPSE_ENDPOINT_SUFFIX.to_string(),
            synapse_base_url: None,
            fabric_base_url: DEFAULT_FABRIC_BASE_URL.to_string(),
        }
    }
}

impl MigrationConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let synapse_api_version = env::var("SYNAPSE_API_VERSION")
            .unwrap_or_else(|_| DEFAULT_SYNAPSE_API_VERSION.to_string());
        if synapse_api_version.trim().is_empty() {
            return Err(anyhow::anyhow!("SYNAPSE_API_VERSION must not be empty"));
        }

        let config = Self {
            synapse_api_version,
            synapse_endpoint_suffix: env::var("SYNAPSE_ENDPOINT_SUFFIX")
                .unwrap_or_else(|_| DEFAULT_SYNAPSE_ENDPOINT_SUFFIX.to_string()),
            synapse_base_url: env::var("SYNAPSE_BASE_URL")
                .ok()
                .filter(|url| !url.is_empty()),
            fabric_base_url: env::var("FABRIC_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_FABRIC_BASE_URL.to_string()),
        };

        tracing::debug!(?config, "Migration configuration loaded");
        Ok(config)
    }

    /// Base URL of the Synapse development endpoint for a workspace
    pub fn synapse_base_url(&self, workspace_name: &str) -> String {
        match &self.synapse_base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!(
                "https://{}.{}",
                workspace_name, self.synapse_endpoint_suffix
            ),
        }
    }

    /// Fabric base URL without a trailing slash
    pub fn fabric_base_url(&self) -> &str {
        self.fabric_base_url.trim_end_matches('/')
    }
}
