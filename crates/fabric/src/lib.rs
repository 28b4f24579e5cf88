//! Fabric Destination API
//!
//! Creates artifacts in a Fabric workspace:
//! - `POST /v1/workspaces/{workspaceId}/items` with an inline base64 definition
//! - Envelope model shared by the HTTP client and the mock
//! - Mock destination for importer tests

pub mod client;
pub mod envelope;
pub mod mock;

use synfab_auth::CredentialError;
use thiserror::Error;

pub use client::FabricClient;
pub use envelope::{DefinitionPart, ItemDefinition, ItemEnvelope, ItemKind};

#[derive(Error, Debug)]
pub enum FabricError {
    #[error("Fabric credential error: {0}")]
    Credential(#[from] CredentialError),

    #[error("Fabric request error: {0}")]
    Request(String),

    #[error("Fabric API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Fabric payload encoding error: {0}")]
    Encoding(String),
}

impl FabricError {
    /// HTTP status for errors reported by the API itself
    pub fn status(&self) -> Option<u16> {
        match self {
            FabricError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result of a successful create call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedItem {
    /// HTTP status (201 when created synchronously, 202 when provisioning)
    pub status: u16,
    /// Item id, when the API returned the created item
    pub id: Option<String>,
}

/// Destination API used by the importer
#[async_trait::async_trait]
pub trait FabricApi: Send + Sync {
    /// Create a new item in `workspace_id`.
    async fn create_item(
        &self,
        workspace_id: &str,
        envelope: &ItemEnvelope,
    ) -> Result<CreatedItem, FabricError>;
}
