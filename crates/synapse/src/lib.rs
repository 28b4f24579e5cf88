//! Synapse Source API
//!
//! Read-only access to artifacts of a Synapse workspace:
//! - `GET /{resourceType}` lists the artifacts of a type
//! - `GET /{resourceType}/{name}` fetches one artifact's full definition
//! - Mock source for exporter tests

pub mod client;
pub mod mock;

use serde_json::Value;
use synfab_auth::CredentialError;
use synfab_common::ResourceType;
use thiserror::Error;

pub use client::SynapseClient;

#[derive(Error, Debug)]
pub enum SynapseError {
    #[error("Synapse credential error: {0}")]
    Credential(#[from] CredentialError),

    #[error("Synapse request error: {0}")]
    Request(String),

    #[error("Synapse API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Synapse response error: {0}")]
    Response(String),
}

impl SynapseError {
    /// HTTP status for errors reported by the API itself
    pub fn status(&self) -> Option<u16> {
        match self {
            SynapseError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Source API used by the exporter
#[async_trait::async_trait]
pub trait SynapseApi: Send + Sync {
    /// List every artifact of a type; each element is the raw listing entry.
    async fn list_resources(&self, resource_type: ResourceType) -> Result<Vec<Value>, SynapseError>;

    /// Fetch one artifact's full definition.
    async fn get_resource(
        &self,
        resource_type: ResourceType,
        name: &str,
    ) -> Result<Value, SynapseError>;
}

/// Extract the artifact array from a listing body.
///
/// The development endpoint answers with `{"value": [...]}`; some older
/// endpoints use `{"items": [...]}`. A bare array is accepted too.
pub fn listing_items(body: Value) -> Result<Vec<Value>, SynapseError> {
    match body {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => {
            for key in ["value", "items"] {
                if let Some(Value::Array(items)) = map.remove(key) {
                    return Ok(items);
                }
            }
            Err(SynapseError::Response(
                "listing body has neither a `value` nor an `items` array".to_string(),
            ))
        }
        other => Err(SynapseError::Response(format!(
            "unexpected listing body: {}",
            other
        ))),
    }
}

/// Artifact name of a listing entry, accepting `name` or `Name`.
pub fn resource_name(item: &Value) -> Option<&str> {
    item.get("name")
        .or_else(|| item.get("Name"))
        .and_then(Value::as_str)
}
