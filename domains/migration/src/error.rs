//! Migration errors

use std::path::PathBuf;

use synfab_common::ResourceType;
use synfab_fabric::FabricError;
use synfab_synapse::SynapseError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MigrationError>;

#[derive(Error, Debug)]
pub enum MigrationError {
    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Invalid field {field}: expected {expected}")]
    InvalidField {
        field: String,
        expected: &'static str,
    },

    #[error("Invalid artifact name: {0:?}")]
    InvalidName(String),

    #[error("Exporting items of type '{resource_type}' failed: {source}")]
    ListingFailed {
        resource_type: ResourceType,
        source: SynapseError,
    },

    #[error("Fetching {resource_type} '{name}' failed: {source}")]
    FetchFailed {
        resource_type: ResourceType,
        name: String,
        source: SynapseError,
    },

    #[error("Creating {resource_type} '{display_name}' failed: {source}")]
    CreateFailed {
        resource_type: ResourceType,
        display_name: String,
        source: FabricError,
    },

    #[error("Path where the exported artifacts are located does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error at {}: {source}", .path.display())]
    Serialization {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl MigrationError {
    /// HTTP status reported by either API, if the error came from one
    pub fn status(&self) -> Option<u16> {
        match self {
            MigrationError::ListingFailed { source, .. }
            | MigrationError::FetchFailed { source, .. } => source.status(),
            MigrationError::CreateFailed { source, .. } => source.status(),
            _ => None,
        }
    }
}
