//! Resource type tags
//!
//! A resource type names a category of artifact with its own list/fetch
//! endpoints on the source API, its own folder in the local store and its
//! own file extension.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of artifact that can be migrated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    #[serde(rename = "notebooks")]
    Notebooks,
    #[serde(rename = "sparkJobDefinitions")]
    SparkJobDefinitions,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown resource type: {0}. Supported types: notebooks, sparkJobDefinitions")]
pub struct ParseResourceTypeError(pub String);

impl ResourceType {
    pub const ALL: [ResourceType; 2] = [ResourceType::Notebooks, ResourceType::SparkJobDefinitions];

    /// Path segment used by the source API and the local store
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Notebooks => "notebooks",
            ResourceType::SparkJobDefinitions => "sparkJobDefinitions",
        }
    }

    /// File extension (without the dot) of exported artifacts
    pub fn extension(&self) -> &'static str {
        match self {
            ResourceType::Notebooks => "ipynb",
            ResourceType::SparkJobDefinitions => "json",
        }
    }

    /// File name of an exported artifact
    pub fn file_name(&self, name: &str) -> String {
        format!("{}.{}", name, self.extension())
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = ParseResourceTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "notebooks" | "notebook" => Ok(ResourceType::Notebooks),
            "sparkJobDefinitions"
            | "spark-job-definitions"
            | "spark-job-definition"
            | "sjd"
            | "sjds" => Ok(ResourceType::SparkJobDefinitions),
            other => Err(ParseResourceTypeError(other.to_string())),
        }
    }
}
