//! Item creation envelope
//!
//! The destination API embeds the artifact body as a base64 "part" inside a
//! definition carrying the format name.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::FabricError;

pub const IMPORT_DESCRIPTION: &str = "Imported from Synapse";
pub const INLINE_BASE64: &str = "InlineBase64";

/// Kind of item created at the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Notebook,
    SparkJobDefinition,
}

impl ItemKind {
    /// Value of the envelope `type` field
    pub fn item_type(&self) -> &'static str {
        match self {
            ItemKind::Notebook => "Notebook",
            ItemKind::SparkJobDefinition => "SparkJobDefinition",
        }
    }

    /// Definition format name
    pub fn format(&self) -> &'static str {
        match self {
            ItemKind::Notebook => "ipynb",
            ItemKind::SparkJobDefinition => "SparkJobDefinitionV1",
        }
    }

    /// Path of the single definition part
    pub fn part_path(&self) -> &'static str {
        match self {
            ItemKind::Notebook => "notebook-content.ipynb",
            ItemKind::SparkJobDefinition => "SparkJobDefinitionV1.json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemEnvelope {
    #[serde(rename = "type")]
    pub item_type: String,
    pub description: String,
    pub display_name: String,
    pub definition: ItemDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub format: String,
    pub parts: Vec<DefinitionPart>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionPart {
    pub path: String,
    pub payload: String,
    pub payload_type: String,
}

impl ItemEnvelope {
    /// Wrap `body` as the single inline part of a new item definition.
    pub fn new(kind: ItemKind, display_name: impl Into<String>, body: &Value) -> Result<Self, FabricError> {
        let bytes = serde_json::to_vec(body).map_err(|e| FabricError::Encoding(e.to_string()))?;

        Ok(Self {
            item_type: kind.item_type().to_string(),
            description: IMPORT_DESCRIPTION.to_string(),
            display_name: display_name.into(),
            definition: ItemDefinition {
                format: kind.format().to_string(),
                parts: vec![DefinitionPart {
                    path: kind.part_path().to_string(),
                    payload: STANDARD.encode(bytes),
                    payload_type: INLINE_BASE64.to_string(),
                }],
            },
        })
    }
}

impl DefinitionPart {
    /// Decode the inline payload back into JSON.
    pub fn decode(&self) -> Result<Value, FabricError> {
        let bytes = STANDARD
            .decode(&self.payload)
            .map_err(|e| FabricError::Encoding(e.to_string()))?;
        serde_json::from_slice(&bytes).map_err(|e| FabricError::Encoding(e.to_string()))
    }
}
