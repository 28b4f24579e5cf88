//! Spark job definition translation
//!
//! Maps a Synapse job definition (as exported to disk) onto the
//! `SparkJobDefinitionV1` document Fabric expects. List-valued fields are
//! flattened into single space-joined strings; splitting them back is lossy
//! when an item itself contains whitespace.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{MigrationError, Result};

/// Fabric's language label for Scala and Java jobs
pub const SCALA_JAVA: &str = "Scala/Java";

/// Job definition fields read from the Synapse document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDefinitionRecord {
    pub file: String,
    pub language: String,
    /// Present iff `language` is `scala`
    pub class_name: Option<String>,
    pub jars: Vec<String>,
    pub args: Vec<String>,
}

/// `SparkJobDefinitionV1` document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDefinitionPayload {
    pub executable_file: String,
    pub default_lakehouse_artifact_id: String,
    pub main_class: Option<String>,
    pub additional_lakehouse_ids: Vec<String>,
    pub retry_policy: Option<Value>,
    pub command_line_arguments: String,
    pub additional_library_uris: String,
    pub language: String,
    pub environment_artifact_id: Option<String>,
}

impl JobDefinitionRecord {
    /// Read the record from an exported Synapse job definition.
    ///
    /// `className` is only required, and only read, for Scala jobs.
    pub fn from_document(document: &Value) -> Result<Self> {
        let properties = require(document, "properties", "properties")?;
        let job = require(properties, "jobProperties", "properties.jobProperties")?;

        let language = require_str(properties, "language", "properties.language")?;
        let class_name = if language == "scala" {
            Some(require_str(job, "className", "properties.jobProperties.className")?)
        } else {
            None
        };

        Ok(Self {
            file: require_str(job, "file", "properties.jobProperties.file")?,
            language,
            class_name,
            jars: require_strings(job, "jars", "properties.jobProperties.jars")?,
            args: require_strings(job, "args", "properties.jobProperties.args")?,
        })
    }

    /// Build the destination document bound to `lakehouse_id`.
    pub fn to_payload(&self, lakehouse_id: &str) -> JobDefinitionPayload {
        let language = normalize_language(&self.language);
        let main_class = if language == SCALA_JAVA {
            self.class_name.clone()
        } else {
            None
        };

        JobDefinitionPayload {
            executable_file: self.file.clone(),
            default_lakehouse_artifact_id: lakehouse_id.to_string(),
            main_class,
            additional_lakehouse_ids: Vec::new(),
            retry_policy: None,
            command_line_arguments: self.args.join(" "),
            additional_library_uris: self.jars.join(" "),
            language,
            environment_artifact_id: None,
        }
    }
}

/// Map a Synapse language name to Fabric's label.
pub fn normalize_language(language: &str) -> String {
    match language {
        "scala" => SCALA_JAVA.to_string(),
        other => other.to_string(),
    }
}

/// Translate an exported Synapse job definition into Fabric's document.
pub fn translate_job_definition(document: &Value, lakehouse_id: &str) -> Result<JobDefinitionPayload> {
    Ok(JobDefinitionRecord::from_document(document)?.to_payload(lakehouse_id))
}

fn require<'a>(value: &'a Value, key: &str, field: &str) -> Result<&'a Value> {
    value
        .get(key)
        .ok_or_else(|| MigrationError::MissingField(field.to_string()))
}

fn require_str(value: &Value, key: &str, field: &str) -> Result<String> {
    require(value, key, field)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| MigrationError::InvalidField {
            field: field.to_string(),
            expected: "string",
        })
}

fn require_strings(value: &Value, key: &str, field: &str) -> Result<Vec<String>> {
    let invalid = || MigrationError::InvalidField {
        field: field.to_string(),
        expected: "array of strings",
    };

    require(value, key, field)?
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid))
        .collect()
}
