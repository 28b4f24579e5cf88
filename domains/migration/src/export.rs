//! Resource exporter
//!
//! Lists every artifact of a type in the source workspace, fetches each
//! definition, applies the per-type transform and persists it in the local
//! store. A failed listing aborts the batch; a failed fetch only skips that
//! artifact.

use serde::Serialize;
use serde_json::Value;
use synfab_common::ResourceType;
use synfab_synapse::{resource_name, SynapseApi};

use crate::domain::notebook::{clean_notebook_cells, TRANSIENT_CELL_FIELDS};
use crate::error::{MigrationError, Result};
use crate::store::LocalStore;

/// Outcome of exporting one resource type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportReport {
    pub resource_type: ResourceType,
    pub exported: usize,
    /// Artifacts that could not be fetched or did not have the expected shape
    pub skipped: Vec<String>,
}

impl ExportReport {
    fn new(resource_type: ResourceType) -> Self {
        Self {
            resource_type,
            exported: 0,
            skipped: Vec::new(),
        }
    }
}

pub async fn export_notebooks(source: &dyn SynapseApi, store: &LocalStore) -> Result<ExportReport> {
    export_resources(source, ResourceType::Notebooks, store).await
}

pub async fn export_spark_job_definitions(
    source: &dyn SynapseApi,
    store: &LocalStore,
) -> Result<ExportReport> {
    export_resources(source, ResourceType::SparkJobDefinitions, store).await
}

/// Export every artifact of `resource_type` into `store`.
pub async fn export_resources(
    source: &dyn SynapseApi,
    resource_type: ResourceType,
    store: &LocalStore,
) -> Result<ExportReport> {
    let items = source
        .list_resources(resource_type)
        .await
        .map_err(|source| MigrationError::ListingFailed {
            resource_type,
            source,
        })?;

    tracing::info!(
        resource_type = %resource_type,
        count = items.len(),
        "Exporting individual resources"
    );

    let mut report = ExportReport::new(resource_type);

    for item in &items {
        let Some(name) = resource_name(item) else {
            tracing::warn!(resource_type = %resource_type, entry = %item, "Listing entry has no name, skipping");
            report.skipped.push(item.to_string());
            continue;
        };

        tracing::info!(resource_type = %resource_type, name = %name, "Exporting");

        let body = match source.get_resource(resource_type, name).await {
            Ok(body) => body,
            Err(fetch_err) => {
                let err = MigrationError::FetchFailed {
                    resource_type,
                    name: name.to_string(),
                    source: fetch_err,
                };
                tracing::warn!(error = %err, "Skipping artifact");
                report.skipped.push(name.to_string());
                continue;
            }
        };

        let document = match prepare_document(resource_type, body) {
            Ok(document) => document,
            Err(err) => {
                tracing::warn!(resource_type = %resource_type, name = %name, error = %err, "Unexpected artifact body, skipping");
                report.skipped.push(name.to_string());
                continue;
            }
        };

        match store.write(resource_type, name, &document) {
            Ok(_) => report.exported += 1,
            Err(MigrationError::InvalidName(name)) => {
                tracing::warn!(resource_type = %resource_type, name = %name, "Artifact name is not a valid file name, skipping");
                report.skipped.push(name);
            }
            Err(err) => return Err(err),
        }
    }

    tracing::info!(
        resource_type = %resource_type,
        exported = report.exported,
        skipped = report.skipped.len(),
        "Finished exporting"
    );

    Ok(report)
}

/// Per-type transform from the fetched body to the stored document.
pub fn prepare_document(resource_type: ResourceType, body: Value) -> Result<Value> {
    match resource_type {
        ResourceType::SparkJobDefinitions => Ok(body),
        ResourceType::Notebooks => {
            let mut notebook = match body {
                Value::Object(mut map) => map
                    .remove("properties")
                    .ok_or_else(|| MigrationError::MissingField("properties".to_string()))?,
                _ => return Err(MigrationError::MissingField("properties".to_string())),
            };
            clean_notebook_cells(&mut notebook, TRANSIENT_CELL_FIELDS)?;
            Ok(notebook)
        }
    }
}
