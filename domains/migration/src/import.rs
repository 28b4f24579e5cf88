//! Resource importer
//!
//! Reads exported artifacts from the local store, converts them to the
//! destination shape and creates one new item per artifact. Every call
//! creates a new item; re-importing the same name yields a duplicate.

use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use synfab_common::ResourceType;
use synfab_fabric::{FabricApi, ItemEnvelope, ItemKind};

use crate::domain::translate::translate_job_definition;
use crate::error::{MigrationError, Result};
use crate::store::LocalStore;

/// Outcome of importing one resource type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub resource_type: ResourceType,
    pub imported: usize,
    /// Explicitly requested names with no file in the store
    pub missing: Vec<String>,
}

/// Display name of an imported artifact.
pub fn display_name(prefix: &str, name: &str) -> String {
    format!("{}_{}", prefix, name)
}

/// Destination item kind for a resource type.
pub fn item_kind(resource_type: ResourceType) -> ItemKind {
    match resource_type {
        ResourceType::Notebooks => ItemKind::Notebook,
        ResourceType::SparkJobDefinitions => ItemKind::SparkJobDefinition,
    }
}

/// Import notebooks verbatim.
///
/// `names` restricts the import to those notebooks; `None` imports every
/// `.ipynb` file in the store.
pub async fn import_notebooks(
    destination: &dyn FabricApi,
    store: &LocalStore,
    workspace_id: &str,
    prefix: &str,
    names: Option<&[String]>,
) -> Result<ImportReport> {
    import_resources(
        destination,
        store,
        ResourceType::Notebooks,
        workspace_id,
        prefix,
        names,
        |_, document| Ok(document),
    )
    .await
}

/// Import job definitions, translated and bound to `lakehouse_id`.
pub async fn import_spark_job_definitions(
    destination: &dyn FabricApi,
    store: &LocalStore,
    workspace_id: &str,
    lakehouse_id: &str,
    prefix: &str,
    names: Option<&[String]>,
) -> Result<ImportReport> {
    import_resources(
        destination,
        store,
        ResourceType::SparkJobDefinitions,
        workspace_id,
        prefix,
        names,
        |path, document| {
            let payload = translate_job_definition(&document, lakehouse_id)?;
            serde_json::to_value(payload).map_err(|source| MigrationError::Serialization {
                path: path.to_path_buf(),
                source,
            })
        },
    )
    .await
}

async fn import_resources<F>(
    destination: &dyn FabricApi,
    store: &LocalStore,
    resource_type: ResourceType,
    workspace_id: &str,
    prefix: &str,
    names: Option<&[String]>,
    transform: F,
) -> Result<ImportReport>
where
    F: Fn(&Path, Value) -> Result<Value>,
{
    if !store.exists(resource_type) {
        return Err(MigrationError::PathNotFound(
            store.resource_dir(resource_type),
        ));
    }

    let names = match names {
        Some(names) => names.to_vec(),
        None => store.list_names(resource_type)?,
    };

    tracing::info!(
        resource_type = %resource_type,
        workspace_id = %workspace_id,
        count = names.len(),
        "Importing individual resources"
    );

    let kind = item_kind(resource_type);
    let mut report = ImportReport {
        resource_type,
        imported: 0,
        missing: Vec::new(),
    };

    for name in names {
        let document = match store.read(resource_type, &name) {
            Ok(Some(document)) => document,
            Ok(None) => {
                tracing::warn!(resource_type = %resource_type, name = %name, "No exported file, skipping");
                report.missing.push(name);
                continue;
            }
            // Such a name can never have a file in the type folder
            Err(MigrationError::InvalidName(_)) => {
                tracing::warn!(resource_type = %resource_type, name = %name, "Name is not a valid file name, skipping");
                report.missing.push(name);
                continue;
            }
            Err(err) => return Err(err),
        };

        let display_name = display_name(prefix, &name);
        tracing::info!(resource_type = %resource_type, display_name = %display_name, "Importing");

        let body = transform(&store.artifact_path(resource_type, &name)?, document)?;
        let envelope = ItemEnvelope::new(kind, display_name.clone(), &body).map_err(|source| {
            MigrationError::CreateFailed {
                resource_type,
                display_name: display_name.clone(),
                source,
            }
        })?;

        let created = destination
            .create_item(workspace_id, &envelope)
            .await
            .map_err(|source| MigrationError::CreateFailed {
                resource_type,
                display_name: display_name.clone(),
                source,
            })?;

        tracing::info!(
            display_name = %display_name,
            status = created.status,
            item_id = created.id.as_deref().unwrap_or("pending"),
            "Item created"
        );
        report.imported += 1;
    }

    tracing::info!(
        resource_type = %resource_type,
        imported = report.imported,
        missing = report.missing.len(),
        "Finished importing"
    );

    Ok(report)
}
