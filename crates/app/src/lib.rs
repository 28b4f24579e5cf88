//! synfab application composition root
//!
//! Wires configuration, credentials and the two API clients into the
//! migration domain's export and import operations.

pub mod cli;

use anyhow::Context;
use synfab_auth::TokenCredential;
use synfab_common::{MigrationConfig, ResourceType};
use synfab_fabric::FabricClient;
use synfab_migration::{
    export_resources, import_notebooks, import_spark_job_definitions, ExportReport, ImportReport,
    LocalStore,
};
use synfab_synapse::SynapseClient;

use crate::cli::{Commands, DestinationArgs, SourceArgs, StoreArgs, TypeSelection};

/// Run one CLI command to completion.
pub async fn run(
    command: Commands,
    config: &MigrationConfig,
    credential: &dyn TokenCredential,
) -> anyhow::Result<()> {
    match command {
        Commands::Export { source, store } => {
            run_export(config, credential, &source, &store).await?;
        }
        Commands::Import { store, destination } => {
            run_import(config, credential, &store, &destination).await?;
        }
        Commands::Migrate {
            source,
            store,
            destination,
        } => {
            check_destination(&store, &destination)?;
            let reports = run_export(config, credential, &source, &store).await?;

            // Types with nothing exported have no store folder to import from
            let local = LocalStore::new(&store.output);
            let exported: Vec<ResourceType> = reports
                .iter()
                .map(|report| report.resource_type)
                .filter(|resource_type| local.exists(*resource_type))
                .collect();
            import_types(config, credential, &store, &destination, &exported).await?;
        }
    }
    Ok(())
}

/// Export the selected resource types from a Synapse workspace.
pub async fn run_export(
    config: &MigrationConfig,
    credential: &dyn TokenCredential,
    source: &SourceArgs,
    store: &StoreArgs,
) -> anyhow::Result<Vec<ExportReport>> {
    let client = SynapseClient::connect(config, &source.workspace, credential)
        .await
        .context("Failed to connect to the Synapse workspace")?;
    let local = LocalStore::new(&store.output);

    let mut reports = Vec::new();
    for resource_type in store.types.resource_types() {
        let report = export_resources(&client, resource_type, &local).await?;
        tracing::info!(
            resource_type = %report.resource_type,
            exported = report.exported,
            skipped = ?report.skipped,
            workspace = %source.workspace,
            "Export finished"
        );
        reports.push(report);
    }
    Ok(reports)
}

/// Import the selected resource types into a Fabric workspace.
pub async fn run_import(
    config: &MigrationConfig,
    credential: &dyn TokenCredential,
    store: &StoreArgs,
    destination: &DestinationArgs,
) -> anyhow::Result<Vec<ImportReport>> {
    check_destination(store, destination)?;

    let resource_types: Vec<ResourceType> = match store.types {
        // Export leaves no folder for a type with zero artifacts
        TypeSelection::All => {
            let local = LocalStore::new(&store.output);
            ResourceType::ALL
                .into_iter()
                .filter(|resource_type| {
                    let present = local.exists(*resource_type);
                    if !present {
                        tracing::warn!(
                            resource_type = %resource_type,
                            path = %local.resource_dir(*resource_type).display(),
                            "No exported artifacts of this type, skipping"
                        );
                    }
                    present
                })
                .collect()
        }
        selection => selection.resource_types(),
    };

    import_types(config, credential, store, destination, &resource_types).await
}

async fn import_types(
    config: &MigrationConfig,
    credential: &dyn TokenCredential,
    store: &StoreArgs,
    destination: &DestinationArgs,
    resource_types: &[ResourceType],
) -> anyhow::Result<Vec<ImportReport>> {
    if resource_types.is_empty() {
        tracing::info!("Nothing to import");
        return Ok(Vec::new());
    }

    let client = FabricClient::connect(config, credential)
        .await
        .context("Failed to connect to Fabric")?;
    let local = LocalStore::new(&store.output);

    let mut reports = Vec::new();
    for resource_type in resource_types.iter().copied() {
        let report = match resource_type {
            ResourceType::Notebooks => {
                import_notebooks(
                    &client,
                    &local,
                    &destination.workspace_id,
                    &destination.prefix,
                    destination.names(),
                )
                .await?
            }
            ResourceType::SparkJobDefinitions => {
                let lakehouse_id = destination.lakehouse_id.as_deref().unwrap_or_default();
                import_spark_job_definitions(
                    &client,
                    &local,
                    &destination.workspace_id,
                    lakehouse_id,
                    &destination.prefix,
                    destination.names(),
                )
                .await?
            }
        };
        tracing::info!(
            resource_type = %report.resource_type,
            imported = report.imported,
            missing = ?report.missing,
            workspace_id = %destination.workspace_id,
            "Import finished"
        );
        reports.push(report);
    }
    Ok(reports)
}

/// Reject argument combinations that would fail halfway through a run.
fn check_destination(store: &StoreArgs, destination: &DestinationArgs) -> anyhow::Result<()> {
    let imports_jobs = store
        .types
        .resource_types()
        .contains(&ResourceType::SparkJobDefinitions);
    let has_lakehouse = destination
        .lakehouse_id
        .as_deref()
        .is_some_and(|id| !id.is_empty());

    if imports_jobs && !has_lakehouse {
        anyhow::bail!(
            "--lakehouse-id (or FABRIC_LAKEHOUSE_ID) is required to import Spark job definitions"
        );
    }
    Ok(())
}
