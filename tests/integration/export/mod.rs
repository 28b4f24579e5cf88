//! Export from a Synapse workspace into the local store

use serde_json::json;
use synfab_app::cli::{SourceArgs, StoreArgs, TypeSelection};
use synfab_app::run_export;
use synfab_common::ResourceType;
use synfab_migration::MigrationError;

use crate::common::TestEnv;

fn source() -> SourceArgs {
    SourceArgs {
        workspace: "contoso".to_string(),
    }
}

fn store(env: &TestEnv, types: TypeSelection) -> StoreArgs {
    StoreArgs {
        output: env.store.path().to_path_buf(),
        types,
    }
}

/// EXP-E01: Notebook export strips cell outputs and unwraps `properties`
#[tokio::test]
async fn test_notebook_export_writes_cleaned_notebook() {
    let env = TestEnv::start().await;
    env.mount_listing("notebooks", 200, json!({"value": [{"name": "nb1"}]}))
        .await;
    env.mount_resource(
        "notebooks",
        "nb1",
        200,
        json!({"name": "nb1", "properties": {"cells": [{"outputs": [1, 2]}]}}),
    )
    .await;

    let reports = run_export(
        &env.config(),
        &env.credential,
        &source(),
        &store(&env, TypeSelection::Notebooks),
    )
    .await
    .unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].exported, 1);
    assert!(reports[0].skipped.is_empty());
    assert_eq!(
        env.read_stored("notebooks", "nb1.ipynb"),
        json!({"cells": [{"outputs": []}]})
    );
}

/// EXP-E02: Stored files use 4-space indentation
#[tokio::test]
async fn test_stored_file_is_indented() {
    let env = TestEnv::start().await;
    env.mount_listing("sparkJobDefinitions", 200, json!({"value": [{"name": "job1"}]}))
        .await;
    env.mount_resource(
        "sparkJobDefinitions",
        "job1",
        200,
        json!({"name": "job1", "properties": {"language": "python"}}),
    )
    .await;

    run_export(
        &env.config(),
        &env.credential,
        &source(),
        &store(&env, TypeSelection::SparkJobDefinitions),
    )
    .await
    .unwrap();

    let text = std::fs::read_to_string(
        env.store
            .path()
            .join("sparkJobDefinitions")
            .join("job1.json"),
    )
    .unwrap();
    assert!(text.contains("\n    \"name\": \"job1\""));
}

/// EXP-E03: A failed listing is fatal, names type and status, writes nothing
#[tokio::test]
async fn test_listing_failure_aborts_export() {
    let env = TestEnv::start().await;
    env.mount_listing("notebooks", 500, json!({"error": "boom"})).await;

    let err = run_export(
        &env.config(),
        &env.credential,
        &source(),
        &store(&env, TypeSelection::Notebooks),
    )
    .await
    .unwrap_err();

    let migration_err = err
        .downcast_ref::<MigrationError>()
        .expect("Expected a migration error");
    assert!(matches!(
        migration_err,
        MigrationError::ListingFailed {
            resource_type: ResourceType::Notebooks,
            ..
        }
    ));
    assert_eq!(migration_err.status(), Some(500));

    let message = migration_err.to_string();
    assert!(message.contains("notebooks"));
    assert!(message.contains("500"));
    assert!(!env.store.path().join("notebooks").exists());
}

/// EXP-E04: One failing fetch skips only that artifact
#[tokio::test]
async fn test_fetch_failure_skips_single_artifact() {
    let env = TestEnv::start().await;
    env.mount_listing(
        "notebooks",
        200,
        json!({"value": [{"name": "good"}, {"name": "broken"}]}),
    )
    .await;
    env.mount_resource(
        "notebooks",
        "good",
        200,
        json!({"properties": {"cells": []}}),
    )
    .await;
    env.mount_resource("notebooks", "broken", 404, json!({"error": "not found"}))
        .await;

    let reports = run_export(
        &env.config(),
        &env.credential,
        &source(),
        &store(&env, TypeSelection::Notebooks),
    )
    .await
    .unwrap();

    assert_eq!(reports[0].exported, 1);
    assert_eq!(reports[0].skipped, vec!["broken".to_string()]);
    assert!(env.store.path().join("notebooks").join("good.ipynb").exists());
    assert!(!env.store.path().join("notebooks").join("broken.ipynb").exists());
}

/// EXP-E05: Exporting all types requests a source-scoped token and walks both listings
#[tokio::test]
async fn test_export_all_types() {
    let env = TestEnv::start().await;
    env.mount_listing("notebooks", 200, json!({"value": []})).await;
    env.mount_listing("sparkJobDefinitions", 200, json!({"value": [{"name": "job1"}]}))
        .await;
    env.mount_resource(
        "sparkJobDefinitions",
        "job1",
        200,
        json!({"name": "job1", "properties": {}}),
    )
    .await;

    let reports = run_export(
        &env.config(),
        &env.credential,
        &source(),
        &store(&env, TypeSelection::All),
    )
    .await
    .unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].resource_type, ResourceType::Notebooks);
    assert_eq!(reports[0].exported, 0);
    assert_eq!(reports[1].resource_type, ResourceType::SparkJobDefinitions);
    assert_eq!(reports[1].exported, 1);
    assert_eq!(
        env.credential.requested_scopes(),
        vec![synfab_auth::scopes::SYNAPSE_DEV.to_string()]
    );
}
