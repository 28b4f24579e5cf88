//! Import from the local store into a Fabric workspace

use serde_json::json;
use synfab_app::cli::{DestinationArgs, StoreArgs, TypeSelection};
use synfab_app::run_import;
use synfab_migration::MigrationError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{decoded_part, TestEnv, LAKEHOUSE_ID, WORKSPACE_ID};

fn store(env: &TestEnv, types: TypeSelection) -> StoreArgs {
    StoreArgs {
        output: env.store.path().to_path_buf(),
        types,
    }
}

fn destination(names: &[&str]) -> DestinationArgs {
    DestinationArgs {
        workspace_id: WORKSPACE_ID.to_string(),
        prefix: "mig".to_string(),
        lakehouse_id: Some(LAKEHOUSE_ID.to_string()),
        names: names.iter().map(|name| name.to_string()).collect(),
    }
}

fn python_job() -> serde_json::Value {
    json!({
        "name": "job1",
        "properties": {
            "language": "python",
            "jobProperties": {
                "file": "abfss://c@a.dfs.core.windows.net/main.py",
                "jars": [],
                "args": ["--x", "1"]
            }
        }
    })
}

/// IMP-E01: Job definition import posts a translated, prefixed item
#[tokio::test]
async fn test_job_definition_import() {
    let env = TestEnv::start().await;
    env.accept_items().await;
    env.seed("sparkJobDefinitions", "job1.json", &python_job());

    let reports = run_import(
        &env.config(),
        &env.credential,
        &store(&env, TypeSelection::SparkJobDefinitions),
        &destination(&[]),
    )
    .await
    .unwrap();
    assert_eq!(reports[0].imported, 1);

    let items = env.created_items().await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].display_name, "mig_job1");
    assert_eq!(items[0].item_type, "SparkJobDefinition");
    assert_eq!(items[0].definition.format, "SparkJobDefinitionV1");

    let payload = decoded_part(&items[0]);
    assert_eq!(payload["commandLineArguments"], "--x 1");
    assert_eq!(payload["defaultLakehouseArtifactId"], LAKEHOUSE_ID);
    assert_eq!(payload["language"], "python");
    assert_eq!(payload["mainClass"], serde_json::Value::Null);
    assert_eq!(
        env.credential.requested_scopes(),
        vec![synfab_auth::scopes::FABRIC_API.to_string()]
    );
}

/// IMP-E02: Notebook import posts the stored notebook verbatim
#[tokio::test]
async fn test_notebook_import_is_verbatim() {
    let env = TestEnv::start().await;
    env.accept_items().await;
    let notebook = json!({"cells": [{"cell_type": "code", "outputs": []}], "nbformat": 4});
    env.seed("notebooks", "nb1.ipynb", &notebook);

    run_import(
        &env.config(),
        &env.credential,
        &store(&env, TypeSelection::Notebooks),
        &destination(&[]),
    )
    .await
    .unwrap();

    let items = env.created_items().await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].display_name, "mig_nb1");
    assert_eq!(items[0].item_type, "Notebook");
    assert_eq!(items[0].description, "Imported from Synapse");
    assert_eq!(items[0].definition.parts[0].path, "notebook-content.ipynb");
    assert_eq!(decoded_part(&items[0]), notebook);
}

/// IMP-E03: Named import skips absent names and imports the rest
#[tokio::test]
async fn test_named_import_reports_missing() {
    let env = TestEnv::start().await;
    env.accept_items().await;
    env.seed("notebooks", "nb1.ipynb", &json!({"cells": []}));
    env.seed("notebooks", "nb2.ipynb", &json!({"cells": []}));

    let reports = run_import(
        &env.config(),
        &env.credential,
        &store(&env, TypeSelection::Notebooks),
        &destination(&["nb2", "ghost"]),
    )
    .await
    .unwrap();

    assert_eq!(reports[0].imported, 1);
    assert_eq!(reports[0].missing, vec!["ghost".to_string()]);

    let items = env.created_items().await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].display_name, "mig_nb2");
}

/// IMP-E04: Missing store folder fails without contacting the destination
#[tokio::test]
async fn test_missing_store_folder() {
    let env = TestEnv::start().await;
    env.accept_items().await;

    let err = run_import(
        &env.config(),
        &env.credential,
        &store(&env, TypeSelection::Notebooks),
        &destination(&[]),
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<MigrationError>(),
        Some(MigrationError::PathNotFound(_))
    ));
    assert!(env.created_items().await.is_empty());
}

/// IMP-E05: Destination rejection is fatal and carries the status
#[tokio::test]
async fn test_destination_rejection() {
    let env = TestEnv::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/v1/workspaces/{}/items", WORKSPACE_ID)))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(json!({"errorCode": "ItemDisplayNameAlreadyInUse"})),
        )
        .mount(&env.fabric)
        .await;
    env.seed("notebooks", "nb1.ipynb", &json!({"cells": []}));

    let err = run_import(
        &env.config(),
        &env.credential,
        &store(&env, TypeSelection::Notebooks),
        &destination(&[]),
    )
    .await
    .unwrap_err();

    let migration_err = err
        .downcast_ref::<MigrationError>()
        .expect("Expected a migration error");
    assert!(matches!(migration_err, MigrationError::CreateFailed { .. }));
    assert_eq!(migration_err.status(), Some(409));
    assert!(migration_err.to_string().contains("mig_nb1"));
}

/// IMP-E06: Malformed job definition aborts before anything is posted
#[tokio::test]
async fn test_malformed_job_definition() {
    let env = TestEnv::start().await;
    env.accept_items().await;
    env.seed(
        "sparkJobDefinitions",
        "job1.json",
        &json!({"properties": {"language": "python", "jobProperties": {"jars": [], "args": []}}}),
    );

    let err = run_import(
        &env.config(),
        &env.credential,
        &store(&env, TypeSelection::SparkJobDefinitions),
        &destination(&[]),
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<MigrationError>(),
        Some(MigrationError::MissingField(field)) if field == "properties.jobProperties.file"
    ));
    assert!(env.created_items().await.is_empty());
}

/// IMP-E07: Job definition import without a lakehouse is rejected up front
#[tokio::test]
async fn test_job_import_requires_lakehouse() {
    let env = TestEnv::start().await;
    env.accept_items().await;
    env.seed("sparkJobDefinitions", "job1.json", &python_job());

    let mut args = destination(&[]);
    args.lakehouse_id = None;

    let result = run_import(
        &env.config(),
        &env.credential,
        &store(&env, TypeSelection::SparkJobDefinitions),
        &args,
    )
    .await;

    assert!(result.is_err());
    assert!(env.created_items().await.is_empty());
    assert!(env.credential.requested_scopes().is_empty());
}
