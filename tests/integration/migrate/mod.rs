//! Export then import in one run

use serde_json::json;
use synfab_app::cli::{Commands, DestinationArgs, SourceArgs, StoreArgs, TypeSelection};

use crate::common::{decoded_part, TestEnv, LAKEHOUSE_ID, WORKSPACE_ID};

fn migrate(env: &TestEnv, types: TypeSelection) -> Commands {
    Commands::Migrate {
        source: SourceArgs {
            workspace: "contoso".to_string(),
        },
        store: StoreArgs {
            output: env.store.path().to_path_buf(),
            types,
        },
        destination: DestinationArgs {
            workspace_id: WORKSPACE_ID.to_string(),
            prefix: "mig".to_string(),
            lakehouse_id: Some(LAKEHOUSE_ID.to_string()),
            names: Vec::new(),
        },
    }
}

/// MIG-E01: A notebook travels from source to destination with outputs cleared
#[tokio::test]
async fn test_migrate_notebook_round_trip() {
    let env = TestEnv::start().await;
    env.mount_listing("notebooks", 200, json!({"value": [{"name": "nb1"}]}))
        .await;
    env.mount_resource(
        "notebooks",
        "nb1",
        200,
        json!({"properties": {"cells": [{"source": ["print(1)"], "outputs": ["1"]}]}}),
    )
    .await;
    env.accept_items().await;

    synfab_app::run(migrate(&env, TypeSelection::Notebooks), &env.config(), &env.credential)
        .await
        .unwrap();

    let items = env.created_items().await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].display_name, "mig_nb1");
    assert_eq!(
        decoded_part(&items[0]),
        json!({"cells": [{"source": ["print(1)"], "outputs": []}]})
    );
}

/// MIG-E02: A type with nothing exported is skipped on import
#[tokio::test]
async fn test_migrate_skips_empty_types() {
    let env = TestEnv::start().await;
    env.mount_listing("notebooks", 200, json!({"value": []})).await;
    env.mount_listing("sparkJobDefinitions", 200, json!({"value": [{"name": "job1"}]}))
        .await;
    env.mount_resource(
        "sparkJobDefinitions",
        "job1",
        200,
        json!({
            "name": "job1",
            "properties": {
                "language": "scala",
                "jobProperties": {
                    "file": "abfss://c@a.dfs.core.windows.net/app.jar",
                    "className": "com.contoso.Main",
                    "jars": ["abfss://c@a.dfs.core.windows.net/dep.jar"],
                    "args": []
                }
            }
        }),
    )
    .await;
    env.accept_items().await;

    synfab_app::run(migrate(&env, TypeSelection::All), &env.config(), &env.credential)
        .await
        .unwrap();

    let items = env.created_items().await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].display_name, "mig_job1");

    let payload = decoded_part(&items[0]);
    assert_eq!(payload["language"], "Scala/Java");
    assert_eq!(payload["mainClass"], "com.contoso.Main");
    assert_eq!(
        payload["additionalLibraryUris"],
        "abfss://c@a.dfs.core.windows.net/dep.jar"
    );
}

/// MIG-E03: Separate export and import runs with all types skip the empty type
#[tokio::test]
async fn test_export_then_import_all_types() {
    let env = TestEnv::start().await;
    env.mount_listing("notebooks", 200, json!({"value": []})).await;
    env.mount_listing("sparkJobDefinitions", 200, json!({"value": [{"name": "job1"}]}))
        .await;
    env.mount_resource(
        "sparkJobDefinitions",
        "job1",
        200,
        json!({
            "name": "job1",
            "properties": {
                "language": "python",
                "jobProperties": {"file": "main.py", "jars": [], "args": ["--x", "1"]}
            }
        }),
    )
    .await;
    env.accept_items().await;

    let Commands::Migrate {
        source,
        store,
        destination,
    } = migrate(&env, TypeSelection::All)
    else {
        panic!("Expected migrate command");
    };

    synfab_app::run(
        Commands::Export {
            source,
            store: store.clone(),
        },
        &env.config(),
        &env.credential,
    )
    .await
    .unwrap();
    assert!(!env.store.path().join("notebooks").exists());

    let reports = synfab_app::run_import(&env.config(), &env.credential, &store, &destination)
        .await
        .unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].imported, 1);

    let items = env.created_items().await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].display_name, "mig_job1");
    assert_eq!(decoded_part(&items[0])["commandLineArguments"], "--x 1");
}
