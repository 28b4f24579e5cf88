// synfab - Synapse to Fabric artifact migration

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use synfab_app::cli::Cli;
use synfab_auth::{CredentialConfig, CredentialFactory};
use synfab_common::MigrationConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let config = MigrationConfig::from_env().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    let credential_config = CredentialConfig::from_env()?;
    info!(provider = %credential_config.provider, "Configuration loaded successfully");

    let credential = CredentialFactory::create(credential_config).map_err(|e| {
        error!("Failed to create credential: {}", e);
        anyhow::anyhow!(e)
    })?;

    synfab_app::run(cli.command, &config, credential.as_ref())
        .await
        .map_err(|e| {
            error!("Migration failed: {:#}", e);
            e
        })?;

    info!("Migration run complete");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("synfab=info"));

    if std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .init();
    }
}
