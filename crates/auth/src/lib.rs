//! Synfab credential providers
//!
//! Provides bearer token acquisition with support for:
//! - Microsoft Entra ID client-credentials flow for production
//! - Pre-acquired static tokens for CI and ad-hoc runs
//! - Mock credential for testing and development

pub mod client_secret;
pub mod config;
pub mod error;
pub mod mock;
pub mod static_token;

pub use client_secret::ClientSecretCredential;
pub use config::CredentialConfig;
pub use error::CredentialError;
pub use mock::MockCredential;
pub use static_token::StaticTokenCredential;

/// Token scopes understood by the migration
pub mod scopes {
    /// Synapse development endpoint (source API)
    pub const SYNAPSE_DEV: &str = "https://dev.azuresynapse.net/";

    /// Power BI / Fabric REST API (destination API)
    pub const FABRIC_API: &str = "https://analysis.windows.net/powerbi/api";
}

/// Capability to obtain a bearer token for a scope.
#[async_trait::async_trait]
pub trait TokenCredential: Send + Sync {
    /// Obtain a bearer token valid for `scope`.
    async fn get_token(&self, scope: &str) -> Result<String, CredentialError>;
}

/// Factory for creating TokenCredential implementations
pub struct CredentialFactory;

impl CredentialFactory {
    /// Create a TokenCredential based on configuration.
    pub fn create(config: CredentialConfig) -> Result<Box<dyn TokenCredential>, CredentialError> {
        match config.provider.as_str() {
            "client_secret" => {
                tracing::info!("Creating client secret credential");
                Ok(Box::new(ClientSecretCredential::new(config)?))
            }
            "static" => {
                tracing::info!("Creating static token credential");
                Ok(Box::new(StaticTokenCredential::from_env()?))
            }
            "mock" => {
                tracing::info!("Creating mock credential");
                Ok(Box::new(MockCredential::new()))
            }
            provider => Err(CredentialError::Configuration(format!(
                "Unknown credential provider: {}. Supported providers: client_secret, static, mock",
                provider
            ))),
        }
    }
}
