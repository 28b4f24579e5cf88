//! Credential configuration

use crate::CredentialError;

pub const DEFAULT_AUTHORITY_HOST: &str = "https://login.microsoftonline.com";

/// Credential configuration
#[derive(Clone)]
pub struct CredentialConfig {
    /// Credential provider (client_secret, static, mock)
    pub provider: String,
    pub tenant_id: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    /// Entra ID authority host
    pub authority_host: String,
}

impl std::fmt::Debug for CredentialConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialConfig")
            .field("provider", &self.provider)
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .field("authority_host", &self.authority_host)
            .finish()
    }
}

impl CredentialConfig {
    /// Create credential config from environment variables.
    pub fn from_env() -> Result<Self, CredentialError> {
        dotenvy::dotenv().ok();

        let provider =
            std::env::var("CREDENTIAL_PROVIDER").unwrap_or_else(|_| "client_secret".to_string());

        let authority_host = std::env::var("AZURE_AUTHORITY_HOST")
            .unwrap_or_else(|_| DEFAULT_AUTHORITY_HOST.to_string());

        Ok(Self {
            provider,
            tenant_id: non_empty_var("AZURE_TENANT_ID"),
            client_id: non_empty_var("AZURE_CLIENT_ID"),
            client_secret: non_empty_var("AZURE_CLIENT_SECRET"),
            authority_host,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
