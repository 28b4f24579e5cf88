//! Credential errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("Credential configuration error: {0}")]
    Configuration(String),

    #[error("Token request error: {0}")]
    Request(String),

    #[error("Token response error: {0}")]
    Response(String),

    #[error("No token available for scope: {0}")]
    UnsupportedScope(String),
}
