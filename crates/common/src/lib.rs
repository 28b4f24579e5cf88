//! Shared types and configuration for synfab
//!
//! This crate provides functionality used across the migration crates:
//! - Resource type tags shared by the source API, the local store and the importer
//! - Configuration management following 12-factor principles

pub mod config;
pub mod resource;

pub use config::MigrationConfig;
pub use resource::{ParseResourceTypeError, ResourceType};
