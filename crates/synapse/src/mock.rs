//! Mock Synapse Source
//!
//! In-memory artifacts with programmable failures for exporter tests.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::Value;
use synfab_common::ResourceType;

use crate::{SynapseApi, SynapseError};

#[derive(Debug, Clone)]
enum MockResource {
    Body(Value),
    Failure { status: u16, body: String },
}

/// Mock source serving listings and bodies from memory.
#[derive(Debug, Clone, Default)]
pub struct MockSynapseApi {
    listings: Arc<RwLock<HashMap<ResourceType, Vec<Value>>>>,
    listing_failures: Arc<RwLock<HashMap<ResourceType, (u16, String)>>>,
    resources: Arc<RwLock<HashMap<(ResourceType, String), MockResource>>>,
}

impl MockSynapseApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an artifact that is both listed and fetchable.
    pub fn with_resource(self, resource_type: ResourceType, name: &str, body: Value) -> Self {
        self.push_listing(resource_type, serde_json::json!({ "name": name }));
        self.with_body(resource_type, name, body)
    }

    /// Make `name` fetchable without adding it to the listing.
    pub fn with_body(self, resource_type: ResourceType, name: &str, body: Value) -> Self {
        self.resources
            .write()
            .expect("resources lock poisoned")
            .insert((resource_type, name.to_string()), MockResource::Body(body));
        self
    }

    /// Add an artifact that is listed but whose fetch fails with `status`.
    pub fn with_failing_resource(
        self,
        resource_type: ResourceType,
        name: &str,
        status: u16,
        body: &str,
    ) -> Self {
        self.push_listing(resource_type, serde_json::json!({ "name": name }));
        self.resources
            .write()
            .expect("resources lock poisoned")
            .insert(
                (resource_type, name.to_string()),
                MockResource::Failure {
                    status,
                    body: body.to_string(),
                },
            );
        self
    }

    /// Add a raw listing entry without a fetchable body.
    pub fn with_listing_entry(self, resource_type: ResourceType, entry: Value) -> Self {
        self.push_listing(resource_type, entry);
        self
    }

    /// Make the listing call for `resource_type` fail.
    pub fn with_listing_failure(self, resource_type: ResourceType, status: u16, body: &str) -> Self {
        self.listing_failures
            .write()
            .expect("listing failures lock poisoned")
            .insert(resource_type, (status, body.to_string()));
        self
    }

    fn push_listing(&self, resource_type: ResourceType, entry: Value) {
        self.listings
            .write()
            .expect("listings lock poisoned")
            .entry(resource_type)
            .or_default()
            .push(entry);
    }
}

#[async_trait::async_trait]
impl SynapseApi for MockSynapseApi {
    async fn list_resources(&self, resource_type: ResourceType) -> Result<Vec<Value>, SynapseError> {
        if let Some((status, body)) = self
            .listing_failures
            .read()
            .map_err(|e| SynapseError::Request(format!("lock poisoned: {e}")))?
            .get(&resource_type)
        {
            return Err(SynapseError::Status {
                status: *status,
                body: body.clone(),
            });
        }

        Ok(self
            .listings
            .read()
            .map_err(|e| SynapseError::Request(format!("lock poisoned: {e}")))?
            .get(&resource_type)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_resource(
        &self,
        resource_type: ResourceType,
        name: &str,
    ) -> Result<Value, SynapseError> {
        let resources = self
            .resources
            .read()
            .map_err(|e| SynapseError::Request(format!("lock poisoned: {e}")))?;

        match resources.get(&(resource_type, name.to_string())) {
            Some(MockResource::Body(body)) => Ok(body.clone()),
            Some(MockResource::Failure { status, body }) => Err(SynapseError::Status {
                status: *status,
                body: body.clone(),
            }),
            None => Err(SynapseError::Status {
                status: 404,
                body: format!("{} '{}' not found", resource_type, name),
            }),
        }
    }
}
