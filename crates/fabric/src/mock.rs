//! Mock Fabric Destination
//!
//! Records created envelopes for test assertions and can be told to reject
//! specific display names.
//! Thread-safe via `Arc<Mutex<>>`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::{CreatedItem, FabricApi, FabricError, ItemEnvelope};

/// Envelope received by the mock, with its target workspace
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedItem {
    pub workspace_id: String,
    pub envelope: ItemEnvelope,
}

#[derive(Debug, Clone, Default)]
pub struct MockFabricApi {
    items: Arc<Mutex<Vec<RecordedItem>>>,
    rejections: Arc<Mutex<HashMap<String, (u16, String)>>>,
}

impl MockFabricApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject creation of `display_name` with `status` and `body`.
    pub fn reject(&self, display_name: &str, status: u16, body: &str) {
        self.rejections
            .lock()
            .expect("rejections lock poisoned, prior test panicked")
            .insert(display_name.to_string(), (status, body.to_string()));
    }

    /// Return all created items, in creation order.
    pub fn recorded_items(&self) -> Vec<RecordedItem> {
        self.items
            .lock()
            .expect("items lock poisoned, prior test panicked")
            .clone()
    }
}

#[async_trait::async_trait]
impl FabricApi for MockFabricApi {
    async fn create_item(
        &self,
        workspace_id: &str,
        envelope: &ItemEnvelope,
    ) -> Result<CreatedItem, FabricError> {
        tracing::debug!(display_name = %envelope.display_name, "Mock Fabric: recording item");

        if let Some((status, body)) = self
            .rejections
            .lock()
            .map_err(|e| FabricError::Request(format!("rejections lock poisoned: {e}")))?
            .get(&envelope.display_name)
        {
            return Err(FabricError::Status {
                status: *status,
                body: body.clone(),
            });
        }

        let mut items = self
            .items
            .lock()
            .map_err(|e| FabricError::Request(format!("items lock poisoned: {e}")))?;
        items.push(RecordedItem {
            workspace_id: workspace_id.to_string(),
            envelope: envelope.clone(),
        });

        Ok(CreatedItem {
            status: 201,
            id: Some(format!("mock-item-{}", items.len())),
        })
    }
}
