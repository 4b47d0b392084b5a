//! Inventory Endpoints

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{InventoryItem, InventoryPatch, NewInventoryItem};
use crate::sync::{Creating, Deleting, Listing, Updating};

use super::{Ack, ApiClient};

const COLLECTION: &str = "inventory/";

fn item_path(id: i64) -> String {
    format!("inventory/{}", id)
}

/// `/inventory/`: list, create, update, delete
#[derive(Clone)]
pub struct InventoryApi {
    client: ApiClient,
}

impl InventoryApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl Listing for InventoryApi {
    type Entity = InventoryItem;
    type Query = ();

    async fn list(&self, _query: &()) -> ApiResult<Vec<InventoryItem>> {
        self.client.get_json(COLLECTION).await
    }
}

#[async_trait(?Send)]
impl Creating for InventoryApi {
    type Draft = NewInventoryItem;

    async fn create(&self, draft: &NewInventoryItem) -> ApiResult<Ack> {
        self.client.post_ack(COLLECTION, draft).await
    }

    fn provisional(&self, draft: &NewInventoryItem, placeholder: i64) -> Option<InventoryItem> {
        Some(draft.provisional(placeholder))
    }
}

#[async_trait(?Send)]
impl Updating for InventoryApi {
    type Patch = InventoryPatch;

    async fn update(&self, id: i64, patch: &InventoryPatch) -> ApiResult<Ack> {
        self.client.put_ack(&item_path(id), patch).await
    }

    fn apply_patch(&self, entity: &mut InventoryItem, patch: &InventoryPatch) {
        patch.apply_to(entity);
    }
}

#[async_trait(?Send)]
impl Deleting for InventoryApi {
    async fn delete(&self, id: i64) -> ApiResult<Ack> {
        self.client.delete_ack(&item_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_path() {
        assert_eq!(item_path(42), "inventory/42");
    }
}
