//! In-memory inventory backend for exercising the synchronizer.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::api::Ack;
use crate::error::{ApiError, ApiResult};
use crate::models::{InventoryItem, InventoryPatch, NewInventoryItem};

use super::{Creating, Deleting, Listing, Updating};

pub(crate) fn make_item(item_id: i64, name: &str) -> InventoryItem {
    InventoryItem {
        item_id,
        item_name: name.to_string(),
        category: "Vegetables".to_string(),
        quantity: 10.0,
        unit: "kg".to_string(),
        price_per_unit: 20.0,
        expiry_date: "2025-03-10T00:00:00".to_string(),
        storage_location: "Shelf A".to_string(),
        detected_by_ai: false,
        confidence_score: 0.0,
    }
}

type ListReply = ApiResult<Vec<InventoryItem>>;

/// Backend double. Fetches answer from `table` unless a gated reply has been
/// scripted; mutations edit `table` and can be made to fail once.
#[derive(Default)]
pub(crate) struct FakeInventory {
    pub table: RefCell<Vec<InventoryItem>>,
    pub calls: RefCell<Vec<&'static str>>,
    scripted: RefCell<VecDeque<oneshot::Receiver<ListReply>>>,
    failure: RefCell<Option<ApiError>>,
    next_id: RefCell<i64>,
}

impl FakeInventory {
    pub fn with_rows(rows: Vec<InventoryItem>) -> Self {
        let next_id = rows.iter().map(|r| r.item_id).max().unwrap_or(0) + 1;
        Self {
            table: RefCell::new(rows),
            next_id: RefCell::new(next_id),
            ..Default::default()
        }
    }

    /// Queue a fetch whose reply is held until the returned sender fires.
    pub fn script(&self) -> oneshot::Sender<ListReply> {
        let (tx, rx) = oneshot::channel();
        self.scripted.borrow_mut().push_back(rx);
        tx
    }

    pub fn fail_next_mutation(&self, err: ApiError) {
        *self.failure.borrow_mut() = Some(err);
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls.borrow().iter().filter(|c| **c == call).count()
    }

    fn take_failure(&self) -> ApiResult<()> {
        match self.failure.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn not_found() -> ApiError {
        ApiError::Status { status: 404, message: "Item not found".into() }
    }
}

#[async_trait(?Send)]
impl Listing for FakeInventory {
    type Entity = InventoryItem;
    type Query = ();

    async fn list(&self, _query: &()) -> ApiResult<Vec<InventoryItem>> {
        self.calls.borrow_mut().push("list");
        let gated = self.scripted.borrow_mut().pop_front();
        match gated {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(ApiError::Transport("reply dropped".into()))),
            None => Ok(self.table.borrow().clone()),
        }
    }
}

#[async_trait(?Send)]
impl Creating for FakeInventory {
    type Draft = NewInventoryItem;

    async fn create(&self, draft: &NewInventoryItem) -> ApiResult<Ack> {
        self.calls.borrow_mut().push("create");
        self.take_failure()?;
        let id = {
            let mut next = self.next_id.borrow_mut();
            *next += 1;
            *next - 1
        };
        self.table.borrow_mut().push(draft.provisional(id));
        Ok(Ack::with_message("Item added successfully"))
    }

    fn provisional(&self, draft: &NewInventoryItem, placeholder: i64) -> Option<InventoryItem> {
        Some(draft.provisional(placeholder))
    }
}

#[async_trait(?Send)]
impl Updating for FakeInventory {
    type Patch = InventoryPatch;

    async fn update(&self, id: i64, patch: &InventoryPatch) -> ApiResult<Ack> {
        self.calls.borrow_mut().push("update");
        self.take_failure()?;
        let mut table = self.table.borrow_mut();
        let row = table.iter_mut().find(|r| r.item_id == id).ok_or_else(Self::not_found)?;
        patch.apply_to(row);
        Ok(Ack::with_message("Item updated successfully"))
    }

    fn apply_patch(&self, entity: &mut InventoryItem, patch: &InventoryPatch) {
        patch.apply_to(entity);
    }
}

#[async_trait(?Send)]
impl Deleting for FakeInventory {
    async fn delete(&self, id: i64) -> ApiResult<Ack> {
        self.calls.borrow_mut().push("delete");
        self.take_failure()?;
        let mut table = self.table.borrow_mut();
        let index = table.iter().position(|r| r.item_id == id).ok_or_else(Self::not_found)?;
        table.remove(index);
        Ok(Ack::with_message("Item deleted successfully"))
    }
}
