//! Synchronizer Operations
//!
//! Async fetch and mutation flows over any `MirrorCell`. Every mirror access
//! is a short synchronous `apply`; nothing is borrowed across an await.

use crate::api::Ack;
use crate::error::ApiResult;
use crate::models::Entity;

use super::mirror::{Mirror, MirrorCell, Settled};
use super::{Creating, Deleting, Listing, Updating};

/// Fetch the collection and reconcile the mirror with the result.
pub async fn refresh<R, C>(resource: &R, cell: &C, query: &R::Query) -> Settled
where
    R: Listing,
    C: MirrorCell<R::Entity>,
{
    let Some(ticket) = cell.apply(Mirror::begin_refresh) else {
        return Settled::Detached;
    };
    let seq = ticket.seq();

    let outcome = resource.list(query).await;
    match &outcome {
        Ok(rows) => log::debug!("[sync] fetch #{} returned {} rows", seq, rows.len()),
        Err(err) => log::warn!("[sync] fetch #{} failed: {}", seq, err),
    }

    let settled = cell.apply(|mirror| mirror.settle(ticket, outcome)).unwrap_or(Settled::Detached);
    if settled != Settled::Applied {
        log::debug!("[sync] fetch #{} dropped ({:?})", seq, settled);
    }
    settled
}

/// Create a record. On success the provisional row (if any) is appended and
/// the collection re-fetched; on failure the mirror is left alone.
pub async fn create_one<R, C>(resource: &R, cell: &C, draft: &R::Draft, query: &R::Query) -> ApiResult<Ack>
where
    R: Creating,
    C: MirrorCell<R::Entity>,
{
    let ack = resource.create(draft).await.inspect_err(|err| log::warn!("[sync] create failed: {}", err))?;

    cell.apply(|mirror| {
        let placeholder = mirror.next_placeholder();
        if let Some(row) = resource.provisional(draft, placeholder) {
            mirror.push(row);
        }
    });
    refresh(resource, cell, query).await;
    Ok(ack)
}

/// Update a record, patch the local copy, then re-fetch.
pub async fn update_one<R, C>(
    resource: &R,
    cell: &C,
    id: <R::Entity as Entity>::Id,
    patch: &R::Patch,
    query: &R::Query,
) -> ApiResult<Ack>
where
    R: Updating,
    C: MirrorCell<R::Entity>,
{
    let ack = resource
        .update(id, patch)
        .await
        .inspect_err(|err| log::warn!("[sync] update of {:?} failed: {}", id, err))?;

    cell.apply(|mirror| mirror.patch(id, |row| resource.apply_patch(row, patch)));
    refresh(resource, cell, query).await;
    Ok(ack)
}

/// Delete a record and drop it from the mirror. No re-fetch follows; any
/// fetch still in flight was issued before the delete and is discarded.
pub async fn delete_one<R, C>(resource: &R, cell: &C, id: <R::Entity as Entity>::Id) -> ApiResult<Ack>
where
    R: Deleting,
    C: MirrorCell<R::Entity>,
{
    let ack = resource
        .delete(id)
        .await
        .inspect_err(|err| log::warn!("[sync] delete of {:?} failed: {}", id, err))?;

    cell.apply(|mirror| {
        mirror.detach();
        mirror.remove(id)
    });
    Ok(ack)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::ApiError;
    use crate::models::{InventoryItem, InventoryPatch, NewInventoryItem};
    use crate::sync::testing::{make_item, FakeInventory};

    fn ids(cell: &RefCell<Mirror<InventoryItem>>) -> Vec<i64> {
        cell.borrow().items().iter().map(|i| i.item_id).collect()
    }

    fn loaded(rows: Vec<InventoryItem>) -> RefCell<Mirror<InventoryItem>> {
        let mut mirror = Mirror::new();
        let ticket = mirror.begin_refresh();
        mirror.settle(ticket, Ok(rows));
        RefCell::new(mirror)
    }

    fn new_item(name: &str) -> NewInventoryItem {
        NewInventoryItem {
            item_name: name.into(),
            category: "Spices".into(),
            quantity: 2.0,
            unit: "kg".into(),
            price_per_unit: 150.0,
            expiry_date: "2025-12-31".into(),
            storage_location: "Rack 2".into(),
            detected_by_ai: false,
            confidence_score: 0.0,
        }
    }

    #[tokio::test]
    async fn test_refresh_replaces_mirror() {
        let backend = FakeInventory::with_rows(vec![make_item(1, "Potato"), make_item(2, "Onion")]);
        let cell = loaded(vec![make_item(9, "Gone")]);

        assert_eq!(refresh(&backend, &cell, &()).await, Settled::Applied);
        assert_eq!(ids(&cell), vec![1, 2]);
        assert!(!cell.borrow().is_loading());
        assert_eq!(cell.borrow().error(), None);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_items() {
        let backend = FakeInventory::with_rows(vec![]);
        let cell = loaded(vec![make_item(1, "Potato")]);

        let reply = backend.script();
        reply.send(Err(ApiError::Transport("connection refused".into()))).unwrap();
        refresh(&backend, &cell, &()).await;

        assert_eq!(ids(&cell), vec![1]);
        assert!(!cell.borrow().is_loading());
        assert_eq!(cell.borrow().error(), Some("Network error: connection refused"));
    }

    #[tokio::test]
    async fn test_loading_while_fetch_in_flight() {
        let backend = FakeInventory::with_rows(vec![]);
        let cell = RefCell::new(Mirror::new());
        let reply = backend.script();

        let driver = async {
            tokio::task::yield_now().await;
            assert!(cell.borrow().is_loading());
            reply.send(Ok(vec![make_item(5, "Rice")])).unwrap();
        };
        let (settled, ()) = futures::join!(refresh(&backend, &cell, &()), driver);

        assert_eq!(settled, Settled::Applied);
        assert!(!cell.borrow().is_loading());
    }

    #[tokio::test]
    async fn test_last_issued_refresh_wins() {
        let backend = FakeInventory::with_rows(vec![]);
        let cell = RefCell::new(Mirror::new());
        let first = backend.script();
        let second = backend.script();

        // the later request answers first, the earlier one straggles in after
        let driver = async {
            second.send(Ok(vec![make_item(2, "Second")])).unwrap();
            tokio::task::yield_now().await;
            first.send(Ok(vec![make_item(1, "First")])).unwrap();
        };
        let (a, b, ()) = futures::join!(refresh(&backend, &cell, &()), refresh(&backend, &cell, &()), driver);

        assert_eq!(a, Settled::Stale);
        assert_eq!(b, Settled::Applied);
        assert_eq!(ids(&cell), vec![2]);
        assert!(!cell.borrow().is_loading());
    }

    #[tokio::test]
    async fn test_create_shows_provisional_then_reconciles() {
        let backend = FakeInventory::with_rows(vec![make_item(1, "Potato")]);
        let cell = loaded(vec![make_item(1, "Potato")]);
        let reply = backend.script();
        let cumin = new_item("Cumin");

        let driver = async {
            tokio::task::yield_now().await;
            assert_eq!(ids(&cell), vec![1, -1]);
            let rows = backend.table.borrow().clone();
            reply.send(Ok(rows)).unwrap();
        };
        let (ack, ()) = futures::join!(create_one(&backend, &cell, &cumin, &()), driver);

        assert_eq!(ack.unwrap().message.as_deref(), Some("Item added successfully"));
        assert_eq!(ids(&cell), vec![1, 2]);
        assert_eq!(cell.borrow().items()[1].item_name, "Cumin");
    }

    #[tokio::test]
    async fn test_failed_create_leaves_mirror() {
        let backend = FakeInventory::with_rows(vec![make_item(1, "Potato")]);
        let cell = loaded(vec![make_item(1, "Potato")]);
        backend.fail_next_mutation(ApiError::Status { status: 500, message: "Internal Server Error".into() });

        let result = create_one(&backend, &cell, &new_item("Cumin"), &()).await;

        assert_eq!(result.unwrap_err().to_string(), "Internal Server Error");
        assert_eq!(ids(&cell), vec![1]);
        assert_eq!(cell.borrow().error(), None);
        assert_eq!(backend.count("list"), 0);
    }

    #[tokio::test]
    async fn test_update_patches_and_refetches() {
        let backend = FakeInventory::with_rows(vec![make_item(7, "Potato")]);
        let cell = loaded(vec![make_item(7, "Potato")]);
        let patch = InventoryPatch {
            item_name: "Sweet Potato".into(),
            category: "Vegetables".into(),
            quantity: 4,
            unit: "kg".into(),
            price_per_unit: 35.0,
            expiry_date: "2025-04-01".into(),
            storage_location: "Cold Room".into(),
        };

        update_one(&backend, &cell, 7, &patch, &()).await.unwrap();

        let mirror = cell.borrow();
        assert_eq!(mirror.items()[0].item_name, "Sweet Potato");
        assert_eq!(mirror.items()[0].quantity, 4.0);
        assert_eq!(backend.count("list"), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one() {
        let rows = vec![make_item(41, "Salt"), make_item(42, "Pepper"), make_item(43, "Chilli")];
        let backend = FakeInventory::with_rows(rows.clone());
        let cell = loaded(rows);

        delete_one(&backend, &cell, 42).await.unwrap();

        assert_eq!(ids(&cell), vec![41, 43]);
        assert_eq!(cell.borrow().error(), None);
        assert_eq!(backend.count("list"), 0);
    }

    #[tokio::test]
    async fn test_delete_twice_is_harmless() {
        let rows = vec![make_item(41, "Salt"), make_item(42, "Pepper")];
        let backend = FakeInventory::with_rows(rows.clone());
        let cell = loaded(rows);

        delete_one(&backend, &cell, 42).await.unwrap();
        let again = delete_one(&backend, &cell, 42).await;

        assert_eq!(again.unwrap_err().status(), Some(404));
        assert_eq!(ids(&cell), vec![41]);
        assert_eq!(cell.borrow().error(), None);
    }

    #[tokio::test]
    async fn test_delete_discards_fetch_in_flight() {
        let rows = vec![make_item(41, "Salt"), make_item(42, "Pepper")];
        let backend = FakeInventory::with_rows(rows.clone());
        let cell = loaded(rows.clone());
        let reply = backend.script();

        // the fetch was issued before the delete and answers with the old table
        let driver = async {
            tokio::task::yield_now().await;
            delete_one(&backend, &cell, 42).await.unwrap();
            assert_eq!(ids(&cell), vec![41]);
            reply.send(Ok(rows)).unwrap();
        };
        let (settled, ()) = futures::join!(refresh(&backend, &cell, &()), driver);

        assert_eq!(settled, Settled::Stale);
        assert_eq!(ids(&cell), vec![41]);
        assert!(!cell.borrow().is_loading());
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_row() {
        let rows = vec![make_item(42, "Pepper")];
        let backend = FakeInventory::with_rows(rows.clone());
        let cell = loaded(rows);
        backend.fail_next_mutation(ApiError::Timeout(20_000));

        assert!(delete_one(&backend, &cell, 42).await.is_err());
        assert_eq!(ids(&cell), vec![42]);
    }
}
