//! Reactive Synchronizer Handle
//!
//! Owned by a mounted view. Reads are tracked signal reads; operations spawn
//! local tasks that are aborted, and whose late results are ignored, once the
//! owning view is torn down.

use std::future::Future;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use futures::future::{abortable, AbortHandle};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::Ack;
use crate::error::ApiResult;
use crate::models::Entity;

use super::mirror::Mirror;
use super::{ops, Creating, Deleting, Listing, Updating};

type Tasks = Arc<Mutex<Vec<AbortHandle>>>;

pub struct ViewSync<R: Listing + 'static> {
    mirror: RwSignal<Mirror<R::Entity>>,
    resource: StoredValue<Rc<R>, LocalStorage>,
    query: StoredValue<R::Query, LocalStorage>,
    tasks: StoredValue<Tasks>,
}

impl<R: Listing + 'static> Clone for ViewSync<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Listing + 'static> Copy for ViewSync<R> {}

impl<R: Listing + 'static> ViewSync<R> {
    /// Create a synchronizer bound to the current reactive owner without
    /// fetching anything yet.
    pub fn new(resource: R, query: R::Query) -> Self {
        let mirror = RwSignal::new(Mirror::new());
        let tasks: Tasks = Arc::default();

        let pending = Arc::clone(&tasks);
        on_cleanup(move || {
            if let Ok(mut handles) = pending.lock() {
                for handle in handles.drain(..) {
                    handle.abort();
                }
            }
            mirror.try_update(Mirror::detach);
        });

        Self {
            mirror,
            resource: StoredValue::new_local(Rc::new(resource)),
            query: StoredValue::new_local(query),
            tasks: StoredValue::new(tasks),
        }
    }

    /// Create a synchronizer and issue its initial fetch.
    pub fn mount(resource: R, query: R::Query) -> Self {
        let sync = Self::new(resource, query);
        sync.refresh();
        sync
    }

    pub fn items(&self) -> Vec<R::Entity> {
        self.mirror.with(|m| m.items().to_vec())
    }

    pub fn is_loading(&self) -> bool {
        self.mirror.with(|m| m.is_loading())
    }

    pub fn error(&self) -> Option<String> {
        self.mirror.with(|m| m.error().map(str::to_string))
    }

    pub fn is_empty(&self) -> bool {
        self.mirror.with(|m| m.items().is_empty())
    }

    /// Re-fetch with the current query.
    pub fn refresh(&self) {
        let mirror = self.mirror;
        let resource = self.resource.get_value();
        let query = self.query.get_value();
        self.spawn(async move {
            ops::refresh(&*resource, &mirror, &query).await;
        });
    }

    /// Replace the query and re-fetch.
    pub fn refresh_with(&self, query: R::Query) {
        self.query.set_value(query);
        self.refresh();
    }

    /// Drop all rows and ignore fetches still in flight.
    pub fn clear(&self) {
        self.mirror.update(Mirror::clear);
    }

    /// Replace the query and drop all rows without fetching.
    pub fn reset(&self, query: R::Query) {
        self.query.set_value(query);
        self.clear();
    }

    /// Run a task that is aborted when the owning view is torn down.
    pub fn spawn(&self, task: impl Future<Output = ()> + 'static) {
        let (task, handle) = abortable(task);
        self.tasks.with_value(|tasks| {
            if let Ok(mut handles) = tasks.lock() {
                handles.retain(|h| !h.is_aborted());
                handles.push(handle);
            }
        });
        spawn_local(async move {
            let _ = task.await;
        });
    }
}

impl<R: Creating + 'static> ViewSync<R> {
    /// Create a record; `on_done` runs unless the view was torn down first.
    pub fn create(&self, draft: R::Draft, on_done: impl FnOnce(ApiResult<Ack>) + 'static) {
        let mirror = self.mirror;
        let resource = self.resource.get_value();
        let query = self.query.get_value();
        self.spawn(async move {
            on_done(ops::create_one(&*resource, &mirror, &draft, &query).await);
        });
    }
}

impl<R: Updating + 'static> ViewSync<R> {
    pub fn update(
        &self,
        id: <R::Entity as Entity>::Id,
        patch: R::Patch,
        on_done: impl FnOnce(ApiResult<Ack>) + 'static,
    ) {
        let mirror = self.mirror;
        let resource = self.resource.get_value();
        let query = self.query.get_value();
        self.spawn(async move {
            on_done(ops::update_one(&*resource, &mirror, id, &patch, &query).await);
        });
    }
}

impl<R: Deleting + 'static> ViewSync<R> {
    pub fn delete(&self, id: <R::Entity as Entity>::Id, on_done: impl FnOnce(ApiResult<Ack>) + 'static) {
        let mirror = self.mirror;
        let resource = self.resource.get_value();
        self.spawn(async move {
            on_done(ops::delete_one(&*resource, &mirror, id).await);
        });
    }
}
