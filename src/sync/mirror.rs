//! Local Mirror
//!
//! The in-memory copy of a remote collection plus its loading and error
//! flags. Fetches are tagged with a sequence number; only the most recently
//! issued one may write the mirror.

use std::cell::RefCell;

use leptos::prelude::*;

use crate::error::ApiResult;
use crate::models::Entity;

/// Proof that a fetch was issued, carrying its sequence number
#[derive(Debug, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

/// What happened to a fetch result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// Written to the mirror
    Applied,
    /// Dropped because a newer fetch was issued (or the view was torn down)
    Stale,
    /// The mirror no longer exists
    Detached,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mirror<T> {
    items: Vec<T>,
    is_loading: bool,
    error: Option<String>,
    latest: u64,
    next_placeholder: i64,
}

impl<T> Default for Mirror<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            is_loading: false,
            error: None,
            latest: 0,
            next_placeholder: -1,
        }
    }
}

impl<T> Mirror<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Issue a new fetch. Any fetch issued earlier becomes stale.
    pub fn begin_refresh(&mut self) -> Ticket {
        self.latest += 1;
        self.is_loading = true;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        ticket.0 == self.latest
    }

    /// Record a fetch result.
    ///
    /// Only the latest ticket is applied: success replaces `items` wholesale
    /// and clears `error`; failure sets `error` and keeps `items`. Either way
    /// loading ends.
    pub fn settle(&mut self, ticket: Ticket, outcome: ApiResult<Vec<T>>) -> Settled {
        if !self.is_current(&ticket) {
            return Settled::Stale;
        }
        self.is_loading = false;
        match outcome {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
        Settled::Applied
    }

    /// Invalidate every in-flight fetch and stop loading.
    pub fn detach(&mut self) {
        self.latest += 1;
        self.is_loading = false;
    }

    /// Drop all rows and any error, invalidating in-flight fetches.
    pub fn clear(&mut self) {
        self.detach();
        self.items.clear();
        self.error = None;
    }

    pub fn next_placeholder(&mut self) -> i64 {
        let id = self.next_placeholder;
        self.next_placeholder -= 1;
        id
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }
}

impl<T: Entity> Mirror<T> {
    /// Edit the row with `id` in place. Returns false if there is none.
    pub fn patch(&mut self, id: T::Id, edit: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                edit(item);
                true
            }
            None => false,
        }
    }

    /// Remove the row with `id`; absent ids leave the mirror untouched.
    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }
}

/// Somewhere a mirror lives: a reactive signal in the browser, a `RefCell` in tests
pub trait MirrorCell<T> {
    /// Run `f` against the mirror. `None` when the mirror has been disposed.
    fn apply<O>(&self, f: impl FnOnce(&mut Mirror<T>) -> O) -> Option<O>;
}

impl<T> MirrorCell<T> for RefCell<Mirror<T>> {
    fn apply<O>(&self, f: impl FnOnce(&mut Mirror<T>) -> O) -> Option<O> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T: Send + Sync + 'static> MirrorCell<T> for RwSignal<Mirror<T>> {
    fn apply<O>(&self, f: impl FnOnce(&mut Mirror<T>) -> O) -> Option<O> {
        self.try_update(f)
    }
}
