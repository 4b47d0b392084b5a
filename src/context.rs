//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::{Ack, ApiClient};
use crate::error::ApiResult;
use crate::store::{store_notify, Notice, ShellStore};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Shared HTTP client for every view's resources
    client: StoredValue<ApiClient, LocalStorage>,
    store: ShellStore,
}

impl AppContext {
    pub fn new(client: ApiClient, store: ShellStore) -> Self {
        Self {
            client: StoredValue::new_local(client),
            store,
        }
    }

    pub fn client(&self) -> ApiClient {
        self.client.get_value()
    }

    pub fn notify(&self, notice: Notice) {
        store_notify(&self.store, notice);
    }

    /// Show the outcome of a mutation: the backend's message on success,
    /// `fallback` when it sent none, the error text on failure.
    pub fn report(&self, result: &ApiResult<Ack>, fallback: &str) {
        let notice = match result {
            Ok(ack) => Notice::success(ack.message.clone().unwrap_or_else(|| fallback.to_string())),
            Err(err) => Notice::failure(err.to_string()),
        };
        self.notify(notice);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
