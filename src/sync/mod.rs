//! View State Synchronization
//!
//! Each view mirrors one remote collection locally. The resource traits are
//! the seam between a view and its endpoint family; `Mirror` holds the local
//! copy; `ops` drives fetches and mutations against it; `ViewSync` is the
//! reactive handle a mounted view owns.

mod mirror;
mod ops;
mod view_sync;
#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;

use crate::api::Ack;
use crate::error::ApiResult;
use crate::models::Entity;

pub use mirror::{Mirror, MirrorCell, Settled, Ticket};
pub use ops::{create_one, delete_one, refresh, update_one};
pub use view_sync::ViewSync;

/// A remote collection that can be fetched
#[async_trait(?Send)]
pub trait Listing {
    type Entity: Clone + Send + Sync + 'static;
    /// Parameters of a fetch (`()` for plain collections)
    type Query: Clone + 'static;

    async fn list(&self, query: &Self::Query) -> ApiResult<Vec<Self::Entity>>;
}

/// A collection that accepts new records
#[async_trait(?Send)]
pub trait Creating: Listing<Entity: Entity> {
    type Draft: Clone + 'static;

    async fn create(&self, draft: &Self::Draft) -> ApiResult<Ack>;

    /// Row to show until the next fetch brings the stored record.
    /// `placeholder` is a negative id that never collides with backend ids.
    fn provisional(&self, _draft: &Self::Draft, _placeholder: i64) -> Option<Self::Entity> {
        None
    }
}

/// A collection whose records can be edited
#[async_trait(?Send)]
pub trait Updating: Listing<Entity: Entity> {
    type Patch: Clone + 'static;

    async fn update(&self, id: <Self::Entity as Entity>::Id, patch: &Self::Patch) -> ApiResult<Ack>;

    /// Apply an acknowledged patch to the local copy.
    fn apply_patch(&self, entity: &mut Self::Entity, patch: &Self::Patch);
}

/// A collection whose records can be removed
#[async_trait(?Send)]
pub trait Deleting: Listing<Entity: Entity> {
    async fn delete(&self, id: <Self::Entity as Entity>::Id) -> ApiResult<Ack>;
}
