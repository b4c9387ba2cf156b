//! Backing Store Access
//!
//! The client's only collaborator is a backing store that owns every item.
//! [`TodoStore`] is the seam the list container talks through; [`HttpStore`]
//! is the implementation that speaks the JSON-over-HTTP contract:
//!
//! - `GET /` - full item collection
//! - `POST /` with `{title, description}` - create an item
//! - `PUT /` with `{id}` - flip an item's completion flag

mod client;
mod error;

pub use client::HttpStore;
pub use error::{StoreError, StoreResult};

use async_trait::async_trait;

use crate::model::{Item, NewItem};

/// Operations the backing store offers to the client
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Read the whole item collection
    async fn fetch_all(&self) -> StoreResult<Vec<Item>>;

    /// Ask the store to create an item from the draft payload
    async fn create(&self, item: &NewItem) -> StoreResult<()>;

    /// Ask the store to flip the completion flag of `id`
    async fn toggle(&self, id: &str) -> StoreResult<()>;
}

