//! In-Memory Item Store
//!
//! The backing store's state: a flat list of items in insertion order.
//! Thread-safe via Tokio's async RwLock; listing shares the lock, create and
//! toggle take it exclusively. Nothing is persisted.

use tokio::sync::RwLock;

use crate::model::{Item, NewItem};

/// Item collection shared by all request handlers
#[derive(Debug, Default)]
pub struct ItemStore {
    items: RwLock<Vec<Item>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every item, in insertion order
    pub async fn list(&self) -> Vec<Item> {
        self.items.read().await.clone()
    }

    /// Append a new item with a fresh id and `completed = false`
    pub async fn add(&self, new_item: NewItem) -> Item {
        let item = Item {
            id: uuid::Uuid::new_v4().to_string(),
            title: new_item.title,
            description: new_item.description,
            completed: false,
        };

        self.items.write().await.push(item.clone());
        item
    }

    /// Flip the completion flag of `id`, returning the updated item
    pub async fn toggle(&self, id: &str) -> Option<Item> {
        let mut items = self.items.write().await;
        let item = items.iter_mut().find(|item| item.id == id)?;
        item.completed = !item.completed;
        Some(item.clone())
    }

    /// Number of stored items
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}
