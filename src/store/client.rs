//! Backing Store HTTP Client
//!
//! Speaks the JSON-over-HTTP contract of the backing store. Every request
//! goes to the configured base URL itself; the method selects the operation.
//! No retries, no backoff.

use async_trait::async_trait;
use reqwest::{Client, Response};

use super::{StoreError, StoreResult, TodoStore};
use crate::config::ClientConfig;
use crate::model::{Item, NewItem, ToggleRequest};

/// Backing store reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: Client,
    base_url: String,
}

impl HttpStore {
    /// Create a store client from the client configuration
    pub fn new(config: &ClientConfig) -> StoreResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.clone(),
        })
    }

    /// Create a store client for `base_url` with no timeout
    pub fn with_base_url(base_url: impl Into<String>) -> StoreResult<Self> {
        Self::new(&ClientConfig::new(base_url))
    }

    /// Address every request is sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turn a non-success response into [`StoreError::Status`]
    async fn check(response: Response) -> StoreResult<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        Err(StoreError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl TodoStore for HttpStore {
    async fn fetch_all(&self) -> StoreResult<Vec<Item>> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(StoreError::from_transport)?;

        let response = Self::check(response).await?;
        let items: Vec<Item> = response.json().await.map_err(StoreError::from_transport)?;

        tracing::debug!(count = items.len(), "Fetched items");
        Ok(items)
    }

    async fn create(&self, item: &NewItem) -> StoreResult<()> {
        let response = self
            .client
            .post(&self.base_url)
            .json(item)
            .send()
            .await
            .map_err(StoreError::from_transport)?;

        Self::check(response).await?;
        tracing::debug!(title = %item.title, "Created item");
        Ok(())
    }

    async fn toggle(&self, id: &str) -> StoreResult<()> {
        let response = self
            .client
            .put(&self.base_url)
            .json(&ToggleRequest::new(id))
            .send()
            .await
            .map_err(StoreError::from_transport)?;

        Self::check(response).await?;
        tracing::debug!(item_id = %id, "Toggled item");
        Ok(())
    }
}
