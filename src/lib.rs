//! # Todo List
//!
//! A terminal to-do client that keeps its list in sync with a REST backing
//! store, plus an in-memory implementation of that store.
//!
//! ## Synchronization contract
//!
//! The client never patches its list. Every successful create or toggle is
//! followed by a full fetch that replaces the local copy, so what is rendered
//! is always exactly the store's latest snapshot.
//!
//! ## Modules
//!
//! - [`model`]: items, request bodies and the form draft
//! - [`store`]: the [`TodoStore`] seam and its HTTP implementation
//! - [`container`]: the list container (load, create, toggle, input)
//! - [`view`]: item view and page rendering
//! - [`server`]: in-memory backing store service with Axum
//! - [`config`], [`logging`]: ambient setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use todolist::{render_page, DraftField, HttpStore, ListContainer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = HttpStore::with_base_url("http://localhost:8080/")?;
//!     let mut container = ListContainer::new(store);
//!     container.mount().await;
//!
//!     container.input_change(DraftField::Title, "Buy milk");
//!     container.input_change(DraftField::Description, "2 litres");
//!     container.submit().await;
//!
//!     println!("{}", render_page(&container));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod container;
pub mod logging;
pub mod model;
pub mod server;
pub mod store;
pub mod view;

pub use config::{ClientConfig, Config, ConfigError, LoggingConfig, ServerConfig};

pub use container::{FormPhase, Intent, ListContainer, SubmitOutcome};

pub use model::{Draft, DraftField, Item, NewItem, ToggleRequest};

pub use store::{HttpStore, StoreError, StoreResult, TodoStore};

pub use view::{render_page, ItemView};

pub use server::{build_router, serve, ApiError, AppState, ItemStore};
