//! # Folio Store - Persisted Key-Value Storage
//!
//! `folio-store` is the persistence layer of the folio portfolio engine. It
//! models the browser's `localStorage`: a flat map of string keys to string
//! values that survives page loads and is always synchronously available.
//!
//! ## Core Concepts
//!
//! - [`KeyValueStore`]: The storage trait every backend implements
//! - [`MemoryStore`]: In-memory backend, used by tests and ephemeral sessions
//! - [`FileStore`]: JSON-file backend that writes through on every mutation
//! - [`SharedStore`]: Cloneable single-threaded handle so several components
//!   can use one store
//! - [`json`]: Helpers for JSON records, capped logs and counters stored as strings
//!
//! ## Quick Start
//!
//! ```rust
//! use folio_store::{KeyValueStore, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//! assert_eq!(store.get("portfolio_theme"), None);
//!
//! store.set("portfolio_theme", "ocean");
//! assert_eq!(store.get("portfolio_theme").as_deref(), Some("ocean"));
//! ```
//!
//! ## Structured Values
//!
//! Values are plain strings. Structured data is stored as JSON, the same way
//! the site stores visitor logs and contact messages:
//!
//! ```rust
//! use folio_store::{json, MemoryStore};
//!
//! let mut store = MemoryStore::new();
//! json::push_capped(&mut store, "portfolio_events", &"opened", 50, json::Order::Append);
//! json::push_capped(&mut store, "portfolio_events", &"closed", 50, json::Order::Append);
//!
//! let events: Vec<String> = json::read_list(&store, "portfolio_events");
//! assert_eq!(events, vec!["opened", "closed"]);
//! ```

mod error;
mod file;
pub mod json;
mod shared;
mod store;

pub use error::{Result, StoreError};
pub use file::FileStore;
pub use shared::SharedStore;
pub use store::{KeyValueStore, MemoryStore};
