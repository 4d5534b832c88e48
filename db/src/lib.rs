//! JSON file storage and configuration for the library catalog.
//!
//! This crate persists the catalog as a single JSON array on disk and loads
//! the settings that locate it.
//!
//! # Quick start
//!
//! ```no_run
//! use library_catalog_db::{JsonStore, LibraryConfig};
//!
//! let config = LibraryConfig::load("library.yml").unwrap_or_default();
//! let store = JsonStore::from_config(&config);
//! store.initialize().unwrap();
//!
//! let books = store.load();
//! println!("{} book(s) in {}", books.len(), store.path().display());
//! ```
//!
//! # Failure policy
//!
//! [`JsonStore::load`] never fails: a missing or malformed data file yields
//! an empty catalog, with the cause logged through `tracing`.
//! [`JsonStore::try_load`] returns the underlying [`StoreError`] for callers
//! that need to distinguish a genuinely empty catalog from a degraded one.

mod config;
mod error;
mod store;

pub use config::{DEFAULT_DATA_FILE, LibraryConfig};
pub use error::{Result, StoreError};
pub use store::JsonStore;
