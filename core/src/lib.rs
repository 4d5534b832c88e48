//! Core types and operations for the library catalog.
//!
//! This crate defines the catalog's data model and the pure operations the
//! interactive menu applies to it:
//!
//! - [`Book`] — a catalog entry with id, title, author, year and status.
//! - [`BookStatus`] — `available` or `issued`.
//! - [`SearchField`] — which field a search matches against.
//! - [`IdPolicy`] — how ids are assigned to new books.
//!
//! Operations ([`insert`], [`delete`], [`search`], [`list_all`],
//! [`change_status`]) work on a `Vec<Book>` loaded by the store. Raw operator
//! input is validated by [`parse_id`], [`parse_year`] and the `FromStr`
//! impls, which all fail with [`CatalogError`].
//!
//! # Example
//!
//! ```
//! use library_catalog_core::*;
//!
//! let mut books = Vec::new();
//! insert(&mut books, "Book Title", "Book Author", "2020", IdPolicy::default()).unwrap();
//!
//! let field: SearchField = "title".parse().unwrap();
//! assert_eq!(search(&books, field, "book").unwrap().len(), 1);
//!
//! let status: BookStatus = "Issued".parse().unwrap();
//! assert!(change_status(&mut books, 1, status));
//! assert_eq!(books[0].status, BookStatus::Issued);
//! ```

mod catalog;
mod types;
mod validate;

pub use catalog::{change_status, delete, insert, list_all, search};
pub use types::*;
pub use validate::{CatalogError, is_digits, parse_id, parse_year};
