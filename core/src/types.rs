//! Catalog type definitions.
//!
//! This module defines the data model persisted by the store: a flat list of
//! [`Book`] records. The types serialize with [`serde`] to the on-disk JSON
//! layout (`id`, `title`, `author`, `year`, `status`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validate::CatalogError;

/// Identifier of a book within one collection.
pub type BookId = u64;

/// Circulation status of a book.
///
/// Serialized as the lowercase strings `"available"` and `"issued"`; any
/// other string fails to deserialize.
///
/// Parsing from operator input is case-insensitive and ignores surrounding
/// whitespace.
///
/// # Examples
///
/// ```
/// use library_catalog_core::BookStatus;
///
/// assert_eq!(BookStatus::default(), BookStatus::Available);
/// assert_eq!(" ISSUED ".parse::<BookStatus>().unwrap(), BookStatus::Issued);
/// assert!("lost".parse::<BookStatus>().is_err());
/// assert_eq!(BookStatus::Issued.to_string(), "issued");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    /// On the shelf (the default for new books).
    #[default]
    Available,
    /// Lent out.
    Issued,
}

impl BookStatus {
    /// Returns the stored lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Issued => "issued",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookStatus {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "issued" => Ok(Self::Issued),
            _ => Err(CatalogError::InvalidStatus(s.trim().to_string())),
        }
    }
}

/// A single catalog entry.
///
/// `Display` renders the one-line listing used by the interactive menu.
///
/// # Examples
///
/// ```
/// use library_catalog_core::{Book, BookStatus};
///
/// let book = Book::new(1, "Dune", "Frank Herbert", 1965);
/// assert_eq!(book.status, BookStatus::Available);
/// assert_eq!(
///     book.to_string(),
///     "ID: 1, Title: Dune, Author: Frank Herbert, Year: 1965, Status: available"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: i64,
    pub status: BookStatus,
}

impl Book {
    /// Creates an available book.
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
            status: BookStatus::Available,
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Title: {}, Author: {}, Year: {}, Status: {}",
            self.id, self.title, self.author, self.year, self.status
        )
    }
}

/// Field a search query is matched against.
///
/// # Examples
///
/// ```
/// use library_catalog_core::SearchField;
///
/// assert_eq!("Title".parse::<SearchField>().unwrap(), SearchField::Title);
/// assert!("isbn".parse::<SearchField>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Case-insensitive substring match on the title.
    Title,
    /// Case-insensitive substring match on the author.
    Author,
    /// Exact match on the publication year.
    Year,
}

impl FromStr for SearchField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "year" => Ok(Self::Year),
            _ => Err(CatalogError::InvalidCriteria(s.trim().to_string())),
        }
    }
}

/// Rule for assigning the id of a newly inserted book.
///
/// [`CountPlusOne`](IdPolicy::CountPlusOne) keeps compatibility with data
/// files written by earlier versions of the tool: the new id is the number of
/// records plus one. After a deletion this can repeat the id of a surviving
/// record. [`MaxPlusOne`](IdPolicy::MaxPlusOne) uses the largest existing id
/// plus one and never collides with a record still in the collection.
///
/// # Examples
///
/// ```
/// use library_catalog_core::{Book, IdPolicy};
///
/// let records = vec![Book::new(2, "B", "b", 2001)];
/// assert_eq!(IdPolicy::CountPlusOne.next_id(&records), Some(2));
/// assert_eq!(IdPolicy::MaxPlusOne.next_id(&records), Some(3));
///
/// let full = vec![Book::new(u64::MAX, "Z", "z", 2001)];
/// assert_eq!(IdPolicy::MaxPlusOne.next_id(&full), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// `len + 1` (the default).
    #[default]
    CountPlusOne,
    /// `max(id) + 1`, or `1` for an empty collection.
    MaxPlusOne,
}

impl IdPolicy {
    /// Computes the id the next inserted book receives, or `None` if it
    /// would not fit a [`BookId`].
    pub fn next_id(&self, records: &[Book]) -> Option<BookId> {
        match self {
            Self::CountPlusOne => (records.len() as BookId).checked_add(1),
            Self::MaxPlusOne => records
                .iter()
                .map(|b| b.id)
                .max()
                .unwrap_or(0)
                .checked_add(1),
        }
    }
}
