//! Catalog operations over a loaded collection.
//!
//! These functions are pure transformations of an in-memory `Vec<Book>`;
//! persisting the result is the caller's job.
//!
//! # Examples
//!
//! ```
//! use library_catalog_core::*;
//!
//! let mut books = Vec::new();
//! let id = insert(&mut books, "A", "B", "1999", IdPolicy::default()).unwrap();
//! assert_eq!(id, 1);
//! assert_eq!(list_all(&books), &[Book::new(1, "A", "B", 1999)]);
//!
//! assert!(delete(&mut books, 1));
//! assert!(list_all(&books).is_empty());
//! ```

use crate::validate::{CatalogError, is_digits, parse_year};
use crate::{Book, BookId, BookStatus, IdPolicy, SearchField};

/// Appends a new available book and returns its id.
///
/// The year is validated first; on [`CatalogError::InvalidYear`] the
/// collection is left unchanged. The id comes from `policy`; if it has no
/// id left, [`CatalogError::IdsExhausted`] is returned and nothing is added.
///
/// # Examples
///
/// ```
/// use library_catalog_core::*;
///
/// let mut books = vec![Book::new(1, "Dune", "Frank Herbert", 1965)];
/// assert_eq!(insert(&mut books, "Emma", "Jane Austen", "1815", IdPolicy::CountPlusOne), Ok(2));
/// assert!(insert(&mut books, "Emma", "Jane Austen", "soon", IdPolicy::CountPlusOne).is_err());
/// assert_eq!(books.len(), 2);
/// ```
pub fn insert(
    records: &mut Vec<Book>,
    title: &str,
    author: &str,
    year: &str,
    policy: IdPolicy,
) -> Result<BookId, CatalogError> {
    let year = parse_year(year)?;
    let id = policy.next_id(records).ok_or(CatalogError::IdsExhausted)?;
    records.push(Book::new(id, title, author, year));
    Ok(id)
}

/// Removes the first book with `id`. Returns `false` if none matched.
pub fn delete(records: &mut Vec<Book>, id: BookId) -> bool {
    match records.iter().position(|b| b.id == id) {
        Some(index) => {
            records.remove(index);
            true
        }
        None => false,
    }
}

/// Returns the books matching `query` on `field`, in stored order.
///
/// `Title` and `Author` match by case-insensitive substring. `Year` requires
/// an all-digit query and matches by equality; any other query is rejected
/// with [`CatalogError::InvalidYear`] rather than yielding no results.
///
/// # Examples
///
/// ```
/// use library_catalog_core::*;
///
/// let books = vec![
///     Book::new(1, "Book Title", "Book Author", 2020),
///     Book::new(2, "Other", "Someone", 1999),
/// ];
/// let found = search(&books, SearchField::Title, "book").unwrap();
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].id, 1);
///
/// assert_eq!(search(&books, SearchField::Year, "1999").unwrap()[0].id, 2);
/// assert!(search(&books, SearchField::Year, "abc").is_err());
/// ```
pub fn search<'a>(
    records: &'a [Book],
    field: SearchField,
    query: &str,
) -> Result<Vec<&'a Book>, CatalogError> {
    let results: Vec<&Book> = match field {
        SearchField::Title => {
            let needle = query.to_lowercase();
            records
                .iter()
                .filter(|b| b.title.to_lowercase().contains(&needle))
                .collect()
        }
        SearchField::Author => {
            let needle = query.to_lowercase();
            records
                .iter()
                .filter(|b| b.author.to_lowercase().contains(&needle))
                .collect()
        }
        SearchField::Year => {
            let query = query.trim();
            if !is_digits(query) {
                return Err(CatalogError::InvalidYear(query.to_string()));
            }
            // A digit string too large for i64 cannot match any stored year.
            match query.parse::<i64>() {
                Ok(year) => records.iter().filter(|b| b.year == year).collect(),
                Err(_) => Vec::new(),
            }
        }
    };
    Ok(results)
}

/// Returns every book in stored order.
pub fn list_all(records: &[Book]) -> &[Book] {
    records
}

/// Sets the status of the first book with `id`. Returns `false` if none
/// matched.
///
/// Rewriting the current status is allowed and reports success.
pub fn change_status(records: &mut [Book], id: BookId, status: BookStatus) -> bool {
    match records.iter_mut().find(|b| b.id == id) {
        Some(book) => {
            book.status = status;
            true
        }
        None => false,
    }
}
