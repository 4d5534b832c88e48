//! Operator input validation.
//!
//! Every catalog operation that accepts raw text (ids, years, search
//! criteria, statuses) rejects malformed input with a [`CatalogError`] before
//! the collection is touched.
//!
//! # Examples
//!
//! ```
//! use library_catalog_core::*;
//!
//! assert_eq!(parse_id(" 42 ").unwrap(), Some(42));
//! assert_eq!(parse_id("-3").unwrap(), None);
//! assert!(matches!(parse_id("abc"), Err(CatalogError::InvalidId(_))));
//!
//! assert_eq!(parse_year("2020").unwrap(), 2020);
//! assert!(matches!(parse_year("-5"), Err(CatalogError::InvalidYear(_))));
//! ```

use thiserror::Error;

use crate::BookId;

/// Input-validation failures.
///
/// None of these are fatal: the caller reports the message and carries on
/// with the collection unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Year is empty, contains a non-digit, or does not fit an `i64`.
    #[error("year must be a number: {0:?}")]
    InvalidYear(String),
    /// Book id is not an integer.
    #[error("invalid book id: {0:?}")]
    InvalidId(String),
    /// Search criteria is not one of `title`, `author`, `year`.
    #[error("invalid search criteria: {0:?}")]
    InvalidCriteria(String),
    /// Status is not `available` or `issued`.
    #[error("invalid status: {0:?}")]
    InvalidStatus(String),
    /// No unused id is left for a new book.
    #[error("no book id available")]
    IdsExhausted,
}

/// Returns `true` if `s` is non-empty and made only of ASCII digits.
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a publication year.
///
/// Accepts only a non-empty run of ASCII digits (no sign, no inner
/// whitespace). Surrounding whitespace is ignored.
pub fn parse_year(input: &str) -> Result<i64, CatalogError> {
    let trimmed = input.trim();
    if !is_digits(trimmed) {
        return Err(CatalogError::InvalidYear(trimmed.to_string()));
    }
    trimmed
        .parse()
        .map_err(|_| CatalogError::InvalidYear(trimmed.to_string()))
}

/// Parses a book id typed by the operator.
///
/// Any integer is accepted, with an optional sign. An integer that no
/// stored book can carry (negative, or too large for a [`BookId`]) yields
/// `Ok(None)` so callers report it as not found rather than as bad input.
/// Only text that is not an integer is a [`CatalogError::InvalidId`].
pub fn parse_id(input: &str) -> Result<Option<BookId>, CatalogError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);
    if !is_digits(digits) {
        return Err(CatalogError::InvalidId(trimmed.to_string()));
    }
    Ok(trimmed.parse::<BookId>().ok())
}
