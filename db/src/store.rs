//! Whole-collection persistence in a single JSON file.
//!
//! [`JsonStore`] owns one data file holding a JSON array of
//! [`Book`](library_catalog_core::Book) objects. Every operation reads or
//! writes the entire collection; there is no incremental update.
//!
//! # Usage
//!
//! ```no_run
//! use library_catalog_core::{IdPolicy, insert};
//! use library_catalog_db::JsonStore;
//!
//! let store = JsonStore::new("library_data.json");
//! store.initialize().unwrap();
//!
//! let mut books = store.load();
//! insert(&mut books, "Dune", "Frank Herbert", "1965", IdPolicy::default()).unwrap();
//! store.save(&books).unwrap();
//! ```

use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use library_catalog_core::Book;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::LibraryConfig;
use crate::error::Result;

/// JSON file store for the catalog.
///
/// The path is fixed at construction. Reads are fail-open through
/// [`load`](Self::load); [`try_load`](Self::try_load) reports the failure
/// instead.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Creates a store backed by the file at `path`. Nothing is touched on
    /// disk until an operation runs.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store for the configured data file.
    pub fn from_config(config: &LibraryConfig) -> Self {
        Self::new(config.data_file.clone())
    }

    /// Returns the data file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the data file with an empty array if it does not exist.
    ///
    /// Missing parent directories are created. An existing file is never
    /// modified, even if its content is not valid JSON.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::StoreError::IoError) if the directory or
    /// file cannot be created.
    pub fn initialize(&self) -> Result<()> {
        if self.path.exists() {
            debug!(path = %self.path.display(), "data file already present");
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        self.save(&[])?;
        debug!(path = %self.path.display(), "created empty data file");
        Ok(())
    }

    /// Reads the full collection, or an empty one if the file is missing or
    /// malformed.
    ///
    /// Malformed content is not partially recovered; the failure is logged
    /// and the collection starts empty.
    pub fn load(&self) -> Vec<Book> {
        match self.try_load() {
            Ok(books) => books,
            Err(crate::StoreError::IoError(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "data file missing, starting empty");
                Vec::new()
            }
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "unreadable data file, starting with an empty catalog"
                );
                Vec::new()
            }
        }
    }

    /// Reads the full collection, reporting any failure.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::StoreError::IoError) if the file cannot be
    /// read, or [`JsonError`](crate::StoreError::JsonError) if it is not a
    /// valid array of books.
    pub fn try_load(&self) -> Result<Vec<Book>> {
        let file = std::fs::File::open(&self.path)?;
        let reader = BufReader::new(file);
        let books: Vec<Book> = serde_json::from_reader(reader)?;
        debug!(path = %self.path.display(), count = books.len(), "loaded catalog");
        Ok(books)
    }

    /// Overwrites the data file with `records`.
    ///
    /// The JSON is written to a temporary file in the same directory and
    /// renamed over the data file, so readers see either the old or the new
    /// document. The data file keeps its permissions; a new one is created
    /// with the usual umask-derived mode.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::StoreError::IoError) if the temporary file
    /// cannot be written, or
    /// [`PersistError`](crate::StoreError::PersistError) if the rename
    /// fails.
    pub fn save(&self, records: &[Book]) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records.serialize(&mut serializer)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let existing = match std::fs::metadata(&self.path) {
            Ok(meta) => Some(meta.permissions()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => return Err(err.into()),
        };

        let mut builder = tempfile::Builder::new();
        // Temp files default to 0600; a new data file gets the umask mode.
        #[cfg(unix)]
        if existing.is_none() {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }
        let mut tmp = builder.tempfile_in(dir)?;
        if let Some(perms) = existing {
            tmp.as_file().set_permissions(perms)?;
        }
        tmp.write_all(&buf)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;

        debug!(path = %self.path.display(), count = records.len(), "saved catalog");
        Ok(())
    }
}
