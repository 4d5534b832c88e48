//! Catalog configuration.
//!
//! Defines the YAML-serializable configuration that tells the store where the
//! data file lives and how new book ids are assigned.
//!
//! # Example YAML
//!
//! ```yaml
//! data_file: library_data.json
//! id_policy: count_plus_one
//! ```
//!
//! Every field has a default, so an empty mapping (`{}`) is a valid config.

use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use library_catalog_core::IdPolicy;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Data file used when none is configured, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "library_data.json";

/// Top-level catalog configuration.
///
/// # Examples
///
/// ```
/// use library_catalog_core::IdPolicy;
/// use library_catalog_db::LibraryConfig;
///
/// let config: LibraryConfig = serde_yaml::from_str("id_policy: max_plus_one").unwrap();
/// assert_eq!(config.data_file.to_str(), Some("library_data.json"));
/// assert_eq!(config.id_policy, IdPolicy::MaxPlusOne);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Path of the JSON data file.
    pub data_file: PathBuf,
    /// Id assignment rule for new books.
    pub id_policy: IdPolicy,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            id_policy: IdPolicy::default(),
        }
    }
}

impl LibraryConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::StoreError::IoError) if the file cannot
    /// be read, or [`YamlError`](crate::StoreError::YamlError) if parsing
    /// fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::StoreError::IoError) if the file cannot be
    /// created, or [`YamlError`](crate::StoreError::YamlError) if the
    /// configuration cannot be serialized.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Replaces the data file path, keeping the other settings.
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }
}
