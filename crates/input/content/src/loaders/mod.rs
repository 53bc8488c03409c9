//! Loaders turning RON data files into catalog implementations.

pub mod actions;
pub mod classes;

pub use actions::{ActionCatalogFile, ActionRegistry};
pub use classes::{CharacterClass, ClassRegistry};

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{ContentError, ContentResult};

/// Reads a whole file, attaching the path to I/O failures.
pub(crate) fn read_file(path: &Path) -> ContentResult<String> {
    std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses RON, labelling failures with `what`.
pub(crate) fn parse_ron<T: DeserializeOwned>(source: &str, what: &str) -> ContentResult<T> {
    ron::from_str(source).map_err(|err| ContentError::Parse {
        what: what.to_string(),
        source: err,
    })
}
