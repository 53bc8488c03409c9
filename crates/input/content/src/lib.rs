//! Data-driven action catalog and character classes.
//!
//! Content is read from RON files (embedded defaults live under `data/`) and
//! validated on load: action ids are unique, every role-based action named by
//! the catalog exists and class skills reference known actions. The resulting
//! [`ActionRegistry`] is the production [`input_core::ActionCatalog`].

pub mod error;
pub mod loaders;

pub use error::{ContentError, ContentResult};
pub use loaders::{ActionCatalogFile, ActionRegistry, CharacterClass, ClassRegistry};
