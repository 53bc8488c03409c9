//! Action catalog loader.

use std::collections::HashMap;
use std::path::Path;

use input_core::{ActionCatalog, ActionDescriptor, ActionId, WellKnownActions};
use serde::{Deserialize, Serialize};

use crate::error::{ContentError, ContentResult};
use crate::loaders::{parse_ron, read_file};

/// On-disk layout of an action catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionCatalogFile {
    pub well_known: WellKnownActions,
    pub actions: Vec<ActionDescriptor>,
}

/// Validated action catalog.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    descriptors: HashMap<ActionId, ActionDescriptor>,
    well_known: WellKnownActions,
}

impl ActionRegistry {
    /// Loads the catalog embedded in the crate.
    pub fn load() -> ContentResult<Self> {
        Self::from_ron(include_str!("../../data/actions.ron"))
    }

    /// Loads a catalog from a RON file.
    pub fn from_file(path: &Path) -> ContentResult<Self> {
        let content = read_file(path)?;
        let file: ActionCatalogFile = parse_ron(&content, &path.display().to_string())?;
        Self::from_catalog_file(file)
    }

    pub fn from_ron(source: &str) -> ContentResult<Self> {
        let file: ActionCatalogFile = parse_ron(source, "action catalog")?;
        Self::from_catalog_file(file)
    }

    /// Builds a registry, rejecting duplicate ids and dangling well-known ids.
    pub fn from_catalog_file(file: ActionCatalogFile) -> ContentResult<Self> {
        let mut descriptors = HashMap::with_capacity(file.actions.len());
        for descriptor in file.actions {
            let id = descriptor.id;
            if descriptors.insert(id, descriptor).is_some() {
                return Err(ContentError::DuplicateAction(id));
            }
        }

        let registry = Self {
            descriptors,
            well_known: file.well_known,
        };
        registry.validate_well_known()?;
        tracing::debug!(actions = registry.len(), "action catalog loaded");
        Ok(registry)
    }

    fn validate_well_known(&self) -> ContentResult<()> {
        let wk = &self.well_known;
        let roles = [
            ("revive", wk.revive),
            ("pick-up", wk.pick_up),
            ("drop", wk.drop),
            ("general-target", wk.general_target),
        ];
        let emotes = wk.emotes.iter().map(|&id| ("emote", id));

        for (role, id) in roles.into_iter().chain(emotes) {
            if !self.descriptors.contains_key(&id) {
                return Err(ContentError::MissingWellKnown { role, id });
            }
        }
        Ok(())
    }

    pub fn get(&self, id: ActionId) -> Option<&ActionDescriptor> {
        self.descriptors.get(&id)
    }

    /// Looks an action up by its display name.
    pub fn find_by_name(&self, name: &str) -> Option<&ActionDescriptor> {
        self.descriptors.values().find(|descriptor| descriptor.name == name)
    }

    /// Registered ids in ascending order.
    pub fn ids(&self) -> Vec<ActionId> {
        let mut ids: Vec<ActionId> = self.descriptors.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl ActionCatalog for ActionRegistry {
    fn descriptor(&self, id: ActionId) -> Option<&ActionDescriptor> {
        self.descriptors.get(&id)
    }

    fn well_known(&self) -> &WellKnownActions {
        &self.well_known
    }
}
