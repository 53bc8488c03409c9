//! Character class loader.

use std::collections::HashMap;
use std::path::Path;

use input_core::{ActionCatalog, ActionId, SlotIndex};
use serde::{Deserialize, Serialize};

use crate::error::{ContentError, ContentResult};
use crate::loaders::{parse_ron, read_file};

/// Character class and the innate skills of its slots, basic slot first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClass {
    pub name: String,
    pub skills: Vec<ActionId>,
}

impl CharacterClass {
    pub fn skill(&self, slot: SlotIndex) -> Option<ActionId> {
        self.skills.get(slot.index()).copied()
    }
}

/// Classes by name.
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    classes: HashMap<String, CharacterClass>,
}

impl ClassRegistry {
    /// Loads the classes embedded in the crate.
    pub fn load() -> ContentResult<Self> {
        Self::from_ron(include_str!("../../data/classes.ron"))
    }

    pub fn from_file(path: &Path) -> ContentResult<Self> {
        let content = read_file(path)?;
        let classes: Vec<CharacterClass> = parse_ron(&content, &path.display().to_string())?;
        Self::from_classes(classes)
    }

    pub fn from_ron(source: &str) -> ContentResult<Self> {
        let classes: Vec<CharacterClass> = parse_ron(source, "class list")?;
        Self::from_classes(classes)
    }

    pub fn from_classes(classes: Vec<CharacterClass>) -> ContentResult<Self> {
        let mut registry = Self::default();
        for class in classes {
            let count = class.skills.len();
            if !(1..=3).contains(&count) {
                return Err(ContentError::InvalidSkillCount {
                    class: class.name,
                    count,
                });
            }
            if registry.classes.contains_key(&class.name) {
                return Err(ContentError::DuplicateClass(class.name));
            }
            registry.classes.insert(class.name.clone(), class);
        }
        Ok(registry)
    }

    /// Checks that every skill of every class exists in `catalog`.
    pub fn validate(&self, catalog: &dyn ActionCatalog) -> ContentResult<()> {
        for class in self.classes.values() {
            if let Some(&action) = class.skills.iter().find(|&&id| !catalog.contains(id)) {
                return Err(ContentError::UnknownSkill {
                    class: class.name.clone(),
                    action,
                });
            }
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&CharacterClass> {
        self.classes.get(name)
    }

    /// Class names in alphabetical order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.classes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
