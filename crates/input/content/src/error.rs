//! Content loading errors.

use std::path::PathBuf;

use input_core::ActionId;

/// Errors raised while loading or validating content files.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {what}: {source}")]
    Parse {
        what: String,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("action {0} is defined more than once")]
    DuplicateAction(ActionId),

    #[error("well-known {role} action {id} is not in the catalog")]
    MissingWellKnown { role: &'static str, id: ActionId },

    #[error("class {0:?} is defined more than once")]
    DuplicateClass(String),

    #[error("class {class:?} must bind between 1 and 3 skills, found {count}")]
    InvalidSkillCount { class: String, count: usize },

    #[error("class {class:?} references unknown action {action}")]
    UnknownSkill { class: String, action: ActionId },
}

pub type ContentResult<T> = Result<T, ContentError>;
