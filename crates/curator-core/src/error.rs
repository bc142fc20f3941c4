use thiserror::Error;

#[derive(Debug, Error)]
pub enum CuratorError {
    #[error("habit not found: {0}")]
    HabitNotFound(String),

    #[error("duplicate habit id in catalog: {0}")]
    DuplicateHabitId(String),

    #[error("catalog is empty: at least one habit record is required")]
    EmptyCatalog,

    #[error("habit '{0}' needs at least one personality tag and one goal tag")]
    MissingTags(String),

    #[error("invalid personality: {0}")]
    InvalidPersonality(String),

    #[error("invalid category: {0}")]
    InvalidCategory(String),

    #[error("invalid goal: {0}")]
    InvalidGoal(String),

    #[error("invalid time slot: {0}")]
    InvalidTimeSlot(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, CuratorError>;
