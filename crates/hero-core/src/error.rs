use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("scene manifest is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("scene manifest declares no floating objects")]
    EmptyRoster,
    #[error("node `{0}` is declared more than once")]
    DuplicateNode(String),
    #[error("roster lists `{0}` more than once")]
    DuplicateRosterEntry(String),
    #[error("static node `{0}` cannot also be a floating object")]
    StaticInRoster(String),
    #[error("multiplier for `{name}` must be finite, got {value}")]
    InvalidMultiplier { name: String, value: f32 },
    #[error("active cycle length must be at least 1")]
    EmptyCycle,
}

pub type Result<T> = std::result::Result<T, SceneError>;
