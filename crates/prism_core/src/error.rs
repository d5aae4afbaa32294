use thiserror::Error;

/// Errors that can occur while loading, saving or validating scenes.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Invalid(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

pub type SceneResult<T> = Result<T, SceneError>;
