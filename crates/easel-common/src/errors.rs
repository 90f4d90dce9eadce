use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("scenario file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("scenario parse error: {0}")]
    ParseError(String),

    #[error("step {index}: {reason}")]
    InvalidStep { index: usize, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum EaselError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
