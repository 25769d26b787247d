use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Malformed level: {0}")]
    MalformedLevel(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
