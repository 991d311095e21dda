use thiserror::Error;

/// Errors raised while building a trail from configuration.
#[derive(Debug, Error)]
pub enum TrailError {
    /// The config JSON could not be parsed.
    #[error("invalid trail config JSON: {0}")]
    Config(#[from] serde_json::Error),

    /// A config value is out of range.
    #[error("invalid trail config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TrailError>;
