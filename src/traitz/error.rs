use thiserror::Error;

#[derive(Error, Debug)]
pub enum TraitzError {
    #[error("Unknown trait value: {trait_type} = {value}")]
    InvalidKey { trait_type: String, value: String },

    #[error("Records are still loading")]
    NotReady,

    #[error("Failed to load {resource}: {reason}")]
    LoadFailure { resource: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl TraitzError {
    pub fn invalid_key(trait_type: &str, value: &str) -> Self {
        Self::InvalidKey {
            trait_type: trait_type.to_string(),
            value: value.to_string(),
        }
    }

    pub fn load_failure(resource: impl Into<String>, reason: impl ToString) -> Self {
        Self::LoadFailure {
            resource: resource.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TraitzError>;
