use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightsError {
    #[error("Aggregation request failed: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("Aggregation service error: {message}")]
    ServiceError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, InsightsError>;
