use thiserror::Error;

#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("Invalid configuration: {0}")]
    InvalidConfigurationErr(String),
    #[error("Invalid value: {0}")]
    InvalidValueErr(String),
    #[error("Distribution error: {0}")]
    DistributionErr(String),
    #[error("Non-finite value: {0}")]
    NonFiniteValueErr(String),
    #[error("Not found: {0}")]
    NotFoundErr(String),
    #[error("Serialization error: {0}")]
    SerializationErr(#[from] serde_json::Error),
}

impl From<rand_distr::NormalError> for AtlasError {
    fn from(e: rand_distr::NormalError) -> Self {
        AtlasError::DistributionErr(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AtlasError>;
