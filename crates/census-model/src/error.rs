use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown geography level: {0}")]
    UnknownGeoLevel(String),

    #[error("invalid geography id '{0}' (expected <level>-<code>)")]
    InvalidGeoId(String),

    #[error("unknown geography: {0}")]
    UnknownGeography(String),

    #[error("geography hierarchy loops back to {0}")]
    HierarchyCycle(String),

    #[error("missing key '{path}'")]
    MissingKey { path: String },

    #[error("shape mismatch at '{path}': expected {expected}, found {found}")]
    ShapeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
