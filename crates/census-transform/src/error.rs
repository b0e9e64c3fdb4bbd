use census_model::SourceError;
use census_recode::RecodeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Recode(#[from] RecodeError),

    #[error("category '{label}' of field '{field}' is not numeric")]
    NonNumericCategory { field: String, label: String },

    #[error("stat query for table {table_id} returned {found} fields, expected {expected}")]
    FieldCount {
        table_id: String,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, TransformError>;
