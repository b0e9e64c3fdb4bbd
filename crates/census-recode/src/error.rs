use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecodeError {
    /// A label missing from an exhaustive table.
    #[error("label '{label}' has no mapping in recode table {table}")]
    Unmapped { table: &'static str, label: String },
}

pub type Result<T> = std::result::Result<T, RecodeError>;
