//! The raw-count data source seam.
//!
//! Aggregators never talk to storage directly: they describe the fields they
//! need as a [`CountQuery`] and receive [`CountRow`]s for one geography.

use thiserror::Error;

use crate::geo::Geography;
use crate::indicator::Metadata;

/// Default table id for a list of fields: each field lower-cased with spaces
/// removed, joined with `_`.
///
/// `["mother alive", "father alive"]` → `motheralive_fatheralive`.
pub fn default_table_id<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|field| {
            field
                .as_ref()
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .flat_map(char::to_lowercase)
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("_")
}

/// Fields to fetch, and optionally which table and dataset hold them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountQuery {
    pub fields: Vec<String>,
    pub table_id: Option<String>,
    pub dataset: Option<String>,
}

impl CountQuery {
    pub fn new<S: AsRef<str>>(fields: &[S]) -> Self {
        Self {
            fields: fields.iter().map(|f| f.as_ref().to_string()).collect(),
            table_id: None,
            dataset: None,
        }
    }

    #[must_use]
    pub fn with_table(mut self, table_id: impl Into<String>) -> Self {
        self.table_id = Some(table_id.into());
        self
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: impl Into<String>) -> Self {
        self.dataset = Some(dataset.into());
        self
    }

    /// The explicit table id, or the one derived from the fields.
    pub fn table_id(&self) -> String {
        self.table_id
            .clone()
            .unwrap_or_else(|| default_table_id(&self.fields))
    }
}

/// Count for one combination of field values.
#[derive(Debug, Clone, PartialEq)]
pub struct CountRow {
    /// One value per queried field, in query order.
    pub categories: Vec<String>,
    pub total: f64,
}

impl CountRow {
    pub fn new<S: AsRef<str>>(categories: &[S], total: f64) -> Self {
        Self {
            categories: categories.iter().map(|c| c.as_ref().to_string()).collect(),
            total,
        }
    }

    pub fn category(&self, index: usize) -> Option<&str> {
        self.categories.get(index).map(String::as_str)
    }
}

/// Rows returned for a query, with the provenance of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct CountTable {
    pub table_id: String,
    pub fields: Vec<String>,
    pub rows: Vec<CountRow>,
    pub metadata: Metadata,
}

impl CountTable {
    pub fn total(&self) -> f64 {
        self.rows.iter().map(|row| row.total).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SourceError {
    #[error("unknown table: {table_id}")]
    UnknownTable { table_id: String },

    #[error("table {table_id} has no field '{field}'")]
    UnknownField { table_id: String, field: String },

    #[error("table {table_id} belongs to dataset '{actual}', not '{requested}'")]
    DatasetMismatch {
        table_id: String,
        requested: String,
        actual: String,
    },

    #[error("failed to read table {table_id}: {message}")]
    Read { table_id: String, message: String },
}

/// Storage of pre-aggregated census counts.
///
/// Rows for a geography with no data are an empty table, not an error.
pub trait CountSource {
    /// Fetches the counts of `query.fields` for `geo`, summed over any other
    /// fields the table carries.
    fn fetch(&self, query: &CountQuery, geo: &Geography) -> Result<CountTable, SourceError>;
}
