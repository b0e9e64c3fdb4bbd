use census_model::{ModelError, SourceError};
use census_recode::RecodeError;
use census_transform::TransformError;
use thiserror::Error;

use crate::section::ProfileSection;

/// Errors that fail a profile request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Recode(#[from] RecodeError),

    #[error(transparent)]
    Model(#[from] ModelError),

    /// A category the aggregation depends on is absent for the geography.
    #[error("{geo_id}: category '{category}' of '{field}' is missing")]
    MissingCategory {
        geo_id: String,
        field: String,
        category: String,
    },

    #[error("{geo_id}: category '{label}' of '{field}' is not a number")]
    NonNumericCategory {
        geo_id: String,
        field: String,
        label: String,
    },

    /// The comparative profile does not line up with the primary one.
    #[error(
        "error merging data into {geo_id} for section '{section}' from {comparative_geo_id}: {source}"
    )]
    Merge {
        geo_id: String,
        section: String,
        comparative_geo_id: String,
        #[source]
        source: ModelError,
    },

    #[error("no aggregator registered for section '{0}'")]
    NoAggregator(ProfileSection),
}

pub type Result<T> = std::result::Result<T, ProfileError>;
