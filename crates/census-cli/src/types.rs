use std::path::PathBuf;

use census_model::{Geography, Profile};
use serde::Serialize;

/// The JSON document written by `census-profiler profile`.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileDocument {
    /// RFC 3339 timestamp of the run.
    pub generated_at: String,
    pub geography: Geography,
    pub comparatives: Vec<Geography>,
    pub profile: Profile,
}

/// Node counts of one profile section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSummary {
    pub name: String,
    pub indicators: usize,
    pub distributions: usize,
    pub groups: usize,
}

#[derive(Debug)]
pub struct ProfileRun {
    pub document: ProfileDocument,
    /// File the document was written to; `None` when printed to stdout.
    pub output: Option<PathBuf>,
    pub sections: Vec<SectionSummary>,
}
