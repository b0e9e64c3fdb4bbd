//! `tables.toml`: provenance of each table in a data directory.
//!
//! ```toml
//! [tables.populationgroup]
//! universe = "Population"
//! year = "2011"
//! dataset = "Census 2011"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use census_model::Metadata;
use serde::Deserialize;

use crate::error::{IngestError, Result};

pub const MANIFEST_FILE: &str = "tables.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableInfo {
    pub universe: Option<String>,
    pub year: Option<String>,
    pub dataset: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TableManifest {
    #[serde(default)]
    pub tables: BTreeMap<String, TableInfo>,
}

impl TableManifest {
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| IngestError::Manifest {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads the manifest at `path`; a missing file is an empty manifest.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Metadata for `table_id`, defaulting to the table id alone.
    pub fn metadata_for(&self, table_id: &str) -> Metadata {
        let mut metadata = Metadata::for_table(table_id);
        if let Some(info) = self.tables.get(table_id) {
            metadata.universe.clone_from(&info.universe);
            metadata.year.clone_from(&info.year);
            metadata.dataset.clone_from(&info.dataset);
        }
        metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tables() {
        let manifest = TableManifest::parse(
            "[tables.crime]\nuniverse = \"Crimes in 2014\"\ndataset = \"Crime Stats 2014\"\n",
            Path::new("tables.toml"),
        )
        .unwrap();
        let metadata = manifest.metadata_for("crime");
        assert_eq!(metadata.table_id.as_deref(), Some("crime"));
        assert_eq!(metadata.dataset.as_deref(), Some("Crime Stats 2014"));
        assert_eq!(manifest.metadata_for("gender").universe, None);
    }

    #[test]
    fn rejects_unknown_keys() {
        let result = TableManifest::parse("[tables.crime]\nuniverse_name = \"x\"\n", Path::new("t"));
        assert!(matches!(result, Err(IngestError::Manifest { .. })));
    }
}
