//! CSV loading for a census data directory.
//!
//! ```text
//! <data dir>/
//!   geographies.csv
//!   tables.toml              (optional)
//!   tables/<table_id>.csv    geo_level,geo_code,<field>...,total
//! ```

use std::path::{Path, PathBuf};

use census_model::{GeoId, GeoLevel, Metadata};
use tracing::{debug, info};

use crate::discovery::{list_csv_files, table_id_for_path};
use crate::error::{IngestError, Result};
use crate::geography::{GEOGRAPHIES_FILE, GeoRegistry};
use crate::manifest::{MANIFEST_FILE, TableManifest};
use crate::store::{StoredTable, TableStore};

pub const TABLES_DIR: &str = "tables";

const GEO_LEVEL_COLUMN: &str = "geo_level";
const GEO_CODE_COLUMN: &str = "geo_code";
const TOTAL_COLUMN: &str = "total";

/// Reads one table CSV.
///
/// The header must start with `geo_level,geo_code` and end with `total`;
/// the columns in between are the table's fields.
pub fn load_table(path: &Path, table_id: &str, metadata: Metadata) -> Result<StoredTable> {
    let csv_error = |source| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_error)?;

    let headers = reader.headers().map_err(csv_error)?.clone();
    let columns: Vec<&str> = headers.iter().collect();
    for (position, expected) in [(0, GEO_LEVEL_COLUMN), (1, GEO_CODE_COLUMN)] {
        if columns.get(position) != Some(&expected) {
            return Err(missing_column(expected, path));
        }
    }
    if columns.len() < 4 || columns.last() != Some(&TOTAL_COLUMN) {
        return Err(missing_column(TOTAL_COLUMN, path));
    }
    let field_count = columns.len() - 3;
    let fields = &columns[2..2 + field_count];

    let mut table = StoredTable::new(table_id, fields).with_metadata(metadata);
    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        let level = record.get(0).unwrap_or_default();
        let code = record.get(1).unwrap_or_default();
        let geo = GeoId::new(
            level.parse::<GeoLevel>().map_err(|_| IngestError::InvalidValue {
                field: GEO_LEVEL_COLUMN.to_string(),
                value: level.to_string(),
                path: path.to_path_buf(),
            })?,
            code,
        );
        let categories: Vec<&str> = (2..2 + field_count)
            .map(|index| record.get(index).unwrap_or_default())
            .collect();
        let raw_total = record.get(2 + field_count).unwrap_or_default();
        let total: f64 = raw_total.parse().map_err(|_| IngestError::InvalidValue {
            field: TOTAL_COLUMN.to_string(),
            value: raw_total.to_string(),
            path: path.to_path_buf(),
        })?;
        table.push_row(geo, &categories, total);
    }

    debug!(
        table_id,
        path = %path.display(),
        rows = table.rows.len(),
        "loaded table"
    );
    Ok(table)
}

fn missing_column(column: &str, path: &Path) -> IngestError {
    IngestError::MissingColumn {
        column: column.to_string(),
        path: path.to_path_buf(),
    }
}

/// Loads every table under `<dir>/tables`, applying `<dir>/tables.toml`.
pub fn load_table_store(dir: &Path) -> Result<TableStore> {
    let manifest = TableManifest::load(&dir.join(MANIFEST_FILE))?;
    let mut store = TableStore::new();
    for path in list_csv_files(&dir.join(TABLES_DIR))? {
        let Some(table_id) = table_id_for_path(&path) else {
            continue;
        };
        let metadata = manifest.metadata_for(&table_id);
        store.insert(load_table(&path, &table_id, metadata)?);
    }
    Ok(store)
}

/// A loaded data directory.
#[derive(Debug, Clone)]
pub struct CensusData {
    pub root: PathBuf,
    pub tables: TableStore,
    pub geographies: GeoRegistry,
}

impl CensusData {
    pub fn open(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(IngestError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }
        let geographies = GeoRegistry::load(&dir.join(GEOGRAPHIES_FILE))?;
        let tables = load_table_store(dir)?;
        info!(
            root = %dir.display(),
            tables = tables.len(),
            geographies = geographies.len(),
            "opened census data"
        );
        Ok(Self {
            root: dir.to_path_buf(),
            tables,
            geographies,
        })
    }
}
