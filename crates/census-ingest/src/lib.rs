//! Census data ingestion.
//!
//! Loads pre-aggregated count tables and the geography hierarchy from a data
//! directory of CSV files, and serves them through the
//! [`CountSource`](census_model::CountSource) and
//! [`GeoHierarchy`](census_model::GeoHierarchy) seams.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use census_ingest::CensusData;
//!
//! let data = CensusData::open(Path::new("data/census"))?;
//! let cape_town = data.geographies.resolve(&"municipality-CPT".parse()?)?;
//! ```

mod discovery;
mod error;
mod geography;
mod loader;
mod manifest;
mod store;

// === Error Types ===
pub use error::{IngestError, Result};

// === File Discovery ===
pub use discovery::{list_csv_files, table_id_for_path};

// === Loading ===
pub use loader::{CensusData, TABLES_DIR, load_table, load_table_store};
pub use manifest::{MANIFEST_FILE, TableInfo, TableManifest};

// === Storage ===
pub use geography::{GEOGRAPHIES_FILE, GeoRegistry};
pub use store::{StoredRow, StoredTable, TableStore};
