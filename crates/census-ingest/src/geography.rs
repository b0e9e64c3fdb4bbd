//! Geography registry loaded from `geographies.csv`.

use std::collections::HashSet;
use std::path::Path;

use census_model::{GeoHierarchy, GeoId, GeoLevel, Geography, ModelError};
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::error::{IngestError, Result};

pub const GEOGRAPHIES_FILE: &str = "geographies.csv";

#[derive(Debug, Deserialize)]
struct GeographyRecord {
    geo_level: String,
    geo_code: String,
    name: String,
    version: String,
    square_kms: Option<f64>,
    parent_level: Option<String>,
    parent_code: Option<String>,
}

impl GeographyRecord {
    fn into_geography(self, path: &Path) -> Result<Geography> {
        let level = parse_level(&self.geo_level, "geo_level", path)?;
        let mut geo = Geography::new(
            GeoId::new(level, self.geo_code.trim()),
            self.name,
            self.version,
        );
        geo.square_kms = self.square_kms.filter(|area| *area > 0.0);
        if let (Some(parent_level), Some(parent_code)) = (self.parent_level, self.parent_code) {
            let parent_level = parse_level(&parent_level, "parent_level", path)?;
            geo.parent = Some(GeoId::new(parent_level, parent_code.trim()));
        }
        Ok(geo)
    }
}

fn parse_level(value: &str, field: &str, path: &Path) -> Result<GeoLevel> {
    value.parse().map_err(|_| IngestError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        path: path.to_path_buf(),
    })
}

/// Known geographies, in file order.
#[derive(Debug, Clone, Default)]
pub struct GeoRegistry {
    geographies: IndexMap<GeoId, Geography>,
}

impl GeoRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `geographies.csv` (`geo_level,geo_code,name,version,square_kms,
    /// parent_level,parent_code`). Empty area and parent cells are allowed.
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|source| IngestError::CsvParse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut registry = Self::new();
        for result in reader.deserialize::<GeographyRecord>() {
            let record = result.map_err(|source| IngestError::CsvParse {
                path: path.to_path_buf(),
                source,
            })?;
            registry.insert(record.into_geography(path)?)?;
        }
        debug!(path = %path.display(), count = registry.len(), "loaded geographies");
        Ok(registry)
    }

    /// Adds a geography.
    ///
    /// # Errors
    ///
    /// [`IngestError::DuplicateGeography`] when the id is already known.
    pub fn insert(&mut self, geo: Geography) -> Result<()> {
        if self.geographies.contains_key(&geo.id) {
            return Err(IngestError::DuplicateGeography {
                geoid: geo.geoid(),
            });
        }
        self.geographies.insert(geo.id.clone(), geo);
        Ok(())
    }

    pub fn get(&self, id: &GeoId) -> Option<&Geography> {
        self.geographies.get(id)
    }

    /// The geography for `id`.
    ///
    /// # Errors
    ///
    /// [`ModelError::UnknownGeography`] when it is not registered.
    pub fn resolve(&self, id: &GeoId) -> std::result::Result<&Geography, ModelError> {
        self.get(id)
            .ok_or_else(|| ModelError::UnknownGeography(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Geography> + '_ {
        self.geographies.values()
    }

    pub fn len(&self) -> usize {
        self.geographies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geographies.is_empty()
    }
}

impl GeoHierarchy for GeoRegistry {
    /// The ancestors of `geo`, parent first, up to the root.
    fn comparative_geos(&self, geo: &Geography) -> census_model::Result<Vec<Geography>> {
        let mut seen: HashSet<&GeoId> = HashSet::from([&geo.id]);
        let mut ancestors = Vec::new();
        let mut next = geo.parent.as_ref();
        while let Some(parent_id) = next {
            if !seen.insert(parent_id) {
                return Err(ModelError::HierarchyCycle(parent_id.to_string()));
            }
            let parent = self.resolve(parent_id)?;
            ancestors.push(parent.clone());
            next = parent.parent.as_ref();
        }
        Ok(ancestors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(level: GeoLevel, code: &str) -> GeoId {
        GeoId::new(level, code)
    }

    fn registry() -> GeoRegistry {
        let mut registry = GeoRegistry::new();
        registry
            .insert(Geography::new(id(GeoLevel::Country, "ZA"), "South Africa", "2011"))
            .unwrap();
        registry
            .insert(
                Geography::new(id(GeoLevel::Province, "WC"), "Western Cape", "2011")
                    .with_parent(id(GeoLevel::Country, "ZA")),
            )
            .unwrap();
        registry
            .insert(
                Geography::new(id(GeoLevel::Municipality, "CPT"), "Cape Town", "2011")
                    .with_parent(id(GeoLevel::Province, "WC")),
            )
            .unwrap();
        registry
    }

    #[test]
    fn ancestors_nearest_first() {
        let registry = registry();
        let cpt = registry.get(&id(GeoLevel::Municipality, "CPT")).unwrap();
        let levels: Vec<GeoLevel> = registry
            .comparative_geos(cpt)
            .unwrap()
            .iter()
            .map(Geography::geo_level)
            .collect();
        assert_eq!(levels, vec![GeoLevel::Province, GeoLevel::Country]);
    }

    #[test]
    fn unknown_parent_and_cycles() {
        let mut registry = GeoRegistry::new();
        registry
            .insert(
                Geography::new(id(GeoLevel::Ward, "1"), "Ward 1", "2011")
                    .with_parent(id(GeoLevel::Ward, "2")),
            )
            .unwrap();
        let ward = registry.get(&id(GeoLevel::Ward, "1")).unwrap().clone();
        assert!(matches!(
            registry.comparative_geos(&ward),
            Err(ModelError::UnknownGeography(_))
        ));

        registry
            .insert(
                Geography::new(id(GeoLevel::Ward, "2"), "Ward 2", "2011")
                    .with_parent(id(GeoLevel::Ward, "1")),
            )
            .unwrap();
        assert!(matches!(
            registry.comparative_geos(&ward),
            Err(ModelError::HierarchyCycle(_))
        ));
    }

    #[test]
    fn duplicate_is_rejected() {
        let mut registry = registry();
        let result = registry.insert(Geography::new(id(GeoLevel::Country, "ZA"), "Again", "2011"));
        assert!(matches!(result, Err(IngestError::DuplicateGeography { .. })));
    }
}
