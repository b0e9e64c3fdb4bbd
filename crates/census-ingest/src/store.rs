//! In-memory count tables.
//!
//! A [`StoredTable`] keeps one row per (geography, category combination).
//! Fetching a subset of its fields sums the rows over the fields left out,
//! so a table such as `annualhouseholdincome_genderofhouseholdhead` can serve
//! an income-only query.

use std::collections::HashMap;

use census_model::{
    CountQuery, CountRow, CountSource, CountTable, GeoId, Geography, Metadata, SourceError,
};
use indexmap::IndexMap;
use tracing::{debug, trace};

/// A single stored row.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRow {
    pub geo: GeoId,
    pub categories: Vec<String>,
    pub total: f64,
}

/// A count table for every geography it covers.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredTable {
    pub table_id: String,
    pub fields: Vec<String>,
    pub rows: Vec<StoredRow>,
    pub metadata: Metadata,
}

impl StoredTable {
    pub fn new<S: AsRef<str>>(table_id: impl Into<String>, fields: &[S]) -> Self {
        let table_id = table_id.into();
        Self {
            metadata: Metadata::for_table(table_id.clone()),
            table_id,
            fields: fields.iter().map(|f| f.as_ref().to_string()).collect(),
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        if self.metadata.table_id.is_none() {
            self.metadata.table_id = Some(self.table_id.clone());
        }
        self
    }

    pub fn push_row<S: AsRef<str>>(&mut self, geo: GeoId, categories: &[S], total: f64) {
        self.rows.push(StoredRow {
            geo,
            categories: categories.iter().map(|c| c.as_ref().to_string()).collect(),
            total,
        });
    }

    /// Builder form of [`push_row`](Self::push_row).
    #[must_use]
    pub fn row<S: AsRef<str>>(mut self, geo: &GeoId, categories: &[S], total: f64) -> Self {
        self.push_row(geo.clone(), categories, total);
        self
    }

    fn field_index(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == field)
    }

    /// Rows for `geo` projected onto `fields`, summed over the other fields.
    ///
    /// Combinations keep the order in which they first appear.
    ///
    /// # Errors
    ///
    /// [`SourceError::UnknownField`] when the table lacks a requested field.
    pub fn project<S: AsRef<str>>(
        &self,
        fields: &[S],
        geo: &GeoId,
    ) -> Result<Vec<CountRow>, SourceError> {
        let indexes = fields
            .iter()
            .map(|field| {
                self.field_index(field.as_ref())
                    .ok_or_else(|| SourceError::UnknownField {
                        table_id: self.table_id.clone(),
                        field: field.as_ref().to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut combined: IndexMap<Vec<String>, f64> = IndexMap::new();
        for row in self.rows.iter().filter(|row| &row.geo == geo) {
            let key: Vec<String> = indexes
                .iter()
                .map(|&index| row.categories.get(index).cloned().unwrap_or_default())
                .collect();
            *combined.entry(key).or_insert(0.0) += row.total;
        }

        Ok(combined
            .into_iter()
            .map(|(categories, total)| CountRow { categories, total })
            .collect())
    }
}

/// Count tables keyed by table id.
#[derive(Debug, Clone, Default)]
pub struct TableStore {
    tables: HashMap<String, StoredTable>,
}

impl TableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a table, replacing any table with the same id.
    pub fn insert(&mut self, table: StoredTable) {
        self.tables.insert(table.table_id.clone(), table);
    }

    #[must_use]
    pub fn with_table(mut self, table: StoredTable) -> Self {
        self.insert(table);
        self
    }

    pub fn get(&self, table_id: &str) -> Option<&StoredTable> {
        self.tables.get(table_id)
    }

    pub fn get_mut(&mut self, table_id: &str) -> Option<&mut StoredTable> {
        self.tables.get_mut(table_id)
    }

    /// Table ids in sorted order.
    pub fn table_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl CountSource for TableStore {
    fn fetch(&self, query: &CountQuery, geo: &Geography) -> Result<CountTable, SourceError> {
        let table_id = query.table_id();
        let table = self
            .get(&table_id)
            .ok_or_else(|| SourceError::UnknownTable {
                table_id: table_id.clone(),
            })?;

        if let Some(requested) = &query.dataset {
            match &table.metadata.dataset {
                Some(actual) if actual != requested => {
                    return Err(SourceError::DatasetMismatch {
                        table_id,
                        requested: requested.clone(),
                        actual: actual.clone(),
                    });
                }
                Some(_) => {}
                None => debug!(%table_id, dataset = %requested, "table has no dataset recorded"),
            }
        }

        let rows = table.project(&query.fields, &geo.id)?;
        trace!(%table_id, geo = %geo.id, rows = rows.len(), "fetched count rows");
        Ok(CountTable {
            table_id,
            fields: query.fields.clone(),
            rows,
            metadata: table.metadata.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use census_model::GeoLevel;

    fn ward(code: &str) -> GeoId {
        GeoId::new(GeoLevel::Ward, code)
    }

    fn income_by_gender() -> StoredTable {
        StoredTable::new(
            "annualhouseholdincome_genderofhouseholdhead",
            &["annual household income", "gender of household head"],
        )
        .row(&ward("1"), &["No income", "Female"], 4.0)
        .row(&ward("1"), &["R 1 - R 4800", "Female"], 2.0)
        .row(&ward("1"), &["No income", "Male"], 6.0)
        .row(&ward("2"), &["No income", "Male"], 100.0)
    }

    #[test]
    fn project_sums_over_other_fields() {
        let rows = income_by_gender()
            .project(&["annual household income"], &ward("1"))
            .unwrap();
        assert_eq!(
            rows,
            vec![
                CountRow::new(&["No income"], 10.0),
                CountRow::new(&["R 1 - R 4800"], 2.0),
            ]
        );
    }

    #[test]
    fn project_unknown_field() {
        let err = income_by_gender()
            .project(&["gender"], &ward("1"))
            .unwrap_err();
        assert!(matches!(err, SourceError::UnknownField { .. }));
    }

    #[test]
    fn fetch_checks_dataset() {
        let store = TableStore::new().with_table(
            StoredTable::new("populationgroup", &["population group"]).with_metadata(Metadata {
                dataset: Some("Census 2011".to_string()),
                ..Metadata::default()
            }),
        );
        let geo = Geography::new(ward("1"), "Ward 1", "2011");

        let ok = CountQuery::new(&["population group"]).with_dataset("Census 2011");
        assert!(store.fetch(&ok, &geo).unwrap().rows.is_empty());

        let wrong = CountQuery::new(&["population group"]).with_dataset("Community Survey 2016");
        assert!(matches!(
            store.fetch(&wrong, &geo),
            Err(SourceError::DatasetMismatch { .. })
        ));

        let missing = CountQuery::new(&["gender"]);
        assert!(matches!(
            store.fetch(&missing, &geo),
            Err(SourceError::UnknownTable { .. })
        ));
    }
}
