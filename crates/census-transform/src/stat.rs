//! Stat queries: fetch one field's counts for a geography and turn them into
//! a [`Distribution`] with a total.

use census_model::{CountQuery, CountRow, CountSource, Distribution, Geography, Metadata};
use census_recode::Recode;
use tracing::debug;

use crate::collapse::collapse;
use crate::error::{Result, TransformError};
use crate::percent::{set_count_values, set_percent_values};

/// Row ordering applied before recoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatOrder {
    /// As the source returns them.
    #[default]
    Source,
    /// Largest count first.
    TotalDescending,
    /// Category label ascending.
    Label,
}

/// Description of a single-field stat query.
#[derive(Debug, Clone)]
pub struct StatQuery {
    pub field: String,
    pub table_id: Option<String>,
    pub dataset: Option<String>,
    /// Keep only these raw labels.
    pub only: Option<Vec<String>>,
    /// Drop these raw labels.
    pub exclude: Vec<String>,
    pub exclude_zero: bool,
    pub order: StatOrder,
    pub recode: Option<Recode>,
    pub key_order: Option<Vec<String>>,
    /// Overrides the sum of the filtered rows.
    pub total: Option<f64>,
    /// When false, category values are the raw counts.
    pub percent: bool,
}

impl StatQuery {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            table_id: None,
            dataset: None,
            only: None,
            exclude: Vec::new(),
            exclude_zero: false,
            order: StatOrder::Source,
            recode: None,
            key_order: None,
            total: None,
            percent: true,
        }
    }

    #[must_use]
    pub fn table(mut self, table_id: impl Into<String>) -> Self {
        self.table_id = Some(table_id.into());
        self
    }

    #[must_use]
    pub fn dataset(mut self, dataset: impl Into<String>) -> Self {
        self.dataset = Some(dataset.into());
        self
    }

    #[must_use]
    pub fn only<S: AsRef<str>>(mut self, labels: &[S]) -> Self {
        self.only = Some(labels.iter().map(|l| l.as_ref().to_string()).collect());
        self
    }

    #[must_use]
    pub fn exclude<S: AsRef<str>>(mut self, labels: &[S]) -> Self {
        self.exclude = labels.iter().map(|l| l.as_ref().to_string()).collect();
        self
    }

    #[must_use]
    pub fn exclude_zero(mut self) -> Self {
        self.exclude_zero = true;
        self
    }

    #[must_use]
    pub fn order_by_total(mut self) -> Self {
        self.order = StatOrder::TotalDescending;
        self
    }

    #[must_use]
    pub fn order_by_label(mut self) -> Self {
        self.order = StatOrder::Label;
        self
    }

    #[must_use]
    pub fn recode(mut self, recode: impl Into<Recode>) -> Self {
        self.recode = Some(recode.into());
        self
    }

    #[must_use]
    pub fn key_order<S: AsRef<str>>(mut self, order: &[S]) -> Self {
        self.key_order = Some(order.iter().map(|k| k.as_ref().to_string()).collect());
        self
    }

    #[must_use]
    pub fn total(mut self, total: f64) -> Self {
        self.total = Some(total);
        self
    }

    #[must_use]
    pub fn without_percent(mut self) -> Self {
        self.percent = false;
        self
    }

    pub fn to_count_query(&self) -> CountQuery {
        let mut query = CountQuery::new(&[self.field.as_str()]);
        query.table_id.clone_from(&self.table_id);
        query.dataset.clone_from(&self.dataset);
        query
    }

    fn keeps(&self, row: &CountRow, label: &str) -> bool {
        if self.exclude_zero && row.total == 0.0 {
            return false;
        }
        if let Some(only) = &self.only
            && !only.iter().any(|l| l == label)
        {
            return false;
        }
        !self.exclude.iter().any(|l| l == label)
    }
}

/// Result of a stat query.
#[derive(Debug, Clone, PartialEq)]
pub struct StatData {
    pub distribution: Distribution,
    pub total: f64,
}

/// Runs `query` for `geo` against `source`.
///
/// Rows are filtered (`only`, `exclude`, `exclude_zero`) on their raw labels,
/// ordered, then recoded with colliding labels summed. The total is the sum
/// of the filtered rows unless the query supplies one. Category values are
/// percentages of that total, or raw counts when percentages are disabled.
/// The distribution carries the table's metadata.
///
/// # Errors
///
/// Source failures, a table returning the wrong number of fields, and
/// exhaustive recode misses.
pub fn get_stat_data(
    source: &dyn CountSource,
    geo: &Geography,
    query: &StatQuery,
) -> Result<StatData> {
    let table = source.fetch(&query.to_count_query(), geo)?;
    if table.fields.len() != 1 {
        return Err(TransformError::FieldCount {
            table_id: table.table_id,
            expected: 1,
            found: table.fields.len(),
        });
    }

    let mut rows: Vec<(&str, f64)> = table
        .rows
        .iter()
        .filter_map(|row| {
            let label = row.category(0)?;
            query.keeps(row, label).then_some((label, row.total))
        })
        .collect();
    match query.order {
        StatOrder::Source => {}
        StatOrder::TotalDescending => rows.sort_by(|a, b| b.1.total_cmp(&a.1)),
        StatOrder::Label => rows.sort_by(|a, b| a.0.cmp(b.0)),
    }

    let total = query
        .total
        .unwrap_or_else(|| rows.iter().map(|(_, count)| count).sum());

    let mut distribution = Distribution::from_counts(rows.iter().copied());
    if let Some(recode) = &query.recode {
        distribution = collapse(&distribution, recode, &query.field, query.key_order.as_deref())?;
    } else if let Some(order) = &query.key_order {
        distribution.reorder(order);
    }

    if query.percent {
        set_percent_values(&mut distribution, total);
    } else {
        set_count_values(&mut distribution);
    }
    distribution.set_metadata(Some(table_metadata(&table.table_id, &table.metadata)));

    debug!(
        table_id = %table.table_id,
        field = %query.field,
        geo = %geo.id,
        categories = distribution.len(),
        total,
        "stat query"
    );
    Ok(StatData {
        distribution,
        total,
    })
}

/// Metadata of a count table, or just its id when the table carried none.
pub fn table_metadata(table_id: &str, metadata: &Metadata) -> Metadata {
    let mut metadata = metadata.clone();
    if metadata.table_id.is_none() {
        metadata.table_id = Some(table_id.to_string());
    }
    metadata
}

#[cfg(test)]
mod tests {
    use super::*;
    use census_model::{CountTable, GeoId, GeoLevel, SourceError};
    use census_recode::income::MONTHLY_INCOME;

    struct OneTable(Vec<CountRow>);

    impl CountSource for OneTable {
        fn fetch(
            &self,
            query: &CountQuery,
            _geo: &Geography,
        ) -> std::result::Result<CountTable, SourceError> {
            Ok(CountTable {
                table_id: query.table_id(),
                fields: query.fields.clone(),
                rows: self.0.clone(),
                metadata: Metadata::universe("Employed individuals"),
            })
        }
    }

    fn geo() -> Geography {
        Geography::new(GeoId::new(GeoLevel::Ward, "1"), "Ward 1", "2011")
    }

    fn income_source() -> OneTable {
        OneTable(vec![
            CountRow::new(&["No income"], 10.0),
            CountRow::new(&["R 102 401 - R 204 800"], 2.0),
            CountRow::new(&["Not applicable"], 50.0),
            CountRow::new(&["R 204 801 or more"], 3.0),
            CountRow::new(&["R 1 - R 400"], 0.0),
        ])
    }

    #[test]
    fn exclude_recode_and_order() {
        let query = StatQuery::new("employed individual monthly income")
            .exclude(&["Not applicable"])
            .exclude_zero()
            .recode(&MONTHLY_INCOME)
            .key_order(&MONTHLY_INCOME.target_order());
        let data = get_stat_data(&income_source(), &geo(), &query).expect("stat data");
        assert_eq!(data.total, 15.0);
        assert_eq!(
            data.distribution.keys().collect::<Vec<_>>(),
            vec!["R0", "Over R102k"]
        );
        let over = data.distribution.get("Over R102k").expect("top band");
        assert_eq!(over.count(), 5.0);
        assert_eq!(over.values.this(), Some(33.33));
        let metadata = data.distribution.metadata().expect("metadata");
        assert_eq!(
            metadata.table_id.as_deref(),
            Some("employedindividualmonthlyincome")
        );
        assert_eq!(metadata.universe.as_deref(), Some("Employed individuals"));
    }

    #[test]
    fn only_without_percent() {
        let query = StatQuery::new("income")
            .only(&["No income"])
            .without_percent();
        let data = get_stat_data(&income_source(), &geo(), &query).expect("stat data");
        assert_eq!(data.total, 10.0);
        let entry = data.distribution.get("No income").expect("entry");
        assert_eq!(entry.values.this(), Some(10.0));
    }

    #[test]
    fn total_descending_then_explicit_total() {
        let query = StatQuery::new("income").order_by_total().total(200.0);
        let data = get_stat_data(&income_source(), &geo(), &query).expect("stat data");
        assert_eq!(data.distribution.first().map(|(k, _)| k), Some("Not applicable"));
        assert_eq!(data.total, 200.0);
        assert_eq!(
            data.distribution.get("Not applicable").and_then(|e| e.values.this()),
            Some(25.0)
        );
    }

    #[test]
    fn table_metadata_keeps_existing_id() {
        let named = table_metadata("tenurestatus", &Metadata::for_table("tenure"));
        assert_eq!(named.table_id.as_deref(), Some("tenure"));

        let bare = table_metadata("tenurestatus", &Metadata::universe("Households"));
        assert_eq!(bare.table_id.as_deref(), Some("tenurestatus"));
        assert_eq!(bare.universe.as_deref(), Some("Households"));
    }
}
