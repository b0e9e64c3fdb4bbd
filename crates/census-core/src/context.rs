//! Per-request context handed to section aggregators.

use census_model::{
    CategoryMatching, CountQuery, CountSource, CountTable, Distribution, Geography,
    ProfileOptions,
};
use census_transform::{StatData, StatQuery, get_stat_data};
use tracing::warn;

use crate::error::{ProfileError, Result};

/// Data source and options shared by every aggregator of one request.
pub struct ProfileContext<'a> {
    pub source: &'a dyn CountSource,
    pub options: &'a ProfileOptions,
}

impl<'a> ProfileContext<'a> {
    pub fn new(source: &'a dyn CountSource, options: &'a ProfileOptions) -> Self {
        Self { source, options }
    }

    /// Runs a stat query for `geo`.
    pub fn stat(&self, geo: &Geography, query: &StatQuery) -> Result<StatData> {
        Ok(get_stat_data(self.source, geo, query)?)
    }

    /// Raw count rows for `geo`, for aggregations spanning several fields.
    pub fn rows(&self, geo: &Geography, query: &CountQuery) -> Result<CountTable> {
        Ok(self.source.fetch(query, geo)?)
    }

    /// Resolves a figure the aggregation cannot do without.
    ///
    /// A present value is returned as is. An absent one fails the request
    /// under [`CategoryMatching::Strict`] and counts as zero under
    /// [`CategoryMatching::Lenient`].
    pub fn require(
        &self,
        geo: &Geography,
        field: &str,
        category: &str,
        value: Option<f64>,
    ) -> Result<f64> {
        if let Some(value) = value {
            return Ok(value);
        }
        match self.options.category_matching {
            CategoryMatching::Strict => Err(ProfileError::MissingCategory {
                geo_id: geo.geoid(),
                field: field.to_string(),
                category: category.to_string(),
            }),
            CategoryMatching::Lenient => {
                warn!(geo = %geo.id, field, category, "missing category counted as zero");
                Ok(0.0)
            }
        }
    }

    /// Count of `category` in `dist`, resolved through [`require`](Self::require).
    pub fn require_count(
        &self,
        geo: &Geography,
        dist: &Distribution,
        field: &str,
        category: &str,
    ) -> Result<f64> {
        self.require(geo, field, category, dist.count(category))
    }
}
