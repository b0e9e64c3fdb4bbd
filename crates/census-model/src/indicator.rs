use serde::{Deserialize, Serialize};

use crate::values::GeoValues;

/// Provenance of a figure: the source table and the population it covers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub universe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,
}

impl Metadata {
    pub fn for_table(table_id: impl Into<String>) -> Self {
        Self {
            table_id: Some(table_id.into()),
            ..Self::default()
        }
    }

    pub fn universe(universe: impl Into<String>) -> Self {
        Self {
            universe: Some(universe.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_universe(mut self, universe: impl Into<String>) -> Self {
        self.universe = Some(universe.into());
        self
    }
}

/// A single named statistic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub name: String,
    pub values: GeoValues,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numerators: Option<GeoValues>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Indicator {
    /// Indicator whose `this` value may be absent (no estimate).
    pub fn new(name: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            name: name.into(),
            values: GeoValues::of_optional(value),
            numerators: None,
            metadata: None,
        }
    }

    pub fn value(name: impl Into<String>, value: f64) -> Self {
        Self::new(name, Some(value))
    }

    #[must_use]
    pub fn with_numerator(mut self, numerator: f64) -> Self {
        self.numerators = Some(GeoValues::of(numerator));
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn this(&self) -> Option<f64> {
        self.values.this()
    }

    pub fn numerator(&self) -> Option<f64> {
        self.numerators.as_ref().and_then(GeoValues::this)
    }
}
