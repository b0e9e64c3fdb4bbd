//! Category distributions: ordered category → count mappings with derived
//! percentages.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::indicator::{Indicator, Metadata};
use crate::values::{GeoValues, THIS};

/// One category of a distribution.
///
/// `numerators` holds raw counts and `values` the derived figure (usually a
/// percentage of the distribution total).
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub numerators: GeoValues,
    pub values: GeoValues,
}

impl CategoryCount {
    pub fn new(name: impl Into<String>, count: f64) -> Self {
        Self {
            name: name.into(),
            numerators: GeoValues::of(count),
            values: GeoValues::new(),
        }
    }

    /// Count for the profiled geography; zero when not recorded.
    pub fn count(&self) -> f64 {
        self.numerators.this().unwrap_or(0.0)
    }

    pub fn add(&mut self, amount: f64) {
        self.numerators.add(THIS, Some(amount));
    }

    /// Adds every figure of `other` into this category, key by key.
    pub fn absorb(&mut self, other: &CategoryCount) {
        for (key, value) in other.numerators.iter() {
            self.numerators.add(key, value);
        }
        for (key, value) in other.values.iter() {
            self.values.add(key, value);
        }
    }
}

impl From<CategoryCount> for Indicator {
    fn from(entry: CategoryCount) -> Self {
        Indicator {
            name: entry.name,
            values: entry.values,
            numerators: Some(entry.numerators),
            metadata: None,
        }
    }
}

/// Ordered mapping of category label to [`CategoryCount`].
///
/// Iteration order is display order. Adding to an existing category sums the
/// counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution {
    categories: IndexMap<String, CategoryCount>,
    metadata: Option<Metadata>,
}

impl Distribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a distribution from `(label, count)` pairs in order.
    pub fn from_counts<I, S>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut distribution = Self::new();
        for (label, count) in counts {
            distribution.add(label.as_ref(), count);
        }
        distribution
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    pub fn set_metadata(&mut self, metadata: Option<Metadata>) {
        self.metadata = metadata;
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Adds `count` to `category`, appending the category if unseen.
    pub fn add(&mut self, category: &str, count: f64) {
        match self.categories.get_mut(category) {
            Some(entry) => entry.add(count),
            None => {
                self.categories
                    .insert(category.to_string(), CategoryCount::new(category, count));
            }
        }
    }

    /// Inserts or replaces the entry stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, entry: CategoryCount) {
        self.categories.insert(key.into(), entry);
    }

    pub fn remove(&mut self, key: &str) -> Option<CategoryCount> {
        self.categories.shift_remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&CategoryCount> {
        self.categories.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut CategoryCount> {
        self.categories.get_mut(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.categories.contains_key(key)
    }

    /// Count recorded for `key`, if the category is present.
    pub fn count(&self, key: &str) -> Option<f64> {
        self.categories.get(key).map(CategoryCount::count)
    }

    /// Sum of all category counts.
    pub fn total(&self) -> f64 {
        self.categories.values().map(CategoryCount::count).sum()
    }

    /// Sum of the counts whose label satisfies `predicate`.
    pub fn sum_where(&self, predicate: impl Fn(&str) -> bool) -> f64 {
        self.categories
            .iter()
            .filter(|(key, _)| predicate(key))
            .map(|(_, entry)| entry.count())
            .sum()
    }

    pub fn first(&self) -> Option<(&str, &CategoryCount)> {
        self.categories
            .first()
            .map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryCount)> + '_ {
        self.categories
            .iter()
            .map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut CategoryCount)> + '_ {
        self.categories
            .iter_mut()
            .map(|(key, entry)| (key.as_str(), entry))
    }

    /// Removes and returns every category in display order, keeping metadata.
    pub fn drain(&mut self) -> Vec<(String, CategoryCount)> {
        std::mem::take(&mut self.categories).into_iter().collect()
    }

    /// Reorders categories so those named in `order` come first, in that
    /// order. Names absent from the data are skipped; categories not named
    /// keep their relative order after the ordered ones.
    pub fn reorder<S: AsRef<str>>(&mut self, order: &[S]) {
        let mut remaining = std::mem::take(&mut self.categories);
        let mut ordered = IndexMap::with_capacity(remaining.len());
        for key in order {
            if let Some((key, entry)) = remaining.shift_remove_entry(key.as_ref()) {
                ordered.insert(key, entry);
            }
        }
        ordered.extend(remaining);
        self.categories = ordered;
    }
}

impl Serialize for Distribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extra = usize::from(self.metadata.is_some());
        let mut map = serializer.serialize_map(Some(self.categories.len() + extra))?;
        for (key, entry) in &self.categories {
            map.serialize_entry(key, entry)?;
        }
        if let Some(metadata) = &self.metadata {
            map.serialize_entry("metadata", metadata)?;
        }
        map.end()
    }
}
