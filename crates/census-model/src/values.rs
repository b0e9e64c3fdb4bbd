use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Key under which a geography's own figure is stored.
pub const THIS: &str = "this";

/// Figures keyed by geography: `this` for the profiled geography, then one
/// entry per comparative geography level (`province`, `country`, ...).
///
/// A `None` figure means no estimate is available and serializes as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeoValues(IndexMap<String, Option<f64>>);

impl GeoValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values holding only `this`.
    pub fn of(value: f64) -> Self {
        Self::of_optional(Some(value))
    }

    pub fn of_optional(value: Option<f64>) -> Self {
        let mut values = Self::new();
        values.set(THIS, value);
        values
    }

    pub fn this(&self) -> Option<f64> {
        self.get(THIS)
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied().flatten()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: Option<f64>) {
        self.0.insert(key.into(), value);
    }

    /// Adds `amount` to the figure under `key`, creating it at zero.
    /// An absent `amount` leaves the figure untouched.
    pub fn add(&mut self, key: &str, amount: Option<f64>) {
        let Some(amount) = amount else {
            return;
        };
        let slot = self.0.entry(key.to_string()).or_insert(Some(0.0));
        *slot = Some(slot.unwrap_or(0.0) + amount);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> + '_ {
        self.0.iter().map(|(key, value)| (key.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
