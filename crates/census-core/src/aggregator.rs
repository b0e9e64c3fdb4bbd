//! Section aggregator trait and registry.
//!
//! Each profile section is produced by a [`SectionAggregator`]. The
//! [`AggregatorRegistry`] maps sections to aggregators; the profile builder
//! dispatches through it, so a section can be replaced (e.g. with a fixture
//! in tests) without touching the builder.
//!
//! # Example
//!
//! ```ignore
//! use census_core::{ProfileSection, default_registry};
//!
//! let aggregator = default_registry().get(ProfileSection::Households)?;
//! let section = aggregator.aggregate(&geo, &context)?;
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use census_model::{Geography, Section};

use crate::context::ProfileContext;
use crate::error::Result;
use crate::section::ProfileSection;
use crate::sections;

/// Computes one profile section for one geography.
///
/// Aggregators are pure functions of the geography and the data source: the
/// builder calls them once for the profiled geography and once for each
/// comparative geography, and merges the results.
pub trait SectionAggregator: Send + Sync {
    /// The section this aggregator produces.
    fn section(&self) -> ProfileSection;

    fn description(&self) -> &'static str {
        "Section aggregator"
    }

    /// Builds the section for `geo`.
    ///
    /// # Errors
    ///
    /// Source and transform failures, and missing categories under the strict
    /// matching policy.
    fn aggregate(&self, geo: &Geography, context: &ProfileContext<'_>) -> Result<Section>;
}

/// Registry of section aggregators indexed by section.
#[derive(Default)]
pub struct AggregatorRegistry {
    aggregators: HashMap<ProfileSection, Box<dyn SectionAggregator>>,
}

impl AggregatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an aggregator for its section, replacing any previous one.
    pub fn register(&mut self, aggregator: Box<dyn SectionAggregator>) {
        self.aggregators.insert(aggregator.section(), aggregator);
    }

    pub fn get(&self, section: ProfileSection) -> Option<&dyn SectionAggregator> {
        self.aggregators.get(&section).map(|a| a.as_ref())
    }

    pub fn len(&self) -> usize {
        self.aggregators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aggregators.is_empty()
    }

    /// Registered sections in output order.
    pub fn sections(&self) -> Vec<ProfileSection> {
        ProfileSection::ALL
            .into_iter()
            .filter(|section| self.aggregators.contains_key(section))
            .collect()
    }
}

/// Cached default registry with all standard aggregators.
static DEFAULT_REGISTRY: OnceLock<AggregatorRegistry> = OnceLock::new();

/// Returns the registry holding an aggregator for every [`ProfileSection`].
pub fn default_registry() -> &'static AggregatorRegistry {
    DEFAULT_REGISTRY.get_or_init(build_default_registry)
}

fn build_default_registry() -> AggregatorRegistry {
    let mut registry = AggregatorRegistry::new();
    registry.register(Box::new(FunctionAggregator::new(
        ProfileSection::Demographics,
        "Population, language, age, citizenship and migration",
        sections::demographics::aggregate,
    )));
    registry.register(Box::new(FunctionAggregator::new(
        ProfileSection::Economics,
        "Individual income, employment, sector and internet access",
        sections::economics::aggregate,
    )));
    registry.register(Box::new(FunctionAggregator::new(
        ProfileSection::ServiceDelivery,
        "Water, refuse disposal, sanitation and electricity",
        sections::service_delivery::aggregate,
    )));
    registry.register(Box::new(FunctionAggregator::new(
        ProfileSection::Education,
        "Educational attainment of adults",
        sections::education::aggregate,
    )));
    registry.register(Box::new(FunctionAggregator::new(
        ProfileSection::Households,
        "Household heads, tenure, dwellings, goods and income",
        sections::households::aggregate,
    )));
    registry.register(Box::new(FunctionAggregator::new(
        ProfileSection::Children,
        "Children's demographics, schooling and employment",
        sections::children::aggregate,
    )));
    registry.register(Box::new(FunctionAggregator::new(
        ProfileSection::ChildHouseholds,
        "Households headed by children",
        sections::child_households::aggregate,
    )));
    registry.register(Box::new(FunctionAggregator::new(
        ProfileSection::Crime,
        "Crimes against children",
        sections::crime::aggregate,
    )));
    registry
}

/// Signature of a function-based aggregator.
pub type AggregateFn = fn(&Geography, &ProfileContext<'_>) -> Result<Section>;

/// Adapts an aggregation function to the [`SectionAggregator`] trait.
pub struct FunctionAggregator {
    section: ProfileSection,
    description: &'static str,
    aggregate_fn: AggregateFn,
}

impl FunctionAggregator {
    pub fn new(section: ProfileSection, description: &'static str, aggregate_fn: AggregateFn) -> Self {
        Self {
            section,
            description,
            aggregate_fn,
        }
    }
}

impl SectionAggregator for FunctionAggregator {
    fn section(&self) -> ProfileSection {
        self.section
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn aggregate(&self, geo: &Geography, context: &ProfileContext<'_>) -> Result<Section> {
        (self.aggregate_fn)(geo, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_has_all_sections() {
        let registry = default_registry();
        assert_eq!(registry.len(), ProfileSection::ALL.len());
        for section in ProfileSection::ALL {
            let aggregator = registry.get(section).expect("registered");
            assert_eq!(aggregator.section(), section);
        }
        assert_eq!(registry.sections(), ProfileSection::ALL.to_vec());
    }

    #[test]
    fn register_replaces() {
        fn empty(_geo: &Geography, _context: &ProfileContext<'_>) -> Result<Section> {
            Ok(Section::new())
        }
        let mut registry = AggregatorRegistry::new();
        registry.register(Box::new(FunctionAggregator::new(
            ProfileSection::Crime,
            "first",
            empty,
        )));
        registry.register(Box::new(FunctionAggregator::new(
            ProfileSection::Crime,
            "second",
            empty,
        )));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get(ProfileSection::Crime).map(|a| a.description()),
            Some("second")
        );
        assert_eq!(registry.sections(), vec![ProfileSection::Crime]);
    }
}
