//! Census profile aggregation.
//!
//! Section aggregators turn raw category counts into profile sections
//! (demographics, economics, service delivery, education, households,
//! children, child-headed households and crime). The [`ProfileBuilder`]
//! runs them for a geography and its comparative geographies and merges the
//! results into one [`Profile`](census_model::Profile).

pub mod aggregator;
pub mod builder;
pub mod context;
pub mod error;
pub mod section;
mod sections;

pub use aggregator::{
    AggregateFn, AggregatorRegistry, FunctionAggregator, SectionAggregator, default_registry,
};
pub use builder::{GeoProfile, ProfileBuilder, REMAINDER_GROUPS, apply_remainder_groups};
pub use context::ProfileContext;
pub use error::{ProfileError, Result};
pub use section::ProfileSection;
