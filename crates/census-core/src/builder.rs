//! Profile builder: runs section aggregators for a geography and its
//! comparative geographies, merges them and tidies long distributions.

use census_model::{CountSource, GeoHierarchy, Geography, Profile, ProfileOptions};
use census_transform::group_remainder;
use serde::Serialize;
use tracing::{debug, error, info, info_span};

use crate::aggregator::{AggregatorRegistry, default_registry};
use crate::context::ProfileContext;
use crate::error::{ProfileError, Result};
use crate::section::ProfileSection;

/// Distributions collapsed to their largest categories plus "Other" once
/// comparative figures are merged: (section, key, categories kept). A
/// distribution with one category more than it keeps is left as is.
pub const REMAINDER_GROUPS: &[(ProfileSection, &str, usize)] = &[
    (ProfileSection::ServiceDelivery, "water_source_distribution", 4),
    (ProfileSection::ServiceDelivery, "refuse_disposal_distribution", 4),
    (ProfileSection::ServiceDelivery, "toilet_facilities_distribution", 4),
    (ProfileSection::Demographics, "language_distribution", 6),
    (ProfileSection::Demographics, "province_of_birth_distribution", 6),
    (ProfileSection::Demographics, "region_of_birth_distribution", 4),
    (ProfileSection::Households, "type_of_dwelling_distribution", 4),
    (ProfileSection::ChildHouseholds, "type_of_dwelling_distribution", 4),
];

/// A built profile with the geographies it covers.
#[derive(Debug, Clone, Serialize)]
pub struct GeoProfile {
    pub geography: Geography,
    /// Comparative geographies, nearest first.
    pub comparatives: Vec<Geography>,
    pub profile: Profile,
}

/// Builds profiles from a count source and a geography hierarchy.
pub struct ProfileBuilder<'a> {
    source: &'a dyn CountSource,
    hierarchy: &'a dyn GeoHierarchy,
    registry: &'a AggregatorRegistry,
    options: ProfileOptions,
    sections: Option<Vec<ProfileSection>>,
}

impl<'a> ProfileBuilder<'a> {
    pub fn new(source: &'a dyn CountSource, hierarchy: &'a dyn GeoHierarchy) -> Self {
        Self {
            source,
            hierarchy,
            registry: default_registry(),
            options: ProfileOptions::default(),
            sections: None,
        }
    }

    #[must_use]
    pub fn with_registry(mut self, registry: &'a AggregatorRegistry) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: ProfileOptions) -> Self {
        self.options = options;
        self
    }

    /// Restricts the profile to `sections`. Output keeps the standard order.
    #[must_use]
    pub fn with_sections(mut self, sections: &[ProfileSection]) -> Self {
        self.sections = Some(sections.to_vec());
        self
    }

    pub fn options(&self) -> &ProfileOptions {
        &self.options
    }

    /// Sections built for `geo`, in output order.
    pub fn sections_for(&self, geo: &Geography) -> Vec<ProfileSection> {
        ProfileSection::ALL
            .into_iter()
            .filter(|section| {
                self.sections
                    .as_ref()
                    .is_none_or(|selected| selected.contains(section))
            })
            .filter(|section| section.applies_to(geo.geo_level()))
            .collect()
    }

    /// Builds the profile of `geo`.
    ///
    /// Every section is aggregated for `geo` and then for each comparative
    /// geography; comparative figures are merged under the comparative
    /// geography's level. Any failure aborts the whole profile.
    pub fn build(&self, geo: &Geography) -> Result<GeoProfile> {
        let _span = info_span!("profile", geo = %geo.id).entered();
        let comparatives = self.hierarchy.comparative_geos(geo)?;
        let context = ProfileContext::new(self.source, &self.options);

        let mut profile = Profile::new();
        for section in self.sections_for(geo) {
            let _section_span = info_span!("section", section = section.as_str()).entered();
            let aggregator = self
                .registry
                .get(section)
                .ok_or(ProfileError::NoAggregator(section))?;

            let mut data = aggregator.aggregate(geo, &context)?;
            for comparative in &comparatives {
                let other = aggregator.aggregate(comparative, &context)?;
                let level = comparative.geo_level();
                data.merge_comparative(&other, level.as_str())
                    .map_err(|source| {
                        error!(
                            geo = %geo.id,
                            comparative = %comparative.id,
                            section = section.as_str(),
                            error = %source,
                            "comparative profile does not match"
                        );
                        ProfileError::Merge {
                            geo_id: geo.geoid(),
                            section: section.as_str().to_string(),
                            comparative_geo_id: comparative.geoid(),
                            source,
                        }
                    })?;
                debug!(comparative = %comparative.id, "merged comparative figures");
            }
            profile.insert_section(section.as_str(), data);
        }

        if self.options.group_remainder {
            apply_remainder_groups(&mut profile);
        }

        info!(sections = profile.len(), comparatives = comparatives.len(), "profile built");
        Ok(GeoProfile {
            geography: geo.clone(),
            comparatives,
            profile,
        })
    }
}

/// Applies [`REMAINDER_GROUPS`] to the sections present in `profile`.
pub fn apply_remainder_groups(profile: &mut Profile) {
    for &(section, key, keep) in REMAINDER_GROUPS {
        if let Some(data) = profile.section_mut(section.as_str())
            && let Some(distribution) = data.distribution_mut(key)
        {
            group_remainder(distribution, keep);
        }
    }
}
