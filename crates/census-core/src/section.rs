use std::fmt;
use std::str::FromStr;

use census_model::GeoLevel;
use serde::{Deserialize, Serialize};

/// A profile section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileSection {
    Demographics,
    Economics,
    ServiceDelivery,
    Education,
    Households,
    Children,
    ChildHouseholds,
    Crime,
}

impl ProfileSection {
    /// Sections in output order.
    pub const ALL: [ProfileSection; 8] = [
        ProfileSection::Demographics,
        ProfileSection::Economics,
        ProfileSection::ServiceDelivery,
        ProfileSection::Education,
        ProfileSection::Households,
        ProfileSection::Children,
        ProfileSection::ChildHouseholds,
        ProfileSection::Crime,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileSection::Demographics => "demographics",
            ProfileSection::Economics => "economics",
            ProfileSection::ServiceDelivery => "service_delivery",
            ProfileSection::Education => "education",
            ProfileSection::Households => "households",
            ProfileSection::Children => "children",
            ProfileSection::ChildHouseholds => "child_households",
            ProfileSection::Crime => "crime",
        }
    }

    /// Crime statistics are only published for the country and provinces.
    pub fn applies_to(self, level: GeoLevel) -> bool {
        match self {
            ProfileSection::Crime => matches!(level, GeoLevel::Country | GeoLevel::Province),
            _ => true,
        }
    }
}

impl fmt::Display for ProfileSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileSection {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let key = value.trim().replace('-', "_");
        ProfileSection::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(&key))
            .ok_or_else(|| format!("unknown profile section: {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crime_only_for_country_and_province() {
        assert!(ProfileSection::Crime.applies_to(GeoLevel::Province));
        assert!(!ProfileSection::Crime.applies_to(GeoLevel::Ward));
        assert!(ProfileSection::Households.applies_to(GeoLevel::Ward));
    }

    #[test]
    fn parse_accepts_dashes() {
        assert_eq!(
            "child-households".parse::<ProfileSection>(),
            Ok(ProfileSection::ChildHouseholds)
        );
        assert!("elections".parse::<ProfileSection>().is_err());
    }
}
