//! Data model for census profiles.
//!
//! A [`Profile`] is built fresh per request from raw category counts supplied
//! by a [`CountSource`]. Every statistic is an [`Indicator`] or a
//! [`Distribution`] whose figures are keyed by geography (`this`, then the
//! levels of the comparative geographies).

pub mod distribution;
pub mod error;
pub mod geo;
pub mod indicator;
pub mod options;
pub mod profile;
pub mod source;
pub mod values;

pub use distribution::{CategoryCount, Distribution};
pub use error::{ModelError, Result};
pub use geo::{CENSUS_2011, GeoHierarchy, GeoId, GeoLevel, Geography, NoComparisons};
pub use indicator::{Indicator, Metadata};
pub use options::{CategoryMatching, ProfileOptions};
pub use profile::{Profile, ProfileNode, Section};
pub use source::{CountQuery, CountRow, CountSource, CountTable, SourceError, default_table_id};
pub use values::{GeoValues, THIS};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geo_id_round_trips_through_display() {
        let id: GeoId = "municipality-CPT".parse().expect("parse geo id");
        assert_eq!(id.level, GeoLevel::Municipality);
        assert_eq!(id.code, "CPT");
        assert_eq!(id.to_string(), "municipality-CPT");
    }

    #[test]
    fn geo_id_rejects_bad_input() {
        assert!(matches!(
            "WC".parse::<GeoId>(),
            Err(ModelError::InvalidGeoId(_))
        ));
        assert!(matches!(
            "planet-EARTH".parse::<GeoId>(),
            Err(ModelError::UnknownGeoLevel(_))
        ));
    }

    #[test]
    fn default_table_ids() {
        assert_eq!(default_table_id(&["population group"]), "populationgroup");
        assert_eq!(
            default_table_id(&["mother alive", "father alive"]),
            "motheralive_fatheralive"
        );
    }
}
