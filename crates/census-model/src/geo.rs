//! Geography descriptors and the hierarchy seam used to find comparative
//! geographies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Census release whose boundaries and income bands follow the 2011 schema.
pub const CENSUS_2011: &str = "2011";

/// Level of a geography in the census hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoLevel {
    Country,
    Province,
    District,
    Municipality,
    Ward,
}

impl GeoLevel {
    pub const ALL: [GeoLevel; 5] = [
        GeoLevel::Country,
        GeoLevel::Province,
        GeoLevel::District,
        GeoLevel::Municipality,
        GeoLevel::Ward,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GeoLevel::Country => "country",
            GeoLevel::Province => "province",
            GeoLevel::District => "district",
            GeoLevel::Municipality => "municipality",
            GeoLevel::Ward => "ward",
        }
    }
}

impl fmt::Display for GeoLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeoLevel {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self> {
        let key = value.trim();
        GeoLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| ModelError::UnknownGeoLevel(value.to_string()))
    }
}

/// Identity of a geography: its level plus the code unique within that level.
///
/// The display form is `<level>-<code>`, e.g. `province-WC`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GeoId {
    pub level: GeoLevel,
    pub code: String,
}

impl GeoId {
    pub fn new(level: GeoLevel, code: impl Into<String>) -> Self {
        Self {
            level,
            code: code.into(),
        }
    }
}

impl fmt::Display for GeoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.level, self.code)
    }
}

impl FromStr for GeoId {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self> {
        let (level, code) = value
            .trim()
            .split_once('-')
            .ok_or_else(|| ModelError::InvalidGeoId(value.to_string()))?;
        if code.is_empty() {
            return Err(ModelError::InvalidGeoId(value.to_string()));
        }
        Ok(Self::new(level.parse()?, code))
    }
}

/// A census geography.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geography {
    #[serde(flatten)]
    pub id: GeoId,
    pub name: String,
    /// Census release the boundaries belong to ("2011", "2016", ...).
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub square_kms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<GeoId>,
}

impl Geography {
    pub fn new(id: GeoId, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            version: version.into(),
            square_kms: None,
            parent: None,
        }
    }

    #[must_use]
    pub fn with_square_kms(mut self, square_kms: f64) -> Self {
        self.square_kms = Some(square_kms);
        self
    }

    #[must_use]
    pub fn with_parent(mut self, parent: GeoId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn geo_level(&self) -> GeoLevel {
        self.id.level
    }

    pub fn geo_code(&self) -> &str {
        &self.id.code
    }

    pub fn geoid(&self) -> String {
        self.id.to_string()
    }

    /// True when the geography uses the 2011 release schema (monthly
    /// individual income bands, electricity questions).
    pub fn is_census_2011(&self) -> bool {
        self.version.trim() == CENSUS_2011
    }
}

/// Source of comparative (containing) geographies.
pub trait GeoHierarchy {
    /// Returns the geographies `geo` is compared against, nearest first.
    fn comparative_geos(&self, geo: &Geography) -> Result<Vec<Geography>>;
}

/// Hierarchy with no comparisons; every profile stands alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoComparisons;

impl GeoHierarchy for NoComparisons {
    fn comparative_geos(&self, _geo: &Geography) -> Result<Vec<Geography>> {
        Ok(Vec::new())
    }
}
