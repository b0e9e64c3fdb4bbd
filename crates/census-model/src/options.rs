//! Configuration options for profile building.

use serde::{Deserialize, Serialize};

/// How aggregators treat a required category that is absent from the data
/// (e.g. no "Female" household heads recorded for a geography).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryMatching {
    /// Fail the profile with a missing-category error.
    #[default]
    Strict,
    /// Count the category as zero and log a warning.
    Lenient,
}

/// Options controlling profile building.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileOptions {
    pub category_matching: CategoryMatching,

    /// Collapse long-tail distributions (languages, dwelling types, ...) into
    /// their largest categories plus "Other".
    pub group_remainder: bool,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            category_matching: CategoryMatching::Strict,
            group_remainder: true,
        }
    }
}

impl ProfileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that zero-fill missing categories instead of failing.
    pub fn lenient() -> Self {
        Self {
            category_matching: CategoryMatching::Lenient,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_category_matching(mut self, matching: CategoryMatching) -> Self {
        self.category_matching = matching;
        self
    }

    #[must_use]
    pub fn with_group_remainder(mut self, enable: bool) -> Self {
        self.group_remainder = enable;
        self
    }
}
