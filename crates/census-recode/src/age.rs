//! Age bands.

use crate::table::RecodeTable;

/// Five-year census age groups collapsed into ten-year bands.
pub static AGE_GROUPS: RecodeTable = RecodeTable::new(
    "age_groups",
    &[
        ("00 - 04", "0-9"),
        ("05 - 09", "0-9"),
        ("10 - 14", "10-19"),
        ("15 - 19", "10-19"),
        ("20 - 24", "20-29"),
        ("25 - 29", "20-29"),
        ("30 - 34", "30-39"),
        ("35 - 39", "30-39"),
        ("40 - 44", "40-49"),
        ("45 - 49", "40-49"),
        ("50 - 54", "50-59"),
        ("55 - 59", "50-59"),
        ("60 - 64", "60-69"),
        ("65 - 69", "60-69"),
        ("70 - 74", "70-79"),
        ("75 - 79", "70-79"),
        ("80 - 84", "80+"),
        ("85+", "80+"),
    ],
);

pub const AGE_GROUP_ORDER: &[&str] = &[
    "0-9", "10-19", "20-29", "30-39", "40-49", "50-59", "60-69", "70-79", "80+",
];

/// Simplified age table ("< 18", "18 to 64", ">= 65").
pub static AGE_CATEGORIES: RecodeTable = RecodeTable::new(
    "age_categories",
    &[("< 18", "Under 18"), (">= 65", "65 and over")],
);

pub const AGE_CATEGORY_ORDER: &[&str] = &["Under 18", "18 to 64", "65 and over"];

pub static CHILD_ADULT: RecodeTable = RecodeTable::new(
    "child_adult",
    &[
        ("< 18", CHILDREN),
        ("18 to 64", ADULTS),
        (">= 65", ADULTS),
    ],
);

pub const CHILDREN: &str = "Children (< 18)";
pub const ADULTS: &str = "Adults (>= 18)";
