//! Water, refuse disposal and sanitation.

use crate::table::RecodeTable;

pub const SERVICE_PROVIDER: &str = "Service provider";

pub static WATER_SOURCE: RecodeTable = RecodeTable::new(
    "water_source",
    &[
        (
            "Regional/local water scheme (operated by municipality or other water services provider)",
            SERVICE_PROVIDER,
        ),
        ("Water tanker", "Tanker"),
        ("Spring", "Spring"),
        ("Other", "Other"),
        ("Dam/pool/stagnant water", "Dam"),
        ("River/stream", "River"),
        ("Not applicable", "N/A"),
        ("Borehole", "Borehole"),
        ("Rain water tank", "Rainwater tank"),
        ("Water vendor", "Vendor"),
    ],
);

/// Every refuse disposal label the census publishes is listed; anything else
/// is a data error.
pub static REFUSE_DISPOSAL: RecodeTable = RecodeTable::exhaustive(
    "refuse_disposal",
    &[
        (
            "Removed by local authority/private company less often",
            "Service provider (not regularly)",
        ),
        ("Own refuse dump", "Own dump"),
        ("Communal refuse dump", "Communal dump"),
        ("Other", "Other"),
        ("Not applicable", "N/A"),
        ("No rubbish disposal", "None"),
        ("Unspecified", "Unspecified"),
        (
            "Removed by local authority/private company at least once a week",
            "Service provider (regularly)",
        ),
    ],
);

pub static TOILETS: RecodeTable = RecodeTable::new(
    "toilet_facilities",
    &[
        ("Flush toilet (connected to sewerage system)", "Flush toilet"),
        ("Flush toilet (with septic tank)", "Flush toilet"),
        ("Chemical toilet", "Chemical toilet"),
        ("Pit toilet with ventilation (VIP)", "Pit toilet"),
        ("Pit toilet without ventilation", "Pit toilet"),
        ("Bucket toilet", "Bucket toilet"),
        ("Other", "Other"),
        ("None", NO_TOILET),
        ("Unspecified", "Unspecified"),
        ("Not applicable", "N/A"),
    ],
);

pub const NO_TOILET: &str = "None";

/// Collapsed toilet labels counted as flush or chemical access.
pub fn is_flush_or_chemical(label: &str) -> bool {
    label.starts_with("Flush") || label.starts_with("Chemical")
}

/// Raw electricity answers starting with this prefix mean no access.
pub const NO_ELECTRICITY_PREFIX: &str = "no ";

pub const ELECTRICITY_FIELDS: [&str; 3] = [
    "electricity for cooking",
    "electricity for heating",
    "electricity for lighting",
];
