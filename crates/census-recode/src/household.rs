//! Household tenure, goods and dwelling types.

use crate::table::RecodeTable;

pub static TENURE: RecodeTable = RecodeTable::new(
    "tenure",
    &[
        ("Unspecified", "Other"),
        ("Not applicable", "Other"),
        ("Do not know", "Other"),
    ],
);

/// Prefix shared by the owned tenure categories ("Owned and fully paid off",
/// "Owned but not yet paid off").
pub const OWNED_PREFIX: &str = "Owned";

pub static HOUSEHOLD_GOODS: RecodeTable = RecodeTable::new(
    "household_goods",
    &[
        ("cell phone", "Cellphone"),
        ("computer", "Computer"),
        ("dvd player", "DVD player"),
        ("electric/gas stove", "Stove"),
        ("landline/telephone", "Telephone"),
        ("motor-car", "Car"),
        ("radio", "Radio"),
        ("refrigerator", "Fridge"),
        ("satellite television", "Satellite TV"),
        ("television", "TV"),
        ("vacuum cleaner", "Vacuum cleaner"),
        ("washing machine", "Washing machine"),
    ],
);

pub static DWELLING: RecodeTable = RecodeTable::new(
    "type_of_dwelling",
    &[
        (
            "House or brick/concrete block structure on a separate stand or yard or on a farm",
            "House",
        ),
        (
            "Traditional dwelling/hut/structure made of traditional materials",
            "Traditional",
        ),
        ("Flat or apartment in a block of flats", "Apartment"),
        ("Cluster house in complex", "Cluster house"),
        ("Townhouse (semi-detached house in a complex)", "Townhouse"),
        ("Semi-detached house", "Semi-detached house"),
        ("House/flat/room in backyard", "Backyard in flat"),
        ("Informal dwelling (shack; in backyard)", SHACK),
        (
            "Informal dwelling (shack; not in backyard; e.g. in an informal/squatter settlement or on a farm)",
            SHACK,
        ),
        (
            "Room/flatlet on a property or larger dwelling/servants quarters/granny flat",
            "Room or flatlet",
        ),
        ("Caravan/tent", "Caravan/tent"),
        ("Other", "Other"),
        ("Unspecified", "Unspecified"),
        ("Not applicable", "N/A"),
    ],
);

/// Collapsed label for informal dwellings.
pub const SHACK: &str = "Shack";
