//! Income bands and their median estimates.
//!
//! The 2011 release reports employed individual income as monthly bands. The
//! revised release (2011 figures on 2016 boundaries) reports annual bands for
//! individuals and households; its labels carry the spacing quirks of the
//! SuperWeb export, so both spellings are mapped where they differ.

use crate::table::{BinEstimates, RecodeTable};

pub static MONTHLY_INCOME: RecodeTable = RecodeTable::new(
    "monthly_income",
    &[
        ("No income", "R0"),
        ("R 1 - R 400", "Under R400"),
        ("R 401 - R 800", "R400 - R800"),
        ("R 801 - R 1 600", "R800 - R2k"),
        ("R 1 601 - R 3 200", "R2k - R3k"),
        ("R 3 201 - R 6 400", "R3k - R6k"),
        ("R 6 401 - R 12 800", "R6k - R13k"),
        ("R 12 801 - R 25 600", "R13k - R26k"),
        ("R 25 601 - R 51 200", "R26k - R51k"),
        ("R 51 201 - R 102 400", "R51k - R102k"),
        ("R 102 401 - R 204 800", "Over R102k"),
        ("R 204 801 or more", "Over R102k"),
        ("Unspecified", "Unspecified"),
    ],
);

pub static ANNUAL_INCOME: RecodeTable = RecodeTable::new(
    "annual_income",
    &[
        ("No income", "R0"),
        ("R 1 - R 4800", "Under R4800"),
        ("R 4801 - R 9600", "R5k - R10k"),
        ("R 9601 - R 19200", "R10k - R20k"),
        ("R 19201 - R 38400", "R20k - R40k"),
        ("R 38401 -  R 76800", "R40k - R75k"),
        ("R 38401 - R 76800", "R40k - R75k"),
        ("R 76801 - R 153600", "R75k - R150k"),
        ("R 153601 - R 307200", "R150k - R300k"),
        ("R 307201 - R 614400", "R300k - R600k"),
        ("R 614401- R 1228800", "R600k - R1.2M"),
        ("R 1228801 - R 2457600", "R1.2M - R2.5M"),
        ("R2457601 or more", "Over R2.5M"),
    ],
);

/// Annual household income bands of the 2011 release.
pub static HOUSEHOLD_INCOME_2011: RecodeTable = RecodeTable::new(
    "household_income_2011",
    &[
        ("No income", "R0"),
        ("R 1 - R 4800", "Under R4800"),
        ("R 4801 - R 9600", "R5k - R10k"),
        ("R 9601 - R 19 600", "R10k - R20k"),
        ("R 19 601 - R 38 200", "R20k - R40k"),
        ("R 38 201 - R 76 400", "R40k - R75k"),
        ("R 76 401 - R 153 800", "R75k - R150k"),
        ("R 153 801 - R 307 600", "R150k - R300k"),
        ("R 307 601 - R 614 400", "R300k - R600k"),
        ("R 614 001 - R 1 228 800", "R600k - R1.2M"),
        ("R 1 228 801 - R 2 457 600", "R1.2M - R2.5M"),
        ("R 2 457 601 or more", "Over R2.5M"),
    ],
);

/// Household income recode for a release version.
pub fn household_income(is_census_2011: bool) -> &'static RecodeTable {
    if is_census_2011 {
        &HOUSEHOLD_INCOME_2011
    } else {
        &ANNUAL_INCOME
    }
}

pub static MONTHLY_INCOME_ESTIMATES: BinEstimates = BinEstimates::new(
    "monthly_income",
    &[
        ("R0", Some(0.0)),
        ("Under R400", Some(200.0)),
        ("R400 - R800", Some(600.0)),
        ("R800 - R2k", Some(1_200.0)),
        ("R2k - R3k", Some(2_400.0)),
        ("R3k - R6k", Some(4_800.0)),
        ("R6k - R13k", Some(9_600.0)),
        ("R13k - R26k", Some(19_200.0)),
        ("R26k - R51k", Some(38_400.0)),
        ("R51k - R102k", Some(76_800.0)),
        ("Over R102k", Some(204_800.0)),
        ("Unspecified", None),
    ],
);

pub static ANNUAL_INCOME_ESTIMATES: BinEstimates = BinEstimates::new(
    "annual_income",
    &[
        ("R0", Some(0.0)),
        ("Under R4800", Some(2_400.0)),
        ("R5k - R10k", Some(7_500.0)),
        ("R10k - R20k", Some(15_000.0)),
        ("R20k - R40k", Some(30_000.0)),
        ("R40k - R75k", Some(57_500.0)),
        ("R75k - R150k", Some(117_000.0)),
        ("R150k - R300k", Some(225_000.0)),
        ("R300k - R600k", Some(450_000.0)),
        ("R600k - R1.2M", Some(900_000.0)),
        ("R1.2M - R2.5M", Some(1_350_000.0)),
        ("Over R2.5M", Some(2_457_600.0)),
        ("Unspecified", None),
    ],
);

pub static HOUSEHOLD_INCOME_ESTIMATES: BinEstimates = BinEstimates::new(
    "household_income",
    &[
        ("R0", Some(0.0)),
        ("Under R4800", Some(2_400.0)),
        ("R5k - R10k", Some(7_200.0)),
        ("R10k - R20k", Some(14_600.0)),
        ("R20k - R40k", Some(29_400.0)),
        ("R40k - R75k", Some(57_300.0)),
        ("R75k - R150k", Some(115_100.0)),
        ("R150k - R300k", Some(230_700.0)),
        ("R300k - R600k", Some(461_000.0)),
        ("R600k - R1.2M", Some(921_400.0)),
        ("R1.2M - R2.5M", Some(1_843_200.0)),
        ("Over R2.5M", Some(2_500_000.0)),
        ("Unspecified", None),
    ],
);
