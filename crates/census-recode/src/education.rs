//! Educational attainment and school attendance.

use crate::table::RecodeTable;

pub static EDUCATION: RecodeTable = RecodeTable::new(
    "education",
    &[
        ("Gade 0", "Some primary"),
        ("Grade 1 / Sub A", "Some primary"),
        ("Grade 2 / Sub B", "Some primary"),
        ("Grade 3 / Std 1/ABET 1Kha Ri Gude;SANLI", "Some primary"),
        ("Grade 4 / Std 2", "Some primary"),
        ("Grade 5 / Std 3/ABET 2", "Some primary"),
        ("Grade 6 / Std 4", "Some primary"),
        ("Grade 7 / Std 5/ ABET 3", "Primary"),
        ("Grade 8 / Std 6 / Form 1", "Some secondary"),
        ("Grade 9 / Std 7 / Form 2/ ABET 4", "Some secondary"),
        ("Grade 10 / Std 8 / Form 3", "Some secondary"),
        ("Grade 11 / Std 9 / Form 4", "Some secondary"),
        ("Grade 12 / Std 10 / Form 5", "Grade 12 (Matric)"),
        ("NTC I / N1/ NIC/ V Level 2", "Some secondary"),
        ("NTC II / N2/ NIC/ V Level 3", "Some secondary"),
        ("NTC III /N3/ NIC/ V Level 4", "Grade 12 (Matric)"),
        ("N4 / NTC 4", "N/A"),
        ("N5 /NTC 5", "N/A"),
        ("N6 / NTC 6", "Undergrad"),
        ("Certificate with less than Grade 12 / Std 10", "Some secondary"),
        ("Diploma with less than Grade 12 / Std 10", "Some secondary"),
        ("Certificate with Grade 12 / Std 10", "Grade 12 (Matric)"),
        ("Diploma with Grade 12 / Std 10", "Grade 12 (Matric)"),
        ("Higher Diploma", "Undergrad"),
        ("Post Higher Diploma Masters; Doctoral Diploma", "Post-grad"),
        ("Bachelors Degree", "Undergrad"),
        ("Bachelors Degree and Post graduate Diploma", "Post-grad"),
        ("Honours degree", "Post-grad"),
        ("Higher Degree Masters / PhD", "Post-grad"),
        ("Other", "Other"),
        ("No schooling", "None"),
        ("Unspecified", "N/A"),
        ("Not applicable", "N/A"),
    ],
);

/// Display order of collapsed education levels. "N/A" is not listed and
/// follows the ordered levels when present.
pub const EDUCATION_ORDER: &[&str] = &[
    "None",
    "Other",
    "Some primary",
    "Primary",
    "Some secondary",
    "Grade 12 (Matric)",
    "Undergrad",
    "Post-grad",
];

pub static ATTENDANCE: RecodeTable = RecodeTable::new(
    "attendance",
    &[
        ("Unspecified", "Other"),
        ("Not applicable", "Other"),
        ("Do not know", "Other"),
    ],
);

/// Raw levels counting as Grade 9 (GET phase) completed or higher.
const GET_OR_HIGHER: &[&str] = &[
    "Grade 9 / Std 7 / Form 2/ ABET 4",
    "Grade 10 / Std 8 / Form 3",
    "Grade 11 / Std 9 / Form 4",
    "Grade 12 / Std 10 / Form 5",
    "NTC I / N1/ NIC/ V Level 2",
    "NTC II / N2/ NIC/ V Level 3",
    "NTC III /N3/ NIC/ V Level 4",
    "N4 / NTC 4",
    "N5 /NTC 5",
    "N6 / NTC 6",
    "Certificate with less than Grade 12 / Std 10",
    "Diploma with less than Grade 12 / Std 10",
    "Certificate with Grade 12 / Std 10",
    "Diploma with Grade 12 / Std 10",
    "Higher Diploma",
    "Post Higher Diploma Masters; Doctoral Diploma",
    "Bachelors Degree",
    "Bachelors Degree and Post graduate Diploma",
    "Honours degree",
    "Higher Degree Masters / PhD",
];

/// Raw levels counting as Matric (FET phase) completed or higher.
const FET_OR_HIGHER: &[&str] = &[
    "Grade 12 / Std 10 / Form 5",
    "N4 / NTC 4",
    "N5 /NTC 5",
    "N6 / NTC 6",
    "Certificate with Grade 12 / Std 10",
    "Diploma with Grade 12 / Std 10",
    "Higher Diploma",
    "Post Higher Diploma Masters; Doctoral Diploma",
    "Bachelors Degree",
    "Bachelors Degree and Post graduate Diploma",
    "Honours degree",
    "Higher Degree Masters / PhD",
];

pub fn is_get_or_higher(level: &str) -> bool {
    GET_OR_HIGHER.contains(&level)
}

/// Every FET level is also a GET level.
pub fn is_fet_or_higher(level: &str) -> bool {
    FET_OR_HIGHER.contains(&level)
}
