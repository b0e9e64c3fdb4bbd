use crate::table::RecodeTable;

pub const IN_LABOUR_FORCE: &str = "In labour force";
pub const NOT_IN_LABOUR_FORCE: &str = "Not in labour force";

/// Official employment status by labour force participation.
pub static EMPLOYMENT: RecodeTable = RecodeTable::new(
    "employment",
    &[
        ("Employed", IN_LABOUR_FORCE),
        ("Unemployed", IN_LABOUR_FORCE),
        ("Discouraged work-seeker", IN_LABOUR_FORCE),
        ("Other not economically active", NOT_IN_LABOUR_FORCE),
        ("Age less than 15 years", NOT_IN_LABOUR_FORCE),
        ("Not applicable", NOT_IN_LABOUR_FORCE),
    ],
);

pub fn is_in_labour_force(status: &str) -> bool {
    EMPLOYMENT.get(status) == Some(IN_LABOUR_FORCE)
}
