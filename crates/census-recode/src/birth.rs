//! Place of birth.

pub const SOUTH_AFRICA: &str = "South Africa";

/// Region-of-birth recode: "Born in South Africa" becomes "South Africa" and
/// "Not applicable" becomes "Other"; other regions keep their label.
pub fn region_of_birth(_field: &str, raw: &str) -> String {
    match raw {
        "Born in South Africa" => SOUTH_AFRICA.to_string(),
        "Not applicable" => "Other".to_string(),
        other => other.to_string(),
    }
}
