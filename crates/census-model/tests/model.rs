//! Tests for the profile tree and comparative merging.

use census_model::{
    Distribution, GeoLevel, Geography, GeoId, Indicator, Metadata, ModelError, ProfileNode,
    Section,
};

fn households_section(owned: f64) -> Section {
    Section::new()
        .with(
            "total_households",
            Indicator::value("Households", 100.0),
        )
        .with(
            "owned",
            Indicator::value("Households that own", owned).with_numerator(owned),
        )
        .with(
            "tenure_distribution",
            Distribution::from_counts([("Owned", owned), ("Rented", 100.0 - owned)])
                .with_metadata(Metadata::universe("Households")),
        )
        .with("note", "Counts are estimates".to_string())
}

#[test]
fn merge_copies_this_under_level() {
    let mut section = households_section(60.0);
    let province = households_section(55.0);

    section
        .merge_comparative(&province, "province")
        .expect("merge province");

    let owned = section.indicator("owned").expect("owned indicator");
    assert_eq!(owned.values.get("province"), Some(55.0));
    assert_eq!(
        owned.numerators.as_ref().and_then(|n| n.get("province")),
        Some(55.0)
    );

    let tenure = section
        .distribution("tenure_distribution")
        .expect("tenure distribution");
    let rented = tenure.get("Rented").expect("rented");
    assert_eq!(rented.numerators.get("province"), Some(45.0));
    assert_eq!(tenure.metadata().and_then(|m| m.universe.as_deref()), Some("Households"));
    assert_eq!(section.text("note"), Some("Counts are estimates"));
}

#[test]
fn merge_keeps_absent_comparative_value_as_null() {
    let mut section = Section::new().with("median_age", Indicator::value("Median age", 27.0));
    let other = Section::new().with("median_age", Indicator::new("Median age", None));

    section
        .merge_comparative(&other, "country")
        .expect("merge country");

    let median = section.indicator("median_age").expect("median");
    assert!(median.values.contains("country"));
    assert_eq!(median.values.get("country"), None);
}

#[test]
fn merge_reports_missing_key_path() {
    let mut section = Section::new().with(
        "group",
        Section::new().with("inner", Indicator::value("Inner", 1.0)),
    );
    let other = Section::new().with("group", Section::new());

    let err = section
        .merge_comparative(&other, "province")
        .expect_err("missing inner key");
    assert_eq!(
        err,
        ModelError::MissingKey {
            path: "group.inner".to_string()
        }
    );
}

#[test]
fn merge_reports_missing_category() {
    let mut section = Section::new().with(
        "language",
        Distribution::from_counts([("isiXhosa", 10.0), ("Afrikaans", 5.0)]),
    );
    let other = Section::new().with("language", Distribution::from_counts([("isiXhosa", 7.0)]));

    let err = section
        .merge_comparative(&other, "country")
        .expect_err("missing category");
    assert!(matches!(err, ModelError::MissingKey { path } if path == "language.Afrikaans"));
}

#[test]
fn merge_reports_shape_mismatch() {
    let mut section = Section::new().with("x", Indicator::value("X", 1.0));
    let other = Section::new().with("x", Distribution::from_counts([("A", 1.0)]));

    let err = section
        .merge_comparative(&other, "country")
        .expect_err("shape mismatch");
    assert!(matches!(
        err,
        ModelError::ShapeMismatch {
            expected: "indicator",
            found: "distribution",
            ..
        }
    ));
}

#[test]
fn section_serializes_in_insertion_order() {
    let section = households_section(60.0);
    let json = serde_json::to_value(&section).expect("serialize section");
    let keys: Vec<&str> = json
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["total_households", "owned", "tenure_distribution", "note"]);
    assert_eq!(json["tenure_distribution"]["metadata"]["universe"], "Households");
    assert_eq!(json["tenure_distribution"]["Owned"]["numerators"]["this"], 60.0);
    assert_eq!(json["note"], "Counts are estimates");
}

#[test]
fn node_kinds() {
    assert_eq!(ProfileNode::from(Section::new()).kind(), "group");
    assert_eq!(ProfileNode::from("x".to_string()).kind(), "text");
}

#[test]
fn geography_serializes_flat_id() {
    let geo = Geography::new(GeoId::new(GeoLevel::Province, "WC"), "Western Cape", "2011")
        .with_parent(GeoId::new(GeoLevel::Country, "ZA"));
    let json = serde_json::to_value(&geo).expect("serialize geography");
    assert_eq!(json["level"], "province");
    assert_eq!(json["code"], "WC");
    assert_eq!(json["parent"]["code"], "ZA");
    assert!(geo.is_census_2011());
    assert_eq!(geo.geoid(), "province-WC");
}
