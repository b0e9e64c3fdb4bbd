//! Shared fixture: every census table for Cape Town, the Western Cape and
//! South Africa. Counts scale by 1, 10 and 100 respectively.
//!
//! The geographies come in two releases: the 2011 census and its revision
//! on 2016 boundaries, which reports annual instead of monthly income.

#![allow(dead_code)]

use census_ingest::{GeoRegistry, StoredTable, TableStore};
use census_model::{CENSUS_2011, GeoId, GeoLevel, Geography, Metadata};

pub const WATER_SCHEME: &str =
    "Regional/local water scheme (operated by municipality or other water services provider)";
pub const HOUSE: &str =
    "House or brick/concrete block structure on a separate stand or yard or on a farm";
pub const SHACK_BACKYARD: &str = "Informal dwelling (shack; in backyard)";
pub const SHACK_SETTLEMENT: &str = "Informal dwelling (shack; not in backyard; e.g. in an informal/squatter settlement or on a farm)";

pub const REVISED: &str = "2016";

type Rows<'a> = &'a [(&'a [&'a str], f64)];

pub fn country() -> Geography {
    country_in(CENSUS_2011)
}

pub fn province() -> Geography {
    province_in(CENSUS_2011)
}

pub fn municipality() -> Geography {
    municipality_in(CENSUS_2011)
}

pub fn country_in(version: &str) -> Geography {
    Geography::new(GeoId::new(GeoLevel::Country, "ZA"), "South Africa", version)
        .with_square_kms(1_000.0)
}

pub fn province_in(version: &str) -> Geography {
    Geography::new(GeoId::new(GeoLevel::Province, "WC"), "Western Cape", version)
        .with_square_kms(100.0)
        .with_parent(country().id)
}

pub fn municipality_in(version: &str) -> Geography {
    Geography::new(GeoId::new(GeoLevel::Municipality, "CPT"), "Cape Town", version)
        .with_square_kms(10.0)
        .with_parent(province().id)
}

pub fn registry() -> GeoRegistry {
    registry_in(CENSUS_2011)
}

pub fn registry_in(version: &str) -> GeoRegistry {
    let mut registry = GeoRegistry::new();
    for geo in [
        country_in(version),
        province_in(version),
        municipality_in(version),
    ] {
        registry.insert(geo).unwrap();
    }
    registry
}

fn scaled_geos() -> [(GeoId, f64); 3] {
    [
        (municipality().id, 1.0),
        (province().id, 10.0),
        (country().id, 100.0),
    ]
}

fn table(store: &mut TableStore, table_id: &str, fields: &[&str], rows: Rows<'_>) {
    table_with_metadata(store, table_id, fields, rows, Metadata::for_table(table_id));
}

fn table_with_metadata(
    store: &mut TableStore,
    table_id: &str,
    fields: &[&str],
    rows: Rows<'_>,
    metadata: Metadata,
) {
    let mut stored = StoredTable::new(table_id, fields).with_metadata(metadata);
    for (geo, scale) in scaled_geos() {
        for &(categories, count) in rows {
            stored.push_row(geo.clone(), categories, count * scale);
        }
    }
    store.insert(stored);
}

pub fn store() -> TableStore {
    let mut store = TableStore::new();

    // demographics
    table_with_metadata(
        &mut store,
        "populationgroup",
        &["population group"],
        &[
            (&["Black African"], 60.0),
            (&["Coloured"], 30.0),
            (&["White"], 8.0),
            (&["Indian or Asian"], 2.0),
        ],
        Metadata {
            universe: Some("Population".to_string()),
            dataset: Some("Census 2011".to_string()),
            ..Metadata::default()
        },
    );
    table(
        &mut store,
        "language",
        &["language"],
        &[
            (&["Afrikaans"], 30.0),
            (&["isiXhosa"], 40.0),
            (&["English"], 15.0),
            (&["isiZulu"], 5.0),
            (&["Sesotho"], 4.0),
            (&["Setswana"], 3.0),
            (&["Sepedi"], 2.0),
            (&["Xitsonga"], 1.0),
        ],
    );
    table(
        &mut store,
        "agegroupsin5years",
        &["age groups in 5 years"],
        &[
            (&["00 - 04"], 10.0),
            (&["05 - 09"], 10.0),
            (&["20 - 24"], 30.0),
            (&["25 - 29"], 20.0),
            (&["65 - 69"], 30.0),
        ],
    );
    table(
        &mut store,
        "gender",
        &["gender"],
        &[(&["Female"], 52.0), (&["Male"], 48.0)],
    );
    table(
        &mut store,
        "ageincompletedyears",
        &["age in completed years"],
        &[(&["70"], 30.0), (&["5"], 20.0), (&["25"], 50.0)],
    );
    table(
        &mut store,
        "ageincompletedyearssimplified",
        &["age in completed years"],
        &[(&["< 18"], 30.0), (&["18 to 64"], 55.0), (&[">= 65"], 15.0)],
    );
    table(
        &mut store,
        "citizenship",
        &["citizenship"],
        &[(&["Yes"], 90.0), (&["No"], 10.0)],
    );
    table(
        &mut store,
        "provinceofbirth",
        &["province of birth"],
        &[
            (&["Western Cape"], 70.0),
            (&["Eastern Cape"], 20.0),
            (&["Gauteng"], 5.0),
            (&["Outside South Africa"], 5.0),
            (&["Limpopo"], 0.0),
        ],
    );
    table(
        &mut store,
        "regionofbirth",
        &["region of birth"],
        &[
            (&["Born in South Africa"], 95.0),
            (&["SADC"], 4.0),
            (&["Not applicable"], 1.0),
        ],
    );

    // economics
    table(
        &mut store,
        "employedindividualmonthlyincome",
        &["employed individual monthly income"],
        &[
            (&["No income"], 10.0),
            (&["R 1 - R 400"], 5.0),
            (&["R 401 - R 800"], 20.0),
            (&["Not applicable"], 40.0),
        ],
    );
    table(
        &mut store,
        "officialemploymentstatus",
        &["official employment status"],
        &[
            (&["Unemployed"], 20.0),
            (&["Employed"], 40.0),
            (&["Discouraged work-seeker"], 5.0),
            (&["Other not economically active"], 15.0),
            (&["Age less than 15 years"], 20.0),
        ],
    );
    table(
        &mut store,
        "typeofsector",
        &["type of sector"],
        &[
            (&["In the informal sector"], 10.0),
            (&["In the formal sector"], 30.0),
            (&["Not applicable"], 60.0),
        ],
    );
    table(
        &mut store,
        "accesstointernet",
        &["access to internet"],
        &[
            (&["From home"], 20.0),
            (&["From cell phone"], 30.0),
            (&["No access to internet"], 50.0),
        ],
    );

    // service delivery
    table(
        &mut store,
        "sourceofwater",
        &["source of water"],
        &[
            (&[WATER_SCHEME], 80.0),
            (&["Borehole"], 10.0),
            (&["Spring"], 5.0),
            (&["River/stream"], 3.0),
            (&["Water vendor"], 1.0),
            (&["Dam/pool/stagnant water"], 1.0),
        ],
    );
    table(
        &mut store,
        "refusedisposal",
        &["refuse disposal"],
        &[
            (&["Own refuse dump"], 30.0),
            (
                &["Removed by local authority/private company at least once a week"],
                60.0,
            ),
            (&["Communal refuse dump"], 10.0),
        ],
    );
    table(
        &mut store,
        "toiletfacilities",
        &["toilet facilities"],
        &[
            (&["Flush toilet (connected to sewerage system)"], 50.0),
            (&["Flush toilet (with septic tank)"], 10.0),
            (&["Chemical toilet"], 5.0),
            (&["Pit toilet without ventilation"], 20.0),
            (&["None"], 15.0),
        ],
    );
    table(
        &mut store,
        "electricityforcooking_electricityforheating_electricityforlighting",
        &[
            "electricity for cooking",
            "electricity for heating",
            "electricity for lighting",
        ],
        &[
            (&["Electricity", "Electricity", "Electricity"], 60.0),
            (&["Electricity", "no electricity", "Electricity"], 30.0),
            (&["no electricity", "no electricity", "no electricity"], 10.0),
        ],
    );

    // education
    table(
        &mut store,
        "highesteducationallevel20",
        &["highest educational level"],
        &[
            (&["No schooling"], 10.0),
            (&["Grade 7 / Std 5/ ABET 3"], 20.0),
            (&["Grade 10 / Std 8 / Form 3"], 30.0),
            (&["Grade 12 / Std 10 / Form 5"], 30.0),
            (&["Bachelors Degree"], 10.0),
        ],
    );

    // households
    table(
        &mut store,
        "genderofhouseholdhead",
        &["gender of household head"],
        &[(&["Male"], 60.0), (&["Female"], 40.0)],
    );
    table(
        &mut store,
        "genderofheadofhouseholdunder18",
        &["gender of head of household"],
        &[(&["Female"], 1.0), (&["Male"], 2.0)],
    );
    table(
        &mut store,
        "tenurestatus",
        &["tenure status"],
        &[
            (&["Rented"], 30.0),
            (&["Owned and fully paid off"], 40.0),
            (&["Owned but not yet paid off"], 20.0),
            (&["Do not know"], 10.0),
        ],
    );
    table(
        &mut store,
        "annualhouseholdincome_genderofhouseholdhead",
        &["annual household income", "gender of household head"],
        &[
            (&["No income", "Female"], 10.0),
            (&["R 1 - R 4800", "Male"], 20.0),
            (&["R 4801 - R 9600", "Female"], 30.0),
            (&["R 4801 - R 9600", "Male"], 5.0),
            (&["Unspecified", "Male"], 5.0),
        ],
    );
    table(
        &mut store,
        "typeofdwelling",
        &["type of dwelling"],
        &[
            (&[HOUSE], 50.0),
            (&[SHACK_BACKYARD], 20.0),
            (&[SHACK_SETTLEMENT], 10.0),
            (
                &["Traditional dwelling/hut/structure made of traditional materials"],
                10.0,
            ),
            (&["Flat or apartment in a block of flats"], 5.0),
            (&["Cluster house in complex"], 3.0),
            (&["Caravan/tent"], 2.0),
        ],
    );
    table(
        &mut store,
        "householdgoods",
        &["household goods"],
        &[
            (&["television"], 70.0),
            (&["cell phone"], 90.0),
            (&["refrigerator"], 60.0),
        ],
    );

    // children
    table(
        &mut store,
        "motheralive_fatheralive",
        &["mother alive", "father alive"],
        &[
            (&["Yes", "Yes"], 70.0),
            (&["Yes", "No"], 15.0),
            (&["No", "Yes"], 5.0),
            (&["No", "No"], 5.0),
            (&["Do not know", "Yes"], 5.0),
        ],
    );
    table(
        &mut store,
        "genderunder18",
        &["gender"],
        &[(&["Female"], 15.0), (&["Male"], 15.0)],
    );
    table(
        &mut store,
        "presentschoolattendance",
        &["present school attendance"],
        &[(&["Yes"], 80.0), (&["No"], 15.0), (&["Unspecified"], 5.0)],
    );
    table(
        &mut store,
        "highesteducationallevel17",
        &["highest educational level"],
        &[
            (&["Grade 10 / Std 8 / Form 3"], 20.0),
            (&["Grade 7 / Std 5/ ABET 3"], 10.0),
        ],
    );
    table(
        &mut store,
        "officialemploymentstatus15to17",
        &["official employment status"],
        &[
            (&["Employed"], 2.0),
            (&["Unemployed"], 3.0),
            (&["Other not economically active"], 15.0),
            (&["Not applicable"], 5.0),
        ],
    );
    table(
        &mut store,
        "individualmonthlyincome15to17",
        &["individual monthly income"],
        &[(&["No income"], 15.0), (&["R 1 - R 400"], 5.0)],
    );

    // child-headed households
    table(
        &mut store,
        "annualhouseholdincomeunder18",
        &["annual household income"],
        &[(&["No income"], 2.0), (&["R 1 - R 4800"], 1.0)],
    );
    table(
        &mut store,
        "typeofmaindwelling",
        &["type of main dwelling"],
        &[(&[SHACK_BACKYARD], 2.0), (&[HOUSE], 1.0)],
    );

    // crime
    table_with_metadata(
        &mut store,
        "crime",
        &["crime"],
        &[
            (&["Neglect and ill-treatment of children"], 12.0),
            (&["Murder"], 30.0),
        ],
        Metadata {
            universe: Some("Crimes".to_string()),
            dataset: Some("Crime Stats 2014".to_string()),
            ..Metadata::default()
        },
    );

    store
}

/// [`store`] plus the annual income tables of the revised release. The
/// household income table uses the revised band labels, in both spellings of
/// the R40k - R75k band.
pub fn revised_store() -> TableStore {
    let mut store = store();
    table(
        &mut store,
        "employedindividualannualincome",
        &["employed individual annual income"],
        &[
            (&["No income"], 10.0),
            (&["R 1 - R 4800"], 5.0),
            (&["R 19201 - R 38400"], 10.0),
            (&["R 38401 -  R 76800"], 30.0),
            (&["Not applicable"], 40.0),
        ],
    );
    table(
        &mut store,
        "individualannualincome15to17",
        &["individual annual income"],
        &[(&["No income"], 5.0), (&["R 1 - R 4800"], 15.0)],
    );
    table(
        &mut store,
        "annualhouseholdincome_genderofhouseholdhead",
        &["annual household income", "gender of household head"],
        &[
            (&["No income", "Female"], 10.0),
            (&["R 38401 -  R 76800", "Male"], 20.0),
            (&["R 38401 - R 76800", "Female"], 10.0),
            (&["Unspecified", "Male"], 5.0),
        ],
    );
    store
}
