use census_model::{Geography, Indicator, Section};
use census_recode::household::{DWELLING, SHACK};
use census_recode::income::{HOUSEHOLD_INCOME_ESTIMATES, household_income};
use census_transform::StatQuery;

use super::common::{median_indicator, percent_indicator};
use crate::context::ProfileContext;
use crate::error::Result;

const HEAD_GENDER_FIELD: &str = "gender of head of household";

pub(crate) fn aggregate(geo: &Geography, context: &ProfileContext<'_>) -> Result<Section> {
    let head_gender = context.stat(
        geo,
        &StatQuery::new(HEAD_GENDER_FIELD)
            .table("genderofheadofhouseholdunder18")
            .order_by_label(),
    )?;
    let total_households = head_gender.total;
    let female_heads =
        context.require_count(geo, &head_gender.distribution, HEAD_GENDER_FIELD, "Female")?;

    let income_recode = household_income(geo.is_census_2011());
    let income = context.stat(
        geo,
        &StatQuery::new("annual household income")
            .table("annualhouseholdincomeunder18")
            .exclude(&["Unspecified"])
            .recode(income_recode)
            .key_order(&income_recode.target_order()),
    )?;
    let median_income = median_indicator(
        "Average annual child-headed household income",
        &income.distribution,
        &HOUSEHOLD_INCOME_ESTIMATES,
    );

    let dwelling = context.stat(
        geo,
        &StatQuery::new("type of main dwelling")
            .recode(&DWELLING)
            .order_by_total(),
    )?;
    let informal =
        context.require_count(geo, &dwelling.distribution, "type of main dwelling", SHACK)?;

    let head_of_household = Section::new()
        .with("gender_distribution", head_gender.distribution)
        .with(
            "female",
            percent_indicator(
                "Child-headed households with women as their head",
                female_heads,
                total_households,
            ),
        );

    Ok(Section::new()
        .with(
            "total_households",
            Indicator::value("Households with heads under 18 years old", total_households),
        )
        .with("type_of_dwelling_distribution", dwelling.distribution)
        .with(
            "informal",
            percent_indicator(
                "Child-headed households that are informal dwellings (shacks)",
                informal,
                total_households,
            ),
        )
        .with("annual_income_distribution", income.distribution)
        .with("median_annual_income", median_income)
        .with("head_of_household", head_of_household))
}
