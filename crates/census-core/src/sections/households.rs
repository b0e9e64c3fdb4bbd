use census_model::{CountQuery, Geography, Indicator, Section};
use census_recode::household::{DWELLING, HOUSEHOLD_GOODS, OWNED_PREFIX, SHACK, TENURE};
use census_recode::income::{HOUSEHOLD_INCOME_ESTIMATES, household_income};
use census_transform::StatQuery;

use super::common::{median_indicator, percent_indicator, sum_prefixed};
use crate::context::ProfileContext;
use crate::error::Result;

const HEAD_GENDER_FIELD: &str = "gender of household head";

pub(crate) fn aggregate(geo: &Geography, context: &ProfileContext<'_>) -> Result<Section> {
    let head_gender = context.stat(
        geo,
        &StatQuery::new(HEAD_GENDER_FIELD).order_by_label(),
    )?;
    let total_households = head_gender.total;
    let female_heads =
        context.require_count(geo, &head_gender.distribution, HEAD_GENDER_FIELD, "Female")?;

    let under_18 = context.rows(
        geo,
        &CountQuery::new(&["gender of head of household"])
            .with_table("genderofheadofhouseholdunder18"),
    )?;
    let total_under_18 = under_18.total();

    let tenure = context.stat(
        geo,
        &StatQuery::new("tenure status")
            .recode(&TENURE)
            .order_by_label(),
    )?;
    let owned = sum_prefixed(&tenure.distribution, OWNED_PREFIX);

    let income_recode = household_income(geo.is_census_2011());
    let income = context.stat(
        geo,
        &StatQuery::new("annual household income")
            .table("annualhouseholdincome_genderofhouseholdhead")
            .exclude(&["Unspecified", "Not applicable"])
            .recode(income_recode)
            .key_order(&income_recode.target_order()),
    )?;
    let median_income = median_indicator(
        "Average annual household income",
        &income.distribution,
        &HOUSEHOLD_INCOME_ESTIMATES,
    );

    let dwelling = context.stat(
        geo,
        &StatQuery::new("type of dwelling")
            .recode(&DWELLING)
            .order_by_total(),
    )?;
    let informal = context.require_count(geo, &dwelling.distribution, "type of dwelling", SHACK)?;

    let goods = context.stat(
        geo,
        &StatQuery::new("household goods")
            .recode(&HOUSEHOLD_GOODS)
            .key_order(&HOUSEHOLD_GOODS.sorted_targets()),
    )?;

    let head_of_household = Section::new()
        .with("gender_distribution", head_gender.distribution)
        .with(
            "female",
            percent_indicator(
                "Households with women as their head",
                female_heads,
                total_households,
            ),
        )
        .with(
            "under_18",
            Indicator::value("Households with heads under 18 years old", total_under_18),
        );

    Ok(Section::new()
        .with(
            "total_households",
            Indicator::value("Households", total_households),
        )
        .with(
            "owned",
            percent_indicator(
                "Households fully owned or being paid off",
                owned,
                total_households,
            ),
        )
        .with("type_of_dwelling_distribution", dwelling.distribution)
        .with(
            "informal",
            percent_indicator(
                "Households that are informal dwellings (shacks)",
                informal,
                total_households,
            ),
        )
        .with("tenure_distribution", tenure.distribution)
        .with("household_goods", goods.distribution)
        .with("annual_income_distribution", income.distribution)
        .with("median_annual_income", median_income)
        .with("head_of_household", head_of_household))
}
