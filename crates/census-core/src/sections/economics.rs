use census_model::{Geography, Section};
use census_recode::RecodeTable;
use census_recode::income::{
    ANNUAL_INCOME, ANNUAL_INCOME_ESTIMATES, MONTHLY_INCOME, MONTHLY_INCOME_ESTIMATES,
};
use census_transform::StatQuery;

use super::common::{median_indicator, percent_indicator};
use crate::context::ProfileContext;
use crate::error::Result;

const NO_INTERNET: &str = "No access to internet";

/// Individual income query: excludes people outside the universe, recodes
/// into bands and keeps the band order.
pub(crate) fn income_query(field: &str, recode: &'static RecodeTable) -> StatQuery {
    StatQuery::new(field)
        .exclude(&["Not applicable"])
        .recode(recode)
        .key_order(&recode.target_order())
}

pub(crate) fn aggregate(geo: &Geography, context: &ProfileContext<'_>) -> Result<Section> {
    let mut section = Section::new();

    if geo.is_census_2011() {
        let income = context.stat(
            geo,
            &income_query("employed individual monthly income", &MONTHLY_INCOME),
        )?;
        let median = median_indicator(
            "Average monthly income",
            &income.distribution,
            &MONTHLY_INCOME_ESTIMATES,
        );
        section.insert("individual_income_distribution", income.distribution);
        section.insert("median_individual_income", median);
    } else {
        let income = context.stat(
            geo,
            &income_query("employed individual annual income", &ANNUAL_INCOME),
        )?;
        let median = median_indicator(
            "Average annual income",
            &income.distribution,
            &ANNUAL_INCOME_ESTIMATES,
        );
        section.insert("individual_annual_income_distribution", income.distribution);
        section.insert("median_annual_individual_income", median);
    }

    let employment = context.stat(
        geo,
        &StatQuery::new("official employment status")
            .table("officialemploymentstatus")
            .exclude(&["Age less than 15 years", "Not applicable"])
            .order_by_label(),
    )?;

    let sector = context.stat(
        geo,
        &StatQuery::new("type of sector")
            .exclude(&["Not applicable"])
            .order_by_label(),
    )?;

    let internet = context.stat(
        geo,
        &StatQuery::new("access to internet")
            .exclude(&[NO_INTERNET])
            .order_by_label(),
    )?;
    let without_access = context.stat(
        geo,
        &StatQuery::new("access to internet").only(&[NO_INTERNET]),
    )?;
    let total_with_access = internet.total;
    let total_households = total_with_access + without_access.total;

    section.insert("employment_status", employment.distribution);
    section.insert("sector_type_distribution", sector.distribution);
    section.insert("internet_access_distribution", internet.distribution);
    section.insert(
        "internet_access",
        percent_indicator(
            "Households with internet access",
            total_with_access,
            total_households,
        ),
    );
    Ok(section)
}
