use census_model::{CategoryCount, CountQuery, Distribution, Geography, Section};
use census_recode::services::{
    ELECTRICITY_FIELDS, NO_ELECTRICITY_PREFIX, NO_TOILET, REFUSE_DISPOSAL, SERVICE_PROVIDER,
    TOILETS, WATER_SOURCE, is_flush_or_chemical,
};
use census_transform::{StatQuery, set_percent_values, table_metadata};

use super::common::{percent_indicator, sum_prefixed};
use crate::context::ProfileContext;
use crate::error::Result;

pub(crate) fn aggregate(geo: &Geography, context: &ProfileContext<'_>) -> Result<Section> {
    let water = context.stat(
        geo,
        &StatQuery::new("source of water")
            .recode(&WATER_SOURCE)
            .order_by_total(),
    )?;
    let water_from_provider = water.distribution.count(SERVICE_PROVIDER).unwrap_or(0.0);

    let refuse = context.stat(
        geo,
        &StatQuery::new("refuse disposal")
            .recode(&REFUSE_DISPOSAL)
            .order_by_total(),
    )?;
    let refuse_from_provider = sum_prefixed(&refuse.distribution, SERVICE_PROVIDER);

    let toilets = context.stat(
        geo,
        &StatQuery::new("toilet facilities")
            .exclude_zero()
            .recode(&TOILETS)
            .order_by_total(),
    )?;
    let flush_toilets = toilets.distribution.sum_where(is_flush_or_chemical);
    let no_toilets = toilets.distribution.count(NO_TOILET).unwrap_or(0.0);

    let mut section = Section::new()
        .with("water_source_distribution", water.distribution)
        .with(
            "percentage_water_from_service_provider",
            percent_indicator(
                "Are getting water from a regional or local service provider",
                water_from_provider,
                water.total,
            ),
        )
        .with("refuse_disposal_distribution", refuse.distribution)
        .with(
            "percentage_ref_disp_from_service_provider",
            percent_indicator(
                "Are getting refuse disposal from a local authority or private company",
                refuse_from_provider,
                refuse.total,
            ),
        )
        .with(
            "percentage_flush_toilet_access",
            percent_indicator(
                "Have access to flush or chemical toilets",
                flush_toilets,
                toilets.total,
            ),
        )
        .with(
            "percentage_no_toilet_access",
            percent_indicator("Have no access to any toilets", no_toilets, toilets.total),
        )
        .with("toilet_facilities_distribution", toilets.distribution);

    if geo.is_census_2011() {
        let (distribution, some_access, total) = electricity_access(geo, context)?;
        section.insert(
            "percentage_electricity_access",
            percent_indicator(
                "Have electricity for at least one of cooking, heating or lighting",
                some_access,
                total,
            ),
        );
        section.insert("electricity_access_distribution", distribution);
    }

    Ok(section)
}

/// Splits households by electricity for all, some or none of cooking,
/// heating and lighting.
///
/// Returns the distribution, the count with electricity for at least one use,
/// and the total.
fn electricity_access(
    geo: &Geography,
    context: &ProfileContext<'_>,
) -> Result<(Distribution, f64, f64)> {
    let table = context.rows(geo, &CountQuery::new(&ELECTRICITY_FIELDS))?;

    let mut all = 0.0;
    let mut some_not_all = 0.0;
    let mut none = 0.0;
    for row in &table.rows {
        let access: Vec<bool> = row
            .categories
            .iter()
            .map(|answer| !answer.starts_with(NO_ELECTRICITY_PREFIX))
            .collect();
        if access.iter().all(|has| *has) {
            all += row.total;
        } else if access.iter().any(|has| *has) {
            some_not_all += row.total;
        } else {
            none += row.total;
        }
    }
    let total = all + some_not_all + none;

    let mut distribution = Distribution::new()
        .with_metadata(table_metadata(&table.table_id, &table.metadata));
    distribution.insert(
        "total_all_elec",
        CategoryCount::new("Have electricity for everything", all),
    );
    distribution.insert(
        "total_some_not_all_elec",
        CategoryCount::new("Have electricity for some things", some_not_all),
    );
    distribution.insert("total_no_elec", CategoryCount::new("No electricity", none));
    set_percent_values(&mut distribution, total);

    Ok((distribution, all + some_not_all, total))
}
