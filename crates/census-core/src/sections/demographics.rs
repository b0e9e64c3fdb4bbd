use census_model::{CountQuery, Geography, Indicator, Section};
use census_recode::age::{AGE_CATEGORIES, AGE_CATEGORY_ORDER, AGE_GROUPS, AGE_GROUP_ORDER};
use census_recode::birth::{SOUTH_AFRICA, region_of_birth};
use census_recode::Recode;
use census_transform::{StatQuery, exact_median};
use tracing::debug;

use super::common::percent_indicator;
use crate::context::ProfileContext;
use crate::error::{ProfileError, Result};

const POPULATION_DATASET: &str = "Census 2011";
const AGE_FIELD: &str = "age in completed years";

pub(crate) fn aggregate(geo: &Geography, context: &ProfileContext<'_>) -> Result<Section> {
    let population = context.stat(
        geo,
        &StatQuery::new("population group").dataset(POPULATION_DATASET),
    )?;
    let total_pop = population.total;

    let language = context.stat(geo, &StatQuery::new("language").order_by_total())?;
    let most_spoken = match language.distribution.first() {
        Some((_, entry)) => Indicator::from(entry.clone()),
        None => {
            context.require(geo, "language", "most spoken", None)?;
            Indicator::value("Unknown", 0.0).with_numerator(0.0)
        }
    };

    let age_groups = context.stat(
        geo,
        &StatQuery::new("age groups in 5 years")
            .table("agegroupsin5years")
            .recode(&AGE_GROUPS)
            .key_order(AGE_GROUP_ORDER),
    )?;

    let sex = context.stat(geo, &StatQuery::new("gender").table("gender"))?;

    let mut section = Section::new()
        .with("language_distribution", language.distribution)
        .with("language_most_spoken", most_spoken)
        .with("population_group_distribution", population.distribution)
        .with("age_group_distribution", age_groups.distribution)
        .with("sex_ratio", sex.distribution)
        .with("total_population", Indicator::value("People", total_pop));

    if let Some(area) = geo.square_kms.filter(|area| *area > 0.0) {
        section.insert(
            "population_density",
            Indicator::value("people per square kilometre", total_pop / area),
        );
    }

    section.insert(
        "median_age",
        Indicator::new("Median age", median_age(geo, context)?),
    );

    let age_categories = context.stat(
        geo,
        &StatQuery::new(AGE_FIELD)
            .table("ageincompletedyearssimplified")
            .recode(&AGE_CATEGORIES)
            .key_order(AGE_CATEGORY_ORDER),
    )?;
    section.insert("age_category_distribution", age_categories.distribution);

    let citizenship = context.stat(geo, &StatQuery::new("citizenship").order_by_total())?;
    let sa_citizens = context.require_count(geo, &citizenship.distribution, "citizenship", "Yes")?;
    section.insert("citizenship_distribution", citizenship.distribution);
    section.insert(
        "citizenship_south_african",
        percent_indicator("South African citizens", sa_citizens, total_pop),
    );

    let province_of_birth = context.stat(
        geo,
        &StatQuery::new("province of birth")
            .exclude_zero()
            .order_by_total(),
    )?;
    section.insert("province_of_birth_distribution", province_of_birth.distribution);

    let region = context.stat(
        geo,
        &StatQuery::new("region of birth")
            .exclude_zero()
            .order_by_total()
            .recode(Recode::Function(region_of_birth)),
    )?;
    let born_in_sa = region.distribution.count(SOUTH_AFRICA).unwrap_or(0.0);
    section.insert("region_of_birth_distribution", region.distribution);
    section.insert(
        "born_in_south_africa",
        percent_indicator("Born in South Africa", born_in_sa, total_pop),
    );

    Ok(section)
}

/// Median over single years of age.
fn median_age(geo: &Geography, context: &ProfileContext<'_>) -> Result<Option<f64>> {
    let table = context.rows(geo, &CountQuery::new(&[AGE_FIELD]).with_table("ageincompletedyears"))?;
    let ages = table
        .rows
        .iter()
        .map(|row| {
            let label = row.category(0).unwrap_or_default();
            label
                .trim()
                .parse::<f64>()
                .map(|age| (age, row.total))
                .map_err(|_| ProfileError::NonNumericCategory {
                    geo_id: geo.geoid(),
                    field: AGE_FIELD.to_string(),
                    label: label.to_string(),
                })
        })
        .collect::<Result<Vec<_>>>()?;
    let median = exact_median(&ages);
    debug!(geo = %geo.id, ages = ages.len(), ?median, "median age");
    Ok(median)
}
