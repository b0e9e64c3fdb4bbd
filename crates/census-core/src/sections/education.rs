use census_model::{CountQuery, Distribution, Geography, Indicator, Metadata, Section};
use census_recode::Recode;
use census_recode::education::{EDUCATION, EDUCATION_ORDER, is_fet_or_higher, is_get_or_higher};
use census_transform::{collapse, percent, set_percent_values, table_metadata};

use super::common::set_universe;
use crate::context::ProfileContext;
use crate::error::Result;

const FIELD: &str = "highest educational level";
const UNIVERSE: &str = "Individuals aged 20 and older";

pub(crate) fn aggregate(geo: &Geography, context: &ProfileContext<'_>) -> Result<Section> {
    let table = context.rows(
        geo,
        &CountQuery::new(&[FIELD]).with_table("highesteducationallevel20"),
    )?;

    let mut raw = Distribution::new();
    let mut total = 0.0;
    let mut get_or_higher = 0.0;
    let mut fet_or_higher = 0.0;
    for row in &table.rows {
        let level = row.category(0).unwrap_or_default();
        total += row.total;
        if is_get_or_higher(level) {
            get_or_higher += row.total;
        }
        if is_fet_or_higher(level) {
            fet_or_higher += row.total;
        }
        raw.add(level, row.total);
    }
    raw.set_metadata(Some(table_metadata(&table.table_id, &table.metadata)));

    let mut attainment = collapse(&raw, &Recode::Table(&EDUCATION), FIELD, Some(EDUCATION_ORDER))?;
    set_percent_values(&mut attainment, total);
    set_universe(&mut attainment, UNIVERSE);

    let split = Section::new()
        .with(
            "percent_get_or_higher",
            attainment_indicator("Completed Grade 9 or higher", get_or_higher, total),
        )
        .with(
            "percent_fet_or_higher",
            attainment_indicator("Completed Matric or higher", fet_or_higher, total),
        );

    Ok(Section::new()
        .with("educational_attainment_distribution", attainment)
        .with("educational_attainment", split))
}

fn attainment_indicator(name: &str, count: f64, total: f64) -> Indicator {
    Indicator::value(name, percent(count, total))
        .with_numerator(count)
        .with_metadata(Metadata::universe(UNIVERSE))
}
