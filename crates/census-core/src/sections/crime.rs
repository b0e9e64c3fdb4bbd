use census_model::{Geography, Indicator, Metadata, Section};
use census_transform::StatQuery;

use crate::context::ProfileContext;
use crate::error::Result;

pub(crate) fn aggregate(geo: &Geography, context: &ProfileContext<'_>) -> Result<Section> {
    let crimes = context.stat(
        geo,
        &StatQuery::new("crime")
            .only(&["Neglect and ill-treatment of children"])
            .without_percent(),
    )?;
    let dataset = crimes
        .distribution
        .metadata()
        .and_then(|metadata| metadata.dataset.clone().or_else(|| metadata.table_id.clone()))
        .unwrap_or_else(|| "crime".to_string());

    Ok(Section::new().with("dataset", dataset).with(
        "crime_against_children",
        Indicator::value(
            "Crimes of neglect and ill-treatment of children in 2014",
            crimes.total,
        )
        .with_metadata(Metadata::universe("Crimes in 2014")),
    ))
}
