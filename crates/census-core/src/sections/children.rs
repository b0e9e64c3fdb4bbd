use census_model::{CategoryCount, CountQuery, Distribution, Geography, Indicator, Section};
use census_recode::age::{CHILD_ADULT, CHILDREN};
use census_recode::education::{ATTENDANCE, EDUCATION, EDUCATION_ORDER};
use census_recode::employment::is_in_labour_force;
use census_recode::income::{
    ANNUAL_INCOME, ANNUAL_INCOME_ESTIMATES, MONTHLY_INCOME, MONTHLY_INCOME_ESTIMATES,
};
use census_transform::{StatQuery, set_percent_values, table_metadata};

use super::common::{median_indicator, percent_indicator};
use super::economics::income_query;
use crate::context::ProfileContext;
use crate::error::Result;

const SURVIVAL_FIELD: &str = "mother alive, father alive";

pub(crate) fn aggregate(geo: &Geography, context: &ProfileContext<'_>) -> Result<Section> {
    Ok(Section::new()
        .with("demographics", demographics(geo, context)?)
        .with("school", school(geo, context)?)
        .with("employment", employment(geo, context)?))
}

fn demographics(geo: &Geography, context: &ProfileContext<'_>) -> Result<Section> {
    let child_adult = context.stat(
        geo,
        &StatQuery::new("age in completed years")
            .table("ageincompletedyearssimplified")
            .recode(&CHILD_ADULT),
    )?;
    let total_children = context.require_count(
        geo,
        &child_adult.distribution,
        "age in completed years",
        CHILDREN,
    )?;

    let (survival, no_parent) = parental_survival(geo, context)?;

    let gender = context.stat(geo, &StatQuery::new("gender").table("genderunder18"))?;

    Ok(Section::new()
        .with("child_adult_distribution", child_adult.distribution)
        .with("total_children", Indicator::value("Children", total_children))
        .with("gender_distribution", gender.distribution)
        .with("parental_survival_distribution", survival)
        .with("percent_no_parent", no_parent))
}

/// Children by survival of their biological parents, plus the share with
/// neither parent alive.
///
/// "Uncertain" is whatever the three known outcomes leave of the total.
fn parental_survival(
    geo: &Geography,
    context: &ProfileContext<'_>,
) -> Result<(Distribution, Indicator)> {
    let table = context.rows(geo, &CountQuery::new(&["mother alive", "father alive"]))?;
    let total = table.total();
    let count = |mother: &str, father: &str| -> Result<f64> {
        let value = table
            .rows
            .iter()
            .find(|row| row.category(0) == Some(mother) && row.category(1) == Some(father))
            .map(|row| row.total);
        context.require(geo, SURVIVAL_FIELD, &format!("{mother}/{father}"), value)
    };

    let both = count("Yes", "Yes")?;
    let neither = count("No", "No")?;
    let one = count("Yes", "No")? + count("No", "Yes")?;
    let uncertain = total - both - neither - one;

    let mut distribution = Distribution::new()
        .with_metadata(table_metadata(&table.table_id, &table.metadata));
    distribution.insert("Both parents", CategoryCount::new("Both parents", both));
    distribution.insert("Neither parent", CategoryCount::new("Neither parent", neither));
    distribution.insert("One parent", CategoryCount::new("One parent", one));
    distribution.insert("Uncertain", CategoryCount::new("Uncertain", uncertain));
    set_percent_values(&mut distribution, total);

    let no_parent = percent_indicator(
        "Of children 14 and under have no living biological parents",
        neither,
        total,
    );
    Ok((distribution, no_parent))
}

fn school(geo: &Geography, context: &ProfileContext<'_>) -> Result<Section> {
    let attendance = context.stat(
        geo,
        &StatQuery::new("present school attendance").recode(&ATTENDANCE),
    )?;
    let attending = context.require_count(
        geo,
        &attendance.distribution,
        "present school attendance",
        "Yes",
    )?;
    let school_aged = attendance.total;

    let education = context.stat(
        geo,
        &StatQuery::new("highest educational level")
            .table("highesteducationallevel17")
            .recode(&EDUCATION)
            .key_order(EDUCATION_ORDER),
    )?;

    Ok(Section::new()
        .with("school_attendance_distribution", attendance.distribution)
        .with(
            "percent_school_attendance",
            percent_indicator(
                "School-aged children (5 to 17 years old) are in school",
                attending,
                school_aged,
            ),
        )
        .with("education17_distribution", education.distribution))
}

fn employment(geo: &Geography, context: &ProfileContext<'_>) -> Result<Section> {
    let status = context.stat(
        geo,
        &StatQuery::new("official employment status")
            .table("officialemploymentstatus15to17")
            .exclude(&["Not applicable"]),
    )?;
    let in_labour_force = status.distribution.sum_where(is_in_labour_force);

    let mut section = Section::new()
        .with(
            "percent_in_labour_force",
            percent_indicator(
                "Of children between 15 and 17 are in the labour force",
                in_labour_force,
                status.total,
            ),
        )
        .with("employment_distribution", status.distribution);

    if geo.is_census_2011() {
        let income = context.stat(
            geo,
            &income_query("individual monthly income", &MONTHLY_INCOME)
                .table("individualmonthlyincome15to17"),
        )?;
        section.insert(
            "median_income",
            median_indicator(
                "Average monthly income of employed children between 15 and 17",
                &income.distribution,
                &MONTHLY_INCOME_ESTIMATES,
            ),
        );
    } else {
        let income = context.stat(
            geo,
            &income_query("individual annual income", &ANNUAL_INCOME)
                .table("individualannualincome15to17"),
        )?;
        section.insert(
            "median_annual_income",
            median_indicator(
                "Average annual income of employed children between 15 and 17",
                &income.distribution,
                &ANNUAL_INCOME_ESTIMATES,
            ),
        );
    }

    Ok(section)
}
