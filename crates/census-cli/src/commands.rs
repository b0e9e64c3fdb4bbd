use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use census_core::{ProfileBuilder, ProfileSection, default_registry};
use census_ingest::{CensusData, GEOGRAPHIES_FILE, GeoRegistry};
use census_model::{CategoryMatching, GeoId, Profile, ProfileNode, ProfileOptions};
use chrono::Utc;
use comfy_table::Table;
use tracing::{info, info_span};

use crate::cli::{GeographiesArgs, ProfileArgs};
use crate::summary::apply_table_style;
use crate::types::{ProfileDocument, ProfileRun, SectionSummary};

pub fn run_sections() -> Result<()> {
    let registry = default_registry();
    let mut table = Table::new();
    table.set_header(vec!["Section", "Description", "Levels"]);
    apply_table_style(&mut table);
    for section in ProfileSection::ALL {
        let description = registry
            .get(section)
            .map(|aggregator| aggregator.description())
            .unwrap_or("-");
        let levels = match section {
            ProfileSection::Crime => "country, province",
            _ => "all",
        };
        table.add_row(vec![section.as_str(), description, levels]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_geographies(args: &GeographiesArgs) -> Result<()> {
    let path = args.data_dir.join(GEOGRAPHIES_FILE);
    let registry = GeoRegistry::load(&path)
        .with_context(|| format!("load geographies from {}", path.display()))?;
    let mut geographies: Vec<_> = registry.iter().collect();
    geographies.sort_by(|a, b| a.id.cmp(&b.id));

    let mut table = Table::new();
    table.set_header(vec!["Geography", "Name", "Version", "Area (km²)", "Parent"]);
    apply_table_style(&mut table);
    for geo in geographies {
        table.add_row(vec![
            geo.geoid(),
            geo.name.clone(),
            geo.version.clone(),
            geo.square_kms
                .map_or_else(|| "-".to_string(), |area| format!("{area:.1}")),
            geo.parent
                .as_ref()
                .map_or_else(|| "-".to_string(), ToString::to_string),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_profile(args: &ProfileArgs) -> Result<ProfileRun> {
    let geo_id: GeoId = args
        .geo_id
        .parse()
        .with_context(|| format!("parse geography id '{}'", args.geo_id))?;
    let span = info_span!("run", geo = %geo_id, data_dir = %args.data_dir.display());
    let _guard = span.enter();

    let load_start = Instant::now();
    let data = CensusData::open(&args.data_dir)
        .with_context(|| format!("open data directory {}", args.data_dir.display()))?;
    info!(
        tables = data.tables.len(),
        geographies = data.geographies.len(),
        duration_ms = load_start.elapsed().as_millis(),
        "data loaded"
    );
    let geo = data
        .geographies
        .resolve(&geo_id)
        .context("resolve geography")?;

    let options = profile_options(args);
    let mut builder = ProfileBuilder::new(&data.tables, &data.geographies).with_options(options);
    if !args.sections.is_empty() {
        builder = builder.with_sections(&args.sections);
    }

    let build_start = Instant::now();
    let geo_profile = builder
        .build(geo)
        .with_context(|| format!("build profile for {geo_id}"))?;
    info!(
        sections = geo_profile.profile.len(),
        duration_ms = build_start.elapsed().as_millis(),
        "profile complete"
    );

    let sections = summarize_sections(&geo_profile.profile);
    let document = ProfileDocument {
        generated_at: Utc::now().to_rfc3339(),
        geography: geo_profile.geography,
        comparatives: geo_profile.comparatives,
        profile: geo_profile.profile,
    };
    write_document(&document, args.output.as_deref(), args.pretty)?;

    Ok(ProfileRun {
        document,
        output: args.output.clone(),
        sections,
    })
}

pub fn profile_options(args: &ProfileArgs) -> ProfileOptions {
    let matching = if args.lenient_categories {
        CategoryMatching::Lenient
    } else {
        CategoryMatching::Strict
    };
    ProfileOptions::default()
        .with_category_matching(matching)
        .with_group_remainder(!args.no_group_remainder)
}

fn write_document(document: &ProfileDocument, output: Option<&Path>, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    }
    .context("serialize profile")?;
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "profile written");
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Counts the top-level nodes of each section.
pub fn summarize_sections(profile: &Profile) -> Vec<SectionSummary> {
    profile
        .sections()
        .map(|(name, section)| {
            let mut summary = SectionSummary {
                name: name.to_string(),
                indicators: 0,
                distributions: 0,
                groups: 0,
            };
            for (_, node) in section.iter() {
                match node {
                    ProfileNode::Indicator(_) => summary.indicators += 1,
                    ProfileNode::Distribution(_) => summary.distributions += 1,
                    ProfileNode::Group(_) => summary.groups += 1,
                    ProfileNode::Text(_) => {}
                }
            }
            summary
        })
        .collect()
}
