//! Helpers shared by the section aggregators.

use census_model::{Distribution, Indicator};
use census_recode::BinEstimates;
use census_transform::{median_estimate, percent};

/// Indicator whose value is `numerator` as a percentage of `denominator`.
pub(crate) fn percent_indicator(name: &str, numerator: f64, denominator: f64) -> Indicator {
    Indicator::value(name, percent(numerator, denominator)).with_numerator(numerator)
}

/// Indicator holding the estimate of the median bin of `dist`.
pub(crate) fn median_indicator(name: &str, dist: &Distribution, estimates: &BinEstimates) -> Indicator {
    Indicator::new(name, median_estimate(dist, estimates))
}

/// Sets the universe on the distribution's metadata, keeping its table id.
pub(crate) fn set_universe(dist: &mut Distribution, universe: &str) {
    let metadata = dist
        .metadata()
        .cloned()
        .unwrap_or_default()
        .with_universe(universe);
    dist.set_metadata(Some(metadata));
}

/// Sum of the counts of every category whose label starts with `prefix`.
pub(crate) fn sum_prefixed(dist: &Distribution, prefix: &str) -> f64 {
    dist.sum_where(|label| label.starts_with(prefix))
}
