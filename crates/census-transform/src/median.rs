//! Medians over binned and ungrouped count data.

use census_model::Distribution;
use census_recode::BinEstimates;
use tracing::warn;

/// The median bin of a binned distribution.
///
/// Walks categories in display order accumulating counts; the first bin whose
/// cumulative count reaches half the total is the median bin. Returns `None`
/// for an empty distribution or a non-positive total.
pub fn median_category(dist: &Distribution) -> Option<&str> {
    let total = dist.total();
    if dist.is_empty() || total <= 0.0 {
        return None;
    }
    let half = total / 2.0;
    let mut cumulative = 0.0;
    for (label, entry) in dist.iter() {
        cumulative += entry.count();
        if cumulative >= half {
            return Some(label);
        }
    }
    None
}

/// Numeric estimate of the median bin, looked up in `estimates`.
///
/// Absent when there is no median bin, when the bin has no defined estimate
/// (e.g. "Unspecified") or when `estimates` does not know the bin.
pub fn median_estimate(dist: &Distribution, estimates: &BinEstimates) -> Option<f64> {
    let bin = median_category(dist)?;
    match estimates.lookup(bin) {
        Some(estimate) => estimate,
        None => {
            warn!(
                bin,
                table = estimates.name(),
                "median bin has no estimate entry"
            );
            None
        }
    }
}

/// Median of ungrouped numeric values given as `(value, count)` pairs.
///
/// Values are sorted ascending. When the cumulative count passes half the
/// total the current value is the median; when it lands exactly on half, the
/// median is the mean of the current value and the next value with a
/// non-zero count.
pub fn exact_median(values: &[(f64, f64)]) -> Option<f64> {
    let mut sorted: Vec<(f64, f64)> = values
        .iter()
        .copied()
        .filter(|(_, count)| *count > 0.0)
        .collect();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

    let total: f64 = sorted.iter().map(|(_, count)| count).sum();
    if total <= 0.0 {
        return None;
    }
    let half = total / 2.0;
    let mut cumulative = 0.0;
    for (index, (value, count)) in sorted.iter().enumerate() {
        cumulative += count;
        if cumulative > half {
            return Some(*value);
        }
        if cumulative == half {
            let next = sorted.get(index + 1).map_or(*value, |(next, _)| *next);
            return Some((value + next) / 2.0);
        }
    }
    sorted.last().map(|(value, _)| *value)
}
