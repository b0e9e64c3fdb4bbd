use census_model::{CategoryCount, Distribution, GeoValues};

/// Label of the synthetic remainder category.
pub const REMAINDER_LABEL: &str = "Other";

/// Keeps the `keep` largest categories and folds the rest into a trailing
/// "Other" category.
///
/// Kept categories are ordered by count, largest first; ties keep their
/// display order. An existing "Other" category is always folded into the
/// remainder. Every figure (comparative levels and percentages included) is
/// summed key by key. Distributions with at most `keep + 1` categories are
/// left untouched, so "Other" never stands in for a single category.
pub fn group_remainder(dist: &mut Distribution, keep: usize) {
    if dist.len() <= keep + 1 {
        return;
    }

    let mut remainder = CategoryCount {
        name: REMAINDER_LABEL.to_string(),
        numerators: GeoValues::new(),
        values: GeoValues::new(),
    };
    let mut candidates = Vec::with_capacity(dist.len());
    for (label, entry) in dist.drain() {
        if label == REMAINDER_LABEL {
            remainder.absorb(&entry);
        } else {
            candidates.push((label, entry));
        }
    }
    candidates.sort_by(|a, b| b.1.count().total_cmp(&a.1.count()));

    for (index, (label, entry)) in candidates.into_iter().enumerate() {
        if index < keep {
            dist.insert(label, entry);
        } else {
            remainder.absorb(&entry);
        }
    }
    dist.insert(REMAINDER_LABEL, remainder);
}
