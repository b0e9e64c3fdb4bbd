use census_model::{Distribution, THIS};

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `numerator` as a percentage of `denominator`, rounded to two decimals.
///
/// A zero denominator yields `0.0`.
pub fn percent(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    round2(numerator / denominator * 100.0)
}

/// Sets every category's `this` value to its count as a percentage of `total`.
pub fn set_percent_values(dist: &mut Distribution, total: f64) {
    for (_, entry) in dist.iter_mut() {
        let count = entry.count();
        entry.values.set(THIS, Some(percent(count, total)));
    }
}

/// Sets every category's `this` value to its raw count.
pub fn set_count_values(dist: &mut Distribution) {
    for (_, entry) in dist.iter_mut() {
        let count = entry.count();
        entry.values.set(THIS, Some(count));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_examples() {
        assert_eq!(percent(50.0, 200.0), 25.0);
        assert_eq!(percent(1.0, 3.0), 33.33);
        assert_eq!(percent(2.0, 3.0), 66.67);
        assert_eq!(percent(7.0, 0.0), 0.0);
    }

    #[test]
    fn percent_values_share_total() {
        let mut dist = Distribution::from_counts([("A", 1.0), ("B", 3.0)]);
        set_percent_values(&mut dist, 4.0);
        assert_eq!(dist.get("A").and_then(|e| e.values.this()), Some(25.0));
        assert_eq!(dist.get("B").and_then(|e| e.values.this()), Some(75.0));
    }
}
