use census_model::{CategoryCount, Distribution};
use census_recode::Recode;

use crate::error::Result;

/// Groups the categories of `dist` by their recoded label, summing counts.
///
/// Output follows `key_order` when given (labels absent from the data are
/// skipped, labels outside the order follow the ordered ones), otherwise the
/// order in which recoded labels are first seen. Metadata is kept.
///
/// # Errors
///
/// Fails when an exhaustive recode table meets an unknown label.
pub fn collapse<S: AsRef<str>>(
    dist: &Distribution,
    recode: &Recode,
    field: &str,
    key_order: Option<&[S]>,
) -> Result<Distribution> {
    let mut collapsed = Distribution::new();
    collapsed.set_metadata(dist.metadata().cloned());

    for (raw, entry) in dist.iter() {
        let label = recode.apply(field, raw)?;
        match collapsed.get_mut(&label) {
            Some(existing) => existing.absorb(entry),
            None => {
                let merged = CategoryCount {
                    name: label.clone(),
                    numerators: entry.numerators.clone(),
                    values: entry.values.clone(),
                };
                collapsed.insert(label, merged);
            }
        }
    }

    if let Some(order) = key_order {
        collapsed.reorder(order);
    }
    Ok(collapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use census_recode::age::{AGE_GROUPS, AGE_GROUP_ORDER};
    use census_recode::services::REFUSE_DISPOSAL;

    #[test]
    fn collisions_are_summed_in_key_order() {
        let dist = Distribution::from_counts([
            ("25 - 29", 4.0),
            ("00 - 04", 1.0),
            ("20 - 24", 3.0),
            ("05 - 09", 2.0),
        ]);
        let collapsed = collapse(
            &dist,
            &Recode::Table(&AGE_GROUPS),
            "age groups in 5 years",
            Some(AGE_GROUP_ORDER),
        )
        .expect("collapse");
        assert_eq!(collapsed.keys().collect::<Vec<_>>(), vec!["0-9", "20-29"]);
        assert_eq!(collapsed.count("0-9"), Some(3.0));
        assert_eq!(collapsed.count("20-29"), Some(7.0));
        assert_eq!(collapsed.get("0-9").map(|e| e.name.as_str()), Some("0-9"));
    }

    #[test]
    fn without_order_first_seen_wins() {
        let dist = Distribution::from_counts([("20 - 24", 3.0), ("00 - 04", 1.0)]);
        let collapsed =
            collapse::<&str>(&dist, &Recode::Table(&AGE_GROUPS), "age", None).expect("collapse");
        assert_eq!(collapsed.keys().collect::<Vec<_>>(), vec!["20-29", "0-9"]);
    }

    #[test]
    fn exhaustive_miss_fails() {
        let dist = Distribution::from_counts([("Burnt", 1.0)]);
        assert!(
            collapse::<&str>(&dist, &Recode::Table(&REFUSE_DISPOSAL), "refuse disposal", None)
                .is_err()
        );
    }
}
