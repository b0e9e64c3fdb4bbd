//! Property tests for recoding, percentages and remainder grouping.

use census_model::Distribution;
use census_recode::Recode;
use census_recode::age::{AGE_GROUPS, AGE_GROUP_ORDER};
use census_transform::{collapse, group_remainder, percent, set_percent_values};
use proptest::prelude::*;

const AGE_LABELS: &[&str] = &[
    "00 - 04", "05 - 09", "10 - 14", "15 - 19", "20 - 24", "25 - 29", "30 - 34", "35 - 39",
    "40 - 44", "45 - 49", "50 - 54", "55 - 59", "60 - 64", "65 - 69", "70 - 74", "75 - 79",
    "80 - 84", "85+", "Unlisted",
];

fn age_distribution() -> impl Strategy<Value = Distribution> {
    prop::collection::vec((0..AGE_LABELS.len(), 0u32..10_000), 0..40).prop_map(|pairs| {
        Distribution::from_counts(
            pairs
                .into_iter()
                .map(|(index, count)| (AGE_LABELS[index], f64::from(count))),
        )
    })
}

proptest! {
    #[test]
    fn recode_preserves_total(dist in age_distribution()) {
        let collapsed = collapse::<&str>(&dist, &Recode::Table(&AGE_GROUPS), "age", None)
            .expect("age recode is not exhaustive");
        prop_assert_eq!(collapsed.total(), dist.total());
        prop_assert!(collapsed.len() <= dist.len());
    }

    #[test]
    fn key_order_puts_unlisted_labels_last(dist in age_distribution()) {
        let collapsed = collapse(&dist, &Recode::Table(&AGE_GROUPS), "age", Some(AGE_GROUP_ORDER))
            .expect("age recode is not exhaustive");
        prop_assert_eq!(collapsed.total(), dist.total());
        let keys: Vec<&str> = collapsed.keys().collect();
        if let Some(position) = keys.iter().position(|k| *k == "Unlisted") {
            prop_assert_eq!(position, keys.len() - 1);
        }
    }

    #[test]
    fn percent_is_total(numerator in 0.0f64..1e9, denominator in 0.0f64..1e9) {
        let value = percent(numerator, denominator);
        prop_assert!(value.is_finite());
        if denominator == 0.0 {
            prop_assert_eq!(value, 0.0);
        }
    }

    #[test]
    fn percentages_do_not_exceed_total(dist in age_distribution()) {
        let mut dist = dist;
        let total = dist.total();
        set_percent_values(&mut dist, total);
        let sum: f64 = dist.iter().filter_map(|(_, e)| e.values.this()).sum();
        // Each share is rounded to two decimals.
        prop_assert!(sum <= 100.0 + 0.005 * dist.len() as f64);
    }

    #[test]
    fn remainder_preserves_total(dist in age_distribution(), keep in 1usize..6) {
        let mut grouped = dist.clone();
        group_remainder(&mut grouped, keep);
        prop_assert_eq!(grouped.total(), dist.total());
        prop_assert!(grouped.len() <= keep + 1 || grouped.len() == dist.len());
    }
}
