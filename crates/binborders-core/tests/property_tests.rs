//! Property-based tests for border computation
//!
//! These tests pin the structural guarantees every accepted border set
//! carries, across randomly generated samples and bin counts.

#[cfg(test)]
mod property_tests {
    use binborders_core::Strategy::{ExpWidth, Occupancy, Width};
    use binborders_core::{
        compute_borders, compute_borders_sorted, Error, SAFETY_GAP_DIVISOR, STEP_HEADROOM,
    };
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, LogNormal};

    /// Ascending samples with positive gaps, so extremes are always distinct
    fn ascending_sample(
        min_len: usize,
        max_len: usize,
    ) -> impl proptest::strategy::Strategy<Value = Vec<f64>> {
        (
            proptest::collection::vec(0.001f64..500.0, min_len..=max_len),
            -500.0f64..500.0,
        )
            .prop_map(|(gaps, start)| {
                let mut value = start;
                gaps.into_iter()
                    .map(|gap| {
                        value += gap;
                        value
                    })
                    .collect()
            })
    }

    /// Ascending samples whose range comfortably exceeds one, as the
    /// exponential strategy needs
    fn wide_ascending_sample(
        min_len: usize,
        max_len: usize,
    ) -> impl proptest::strategy::Strategy<Value = Vec<f64>> {
        (
            proptest::collection::vec(1.5f64..100.0, min_len..=max_len),
            -500.0f64..500.0,
        )
            .prop_map(|(gaps, start)| {
                let mut value = start;
                gaps.into_iter()
                    .map(|gap| {
                        value += gap;
                        value
                    })
                    .collect()
            })
    }

    /// Bin count, per-bin population, and gaps for an evenly divisible sample
    fn occupancy_case() -> impl proptest::strategy::Strategy<Value = (usize, usize, Vec<f64>)> {
        (1usize..=16, 2usize..=32).prop_flat_map(|(num_bins, per_bin)| {
            (
                Just(num_bins),
                Just(per_bin),
                proptest::collection::vec(0.001f64..100.0, num_bins * per_bin),
            )
        })
    }

    fn cumsum(gaps: &[f64]) -> Vec<f64> {
        let mut value = 0.0;
        gaps.iter()
            .map(|gap| {
                value += gap;
                value
            })
            .collect()
    }

    // Deterministic smoke test over a skewed sample, all strategies
    #[test]
    fn test_all_strategies_on_lognormal_sample() {
        let mut rng = StdRng::seed_from_u64(7);
        let lognormal = LogNormal::new(0.0, 1.0).expect("valid parameters");
        let sample: Vec<f64> = (0..10_000).map(|_| lognormal.sample(&mut rng)).collect();

        let min = sample.iter().copied().fold(f64::INFINITY, f64::min);
        let max = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        for strategy in [Occupancy, Width, ExpWidth] {
            let borders = compute_borders(&sample, strategy, 32).unwrap();
            assert_eq!(borders.num_borders(), 33);
            assert!(borders.edges().windows(2).all(|pair| pair[0] < pair[1]));
            assert!(borders.first() < min);
            assert!(borders.last() > max);
        }
    }

    proptest! {
        // Property: accepted border sets hold num_bins + 1 strictly
        // increasing edges with the outer pair beyond the extremes
        #[test]
        fn prop_width_invariants(sample in ascending_sample(2, 200), num_bins in 1usize..=64) {
            let min = sample[0];
            let max = sample[sample.len() - 1];
            let borders = compute_borders_sorted(&sample, Width, num_bins).unwrap();

            prop_assert_eq!(borders.num_borders(), num_bins + 1);
            prop_assert!(borders.edges().windows(2).all(|pair| pair[0] < pair[1]));

            // Outer borders carry exactly one safety gap
            let gap = (max - min) / SAFETY_GAP_DIVISOR;
            prop_assert_eq!(borders.first(), min - gap);
            prop_assert_eq!(borders.last(), max + gap);
        }

        // Property: the width grid is uniform away from the adjusted borders
        #[test]
        fn prop_width_interior_spacing(sample in ascending_sample(2, 200), num_bins in 3usize..=64) {
            let min = sample[0];
            let max = sample[sample.len() - 1];
            let step = (max - min) / (num_bins as f64 + STEP_HEADROOM);

            let borders = compute_borders_sorted(&sample, Width, num_bins).unwrap();
            let edges = borders.edges();
            for pair in edges[1..num_bins].windows(2) {
                let gap = pair[1] - pair[0];
                prop_assert!((gap - step).abs() <= step * 1e-9);
            }
        }

        // Property: expwidth invariants hold whenever the range exceeds one
        #[test]
        fn prop_expwidth_invariants(sample in wide_ascending_sample(2, 120), num_bins in 1usize..=32) {
            let min = sample[0];
            let max = sample[sample.len() - 1];
            let borders = compute_borders_sorted(&sample, ExpWidth, num_bins).unwrap();

            prop_assert_eq!(borders.num_borders(), num_bins + 1);
            prop_assert!(borders.edges().windows(2).all(|pair| pair[0] < pair[1]));
            prop_assert!(borders.first() < min);
            prop_assert!(borders.last() > max);
        }

        // Property: interior expwidth bins widen monotonically
        #[test]
        fn prop_expwidth_growing_widths(sample in wide_ascending_sample(2, 120), num_bins in 4usize..=32) {
            let borders = compute_borders_sorted(&sample, ExpWidth, num_bins).unwrap();
            let widths = borders.widths();
            for pair in widths[1..widths.len() - 1].windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
        }

        // Property: evenly divisible occupancy puts the same count in every bin
        #[test]
        fn prop_occupancy_equal_population((num_bins, per_bin, gaps) in occupancy_case()) {
            let sample = cumsum(&gaps);
            let borders = compute_borders_sorted(&sample, Occupancy, num_bins).unwrap();
            prop_assert_eq!(borders.num_borders(), num_bins + 1);

            let mut counts = vec![0usize; num_bins];
            for &value in &sample {
                let index = borders.bin_index(value).expect("value inside outer borders");
                counts[index] += 1;
            }
            prop_assert_eq!(counts, vec![per_bin; num_bins]);
        }

        // Property: the occupancy stride walk decides between success,
        // a count mismatch, and insufficient data
        #[test]
        fn prop_occupancy_count_follows_stride(sample in ascending_sample(2, 300), num_bins in 1usize..=64) {
            let len = sample.len();
            let result = compute_borders_sorted(&sample, Occupancy, num_bins);

            if len < num_bins {
                prop_assert!(
                    matches!(result, Err(Error::InsufficientData { .. })),
                    "assertion failed: matches!(result, Err(Error::InsufficientData {{ .. }}))"
                );
            } else {
                let stride = len / num_bins;
                let picks = len / stride;
                if picks == num_bins {
                    prop_assert_eq!(result.unwrap().num_borders(), num_bins + 1);
                } else {
                    let expected = num_bins + 1;
                    let actual = picks + 1;
                    prop_assert!(
                        matches!(
                            result,
                            Err(Error::BorderCount { expected: e, actual: a }) if e == expected && a == actual
                        ),
                        "assertion failed: matches!(result, Err(Error::BorderCount {{ expected: e, actual: a }}) if e == expected && a == actual)"
                    );
                }
            }
        }

        // Property: input order never changes the result
        #[test]
        fn prop_order_insensitive(sample in ascending_sample(2, 100), num_bins in 1usize..=8) {
            let mut reversed = sample.clone();
            reversed.reverse();

            for strategy in [Occupancy, Width, ExpWidth] {
                let from_reversed = compute_borders(&reversed, strategy, num_bins);
                let from_sorted = compute_borders_sorted(&sample, strategy, num_bins);
                match (from_reversed, from_sorted) {
                    (Ok(a), Ok(b)) => prop_assert_eq!(a.edges(), b.edges()),
                    (Err(_), Err(_)) => {}
                    _ => prop_assert!(false, "sorted and reversed inputs disagreed"),
                }
            }
        }
    }
}
