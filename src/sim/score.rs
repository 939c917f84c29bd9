//! Revenue of a sold burger
//!
//! Coverage of the ordered ingredients counts, interior order does not. Both
//! ends must be a bun, though which bun does not matter.

use std::collections::HashSet;

use super::ingredient::IngredientKind;

/// Score a sold burger against the order it was built for
///
/// +1 per distinct expected kind present, -1 per distinct unexpected kind,
/// -1 if the first layer is not a bun, -1 if the last layer is not a bun
/// (a burger with fewer than two layers has no last layer). Never negative.
pub fn revenue(expected: &[IngredientKind], actual: &[IngredientKind]) -> u32 {
    let expected_set: HashSet<_> = expected.iter().copied().collect();
    let actual_set: HashSet<_> = actual.iter().copied().collect();

    let matched = expected_set.intersection(&actual_set).count() as i64;
    let unexpected = actual_set.difference(&expected_set).count() as i64;

    let mut revenue = matched - unexpected;

    if !actual.first().is_some_and(|kind| kind.is_bun()) {
        revenue -= 1;
    }
    let last = if actual.len() < 2 { None } else { actual.last() };
    if !last.is_some_and(|kind| kind.is_bun()) {
        revenue -= 1;
    }

    revenue.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::sim::ingredient::IngredientKind::{
        BunBottom as B, BunTop as T, Cheese as C, Ketchup as K, Mayo as M, PattyBeef as P,
        Salad as S, Tomatoes as To,
    };

    const ORDER: [IngredientKind; 7] = [B, To, P, K, C, S, T];

    #[test]
    fn test_revenue_scenarios() {
        assert_eq!(revenue(&ORDER, &[]), 0, "empty burger");
        assert_eq!(revenue(&ORDER, &[B]), 0, "single bun");
        assert_eq!(revenue(&ORDER, &[B, T]), 2, "outer buns only");
        assert_eq!(revenue(&ORDER, &[B, To, P]), 2, "missing top bun");
        assert_eq!(revenue(&ORDER, &[To, P, K, T]), 3, "missing bottom bun");
        assert_eq!(revenue(&ORDER, &[To, P, K, C, S]), 3, "missing both buns");
        assert_eq!(revenue(&ORDER, &[B, To, P, C, S, T]), 6, "missing ingredient");
        assert_eq!(revenue(&ORDER, &ORDER), 7, "full match");
        assert_eq!(revenue(&ORDER, &[B, To, P, K, M, C, S, T]), 6, "unexpected ingredient");
        assert_eq!(revenue(&ORDER, &[B, P, K, M, C, S, T]), 5, "missing and unexpected");
    }

    #[test]
    fn test_interior_order_does_not_matter() {
        assert_eq!(revenue(&ORDER, &[B, P, To, S, C, K, T]), 7);
    }

    #[test]
    fn test_bun_position_matters() {
        assert_eq!(revenue(&ORDER, &[To, B, P, K, C, T, S]), 5);
    }

    #[test]
    fn test_swapped_outer_buns() {
        assert_eq!(revenue(&ORDER, &[T, P, To, S, C, K, B]), 7);
    }

    #[test]
    fn test_duplicates() {
        assert_eq!(revenue(&ORDER, &[B, To, P, K, C, S, C, T]), 7, "duplicate expected");
        assert_eq!(revenue(&ORDER, &[B, To, P, M, K, M, C, S, T]), 6, "duplicate unexpected");
    }

    #[test]
    fn test_single_layer_hits_both_bun_checks() {
        // One layer is both first and last, but only the first check can pass:
        // the last-layer check requires at least two layers.
        assert_eq!(revenue(&[B, T], &[B]), 0);
        assert_eq!(revenue(&[B, T, P], &[B]), 0);
        assert_eq!(revenue(&[B, P, S, T], &[P]), 0);
        assert_eq!(revenue(&[B, P, S, C, T], &[B, T, P, S, C]), 4);
    }

    fn arb_kind() -> impl Strategy<Value = IngredientKind> {
        proptest::sample::select(IngredientKind::ALL.to_vec())
    }

    fn arb_kinds(max: usize) -> impl Strategy<Value = Vec<IngredientKind>> {
        proptest::collection::vec(arb_kind(), 0..max)
    }

    proptest! {
        #[test]
        fn prop_interior_permutation_is_irrelevant(
            expected in arb_kinds(10),
            actual in arb_kinds(12),
            seed in any::<u64>(),
        ) {
            let mut shuffled = actual.clone();
            if shuffled.len() > 3 {
                let interior_len = shuffled.len() - 2;
                let interior = &mut shuffled[1..=interior_len];
                interior.rotate_left((seed as usize) % interior_len);
                interior.reverse();
            }
            prop_assert_eq!(revenue(&expected, &actual), revenue(&expected, &shuffled));
        }

        #[test]
        fn prop_duplicate_expected_kinds_add_nothing(
            expected in arb_kinds(10),
            actual in arb_kinds(12),
        ) {
            let mut doubled = expected.clone();
            doubled.extend(expected.iter().copied());
            prop_assert_eq!(revenue(&expected, &actual), revenue(&doubled, &actual));
        }

        #[test]
        fn prop_repeated_unexpected_kind_costs_at_most_one(
            expected in arb_kinds(10),
            extra in arb_kind(),
            copies in 1usize..5,
        ) {
            let expected: Vec<_> = expected.into_iter().filter(|k| *k != extra).collect();
            let mut base = vec![B];
            base.extend(expected.iter().copied().filter(|k| !k.is_bun()));
            base.push(T);

            let mut with_extra = base.clone();
            for _ in 0..copies {
                with_extra.insert(1, extra);
            }

            let before = revenue(&expected, &base);
            let after = revenue(&expected, &with_extra);
            prop_assert!(after <= before && before - after <= 1);
        }

        #[test]
        fn prop_outer_bun_variant_is_irrelevant(
            expected in arb_kinds(10),
            interior in proptest::collection::vec(arb_kind(), 0..8),
        ) {
            let build = |first, last| {
                let mut kinds = vec![first];
                kinds.extend(interior.iter().copied());
                kinds.push(last);
                kinds
            };

            prop_assert_eq!(revenue(&expected, &build(B, T)), revenue(&expected, &build(T, B)));
        }

        #[test]
        fn prop_revenue_never_exceeds_distinct_expected(
            expected in arb_kinds(10),
            actual in arb_kinds(12),
        ) {
            let distinct: HashSet<_> = expected.iter().collect();
            prop_assert!(revenue(&expected, &actual) as usize <= distinct.len());
        }
    }
}
