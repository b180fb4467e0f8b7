#[allow(unused_macros)]
macro_rules! test_group_distance_assert {
    ($group_name:ident,$($ident:ident:$a:literal,$b:literal=$expected:expr),*) => {
    mod $group_name {
        use pretty_assertions::assert_eq;

        use crate::calc::Calculator;

        $(
            #[test]
            fn $ident() {
                // every value under the default weights is a multiple of 0.5 and therefore exact
                // in a f64, no tolerance needed
                let mut c = Calculator::default();
                assert_eq!(c.distance_naive($a, $b), $expected);
                assert_eq!(c.distance_memoized($a, $b), $expected);
                assert_eq!(c.distance_iterative($a, $b), $expected);
            }
        )*
        }
    };
}

#[cfg(test)]
mod distances {
    test_group_distance_assert! {
        empty,
        both_empty: "",""=0.0,
        add_whole_string: "","abc"=3.0,
        remove_whole_string: "abc",""=3.0
    }

    test_group_distance_assert! {
        single_edits,
        substitution_beats_add_plus_remove: "a","b"=1.5,
        insertion: "ab","abc"=1.0,
        deletion: "abc","ab"=1.0,
        swap_via_remove_and_add: "ab","ba"=2.0
    }

    test_group_distance_assert! {
        worked_examples,
        // https://en.wikipedia.org/wiki/Levenshtein_distance#Example, two substitutions and one
        // insertion under the default weights
        kitten_sitting: "kitten","sitting"=4.0,
        // all three pairs differ, three substitutions beat any add/remove detour
        cat_dog: "CAT","DOG"=4.5,
        flaw_lawn: "flaw","lawn"=2.0,
        algorithme_gorilles: "algorithme","gorilles"=7.0
    }
}

#[cfg(test)]
mod properties {
    use crate::calc::{Calculator, EPSILON};
    use crate::types::CostModel;

    /// assert that all three evaluators agree on the distance within [EPSILON] and return it
    fn agreement(costs: CostModel, a: &str, b: &str) -> f64 {
        let mut c = Calculator::new(costs);
        let naive = c.distance_naive(a, b);
        let memoized = c.distance_memoized(a, b);
        let iterative = c.distance_iterative(a, b);
        assert!(
            (naive - memoized).abs() < EPSILON,
            "naive {naive} != memoized {memoized} for {a:?}/{b:?}"
        );
        assert!(
            (naive - iterative).abs() < EPSILON,
            "naive {naive} != iterative {iterative} for {a:?}/{b:?}"
        );
        naive
    }

    const PAIRS: &[(&str, &str)] = &[
        ("", ""),
        ("a", ""),
        ("", "a"),
        ("ab", "ba"),
        ("CAT", "DOG"),
        ("flaw", "lawn"),
        ("kitten", "sitting"),
        ("algorithme", "gorilles"),
    ];

    #[test]
    fn evaluators_agree_under_asymmetric_weights() {
        let costs = CostModel::new(2.0, 0.5, 1.25).unwrap();
        for &(a, b) in PAIRS {
            agreement(costs, a, b);
        }
    }

    #[test]
    fn identical_strings_cost_nothing() {
        for s in ["", "a", "CAT", "algorithme", "same same"] {
            assert_eq!(agreement(CostModel::default(), s, s), 0.0);
        }
    }

    #[test]
    fn distance_against_empty_scales_with_the_weight() {
        let costs = CostModel::new(0.25, 4.0, 1.0).unwrap();
        assert_eq!(agreement(costs, "", "abcd"), 4.0 * 0.25);
        assert_eq!(agreement(costs, "abcd", ""), 4.0 * 4.0);
    }

    /// the distance is not symmetric when add and remove differ, but swapping the arguments and
    /// swapping the two weights describes the reverse transformation
    #[test]
    fn swapping_arguments_swaps_add_and_remove() {
        let costs = CostModel::new(2.0, 0.5, 1.25).unwrap();
        let swapped = CostModel::new(0.5, 2.0, 1.25).unwrap();
        for &(a, b) in PAIRS {
            assert!((agreement(costs, a, b) - agreement(swapped, b, a)).abs() < EPSILON);
        }
    }

    /// appending or prepending the same character to both strings reduces through the equal
    /// character rule and keeps the distance unchanged
    #[test]
    fn shared_affixes_do_not_change_the_distance() {
        let costs = CostModel::new(1.5, 0.75, 2.0).unwrap();
        let base = agreement(costs, "kitten", "sitting");
        assert!((agreement(costs, "kittenx", "sittingx") - base).abs() < EPSILON);
        assert!((agreement(costs, "xkitten", "xsitting") - base).abs() < EPSILON);
    }
}

#[cfg(test)]
mod cache {
    use pretty_assertions::assert_eq;

    use crate::calc::Calculator;
    use crate::types::CostModel;

    #[test]
    fn repeated_calls_are_answered_from_the_cache() {
        let mut c = Calculator::new(CostModel::default());
        let first = c.distance_memoized("algorithme", "gorilles");
        let fresh = c.computations;
        assert!(fresh > 0);

        let second = c.distance_memoized("algorithme", "gorilles");
        assert_eq!(first, second);
        // the whole pair mismatches on its first characters and was stored, the second call is a
        // single lookup
        assert_eq!(c.computations, fresh);
    }

    #[test]
    fn cache_grows_across_distinct_pairs() {
        let mut c = Calculator::new(CostModel::default());
        c.distance_memoized("CAT", "DOG");
        let after_first = c.computations;
        c.distance_memoized("kitten", "sitting");
        assert!(c.computations > after_first);
    }

    #[test]
    fn pure_evaluators_do_not_touch_the_cache() {
        let mut c = Calculator::new(CostModel::default());
        c.distance_naive("CAT", "DOG");
        c.distance_iterative("CAT", "DOG");
        assert_eq!(c.computations, 0);
        let cached = c.distance_memoized("CAT", "DOG");
        assert!(c.computations > 0);
        assert_eq!(cached, c.distance_naive("CAT", "DOG"));
    }
}
