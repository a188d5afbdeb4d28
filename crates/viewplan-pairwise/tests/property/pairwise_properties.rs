use std::collections::BTreeSet;

use proptest::prelude::*;
use test_fixtures::grid_views;
use viewplan_core::ViewId;
use viewplan_pairwise::setup::detect_subsets;
use viewplan_pairwise::{
    AllToAll, AllToAllRange, AnyStrategy, Group, IndividualTimepoints, Pair, PairingStrategy,
    PairwiseSetup, ReferenceTimepoint, Subset, TimepointRange,
};

fn strategy_for(choice: u8, param: i64) -> AnyStrategy {
    match choice % 4 {
        0 => AnyStrategy::AllToAll(AllToAll),
        1 => AnyStrategy::AllToAllRange(AllToAllRange::new(TimepointRange::new(param))),
        2 => AnyStrategy::IndividualTimepoints(IndividualTimepoints::new()),
        _ => AnyStrategy::ReferenceTimepoint(ReferenceTimepoint::new(param)),
    }
}

fn arb_views() -> impl Strategy<Value = Vec<ViewId>> {
    (1i64..5, 1u32..4).prop_map(|(t, s)| grid_views(t, s))
}

/// Groups drawn from the same coordinate space as `arb_views`; members
/// outside the drawn grid are dropped by the setup.
fn arb_groups() -> impl Strategy<Value = Vec<Group<ViewId>>> {
    prop::collection::vec(
        prop::collection::vec((0i64..5, 0u32..4), 1..4)
            .prop_map(|members| Group::new(members.into_iter().map(ViewId::from))),
        0..4,
    )
}

/// Groups that never span two timepoints.
fn arb_local_groups() -> impl Strategy<Value = Vec<Group<ViewId>>> {
    prop::collection::vec(
        (0i64..5, prop::collection::vec(0u32..4, 1..3))
            .prop_map(|(t, setups)| Group::new(setups.into_iter().map(|s| ViewId::new(t, s)))),
        0..4,
    )
}

/// Pairs that stay within one timepoint or touch `reference`, repeats allowed.
fn arb_star_pairs(reference: i64) -> impl Strategy<Value = Vec<Pair<ViewId>>> {
    prop::collection::vec(
        (any::<bool>(), 0i64..5, 0u32..4, 0u32..4).prop_map(move |(local, t, s1, s2)| {
            let other = if local { t } else { reference };
            Pair::new(ViewId::new(t, s1), ViewId::new(other, s2))
        }),
        0..12,
    )
}

fn planned(
    views: Vec<ViewId>,
    groups: Vec<Group<ViewId>>,
    strategy: AnyStrategy,
) -> PairwiseSetup<ViewId, AnyStrategy> {
    let mut setup = PairwiseSetup::new(views, groups, strategy).unwrap();
    setup.define_pairs();
    setup.reorder_pairs();
    setup.detect_subsets().unwrap();
    setup
}

fn subset_of(subsets: &[Subset<ViewId>], view: &ViewId) -> Option<usize> {
    subsets.iter().position(|s| s.contains(view))
}

/// Views and sorted pairs of every subset, ignoring subset and pair order.
fn contents(subsets: &[Subset<ViewId>]) -> BTreeSet<(BTreeSet<ViewId>, Vec<Pair<ViewId>>)> {
    subsets
        .iter()
        .map(|s| {
            let mut pairs = s.pairs().to_vec();
            pairs.sort();
            (s.views().clone(), pairs)
        })
        .collect()
}

fn total_pairs(subsets: &[Subset<ViewId>]) -> usize {
    subsets.iter().map(|s| s.pairs().len()).sum()
}

proptest! {
    #[test]
    fn subsets_partition_views_and_pairs(
        views in arb_views(),
        groups in arb_groups(),
        choice in 0u8..4,
        param in 0i64..3,
    ) {
        let setup = planned(views.clone(), groups, strategy_for(choice, param));
        let subsets = setup.subsets();

        for view in &views {
            let holders = subsets.iter().filter(|s| s.contains(view)).count();
            prop_assert_eq!(holders, 1, "view {} held by {} subsets", view, holders);
        }
        let total_views: usize = subsets.iter().map(|s| s.views().len()).sum();
        prop_assert_eq!(total_views, views.len());

        let total_pairs: usize = subsets.iter().map(|s| s.pairs().len()).sum();
        prop_assert_eq!(total_pairs, setup.pairs().len());
        for subset in subsets {
            for pair in subset.pairs() {
                prop_assert!(subset.contains(&pair.a) && subset.contains(&pair.b));
            }
        }
    }

    #[test]
    fn define_pairs_is_idempotent(
        views in arb_views(),
        groups in arb_groups(),
        choice in 0u8..4,
        param in 0i64..3,
    ) {
        let mut setup = PairwiseSetup::new(views, groups, strategy_for(choice, param)).unwrap();
        let first = setup.define_pairs().to_vec();
        let second = setup.define_pairs().to_vec();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn grouped_views_are_never_paired(
        views in arb_views(),
        groups in arb_groups(),
        choice in 0u8..4,
        param in 0i64..3,
    ) {
        let setup = planned(views, groups, strategy_for(choice, param));
        for pair in setup.pairs() {
            prop_assert!(!Group::contains_both(&pair.a, &pair.b, setup.groups()));
        }
    }

    #[test]
    fn views_linked_through_overlapping_groups_are_never_paired(
        views in arb_views(),
        groups in arb_groups(),
    ) {
        let setup = planned(views, groups, AnyStrategy::AllToAll(AllToAll));
        for pair in setup.pairs() {
            let ga = Group::member_of(&pair.a, setup.groups());
            let gb = Group::member_of(&pair.b, setup.groups());
            prop_assert!(!ga.iter().any(|x| gb.iter().any(|y| x.overlaps(y))));
        }
    }

    #[test]
    fn reordered_pairs_are_canonical(
        views in arb_views().prop_shuffle(),
        choice in 0u8..4,
        param in 0i64..3,
    ) {
        let setup = planned(views, vec![], strategy_for(choice, param));
        prop_assert!(setup.pairs().iter().all(|p| p.a <= p.b));
    }

    #[test]
    fn fixing_prunes_anchored_pairs(
        views in arb_views(),
        groups in arb_groups(),
        fixed in prop::collection::vec((0i64..5, 0u32..4), 0..6),
    ) {
        let fixed: Vec<ViewId> = fixed.into_iter().map(ViewId::from).collect();
        let mut setup = planned(views, groups, AnyStrategy::AllToAll(AllToAll));
        let before: usize = setup.subsets().iter().map(|s| s.pairs().len()).sum();
        let removed = setup.fix_views_in_all_subsets(&fixed);
        let after: usize = setup.subsets().iter().map(|s| s.pairs().len()).sum();
        prop_assert_eq!(before, after + removed.len());

        for subset in setup.subsets() {
            let anchored = subset.fixed_groups();
            for pair in subset.pairs() {
                let fa = subset.fixed_views().contains(&pair.a);
                let fb = subset.fixed_views().contains(&pair.b);
                prop_assert!(!(fa && fb), "pair {} has both endpoints fixed", pair);

                let spans = anchored.iter().enumerate().any(|(i, g1)| {
                    g1.contains(&pair.a)
                        && anchored.iter().enumerate().any(|(j, g2)| i != j && g2.contains(&pair.b))
                });
                prop_assert!(!spans, "pair {} links two anchored groups", pair);
            }
        }
    }

    #[test]
    fn pairs_and_groups_stay_connected(
        views in arb_views(),
        groups in arb_groups(),
        choice in 0u8..4,
        param in 0i64..3,
    ) {
        let setup = planned(views, groups, strategy_for(choice, param));
        let subsets = setup.subsets();
        for pair in setup.pairs() {
            prop_assert_eq!(subset_of(subsets, &pair.a), subset_of(subsets, &pair.b));
        }
        for group in setup.groups() {
            let homes: BTreeSet<Option<usize>> =
                group.iter().map(|v| subset_of(subsets, v)).collect();
            prop_assert_eq!(homes.len(), 1);
        }
    }

    #[test]
    fn reference_fast_path_matches_generic_engine(
        views in arb_views(),
        groups in arb_local_groups(),
        reference in 0i64..4,
    ) {
        let strategy = ReferenceTimepoint::new(reference);
        let mut setup = PairwiseSetup::new(views, groups, strategy).unwrap();
        setup.define_pairs();

        let fast = strategy
            .detect_subsets(setup.views(), setup.pairs(), setup.groups())
            .unwrap();
        let generic = detect_subsets(setup.views(), setup.pairs(), setup.groups()).unwrap();
        prop_assert_eq!(contents(&fast), contents(&generic));
    }

    #[test]
    fn reference_fast_path_keeps_raw_pair_lists(
        (reference, pairs) in (0i64..5).prop_flat_map(|r| (Just(r), arb_star_pairs(r))),
        groups in arb_local_groups(),
    ) {
        let views = grid_views(5, 4);
        let strategy = ReferenceTimepoint::new(reference);

        let fast = strategy.detect_subsets(&views, &pairs, &groups).unwrap();
        let generic = detect_subsets(&views, &pairs, &groups).unwrap();
        prop_assert_eq!(total_pairs(&fast), pairs.len());
        prop_assert_eq!(total_pairs(&generic), pairs.len());
        prop_assert_eq!(contents(&fast), contents(&generic));
    }
}
