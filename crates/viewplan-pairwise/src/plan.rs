//! One-call planning driven by `PlanConfig`.
//!
//! Runs the whole `PairwiseSetup` pipeline with the configured strategy and
//! optional steps, and returns the subsets ready for the matching stage
//! together with a report of what each step pruned.

use serde::Serialize;
use viewplan_core::{
    HasTimepoint, OverlapDetection, PairwiseError, PlanConfig, Timepoint, ViewToken,
};

use crate::group::Group;
use crate::pair::Pair;
use crate::setup::PairwiseSetup;
use crate::strategies::{AnyStrategy, PairingStrategy};
use crate::subset::Subset;

/// Counts collected while planning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlanReport {
    pub strategy: String,
    pub views: usize,
    pub groups: usize,
    pub candidate_pairs: usize,
    pub redundant_pairs: usize,
    pub non_overlapping_pairs: usize,
    pub fixed_pruned_pairs: usize,
    pub final_pairs: usize,
    pub subsets: usize,
    pub trivial_subsets: usize,
}

/// Result of a planning run, ready to hand to registration workers.
#[derive(Debug, Clone, Serialize)]
pub struct Plan<V> {
    pub subsets: Vec<Subset<V>>,
    /// `grouped_pairs()` of each subset, index-aligned with `subsets`.
    pub grouped_pairs: Vec<Vec<Pair<Group<V>>>>,
    pub report: PlanReport,
}

impl<V: ViewToken> Plan<V> {
    /// Subsets that still have pairs to register.
    pub fn jobs(&self) -> impl Iterator<Item = &Subset<V>> {
        self.subsets.iter().filter(|s| !s.is_trivial())
    }

    /// Pairs left across all subsets.
    pub fn total_pairs(&self) -> usize {
        self.subsets.iter().map(|s| s.pairs().len()).sum()
    }
}

/// Plan the pairwise comparisons for `views`.
///
/// The overlap oracle is consulted only when given and when
/// `pipeline.remove_non_overlapping` is enabled.
pub fn plan<V: ViewToken + HasTimepoint>(
    views: Vec<V>,
    groups: Vec<Group<V>>,
    config: &PlanConfig,
    overlap: Option<&dyn OverlapDetection<V>>,
) -> Result<Plan<V>, PairwiseError> {
    let strategy = AnyStrategy::from_config(&config.strategy)?;
    let pipeline = &config.pipeline;
    let mut setup = PairwiseSetup::new(views, groups, strategy)?;

    let mut report = PlanReport {
        strategy: PairingStrategy::<V>::name(setup.strategy()).to_string(),
        views: setup.views().len(),
        groups: setup.groups().len(),
        ..Default::default()
    };

    setup.define_pairs();
    report.redundant_pairs = setup.redundant_pairs().len();
    report.candidate_pairs = setup.pairs().len() + report.redundant_pairs;

    if let Some(overlap) = overlap.filter(|_| pipeline.effective_remove_non_overlapping()) {
        report.non_overlapping_pairs = setup.remove_non_overlapping_pairs(overlap).len();
    }

    setup.reorder_pairs();
    setup.detect_subsets()?;
    if pipeline.effective_sort_subsets() {
        setup.sort_subsets();
    }

    let fixed = fixed_views(
        &setup,
        &pipeline.fixed_timepoints,
        pipeline.effective_fix_default_views(),
    );
    report.fixed_pruned_pairs = setup.fix_views_in_all_subsets(&fixed).len();

    let subsets = setup.into_subsets();
    let grouped_pairs: Vec<_> = subsets.iter().map(Subset::grouped_pairs).collect();

    report.final_pairs = subsets.iter().map(|s| s.pairs().len()).sum();
    report.subsets = subsets.len();
    report.trivial_subsets = subsets.iter().filter(|s| s.is_trivial()).count();

    tracing::info!(
        strategy = %report.strategy,
        views = report.views,
        groups = report.groups,
        candidate_pairs = report.candidate_pairs,
        redundant_pairs = report.redundant_pairs,
        non_overlapping_pairs = report.non_overlapping_pairs,
        fixed_pruned_pairs = report.fixed_pruned_pairs,
        final_pairs = report.final_pairs,
        subsets = report.subsets,
        trivial_subsets = report.trivial_subsets,
        "pairwise plan ready"
    );

    Ok(Plan {
        subsets,
        grouped_pairs,
        report,
    })
}

/// Strategy defaults (when enabled) plus every view of `timepoints`, without repeats.
fn fixed_views<V, S>(
    setup: &PairwiseSetup<V, S>,
    timepoints: &[Timepoint],
    defaults: bool,
) -> Vec<V>
where
    V: ViewToken + HasTimepoint,
    S: PairingStrategy<V>,
{
    let mut fixed = if defaults {
        setup.default_fixed_views()
    } else {
        Vec::new()
    };
    for view in setup.views() {
        if timepoints.contains(&view.timepoint()) && !fixed.contains(view) {
            fixed.push(view.clone());
        }
    }
    fixed
}

#[cfg(test)]
mod tests {
    use viewplan_core::ViewId;

    use super::*;

    fn grid(timepoints: i64, setups: u32) -> Vec<ViewId> {
        (0..timepoints)
            .flat_map(|t| (0..setups).map(move |s| ViewId::new(t, s)))
            .collect()
    }

    #[test]
    fn default_config_plans_all_to_all() {
        let plan = plan(grid(1, 3), vec![], &PlanConfig::default(), None).unwrap();
        assert_eq!(plan.report.strategy, "all_to_all");
        assert_eq!(plan.report.candidate_pairs, 3);
        assert_eq!(plan.report.final_pairs, 3);
        assert_eq!(plan.subsets.len(), 1);
        assert_eq!(plan.jobs().count(), 1);
        assert_eq!(plan.grouped_pairs[0].len(), 3);
    }

    #[test]
    fn extra_fixed_timepoints_prune_pairs() {
        let config = PlanConfig::from_toml(
            r#"
            [pipeline]
            fixed_timepoints = [0]
            "#,
        )
        .unwrap();
        let plan = plan(grid(2, 2), vec![], &config, None).unwrap();
        // 6 candidates; (tp0/setup0, tp0/setup1) is fixed on both ends.
        assert_eq!(plan.report.candidate_pairs, 6);
        assert_eq!(plan.report.fixed_pruned_pairs, 1);
        assert_eq!(plan.total_pairs(), 5);
    }

    #[test]
    fn oracle_is_skipped_when_disabled() {
        let config = PlanConfig::from_toml(
            r#"
            [pipeline]
            remove_non_overlapping = false
            "#,
        )
        .unwrap();
        let never: &dyn OverlapDetection<ViewId> = &|_: &ViewId, _: &ViewId| false;
        let plan = plan(grid(1, 2), vec![], &config, Some(never)).unwrap();
        assert_eq!(plan.report.non_overlapping_pairs, 0);
        assert_eq!(plan.total_pairs(), 1);
    }
}
