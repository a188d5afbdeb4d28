//! Criterion benchmarks for viewplan-pairwise.
//!
//! Datasets are synthetic timepoint × setup grids; groups join setups two
//! by two within each timepoint.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use test_fixtures::{grid_views, paired_setup_groups};
use viewplan_core::tracing::init_tracing;
use viewplan_core::{PlanConfig, ViewId};
use viewplan_pairwise::setup::detect_subsets;
use viewplan_pairwise::{plan, AllToAll, Group, PairwiseSetup, ReferenceTimepoint};

fn groups(timepoints: i64, setups: u32) -> Vec<Group<ViewId>> {
    paired_setup_groups(timepoints, setups)
        .into_iter()
        .map(Group::new)
        .collect()
}

// All-to-all pair definition, 20 timepoints × 6 setups.
fn bench_define_pairs_all_to_all(c: &mut Criterion) {
    let views = grid_views(20, 6);
    let groups = groups(20, 6);

    c.bench_function("define_pairs_all_to_all_120_views", |bench| {
        bench.iter(|| {
            let mut setup = PairwiseSetup::new(views.clone(), groups.clone(), AllToAll).unwrap();
            black_box(setup.define_pairs().len());
        });
    });
}

// Generic engine over a precomputed pair list.
fn bench_detect_subsets_generic(c: &mut Criterion) {
    let views = grid_views(50, 4);
    let mut setup = PairwiseSetup::new(views, groups(50, 4), ReferenceTimepoint::new(0)).unwrap();
    setup.define_pairs();
    let pairs = setup.pairs().to_vec();

    c.bench_function("detect_subsets_generic_200_views", |bench| {
        bench.iter(|| {
            let subsets = detect_subsets(setup.views(), &pairs, setup.groups()).unwrap();
            black_box(subsets.len());
        });
    });
}

// Same input through the per-timepoint reference path.
fn bench_detect_subsets_reference(c: &mut Criterion) {
    let views = grid_views(50, 4);
    let mut setup = PairwiseSetup::new(views, groups(50, 4), ReferenceTimepoint::new(0)).unwrap();
    setup.define_pairs();

    c.bench_function("detect_subsets_reference_200_views", |bench| {
        bench.iter(|| {
            let subsets = setup.detect_subsets().unwrap();
            black_box(subsets.len());
        });
    });
}

// Full config-driven pipeline with the default config.
fn bench_plan_default(c: &mut Criterion) {
    init_tracing();
    let views = grid_views(10, 6);
    let groups = groups(10, 6);
    let config = PlanConfig::default();

    c.bench_function("plan_default_60_views", |bench| {
        bench.iter(|| {
            let plan = plan(views.clone(), groups.clone(), &config, None).unwrap();
            black_box(plan.report.final_pairs);
        });
    });
}

criterion_group!(
    benches,
    bench_define_pairs_all_to_all,
    bench_detect_subsets_generic,
    bench_detect_subsets_reference,
    bench_plan_default,
);
criterion_main!(benches);
