//! Test fixture loader for viewplan golden scenarios and benchmark datasets.
//!
//! Provides typed deserialization of the scenario JSON files and helpers for
//! building synthetic view grids in tests and benches across crates.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;
use viewplan_core::config::StrategyConfig;
use viewplan_core::{Timepoint, ViewId};

/// A view as written in fixture files: `[timepoint, setup]`.
pub type RawView = (Timepoint, u32);

/// A pair as written in fixture files: `[[tp, setup], [tp, setup]]`.
pub type RawPair = (RawView, RawView);

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// One golden planning scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub description: String,
    pub strategy: StrategyConfig,
    pub views: Vec<RawView>,
    #[serde(default)]
    pub groups: Vec<Vec<RawView>>,
    pub expected: Expected,
}

/// What a scenario must produce.
///
/// `pairs` is the pair list after `define_pairs` and `reorder_pairs`, in
/// order. Subsets are compared as sets.
#[derive(Debug, Clone, Deserialize)]
pub struct Expected {
    pub pairs: Vec<RawPair>,
    #[serde(default)]
    pub redundant: usize,
    pub subsets: Vec<ExpectedSubset>,
    #[serde(default)]
    pub default_fixed: Vec<RawView>,
    /// Pairs removed by fixing the default views.
    #[serde(default)]
    pub fixed_pruned: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedSubset {
    pub views: Vec<RawView>,
    pub pairs: Vec<RawPair>,
    #[serde(default)]
    pub groups: Vec<Vec<RawView>>,
}

impl Scenario {
    pub fn view_ids(&self) -> Vec<ViewId> {
        to_view_ids(&self.views)
    }

    pub fn group_views(&self) -> Vec<Vec<ViewId>> {
        self.groups.iter().map(|g| to_view_ids(g)).collect()
    }
}

pub fn to_view_ids(raw: &[RawView]) -> Vec<ViewId> {
    raw.iter().copied().map(ViewId::from).collect()
}

pub fn to_view_id_pair(&(a, b): &RawPair) -> (ViewId, ViewId) {
    (ViewId::from(a), ViewId::from(b))
}

/// Load every scenario under `golden/scenarios`, with its file stem.
pub fn load_scenarios() -> Vec<(String, Scenario)> {
    list_fixtures("golden/scenarios")
        .into_iter()
        .map(|path| {
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let scenario = load_fixture(&format!("golden/scenarios/{name}.json"));
            (name, scenario)
        })
        .collect()
}

/// `timepoints × setups` views, timepoint-major.
pub fn grid_views(timepoints: Timepoint, setups: u32) -> Vec<ViewId> {
    (0..timepoints)
        .flat_map(|t| (0..setups).map(move |s| ViewId::new(t, s)))
        .collect()
}

/// Groups joining setup `2k` and `2k + 1` within every timepoint.
pub fn paired_setup_groups(timepoints: Timepoint, setups: u32) -> Vec<Vec<ViewId>> {
    (0..timepoints)
        .flat_map(|t| {
            (0..setups / 2).map(move |k| vec![ViewId::new(t, 2 * k), ViewId::new(t, 2 * k + 1)])
        })
        .collect()
}
