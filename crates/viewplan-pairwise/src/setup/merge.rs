//! Explicit merging of subsets by index.

use std::collections::BTreeSet;

use viewplan_core::ViewToken;

use crate::subset::Subset;

/// Merge the subsets at `indices` into one, placed where the lowest index was.
///
/// Out-of-range and repeated indices are ignored. Fewer than two distinct
/// valid indices is a no-op. Returns whether a merge happened.
pub fn merge_subsets<V: ViewToken>(subsets: &mut Vec<Subset<V>>, indices: &[usize]) -> bool {
    let valid: BTreeSet<usize> = indices
        .iter()
        .copied()
        .filter(|&i| i < subsets.len())
        .collect();
    if valid.len() < 2 {
        tracing::debug!(requested = indices.len(), "degenerate subset merge ignored");
        return false;
    }

    let mut parts: Vec<Subset<V>> = valid.iter().rev().map(|&i| subsets.remove(i)).collect();
    parts.reverse();
    let target = *valid.iter().next().unwrap_or(&0);
    subsets.insert(target, Subset::merge(parts));
    true
}
