use std::fmt::Debug;
use std::hash::Hash;

use crate::types::Timepoint;

/// Anything the planner can treat as a view: comparable, hashable, totally ordered.
///
/// Blanket-implemented; the planner never looks inside a token.
pub trait ViewToken: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> ViewToken for T {}

/// Views that belong to a timepoint. Required by the timepoint-aware strategies.
pub trait HasTimepoint {
    fn timepoint(&self) -> Timepoint;
}

impl<T: HasTimepoint> HasTimepoint for &T {
    fn timepoint(&self) -> Timepoint {
        (**self).timepoint()
    }
}
