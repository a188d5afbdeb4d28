//! # viewplan-pairwise
//!
//! Plans which pairs of views a registration run compares.
//!
//! A [`PairwiseSetup`] takes views, groups of rigidly linked views and a
//! [`PairingStrategy`], and produces independent [`Subset`]s: candidate
//! pairs filtered for redundancy and overlap, partitioned into connected
//! components, with anchor views fixed. [`plan`] runs the whole pipeline
//! from a [`viewplan_core::PlanConfig`].

pub mod group;
pub mod pair;
pub mod plan;
pub mod range;
pub mod setup;
pub mod strategies;
pub mod subset;

pub use group::Group;
pub use pair::{Pair, PairPartition};
pub use plan::{plan, Plan, PlanReport};
pub use range::{AllInRange, RangeComparator, ReferenceTimepointRange, TimepointRange};
pub use setup::PairwiseSetup;
pub use strategies::{
    AllToAll, AllToAllRange, AnyStrategy, IndividualTimepoints, PairingStrategy,
    ReferenceTimepoint,
};
pub use subset::Subset;
