//! Shared value types.

pub mod collections;
pub mod view_id;

pub use view_id::{Timepoint, ViewId};
