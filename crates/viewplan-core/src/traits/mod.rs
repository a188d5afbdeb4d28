//! Seams between the planner and the outside world.

pub mod overlap;
pub mod view_token;

pub use overlap::OverlapDetection;
pub use view_token::{HasTimepoint, ViewToken};
