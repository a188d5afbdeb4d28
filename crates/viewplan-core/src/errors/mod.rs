//! Error handling for viewplan.
//! One error enum per concern, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod pairwise_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use pairwise_error::PairwiseError;
