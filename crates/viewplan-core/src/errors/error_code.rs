//! Stable error codes for callers that report errors across a process boundary.

/// Every error enum implements this to provide a structured code string.
pub trait ErrorCode {
    /// Returns the code string (e.g., "NO_VIEWS").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const NO_VIEWS: &str = "NO_VIEWS";
pub const GROUP_SPLIT: &str = "GROUP_SPLIT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
