/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "VIEWPLAN_LOG";

/// Filter used when `VIEWPLAN_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "viewplan=info";

/// Radius used by `all_to_all_range` when the config names none.
pub const DEFAULT_TIMEPOINT_RANGE: i64 = 1;

/// Radius that restricts comparisons to a single timepoint.
pub const SAME_TIMEPOINT_RANGE: i64 = 0;

/// Environment overrides.
pub const ENV_STRATEGY: &str = "VIEWPLAN_STRATEGY";
pub const ENV_RANGE: &str = "VIEWPLAN_RANGE";
pub const ENV_REFERENCE_TIMEPOINT: &str = "VIEWPLAN_REFERENCE_TIMEPOINT";
