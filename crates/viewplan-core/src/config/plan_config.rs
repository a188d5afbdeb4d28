//! Top-level plan configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{PipelineConfig, StrategyConfig, StrategyKind};
use crate::constants::{ENV_RANGE, ENV_REFERENCE_TIMEPOINT, ENV_STRATEGY};
use crate::errors::ConfigError;
use crate::types::Timepoint;

/// Project config file name, looked up in the directory passed to `load`.
pub const PROJECT_CONFIG_FILE: &str = "viewplan.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (`PlanOverrides`)
/// 2. Environment variables (`VIEWPLAN_*`)
/// 3. Project config (`viewplan.toml` in the given directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlanConfig {
    pub strategy: StrategyConfig,
    pub pipeline: PipelineConfig,
}

/// Overrides supplied by the embedding application.
#[derive(Debug, Clone, Default)]
pub struct PlanOverrides {
    pub strategy: Option<StrategyKind>,
    pub range: Option<i64>,
    pub reference_timepoint: Option<Timepoint>,
    pub sort_subsets: Option<bool>,
}

impl PlanConfig {
    /// Load configuration with layered resolution.
    ///
    /// A missing `viewplan.toml` is not an error; an unreadable or invalid one is.
    pub fn load(root: &Path, overrides: Option<&PlanOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &PlanConfig) -> Result<(), ConfigError> {
        if let Some(range) = config.strategy.range {
            if range < 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "strategy.range".to_string(),
                    message: "must be zero or positive".to_string(),
                });
            }
        }
        if config.strategy.effective_kind() == StrategyKind::ReferenceTimepoint
            && config.strategy.reference_timepoint.is_none()
        {
            return Err(ConfigError::ValidationFailed {
                field: "strategy.reference_timepoint".to_string(),
                message: "required by the reference_timepoint strategy".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut PlanConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: PlanConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut PlanConfig, other: &PlanConfig) {
        if other.strategy.kind.is_some() {
            base.strategy.kind = other.strategy.kind;
        }
        if other.strategy.range.is_some() {
            base.strategy.range = other.strategy.range;
        }
        if other.strategy.reference_timepoint.is_some() {
            base.strategy.reference_timepoint = other.strategy.reference_timepoint;
        }

        if other.pipeline.remove_non_overlapping.is_some() {
            base.pipeline.remove_non_overlapping = other.pipeline.remove_non_overlapping;
        }
        if other.pipeline.sort_subsets.is_some() {
            base.pipeline.sort_subsets = other.pipeline.sort_subsets;
        }
        if other.pipeline.fix_default_views.is_some() {
            base.pipeline.fix_default_views = other.pipeline.fix_default_views;
        }
        if !other.pipeline.fixed_timepoints.is_empty() {
            base.pipeline.fixed_timepoints = other.pipeline.fixed_timepoints.clone();
        }
    }

    /// Apply environment variable overrides.
    /// An unknown strategy name is an error; unparsable numbers are ignored.
    fn apply_env_overrides(config: &mut PlanConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var(ENV_STRATEGY) {
            config.strategy.kind = Some(val.parse()?);
        }
        if let Ok(val) = std::env::var(ENV_RANGE) {
            if let Ok(v) = val.parse::<i64>() {
                config.strategy.range = Some(v);
            }
        }
        if let Ok(val) = std::env::var(ENV_REFERENCE_TIMEPOINT) {
            if let Ok(v) = val.parse::<Timepoint>() {
                config.strategy.reference_timepoint = Some(v);
            }
        }
        Ok(())
    }

    fn apply_overrides(config: &mut PlanConfig, o: &PlanOverrides) {
        if let Some(kind) = o.strategy {
            config.strategy.kind = Some(kind);
        }
        if let Some(range) = o.range {
            config.strategy.range = Some(range);
        }
        if let Some(tp) = o.reference_timepoint {
            config.strategy.reference_timepoint = Some(tp);
        }
        if let Some(sort) = o.sort_subsets {
            config.pipeline.sort_subsets = Some(sort);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
