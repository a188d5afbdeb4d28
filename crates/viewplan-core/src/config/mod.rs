//! Configuration system for viewplan.
//! TOML-based, layered resolution: overrides > env > project file > defaults.

pub mod pipeline_config;
pub mod plan_config;
pub mod strategy_config;

pub use pipeline_config::PipelineConfig;
pub use plan_config::{PlanConfig, PlanOverrides};
pub use strategy_config::{StrategyConfig, StrategyKind};
