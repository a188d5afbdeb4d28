//! A strategy chosen at runtime from configuration.

use viewplan_core::config::{StrategyConfig, StrategyKind};
use viewplan_core::{ConfigError, HasTimepoint, PairwiseError, ViewToken};

use super::{AllToAll, AllToAllRange, IndividualTimepoints, PairingStrategy, ReferenceTimepoint};
use crate::group::Group;
use crate::pair::Pair;
use crate::range::TimepointRange;
use crate::subset::Subset;

/// Any built-in strategy, picked at runtime from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyStrategy {
    AllToAll(AllToAll),
    AllToAllRange(AllToAllRange<TimepointRange>),
    IndividualTimepoints(IndividualTimepoints),
    ReferenceTimepoint(ReferenceTimepoint),
}

impl AnyStrategy {
    /// Build the configured strategy, rejecting incomplete parameters.
    pub fn from_config(config: &StrategyConfig) -> Result<Self, ConfigError> {
        let strategy = match config.effective_kind() {
            StrategyKind::AllToAll => Self::AllToAll(AllToAll),
            StrategyKind::AllToAllRange => {
                let radius = config.effective_range();
                if radius < 0 {
                    return Err(ConfigError::ValidationFailed {
                        field: "strategy.range".to_string(),
                        message: "must be zero or positive".to_string(),
                    });
                }
                Self::AllToAllRange(AllToAllRange::new(TimepointRange::new(radius)))
            }
            StrategyKind::IndividualTimepoints => {
                Self::IndividualTimepoints(IndividualTimepoints::new())
            }
            StrategyKind::ReferenceTimepoint => {
                let reference =
                    config
                        .reference_timepoint
                        .ok_or_else(|| ConfigError::ValidationFailed {
                            field: "strategy.reference_timepoint".to_string(),
                            message: "required by the reference_timepoint strategy".to_string(),
                        })?;
                Self::ReferenceTimepoint(ReferenceTimepoint::new(reference))
            }
        };
        Ok(strategy)
    }

    /// The configuration kind this strategy corresponds to.
    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::AllToAll(_) => StrategyKind::AllToAll,
            Self::AllToAllRange(_) => StrategyKind::AllToAllRange,
            Self::IndividualTimepoints(_) => StrategyKind::IndividualTimepoints,
            Self::ReferenceTimepoint(_) => StrategyKind::ReferenceTimepoint,
        }
    }

    fn inner<V: ViewToken + HasTimepoint>(&self) -> &dyn PairingStrategy<V> {
        match self {
            Self::AllToAll(s) => s,
            Self::AllToAllRange(s) => s,
            Self::IndividualTimepoints(s) => s,
            Self::ReferenceTimepoint(s) => s,
        }
    }
}

impl Default for AnyStrategy {
    fn default() -> Self {
        Self::AllToAll(AllToAll)
    }
}

impl<V: ViewToken + HasTimepoint> PairingStrategy<V> for AnyStrategy {
    fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    fn in_range(&self, a: &V, b: &V) -> bool {
        self.inner::<V>().in_range(a, b)
    }

    fn validate(&self, views: &[V]) -> Result<(), PairwiseError> {
        self.inner::<V>().validate(views)
    }

    fn define_pairs_abstract(&self, views: &[V], groups: &[Group<V>]) -> Vec<Pair<V>> {
        self.inner::<V>().define_pairs_abstract(views, groups)
    }

    fn default_fixed_views(&self, views: &[V]) -> Vec<V> {
        self.inner::<V>().default_fixed_views(views)
    }

    fn detect_subsets(
        &self,
        views: &[V],
        pairs: &[Pair<V>],
        groups: &[Group<V>],
    ) -> Result<Vec<Subset<V>>, PairwiseError> {
        self.inner::<V>().detect_subsets(views, pairs, groups)
    }
}

#[cfg(test)]
mod tests {
    use viewplan_core::ViewId;

    use super::*;

    #[test]
    fn default_config_is_all_to_all() {
        let s = AnyStrategy::from_config(&StrategyConfig::default()).unwrap();
        assert_eq!(s, AnyStrategy::AllToAll(AllToAll));
        assert_eq!(PairingStrategy::<ViewId>::name(&s), "all_to_all");
    }

    #[test]
    fn range_defaults_to_one_timepoint() {
        let config = StrategyConfig {
            kind: Some(StrategyKind::AllToAllRange),
            ..Default::default()
        };
        let s = AnyStrategy::from_config(&config).unwrap();
        assert!(s.in_range(&ViewId::new(0, 0), &ViewId::new(1, 0)));
        assert!(!s.in_range(&ViewId::new(0, 0), &ViewId::new(2, 0)));
    }

    #[test]
    fn reference_without_timepoint_is_rejected() {
        let config = StrategyConfig {
            kind: Some(StrategyKind::ReferenceTimepoint),
            ..Default::default()
        };
        assert!(matches!(
            AnyStrategy::from_config(&config),
            Err(ConfigError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn reference_delegates_fixed_views() {
        let config = StrategyConfig {
            kind: Some(StrategyKind::ReferenceTimepoint),
            reference_timepoint: Some(2),
            ..Default::default()
        };
        let s = AnyStrategy::from_config(&config).unwrap();
        let views = vec![ViewId::new(1, 0), ViewId::new(2, 0), ViewId::new(2, 1)];
        assert_eq!(
            s.default_fixed_views(&views),
            vec![ViewId::new(2, 0), ViewId::new(2, 1)]
        );
    }
}
