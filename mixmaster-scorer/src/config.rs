//! Tunable weights and limits for preference scoring.

use mixmaster_core::{Dimension, MatchScore};
use serde::Serialize;

use crate::ScoringConfigError;

/// Maximum points each dimension can award.
///
/// The default split gives the two taste dimensions (spirit and flavour) 20
/// points each and the remaining four 15 points each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionWeights {
    /// Points for a matching base spirit.
    pub spirit: u8,
    /// Points for a matching flavour note.
    pub flavor: u8,
    /// Points when the caller's skill covers the recipe.
    pub skill: u8,
    /// Points for an exact strength match, tapering across the tolerance band.
    pub strength: u8,
    /// Points for a matching occasion.
    pub occasion: u8,
    /// Points for a matching season.
    pub season: u8,
}

impl Default for DimensionWeights {
    fn default() -> Self {
        Self {
            spirit: 20,
            flavor: 20,
            skill: 15,
            strength: 15,
            occasion: 15,
            season: 15,
        }
    }
}

impl DimensionWeights {
    /// Weight configured for `dimension`.
    #[must_use]
    pub const fn for_dimension(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Spirit => self.spirit,
            Dimension::Flavor => self.flavor,
            Dimension::Skill => self.skill,
            Dimension::Strength => self.strength,
            Dimension::Occasion => self.occasion,
            Dimension::Season => self.season,
        }
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total(&self) -> u32 {
        Dimension::ALL
            .iter()
            .map(|&dimension| u32::from(self.for_dimension(dimension)))
            .sum()
    }
}

/// Complete scoring and ranking configuration.
///
/// # Examples
///
/// ```
/// use mixmaster_scorer::ScoringConfig;
///
/// let config = ScoringConfig::default();
/// assert_eq!(config.weights.spirit, 20);
/// assert_eq!(config.tolerance_band, 4);
/// assert_eq!(config.result_cap, 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoringConfig {
    /// Per-dimension weights.
    pub weights: DimensionWeights,
    /// Strength distance at which the strength contribution reaches zero.
    pub tolerance_band: u8,
    /// Maximum number of recommendations returned.
    pub result_cap: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: DimensionWeights::default(),
            tolerance_band: 4,
            result_cap: 10,
        }
    }
}

impl ScoringConfig {
    /// Check the configuration can produce scores in `0..=100`.
    ///
    /// # Errors
    /// Returns [`ScoringConfigError::WeightSum`] when the weights do not sum
    /// to 100, [`ScoringConfigError::ZeroToleranceBand`] for a zero band and
    /// [`ScoringConfigError::ZeroResultCap`] for a zero cap.
    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        let total = self.weights.total();
        if total != u32::from(MatchScore::MAX) {
            return Err(ScoringConfigError::WeightSum { total });
        }
        if self.tolerance_band == 0 {
            return Err(ScoringConfigError::ZeroToleranceBand);
        }
        if self.result_cap == 0 {
            return Err(ScoringConfigError::ZeroResultCap);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_weights_fill_the_scale() {
        assert_eq!(DimensionWeights::default().total(), 100);
    }

    #[rstest]
    fn lookup_follows_dimension() {
        let weights = DimensionWeights {
            strength: 30,
            ..DimensionWeights::default()
        };
        assert_eq!(weights.for_dimension(Dimension::Strength), 30);
        assert_eq!(weights.for_dimension(Dimension::Flavor), 20);
    }

    #[rstest]
    #[case(
        ScoringConfig { weights: DimensionWeights { spirit: 25, ..DimensionWeights::default() }, ..ScoringConfig::default() },
        ScoringConfigError::WeightSum { total: 105 },
    )]
    #[case(
        ScoringConfig { tolerance_band: 0, ..ScoringConfig::default() },
        ScoringConfigError::ZeroToleranceBand,
    )]
    #[case(
        ScoringConfig { result_cap: 0, ..ScoringConfig::default() },
        ScoringConfigError::ZeroResultCap,
    )]
    fn rejects_unusable_configs(#[case] config: ScoringConfig, #[case] expected: ScoringConfigError) {
        assert_eq!(config.validate(), Err(expected));
    }

    #[rstest]
    fn accepts_rebalanced_weights() {
        let config = ScoringConfig {
            weights: DimensionWeights {
                spirit: 40,
                flavor: 10,
                skill: 10,
                strength: 20,
                occasion: 10,
                season: 10,
            },
            tolerance_band: 3,
            result_cap: 1,
        };
        assert_eq!(config.validate(), Ok(()));
    }
}
