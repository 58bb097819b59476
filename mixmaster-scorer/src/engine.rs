//! Weighted preference scoring.
//!
//! Each dimension awards either its full weight or nothing, except strength,
//! which tapers linearly to zero across the tolerance band. Arithmetic stays
//! in integers so identical inputs always produce identical totals.

use mixmaster_core::{
    CocktailRecord, Dimension, MatchScore, PreferenceSet, Scorer, Season, Skill, Spirit, Strength,
};

use crate::{ScoringConfig, ScoringConfigError};

/// Scores cocktails against preferences using configurable weights.
///
/// # Examples
///
/// ```
/// use mixmaster_core::{Catalog, PreferenceSet, Scorer, Spirit};
/// use mixmaster_scorer::PreferenceScorer;
///
/// let catalog = Catalog::bundled().expect("bundled catalog");
/// let mojito = catalog.by_name("Mojito").expect("mojito");
/// let preferences = PreferenceSet::new().with_spirit(Spirit::Rum);
/// let score = PreferenceScorer::default().score(&preferences, mojito);
/// assert!(score.total() >= 20);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreferenceScorer {
    config: ScoringConfig,
}

impl PreferenceScorer {
    /// Build a scorer from a validated configuration.
    ///
    /// # Errors
    /// Propagates [`ScoringConfig::validate`] failures.
    pub fn new(config: ScoringConfig) -> Result<Self, ScoringConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    fn award(&self, dimension: Dimension, matched: bool) -> u8 {
        if matched {
            self.config.weights.for_dimension(dimension)
        } else {
            0
        }
    }

    #[expect(
        clippy::integer_division,
        reason = "strength taper is rounded half up in integer arithmetic"
    )]
    fn strength_points(&self, preferred: Strength, rating: Strength) -> u8 {
        let weight = u32::from(self.config.weights.strength);
        let band = u32::from(self.config.tolerance_band);
        let distance = u32::from(preferred.distance(rating));
        if band == 0 || distance >= band {
            return 0;
        }
        // weight * (band - distance) / band, rounded half up.
        let doubled = 2 * weight * (band - distance);
        let points = (doubled + band) / (2 * band);
        u8::try_from(points).unwrap_or(u8::MAX)
    }
}

fn spirit_matches(preferred: Spirit, base: Spirit) -> bool {
    preferred.is_no_preference() || preferred == base
}

fn skill_covers(stated: Skill, required: Skill) -> bool {
    stated >= required
}

fn season_matches(preferred: Season, cocktail: &CocktailRecord) -> bool {
    preferred.is_all_seasons()
        || cocktail.has_season(preferred)
        || cocktail.has_season(Season::AllSeasons)
}

impl Scorer for PreferenceScorer {
    fn score(&self, preferences: &PreferenceSet, cocktail: &CocktailRecord) -> MatchScore {
        let contributions = Dimension::ALL.iter().map(|&dimension| {
            if preferences.is_rejected(dimension) {
                return (dimension, 0);
            }
            let points = match dimension {
                Dimension::Spirit => self.award(
                    dimension,
                    spirit_matches(preferences.spirit(), cocktail.base_spirit()),
                ),
                Dimension::Flavor => {
                    self.award(dimension, cocktail.has_flavor(preferences.flavor()))
                }
                Dimension::Skill => self.award(
                    dimension,
                    skill_covers(preferences.skill(), cocktail.skill_required()),
                ),
                Dimension::Strength => {
                    self.strength_points(preferences.strength(), cocktail.strength_rating())
                }
                Dimension::Occasion => {
                    self.award(dimension, cocktail.has_occasion(preferences.occasion()))
                }
                Dimension::Season => {
                    self.award(dimension, season_matches(preferences.season(), cocktail))
                }
            };
            (dimension, points)
        });
        MatchScore::from_contributions(contributions)
    }
}
