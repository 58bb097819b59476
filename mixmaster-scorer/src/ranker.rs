//! Ordering catalog entries for a query.

use log::debug;
use mixmaster_core::{Catalog, CocktailRecord, MatchScore, PreferenceSet, Scorer};
use serde::Serialize;

use crate::{PreferenceScorer, ScoringConfig, ScoringConfigError};

/// A catalog record paired with its score for one query.
///
/// Browse-all listings carry no score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredEntry<'a> {
    /// The record being listed.
    pub cocktail: &'a CocktailRecord,
    /// Match score, absent for browse-all listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<MatchScore>,
}

impl<'a> ScoredEntry<'a> {
    /// Pair a record with its score.
    #[must_use]
    pub const fn scored(cocktail: &'a CocktailRecord, score: MatchScore) -> Self {
        Self {
            cocktail,
            score: Some(score),
        }
    }

    /// List a record without a score.
    #[must_use]
    pub const fn unscored(cocktail: &'a CocktailRecord) -> Self {
        Self {
            cocktail,
            score: None,
        }
    }

    /// Total score, when the entry was scored.
    #[must_use]
    pub fn total(&self) -> Option<u8> {
        self.score.as_ref().map(MatchScore::total)
    }
}

/// Filters, orders and caps catalog entries using a [`Scorer`].
///
/// # Examples
///
/// ```
/// use mixmaster_core::{Catalog, PreferenceSet, Spirit};
/// use mixmaster_scorer::Ranker;
///
/// let catalog = Catalog::bundled().expect("bundled catalog");
/// let ranker = Ranker::default();
/// let preferences = PreferenceSet::new().with_spirit(Spirit::Gin);
/// let ranked = ranker.rank(&preferences, &catalog);
/// assert!(ranked.len() <= 10);
/// assert!(ranked.windows(2).all(|pair| pair[0].total() >= pair[1].total()));
/// ```
#[derive(Debug, Clone)]
pub struct Ranker<S = PreferenceScorer> {
    scorer: S,
    result_cap: usize,
}

impl Default for Ranker<PreferenceScorer> {
    fn default() -> Self {
        Self {
            scorer: PreferenceScorer::default(),
            result_cap: ScoringConfig::default().result_cap,
        }
    }
}

impl Ranker<PreferenceScorer> {
    /// Build a ranker around a [`PreferenceScorer`] for `config`.
    ///
    /// # Errors
    /// Propagates [`ScoringConfig::validate`] failures.
    pub fn from_config(config: ScoringConfig) -> Result<Self, ScoringConfigError> {
        let scorer = PreferenceScorer::new(config)?;
        Ok(Self {
            scorer,
            result_cap: config.result_cap,
        })
    }
}

impl<S: Scorer> Ranker<S> {
    /// Wrap an arbitrary scorer.
    ///
    /// # Errors
    /// Returns [`ScoringConfigError::ZeroResultCap`] when `result_cap` is zero.
    pub fn new(scorer: S, result_cap: usize) -> Result<Self, ScoringConfigError> {
        if result_cap == 0 {
            return Err(ScoringConfigError::ZeroResultCap);
        }
        Ok(Self { scorer, result_cap })
    }

    /// Scorer in use.
    #[must_use]
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Maximum number of recommendations returned by [`Ranker::rank`].
    #[must_use]
    pub const fn result_cap(&self) -> usize {
        self.result_cap
    }

    /// Score every record and keep the best matches.
    ///
    /// Records scoring zero are dropped. The rest are ordered by total,
    /// highest first, with ties kept in catalog order, and truncated to the
    /// result cap.
    pub fn rank<'a>(
        &self,
        preferences: &PreferenceSet,
        catalog: &'a Catalog,
    ) -> Vec<ScoredEntry<'a>> {
        let mut entries: Vec<ScoredEntry<'a>> = catalog
            .iter()
            .map(|cocktail| ScoredEntry::scored(cocktail, self.scorer.score(preferences, cocktail)))
            .filter(|entry| entry.score.as_ref().is_some_and(MatchScore::is_match))
            .collect();
        let matched = entries.len();
        // `sort_by` is stable, which keeps catalog order between equal totals.
        entries.sort_by(|left, right| right.total().cmp(&left.total()));
        entries.truncate(self.result_cap);
        debug!(
            "ranked {matched} of {} cocktails, returning {}",
            catalog.len(),
            entries.len()
        );
        entries
    }

    /// List every record unscored, in catalog order.
    pub fn browse_all<'a>(&self, catalog: &'a Catalog) -> Vec<ScoredEntry<'a>> {
        catalog.iter().map(ScoredEntry::unscored).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mixmaster_core::test_support::{CocktailBuilder, catalog_of};
    use mixmaster_core::{Dimension, Flavor, Season, Spirit};
    use rstest::{fixture, rstest};

    /// Awards each record a fixed score taken from its strength rating.
    struct StrengthAsScore;

    impl Scorer for StrengthAsScore {
        fn score(&self, _preferences: &PreferenceSet, cocktail: &CocktailRecord) -> MatchScore {
            let rating = cocktail.strength_rating().get();
            let points = if rating == 1 { 0 } else { rating };
            MatchScore::from_contributions([(Dimension::Strength, points)])
        }
    }

    #[fixture]
    fn catalog() -> Catalog {
        catalog_of([
            CocktailBuilder::new("Gimlet").strength(6),
            CocktailBuilder::new("Shirley Temple").strength(1),
            CocktailBuilder::new("Martinez").strength(8),
            CocktailBuilder::new("Southside").strength(6),
            CocktailBuilder::new("Bramble").strength(4),
        ])
        .unwrap()
    }

    fn names<'a>(entries: &[ScoredEntry<'a>]) -> Vec<&'a str> {
        entries.iter().map(|entry| entry.cocktail.name()).collect()
    }

    #[rstest]
    fn drops_zero_scores_and_sorts_stably(catalog: Catalog) {
        let ranker = Ranker::new(StrengthAsScore, 10).unwrap();
        let ranked = ranker.rank(&PreferenceSet::new(), &catalog);
        assert_eq!(
            names(&ranked),
            vec!["Martinez", "Gimlet", "Southside", "Bramble"]
        );
    }

    #[rstest]
    fn truncates_to_the_cap(catalog: Catalog) {
        let ranker = Ranker::new(StrengthAsScore, 2).unwrap();
        let ranked = ranker.rank(&PreferenceSet::new(), &catalog);
        assert_eq!(names(&ranked), vec!["Martinez", "Gimlet"]);
    }

    #[rstest]
    fn browse_all_lists_everything_unscored(catalog: Catalog) {
        let ranker = Ranker::new(StrengthAsScore, 1).unwrap();
        let listed = ranker.browse_all(&catalog);
        assert_eq!(listed.len(), catalog.len());
        assert!(listed.iter().all(|entry| entry.score.is_none()));
        assert_eq!(names(&listed).first(), Some(&"Gimlet"));
    }

    #[rstest]
    fn zero_cap_is_refused() {
        assert!(matches!(
            Ranker::new(StrengthAsScore, 0),
            Err(ScoringConfigError::ZeroResultCap)
        ));
    }

    #[rstest]
    fn default_ranker_uses_preference_scoring() {
        let catalog = catalog_of([
            CocktailBuilder::new("Dark and Stormy")
                .spirit(Spirit::Rum)
                .flavors(&[Flavor::Sweet])
                .seasons(&[Season::Winter]),
            CocktailBuilder::new("Tom Collins")
                .spirit(Spirit::Gin)
                .flavors(&[Flavor::Citrus])
                .seasons(&[Season::Summer]),
        ])
        .unwrap();
        let preferences = PreferenceSet::new()
            .with_spirit(Spirit::Gin)
            .with_season(Season::Summer);
        let ranked = Ranker::default().rank(&preferences, &catalog);
        assert_eq!(names(&ranked).first(), Some(&"Tom Collins"));
    }

    #[rstest]
    fn serialises_scores_only_when_present(catalog: Catalog) {
        let ranker = Ranker::new(StrengthAsScore, 10).unwrap();
        let listed = ranker.browse_all(&catalog);
        let json = serde_json::to_value(listed.first().unwrap()).unwrap();
        assert!(json.get("score").is_none());
        assert_eq!(json["cocktail"]["name"], "Gimlet");
    }
}
