//! Score cocktails against a preference set.
//!
//! The [`Scorer`] trait assigns a [`MatchScore`] to a
//! [`CocktailRecord`](crate::CocktailRecord) given a caller's
//! [`PreferenceSet`](crate::PreferenceSet). Scores are integers in `0..=100`
//! broken down by [`Dimension`].

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{CocktailRecord, Dimension, PreferenceSet};

/// Total match score with its per-dimension breakdown.
///
/// # Examples
///
/// ```
/// use mixmaster_core::{Dimension, MatchScore};
///
/// let score = MatchScore::from_contributions([
///     (Dimension::Spirit, 20),
///     (Dimension::Season, 15),
/// ]);
/// assert_eq!(score.total(), 35);
/// assert_eq!(score.contribution(Dimension::Flavor), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchScore {
    total: u8,
    contributions: BTreeMap<Dimension, u8>,
}

impl MatchScore {
    /// Highest attainable total.
    pub const MAX: u8 = 100;

    /// A score with no contributing dimension.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Build a score from per-dimension points.
    ///
    /// Points for a repeated dimension accumulate. The total is clamped to
    /// [`MatchScore::MAX`].
    #[must_use]
    pub fn from_contributions<I>(contributions: I) -> Self
    where
        I: IntoIterator<Item = (Dimension, u8)>,
    {
        let mut breakdown = BTreeMap::new();
        for (dimension, points) in contributions {
            let slot = breakdown.entry(dimension).or_insert(0_u8);
            *slot = slot.saturating_add(points);
        }
        let sum = breakdown
            .values()
            .fold(0_u16, |acc, &points| acc.saturating_add(u16::from(points)));
        let total = u8::try_from(sum.min(u16::from(Self::MAX))).unwrap_or(Self::MAX);
        Self {
            total,
            contributions: breakdown,
        }
    }

    /// Sum of all contributions, at most [`MatchScore::MAX`].
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Points awarded for `dimension`.
    #[must_use]
    pub fn contribution(&self, dimension: Dimension) -> u8 {
        self.contributions.get(&dimension).copied().unwrap_or(0)
    }

    /// Full breakdown in dimension order.
    #[must_use]
    pub const fn contributions(&self) -> &BTreeMap<Dimension, u8> {
        &self.contributions
    }

    /// Dimensions that awarded at least one point.
    pub fn contributing(&self) -> impl Iterator<Item = Dimension> + '_ {
        self.contributions
            .iter()
            .filter(|(_, points)| **points > 0)
            .map(|(dimension, _)| *dimension)
    }

    /// Report whether the cocktail qualifies as a recommendation.
    #[must_use]
    pub const fn is_match(&self) -> bool {
        self.total > 0
    }
}

/// Calculate how well a cocktail matches a preference set.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one scorer can
/// serve concurrent requests. Scoring is infallible and deterministic: the
/// same inputs always produce the same [`MatchScore`]. Dimensions rejected in
/// `preferences` must contribute nothing.
///
/// # Examples
///
/// ```rust
/// use mixmaster_core::{CocktailRecord, Dimension, MatchScore, PreferenceSet, Scorer};
///
/// struct SpiritOnly;
///
/// impl Scorer for SpiritOnly {
///     fn score(&self, preferences: &PreferenceSet, cocktail: &CocktailRecord) -> MatchScore {
///         if preferences.spirit() == cocktail.base_spirit() {
///             MatchScore::from_contributions([(Dimension::Spirit, 100)])
///         } else {
///             MatchScore::zero()
///         }
///     }
/// }
///
/// let catalog = mixmaster_core::Catalog::bundled().expect("bundled catalog");
/// let mojito = catalog.by_name("Mojito").expect("mojito");
/// let preferences = PreferenceSet::new().with_spirit(mixmaster_core::Spirit::Rum);
/// assert_eq!(SpiritOnly.score(&preferences, mojito).total(), 100);
/// ```
pub trait Scorer: Send + Sync {
    /// Return the score of `cocktail` for `preferences`.
    fn score(&self, preferences: &PreferenceSet, cocktail: &CocktailRecord) -> MatchScore;
}
