//! Preference sets: one validated value per dimension for a single query.
//!
//! A set is assembled from `dimension=value` assertions. Repeated assertions
//! for the same dimension resolve to the last one. Unset dimensions take the
//! caller's reset defaults, so a partial query is never ambiguous.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use serde::Serialize;
use thiserror::Error;

use crate::{
    Dimension, Flavor, Occasion, Season, Skill, Spirit, Strength, StrengthError, VocabularyError,
};

/// A single `dimension=value` statement supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assertion {
    /// Dimension being set.
    pub dimension: Dimension,
    /// Raw value, validated when the assertion is applied.
    pub value: String,
}

impl Assertion {
    /// Build an assertion from a dimension and raw value.
    #[must_use]
    pub fn new(dimension: Dimension, value: impl Into<String>) -> Self {
        Self {
            dimension,
            value: value.into(),
        }
    }
}

/// Raised when an assertion carries a value outside its dimension's range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPreferenceError {
    /// The value is not part of the dimension's vocabulary.
    #[error("invalid {dimension} preference: {source}")]
    Vocabulary {
        /// Dimension that received the value.
        dimension: Dimension,
        /// Underlying vocabulary failure.
        #[source]
        source: VocabularyError,
    },
    /// The strength was not a whole number in range.
    #[error("invalid strength preference: {source}")]
    Strength {
        /// Underlying strength failure.
        #[source]
        source: StrengthError,
    },
}

impl InvalidPreferenceError {
    /// Dimension the rejected assertion targeted.
    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        match self {
            Self::Vocabulary { dimension, .. } => *dimension,
            Self::Strength { .. } => Dimension::Strength,
        }
    }
}

/// Validated preferences for one query.
///
/// # Examples
/// ```
/// use mixmaster_core::{Assertion, Dimension, PreferenceSet, Spirit};
///
/// let preferences = PreferenceSet::from_assertions([
///     Assertion::new(Dimension::Spirit, "gin"),
///     Assertion::new(Dimension::Spirit, "rum"),
/// ])
/// .expect("valid assertions");
/// assert_eq!(preferences.spirit(), Spirit::Rum);
/// assert_eq!(preferences.strength().get(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferenceSet {
    spirit: Spirit,
    flavor: Flavor,
    skill: Skill,
    strength: Strength,
    occasion: Occasion,
    season: Season,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    rejected: BTreeSet<Dimension>,
}

/// Strength assumed when the caller does not state one.
pub const DEFAULT_STRENGTH: Strength = Strength(7);

impl Default for PreferenceSet {
    fn default() -> Self {
        Self {
            spirit: Spirit::NoPreference,
            flavor: Flavor::Citrus,
            skill: Skill::Beginner,
            strength: DEFAULT_STRENGTH,
            occasion: Occasion::CasualRelaxing,
            season: Season::AllSeasons,
            rejected: BTreeSet::new(),
        }
    }
}

impl PreferenceSet {
    /// Start from the default preferences.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set, failing on any assertion whose value is invalid.
    ///
    /// Assertions apply in order; the last one per dimension wins, so an
    /// invalid value that is later overwritten by a valid one is not an
    /// error.
    ///
    /// # Errors
    /// Returns the first [`InvalidPreferenceError`] still standing after all
    /// assertions are applied, in dimension order.
    pub fn from_assertions<I>(assertions: I) -> Result<Self, InvalidPreferenceError>
    where
        I: IntoIterator<Item = Assertion>,
    {
        let (preferences, rejections) = Self::assemble(assertions);
        match rejections.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(preferences),
        }
    }

    /// Build a set without failing.
    ///
    /// Dimensions whose last assertion was invalid are marked rejected and
    /// score nothing. The returned errors, one per rejected dimension, are
    /// meant for the caller's diagnostic channel.
    pub fn assemble<I>(assertions: I) -> (Self, Vec<InvalidPreferenceError>)
    where
        I: IntoIterator<Item = Assertion>,
    {
        let mut preferences = Self::default();
        let mut pending = BTreeMap::new();
        for assertion in assertions {
            let dimension = assertion.dimension;
            match preferences.apply(&assertion) {
                Ok(()) => {
                    pending.remove(&dimension);
                }
                Err(err) => {
                    debug!("rejected {dimension} assertion '{}': {err}", assertion.value);
                    pending.insert(dimension, err);
                }
            }
        }
        (preferences, pending.into_values().collect())
    }

    /// Apply one assertion in place.
    ///
    /// A valid value replaces the current one and clears any rejection of the
    /// dimension. An invalid value leaves the current value untouched but
    /// marks the dimension rejected.
    ///
    /// # Errors
    /// Returns [`InvalidPreferenceError`] when the value is invalid.
    pub fn apply(&mut self, assertion: &Assertion) -> Result<(), InvalidPreferenceError> {
        let dimension = assertion.dimension;
        let value = assertion.value.as_str();
        let outcome = match dimension {
            Dimension::Spirit => vocabulary(dimension, value).map(|v| self.spirit = v),
            Dimension::Flavor => vocabulary(dimension, value).map(|v| self.flavor = v),
            Dimension::Skill => vocabulary(dimension, value).map(|v| self.skill = v),
            Dimension::Occasion => vocabulary(dimension, value).map(|v| self.occasion = v),
            Dimension::Season => vocabulary(dimension, value).map(|v| self.season = v),
            Dimension::Strength => value
                .parse::<Strength>()
                .map(|v| self.strength = v)
                .map_err(|source| InvalidPreferenceError::Strength { source }),
        };
        if outcome.is_ok() {
            self.rejected.remove(&dimension);
        } else {
            self.rejected.insert(dimension);
        }
        outcome
    }

    /// Preferred base spirit.
    #[must_use]
    pub const fn spirit(&self) -> Spirit {
        self.spirit
    }

    /// Preferred flavour note.
    #[must_use]
    pub const fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Stated bartending skill.
    #[must_use]
    pub const fn skill(&self) -> Skill {
        self.skill
    }

    /// Preferred strength.
    #[must_use]
    pub const fn strength(&self) -> Strength {
        self.strength
    }

    /// Occasion the drink is for.
    #[must_use]
    pub const fn occasion(&self) -> Occasion {
        self.occasion
    }

    /// Current season.
    #[must_use]
    pub const fn season(&self) -> Season {
        self.season
    }

    /// Report whether the dimension's last assertion was invalid.
    #[must_use]
    pub fn is_rejected(&self, dimension: Dimension) -> bool {
        self.rejected.contains(&dimension)
    }

    /// Iterate over rejected dimensions in dimension order.
    pub fn rejected(&self) -> impl Iterator<Item = Dimension> + '_ {
        self.rejected.iter().copied()
    }

    /// Set the spirit while returning `self` for chaining.
    #[must_use]
    pub fn with_spirit(mut self, spirit: Spirit) -> Self {
        self.spirit = spirit;
        self.rejected.remove(&Dimension::Spirit);
        self
    }

    /// Set the flavour while returning `self` for chaining.
    #[must_use]
    pub fn with_flavor(mut self, flavor: Flavor) -> Self {
        self.flavor = flavor;
        self.rejected.remove(&Dimension::Flavor);
        self
    }

    /// Set the skill while returning `self` for chaining.
    #[must_use]
    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skill = skill;
        self.rejected.remove(&Dimension::Skill);
        self
    }

    /// Set the strength while returning `self` for chaining.
    #[must_use]
    pub fn with_strength(mut self, strength: Strength) -> Self {
        self.strength = strength;
        self.rejected.remove(&Dimension::Strength);
        self
    }

    /// Set the occasion while returning `self` for chaining.
    #[must_use]
    pub fn with_occasion(mut self, occasion: Occasion) -> Self {
        self.occasion = occasion;
        self.rejected.remove(&Dimension::Occasion);
        self
    }

    /// Set the season while returning `self` for chaining.
    #[must_use]
    pub fn with_season(mut self, season: Season) -> Self {
        self.season = season;
        self.rejected.remove(&Dimension::Season);
        self
    }
}

fn vocabulary<T>(dimension: Dimension, value: &str) -> Result<T, InvalidPreferenceError>
where
    T: std::str::FromStr<Err = VocabularyError>,
{
    value
        .parse()
        .map_err(|source| InvalidPreferenceError::Vocabulary { dimension, source })
}
