//! Closed vocabularies shared by preferences and catalog records.
//!
//! Every enum-typed attribute of a [`CocktailRecord`](crate::CocktailRecord)
//! draws from the same value set as the matching
//! [`PreferenceSet`](crate::PreferenceSet) dimension, so the two are always
//! comparable.
//!
//! # Examples
//! ```
//! use mixmaster_core::{Season, Spirit};
//!
//! assert_eq!(Spirit::NoPreference.as_str(), "no_preference");
//! assert_eq!("Summer".parse::<Season>(), Ok(Season::Summer));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Raised when a token is not part of a closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {vocabulary} '{value}' (expected one of: {expected})")]
pub struct VocabularyError {
    /// Name of the vocabulary that rejected the token.
    pub vocabulary: &'static str,
    /// The rejected token as supplied.
    pub value: String,
    /// Comma-separated list of accepted tokens.
    pub expected: String,
}

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident as $label:literal {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Return the canonical lowercase token.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = VocabularyError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let token = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.as_str().eq_ignore_ascii_case(token))
                    .ok_or_else(|| VocabularyError {
                        vocabulary: $label,
                        value: s.to_owned(),
                        expected: Self::ALL
                            .iter()
                            .map(|candidate| candidate.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

vocabulary! {
    /// The six preference dimensions a query is scored on.
    Dimension as "dimension" {
        /// Base spirit.
        Spirit => "spirit",
        /// Dominant flavour note.
        Flavor => "flavor",
        /// Bartending skill.
        Skill => "skill",
        /// Alcohol strength on a 1 to 10 scale.
        Strength => "strength",
        /// Social context.
        Occasion => "occasion",
        /// Time of year.
        Season => "season",
    }
}

vocabulary! {
    /// Base spirits, plus the neutral `no_preference` choice.
    Spirit as "spirit" {
        /// Rum.
        Rum => "rum",
        /// Gin.
        Gin => "gin",
        /// Vodka.
        Vodka => "vodka",
        /// Whiskey, bourbon and rye.
        Whiskey => "whiskey",
        /// Tequila and mezcal.
        Tequila => "tequila",
        /// Any spirit is acceptable.
        NoPreference => "no_preference",
    }
}

impl Spirit {
    /// Report whether this is the neutral choice.
    #[must_use]
    pub const fn is_no_preference(self) -> bool {
        matches!(self, Self::NoPreference)
    }
}

vocabulary! {
    /// Flavour notes.
    Flavor as "flavor" {
        /// Lemon, lime and other sour notes.
        Citrus => "citrus",
        /// Sugary or fruity.
        Sweet => "sweet",
        /// Botanical and bitter notes.
        Herbal => "herbal",
        /// Cream, egg or coconut body.
        Creamy => "creamy",
        /// Spirit-forward.
        Strong => "strong",
    }
}

vocabulary! {
    /// Bartending skill, ordered from least to most demanding.
    Skill as "skill" {
        /// Basic shaking and stirring.
        Beginner => "beginner",
        /// Muddling and layering.
        Intermediate => "intermediate",
        /// Complex techniques.
        Expert => "expert",
    }
}

impl Skill {
    /// Complexity label printed for a cocktail requiring this skill.
    ///
    /// ```
    /// use mixmaster_core::Skill;
    ///
    /// assert_eq!(Skill::Expert.complexity(), "Complex");
    /// ```
    #[must_use]
    pub const fn complexity(self) -> &'static str {
        match self {
            Self::Beginner => "Simple",
            Self::Intermediate => "Moderate",
            Self::Expert => "Complex",
        }
    }
}

vocabulary! {
    /// Occasions a cocktail suits.
    Occasion as "occasion" {
        /// Party or social gathering.
        Party => "party",
        /// Romantic dinner.
        RomanticDinner => "romantic_dinner",
        /// Casual, relaxed drinking.
        CasualRelaxing => "casual_relaxing",
        /// Celebration.
        Celebration => "celebration",
        /// Digestif.
        AfterDinner => "after_dinner",
        /// Aperitif.
        Aperitif => "aperitif",
    }
}

vocabulary! {
    /// Seasons, plus the neutral `all_seasons` choice.
    Season as "season" {
        /// Spring.
        Spring => "spring",
        /// Summer.
        Summer => "summer",
        /// Autumn.
        Autumn => "autumn",
        /// Winter.
        Winter => "winter",
        /// Any time of year.
        AllSeasons => "all_seasons",
    }
}

impl Season {
    /// Report whether this is the neutral choice.
    #[must_use]
    pub const fn is_all_seasons(self) -> bool {
        matches!(self, Self::AllSeasons)
    }
}

/// Alcohol strength on the inclusive `1..=10` scale.
///
/// ```
/// use mixmaster_core::Strength;
///
/// let strength = Strength::new(7).expect("in range");
/// assert_eq!(strength.get(), 7);
/// assert!(Strength::new(11).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Strength(pub(crate) u8);

/// Raised when a strength value is not a whole number in `1..=10`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrengthError {
    /// The token could not be read as a whole number.
    #[error("strength '{value}' is not a whole number")]
    NotANumber {
        /// The rejected token.
        value: String,
    },
    /// The number lies outside the scale.
    #[error("strength {value} is outside {min}..={max}", min = Strength::MIN, max = Strength::MAX)]
    OutOfRange {
        /// The rejected number.
        value: i64,
    },
}

impl Strength {
    /// Weakest rating.
    pub const MIN: u8 = 1;
    /// Strongest rating.
    pub const MAX: u8 = 10;

    /// Wrap `value` when it lies on the scale.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Return the raw rating.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Absolute distance between two ratings.
    #[must_use]
    pub const fn distance(self, other: Self) -> u8 {
        self.0.abs_diff(other.0)
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Strength {
    type Error = StrengthError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(StrengthError::OutOfRange { value })
    }
}

impl FromStr for Strength {
    type Err = StrengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: i64 = s.trim().parse().map_err(|_| StrengthError::NotANumber {
            value: s.to_owned(),
        })?;
        Self::try_from(number)
    }
}
